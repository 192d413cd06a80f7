//! 生成带 10% 透明留白的 Android / iOS 应用图标。

use std::process::ExitCode;

use app_icon_resizer::{cli, variants::Variant};

fn main() -> ExitCode {
    cli::run(Variant::AppIcons)
}
