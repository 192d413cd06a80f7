//! 用白底铺满的 logo 生成 Android / iOS 启动图标。

use std::process::ExitCode;

use app_icon_resizer::{cli, variants::Variant};

fn main() -> ExitCode {
    cli::run(Variant::LauncherIcon)
}
