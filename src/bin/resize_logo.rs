//! 将 logo 直接拉伸为 Android / iOS / Web 全部图标。

use std::process::ExitCode;

use app_icon_resizer::{cli, variants::Variant};

fn main() -> ExitCode {
    cli::run(Variant::LogoResize)
}
