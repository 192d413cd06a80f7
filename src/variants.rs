//! # 脚本变体
//!
//! 三个命令各自固定一张尺寸表、一个源图路径与一种变换策略。
//! 这里把它们描述为不可变的 `VariantSpec`，由 `cli` 传入批处理，
//! 批处理本身对具体变体一无所知。

use std::path::{Path, PathBuf};

use crate::icon_resizer::{IconSizeTable, ModePolicy};

/// 最低建议分辨率（边长）。
pub const MIN_SOURCE_DIMENSION: u32 = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// 不透明启动图标：白底铺满，Android + iOS。
    LauncherIcon,
    /// 透明留白应用图标：Android + iOS。
    AppIcons,
    /// 直接拉伸：Android + iOS + Web。
    LogoResize,
}

/// 单个变体的全部硬编码参数。
#[derive(Debug, Clone)]
pub struct VariantSpec {
    pub variant: Variant,
    pub name: &'static str,
    pub source: PathBuf,
    pub policy: ModePolicy,
    pub table: IconSizeTable,
    /// 成功后的后续步骤提示。
    pub next_steps: Vec<&'static str>,
}

impl Variant {
    pub fn spec(self) -> VariantSpec {
        match self {
            Self::LauncherIcon => {
                VariantSpec {
                    variant: self,
                    name: "launcher-icon",
                    source: PathBuf::from("assets/images/cadenca_new_logo.png"),
                    policy: ModePolicy::FlattenOpaque,
                    table: mobile_table(),
                    next_steps: vec![
                        "1. 运行: flutter clean",
                        "2. 运行: flutter build apk --debug",
                        "3. 安装 APK 查看新的启动图标",
                    ],
                }
            }
            Self::AppIcons => {
                VariantSpec {
                    variant: self,
                    name: "app-icons",
                    source: PathBuf::from("assets/images/cadenca_logo_light_green.png"),
                    policy: ModePolicy::PaddedTransparent,
                    table: mobile_table(),
                    next_steps: vec!["运行 'flutter clean && flutter build apk --debug' 查看新图标"],
                }
            }
            Self::LogoResize => {
                VariantSpec {
                    variant: self,
                    name: "resize-logo",
                    source: PathBuf::from("temp_logo/Cadenca Logo.png"),
                    policy: ModePolicy::DirectStretch,
                    table: IconSizeTable::concat([mobile_table(), IconSizeTable::web()]),
                    next_steps: vec![
                        "iOS 可能需要同步更新 AppIcon.appiconset 中的 Contents.json",
                    ],
                }
            }
        }
    }
}

impl VariantSpec {
    /// 源图缺失时给用户的补救提示，路径取实际查找的位置。
    pub fn guidance(&self, source: &Path) -> Vec<String> {
        let source = source.display();
        match self.variant {
            Variant::LauncherIcon => vec![
                format!("1. 将 logo 保存为 '{}'", source),
                format!("2. 确保分辨率足够高（至少 {0}x{0}）", MIN_SOURCE_DIMENSION),
                "3. 重新运行本命令".to_string(),
            ],
            Variant::AppIcons | Variant::LogoResize => vec![
                format!("请将 logo 放到 '{}'", source),
                format!("建议分辨率至少 {0}x{0}", MIN_SOURCE_DIMENSION),
            ],
        }
    }
}

fn mobile_table() -> IconSizeTable {
    IconSizeTable::concat([IconSizeTable::android_launcher(), IconSizeTable::ios_app_icon()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_pick_distinct_policies() {
        assert_eq!(Variant::LauncherIcon.spec().policy, ModePolicy::FlattenOpaque);
        assert_eq!(Variant::AppIcons.spec().policy, ModePolicy::PaddedTransparent);
        assert_eq!(Variant::LogoResize.spec().policy, ModePolicy::DirectStretch);
    }

    #[test]
    fn table_sizes_per_variant() {
        assert_eq!(Variant::LauncherIcon.spec().table.len(), 20);
        assert_eq!(Variant::AppIcons.spec().table.len(), 20);
        assert_eq!(Variant::LogoResize.spec().table.len(), 25);
    }

    #[test]
    fn guidance_mentions_source_path() {
        for variant in [Variant::LauncherIcon, Variant::AppIcons, Variant::LogoResize] {
            let spec = variant.spec();
            let guidance = spec.guidance(&spec.source);
            let expected = spec.source.display().to_string();
            assert!(guidance.iter().any(|line| line.contains(&expected)));
            assert!(guidance.iter().any(|line| line.contains("1024")));
        }
    }

    #[test]
    fn guidance_follows_overridden_source() {
        let spec = Variant::AppIcons.spec();
        let guidance = spec.guidance(Path::new("/srv/brand/logo.png"));

        assert!(guidance.iter().any(|line| line.contains("/srv/brand/logo.png")));
        assert!(!guidance.iter().any(|line| line.contains("cadenca_logo_light_green")));
    }
}
