//! # 配置模块
//!
//! ## 设计思路
//!
//! 将所有“可调策略”集中到 `ResizeConfig`，保证批处理行为可观测、可调整、可测试。
//! 三个命令在背景色、留白与覆盖策略上各不相同，这里不假定唯一默认值，
//! 而是用显式枚举 `ModePolicy` / `ExistingFilePolicy` 表达选择。
//!
//! ## 实现思路
//!
//! - `Default` 提供白色背景、10% 留白、直接覆盖。
//! - `ModePolicy` 负责策略字符串解析与反向输出。
//! - `parse_hex_color` 解析命令行传入的 `RRGGBB` 背景色。

use image::imageops::FilterType;

use super::IconError;

/// 图标批处理配置。
#[derive(Debug, Clone)]
pub struct ResizeConfig {
    /// 缩放滤镜，默认高质量 Lanczos3。
    pub resize_filter: FilterType,
    /// `FlattenOpaque` 模式下透明区域的填充色。
    pub flatten_background: [u8; 3],
    /// `PaddedTransparent` 模式下每条边的留白比例。
    pub padding_ratio: f64,
    /// 目标文件已存在时的处理方式。
    pub existing_files: ExistingFilePolicy,
    /// 是否在 rayon 线程池上并行渲染各条目。
    pub parallel: bool,
    /// 建议的源图最小边长，低于该值仅给出提示。
    pub min_recommended_dimension: u32,
    /// 源图像素上限（`width * height`），在完整解码前检查。
    pub max_source_pixels: u64,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            resize_filter: FilterType::Lanczos3,
            flatten_background: [255, 255, 255],
            padding_ratio: 0.1,
            existing_files: ExistingFilePolicy::Overwrite,
            parallel: false,
            min_recommended_dimension: 1024,
            max_source_pixels: 40_000_000,
        }
    }
}

/// 单个图标的变换策略。
///
/// - `FlattenOpaque`：透明区域铺底色，输出无 alpha
/// - `PaddedTransparent`：透明画布 + 四周留白居中
/// - `DirectStretch`：直接拉伸到目标尺寸
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModePolicy {
    FlattenOpaque,
    PaddedTransparent,
    DirectStretch,
}

impl ModePolicy {
    /// 从外部字符串解析策略。
    ///
    /// # 示例
    /// ```rust,ignore
    /// use crate::icon_resizer::ModePolicy;
    ///
    /// let p = ModePolicy::from_str("padded")?;
    /// assert_eq!(p.as_str(), "padded");
    /// # Ok::<(), crate::icon_resizer::IconError>(())
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub(crate) fn from_str(policy: &str) -> Result<Self, IconError> {
        match policy.trim().to_lowercase().as_str() {
            "flatten" => Ok(Self::FlattenOpaque),
            "padded" => Ok(Self::PaddedTransparent),
            "stretch" => Ok(Self::DirectStretch),
            other => Err(IconError::InvalidFormat(format!(
                "未知变换策略：{}（可选：flatten / padded / stretch）",
                other
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::FlattenOpaque => "flatten",
            Self::PaddedTransparent => "padded",
            Self::DirectStretch => "stretch",
        }
    }
}

/// 目标文件已存在时的策略。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExistingFilePolicy {
    /// 直接覆盖（默认）。
    #[default]
    Overwrite,
    /// 保留已有文件并记为跳过。
    Skip,
}

/// 解析 `RRGGBB` 或 `#RRGGBB` 形式的颜色。
pub fn parse_hex_color(value: &str) -> Result<[u8; 3], IconError> {
    let hex = value.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(IconError::InvalidFormat(format!(
            "无效的颜色值：{}（格式：RRGGBB）",
            value
        )));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16)
            .map_err(|e| IconError::InvalidFormat(format!("无效的颜色值：{}", e)))
    };

    Ok([channel(0..2)?, channel(2..4)?, channel(4..6)?])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_strings_round_trip() {
        for policy in [
            ModePolicy::FlattenOpaque,
            ModePolicy::PaddedTransparent,
            ModePolicy::DirectStretch,
        ] {
            assert_eq!(ModePolicy::from_str(policy.as_str()).unwrap(), policy);
        }
        assert_eq!(ModePolicy::from_str(" Stretch ").unwrap(), ModePolicy::DirectStretch);
        assert!(matches!(
            ModePolicy::from_str("letterbox"),
            Err(IconError::InvalidFormat(_))
        ));
    }

    #[test]
    fn parses_hex_colors() {
        assert_eq!(parse_hex_color("#ffffff").unwrap(), [255, 255, 255]);
        assert_eq!(parse_hex_color("1a2B3c").unwrap(), [0x1a, 0x2b, 0x3c]);
        assert!(parse_hex_color("fff").is_err());
        assert!(parse_hex_color("gg0000").is_err());
    }

    #[test]
    fn defaults_flatten_to_white_and_overwrite() {
        let config = ResizeConfig::default();
        assert_eq!(config.flatten_background, [255, 255, 255]);
        assert_eq!(config.existing_files, ExistingFilePolicy::Overwrite);
        assert!(!config.parallel);
        assert!(matches!(config.resize_filter, FilterType::Lanczos3));
    }
}
