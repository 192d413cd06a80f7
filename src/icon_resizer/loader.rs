//! # 源图加载模块
//!
//! ## 设计思路
//!
//! 源图在整批处理中只加载一次。加载分两层失败语义：
//! - 文件不存在：`SourceMissing`，由批处理入口视为致命前置条件
//! - 读取 / 识别 / 解码失败：普通错误，由批处理记到每个条目上
//!
//! ## 实现思路
//!
//! 1. 存在性检查
//! 2. 读取字节并猜测格式
//! 3. 仅读 header 尺寸，按像素上限快速拒绝
//! 4. 完整解码
//! 5. 分辨率低于建议值时仅提示，不中断

use std::io::Cursor;
use std::path::Path;

use image::ImageReader;

use super::source::SourceImage;
use super::{IconError, IconResizer, ResizeConfig};

impl IconResizer {
    /// 致命前置条件：源图必须存在。
    pub(super) fn ensure_source_exists(path: &Path) -> Result<(), IconError> {
        if !path.exists() {
            return Err(IconError::SourceMissing(path.display().to_string()));
        }
        Ok(())
    }

    /// 读取并解码源图。
    ///
    /// # 示例
    /// ```rust,no_run
    /// use app_icon_resizer::icon_resizer::{IconResizer, ResizeConfig};
    /// use std::path::Path;
    ///
    /// let resizer = IconResizer::new(ResizeConfig::default());
    /// let source = resizer.load_source(Path::new("assets/images/logo.png"))?;
    /// println!("{}x{}", source.width, source.height);
    /// # Ok::<(), app_icon_resizer::icon_resizer::IconError>(())
    /// ```
    pub fn load_source(&self, path: &Path) -> Result<SourceImage, IconError> {
        log::info!("📁 开始读取源图 - 路径: {}", path.display());

        Self::ensure_source_exists(path)?;

        let bytes = std::fs::read(path)
            .map_err(|e| IconError::SourceRead(format!("{}: {}", path.display(), e)))?;

        let source = Self::decode_source(&bytes, &self.config)?;

        log::info!(
            "✅ 源图解码成功 - 尺寸: {}x{} 模式: {:?}",
            source.width,
            source.height,
            source.mode
        );

        if source.width < self.config.min_recommended_dimension
            || source.height < self.config.min_recommended_dimension
        {
            log::warn!(
                "⚠️ 源图分辨率偏低：{}x{}，建议至少 {}x{}",
                source.width,
                source.height,
                self.config.min_recommended_dimension,
                self.config.min_recommended_dimension
            );
        }

        Ok(source)
    }

    pub(super) fn decode_source(bytes: &[u8], config: &ResizeConfig) -> Result<SourceImage, IconError> {
        image::guess_format(bytes)
            .map_err(|e| IconError::InvalidFormat(format!("不支持的图片格式：{}", e)))?;

        let (header_width, header_height) = Self::inspect_dimensions(bytes)?;
        Self::validate_pixel_limits(config, header_width, header_height)?;

        let decoded = image::load_from_memory(bytes)
            .map_err(|e| IconError::Decode(format!("图片解码失败：{}", e)))?;

        Ok(SourceImage::from_image(decoded))
    }

    /// 仅通过图片头信息读取宽高。
    fn inspect_dimensions(bytes: &[u8]) -> Result<(u32, u32), IconError> {
        let reader = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| IconError::InvalidFormat(format!("无法识别图片格式：{}", e)))?;

        reader
            .into_dimensions()
            .map_err(|e| IconError::InvalidFormat(format!("无法读取图片尺寸：{}", e)))
    }

    fn validate_pixel_limits(config: &ResizeConfig, width: u32, height: u32) -> Result<(), IconError> {
        let pixels = (width as u64)
            .checked_mul(height as u64)
            .ok_or_else(|| IconError::ResourceLimit("图片像素数溢出".to_string()))?;

        if pixels > config.max_source_pixels {
            return Err(IconError::ResourceLimit(format!(
                "源图像素过大：{} 像素（限制：{} 像素）",
                pixels, config.max_source_pixels
            )));
        }

        Ok(())
    }
}
