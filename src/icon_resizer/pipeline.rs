//! # 变换流水线模块
//!
//! ## 设计思路
//!
//! 每个条目从同一份只读源图出发，按 `ModePolicy` 生成 `size × size` 位图：
//! - `FlattenOpaque`：先在背景色上合成 alpha，再缩放，输出 RGB
//! - `PaddedTransparent`：缩放到内框后居中贴到透明画布，输出 RGBA
//! - `DirectStretch`：直接缩放，非方形源图会被压扁
//!
//! ## 实现思路
//!
//! 缩放优先走 `fast_image_resize` 卷积实现；失败时回退 `image::resize_exact`，
//! 两条路径使用同一种滤镜，保证输出尺寸一致。

use fast_image_resize as fr;
use image::imageops::FilterType;
use image::{DynamicImage, ImageBuffer, Rgb, RgbImage, Rgba, RgbaImage};

use super::source::{RenderedIcon, SourceImage};
use super::{IconError, IconResizer, ModePolicy};

impl IconResizer {
    /// 按策略将源图变换为 `size × size` 图标。
    pub(crate) fn transform(
        &self,
        source: &SourceImage,
        size: u32,
        policy: ModePolicy,
    ) -> Result<RenderedIcon, IconError> {
        if size == 0 {
            return Err(IconError::InvalidFormat("图标尺寸必须为正整数".to_string()));
        }

        let image = match policy {
            ModePolicy::FlattenOpaque => self.flatten_opaque(source, size),
            ModePolicy::PaddedTransparent => self.padded_transparent(source, size),
            ModePolicy::DirectStretch => self.resample(source.image(), size, size),
        };

        if image.width() != size || image.height() != size {
            return Err(IconError::Resize(format!(
                "输出尺寸异常：{}x{}（期望 {}x{}）",
                image.width(),
                image.height(),
                size,
                size
            )));
        }

        Ok(RenderedIcon { image, size })
    }

    fn flatten_opaque(&self, source: &SourceImage, size: u32) -> DynamicImage {
        let flattened = if source.mode.has_alpha() {
            let rgba = source.image().to_rgba8();
            let [bg_r, bg_g, bg_b] = self.config.flatten_background;
            let rgb: RgbImage = ImageBuffer::from_fn(rgba.width(), rgba.height(), |x, y| {
                let Rgba([r, g, b, a]) = *rgba.get_pixel(x, y);
                Rgb([
                    blend_channel(r, bg_r, a),
                    blend_channel(g, bg_g, a),
                    blend_channel(b, bg_b, a),
                ])
            });
            DynamicImage::ImageRgb8(rgb)
        } else {
            DynamicImage::ImageRgb8(source.image().to_rgb8())
        };

        self.resample(&flattened, size, size)
    }

    fn padded_transparent(&self, source: &SourceImage, size: u32) -> DynamicImage {
        let inner = padded_inner_size(size, self.config.padding_ratio);
        let offset = ((size - inner) / 2) as i64;

        let rgba = DynamicImage::ImageRgba8(source.image().to_rgba8());
        let resized = self.resample(&rgba, inner, inner).to_rgba8();

        let mut canvas = RgbaImage::new(size, size);
        image::imageops::overlay(&mut canvas, &resized, offset, offset);

        DynamicImage::ImageRgba8(canvas)
    }

    /// 缩放到精确尺寸，快速路径失败时回退 `image` 自带实现。
    fn resample(&self, image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
        let filter = self.config.resize_filter;
        match Self::resize_with_fast_image_resize(image, width, height, filter) {
            Ok(resized) => resized,
            Err(err) => {
                log::warn!("⚠️ fast_image_resize 缩放失败，回退 image::resize_exact：{}", err);
                image.resize_exact(width, height, filter)
            }
        }
    }

    fn resize_with_fast_image_resize(
        image: &DynamicImage,
        target_width: u32,
        target_height: u32,
        filter: FilterType,
    ) -> Result<DynamicImage, IconError> {
        let (pixel_type, src_width, src_height, buffer) = match image {
            DynamicImage::ImageRgb8(rgb) => (
                fr::PixelType::U8x3,
                rgb.width(),
                rgb.height(),
                rgb.as_raw().clone(),
            ),
            other => {
                let rgba = other.to_rgba8();
                (fr::PixelType::U8x4, rgba.width(), rgba.height(), rgba.into_raw())
            }
        };

        let src_image = fr::images::Image::from_vec_u8(src_width, src_height, buffer, pixel_type)
            .map_err(|e| IconError::Resize(format!("构建源图像缓冲失败：{}", e)))?;

        let mut dst_image = fr::images::Image::new(target_width, target_height, pixel_type);

        let mut resizer = fr::Resizer::new();
        let options = fr::ResizeOptions::new()
            .resize_alg(fr::ResizeAlg::Convolution(Self::to_fast_filter(filter)));

        resizer
            .resize(&src_image, &mut dst_image, Some(&options))
            .map_err(|e| IconError::Resize(format!("fast_image_resize 执行失败：{}", e)))?;

        let raw = dst_image.into_vec();
        let resized = match pixel_type {
            fr::PixelType::U8x3 => RgbImage::from_raw(target_width, target_height, raw)
                .map(DynamicImage::ImageRgb8),
            _ => RgbaImage::from_raw(target_width, target_height, raw).map(DynamicImage::ImageRgba8),
        };

        resized.ok_or_else(|| IconError::Resize("fast_image_resize 输出缓冲长度异常".to_string()))
    }

    fn to_fast_filter(filter: FilterType) -> fr::FilterType {
        match filter {
            FilterType::Nearest => fr::FilterType::Box,
            FilterType::Triangle => fr::FilterType::Bilinear,
            FilterType::CatmullRom => fr::FilterType::CatmullRom,
            FilterType::Gaussian => fr::FilterType::Mitchell,
            FilterType::Lanczos3 => fr::FilterType::Lanczos3,
        }
    }
}

/// 留白后内框边长：`floor(size - 2 * size * ratio)`，至少 1 像素。
pub(crate) fn padded_inner_size(size: u32, padding_ratio: f64) -> u32 {
    let padding = size as f64 * padding_ratio;
    let inner = (size as f64 - 2.0 * padding) as u32;
    inner.clamp(1, size)
}

fn blend_channel(fg: u8, bg: u8, alpha: u8) -> u8 {
    let a = alpha as u32;
    ((fg as u32 * a + bg as u32 * (255 - a) + 127) / 255) as u8
}
