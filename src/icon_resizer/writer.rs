//! # 落盘模块
//!
//! 先补齐目标路径的所有父目录，再把图标编码为 PNG 字节并一次性写入。
//! 编码与写入分开，便于区分 `encode` / `write` 两个失败阶段。

use std::io::Cursor;
use std::path::Path;

use image::ImageFormat;

use super::source::RenderedIcon;
use super::{IconError, IconResizer};

impl IconResizer {
    /// 写入单个图标，返回写入的字节数。
    pub(super) fn write_icon(&self, icon: &RenderedIcon, path: &Path) -> Result<u64, IconError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                IconError::FileSystem(format!("创建目录 '{}' 失败：{}", parent.display(), e))
            })?;
        }

        let bytes = Self::encode_png(icon)?;

        std::fs::write(path, &bytes).map_err(|e| {
            IconError::FileSystem(format!("写入 '{}' 失败：{}", path.display(), e))
        })?;

        Ok(bytes.len() as u64)
    }

    fn encode_png(icon: &RenderedIcon) -> Result<Vec<u8>, IconError> {
        let mut cursor = Cursor::new(Vec::new());
        icon.image
            .write_to(&mut cursor, ImageFormat::Png)
            .map_err(|e| IconError::Encode(format!("PNG 编码失败（{}px）：{}", icon.size, e)))?;
        Ok(cursor.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon_resizer::ResizeConfig;
    use image::DynamicImage;

    fn icon(size: u32) -> RenderedIcon {
        RenderedIcon {
            image: DynamicImage::new_rgba8(size, size),
            size,
        }
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a/b/c/icon.png");
        let resizer = IconResizer::new(ResizeConfig::default());

        let written = resizer.write_icon(&icon(8), &path).expect("write should succeed");

        assert!(written > 0);
        let reopened = image::open(&path).unwrap();
        assert_eq!((reopened.width(), reopened.height()), (8, 8));
    }

    #[test]
    fn blocked_parent_is_filesystem_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("blocked"), b"file, not a dir").unwrap();
        let resizer = IconResizer::new(ResizeConfig::default());

        let result = resizer.write_icon(&icon(8), &dir.path().join("blocked/icon.png"));
        assert!(matches!(result, Err(IconError::FileSystem(_))));
    }
}
