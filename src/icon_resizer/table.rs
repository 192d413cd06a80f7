//! # 尺寸表
//!
//! 输出路径 → 目标边长的有序映射，以及 Android / iOS / Web 三组固定预设。
//! 尺寸表是不可变数据，由调用方构造后传入批处理，不使用模块级全局常量表。

use std::path::{Path, PathBuf};

use super::IconError;

const ANDROID_RES_DIR: &str = "android/app/src/main/res";
const IOS_APPICONSET_DIR: &str = "ios/Runner/Assets.xcassets/AppIcon.appiconset";

const ANDROID_DENSITIES: [(&str, u32); 5] = [
    ("mipmap-mdpi", 48),
    ("mipmap-hdpi", 72),
    ("mipmap-xhdpi", 96),
    ("mipmap-xxhdpi", 144),
    ("mipmap-xxxhdpi", 192),
];

// (名义尺寸, 倍率, 实际像素)
const IOS_APP_ICONS: [(&str, u32, u32); 15] = [
    ("20x20", 1, 20),
    ("20x20", 2, 40),
    ("20x20", 3, 60),
    ("29x29", 1, 29),
    ("29x29", 2, 58),
    ("29x29", 3, 87),
    ("40x40", 1, 40),
    ("40x40", 2, 80),
    ("40x40", 3, 120),
    ("60x60", 2, 120),
    ("60x60", 3, 180),
    ("76x76", 1, 76),
    ("76x76", 2, 152),
    ("83.5x83.5", 2, 167),
    ("1024x1024", 1, 1024),
];

const WEB_ICONS: [(&str, u32); 5] = [
    ("web/icons/Icon-192.png", 192),
    ("web/icons/Icon-512.png", 512),
    ("web/icons/Icon-maskable-192.png", 192),
    ("web/icons/Icon-maskable-512.png", 512),
    ("web/favicon.png", 16),
];

/// 尺寸表中的一项。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconEntry {
    pub path: PathBuf,
    pub size: u32,
}

/// 有序、不可变的尺寸表。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconSizeTable {
    entries: Vec<IconEntry>,
}

impl IconSizeTable {
    /// 由 `(路径, 边长)` 序列构造尺寸表，边长必须为正。
    ///
    /// # 示例
    /// ```rust
    /// use app_icon_resizer::icon_resizer::IconSizeTable;
    ///
    /// let table = IconSizeTable::new([("out/a.png", 48), ("out/b.png", 96)])?;
    /// assert_eq!(table.len(), 2);
    /// # Ok::<(), app_icon_resizer::icon_resizer::IconError>(())
    /// ```
    pub fn new<P, I>(entries: I) -> Result<Self, IconError>
    where
        P: Into<PathBuf>,
        I: IntoIterator<Item = (P, u32)>,
    {
        let entries = entries
            .into_iter()
            .map(|(path, size)| {
                let path = path.into();
                if size == 0 {
                    return Err(IconError::InvalidFormat(format!(
                        "图标尺寸必须为正整数：{}",
                        path.display()
                    )));
                }
                Ok(IconEntry { path, size })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { entries })
    }

    /// Android 各密度档 `ic_launcher.png`。
    pub fn android_launcher() -> Self {
        Self::from_static(ANDROID_DENSITIES.iter().map(|(folder, size)| {
            (
                Path::new(ANDROID_RES_DIR).join(folder).join("ic_launcher.png"),
                *size,
            )
        }))
    }

    /// iOS `AppIcon.appiconset` 的 15 个文件。
    pub fn ios_app_icon() -> Self {
        Self::from_static(IOS_APP_ICONS.iter().map(|(nominal, scale, size)| {
            (
                Path::new(IOS_APPICONSET_DIR).join(format!("Icon-App-{nominal}@{scale}x.png")),
                *size,
            )
        }))
    }

    /// Web 图标（含 maskable 与 16×16 favicon）。
    pub fn web() -> Self {
        Self::from_static(WEB_ICONS.iter().map(|(path, size)| (PathBuf::from(path), *size)))
    }

    /// 依次拼接多张表。
    pub fn concat(tables: impl IntoIterator<Item = Self>) -> Self {
        Self {
            entries: tables.into_iter().flat_map(|t| t.entries).collect(),
        }
    }

    /// 将所有相对路径挂到 `root` 下；绝对路径保持不变。
    pub fn rooted_at(&self, root: &Path) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .map(|entry| IconEntry {
                    path: root.join(&entry.path),
                    size: entry.size,
                })
                .collect(),
        }
    }

    pub fn entries(&self) -> &[IconEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // 预设表的尺寸都是编译期非零常量
    fn from_static(entries: impl Iterator<Item = (PathBuf, u32)>) -> Self {
        Self {
            entries: entries.map(|(path, size)| IconEntry { path, size }).collect(),
        }
    }
}
