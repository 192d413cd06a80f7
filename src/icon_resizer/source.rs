//! # 数据模型
//!
//! ## 设计思路
//!
//! 将“输入源图”和“批处理结果”解耦：
//! - `SourceImage` 表示已解码、只读的源图（可在并行 worker 间共享引用）
//! - `RenderedIcon` 表示变换后、尚未落盘的方形位图
//! - `EntryOutcome` / `BatchReport` 收集每个条目的结果，便于测试断言与 JSON 输出

use std::path::PathBuf;

use image::{ColorType, DynamicImage};
use serde::Serialize;

use super::{IconError, ModePolicy};

/// 源图颜色模式（只区分与透明处理相关的几类）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Rgb,
    Rgba,
    LumaAlpha,
    Other,
}

impl ColorMode {
    pub(crate) fn of(image: &DynamicImage) -> Self {
        match image.color() {
            ColorType::Rgb8 | ColorType::Rgb16 | ColorType::Rgb32F => Self::Rgb,
            ColorType::Rgba8 | ColorType::Rgba16 | ColorType::Rgba32F => Self::Rgba,
            ColorType::La8 | ColorType::La16 => Self::LumaAlpha,
            _ => Self::Other,
        }
    }

    pub fn has_alpha(self) -> bool {
        matches!(self, Self::Rgba | Self::LumaAlpha)
    }
}

/// 加载阶段输出：解码后的源图。
pub struct SourceImage {
    pub(crate) image: DynamicImage,
    pub width: u32,
    pub height: u32,
    pub mode: ColorMode,
}

impl SourceImage {
    pub fn from_image(image: DynamicImage) -> Self {
        let mode = ColorMode::of(&image);
        Self {
            width: image.width(),
            height: image.height(),
            mode,
            image,
        }
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }
}

/// 变换阶段输出：`size × size` 的图标位图。
pub(crate) struct RenderedIcon {
    pub(crate) image: DynamicImage,
    pub(crate) size: u32,
}

/// 单个条目的处理结果。
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EntryOutcome {
    Written {
        path: PathBuf,
        size: u32,
        bytes: u64,
    },
    /// 目标已存在且策略为保留。
    Skipped { path: PathBuf, size: u32 },
    Failed {
        path: PathBuf,
        size: u32,
        code: &'static str,
        stage: &'static str,
        error: String,
    },
}

impl EntryOutcome {
    pub(crate) fn failed(path: PathBuf, size: u32, error: &IconError) -> Self {
        Self::Failed {
            path,
            size,
            code: error.code(),
            stage: error.stage(),
            error: error.to_string(),
        }
    }

    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Written { path, .. } | Self::Skipped { path, .. } | Self::Failed { path, .. } => {
                path
            }
        }
    }

    pub fn size(&self) -> u32 {
        match self {
            Self::Written { size, .. } | Self::Skipped { size, .. } | Self::Failed { size, .. } => {
                *size
            }
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// 整批处理报告，条目顺序与尺寸表一致。
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub source: PathBuf,
    pub policy: ModePolicy,
    pub outcomes: Vec<EntryOutcome>,
    pub elapsed_ms: u64,
}

impl BatchReport {
    pub fn written(&self) -> usize {
        self.count(|o| matches!(o, EntryOutcome::Written { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, EntryOutcome::Skipped { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(EntryOutcome::is_failed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &EntryOutcome> {
        self.outcomes.iter().filter(|o| o.is_failed())
    }

    fn count(&self, pred: impl Fn(&EntryOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(o)).count()
    }
}
