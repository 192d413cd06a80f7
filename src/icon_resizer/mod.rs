//! # 图标批处理模块（icon_resizer）
//!
//! ## 设计思路
//!
//! 该模块将“源图加载 → 按策略变换 → 补目录写 PNG → 汇总报告”
//! 按职责拆分为多个子模块，避免单文件膨胀与耦合。
//!
//! - `handler`：编排整批流程（`render_icon` / `run_batch`）
//! - `loader`：源图存在性检查、读取、解码与分辨率提示
//! - `pipeline`：三种变换策略与缩放
//! - `writer`：父目录创建与 PNG 编码写入
//! - `table`：尺寸表与 Android / iOS / Web 预设
//! - `config/error/source`：配置、错误、数据模型
//!
//! ## 调用链
//!
//! ```text
//! cli.rs（参数 + 变体）
//!    ↓
//! handler.rs（run_batch：前置检查 + 阶段耗时日志）
//!    ├─ loader.rs（源图只加载一次）
//!    └─ 每个条目：pipeline.rs（变换） → writer.rs（写盘）
//!    ↓
//! BatchReport（逐条结果）
//! ```

mod config;
mod error;
mod handler;
mod loader;
mod pipeline;
mod source;
mod table;
mod writer;

pub use config::{ExistingFilePolicy, ModePolicy, ResizeConfig, parse_hex_color};
pub use error::IconError;
pub use handler::IconResizer;
pub use source::{BatchReport, ColorMode, EntryOutcome, SourceImage};
pub use table::{IconEntry, IconSizeTable};
