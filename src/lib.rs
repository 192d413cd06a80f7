//! # 应用图标批量生成 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  bin/create_launcher_icon  bin/generate_app_icons        │
//! │  bin/resize_logo                                         │
//! │          ↓ (无参数即可运行)                               │
//! │  cli ── 参数覆盖 · 日志初始化 · 汇总输出 · 退出码         │
//! │          ↓                                               │
//! │  variants ── 源图路径 + 尺寸表 + 变换策略（不可变数据）   │
//! │          ↓                                               │
//! │  icon_resizer ── 加载 → 变换 → 写 PNG → BatchReport       │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 命令层统一错误类型 `AppError` |
//! | [`icon_resizer`] | 尺寸表驱动的批量缩放核心 |
//! | [`variants`] | 三个命令的硬编码参数 |
//! | [`cli`] | 三个二进制共用的命令行层 |

pub mod cli;
pub mod error;
pub mod icon_resizer;
pub mod variants;
