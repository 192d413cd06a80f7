//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 定义命令层统一的 `AppError` 枚举，替代分散的 `.map_err(|e| e.to_string())`、
//! `expect()` 等不一致模式。批处理内部错误（`IconError`）、报告写入的 I/O 与
//! JSON 序列化错误都通过 `From` 自动上转。

use crate::icon_resizer::IconError;

/// 应用级统一错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 图标批处理错误（源图缺失 / 参数非法等整批级错误）
    #[error("{0}")]
    Icon(#[from] IconError),

    /// 文件系统 I/O 错误
    #[error("文件系统错误: {0}")]
    Io(#[from] std::io::Error),

    /// 报告序列化失败
    #[error("报告序列化失败: {0}")]
    Report(#[from] serde_json::Error),
}
