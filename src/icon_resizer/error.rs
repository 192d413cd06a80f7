//! # 错误模型模块
//!
//! ## 设计思路
//!
//! 使用单一错误枚举承载图标生成链路中的所有错误来源，避免字符串拼接式错误处理。
//! 通过 `thiserror` 保持人类可读错误，同时让调用侧可按分支匹配。
//!
//! `code()` / `stage()` 给出稳定的机器可读标识，写入批处理报告（JSON）。

/// 图标生成统一错误类型。
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    /// 源图片不存在，属于整批致命前置条件失败。
    #[error("源图片不存在：{0}")]
    SourceMissing(String),

    /// 源图存在但无法读取（权限、目录等）。
    #[error("源图读取失败：{0}")]
    SourceRead(String),

    #[error("解码错误：{0}")]
    Decode(String),

    #[error("格式错误：{0}")]
    InvalidFormat(String),

    #[error("缩放错误：{0}")]
    Resize(String),

    #[error("编码错误：{0}")]
    Encode(String),

    #[error("文件错误：{0}")]
    FileSystem(String),

    #[error("资源限制：{0}")]
    ResourceLimit(String),
}

impl IconError {
    /// 稳定错误码，供报告与日志检索使用。
    pub fn code(&self) -> &'static str {
        match self {
            Self::SourceMissing(_) => "source_missing",
            Self::SourceRead(_) => "source_read",
            Self::Decode(_) => "decode_failed",
            Self::InvalidFormat(_) => "invalid_format",
            Self::Resize(_) => "resize_failed",
            Self::Encode(_) => "encode_failed",
            Self::FileSystem(_) => "filesystem",
            Self::ResourceLimit(_) => "resource_limit",
        }
    }

    /// 出错所处的处理阶段。
    pub fn stage(&self) -> &'static str {
        match self {
            Self::SourceMissing(_) | Self::SourceRead(_) | Self::ResourceLimit(_) => "load",
            Self::Decode(_) | Self::InvalidFormat(_) => "decode",
            Self::Resize(_) => "resize",
            Self::Encode(_) => "encode",
            Self::FileSystem(_) => "write",
        }
    }
}

impl From<IconError> for String {
    fn from(error: IconError) -> Self {
        error.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_and_stages_are_stable() {
        let err = IconError::FileSystem("x".into());
        assert_eq!(err.code(), "filesystem");
        assert_eq!(err.stage(), "write");

        let err = IconError::SourceMissing("logo.png".into());
        assert_eq!(err.stage(), "load");
        assert!(err.to_string().contains("logo.png"));

        let err = IconError::SourceRead("Is a directory".into());
        assert_eq!(err.code(), "source_read");
        assert_eq!(err.stage(), "load");
    }
}
