use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 应用程序统一错误类型
/// 用于封装系统中可能出现的各种错误，提供统一的错误处理机制
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum AppError {
    /// 通用错误，包含错误消息
    #[error("通用错误: {message}")]
    Generic { message: String },

    /// 输入/输出错误
    #[error("IO错误: {message} (Kind: {kind})")]
    IoError { message: String, kind: String },

    /// 音频文件读取失败
    ///
    /// **业务含义**: 加载音频文件时唯一的致命错误类型
    /// **错误合并**: 文件不存在、权限不足、路径是目录等情况不再细分，
    /// 统一携带底层IO错误信息返回给前端
    ///
    /// **前端约定**: 错误文本格式固定为 `文件读取失败: <底层错误信息>`，
    /// 前端收到后应放弃本次加载，不存在部分结果
    #[error("文件读取失败: {message}")]
    FileReadError { message: String },

    /// 原生文件对话框错误
    #[error("文件对话框错误: {message}")]
    DialogError { message: String },

    /// 配置相关错误
    #[error("配置错误: {message}")]
    ConfigurationError { message: String },

    /// JSON序列化/反序列化错误
    #[error("JSON序列化/反序列化错误: {message}")]
    JsonError { message: String },

    /// 并发/异步操作错误
    #[error("并发错误: {message}")]
    ConcurrencyError { message: String },

    /// 窗口创建或操作错误
    #[error("窗口错误: {message}")]
    WindowError { message: String },
}

impl AppError {
    /// 创建通用错误
    pub fn generic(message: impl Into<String>) -> Self {
        Self::Generic {
            message: message.into(),
        }
    }

    /// 创建IO错误
    pub fn io_error(message: impl Into<String>, kind_str: impl Into<String>) -> Self {
        Self::IoError {
            message: message.into(),
            kind: kind_str.into(),
        }
    }

    /// 创建文件读取错误
    ///
    /// **参数**: `message` - 底层IO错误的描述文本，原样保留
    ///
    /// **使用示例**:
    /// ```rust
    /// use audio_player_lib::AppError;
    ///
    /// let err = AppError::file_read_error("No such file or directory (os error 2)");
    /// assert_eq!(err.to_string(), "文件读取失败: No such file or directory (os error 2)");
    /// ```
    pub fn file_read_error(message: impl Into<String>) -> Self {
        Self::FileReadError {
            message: message.into(),
        }
    }

    /// 创建文件对话框错误
    pub fn dialog_error(message: impl Into<String>) -> Self {
        Self::DialogError {
            message: message.into(),
        }
    }

    /// 创建配置错误
    pub fn configuration_error(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
        }
    }

    /// 创建JSON序列化错误
    pub fn json_error(message: impl Into<String>) -> Self {
        Self::JsonError {
            message: message.into(),
        }
    }

    /// 创建并发错误
    pub fn concurrency_error(message: impl Into<String>) -> Self {
        Self::ConcurrencyError {
            message: message.into(),
        }
    }

    /// 创建窗口错误
    pub fn window_error(message: impl Into<String>) -> Self {
        Self::WindowError {
            message: message.into(),
        }
    }

    /// 获取错误的简短描述
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Generic { .. } => "GENERIC",
            AppError::IoError { .. } => "IO_ERROR",
            AppError::FileReadError { .. } => "FILE_READ_ERROR",
            AppError::DialogError { .. } => "DIALOG_ERROR",
            AppError::ConfigurationError { .. } => "CONFIGURATION_ERROR",
            AppError::JsonError { .. } => "JSON_ERROR",
            AppError::ConcurrencyError { .. } => "CONCURRENCY_ERROR",
            AppError::WindowError { .. } => "WINDOW_ERROR",
        }
    }
}

/// 标准 I/O 错误到 AppError 的转换
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError { message: err.to_string(), kind: format!("{:?}", err.kind()) }
    }
}

/// serde_json 错误到 AppError 的转换
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::JsonError { message: err.to_string() }
    }
}

/// tauri 错误到 AppError 的转换（窗口、路径解析等宿主操作）
impl From<tauri::Error> for AppError {
    fn from(err: tauri::Error) -> Self {
        AppError::WindowError { message: err.to_string() }
    }
}

/// 字符串错误到 AppError 的转换（通用错误）
impl From<String> for AppError {
    fn from(err_msg: String) -> Self {
        Self::Generic { message: err_msg }
    }
}

/// &str 错误到 AppError 的转换（通用错误）
impl From<&str> for AppError {
    fn from(err_msg: &str) -> Self {
        Self::Generic { message: err_msg.to_string() }
    }
}

/// 应用程序结果类型别名
/// 简化错误处理的类型定义
pub type AppResult<T> = Result<T, AppError>;
