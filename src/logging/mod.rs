//! # 日志记录模块 (Logging Module)
//!
//! ## 业务说明
//! 记录桥接命令的调用情况：用户选择的文件、路径验证结果、文件读取失败等，
//! 为故障排查提供依据
//!
//! ## 日志后端
//! - **仅控制台**: 使用 env_logger，支持 `RUST_LOG` 环境变量进一步细化过滤
//! - **控制台 + 文件**: 使用 [`SimpleLogger`]，追加写入应用日志目录下的日志文件

pub mod logger_config;
pub mod simple_logger;

pub use logger_config::*;
pub use simple_logger::SimpleLogger;

/// 按配置初始化全局日志
///
/// 全局logger只能设置一次，重复调用返回错误
pub fn init_logger(config: LoggerConfig) -> Result<(), Box<dyn std::error::Error>> {
    if config.file_path().is_some() {
        return SimpleLogger::new(config).init();
    }

    let filter: log::LevelFilter = if config.has_console() {
        config.level.into()
    } else {
        log::LevelFilter::Off
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .parse_default_env()
        .format_timestamp_millis()
        .try_init()?;
    Ok(())
}

/// 记录用户操作日志
#[macro_export]
macro_rules! log_user_operation {
    ($msg:expr) => {
        log::info!("[用户操作] {}", $msg);
    };
    ($msg:expr, $($arg:tt)*) => {
        log::info!("[用户操作] {}", format!($msg, $($arg)*));
    };
}

/// 记录音频文件读取失败日志
#[macro_export]
macro_rules! log_file_read_failure {
    ($msg:expr) => {
        log::error!("[文件读取失败] {}", $msg);
    };
    ($msg:expr, $($arg:tt)*) => {
        log::error!("[文件读取失败] {}", format!($msg, $($arg)*));
    };
}

/// 记录用户配置操作警告
#[macro_export]
macro_rules! log_config_warning {
    ($msg:expr) => {
        log::warn!("[配置警告] {}", $msg);
    };
    ($msg:expr, $($arg:tt)*) => {
        log::warn!("[配置警告] {}", format!($msg, $($arg)*));
    };
}

// 重新导出宏
pub use crate::log_user_operation;
pub use crate::log_file_read_failure;
pub use crate::log_config_warning;
