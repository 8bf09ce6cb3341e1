//! 日志配置模块
//!
//! 将应用配置中的日志设置转换为日志后端可直接使用的配置

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::utils::config::LoggingConfig;

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// 日志级别
    pub level: LogLevel,
    /// 日志输出目标
    pub targets: Vec<LogTarget>,
}

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

impl LogLevel {
    /// 解析配置中的日志级别字符串，无法识别时回退到 Info
    pub fn parse(level: &str) -> Self {
        match level.to_ascii_lowercase().as_str() {
            "error" => LogLevel::Error,
            "warn" | "warning" => LogLevel::Warn,
            "debug" => LogLevel::Debug,
            "trace" => LogLevel::Trace,
            _ => LogLevel::Info,
        }
    }
}

/// 日志输出目标
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LogTarget {
    Console,
    File { path: PathBuf },
}

impl LoggerConfig {
    /// 根据应用日志配置构建
    ///
    /// 相对的日志文件路径基于 `log_dir` 解析
    pub fn from_logging_config(config: &LoggingConfig, log_dir: &Path) -> Self {
        let mut targets = Vec::new();
        if config.console_output {
            targets.push(LogTarget::Console);
        }
        if config.file_output {
            let file = config
                .log_file_path
                .clone()
                .unwrap_or_else(|| PathBuf::from("audio-player.log"));
            let path = if file.is_absolute() { file } else { log_dir.join(file) };
            targets.push(LogTarget::File { path });
        }

        Self {
            level: LogLevel::parse(&config.log_level),
            targets,
        }
    }

    /// 第一个文件输出目标
    pub fn file_path(&self) -> Option<&Path> {
        self.targets.iter().find_map(|target| match target {
            LogTarget::File { path } => Some(path.as_path()),
            LogTarget::Console => None,
        })
    }

    /// 是否需要输出到控制台
    pub fn has_console(&self) -> bool {
        self.targets.contains(&LogTarget::Console)
    }
}
