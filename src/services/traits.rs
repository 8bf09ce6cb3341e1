/// 服务层基础trait定义
/// 前端桥接命令只通过这些接口访问文件系统和原生对话框，便于替换实现和测试

use async_trait::async_trait;
use std::path::PathBuf;

use crate::models::{AudioFileData, SUPPORTED_AUDIO_EXTENSIONS};
use crate::utils::error::AppResult;

/// 音频文件服务trait
///
/// 所有方法彼此独立、无共享可变状态，可被并发调用
#[async_trait]
pub trait AudioFileService: Send + Sync {
    /// 服务名称
    fn service_name(&self) -> &'static str;

    /// 路径是否指向一个存在的普通文件，且扩展名在支持列表内
    ///
    /// 任何失败（不存在、不是文件、权限错误、扩展名不支持）都返回 false，从不报错
    async fn validate_path(&self, path: &str) -> bool;

    /// 读取整个文件并编码为 Base64
    ///
    /// 不会先调用 [`AudioFileService::validate_path`]；扩展名不在支持列表内时照常读取，
    /// MIME类型回退为 `audio/mpeg`。读取失败时返回 `AppError::FileReadError`
    async fn load_audio_file(&self, path: &str) -> AppResult<AudioFileData>;
}

/// 文件对话框过滤器
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFilter {
    /// 显示名称
    pub name: String,
    /// 扩展名（不含点号）
    pub extensions: Vec<String>,
}

impl FileFilter {
    /// 使用支持的音频扩展名构建过滤器
    pub fn audio(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extensions: SUPPORTED_AUDIO_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
        }
    }
}

/// 原生文件对话框服务trait
///
/// 实现是阻塞的：调用会一直等待直到用户确认或取消，调用方负责放到阻塞线程池执行
#[cfg_attr(test, mockall::automock)]
pub trait FileDialogService: Send + Sync {
    /// 打开"选择单个文件"对话框
    ///
    /// 用户取消时返回 `Ok(None)`
    fn pick_file(&self, filter: &FileFilter) -> AppResult<Option<PathBuf>>;
}
