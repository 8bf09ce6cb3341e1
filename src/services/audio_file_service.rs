/// 本地音频文件服务
///
/// 负责路径验证和音频文件加载，文件系统访问都通过 tokio::fs 在阻塞线程池中完成，
/// 不会阻塞前端渲染
use async_trait::async_trait;
use log::{debug, warn};
use std::path::PathBuf;

use crate::log_file_read_failure;
use crate::models::{is_supported_extension, AudioFileData};
use crate::services::traits::AudioFileService;
use crate::utils::error::{AppError, AppResult};

/// 基于本地文件系统的音频文件服务
#[derive(Debug, Default, Clone)]
pub struct LocalAudioFileService;

impl LocalAudioFileService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AudioFileService for LocalAudioFileService {
    fn service_name(&self) -> &'static str {
        "LocalAudioFileService"
    }

    async fn validate_path(&self, path: &str) -> bool {
        // metadata 会跟随符号链接，指向不存在目标的链接在这里失败
        let metadata = match tokio::fs::metadata(path).await {
            Ok(metadata) => metadata,
            Err(e) => {
                debug!("[{}] 路径不可用: {} - {}", self.service_name(), path, e);
                return false;
            }
        };

        if !metadata.is_file() {
            debug!("[{}] 路径不是普通文件: {}", self.service_name(), path);
            return false;
        }

        let supported = is_supported_extension(path);
        if !supported {
            debug!("[{}] 不支持的扩展名: {}", self.service_name(), path);
        }
        supported
    }

    async fn load_audio_file(&self, path: &str) -> AppResult<AudioFileData> {
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            log_file_read_failure!("{} - {}", path, e);
            AppError::file_read_error(e.to_string())
        })?;

        if !is_supported_extension(path) {
            warn!("[{}] 加载了不在支持列表内的文件，MIME类型回退为 audio/mpeg: {}", self.service_name(), path);
        }

        debug!("[{}] 已读取 {} 字节: {}", self.service_name(), bytes.len(), path);

        // Base64 编码在阻塞线程池中完成，大文件不会占用异步工作线程
        let path = PathBuf::from(path);
        tokio::task::spawn_blocking(move || AudioFileData::from_bytes(&bytes, &path))
            .await
            .map_err(encoding_failure)
    }
}

/// 编码任务异常结束时同样归为文件读取失败，加载只有一种错误类型
fn encoding_failure(e: tokio::task::JoinError) -> AppError {
    log_file_read_failure!("编码音频数据失败: {}", e);
    AppError::file_read_error(e.to_string())
}
