/// Tauri 命令模块
///
/// 这个模块定义了前端可以调用的全部 Tauri 命令。
/// 前端运行在隔离的 WebView 中，不能直接访问文件系统或原生对话框，
/// 只能通过这里列出的命令（并由 capabilities/default.json 白名单授权）间接访问

use crate::log_user_operation;
use crate::models::{AudioFileData, PlatformInfo};
use crate::services::{
    pick_audio_file, AudioFileService, FileDialogService, FileFilter, WindowManager,
};
use crate::utils::config::AppConfig;
use log::debug;
use std::sync::Arc;
use tauri::State;

// ============================================================================
// 应用状态管理
// ============================================================================

/// 应用状态，包含所有服务实例
pub struct AppState {
    pub config: AppConfig,
    pub audio_file_service: Arc<dyn AudioFileService>,
    pub file_dialog_service: Arc<dyn FileDialogService>,
    pub window_manager: Arc<WindowManager>,
    /// 启动时采集一次，之后只读
    pub platform_info: PlatformInfo,
}

impl AppState {
    /// 创建新的应用状态
    pub fn new(
        config: AppConfig,
        audio_file_service: Arc<dyn AudioFileService>,
        file_dialog_service: Arc<dyn FileDialogService>,
        platform_info: PlatformInfo,
    ) -> Self {
        let window_manager = Arc::new(WindowManager::new(&config));
        Self {
            config,
            audio_file_service,
            file_dialog_service,
            window_manager,
            platform_info,
        }
    }

    /// 音频文件对话框过滤器
    pub fn audio_filter(&self) -> FileFilter {
        FileFilter::audio(self.config.dialog_config.audio_filter_name.clone())
    }

    /// 选择音频文件，取消或出错时返回 None
    pub async fn select_audio_file(&self) -> Option<String> {
        debug!("收到选择音频文件请求");
        pick_audio_file(self.file_dialog_service.clone(), self.audio_filter()).await
    }

    /// 验证文件路径，任何失败都返回 false
    pub async fn validate_file_path(&self, file_path: &str) -> bool {
        let valid = self.audio_file_service.validate_path(file_path).await;
        debug!("验证文件路径: {} -> {}", file_path, valid);
        valid
    }

    /// 加载音频文件，错误转换为发送给前端的错误文本
    pub async fn load_audio_file(&self, file_path: &str) -> Result<AudioFileData, String> {
        log_user_operation!("加载音频文件: {}", file_path);
        self.audio_file_service
            .load_audio_file(file_path)
            .await
            .map_err(|e| e.to_string())
    }
}

// ============================================================================
// 音频文件相关命令
// ============================================================================

/// 打开原生对话框选择音频文件
///
/// 返回所选文件的绝对路径；取消或未选择时返回 null，从不报错
#[tauri::command]
pub async fn select_audio_file(state: State<'_, AppState>) -> Result<Option<String>, String> {
    Ok(state.select_audio_file().await)
}

/// 验证文件路径是否为可用的音频文件
///
/// 任何失败都返回 false，从不报错
#[tauri::command]
pub async fn validate_file_path(
    state: State<'_, AppState>,
    file_path: String,
) -> Result<bool, String> {
    Ok(state.validate_file_path(&file_path).await)
}

/// 读取音频文件并返回 Base64 数据与MIME类型
///
/// 读取失败时返回 `文件读取失败: <底层错误信息>`
#[tauri::command]
pub async fn load_audio_file(
    state: State<'_, AppState>,
    file_path: String,
) -> Result<AudioFileData, String> {
    state.load_audio_file(&file_path).await
}

// ============================================================================
// 系统信息相关命令
// ============================================================================

/// 获取平台版本信息
#[tauri::command]
pub fn get_platform_info(state: State<'_, AppState>) -> PlatformInfo {
    state.platform_info.clone()
}
