/// 原生文件对话框服务
///
/// 对话框只在后端打开，前端无法直接访问对话框插件
use log::{info, warn};
use std::path::PathBuf;
use std::sync::Arc;
use tauri::{AppHandle, Manager, Runtime};
use tauri_plugin_dialog::DialogExt;

use crate::log_user_operation;
use crate::services::traits::{FileDialogService, FileFilter};
use crate::utils::error::{AppError, AppResult};

/// 基于 tauri-plugin-dialog 的文件对话框
pub struct TauriFileDialogService<R: Runtime> {
    app: AppHandle<R>,
    /// 对话框的父窗口标签，窗口存在时对话框以模态方式显示
    parent_label: String,
}

impl<R: Runtime> TauriFileDialogService<R> {
    pub fn new(app: AppHandle<R>, parent_label: impl Into<String>) -> Self {
        Self {
            app,
            parent_label: parent_label.into(),
        }
    }
}

impl<R: Runtime> FileDialogService for TauriFileDialogService<R> {
    fn pick_file(&self, filter: &FileFilter) -> AppResult<Option<PathBuf>> {
        let extensions: Vec<&str> = filter.extensions.iter().map(String::as_str).collect();
        let mut builder = self
            .app
            .dialog()
            .file()
            .add_filter(filter.name.clone(), &extensions);

        #[cfg(desktop)]
        if let Some(window) = self.app.get_webview_window(&self.parent_label) {
            builder = builder.set_parent(&window);
        }

        match builder.blocking_pick_file() {
            Some(file_path) => file_path
                .into_path()
                .map(Some)
                .map_err(|e| AppError::dialog_error(format!("无法解析所选文件路径: {}", e))),
            None => Ok(None),
        }
    }
}

/// 打开音频文件选择对话框，返回所选文件的绝对路径
///
/// 用户取消、没有选择文件或对话框出错时都返回 None，不会向调用方报错
pub async fn pick_audio_file(dialog: Arc<dyn FileDialogService>, filter: FileFilter) -> Option<String> {
    let result = tokio::task::spawn_blocking(move || dialog.pick_file(&filter)).await;

    match result {
        Ok(Ok(Some(path))) => {
            let path = path.to_string_lossy().into_owned();
            log_user_operation!("选择音频文件: {}", path);
            Some(path)
        }
        Ok(Ok(None)) => {
            info!("[FileDialogService] 用户取消了文件选择");
            None
        }
        Ok(Err(e)) => {
            warn!("[FileDialogService] 文件对话框出错: {}", e);
            None
        }
        Err(e) => {
            warn!("[FileDialogService] 文件对话框任务异常结束: {}", e);
            None
        }
    }
}
