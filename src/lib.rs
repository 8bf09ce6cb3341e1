/// 音频播放器 - Rust后端核心库
pub mod app_commands;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod tauri_commands;
pub mod utils;

// 重新导出常用类型，方便使用
pub use models::*;
pub use utils::{AppError, AppResult, AppConfig};
pub use tauri_commands::AppState;

use std::sync::Arc;
use tauri::{App, AppHandle, Manager, RunEvent};

use crate::logging::LoggerConfig;
use crate::services::{LocalAudioFileService, TauriFileDialogService, MAIN_WINDOW_LABEL};
use crate::utils::ConfigManager;

/// 应用程序主要运行函数
pub fn run() {
    let app = tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            setup_app(app)?;
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            tauri_commands::select_audio_file,
            tauri_commands::validate_file_path,
            tauri_commands::load_audio_file,
            tauri_commands::get_platform_info,
        ])
        .build(tauri::generate_context!())
        .expect("构建 Tauri 应用失败");

    app.run(handle_run_event);
}

/// 加载配置、初始化日志、注册应用状态并创建主窗口
fn setup_app(app: &mut App) -> anyhow::Result<()> {
    let config_dir = app.path().app_config_dir()?;
    let (config, config_warnings) =
        match tauri::async_runtime::block_on(ConfigManager::in_dir(&config_dir).load()) {
            Ok(loaded) => loaded,
            Err(e) => (AppConfig::default(), vec![format!("加载配置失败，使用默认配置: {}", e)]),
        };

    let log_dir = app.path().app_log_dir()?;
    if let Err(e) = logging::init_logger(LoggerConfig::from_logging_config(&config.logging_config, &log_dir)) {
        eprintln!("初始化日志系统失败: {}", e);
    }
    for warning in &config_warnings {
        crate::log_config_warning!(warning);
    }

    log::info!(
        "=== {} 启动 (环境: {}) ===",
        config.app_settings.app_name,
        config.app_settings.environment
    );

    let state = AppState::new(
        config,
        Arc::new(LocalAudioFileService::new()),
        Arc::new(TauriFileDialogService::new(app.handle().clone(), MAIN_WINDOW_LABEL)),
        PlatformInfo::collect(),
    );
    let window_manager = state.window_manager.clone();
    app.manage(state);

    window_manager.create_main_window(app.handle())?;
    Ok(())
}

/// 应用事件循环回调
///
/// 关闭全部窗口后退出应用；macOS 上保持运行，重新激活且没有可见窗口时重建主窗口
#[cfg_attr(not(target_os = "macos"), allow(unused_variables))]
fn handle_run_event(app_handle: &AppHandle, event: RunEvent) {
    match event {
        #[cfg(target_os = "macos")]
        RunEvent::ExitRequested { code: None, api, .. } => {
            api.prevent_exit();
        }
        #[cfg(target_os = "macos")]
        RunEvent::Reopen { has_visible_windows: false, .. } => {
            let state = app_handle.state::<AppState>();
            if let Err(e) = state.window_manager.create_main_window(app_handle) {
                log::error!("重建主窗口失败: {}", e);
            }
        }
        _ => {}
    }
}
