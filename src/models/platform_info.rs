use serde::{Deserialize, Serialize};

/// 平台版本信息（只读）
///
/// - `runtime_version`: 编译本程序的 rustc 版本
/// - `shell_version`: 系统 WebView 内核版本
/// - `framework_version`: Tauri 框架版本
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformInfo {
    pub runtime_version: String,
    pub shell_version: String,
    pub framework_version: String,
}

/// 版本无法获取时的占位值
pub const UNKNOWN_VERSION: &str = "unknown";

impl PlatformInfo {
    /// 采集当前进程的版本信息，任何一项无法获取时使用 `unknown`，不会失败
    pub fn collect() -> Self {
        let shell_version = tauri::webview_version().unwrap_or_else(|e| {
            log::warn!("获取WebView版本失败: {}", e);
            UNKNOWN_VERSION.to_string()
        });

        Self {
            runtime_version: env!("AUDIO_PLAYER_RUSTC_VERSION").to_string(),
            shell_version,
            framework_version: tauri::VERSION.to_string(),
        }
    }
}
