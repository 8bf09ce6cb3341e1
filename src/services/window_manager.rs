/// 主窗口管理
///
/// 主窗口的生命周期状态以显式的托管对象保存：窗口创建后记录标签，
/// 窗口销毁时清除，不使用全局可变变量
use log::{debug, info, warn};
use std::sync::{Arc, Mutex};
use tauri::webview::PageLoadEvent;
use tauri::{Manager, Runtime, WebviewUrl, WebviewWindowBuilder, WindowEvent};

use crate::utils::config::{AppConfig, WindowConfig};
use crate::utils::error::{AppError, AppResult};

/// 主窗口标签，capabilities/default.json 按此标签授权桥接命令
pub const MAIN_WINDOW_LABEL: &str = "main";

/// 生产环境加载的打包页面
const PRODUCTION_ENTRY: &str = "index.html";

pub struct WindowManager {
    config: WindowConfig,
    development: bool,
    main_window: Mutex<Option<String>>,
}

impl WindowManager {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            config: config.window_config.clone(),
            development: config.is_development(),
            main_window: Mutex::new(None),
        }
    }

    /// 主窗口加载的页面地址：开发环境使用开发服务器，否则使用打包页面
    pub fn window_url(&self) -> AppResult<WebviewUrl> {
        if self.development {
            let url = self.config.dev_server_url.parse().map_err(|e| {
                AppError::configuration_error(format!(
                    "无效的开发服务器地址: {} ({})",
                    self.config.dev_server_url, e
                ))
            })?;
            Ok(WebviewUrl::External(url))
        } else {
            Ok(WebviewUrl::App(PRODUCTION_ENTRY.into()))
        }
    }

    /// 主窗口是否存在
    pub fn has_main_window(&self) -> bool {
        self.main_window
            .lock()
            .map(|label| label.is_some())
            .unwrap_or(false)
    }

    /// 记录主窗口已创建
    pub fn mark_opened(&self, label: &str) -> AppResult<()> {
        let mut guard = self
            .main_window
            .lock()
            .map_err(|_| AppError::concurrency_error("获取主窗口状态锁失败"))?;
        *guard = Some(label.to_string());
        Ok(())
    }

    /// 记录窗口已销毁，只有标签匹配当前主窗口时才清除
    pub fn mark_closed(&self, label: &str) {
        if let Ok(mut guard) = self.main_window.lock() {
            if guard.as_deref() == Some(label) {
                *guard = None;
                debug!("[WindowManager] 主窗口已关闭: {}", label);
            }
        }
    }

    /// 创建主窗口
    ///
    /// 窗口先以隐藏状态创建，页面加载完成后再显示，避免出现白屏闪烁。
    /// 主窗口已存在时只把它调到前台
    pub fn create_main_window<R: Runtime, M: Manager<R>>(self: &Arc<Self>, manager: &M) -> AppResult<()> {
        if let Some(window) = manager.get_webview_window(MAIN_WINDOW_LABEL) {
            window.show()?;
            window.set_focus()?;
            return Ok(());
        }

        let url = self.window_url()?;
        info!("[WindowManager] 创建主窗口: {}", url);

        let window = WebviewWindowBuilder::new(manager, MAIN_WINDOW_LABEL, url)
            .title(&self.config.title)
            .inner_size(self.config.width, self.config.height)
            .min_inner_size(self.config.min_width, self.config.min_height)
            .visible(false)
            .on_page_load(|window, payload| {
                if matches!(payload.event(), PageLoadEvent::Finished) {
                    if let Err(e) = window.show() {
                        warn!("[WindowManager] 显示主窗口失败: {}", e);
                    }
                }
            })
            .build()?;

        #[cfg(debug_assertions)]
        if self.development && self.config.open_devtools {
            window.open_devtools();
        }

        self.mark_opened(window.label())?;

        let manager_state = Arc::clone(self);
        let label = window.label().to_string();
        window.on_window_event(move |event| {
            if let WindowEvent::Destroyed = event {
                manager_state.mark_closed(&label);
            }
        });

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn development_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.app_settings.environment = "development".to_string();
        config
    }

    #[test]
    fn test_production_loads_bundled_page() {
        let manager = WindowManager::new(&AppConfig::default());
        match manager.window_url().unwrap() {
            WebviewUrl::App(path) => assert_eq!(path, std::path::PathBuf::from("index.html")),
            other => panic!("生产环境应加载打包页面，实际为 {}", other),
        }
    }

    #[test]
    fn test_development_loads_dev_server() {
        let manager = WindowManager::new(&development_config());
        match manager.window_url().unwrap() {
            WebviewUrl::External(url) => assert_eq!(url.as_str(), "http://localhost:5173/"),
            other => panic!("开发环境应加载开发服务器，实际为 {}", other),
        }
    }

    #[test]
    fn test_invalid_dev_server_url() {
        let mut config = development_config();
        config.window_config.dev_server_url = "localhost without scheme".to_string();
        let manager = WindowManager::new(&config);

        let err = manager.window_url().unwrap_err();
        assert_eq!(err.error_code(), "CONFIGURATION_ERROR");
    }

    #[test]
    fn test_main_window_lifecycle() {
        let manager = WindowManager::new(&AppConfig::default());
        assert!(!manager.has_main_window());

        manager.mark_opened(MAIN_WINDOW_LABEL).unwrap();
        assert!(manager.has_main_window());

        // 其他窗口关闭不影响主窗口状态
        manager.mark_closed("settings");
        assert!(manager.has_main_window());

        manager.mark_closed(MAIN_WINDOW_LABEL);
        assert!(!manager.has_main_window());
    }
}
