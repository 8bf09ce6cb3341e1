use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use crate::utils::error::{AppError, AppResult};

/// 配置文件名，位于应用配置目录下
pub const CONFIG_FILE_NAME: &str = "app_config.json";

/// 有效的运行环境
pub const VALID_ENVIRONMENTS: [&str; 3] = ["development", "testing", "production"];

/// 有效的日志级别
pub const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// 应用程序主配置结构
/// 包含应用程序运行所需的所有配置信息
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 应用程序基本设置
    pub app_settings: AppSettings,
    /// 主窗口配置
    pub window_config: WindowConfig,
    /// 文件对话框配置
    pub dialog_config: DialogConfig,
    /// 日志配置
    pub logging_config: LoggingConfig,
}

/// 应用程序基本设置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// 应用程序名称
    pub app_name: String,
    /// 运行环境 (development, testing, production)
    pub environment: String,
}

/// 主窗口配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// 窗口标题
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub min_width: f64,
    pub min_height: f64,
    /// 开发环境下加载的前端开发服务器地址
    pub dev_server_url: String,
    /// 开发环境下是否自动打开开发者工具（仅调试构建生效）
    pub open_devtools: bool,
}

/// 文件对话框配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogConfig {
    /// 音频文件过滤器显示名称
    pub audio_filter_name: String,
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别 (trace, debug, info, warn, error)
    pub log_level: String,
    /// 日志文件路径，相对路径基于应用日志目录
    pub log_file_path: Option<PathBuf>,
    /// 是否启用控制台输出
    pub console_output: bool,
    /// 是否启用文件输出
    pub file_output: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            app_name: "AudioPlayer".to_string(),
            environment: "production".to_string(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Audio Player".to_string(),
            width: 800.0,
            height: 600.0,
            min_width: 600.0,
            min_height: 400.0,
            dev_server_url: "http://localhost:5173".to_string(),
            open_devtools: true,
        }
    }
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            audio_filter_name: "音频文件".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_file_path: Some(PathBuf::from("audio-player.log")),
            console_output: true,
            file_output: false,
        }
    }
}

impl AppConfig {
    /// 是否运行在开发环境
    pub fn is_development(&self) -> bool {
        self.app_settings.environment == "development"
    }
}

/// 配置管理器
/// 负责加载、保存和管理应用程序配置
pub struct ConfigManager {
    config: AppConfig,
    config_file_path: PathBuf,
}

impl ConfigManager {
    /// 创建新的配置管理器
    pub fn new(config_file_path: PathBuf) -> Self {
        Self {
            config: AppConfig::default(),
            config_file_path,
        }
    }

    /// 在指定目录下创建配置管理器，配置文件名固定为 [`CONFIG_FILE_NAME`]
    pub fn in_dir(config_dir: &Path) -> Self {
        Self::new(config_dir.join(CONFIG_FILE_NAME))
    }

    /// 加载、环境变量覆盖并验证，返回最终配置和被忽略的环境变量覆盖说明
    pub async fn load(mut self) -> AppResult<(AppConfig, Vec<String>)> {
        self.load_from_file().await?;
        let rejected = self.override_from_env();
        self.validate_config()?;
        Ok((self.config, rejected))
    }

    /// 从文件加载配置
    ///
    /// 配置文件不存在时使用内存中的默认配置，不会写出文件
    pub async fn load_from_file(&mut self) -> AppResult<()> {
        if !self.config_file_path.exists() {
            return Ok(());
        }

        let content = tokio::fs::read_to_string(&self.config_file_path)
            .await
            .map_err(|e| AppError::io_error(format!("读取配置文件失败: {}", e), e.kind().to_string()))?;

        self.config = serde_json::from_str(&content)
            .map_err(|e| AppError::configuration_error(format!("解析配置文件失败: {}", e)))?;

        Ok(())
    }

    /// 从环境变量覆盖配置
    pub fn override_from_env(&mut self) -> Vec<String> {
        self.apply_env(|key| std::env::var(key).ok())
    }

    /// 使用给定的变量查询函数覆盖配置
    ///
    /// `APP_ENVIRONMENT` 优先于 `NODE_ENV`，后者保留给沿用前端工具链习惯的启动脚本，
    /// 其中 `test` 视为 `testing`。无效的取值被忽略，保留原有配置，返回每个被忽略变量的说明
    pub fn apply_env<F>(&mut self, lookup: F) -> Vec<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut rejected = Vec::new();

        let environment = lookup("APP_ENVIRONMENT")
            .map(|value| ("APP_ENVIRONMENT", value))
            .or_else(|| lookup("NODE_ENV").map(|value| ("NODE_ENV", value)));
        if let Some((key, value)) = environment {
            let normalized = match value.to_lowercase().as_str() {
                "test" => "testing".to_string(),
                other => other.to_string(),
            };
            if VALID_ENVIRONMENTS.contains(&normalized.as_str()) {
                self.config.app_settings.environment = normalized;
            } else {
                rejected.push(format!("忽略无效的 {}={}，有效值: {:?}", key, value, VALID_ENVIRONMENTS));
            }
        }

        if let Some(value) = lookup("LOG_LEVEL") {
            let normalized = value.to_lowercase();
            if VALID_LOG_LEVELS.contains(&normalized.as_str()) {
                self.config.logging_config.log_level = normalized;
            } else {
                rejected.push(format!("忽略无效的 LOG_LEVEL={}，有效值: {:?}", value, VALID_LOG_LEVELS));
            }
        }

        if let Some(url) = lookup("DEV_SERVER_URL") {
            match url.parse::<tauri::Url>() {
                Ok(_) => self.config.window_config.dev_server_url = url,
                Err(e) => rejected.push(format!("忽略无效的 DEV_SERVER_URL={} ({})", url, e)),
            }
        }

        rejected
    }

    /// 获取配置的只读引用
    pub fn get_config(&self) -> &AppConfig {
        &self.config
    }

    /// 获取配置的可变引用
    pub fn get_config_mut(&mut self) -> &mut AppConfig {
        &mut self.config
    }

    /// 验证配置的有效性
    pub fn validate_config(&self) -> AppResult<()> {
        // 验证环境配置
        if !VALID_ENVIRONMENTS.contains(&self.config.app_settings.environment.as_str()) {
            return Err(AppError::configuration_error(format!(
                "无效的环境配置: {}，有效值: {:?}",
                self.config.app_settings.environment, VALID_ENVIRONMENTS
            )));
        }

        // 验证日志级别
        if !VALID_LOG_LEVELS.contains(&self.config.logging_config.log_level.as_str()) {
            return Err(AppError::configuration_error(format!(
                "无效的日志级别: {}，有效值: {:?}",
                self.config.logging_config.log_level, VALID_LOG_LEVELS
            )));
        }

        // 验证窗口尺寸
        let window = &self.config.window_config;
        if window.width <= 0.0 || window.height <= 0.0 || window.min_width <= 0.0 || window.min_height <= 0.0 {
            return Err(AppError::configuration_error("窗口尺寸必须大于0"));
        }
        if window.min_width > window.width || window.min_height > window.height {
            return Err(AppError::configuration_error(format!(
                "窗口最小尺寸 {}x{} 超过了初始尺寸 {}x{}",
                window.min_width, window.min_height, window.width, window.height
            )));
        }

        // 开发环境下必须能解析开发服务器地址
        if self.config.is_development() {
            window.dev_server_url.parse::<tauri::Url>().map_err(|e| {
                AppError::configuration_error(format!(
                    "无效的开发服务器地址: {} ({})",
                    window.dev_server_url, e
                ))
            })?;
        }

        Ok(())
    }

    /// 重置为默认配置
    pub fn reset_to_default(&mut self) {
        self.config = AppConfig::default();
    }
}
