#[cfg(test)]
mod tests {
    use crate::utils::error::{AppError, AppResult};
    use crate::utils::config::{AppConfig, ConfigManager, CONFIG_FILE_NAME};
    use std::collections::HashMap;
    use std::path::PathBuf;
    use tempfile::tempdir;

    /// 测试AppError的创建和错误代码
    #[test]
    fn test_app_error_creation() {
        let error = AppError::generic("测试错误");
        assert_eq!(error.error_code(), "GENERIC");
        assert!(error.to_string().contains("测试错误"));

        let read_error = AppError::file_read_error("Permission denied (os error 13)");
        assert_eq!(read_error.error_code(), "FILE_READ_ERROR");
        assert_eq!(read_error.to_string(), "文件读取失败: Permission denied (os error 13)");

        let dialog_error = AppError::dialog_error("没有可用的窗口");
        assert_eq!(dialog_error.error_code(), "DIALOG_ERROR");
        assert!(dialog_error.to_string().contains("没有可用的窗口"));
    }

    /// 测试错误转换 (From trait)
    #[test]
    fn test_error_conversion() {
        // 测试从String转换
        let string_error: AppError = "字符串错误".to_string().into();
        assert_eq!(string_error.error_code(), "GENERIC");

        // 测试从&str转换
        let str_error: AppError = "字符串错误".into();
        assert_eq!(str_error.error_code(), "GENERIC");

        // 测试IO错误转换保留错误类型
        let io_error: AppError = std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        assert_eq!(io_error.error_code(), "IO_ERROR");
        assert!(io_error.to_string().contains("NotFound"));

        // 测试serde_json错误转换
        let json_error = serde_json::from_str::<serde_json::Value>("{invalid json}")
            .expect_err("应该产生JSON错误");
        let app_error: AppError = json_error.into();
        assert_eq!(app_error.error_code(), "JSON_ERROR");
    }

    /// 测试AppResult类型别名
    #[test]
    fn test_app_result() {
        let success: AppResult<String> = Ok("成功".to_string());
        assert!(success.is_ok());

        let error: AppResult<String> = Err(AppError::window_error("主窗口已关闭"));
        match error {
            Err(e) => assert_eq!(e.error_code(), "WINDOW_ERROR"),
            Ok(_) => panic!("应该是错误"),
        }
    }

    /// 测试应用配置的默认值
    #[test]
    fn test_app_config_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.app_settings.app_name, "AudioPlayer");
        assert_eq!(config.app_settings.environment, "production");
        assert!(!config.is_development());

        // 窗口尺寸与最小尺寸
        assert_eq!(config.window_config.width, 800.0);
        assert_eq!(config.window_config.height, 600.0);
        assert_eq!(config.window_config.min_width, 600.0);
        assert_eq!(config.window_config.min_height, 400.0);
        assert_eq!(config.window_config.dev_server_url, "http://localhost:5173");

        assert_eq!(config.dialog_config.audio_filter_name, "音频文件");

        assert_eq!(config.logging_config.log_level, "info");
        assert!(config.logging_config.console_output);
        assert!(!config.logging_config.file_output);
    }

    /// 测试部分字段缺失的配置文件使用默认值补齐
    #[test]
    fn test_partial_config_deserialization() {
        let json = r#"{ "window_config": { "title": "我的播放器" } }"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.window_config.title, "我的播放器");
        assert_eq!(config.window_config.width, 800.0);
        assert_eq!(config.logging_config.log_level, "info");
    }

    /// 测试配置管理器从文件加载
    #[tokio::test]
    async fn test_config_manager_loads_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("test_config.json");

        let mut written = AppConfig::default();
        written.window_config.title = "测试应用".to_string();
        written.logging_config.log_level = "debug".to_string();
        std::fs::write(&config_path, serde_json::to_string_pretty(&written).unwrap()).unwrap();

        let mut manager = ConfigManager::new(config_path);
        manager.load_from_file().await.unwrap();

        assert_eq!(manager.get_config(), &written);
    }

    /// 配置文件不存在时只使用内存中的默认配置，不写出文件
    #[tokio::test]
    async fn test_missing_config_file_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_dir = temp_dir.path().join("nested").join("config");

        let mut manager = ConfigManager::in_dir(&config_dir);
        manager.load_from_file().await.unwrap();

        assert_eq!(manager.get_config(), &AppConfig::default());
        assert!(!config_dir.join(CONFIG_FILE_NAME).exists());
        assert!(!config_dir.exists());
    }

    /// 测试损坏的配置文件
    #[tokio::test]
    async fn test_corrupted_config_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&config_path, "not json at all").unwrap();

        let mut manager = ConfigManager::new(config_path);
        let err = manager.load_from_file().await.unwrap_err();
        assert_eq!(err.error_code(), "CONFIGURATION_ERROR");
    }

    /// 测试配置验证
    #[test]
    fn test_config_validation() {
        let mut manager = ConfigManager::new(PathBuf::from("test.json"));

        // 默认配置应该通过验证
        assert!(manager.validate_config().is_ok());

        // 无效的环境配置
        manager.get_config_mut().app_settings.environment = "invalid_env".to_string();
        assert!(manager.validate_config().is_err());

        // trace 与日志后端支持的级别一致
        manager.reset_to_default();
        manager.get_config_mut().logging_config.log_level = "trace".to_string();
        assert!(manager.validate_config().is_ok());

        // 无效的日志级别
        manager.reset_to_default();
        manager.get_config_mut().logging_config.log_level = "verbose".to_string();
        assert!(manager.validate_config().is_err());

        // 最小尺寸大于初始尺寸
        manager.reset_to_default();
        manager.get_config_mut().window_config.min_width = 1024.0;
        assert!(manager.validate_config().is_err());

        // 尺寸为0
        manager.reset_to_default();
        manager.get_config_mut().window_config.height = 0.0;
        assert!(manager.validate_config().is_err());

        // 开发环境下开发服务器地址无效
        manager.reset_to_default();
        manager.get_config_mut().app_settings.environment = "development".to_string();
        manager.get_config_mut().window_config.dev_server_url = "not a url".to_string();
        assert!(manager.validate_config().is_err());

        // 生产环境不检查开发服务器地址
        manager.get_config_mut().app_settings.environment = "production".to_string();
        assert!(manager.validate_config().is_ok());
    }

    /// 测试环境变量覆盖
    #[test]
    fn test_env_override() {
        let vars: HashMap<&str, &str> = [
            ("NODE_ENV", "development"),
            ("LOG_LEVEL", "DEBUG"),
            ("DEV_SERVER_URL", "http://127.0.0.1:3000"),
        ]
        .into_iter()
        .collect();

        let mut manager = ConfigManager::new(PathBuf::from("test.json"));
        let rejected = manager.apply_env(|key| vars.get(key).map(|v| v.to_string()));
        assert!(rejected.is_empty());

        let config = manager.get_config();
        assert!(config.is_development());
        assert_eq!(config.logging_config.log_level, "debug");
        assert_eq!(config.window_config.dev_server_url, "http://127.0.0.1:3000");
        assert!(manager.validate_config().is_ok());
    }

    /// APP_ENVIRONMENT 优先于 NODE_ENV
    #[test]
    fn test_app_environment_takes_precedence() {
        let mut manager = ConfigManager::new(PathBuf::from("test.json"));
        manager.apply_env(|key| match key {
            "APP_ENVIRONMENT" => Some("testing".to_string()),
            "NODE_ENV" => Some("development".to_string()),
            _ => None,
        });

        assert_eq!(manager.get_config().app_settings.environment, "testing");
    }

    /// NODE_ENV=test 视为 testing
    #[test]
    fn test_node_env_test_alias() {
        let mut manager = ConfigManager::new(PathBuf::from("test.json"));
        let rejected = manager.apply_env(|key| match key {
            "NODE_ENV" => Some("test".to_string()),
            _ => None,
        });

        assert!(rejected.is_empty());
        assert_eq!(manager.get_config().app_settings.environment, "testing");
        assert!(manager.validate_config().is_ok());
    }

    /// 无效的环境变量只忽略该项，其余覆盖照常生效
    #[test]
    fn test_invalid_env_override_is_ignored() {
        let mut manager = ConfigManager::new(PathBuf::from("test.json"));
        manager.get_config_mut().window_config.title = "自定义标题".to_string();

        let rejected = manager.apply_env(|key| match key {
            "APP_ENVIRONMENT" => Some("staging".to_string()),
            "LOG_LEVEL" => Some("TRACE".to_string()),
            "DEV_SERVER_URL" => Some("not a url".to_string()),
            _ => None,
        });

        assert_eq!(rejected.len(), 2);
        assert!(rejected.iter().any(|msg| msg.contains("APP_ENVIRONMENT=staging")));
        assert!(rejected.iter().any(|msg| msg.contains("DEV_SERVER_URL=not a url")));

        let config = manager.get_config();
        assert_eq!(config.app_settings.environment, "production");
        assert_eq!(config.logging_config.log_level, "trace");
        assert_eq!(config.window_config.dev_server_url, "http://localhost:5173");
        assert_eq!(config.window_config.title, "自定义标题");
        assert!(manager.validate_config().is_ok());
    }

    /// 完整加载流程：文件中的设置在无效覆盖下仍然保留
    #[tokio::test]
    async fn test_load_keeps_file_settings_with_bad_override() {
        let temp_dir = tempdir().unwrap();
        let mut written = AppConfig::default();
        written.window_config.width = 1024.0;
        std::fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            serde_json::to_string(&written).unwrap(),
        )
        .unwrap();

        let mut manager = ConfigManager::in_dir(temp_dir.path());
        manager.load_from_file().await.unwrap();
        let rejected = manager.apply_env(|key| match key {
            "LOG_LEVEL" => Some("verbose".to_string()),
            _ => None,
        });

        assert_eq!(rejected.len(), 1);
        assert!(manager.validate_config().is_ok());
        assert_eq!(manager.get_config().window_config.width, 1024.0);
        assert_eq!(manager.get_config().logging_config.log_level, "info");
    }
}
