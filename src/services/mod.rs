/// 服务层模块
///
/// 桥接命令只依赖这里定义的服务接口：
/// - 音频文件服务：路径验证、文件加载
/// - 文件对话框服务：原生"打开文件"对话框
/// - 窗口管理：主窗口创建与生命周期

/// 服务层基础trait定义
pub mod traits;

/// 本地音频文件服务
pub mod audio_file_service;

/// 原生文件对话框服务
pub mod file_dialog_service;

/// 主窗口管理
pub mod window_manager;

// 重新导出基础trait
pub use traits::{AudioFileService, FileDialogService, FileFilter};

pub use audio_file_service::LocalAudioFileService;
pub use file_dialog_service::{pick_audio_file, TauriFileDialogService};
pub use window_manager::{WindowManager, MAIN_WINDOW_LABEL};
