/// 音频文件格式、MIME映射与加载结果
pub mod audio_file;
/// 平台版本信息
pub mod platform_info;

// 重新导出所有类型，方便其他模块使用
pub use audio_file::*;
pub use platform_info::*;
