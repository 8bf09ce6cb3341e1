/// 错误处理模块
///
/// 业务说明：
/// 本模块是应用程序错误处理的统一入口点
/// 通过重新导出utils::error中的所有错误类型，简化了错误类型的导入路径
/// 使得其他模块可以通过 use crate::error::* 来使用所有错误相关的类型
///
/// 使用示例：
/// ```rust
/// use audio_player_lib::error::{AppError, AppResult};
///
/// fn read_something() -> AppResult<String> {
///     Err(AppError::file_read_error("permission denied"))
/// }
///
/// assert!(read_something().is_err());
/// ```

pub use crate::utils::error::*;
