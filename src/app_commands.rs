/// 前端可调用的全部命令（白名单）
///
/// 每个命令对应一个 `allow-<命令名>` 权限（下划线换成连字符），
/// capabilities/default.json 只能授予这些权限
pub const APP_COMMANDS: &[&str] = &[
    "select_audio_file",
    "validate_file_path",
    "load_audio_file",
    "get_platform_info",
];
