//! # 音频文件模型模块
//!
//! ## 业务作用
//! - **支持的格式**: 固定的6种音频扩展名白名单，进程内只读共享
//! - **MIME映射**: 仅根据扩展名推断MIME类型，不检查文件内容
//! - **加载结果**: 返回给前端的 Base64 数据与MIME类型
//!
//! ## 注意
//! 返回的MIME类型不能作为文件可播放的依据；
//! 无法识别的扩展名一律回退为 `audio/mpeg`，这是策略而不是校验

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::path::Path;
use std::str::FromStr;

/// 支持的音频扩展名（小写、不含点号）
///
/// 同时用于文件对话框过滤器和路径验证
pub const SUPPORTED_AUDIO_EXTENSIONS: [&str; 6] = ["mp3", "wav", "ogg", "aac", "m4a", "flac"];

/// 无法识别扩展名时使用的MIME类型
pub const DEFAULT_AUDIO_MIME_TYPE: &str = "audio/mpeg";

/// 支持的音频格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AudioFormat {
    Mp3,
    Wav,
    Ogg,
    Aac,
    M4a,
    Flac,
}

impl AudioFormat {
    /// 全部支持的格式
    pub const ALL: [AudioFormat; 6] = [
        AudioFormat::Mp3,
        AudioFormat::Wav,
        AudioFormat::Ogg,
        AudioFormat::Aac,
        AudioFormat::M4a,
        AudioFormat::Flac,
    ];

    /// 扩展名（小写、不含点号）
    pub fn extension(&self) -> &'static str {
        match self {
            AudioFormat::Mp3 => "mp3",
            AudioFormat::Wav => "wav",
            AudioFormat::Ogg => "ogg",
            AudioFormat::Aac => "aac",
            AudioFormat::M4a => "m4a",
            AudioFormat::Flac => "flac",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            AudioFormat::Mp3 => "audio/mpeg",
            AudioFormat::Wav => "audio/wav",
            AudioFormat::Ogg => "audio/ogg",
            AudioFormat::Aac => "audio/aac",
            AudioFormat::M4a => "audio/mp4",
            AudioFormat::Flac => "audio/flac",
        }
    }

    /// 根据路径的扩展名识别格式，大小写不敏感
    ///
    /// 没有扩展名、扩展名不是合法UTF-8或不在白名单内时返回 None。
    /// 以点号开头且没有其他点号的文件名（如 `.mp3`）视为没有扩展名
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
    }
}

impl Display for AudioFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl FromStr for AudioFormat {
    type Err = String;

    /// 接受带或不带前导点号的扩展名，大小写不敏感
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ext = s.strip_prefix('.').unwrap_or(s).to_ascii_lowercase();
        AudioFormat::ALL
            .iter()
            .copied()
            .find(|format| format.extension() == ext)
            .ok_or_else(|| format!("不支持的音频扩展名: {}", s))
    }
}

/// 路径扩展名是否在支持的白名单内（不检查文件是否存在）
pub fn is_supported_extension(path: impl AsRef<Path>) -> bool {
    AudioFormat::from_path(path).is_some()
}

/// 根据扩展名推断MIME类型，无法识别时回退为 `audio/mpeg`
pub fn mime_type_for_path(path: impl AsRef<Path>) -> &'static str {
    AudioFormat::from_path(path)
        .map(|format| format.mime_type())
        .unwrap_or(DEFAULT_AUDIO_MIME_TYPE)
}

/// 音频文件加载结果
///
/// 前端收到的 JSON 形如 `{ "data": "<base64>", "mimeType": "audio/flac" }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioFileData {
    /// 文件完整内容的 Base64 编码（标准字母表，带填充）
    pub data: String,
    pub mime_type: String,
}

impl AudioFileData {
    /// 由文件内容和路径构建，MIME类型只取决于扩展名
    pub fn from_bytes(bytes: &[u8], path: impl AsRef<Path>) -> Self {
        Self {
            data: STANDARD.encode(bytes),
            mime_type: mime_type_for_path(path).to_string(),
        }
    }

    /// 解码回原始字节
    pub fn decode(&self) -> Result<Vec<u8>, base64::DecodeError> {
        STANDARD.decode(&self.data)
    }
}
