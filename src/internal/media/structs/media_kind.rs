use std::fmt;

use serde::{Deserialize, Serialize};

/// 一次传输的媒体类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// 视频，保存为 mp4
    Video,
    /// 音频（背景音乐），保存为 mp3
    Audio,
}

impl MediaKind {
    /// 保存文件时使用的扩展名
    pub fn extension(&self) -> &'static str {
        match self {
            MediaKind::Video => "mp4",
            MediaKind::Audio => "mp3",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
