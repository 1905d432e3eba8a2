use serde::Deserialize;
use serde_json::Value;

use crate::internal::media::structs::media_service_error::SERVER_ERROR_MESSAGE;
use crate::internal::media::structs::{MediaServiceError, RawMediaInfo};

/// 接口的外层信封：`code == 0` 且带 `data` 才算成功。
///
/// 出错时 `data` 可能只有部分字段，先保留为原始 JSON，确认成功后再解析。
#[derive(Debug, Deserialize, Clone)]
pub struct TikwmEnvelope {
    pub code: i64,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub data: Option<Value>,
}

/// `data` 节点，只保留用得到的字段
#[derive(Debug, Deserialize, Clone)]
pub struct TikwmData {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub cover: String,
    /// 时长（秒）
    #[serde(default)]
    pub duration: u64,
    /// 无水印视频地址
    #[serde(default)]
    pub play: String,
    /// 背景音乐地址
    #[serde(default)]
    pub music: String,
    pub author: TikwmAuthor,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TikwmAuthor {
    pub unique_id: String,
}

impl TikwmEnvelope {
    /// 取出 `data`；失败时优先使用服务端返回的 `msg`。
    pub fn into_media_info(self) -> Result<RawMediaInfo, MediaServiceError> {
        let data = match (self.code, self.data) {
            (0, Some(data)) if !data.is_null() => data,
            _ => {
                let message = self
                    .msg
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| SERVER_ERROR_MESSAGE.to_string());
                return Err(MediaServiceError::UpstreamFailure(message));
            }
        };
        let data: TikwmData = serde_json::from_value(data)?;

        Ok(RawMediaInfo {
            play: data.play,
            music: data.music,
            cover: data.cover,
            duration: data.duration,
            title: data.title,
            author_unique_id: data.author.unique_id,
        })
    }
}
