use serde::{Deserialize, Serialize};

use super::media_kind::MediaKind;

/// 提取结果：元数据服务与标注服务合并后的最终数据，收到后不再修改。
///
/// 字段名保持 camelCase，历史记录文件与旧版前端存储的 JSON 可以互相读取。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaResult {
    pub title: String,
    pub author: String,
    pub thumbnail: String,
    pub audio_url: String,
    pub video_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// 用户输入的原始链接，历史记录按它去重
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl MediaResult {
    /// 对应类别的可下载地址
    pub fn media_url(&self, kind: MediaKind) -> &str {
        match kind {
            MediaKind::Video => &self.video_url,
            MediaKind::Audio => &self.audio_url,
        }
    }
}
