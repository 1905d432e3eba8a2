use url::Url;

use crate::internal::media::structs::{MediaKind, MediaResult};

use super::transfer_error::TransferError;

/// 一次下载请求，创建后不可变，传输结束即丢弃。
#[derive(Debug, Clone, PartialEq)]
pub struct TransferRequest {
    resource_url: Url,
    kind: MediaKind,
    author: String,
}

impl TransferRequest {
    /// 校验资源地址：不能为空，必须是 http(s) 绝对地址。
    pub fn new(
        kind: MediaKind,
        resource_url: &str,
        author: impl Into<String>,
    ) -> Result<Self, TransferError> {
        let trimmed = resource_url.trim();
        if trimmed.is_empty() {
            return Err(TransferError::InvalidInput("资源地址为空".to_string()));
        }

        let url = Url::parse(trimmed)
            .map_err(|e| TransferError::InvalidInput(format!("{trimmed}: {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(TransferError::InvalidInput(format!(
                "不支持的协议: {}",
                url.scheme()
            )));
        }

        Ok(Self {
            resource_url: url,
            kind,
            author: author.into(),
        })
    }

    /// 从提取结果中取对应类别的地址和作者。
    pub fn from_media(media: &MediaResult, kind: MediaKind) -> Result<Self, TransferError> {
        Self::new(kind, media.media_url(kind), media.author.clone())
    }

    pub fn resource_url(&self) -> &Url {
        &self.resource_url
    }

    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    /// 作者标识，可能带 `@` 前缀
    pub fn author(&self) -> &str {
        &self.author
    }
}
