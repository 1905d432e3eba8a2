use async_trait::async_trait;
use url::Url;

use crate::internal::transfer::structs::fetched_body::FetchedBody;
use crate::internal::transfer::structs::transfer_error::TransferError;

/// 资源拉取器：发起 GET，返回字节流和声明的总大小。
///
/// 状态码非 2xx 时必须返回 [`TransferError::TransferBlocked`]。
#[async_trait]
pub trait TransferFetcher: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<FetchedBody, TransferError>;
}
