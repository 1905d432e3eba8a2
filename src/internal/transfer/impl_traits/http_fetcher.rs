//! 基于 reqwest 的资源拉取器。

use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::internal::transfer::structs::transfer_config::DEFAULT_USER_AGENT;
use crate::internal::transfer::structs::{FetchedBody, TransferError};
use crate::internal::transfer::traits::fetch::TransferFetcher;

#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, TransferError> {
        let client = Client::builder().user_agent(DEFAULT_USER_AGENT).build()?;
        Ok(Self { client })
    }

    /// 复用已有的 client（例如与提取服务共享连接池）
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TransferFetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchedBody, TransferError> {
        let resp = self.client.get(url.clone()).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(TransferError::TransferBlocked { status });
        }

        let total = resp.content_length();
        debug!(%url, %status, ?total, "资源响应头已到达");

        let stream = resp
            .bytes_stream()
            .map(|item| item.map_err(TransferError::from))
            .boxed();

        Ok(FetchedBody::new(total, stream))
    }
}
