//! 本库主入口：一个会话对应一个页面的生命周期。
//!
//! 会话把三件事串起来：
//! - 输入链接 → [`MediaService`] 提取 → 写入 [`HistoryStore`]，提取状态以响应式属性暴露；
//! - 对当前结果发起视频 / 音频下载，交给 [`TransferOrchestrator`]；
//! - 重置回输入状态。
//!
//! 提取失败会写进 `ExtractionState.error` 并返回给调用方；下载失败不会，
//! 编排器已经用回退处理消化了它。

use std::sync::Arc;

use tracing::{info, warn};

use crate::internal::history::traits::history_store::HistoryStore;
use crate::internal::media::functions::link::is_platform_link;
use crate::internal::media::structs::{
    ExtractionState, MediaKind, MediaResult, MediaService, MediaServiceError,
};
use crate::internal::states::unlock_reactive::UnlockReactiveProperty;
use crate::internal::transfer::structs::{
    TransferError, TransferOrchestrator, TransferOutcome, TransferRequest,
};

/// 输入不是目标平台链接时的提示
pub const INVALID_LINK_MESSAGE: &str = "Please enter a valid TikTok link.";

pub struct TickleSession {
    service: MediaService,
    history: Arc<dyn HistoryStore>,
    orchestrator: Arc<TransferOrchestrator>,
    state: UnlockReactiveProperty<ExtractionState>,
}

impl TickleSession {
    pub fn new(
        service: MediaService,
        history: Arc<dyn HistoryStore>,
        orchestrator: Arc<TransferOrchestrator>,
    ) -> Self {
        Self {
            service,
            history,
            orchestrator,
            state: UnlockReactiveProperty::new(ExtractionState::default()),
        }
    }

    /// 提取状态；返回可共享句柄。
    pub fn state(&self) -> UnlockReactiveProperty<ExtractionState> {
        self.state.clone()
    }

    pub fn orchestrator(&self) -> Arc<TransferOrchestrator> {
        Arc::clone(&self.orchestrator)
    }

    /// 最近的提取记录，最新在前
    pub async fn history(&self) -> Vec<MediaResult> {
        self.history.get().await
    }

    /// 提取链接对应的媒体。成功后写入历史记录。
    ///
    /// 链接无效时只更新错误提示，保留已有结果，不发起任何请求。
    pub async fn extract(&self, url: &str) -> Result<MediaResult, MediaServiceError> {
        let target = url.trim();
        if !is_platform_link(target) {
            self.state.update_field(|s| {
                s.error = Some(INVALID_LINK_MESSAGE.to_string());
            });
            return Err(MediaServiceError::InvalidInput(
                INVALID_LINK_MESSAGE.to_string(),
            ));
        }

        self.state.update(ExtractionState::loading());

        match self.service.extract_media(target).await {
            Ok(result) => {
                info!(url = target, title = %result.title, "提取成功");
                self.state.update(ExtractionState::succeeded(result.clone()));
                self.history.put(result.clone()).await;
                Ok(result)
            }
            Err(e) => {
                self.state.update(ExtractionState::failed(e.user_message()));
                Err(e)
            }
        }
    }

    /// 重新提取第 `index` 条历史记录；下标越界或记录没有原始链接时返回 `None`。
    pub async fn extract_recent(
        &self,
        index: usize,
    ) -> Option<Result<MediaResult, MediaServiceError>> {
        let url = self.history.get().await.into_iter().nth(index)?.url?;
        Some(self.extract(&url).await)
    }

    /// 清空结果与错误，回到输入状态。
    pub fn reset(&self) {
        self.state.update(ExtractionState::default());
    }

    /// 下载当前结果的视频或音频。
    ///
    /// 还没有结果、或结果中的地址无效时返回 `InvalidInput`，不会发起传输。
    pub async fn download(&self, kind: MediaKind) -> Result<TransferOutcome, TransferError> {
        let media = self
            .state
            .map(|s| s.result.clone())
            .flatten()
            .ok_or_else(|| TransferError::InvalidInput("还没有可下载的结果".to_string()))?;

        let request = TransferRequest::from_media(&media, kind).inspect_err(|e| {
            warn!(%kind, error = %e, "结果中的下载地址无效");
        })?;

        Ok(self.orchestrator.start_transfer(request).await)
    }
}
