//! 单阶段钩子适配器：把闭包包装成 [`TransferHook`]，供 `with_xx_hook` 使用。

use std::future::Future;

use async_trait::async_trait;

use crate::internal::transfer::traits::hook::TransferHook;

use super::transfer_outcome::TransferOutcome;
use super::transfer_progress::TransferProgress;

pub(crate) struct OnChunkHookAdapter<F>(pub(crate) F);

#[async_trait]
impl<F> TransferHook for OnChunkHookAdapter<F>
where
    F: FnMut(&[u8]) + Send + Sync + 'static,
{
    fn on_chunk(&mut self, chunk: &[u8]) {
        (self.0)(chunk);
    }
}

pub(crate) struct OnProgressHookAdapter<F>(pub(crate) F);

#[async_trait]
impl<F> TransferHook for OnProgressHookAdapter<F>
where
    F: FnMut(TransferProgress) + Send + Sync + 'static,
{
    fn on_progress(&mut self, progress: &TransferProgress) {
        (self.0)(*progress);
    }
}

/// 结果回调只拿到一个借用，闭包若要异步处理需自行拷贝所需字段。
pub(crate) struct AfterSettleHookAdapter<F>(pub(crate) F);

#[async_trait]
impl<F, Fut> TransferHook for AfterSettleHookAdapter<F>
where
    F: FnMut(&TransferOutcome) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    async fn after_settle(&mut self, outcome: &TransferOutcome) {
        (self.0)(outcome).await
    }
}
