//! 传输钩子：在「每块数据 / 进度变化 / 结束」时插入自定义逻辑。
//!
//! 使用方式二选一（可混用）：
//! - **单阶段**：用 `with_on_chunk_hook` / `with_on_progress_hook` / `with_after_settle_hook` 传入闭包；
//! - **完整钩子**：实现本 trait，通过编排器的 `with_hook` 注册。

use async_trait::async_trait;

use crate::internal::transfer::structs::transfer_outcome::TransferOutcome;
use crate::internal::transfer::structs::transfer_progress::TransferProgress;

#[async_trait]
pub trait TransferHook: Send + Sync {
    /// 每收到一段数据时调用，`chunk` 为本段字节。
    fn on_chunk(&mut self, _chunk: &[u8]) {}

    /// 对外进度每次变化时调用，包括里程碑、实时百分比和最终的重置。
    ///
    /// 与 `progress().watch()` 不同，这里不会合并中间值。
    fn on_progress(&mut self, _progress: &TransferProgress) {}

    /// 传输结束、进度已重置后调用；成功与回退都会触发，被拒绝的请求不会。
    async fn after_settle(&mut self, _outcome: &TransferOutcome) {}
}
