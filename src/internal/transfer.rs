//! 下载核心：拉取 → 进度跟踪 → 组装 → 交付，任一环节失败改为直接打开原地址。
//!
//! 使用方式：`TransferOrchestrator::with_defaults()?.with_on_progress_hook(..).start_transfer(request).await`
//! 对外导出以 [`crate::transfer`] 为准。

pub mod functions;
pub mod impl_traits;
pub mod structs;
pub mod traits;
