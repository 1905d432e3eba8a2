use std::path::PathBuf;

use super::transfer_error::TransferError;

/// 保存成功的文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedMedia {
    pub filename: String,
    pub location: PathBuf,
    /// 保存的字节数
    pub size: u64,
}

/// 一次 `start_transfer` 的结果。
///
/// 对合法请求，`Delivered`（保存一次）与 `FellBack`（打开原地址一次）恰好发生其一。
#[derive(Debug)]
pub enum TransferOutcome {
    Delivered(SavedMedia),
    /// 下载失败，已改为直接打开原地址
    FellBack(TransferError),
    /// 已有传输进行中，本次请求被忽略
    Rejected,
}

impl TransferOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, TransferOutcome::Delivered(_))
    }

    pub fn is_fell_back(&self) -> bool {
        matches!(self, TransferOutcome::FellBack(_))
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, TransferOutcome::Rejected)
    }
}
