//! 下载核心相关错误类型。
//!
//! 这些错误都会在编排器边界被捕获并转成「直接打开原地址」，
//! 调用方只能从 [`super::TransferOutcome::FellBack`] 中看到它们。

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransferError {
    /// 资源地址为空或不是绝对地址，在任何网络请求之前拒绝
    #[error("资源地址无效: {0}")]
    InvalidInput(String),

    /// 传输层成功但状态码非 2xx，通常是 CDN 防盗链
    #[error("资源服务器拒绝传输: {status}")]
    TransferBlocked { status: StatusCode },

    /// 数据流异常结束，`received` 为中断前已收到的字节数
    #[error("数据流中断（已接收 {received} 字节）: {detail}")]
    StreamInterrupted { received: u64, detail: String },

    /// 保存动作无法执行；临时对象仍会被释放
    #[error("保存文件失败: {0}")]
    DeliveryFailed(#[from] std::io::Error),

    #[error("HTTP 请求失败: {0}")]
    Request(#[from] reqwest::Error),
}
