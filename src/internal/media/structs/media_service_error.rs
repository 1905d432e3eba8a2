//! 提取流程相关错误类型。

use thiserror::Error;

/// 网络或解析失败时展示给用户的兜底文案
pub const GENERIC_FAILURE_MESSAGE: &str =
    "Failed to communicate with extraction servers.";

/// 接口返回非 0 状态码且没有附带消息时的文案
pub const SERVER_ERROR_MESSAGE: &str = "Server error. Try again.";

#[derive(Debug, Error)]
pub enum MediaServiceError {
    /// 链接为空或不是可识别的视频链接，发生在任何网络请求之前
    #[error("{0}")]
    InvalidInput(String),

    /// 协作服务返回失败或数据不完整，消息来自服务端或兜底文案
    #[error("{0}")]
    UpstreamFailure(String),

    #[error("HTTP 请求失败: {0}")]
    Request(#[from] reqwest::Error),

    #[error("响应解析失败: {0}")]
    Decode(#[from] serde_json::Error),
}

impl MediaServiceError {
    /// 展示给用户的消息。
    pub fn user_message(&self) -> String {
        match self {
            MediaServiceError::InvalidInput(msg)
            | MediaServiceError::UpstreamFailure(msg) => msg.clone(),
            MediaServiceError::Request(_) | MediaServiceError::Decode(_) => {
                GENERIC_FAILURE_MESSAGE.to_string()
            }
        }
    }
}
