use std::time::Duration;

/// 发起请求时立即显示的进度
pub const DEFAULT_REQUEST_MILESTONE: u8 = 10;

/// 拿到响应头、开始读流时显示的进度
pub const DEFAULT_STREAM_MILESTONE: u8 = 30;

/// 结束后保留最终进度的时长（毫秒），之后重置为空闲
pub const DEFAULT_RESET_DELAY_MS: u64 = 500;

/// 拉取媒体时使用的 User-Agent
pub const DEFAULT_USER_AGENT: &str = concat!("tickle_tools/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct TransferConfig {
    pub request_milestone: u8,
    pub stream_milestone: u8,
    pub reset_delay: Duration,
}

impl Default for TransferConfig {
    fn default() -> Self {
        Self {
            request_milestone: DEFAULT_REQUEST_MILESTONE,
            stream_milestone: DEFAULT_STREAM_MILESTONE,
            reset_delay: Duration::from_millis(DEFAULT_RESET_DELAY_MS),
        }
    }
}
