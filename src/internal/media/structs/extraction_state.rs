use super::media_result::MediaResult;

/// 提取流程的可观察状态，对应页面上的加载中 / 错误提示 / 结果卡片。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractionState {
    pub loading: bool,
    pub error: Option<String>,
    pub result: Option<MediaResult>,
}

impl ExtractionState {
    pub fn loading() -> Self {
        Self {
            loading: true,
            error: None,
            result: None,
        }
    }

    pub fn succeeded(result: MediaResult) -> Self {
        Self {
            loading: false,
            error: None,
            result: Some(result),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            loading: false,
            error: Some(message.into()),
            result: None,
        }
    }
}
