use std::env;

/// 元数据提取接口的默认地址
pub const DEFAULT_EXTRACTOR_BASE_URL: &str = "https://www.tikwm.com/api/";

/// Gemini REST 接口的默认根地址
pub const DEFAULT_ANNOTATOR_BASE_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/";

/// 默认标注模型
pub const DEFAULT_ANNOTATOR_MODEL: &str = "gemini-3-flash-preview";

/// 读取 API Key 的环境变量名
pub const API_KEY_ENV: &str = "API_KEY";
pub const EXTRACTOR_URL_ENV: &str = "TICKLE_EXTRACTOR_URL";
pub const ANNOTATOR_URL_ENV: &str = "TICKLE_ANNOTATOR_URL";
pub const ANNOTATOR_MODEL_ENV: &str = "TICKLE_ANNOTATOR_MODEL";

/// 外部协作服务的配置。
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub extractor_base_url: String,
    pub annotator_base_url: String,
    pub annotator_model: String,
    /// 为空时标注服务直接返回失败，提取结果退回原始字段
    pub api_key: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            extractor_base_url: DEFAULT_EXTRACTOR_BASE_URL.to_string(),
            annotator_base_url: DEFAULT_ANNOTATOR_BASE_URL.to_string(),
            annotator_model: DEFAULT_ANNOTATOR_MODEL.to_string(),
            api_key: String::new(),
        }
    }
}

impl ServiceConfig {
    /// 从环境变量读取配置，未设置的项使用默认值。
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            extractor_base_url: env::var(EXTRACTOR_URL_ENV)
                .unwrap_or(defaults.extractor_base_url),
            annotator_base_url: env::var(ANNOTATOR_URL_ENV)
                .unwrap_or(defaults.annotator_base_url),
            annotator_model: env::var(ANNOTATOR_MODEL_ENV)
                .unwrap_or(defaults.annotator_model),
            api_key: env::var(API_KEY_ENV).unwrap_or_default(),
        }
    }

    pub fn with_extractor_base_url(mut self, url: impl Into<String>) -> Self {
        self.extractor_base_url = url.into();
        self
    }

    pub fn with_annotator_base_url(mut self, url: impl Into<String>) -> Self {
        self.annotator_base_url = url.into();
        self
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = key.into();
        self
    }
}
