/// 内部实现模块，对外只通过下方的 pub mod 导出
mod internal;


/// 导出核心入口
pub use internal::entrance::session::*;

pub mod states {
    pub mod lock_reactive {
        use crate::internal;
        pub use internal::states::lock_reactive::*;
    }

    pub mod unlock_reactive {
        use crate::internal;
        pub use internal::states::unlock_reactive::*;
    }
}

/// 媒体提取：链接校验、协作服务接口与默认实现
pub mod media {
    use crate::internal;
    pub use internal::media::structs::*;
    pub use internal::media::structs::media_service::{FALLBACK_TAG, FALLBACK_TITLE, INVALID_URL_MESSAGE};
    pub use internal::media::structs::media_service_error::{GENERIC_FAILURE_MESSAGE, SERVER_ERROR_MESSAGE};
    pub use internal::media::structs::service_config::{
        ANNOTATOR_MODEL_ENV, ANNOTATOR_URL_ENV, API_KEY_ENV, DEFAULT_ANNOTATOR_BASE_URL,
        DEFAULT_ANNOTATOR_MODEL, DEFAULT_EXTRACTOR_BASE_URL, EXTRACTOR_URL_ENV,
    };
    pub use internal::media::traits::collaborators::*;
    pub use internal::media::functions::link::*;
    pub use internal::media::gemini::GeminiAnnotator;
    pub use internal::media::tikwm::TikwmExtractor;
}

/// 下载核心：类型与入口（以 lib 为中心，此处统一导出）
pub mod transfer {
    use crate::internal;
    pub use internal::transfer::structs::*;
    pub use internal::transfer::structs::assembled_media::synthesize_filename;
    pub use internal::transfer::structs::transfer_config::{
        DEFAULT_REQUEST_MILESTONE, DEFAULT_RESET_DELAY_MS, DEFAULT_STREAM_MILESTONE,
        DEFAULT_USER_AGENT,
    };
    pub use internal::transfer::impl_traits::directory_save_target::DirectorySaveTarget;
    pub use internal::transfer::impl_traits::http_fetcher::HttpFetcher;
    pub use internal::transfer::impl_traits::system_browser::SystemBrowser;

    pub mod traits {
        use crate::internal;
        pub use internal::transfer::traits::*;
    }

    pub mod functions {
        use crate::internal;
        pub use internal::transfer::functions::*;
    }
}

/// 历史记录
pub mod history {
    use crate::internal;
    pub use internal::history::functions::push_recent::*;
    pub use internal::history::structs::*;
    pub use internal::history::structs::json_file_history::{default_history_path, HISTORY_FILE_NAME};
    pub use internal::history::traits::history_store::HistoryStore;
}
