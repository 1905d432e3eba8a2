pub mod annotation;
pub mod extraction_state;
pub mod media_kind;
pub mod media_result;
pub mod media_service;
pub mod media_service_error;
pub mod raw_media_info;
pub mod service_config;

pub use annotation::Annotation;
pub use extraction_state::ExtractionState;
pub use media_kind::MediaKind;
pub use media_result::MediaResult;
pub use media_service::MediaService;
pub use media_service_error::MediaServiceError;
pub use raw_media_info::RawMediaInfo;
pub use service_config::ServiceConfig;
