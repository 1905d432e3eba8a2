pub mod assembled_media;
pub mod chunk_advance;
pub mod chunk_sequence;
pub mod fetched_body;
pub mod hook_adapters;
pub mod object_handle;
pub mod transfer_config;
pub mod transfer_error;
pub mod transfer_hooks_container;
pub mod transfer_orchestrator;
pub mod transfer_outcome;
pub mod transfer_phase;
pub mod transfer_progress;
pub mod transfer_request;

// 重导出公共类型
pub use assembled_media::AssembledMedia;
pub use chunk_advance::ChunkAdvance;
pub use chunk_sequence::ChunkSequence;
pub use fetched_body::{ByteStream, FetchedBody};
pub use object_handle::ObjectHandle;
pub use transfer_config::TransferConfig;
pub use transfer_error::TransferError;
pub use transfer_hooks_container::TransferHooksContainer;
pub use transfer_orchestrator::TransferOrchestrator;
pub use transfer_outcome::{SavedMedia, TransferOutcome};
pub use transfer_phase::TransferPhase;
pub use transfer_progress::TransferProgress;
pub use transfer_request::TransferRequest;
