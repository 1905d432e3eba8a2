pub mod history_error;
pub mod json_file_history;
pub mod memory_history;

pub use history_error::HistoryError;
pub use json_file_history::JsonFileHistory;
pub use memory_history::MemoryHistory;
