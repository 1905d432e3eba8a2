pub mod fallback;
pub mod fetch;
pub mod hook;
pub mod save;
