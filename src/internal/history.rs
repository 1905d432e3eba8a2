//! 最近提取记录：最多 5 条，最新的在前，按原始链接去重。

pub mod functions;
pub mod structs;
pub mod traits;
