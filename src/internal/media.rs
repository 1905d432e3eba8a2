//! 媒体领域：链接校验、元数据提取、AI 标注以及两者合并后的 [`structs::MediaResult`]。

pub mod functions;
pub mod gemini;
pub mod structs;
pub mod tikwm;
pub mod traits;
