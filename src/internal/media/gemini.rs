//! Gemini `generateContent` 接口：为视频链接生成标题、作者与标签。

pub mod gemini_annotator;
pub mod raw_response;

pub use gemini_annotator::GeminiAnnotator;
