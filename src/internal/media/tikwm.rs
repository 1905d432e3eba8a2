//! tikwm.com 解析接口：把视频链接换成无水印的视频 / 音乐地址。

pub mod raw_response;
pub mod tikwm_extractor;

pub use tikwm_extractor::TikwmExtractor;
