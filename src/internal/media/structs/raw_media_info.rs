/// 元数据提取服务返回的原始字段（已从接口的信封结构中取出）。
#[derive(Debug, Clone, PartialEq)]
pub struct RawMediaInfo {
    /// 可直接播放的视频地址
    pub play: String,
    /// 背景音乐地址
    pub music: String,
    /// 封面图地址
    pub cover: String,
    /// 时长（秒）
    pub duration: u64,
    /// 视频文案，同时作为描述
    pub title: String,
    /// 作者的 unique_id，不带 `@`
    pub author_unique_id: String,
}
