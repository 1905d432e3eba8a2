/// 进度跟踪器每收到一块数据时报告的累计情况。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkAdvance {
    /// 累计已接收字节数
    pub received: u64,
    /// 响应声明的总大小，未知时为 `None`
    pub total: Option<u64>,
    /// 仅在总大小已知且非 0 时计算，已夹紧到 0～100
    pub percent: Option<u8>,
}
