use std::fmt;

use bytes::Bytes;
use futures_util::stream::BoxStream;

use super::transfer_error::TransferError;

/// 响应体的字节流，按到达顺序产出数据块，不可重启
pub type ByteStream = BoxStream<'static, Result<Bytes, TransferError>>;

/// 拉取器的返回值：字节流 + 声明的总大小。
pub struct FetchedBody {
    /// 来自 `Content-Length`；缺失表示未知，而不是 0
    pub total: Option<u64>,
    pub stream: ByteStream,
}

impl FetchedBody {
    pub fn new(total: Option<u64>, stream: ByteStream) -> Self {
        Self { total, stream }
    }
}

impl fmt::Debug for FetchedBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchedBody")
            .field("total", &self.total)
            .finish_non_exhaustive()
    }
}
