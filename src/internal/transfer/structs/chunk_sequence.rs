//! 按到达顺序排列的数据块序列，只增不减，被组装器按值消费一次。

use bytes::Bytes;

#[derive(Debug, Clone, Default)]
pub struct ChunkSequence {
    chunks: Vec<Bytes>,
    /// 全部块的字节数之和
    total_len: u64,
}

impl ChunkSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一块，返回追加后的累计字节数。
    pub fn push(&mut self, chunk: Bytes) -> u64 {
        self.total_len += chunk.len() as u64;
        self.chunks.push(chunk);
        self.total_len
    }

    pub fn total_len(&self) -> u64 {
        self.total_len
    }

    /// 块的个数
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    pub(crate) fn into_chunks(self) -> Vec<Bytes> {
        self.chunks
    }
}
