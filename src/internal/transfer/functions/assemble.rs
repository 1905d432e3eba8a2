use bytes::{Bytes, BytesMut};

use crate::internal::transfer::structs::ChunkSequence;

/// 把块序列按顺序拼成一个完整对象。空序列得到空对象，不算错误。
pub fn assemble(sequence: ChunkSequence) -> Bytes {
    let mut out = BytesMut::with_capacity(sequence.total_len() as usize);
    for chunk in sequence.into_chunks() {
        out.extend_from_slice(&chunk);
    }
    out.freeze()
}
