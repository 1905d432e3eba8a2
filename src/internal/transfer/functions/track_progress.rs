//! 进度跟踪：逐块读取字节流，累计字节数并计算百分比。

use bytes::Bytes;
use futures_util::StreamExt;

use crate::internal::transfer::structs::{ChunkAdvance, ChunkSequence, FetchedBody, TransferError};

/// `round(received / total * 100)`，夹紧到 0～100。
///
/// 总大小未知或为 0 时返回 `None`，不会产生越界值或 NaN。
pub fn percent_of(received: u64, total: Option<u64>) -> Option<u8> {
    let total = total.filter(|&t| t > 0)? as u128;
    let scaled = (received as u128 * 100 + total / 2) / total;
    Some(scaled.min(100) as u8)
}

/// 读取整个字节流，每收到一块调用一次 `on_advance`，结束后返回有序的块序列。
///
/// - 流中的错误统一转为 [`TransferError::StreamInterrupted`]；
/// - 总大小已知时，实际字节数少于声明值也视为中断；多于声明值时百分比停在 100。
pub async fn track_progress<F>(
    body: FetchedBody,
    mut on_advance: F,
) -> Result<ChunkSequence, TransferError>
where
    F: FnMut(&Bytes, ChunkAdvance),
{
    let FetchedBody { total, mut stream } = body;
    let mut sequence = ChunkSequence::new();

    while let Some(item) = stream.next().await {
        let chunk = item.map_err(|e| TransferError::StreamInterrupted {
            received: sequence.total_len(),
            detail: e.to_string(),
        })?;
        if chunk.is_empty() {
            continue;
        }

        let received = sequence.total_len() + chunk.len() as u64;
        on_advance(
            &chunk,
            ChunkAdvance {
                received,
                total,
                percent: percent_of(received, total),
            },
        );
        sequence.push(chunk);
    }

    if let Some(expected) = total.filter(|&t| t > 0) {
        let received = sequence.total_len();
        if received < expected {
            return Err(TransferError::StreamInterrupted {
                received,
                detail: format!("声明 {expected} 字节，数据流提前结束"),
            });
        }
    }

    Ok(sequence)
}
