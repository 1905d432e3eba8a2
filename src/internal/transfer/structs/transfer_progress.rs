use crate::internal::media::structs::MediaKind;

/// 对外可见的传输进度：当前类别与百分比（0～100）。
///
/// 由编排器独占写入；空闲时为 `{ kind: None, percent: 0 }`。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransferProgress {
    pub kind: Option<MediaKind>,
    pub percent: u8,
}

impl TransferProgress {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn active(kind: MediaKind, percent: u8) -> Self {
        Self {
            kind: Some(kind),
            percent: percent.min(100),
        }
    }

    pub fn is_active(&self) -> bool {
        self.kind.is_some()
    }
}
