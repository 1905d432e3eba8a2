use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::internal::history::functions::push_recent::{MAX_HISTORY_ENTRIES, push_recent};
use crate::internal::history::traits::history_store::HistoryStore;
use crate::internal::media::structs::MediaResult;

/// 只存在于内存中的历史记录，进程退出即丢失。
#[derive(Debug, Default)]
pub struct MemoryHistory {
    entries: Mutex<Vec<MediaResult>>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以已有记录初始化，超出上限的部分被截掉
    pub fn with_entries(mut entries: Vec<MediaResult>) -> Self {
        entries.truncate(MAX_HISTORY_ENTRIES);
        Self {
            entries: Mutex::new(entries),
        }
    }
}

#[async_trait]
impl HistoryStore for MemoryHistory {
    async fn get(&self) -> Vec<MediaResult> {
        self.entries.lock().await.clone()
    }

    async fn put(&self, item: MediaResult) {
        push_recent(&mut *self.entries.lock().await, item);
    }
}
