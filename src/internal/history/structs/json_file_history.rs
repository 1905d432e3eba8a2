//! 以 JSON 文本持久化的历史记录。
//!
//! 启动时读一次文件，之后每次 `put` 把整个列表重新写回。文件损坏或不存在时
//! 从空列表开始，不影响主流程。

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{error, warn};

use crate::internal::history::functions::push_recent::{MAX_HISTORY_ENTRIES, push_recent};
use crate::internal::history::traits::history_store::HistoryStore;
use crate::internal::media::structs::MediaResult;

use super::history_error::HistoryError;

/// 数据目录下的子目录名
pub const HISTORY_DIR_NAME: &str = "tickle_tools";

/// 历史记录文件名
pub const HISTORY_FILE_NAME: &str = "tickletools_history.json";

/// 默认的历史记录文件路径：`{data_dir}/tickle_tools/tickletools_history.json`
pub fn default_history_path() -> Result<PathBuf, HistoryError> {
    let data_dir = dirs::data_dir().ok_or(HistoryError::NoDataDir)?;
    Ok(data_dir.join(HISTORY_DIR_NAME).join(HISTORY_FILE_NAME))
}

#[derive(Debug)]
pub struct JsonFileHistory {
    path: PathBuf,
    entries: Mutex<Vec<MediaResult>>,
}

impl JsonFileHistory {
    /// 打开默认路径下的历史记录。
    pub async fn open_default() -> Result<Self, HistoryError> {
        Ok(Self::open(default_history_path()?).await)
    }

    /// 读取 `path` 处的历史记录；文件不存在或内容无法解析时得到空列表。
    pub async fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let entries = match read_entries(&path).await {
            Ok(entries) => entries,
            Err(HistoryError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                error!(path = %path.display(), error = %e, "加载历史记录失败");
                Vec::new()
            }
        };

        Self {
            path,
            entries: Mutex::new(entries),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

async fn read_entries(path: &Path) -> Result<Vec<MediaResult>, HistoryError> {
    let text = tokio::fs::read_to_string(path).await?;
    let mut entries: Vec<MediaResult> = serde_json::from_str(&text)?;
    entries.truncate(MAX_HISTORY_ENTRIES);
    Ok(entries)
}

async fn write_entries(path: &Path, entries: &[MediaResult]) -> Result<(), HistoryError> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    let text = serde_json::to_string(entries)?;
    tokio::fs::write(path, text).await?;
    Ok(())
}

#[async_trait]
impl HistoryStore for JsonFileHistory {
    async fn get(&self) -> Vec<MediaResult> {
        self.entries.lock().await.clone()
    }

    async fn put(&self, item: MediaResult) {
        let mut entries = self.entries.lock().await;
        push_recent(&mut entries, item);

        // 持有锁写盘，保证文件内容与内存顺序一致
        if let Err(e) = write_entries(&self.path, &entries).await {
            warn!(path = %self.path.display(), error = %e, "保存历史记录失败");
        }
    }
}
