//! 本地目录保存目标：临时对象是目录内的隐藏 `.part` 文件，保存即复制为最终文件名。

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::internal::transfer::structs::{AssembledMedia, ObjectHandle, TransferError};
use crate::internal::transfer::traits::save::SaveTarget;

#[derive(Debug)]
pub struct DirectorySaveTarget {
    dir: PathBuf,
    next_id: AtomicU64,
}

impl DirectorySaveTarget {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            next_id: AtomicU64::new(0),
        }
    }

    /// 系统下载目录；取不到时退回当前目录。
    pub fn in_downloads() -> Self {
        Self::new(dirs::download_dir().unwrap_or_else(|| PathBuf::from(".")))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn object_path(&self, id: u64) -> PathBuf {
        self.dir
            .join(format!(".tickle-{}-{id}.part", std::process::id()))
    }
}

#[async_trait]
impl SaveTarget for DirectorySaveTarget {
    async fn create_object(&self, media: &AssembledMedia) -> Result<ObjectHandle, TransferError> {
        tokio::fs::create_dir_all(&self.dir).await?;

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let location = self.object_path(id);
        if let Err(e) = tokio::fs::write(&location, &media.bytes).await {
            let _ = tokio::fs::remove_file(&location).await;
            return Err(TransferError::DeliveryFailed(e));
        }

        debug!(path = %location.display(), size = media.len(), "临时对象已创建");
        Ok(ObjectHandle { id, location })
    }

    async fn save_as(&self, handle: &ObjectHandle, filename: &str) -> Result<PathBuf, TransferError> {
        let dest = self.dir.join(filename);
        tokio::fs::copy(&handle.location, &dest).await?;
        Ok(dest)
    }

    fn revoke_object(&self, handle: &ObjectHandle) {
        match std::fs::remove_file(&handle.location) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!(path = %handle.location.display(), error = %e, "释放临时对象失败"),
        }
    }
}
