//! 交付：创建临时对象 → 保存一次 → 释放临时对象。

use crate::internal::transfer::structs::{AssembledMedia, ObjectHandle, SavedMedia, TransferError};
use crate::internal::transfer::traits::save::SaveTarget;

/// 持有临时对象的句柄，离开作用域时释放；成功、出错、panic 都只释放一次。
struct ObjectGuard<'a> {
    target: &'a dyn SaveTarget,
    handle: ObjectHandle,
}

impl Drop for ObjectGuard<'_> {
    fn drop(&mut self) {
        self.target.revoke_object(&self.handle);
    }
}

/// 交付组装结果。保存动作恰好执行一次，其错误原样返回给编排器。
pub async fn deliver(
    target: &dyn SaveTarget,
    media: AssembledMedia,
) -> Result<SavedMedia, TransferError> {
    let handle = target.create_object(&media).await?;
    let guard = ObjectGuard { target, handle };

    let location = target.save_as(&guard.handle, &media.filename).await?;
    drop(guard);

    Ok(SavedMedia {
        size: media.len(),
        filename: media.filename,
        location,
    })
}
