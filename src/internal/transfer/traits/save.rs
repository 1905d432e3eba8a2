use std::path::PathBuf;

use async_trait::async_trait;

use crate::internal::transfer::structs::assembled_media::AssembledMedia;
use crate::internal::transfer::structs::object_handle::ObjectHandle;
use crate::internal::transfer::structs::transfer_error::TransferError;

/// 保存目标：把组装结果变成临时的本地对象，再以指定文件名执行一次保存。
///
/// 调用方保证每个成功创建的句柄都恰好被 `revoke_object` 一次，
/// 见 [`crate::transfer::functions::deliver::deliver`]。
#[async_trait]
pub trait SaveTarget: Send + Sync {
    /// 创建临时对象。失败时实现方自行清理已写入的部分。
    async fn create_object(&self, media: &AssembledMedia) -> Result<ObjectHandle, TransferError>;

    /// 以 `filename` 保存临时对象，返回最终位置。
    async fn save_as(&self, handle: &ObjectHandle, filename: &str) -> Result<PathBuf, TransferError>;

    /// 释放临时对象。同步执行，可以在 Drop 中调用；失败只记录日志。
    fn revoke_object(&self, handle: &ObjectHandle);
}
