use std::path::PathBuf;

/// 组装结果的临时本地引用，由 [`crate::transfer::traits::save::SaveTarget`] 创建与释放。
///
/// 不实现 Clone：一个句柄只对应一次释放。
#[derive(Debug, PartialEq, Eq)]
pub struct ObjectHandle {
    pub id: u64,
    /// 临时对象所在位置
    pub location: PathBuf,
}
