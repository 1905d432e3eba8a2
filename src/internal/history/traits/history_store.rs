use async_trait::async_trait;

use crate::internal::media::structs::MediaResult;

/// 历史记录存储，进程内创建一次后注入给会话使用。
///
/// `put` 不返回错误：持久化失败只记录日志，内存中的列表照常更新。
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// 按最新在前的顺序返回全部记录
    async fn get(&self) -> Vec<MediaResult>;

    /// 插入一条记录：同链接的旧记录被移除，新记录放到最前，超出上限的被丢弃
    async fn put(&self, item: MediaResult);
}
