//! # ReactiveProperty：响应式属性内核
//!
//! 基于 `tokio::sync::watch` 的单写多读容器。下载进度、提取状态这类
//! 高频、只关心「最新值」的数据都建立在它之上。
//!
//! 属性的最后一个句柄被释放时，所有监听器会收到 [`ReactivePropertyError::WatcherClosed`]。

use std::sync::Arc;
use thiserror::Error;
use tokio::sync::watch;
use tokio::sync::watch::error::RecvError;

/// 响应式属性统一错误类型
#[derive(Debug, Error)]
pub enum ReactivePropertyError {
    /// 监听器对应的属性已被销毁
    #[error("监听器已被销毁")]
    WatcherClosed,

    #[error("接收失败: {0}")]
    RecvError(#[from] RecvError),
}

#[derive(Debug)]
pub(crate) struct Inner<T> {
    pub(crate) sender: watch::Sender<Option<T>>,
}

impl<T> Drop for Inner<T> {
    fn drop(&mut self) {
        let _ = self.sender.send(None);
    }
}

/// 响应式属性内核：new / update / update_field / get_current / watch。
#[derive(Clone, Debug)]
pub struct ReactiveProperty<T: Clone + Send + Sync> {
    pub(crate) inner: Arc<Inner<T>>,
    pub(crate) cache_receiver: watch::Receiver<Option<T>>,
}

impl<T> ReactiveProperty<T>
where
    T: Clone + Send + Sync,
{
    pub fn new(value: T) -> Self {
        let (sender, cache_receiver) = watch::channel(Some(value));
        Self {
            inner: Arc::new(Inner { sender }),
            cache_receiver,
        }
    }

    /// 覆盖当前值并通知所有监听者。没有监听者时也会更新缓存值。
    pub fn update(&self, new_value: T) -> &Self {
        self.inner.sender.send_replace(Some(new_value));
        self
    }

    /// 在当前值上执行闭包并通知监听者，返回闭包的结果；属性已销毁时返回 `None`。
    pub fn update_field<F, R>(&self, updater: F) -> Option<R>
    where
        F: FnOnce(&mut T) -> R,
    {
        let mut out = None;
        self.inner.sender.send_modify(|slot| {
            if let Some(value) = slot.as_mut() {
                out = Some(updater(value));
            }
        });
        out
    }

    /// 当前值的快照（clone 一次）。
    pub fn get_current(&self) -> Option<T> {
        self.cache_receiver.borrow().as_ref().cloned()
    }

    pub fn get_or_default(&self) -> T
    where
        T: Default,
    {
        self.get_current().unwrap_or_default()
    }

    /// 对当前值应用转换函数，不发生 clone。
    pub fn map<R, F>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&T) -> R,
    {
        self.cache_receiver.borrow().as_ref().map(f)
    }

    /// 创建监听器。监听器只会看到创建之后发生的变化。
    pub fn watch(&self) -> PropertyWatcher<T> {
        let mut receiver = self.inner.sender.subscribe();
        receiver.mark_unchanged();
        PropertyWatcher { receiver }
    }
}

/// 属性监听器，用于异步接收属性值的变化。
///
/// `watch` 通道只保留最新值：监听者处理得慢时，中间值会被合并掉。
/// 需要逐个观察每一次变化时，请改用编排器的进度钩子。
pub struct PropertyWatcher<T> {
    receiver: watch::Receiver<Option<T>>,
}

impl<T> PropertyWatcher<T>
where
    T: Clone + Send + Sync,
{
    pub async fn changed(&mut self) -> Result<T, ReactivePropertyError> {
        self.receiver.changed().await?;
        match self.receiver.borrow_and_update().as_ref() {
            None => Err(ReactivePropertyError::WatcherClosed),
            Some(value) => Ok(value.clone()),
        }
    }

    pub fn borrow(&self) -> Option<T> {
        self.receiver.borrow().clone()
    }
}
