//! # LockReactiveProperty
//!
//! 带条件等待能力的响应式属性，基于 `tokio::sync::Mutex` + `Notify`。
//!
//! 与 `UnlockReactiveProperty` 的区别：`wait_until` 不会错过任何一次满足条件的
//! 状态，即使状态在微秒级内再次切换。编排器的阶段（Idle → Requesting → …）用它保存，
//! 调用方可以挂起直到传输进入某个阶段。
//!
//! ```rust,no_run
//! use tickle_tools::states::lock_reactive::LockReactiveProperty;
//!
//! # async fn example() {
//! let prop = LockReactiveProperty::new(0u8);
//!
//! let p = prop.clone();
//! tokio::spawn(async move {
//!     p.update(42).await;
//! });
//!
//! prop.wait_until(|v| *v == 42).await;
//! # }
//! ```

use std::sync::Arc;
use tokio::sync::{Mutex, Notify};

struct Inner<T> {
    value: Mutex<T>,
    notify: Notify,
}

/// 带条件等待能力的响应式属性容器。
#[derive(Clone)]
pub struct LockReactiveProperty<T: Clone + Send + Sync> {
    inner: Arc<Inner<T>>,
}

impl<T> std::fmt::Debug for LockReactiveProperty<T>
where
    T: Clone + Send + Sync,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LockReactiveProperty").finish_non_exhaustive()
    }
}

impl<T> LockReactiveProperty<T>
where
    T: Clone + Send + Sync,
{
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(Inner {
                value: Mutex::new(value),
                notify: Notify::new(),
            }),
        }
    }

    /// 更新属性值并唤醒所有等待者。
    pub async fn update(&self, new_value: T) {
        *self.inner.value.lock().await = new_value;
        self.inner.notify.notify_waiters();
    }

    /// 不等待锁的更新；锁正被占用时放弃并返回 `false`。
    ///
    /// 用在 `Drop` 这类不能 `.await` 的地方。
    pub fn try_update(&self, new_value: T) -> bool {
        match self.inner.value.try_lock() {
            Ok(mut guard) => {
                *guard = new_value;
                drop(guard);
                self.inner.notify.notify_waiters();
                true
            }
            Err(_) => false,
        }
    }

    /// 仅当当前值满足 `predicate` 时写入新值，判断与写入在同一把锁内完成。
    ///
    /// 返回 `true` 表示已写入；`false` 表示条件不满足，值保持不变。
    pub async fn update_if<F>(&self, predicate: F, new_value: T) -> bool
    where
        F: FnOnce(&T) -> bool,
    {
        let mut guard = self.inner.value.lock().await;
        if !predicate(&guard) {
            return false;
        }
        *guard = new_value;
        drop(guard);
        self.inner.notify.notify_waiters();
        true
    }

    pub async fn get_current(&self) -> T {
        self.inner.value.lock().await.clone()
    }

    /// 挂起当前任务，直到值满足 `predicate`；当前值已满足时立即返回。
    pub async fn wait_until<F>(&self, mut predicate: F)
    where
        F: FnMut(&T) -> bool,
    {
        loop {
            // 先注册通知再检查条件，检查与等待之间的更新不会丢失
            let notified = self.inner.notify.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();

            if predicate(&*self.inner.value.lock().await) {
                return;
            }

            notified.await;
        }
    }
}
