//! # UnlockReactiveProperty
//!
//! 读写都不阻塞的响应式属性，直接复用 [`super::reactive_core::ReactiveProperty`]。
//! 用于传输进度和提取状态：写入频繁，读者只关心最新值。
//!
//! ```rust,no_run
//! use tickle_tools::states::unlock_reactive::UnlockReactiveProperty;
//!
//! let prop = UnlockReactiveProperty::new(0u8);
//! prop.update(10).update(30);
//! assert_eq!(prop.get_current(), Some(30));
//! ```

pub use super::reactive_core::{PropertyWatcher, ReactivePropertyError as UnlockReactivePropertyError};

/// 轻量级响应式属性容器（无条件等待能力）。
///
/// 需要「等到某个状态出现」时请使用
/// [`LockReactiveProperty`](super::lock_reactive::LockReactiveProperty)。
pub type UnlockReactiveProperty<T> = super::reactive_core::ReactiveProperty<T>;
