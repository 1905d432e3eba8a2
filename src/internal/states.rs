//! 可观察状态容器：进度、阶段、提取状态都以响应式属性的形式对外暴露。

pub mod lock_reactive;
pub mod reactive_core;
pub mod unlock_reactive;
