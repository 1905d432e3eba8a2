//! 下载编排器
//!
//! 按顺序驱动拉取、进度跟踪、组装、交付四个环节，并维护对外可见的进度。
//!
//! ## 状态机
//!
//! ```text
//! Idle → Requesting → Streaming → Assembling → Delivering → Idle
//!            └───────────┴────────────┴────────────┴──→ Failed → Idle
//! ```
//!
//! - 同一时刻只允许一个传输：阶段不是 `Idle` 时，`start_transfer` 直接返回 `Rejected`；
//! - 进入 `Requesting` 显示请求里程碑（默认 10%），进入 `Streaming` 显示读流里程碑（默认 30%），
//!   之后每次算出的百分比覆盖当前进度，但不会让进度回退；
//! - 任一环节失败：进入 `Failed`，记录日志，用原始地址调用回退处理；
//! - 无论成功失败，等待 `reset_delay`（默认 500ms）后进度重置为 `{None, 0}` 并回到 `Idle`；
//!   调用方中途丢弃 future 时立即复位，不等待延迟。
//!
//! 错误从不向上抛出，调用方从返回的 [`TransferOutcome`] 判断走了哪条路径。
//!
//! ## 使用示例
//!
//! ```rust,no_run
//! # use tickle_tools::transfer::{TransferOrchestrator, TransferRequest};
//! # use tickle_tools::media::MediaKind;
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let orchestrator = TransferOrchestrator::with_defaults()?
//!     .with_on_progress_hook(|p| println!("{:?} {}%", p.kind, p.percent));
//!
//! let request = TransferRequest::new(MediaKind::Video, "https://cdn.example/v.mp4", "@someone")?;
//! let outcome = orchestrator.start_transfer(request).await;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use crate::internal::media::structs::MediaKind;
use crate::internal::states::lock_reactive::LockReactiveProperty;
use crate::internal::states::unlock_reactive::UnlockReactiveProperty;
use crate::internal::transfer::functions::assemble::assemble;
use crate::internal::transfer::functions::deliver::deliver;
use crate::internal::transfer::functions::track_progress::track_progress;
use crate::internal::transfer::impl_traits::directory_save_target::DirectorySaveTarget;
use crate::internal::transfer::impl_traits::http_fetcher::HttpFetcher;
use crate::internal::transfer::impl_traits::system_browser::SystemBrowser;
use crate::internal::transfer::traits::fallback::FallbackNavigator;
use crate::internal::transfer::traits::fetch::TransferFetcher;
use crate::internal::transfer::traits::hook::TransferHook;
use crate::internal::transfer::traits::save::SaveTarget;

use super::assembled_media::AssembledMedia;
use super::hook_adapters::{AfterSettleHookAdapter, OnChunkHookAdapter, OnProgressHookAdapter};
use super::TransferConfig;
use super::transfer_error::TransferError;
use super::transfer_hooks_container::TransferHooksContainer;
use super::transfer_outcome::{SavedMedia, TransferOutcome};
use super::transfer_phase::TransferPhase;
use super::transfer_progress::TransferProgress;
use super::transfer_request::TransferRequest;

/// 下载编排器。通常放在 `Arc` 中与界面层共享；进度与阶段只读地暴露给外部。
pub struct TransferOrchestrator {
    fetcher: Arc<dyn TransferFetcher>,
    save_target: Arc<dyn SaveTarget>,
    navigator: Arc<dyn FallbackNavigator>,
    config: TransferConfig,
    /// 同一时刻只有一个传输持有该锁
    hooks: Mutex<TransferHooksContainer>,
    progress_state: UnlockReactiveProperty<TransferProgress>,
    /// 阶段兼作入口守卫：只有从 Idle 成功切到 Requesting 的调用才能继续
    phase_state: LockReactiveProperty<TransferPhase>,
}

impl TransferOrchestrator {
    pub fn new(
        fetcher: Arc<dyn TransferFetcher>,
        save_target: Arc<dyn SaveTarget>,
        navigator: Arc<dyn FallbackNavigator>,
    ) -> Self {
        Self {
            fetcher,
            save_target,
            navigator,
            config: TransferConfig::default(),
            hooks: Mutex::new(TransferHooksContainer::default()),
            progress_state: UnlockReactiveProperty::new(TransferProgress::idle()),
            phase_state: LockReactiveProperty::new(TransferPhase::Idle),
        }
    }

    /// HTTP 拉取 + 保存到系统下载目录 + 系统默认程序回退。
    pub fn with_defaults() -> Result<Self, TransferError> {
        Ok(Self::new(
            Arc::new(HttpFetcher::new()?),
            Arc::new(DirectorySaveTarget::in_downloads()),
            Arc::new(SystemBrowser),
        ))
    }

    pub fn with_config(mut self, config: TransferConfig) -> Self {
        self.config = config;
        self
    }

    /// 设置结束后保留最终进度的时长
    pub fn reset_delay(mut self, delay: std::time::Duration) -> Self {
        self.config.reset_delay = delay;
        self
    }

    /// 注册「每块数据」钩子。
    pub fn with_on_chunk_hook<F>(mut self, f: F) -> Self
    where
        F: FnMut(&[u8]) + Send + Sync + 'static,
    {
        self.hooks.get_mut().add(OnChunkHookAdapter(f));
        self
    }

    /// 注册「进度」钩子；每次对外进度变化都会调用，不合并中间值。
    pub fn with_on_progress_hook<F>(mut self, f: F) -> Self
    where
        F: FnMut(TransferProgress) + Send + Sync + 'static,
    {
        self.hooks.get_mut().add(OnProgressHookAdapter(f));
        self
    }

    /// 注册「结束后」钩子；状态重置后调用。
    pub fn with_after_settle_hook<F, Fut>(mut self, f: F) -> Self
    where
        F: FnMut(&TransferOutcome) -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<Output = ()> + Send + 'static,
    {
        self.hooks.get_mut().add(AfterSettleHookAdapter(f));
        self
    }

    /// 添加完整钩子。
    pub fn with_hook(mut self, hook: impl TransferHook + 'static) -> Self {
        self.hooks.get_mut().add(hook);
        self
    }

    /// 对外进度；返回可共享句柄，`.watch()` 后 `changed().await` 监听。
    pub fn progress(&self) -> UnlockReactiveProperty<TransferProgress> {
        self.progress_state.clone()
    }

    /// 当前阶段；可用 `wait_until` 等待进入某个阶段。
    pub fn phase(&self) -> LockReactiveProperty<TransferPhase> {
        self.phase_state.clone()
    }

    pub fn config(&self) -> &TransferConfig {
        &self.config
    }

    /// 开始一次传输，直到状态重置回 `Idle` 才返回。
    pub async fn start_transfer(&self, request: TransferRequest) -> TransferOutcome {
        let entered = self
            .phase_state
            .update_if(TransferPhase::is_idle, TransferPhase::Requesting)
            .await;
        if !entered {
            warn!(
                kind = %request.kind(),
                url = %request.resource_url(),
                "已有传输进行中，忽略本次请求"
            );
            return TransferOutcome::Rejected;
        }
        let settle = SettleGuard {
            progress: self.progress_state.clone(),
            phase: self.phase_state.clone(),
            armed: true,
        };

        let mut hooks = self.hooks.lock().await;
        info!(kind = %request.kind(), url = %request.resource_url(), "开始传输");

        let outcome = match self.run_pipeline(&request, &mut hooks).await {
            Ok(saved) => {
                info!(
                    filename = %saved.filename,
                    size = saved.size,
                    "传输完成"
                );
                TransferOutcome::Delivered(saved)
            }
            Err(err) => {
                self.enter_phase(TransferPhase::Failed).await;
                error!(
                    kind = %request.kind(),
                    url = %request.resource_url(),
                    error = %err,
                    "传输失败，改为直接打开原地址"
                );
                self.navigator.open_external(request.resource_url());
                TransferOutcome::FellBack(err)
            }
        };

        tokio::time::sleep(self.config.reset_delay).await;

        self.set_progress(&mut hooks, TransferProgress::idle());
        hooks.run_after_settle(&outcome).await;
        drop(hooks);
        self.enter_phase(TransferPhase::Idle).await;
        settle.disarm();

        outcome
    }

    async fn run_pipeline(
        &self,
        request: &TransferRequest,
        hooks: &mut TransferHooksContainer,
    ) -> Result<SavedMedia, TransferError> {
        let kind = request.kind();

        self.set_progress(
            hooks,
            TransferProgress::active(kind, self.config.request_milestone),
        );
        let body = self.fetcher.fetch(request.resource_url()).await?;

        // 先更新进度再切换阶段，观察到 Streaming 时读流里程碑已就位
        self.set_progress(
            hooks,
            TransferProgress::active(kind, self.config.stream_milestone),
        );
        self.enter_phase(TransferPhase::Streaming).await;
        let sequence = track_progress(body, |chunk, advance| {
            hooks.run_on_chunk(chunk);
            if let Some(percent) = advance.percent {
                self.raise_progress(hooks, kind, percent);
            }
        })
        .await?;
        debug!(
            chunks = sequence.len(),
            received = sequence.total_len(),
            "数据流读取完毕"
        );

        self.enter_phase(TransferPhase::Assembling).await;
        let media = AssembledMedia::new(assemble(sequence), request.author(), kind);

        self.enter_phase(TransferPhase::Delivering).await;
        deliver(self.save_target.as_ref(), media).await
    }

    async fn enter_phase(&self, phase: TransferPhase) {
        debug!(?phase, "切换传输阶段");
        self.phase_state.update(phase).await;
    }

    fn set_progress(&self, hooks: &mut TransferHooksContainer, progress: TransferProgress) {
        self.progress_state.update(progress);
        hooks.run_on_progress(&progress);
    }

    /// 用实时百分比覆盖进度；不高于当前值时忽略，保证单次传输内进度不回退。
    fn raise_progress(&self, hooks: &mut TransferHooksContainer, kind: MediaKind, percent: u8) {
        let current = self.progress_state.get_or_default();
        if percent <= current.percent {
            return;
        }
        self.set_progress(hooks, TransferProgress::active(kind, percent));
    }
}

/// 占用期间的复位守卫。`start_transfer` 的 future 在中途被丢弃时（超时、`select!`），
/// 把进度和阶段恢复为空闲；被取消的传输不会触发回退。
struct SettleGuard {
    progress: UnlockReactiveProperty<TransferProgress>,
    phase: LockReactiveProperty<TransferPhase>,
    armed: bool,
}

impl SettleGuard {
    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for SettleGuard {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        warn!("传输在结束前被取消，复位进度与阶段");
        self.progress.update(TransferProgress::idle());

        if self.phase.try_update(TransferPhase::Idle) {
            return;
        }
        // 阶段锁正被短暂占用，交给运行时稍后写入
        let phase = self.phase.clone();
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move { phase.update(TransferPhase::Idle).await });
            }
            Err(_) => error!("没有可用的运行时，传输阶段无法复位"),
        }
    }
}
