use crate::internal::transfer::traits::hook::TransferHook;

use super::transfer_outcome::TransferOutcome;
use super::transfer_progress::TransferProgress;

/// 钩子容器：按注册顺序依次执行。
#[derive(Default)]
pub struct TransferHooksContainer {
    hooks: Vec<Box<dyn TransferHook>>,
}

impl TransferHooksContainer {
    pub fn add(&mut self, hook: impl TransferHook + 'static) {
        self.hooks.push(Box::new(hook));
    }

    pub fn run_on_chunk(&mut self, chunk: &[u8]) {
        for h in self.hooks.iter_mut() {
            h.on_chunk(chunk);
        }
    }

    pub fn run_on_progress(&mut self, progress: &TransferProgress) {
        for h in self.hooks.iter_mut() {
            h.on_progress(progress);
        }
    }

    pub async fn run_after_settle(&mut self, outcome: &TransferOutcome) {
        for h in self.hooks.iter_mut() {
            h.after_settle(outcome).await;
        }
    }
}
