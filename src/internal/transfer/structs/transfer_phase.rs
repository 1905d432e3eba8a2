/// 编排器的状态机阶段。
///
/// 成功路径：Idle → Requesting → Streaming → Assembling → Delivering → Idle；
/// 任一工作阶段失败进入 Failed，回退处理完成并等待重置延迟后回到 Idle。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TransferPhase {
    #[default]
    Idle,
    Requesting,
    Streaming,
    Assembling,
    Delivering,
    Failed,
}

impl TransferPhase {
    pub fn is_idle(&self) -> bool {
        matches!(self, TransferPhase::Idle)
    }
}
