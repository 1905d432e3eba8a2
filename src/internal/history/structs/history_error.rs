use thiserror::Error;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("读写历史记录文件失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("历史记录序列化失败: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("找不到用户数据目录")]
    NoDataDir,
}
