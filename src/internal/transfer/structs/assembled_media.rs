use bytes::Bytes;

use crate::internal::media::structs::MediaKind;

/// 组装完成、等待交付的媒体：一个完整的二进制对象加上生成的文件名。
#[derive(Debug, Clone)]
pub struct AssembledMedia {
    pub bytes: Bytes,
    pub filename: String,
    pub kind: MediaKind,
}

impl AssembledMedia {
    /// 以当前时间生成文件名。
    pub fn new(bytes: Bytes, author: &str, kind: MediaKind) -> Self {
        let millis = chrono::Utc::now().timestamp_millis();
        Self {
            bytes,
            filename: synthesize_filename(author, kind, millis),
            kind,
        }
    }

    pub fn len(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// `{作者标识去掉第一个 @}_{毫秒时间戳}.{扩展名}`。
///
/// 作者标识来自第三方接口，路径分隔符、Windows 保留字符和控制字符都会被替换成 `_`，
/// 保证结果在各平台上都只是一个合法文件名。
pub fn synthesize_filename(author: &str, kind: MediaKind, unix_millis: i64) -> String {
    let handle: String = author
        .replacen('@', "", 1)
        .chars()
        .map(|c| if is_reserved_char(c) { '_' } else { c })
        .collect();
    format!("{handle}_{unix_millis}.{}", kind.extension())
}

fn is_reserved_char(c: char) -> bool {
    c.is_control() || matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|')
}
