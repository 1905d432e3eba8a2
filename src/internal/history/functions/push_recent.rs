use crate::internal::media::structs::MediaResult;

/// 历史记录条数上限
pub const MAX_HISTORY_ENTRIES: usize = 5;

/// 把 `item` 放到列表最前，移除同 `url` 的旧记录，并截断到上限。
pub fn push_recent(entries: &mut Vec<MediaResult>, item: MediaResult) {
    entries.retain(|h| h.url != item.url);
    entries.insert(0, item);
    entries.truncate(MAX_HISTORY_ENTRIES);
}
