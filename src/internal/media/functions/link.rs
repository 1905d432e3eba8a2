//! 视频链接的识别与解析。

/// 目标平台的域名片段
pub const PLATFORM_DOMAIN: &str = "tiktok.com";

/// 粗略判断输入是否指向目标平台。
pub fn is_platform_link(url: &str) -> bool {
    !url.trim().is_empty() && url.contains(PLATFORM_DOMAIN)
}

/// 从 `.../video/<数字>` 形式的链接中取出视频 id。
///
/// 只取 `/video/` 之后连续的十进制数字，没有数字时返回 `None`。
pub fn parse_video_id(url: &str) -> Option<&str> {
    const MARKER: &str = "/video/";

    let mut rest = url;
    while let Some(pos) = rest.find(MARKER) {
        let after = &rest[pos + MARKER.len()..];
        let digits = after
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(after.len());
        if digits > 0 {
            return Some(&after[..digits]);
        }
        rest = after;
    }
    None
}
