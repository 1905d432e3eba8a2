use url::Url;

/// 回退处理：把原始资源地址作为新的顶层页面打开。
///
/// 打开失败对本系统不可见，所以没有返回值。
pub trait FallbackNavigator: Send + Sync {
    fn open_external(&self, url: &Url);
}
