pub mod directory_save_target;
pub mod http_fetcher;
pub mod system_browser;
