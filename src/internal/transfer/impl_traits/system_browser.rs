//! 用系统默认程序打开原始地址（相当于浏览器中的新标签页）。

use std::process::{Command, Stdio};

use tracing::{info, warn};
use url::Url;

use crate::internal::transfer::traits::fallback::FallbackNavigator;

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBrowser;

impl SystemBrowser {
    fn command(url: &Url) -> Command {
        #[cfg(target_os = "macos")]
        {
            let mut cmd = Command::new("open");
            cmd.arg(url.as_str());
            cmd
        }
        #[cfg(target_os = "windows")]
        {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", "", url.as_str()]);
            cmd
        }
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(url.as_str());
            cmd
        }
    }
}

impl FallbackNavigator for SystemBrowser {
    fn open_external(&self, url: &Url) {
        let spawned = Self::command(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match spawned {
            Ok(mut child) => {
                info!(%url, "已用系统默认程序打开原地址");
                // 回收子进程，避免留下僵尸进程
                std::thread::spawn(move || {
                    let _ = child.wait();
                });
            }
            Err(e) => warn!(%url, error = %e, "无法启动系统默认程序"),
        }
    }
}
