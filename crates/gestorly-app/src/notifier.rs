//! 콘솔 알림 어댑터.
//!
//! `Notifier` 포트 구현. 브라우저 alert 대신 터미널에 차단 없이 출력한다.

use async_trait::async_trait;
use gestorly_core::error::CoreError;
use gestorly_core::ports::notifier::Notifier;
use std::io::Write;
use tracing::{debug, warn};

/// 콘솔 알림 어댑터: `Notifier` 포트 구현
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    /// 새 알림 어댑터 생성
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for ConsoleNotifier {
    async fn show_notification(&self, title: &str, body: &str) -> Result<(), CoreError> {
        debug!("알림: {title}");
        let mut out = std::io::stdout().lock();
        writeln!(out, "✅ [{title}] {body}")?;
        Ok(())
    }

    async fn show_error(&self, message: &str) -> Result<(), CoreError> {
        warn!("에러 알림: {message}");
        let mut err = std::io::stderr().lock();
        writeln!(err, "⚠️  {message}")?;
        Ok(())
    }
}
