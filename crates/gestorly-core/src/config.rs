//! 애플리케이션 설정 구조체.
//!
//! BFF 기본 URL과 선택적 요청 타임아웃을 정의한다.
//! 로드는 `gestorly-app`에서 `config` crate로 수행한다 (기본값 → 파일 → 환경변수 → CLI).

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::CoreError;

/// BFF 기본 URL (환경 설정이 없을 때)
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// 최상위 애플리케이션 설정
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// BFF 연결 설정
    #[serde(default)]
    pub server: ServerConfig,
}

/// BFF 연결 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// BFF 기본 URL (예: "https://bff.gestorly.app")
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// 요청 타임아웃 (밀리초). 없으면 플랫폼 기본값을 따른다.
    #[serde(default)]
    pub request_timeout_ms: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_ms: None,
        }
    }
}

impl AppConfig {
    /// 기본 설정
    pub fn default_config() -> Self {
        Self::default()
    }

    /// 요청 타임아웃 (설정된 경우)
    pub fn request_timeout(&self) -> Option<Duration> {
        self.server.request_timeout_ms.map(Duration::from_millis)
    }

    /// 설정값 검증
    pub fn validate(&self) -> Result<(), CoreError> {
        let base = self.server.base_url.trim();
        if base.is_empty() {
            return Err(CoreError::Config("server.base_url 이 비어 있음".to_string()));
        }
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(CoreError::Config(format!(
                "server.base_url 은 http(s) URL 이어야 함: {base}"
            )));
        }
        if self.server.request_timeout_ms == Some(0) {
            return Err(CoreError::Config(
                "server.request_timeout_ms 는 0보다 커야 함".to_string(),
            ));
        }
        Ok(())
    }
}
