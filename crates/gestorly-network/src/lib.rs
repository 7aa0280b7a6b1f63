//! # gestorly-network
//!
//! Gestorly BFF HTTP 어댑터.
//!
//! - [`auth`]: 세션 토큰 보관
//! - [`http_client`]: 인증 요청 래퍼 + `BffApi` 포트 구현
//! - [`upload`]: 서명 URL 직접 업로드 (`SignedUploadTransport` 포트 구현)
//!
//! ## 사용 예시
//!
//! ```rust,ignore
//! use gestorly_network::auth::TokenStore;
//! use gestorly_network::http_client::HttpBffClient;
//! use gestorly_network::upload::SignedUrlUploader;
//!
//! let tokens = Arc::new(TokenStore::new("eyJhbGciOi..."));
//! let bff = HttpBffClient::new("http://localhost:3000", tokens, None)?;
//! let uploader = SignedUrlUploader::new(None)?;
//! ```

pub mod auth;
pub mod http_client;
pub mod upload;

/// reqwest 클라이언트 빌드 (타임아웃은 설정된 경우에만 적용)
pub(crate) fn build_client(
    timeout: Option<std::time::Duration>,
) -> Result<reqwest::Client, gestorly_core::error::CoreError> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().map_err(|e| {
        gestorly_core::error::CoreError::Network(format!("HTTP 클라이언트 빌드 실패: {e}"))
    })
}

/// 응답 본문 읽기 (실패 시 빈 문자열)
pub(crate) async fn read_body(resp: reqwest::Response) -> String {
    resp.text().await.unwrap_or_else(|e| {
        tracing::warn!("응답 본문 읽기 실패: {e}");
        String::new()
    })
}
