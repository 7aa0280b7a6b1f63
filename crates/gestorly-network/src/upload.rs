//! 서명 URL 직접 업로드.
//!
//! `SignedUploadTransport` 포트 구현. BFF 인증 래퍼를 거치지 않고
//! 서명된 URL로 파일 바이트를 그대로 PUT 한다. 서명된 URL 자체가 인가를 담는다.

use async_trait::async_trait;
use gestorly_core::error::CoreError;
use gestorly_core::models::document::{FilePayload, UploadDescriptor};
use gestorly_core::ports::storage::SignedUploadTransport;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use crate::{build_client, read_body};

/// 서명 URL 업로더: `SignedUploadTransport` 포트 구현
#[derive(Debug)]
pub struct SignedUrlUploader {
    client: reqwest::Client,
}

impl SignedUrlUploader {
    pub fn new(timeout: Option<Duration>) -> Result<Self, CoreError> {
        Ok(Self {
            client: build_client(timeout)?,
        })
    }

    /// 전송 헤더: 서술자가 요구하는 헤더 + 파일 Content-Type
    fn transfer_headers(
        target: &UploadDescriptor,
        file: &FilePayload,
    ) -> Result<HeaderMap, CoreError> {
        let mut headers = HeaderMap::new();
        for (name, value) in &target.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| CoreError::Decode(format!("업로드 헤더 이름 '{name}': {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| CoreError::Decode(format!("업로드 헤더 값 '{name}': {e}")))?;
            headers.insert(name, value);
        }

        let content_type = HeaderValue::from_str(file.effective_content_type()).map_err(|_| {
            CoreError::validation("content_type", format!("잘못된 MIME 타입: {:?}", file.content_type))
        })?;
        headers.insert(CONTENT_TYPE, content_type);

        Ok(headers)
    }
}

#[async_trait]
impl SignedUploadTransport for SignedUrlUploader {
    async fn put(&self, target: &UploadDescriptor, file: &FilePayload) -> Result<(), CoreError> {
        let url = Url::parse(&target.signed_url).map_err(|e| {
            CoreError::Decode(format!("서명된 URL 이 올바르지 않음 '{}': {e}", target.signed_url))
        })?;
        let headers = Self::transfer_headers(target, file)?;

        debug!("스토리지 PUT: host={:?}, {} bytes", url.host_str(), file.len());

        let resp = self
            .client
            .put(url)
            .headers(headers)
            .body(file.bytes.clone())
            .send()
            .await
            .map_err(|e| CoreError::Network(format!("스토리지 전송 실패: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let body = read_body(resp).await;
            warn!("스토리지 에러 응답: {status}");
            return Err(CoreError::Transfer {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}
