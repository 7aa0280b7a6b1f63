//! 서명 URL 직접 전송 포트.
//!
//! 구현: `gestorly-network` crate (`SignedUrlUploader`)

use async_trait::async_trait;

use crate::error::CoreError;
use crate::models::document::{FilePayload, UploadDescriptor};

/// 스토리지 직접 업로드
///
/// BFF 인증 헤더를 사용하지 않는다. 서명된 URL이 인가를 담고 있다.
#[async_trait]
pub trait SignedUploadTransport: Send + Sync {
    /// `PUT {signed_url}`
    ///
    /// 스토리지가 2xx 이외로 응답하면 `CoreError::Transfer`, 응답을 받기 전에
    /// 연결 자체가 실패하면 `CoreError::Network`. 서명 URL이 잘못되면 `CoreError::Decode`.
    async fn put(&self, target: &UploadDescriptor, file: &FilePayload) -> Result<(), CoreError>;
}
