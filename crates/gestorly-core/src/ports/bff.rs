//! BFF API 포트.
//!
//! 구현: `gestorly-network` crate (`HttpBffClient`)

use async_trait::async_trait;

use crate::error::CoreError;
use crate::models::client::{Client, NewClient};
use crate::models::document::{ReservationRequest, ReservedDocument};
use crate::models::thread::{NewMessage, NewThread, ThreadRef};

/// Gestorly BFF 클라이언트
///
/// 모든 호출은 인증 헤더를 포함한 단일 왕복이며 재시도하지 않는다.
/// 비정상 응답은 `CoreError::Request`로 반환된다.
#[async_trait]
pub trait BffApi: Send + Sync {
    /// `GET /api/v1/clients`: 서버가 반환한 순서 그대로
    async fn list_clients(&self) -> Result<Vec<Client>, CoreError>;

    /// `POST /api/v1/clients`
    async fn create_client(&self, client: &NewClient) -> Result<Client, CoreError>;

    /// `POST /api/v1/clients/{client_id}/documents`: 업로드 1단계
    async fn reserve_document(
        &self,
        client_id: &str,
        request: &ReservationRequest,
    ) -> Result<ReservedDocument, CoreError>;

    /// `POST /api/v1/threads`
    async fn create_thread(&self, thread: &NewThread) -> Result<ThreadRef, CoreError>;

    /// `POST /api/v1/threads/{thread_id}/messages`
    ///
    /// 응답 본문은 구현 정의이며 사용하지 않는다.
    async fn send_message(&self, thread_id: &str, message: &NewMessage) -> Result<(), CoreError>;
}
