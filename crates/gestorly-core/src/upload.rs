//! 2단계 문서 업로드 핸드셰이크.
//!
//! 1. 예약: BFF에 `{filename, type, period}`를 보내 문서 ID와 서명된 업로드 대상을 받는다.
//! 2. 전송: 서명된 URL로 파일 바이트를 직접 PUT 한다 (BFF 인증 래퍼를 거치지 않음).
//!
//! 예약이 실패하면 전송을 시도하지 않는다. 전송이 실패해도 예약된 레코드는
//! 되돌리지 않는다 (서버 측에 "예약됨, 미업로드" 상태로 남음).
//! 전송 단계 에러는 감싸지 않고 그대로 반환한다: 비정상 응답은 `Transfer`,
//! 연결 실패는 `Network`.

use tracing::{debug, info, warn};

use crate::error::CoreError;
use crate::models::document::{DocumentMeta, FilePayload, ReservationRequest};
use crate::ports::bff::BffApi;
use crate::ports::storage::SignedUploadTransport;

/// 업로드 완료 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedDocument {
    /// 서버에서 발급한 문서 ID
    pub document_id: String,
    /// 전송한 바이트 수
    pub bytes: usize,
}

/// 예약 → 전송 핸드셰이크
pub struct UploadHandshake<'a> {
    bff: &'a dyn BffApi,
    transport: &'a dyn SignedUploadTransport,
}

impl<'a> UploadHandshake<'a> {
    pub fn new(bff: &'a dyn BffApi, transport: &'a dyn SignedUploadTransport) -> Self {
        Self { bff, transport }
    }

    /// 업로드 실행
    ///
    /// 고객 ID 또는 파일이 없으면 네트워크 호출 없이 `Validation` 에러.
    pub async fn run(
        &self,
        client_id: Option<&str>,
        meta: &DocumentMeta,
        file: Option<&FilePayload>,
    ) -> Result<UploadedDocument, CoreError> {
        let (client_id, file) = match (client_id.filter(|id| !id.is_empty()), file) {
            (Some(id), Some(file)) => (id, file),
            (None, _) => {
                return Err(CoreError::validation("client_id", "고객을 선택하세요"));
            }
            (_, None) => return Err(CoreError::validation("file", "파일을 선택하세요")),
        };

        let request = ReservationRequest::new(&file.filename, meta);
        debug!(
            "문서 예약 요청: client_id={client_id}, filename={}, type={}, period={}",
            request.filename, request.doc_type, request.period
        );

        let reserved = self
            .bff
            .reserve_document(client_id, &request)
            .await
            .map_err(|e| {
                warn!("문서 예약 실패: {e}");
                CoreError::Reservation(Box::new(e))
            })?;

        debug!(
            "스토리지 전송 시작: document_id={}, {} bytes, content-type={}",
            reserved.document_id,
            file.len(),
            file.effective_content_type()
        );

        if let Err(e) = self.transport.put(&reserved.upload, file).await {
            warn!(
                "스토리지 전송 실패 (document_id={} 는 예약 상태로 남음): {e}",
                reserved.document_id
            );
            return Err(e);
        }

        info!("문서 업로드 완료: document_id={}", reserved.document_id);
        Ok(UploadedDocument {
            document_id: reserved.document_id,
            bytes: file.len(),
        })
    }
}
