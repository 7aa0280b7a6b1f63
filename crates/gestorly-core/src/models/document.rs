//! 문서 업로드 모델.
//!
//! 업로드는 2단계로 진행된다: BFF에 문서를 예약(`ReservationRequest`)하면
//! 서명된 업로드 대상(`UploadDescriptor`)이 돌아오고, 파일 바이트는 그 대상에
//! 직접 전송된다.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::CoreError;

/// 선언된 MIME 타입이 없을 때 사용하는 Content-Type
pub const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// 기본 문서 타입 태그
pub const DEFAULT_DOCUMENT_TYPE: &str = "factura";

/// 기본 기간 태그
pub const DEFAULT_PERIOD: &str = "2025-08";

/// 문서 메타데이터 폼 (타입/기간 태그, 자유 입력)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMeta {
    /// 문서 타입 (factura, nomina, ...)
    #[serde(rename = "type")]
    pub doc_type: String,
    /// 기간 (YYYY-MM 또는 YYYY-Qn)
    pub period: String,
}

impl Default for DocumentMeta {
    fn default() -> Self {
        Self {
            doc_type: DEFAULT_DOCUMENT_TYPE.to_string(),
            period: DEFAULT_PERIOD.to_string(),
        }
    }
}

/// 1단계 예약 요청 본문
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReservationRequest {
    pub filename: String,
    #[serde(rename = "type")]
    pub doc_type: String,
    pub period: String,
}

impl ReservationRequest {
    /// 파일 이름 + 메타데이터로 예약 요청 생성
    pub fn new(filename: &str, meta: &DocumentMeta) -> Self {
        Self {
            filename: filename.to_string(),
            doc_type: meta.doc_type.clone(),
            period: meta.period.clone(),
        }
    }
}

/// 1단계 예약 응답 페이로드
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservedDocument {
    /// 서버에서 발급한 문서 ID
    pub document_id: String,
    /// 직접 전송 지시
    pub upload: UploadDescriptor,
}

/// 서명된 업로드 대상.
///
/// 스토리지 백엔드가 요구하는 전송 지시 묶음으로 취급한다. URL 외에
/// 헤더나 만료 정보가 함께 올 수 있으므로 알 수 없는 필드는 `extra`에 보존한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadDescriptor {
    /// 서명된 URL (자체적으로 인가 정보 포함)
    #[serde(rename = "signedUrl", alias = "signed_url")]
    pub signed_url: String,
    /// 전송 시 추가로 붙일 헤더
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,
    /// 그 외 필드 (token, path, expiresAt 등)
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl UploadDescriptor {
    /// URL만 있는 서술자
    pub fn from_url(signed_url: impl Into<String>) -> Self {
        Self {
            signed_url: signed_url.into(),
            headers: BTreeMap::new(),
            extra: serde_json::Map::new(),
        }
    }
}

/// 업로드할 파일
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePayload {
    /// 파일 이름 (경로 제외)
    pub filename: String,
    /// 선언된 MIME 타입
    pub content_type: Option<String>,
    /// 원본 바이트
    pub bytes: Vec<u8>,
}

impl FilePayload {
    pub fn new(filename: impl Into<String>, content_type: Option<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            content_type,
            bytes,
        }
    }

    /// 디스크에서 파일 읽기. MIME 타입은 확장자로 추정한다.
    pub async fn read(path: &Path) -> Result<Self, CoreError> {
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                CoreError::validation("file", format!("파일 이름을 알 수 없음: {}", path.display()))
            })?
            .to_string();

        let bytes = tokio::fs::read(path).await?;
        let content_type = mime_guess::from_path(path)
            .first()
            .map(|m| m.essence_str().to_string());

        Ok(Self {
            filename,
            content_type,
            bytes,
        })
    }

    /// 전송 시 사용할 Content-Type (선언값 또는 기본값)
    pub fn effective_content_type(&self) -> &str {
        self.content_type
            .as_deref()
            .filter(|ct| !ct.is_empty())
            .unwrap_or(FALLBACK_CONTENT_TYPE)
    }

    /// 바이트 크기
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
