//! Gestorly 데모 클라이언트 핵심 에러 타입.
//!
//! 네트워크 어댑터는 reqwest 에러를 이 타입의 변형으로 매핑한다.

use thiserror::Error;

/// 코어 레이어 에러.
#[derive(Debug, Error)]
pub enum CoreError {
    /// 필수 입력 누락: 네트워크 호출 전에 거부됨
    #[error("유효성 검증 실패 — {field}: {message}")]
    Validation {
        /// 검증 실패한 필드명
        field: String,
        /// 실패 사유
        message: String,
    },

    /// BFF 비정상 응답 (2xx 이외)
    #[error("{status}: {body}")]
    Request {
        /// HTTP 상태 코드
        status: u16,
        /// 응답 본문 원문
        body: String,
    },

    /// 업로드 1단계(예약) 실패
    #[error("문서 예약 실패: {0}")]
    Reservation(#[source] Box<CoreError>),

    /// 업로드 2단계(스토리지 직접 전송) 실패
    #[error("스토리지 업로드 실패 ({status}): {body}")]
    Transfer {
        /// HTTP 상태 코드
        status: u16,
        /// 응답 본문 원문
        body: String,
    },

    /// 네트워크 에러 (연결 실패, 타임아웃)
    #[error("네트워크 에러: {0}")]
    Network(String),

    /// 성공 응답이지만 기대한 형태가 아님
    #[error("응답 파싱 실패: {0}")]
    Decode(String),

    /// JSON 직렬화 실패
    #[error("직렬화 에러: {0}")]
    Serialization(#[from] serde_json::Error),

    /// 설정값 오류
    #[error("설정 에러: {0}")]
    Config(String),

    /// I/O 에러
    #[error("I/O 에러: {0}")]
    Io(#[from] std::io::Error),
}

impl CoreError {
    /// 필드 유효성 에러 생성 헬퍼
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// 네트워크 호출 전에 거부된 에러인지
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// 응답 상태 코드 (HTTP 에러인 경우)
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Request { status, .. } | Self::Transfer { status, .. } => Some(*status),
            Self::Reservation(inner) => inner.status(),
            _ => None,
        }
    }
}
