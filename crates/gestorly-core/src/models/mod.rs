//! Gestorly 도메인 모델.
//!
//! BFF가 소유하는 엔티티의 클라이언트 측 사본과 요청 본문을 정의한다.
//! 응답은 `Envelope<T>`로 감싸져 오며, 역직렬화에 실패하면 경계에서 거부한다.

use serde::{Deserialize, Deserializer, Serialize};

pub mod client;
pub mod document;
pub mod thread;

/// BFF 응답 공통 래퍼: `{ "data": ... }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// 실제 페이로드
    pub data: T,
}

impl<T> Envelope<T> {
    /// 페이로드 추출
    pub fn into_inner(self) -> T {
        self.data
    }
}

/// `null`을 키 누락과 같이 기본값으로 취급
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
