//! 고객(Client) 모델.

use serde::{Deserialize, Serialize};

/// 신규 고객 기본 국가 코드
pub const DEFAULT_COUNTRY: &str = "ES";

/// BFF에 등록된 고객
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    /// 서버에서 발급한 고객 ID
    pub id: String,
    /// 표시 이름 (상호)
    pub display_name: String,
    /// 세금 식별번호 (NIF/CIF)
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub tax_id: String,
    /// 국가 코드
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub country: String,
}

impl Client {
    /// 목록 한 줄 요약: `이름 — 세금ID · 국가`
    pub fn summary(&self) -> String {
        format!("{} — {} · {}", self.display_name, self.tax_id, self.country)
    }
}

/// 고객 목록 응답 페이로드
///
/// `data`가 없거나 `null`이면 빈 목록으로 취급한다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientList {
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub data: Vec<Client>,
}

/// 고객 생성 폼
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewClient {
    pub display_name: String,
    pub tax_id: String,
    pub country: String,
}

impl Default for NewClient {
    fn default() -> Self {
        Self {
            display_name: String::new(),
            tax_id: String::new(),
            country: DEFAULT_COUNTRY.to_string(),
        }
    }
}
