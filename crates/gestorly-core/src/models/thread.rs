//! 스레드/메시지 모델.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// 기본 스레드 주제
pub const DEFAULT_TOPIC: &str = "Soporte inicial";

/// 기본 메시지 본문
pub const DEFAULT_MESSAGE_BODY: &str = "Hola, esto es una prueba.";

/// 스레드 연결 분류
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkedType {
    /// 특정 엔티티와 연결되지 않은 일반 스레드
    #[default]
    General,
    /// 작업(task)에 연결
    Task,
    /// 신고(filing)에 연결
    Filing,
}

impl LinkedType {
    pub const ALL: [LinkedType; 3] = [LinkedType::General, LinkedType::Task, LinkedType::Filing];

    pub fn as_str(&self) -> &'static str {
        match self {
            LinkedType::General => "general",
            LinkedType::Task => "task",
            LinkedType::Filing => "filing",
        }
    }
}

impl fmt::Display for LinkedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LinkedType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LinkedType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                CoreError::validation(
                    "linked_type",
                    format!("알 수 없는 분류 '{s}' (general/task/filing 중 하나)"),
                )
            })
    }
}

/// 스레드 생성 요청 본문
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewThread {
    pub client_id: String,
    pub topic: String,
    pub linked_type: LinkedType,
    /// 비어 있으면 `null`로 전송
    pub linked_id: Option<String>,
}

impl NewThread {
    /// 폼 입력에서 생성. 빈 `linked_id`는 `None`으로 정규화한다.
    pub fn new(client_id: &str, topic: &str, linked_type: LinkedType, linked_id: &str) -> Self {
        let linked_id = linked_id.trim();
        Self {
            client_id: client_id.to_string(),
            topic: topic.to_string(),
            linked_type,
            linked_id: (!linked_id.is_empty()).then(|| linked_id.to_string()),
        }
    }
}

/// 생성된 스레드 참조
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadRef {
    pub id: String,
}

/// 메시지 전송 요청 본문
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewMessage {
    pub body: String,
}

/// 스레드 폼 상태
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadForm {
    pub topic: String,
    pub linked_type: LinkedType,
    /// 선택 입력 (빈 문자열 허용)
    pub linked_id: String,
}

impl Default for ThreadForm {
    fn default() -> Self {
        Self {
            topic: DEFAULT_TOPIC.to_string(),
            linked_type: LinkedType::General,
            linked_id: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_linked_id_serializes_as_null() {
        let t = NewThread::new("c1", "Soporte", LinkedType::General, "  ");
        let json = serde_json::to_value(&t).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "client_id": "c1",
                "topic": "Soporte",
                "linked_type": "general",
                "linked_id": null
            })
        );
    }

    #[test]
    fn linked_id_is_kept() {
        let t = NewThread::new("c1", "IVA T3", LinkedType::Filing, "f-42");
        assert_eq!(t.linked_id.as_deref(), Some("f-42"));
        let json = serde_json::to_value(&t).unwrap();
        assert_eq!(json["linked_type"], "filing");
    }

    #[test]
    fn linked_type_parse() {
        assert_eq!("task".parse::<LinkedType>().unwrap(), LinkedType::Task);
        assert_eq!("FILING".parse::<LinkedType>().unwrap(), LinkedType::Filing);
        let err = "ticket".parse::<LinkedType>().unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn thread_ref_from_envelope() {
        let env: crate::models::Envelope<ThreadRef> =
            serde_json::from_str(r#"{"data":{"id":"t1","topic":"x"}}"#).unwrap();
        assert_eq!(env.into_inner().id, "t1");
    }
}
