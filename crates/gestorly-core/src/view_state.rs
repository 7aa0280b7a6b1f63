//! UI 뷰 상태.
//!
//! 토큰, 선택된 고객, 폼 입력 등 화면이 보유하는 모든 일시 상태를 하나의
//! 명시적 레코드로 관리한다. 컨트롤러는 이 레코드를 인자로 받아 갱신한다.

use serde::{Deserialize, Serialize};

use crate::models::client::{Client, NewClient};
use crate::models::document::{DocumentMeta, FilePayload};
use crate::models::thread::{ThreadForm, DEFAULT_MESSAGE_BODY};

/// 스레드 ID 약식 표시 길이
const SHORT_ID_LEN: usize = 8;

/// 화면 상태 (직렬화 가능, 선택된 파일 바이트는 제외)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewState {
    /// 붙여넣은 세션 토큰
    pub token: String,
    /// 토큰 사용 확정 여부
    pub authenticated: bool,
    /// 마지막으로 불러온 고객 목록 (서버 순서)
    pub clients: Vec<Client>,
    /// 고객 목록 로딩 중
    pub loading_clients: bool,
    /// 고객 생성 폼
    pub new_client: NewClient,
    /// 선택된 고객 ID
    pub selected_client: Option<String>,
    /// 문서 메타데이터 폼
    pub document_meta: DocumentMeta,
    /// 선택된 파일
    #[serde(skip)]
    pub document_file: Option<FilePayload>,
    /// 마지막으로 업로드된 문서 ID
    pub last_document_id: Option<String>,
    /// 스레드 폼
    pub thread_form: ThreadForm,
    /// 메시지 본문
    pub message_body: String,
    /// 생성된 스레드 ID
    pub created_thread_id: Option<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            token: String::new(),
            authenticated: false,
            clients: Vec::new(),
            loading_clients: false,
            new_client: NewClient::default(),
            selected_client: None,
            document_meta: DocumentMeta::default(),
            document_file: None,
            last_document_id: None,
            thread_form: ThreadForm::default(),
            message_body: DEFAULT_MESSAGE_BODY.to_string(),
            created_thread_id: None,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 토큰 입력 후 "토큰 사용": 토큰이 비어 있지 않을 때만 인증 상태가 된다.
    pub fn use_token(&mut self, token: impl Into<String>) {
        self.token = token.into();
        self.authenticated = !self.token.is_empty();
    }

    /// 고객 선택 (빈 문자열은 선택 해제)
    pub fn select_client(&mut self, client_id: impl Into<String>) {
        let id = client_id.into();
        self.selected_client = (!id.is_empty()).then_some(id);
    }

    /// 선택된 고객 레코드 (목록에 있는 경우)
    pub fn selected_client_record(&self) -> Option<&Client> {
        let id = self.selected_client.as_deref()?;
        self.clients.iter().find(|c| c.id == id)
    }

    /// 생성된 스레드 ID 약식 표시 (앞 8자, 없으면 "—")
    pub fn thread_label(&self) -> String {
        match self.created_thread_id.as_deref() {
            Some(id) if !id.is_empty() => id.chars().take(SHORT_ID_LEN).collect(),
            _ => "—".to_string(),
        }
    }
}
