//! 데모 화면 동작 컨트롤러.
//!
//! 화면의 각 버튼에 대응하는 동작을 하나의 메서드로 제공한다. 모든 동작은
//! `ViewState`를 명시적으로 받아 갱신하며, 실패는 반환과 동시에 주입된
//! `Notifier`로 사용자에게 알린다. 재시도나 보정은 하지 않는다.
//!
//! `&mut ViewState`를 받으므로 같은 상태에 대해 두 동작이 동시에 진행될 수 없다.

use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::error::CoreError;
use crate::models::client::{Client, NewClient};
use crate::models::thread::{NewMessage, NewThread};
use crate::ports::bff::BffApi;
use crate::ports::notifier::Notifier;
use crate::ports::storage::SignedUploadTransport;
use crate::upload::{UploadHandshake, UploadedDocument};
use crate::view_state::ViewState;

const MSG_NOT_AUTHENTICATED: &str = "먼저 토큰을 입력하세요";
const MSG_LOAD_CLIENTS_FAILED: &str = "고객 목록을 불러오지 못했습니다 (토큰/서버를 확인하세요)";
const MSG_CREATE_CLIENT_FAILED: &str = "고객을 생성하지 못했습니다";
const MSG_SELECT_CLIENT_AND_FILE: &str = "고객과 파일을 선택하세요";
const MSG_SELECT_CLIENT: &str = "고객을 선택하세요";
const MSG_CREATE_THREAD_FAILED: &str = "스레드를 생성하지 못했습니다";
const MSG_CREATE_THREAD_FIRST: &str = "먼저 스레드를 생성하세요";
const MSG_SEND_MESSAGE_FAILED: &str = "메시지를 전송하지 못했습니다";

/// 데모 동작 컨트롤러
pub struct DemoController {
    bff: Arc<dyn BffApi>,
    transport: Arc<dyn SignedUploadTransport>,
    notifier: Arc<dyn Notifier>,
}

impl DemoController {
    pub fn new(
        bff: Arc<dyn BffApi>,
        transport: Arc<dyn SignedUploadTransport>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            bff,
            transport,
            notifier,
        }
    }

    /// 고객 목록 불러오기
    ///
    /// 성공 시 목록을 서버 순서 그대로 교체한다. 로딩 플래그는 성공/실패와
    /// 무관하게 호출이 끝나면 해제된다.
    pub async fn load_clients(&self, state: &mut ViewState) -> Result<(), CoreError> {
        self.ensure_authenticated(state).await?;

        state.loading_clients = true;
        let result = self.bff.list_clients().await;
        state.loading_clients = false;

        match result {
            Ok(clients) => {
                info!("고객 {}명 로드", clients.len());
                state.clients = clients;
                Ok(())
            }
            Err(e) => {
                error!("고객 목록 로드 실패: {e}");
                self.report_error(MSG_LOAD_CLIENTS_FAILED).await;
                Err(e)
            }
        }
    }

    /// 고객 생성
    ///
    /// 성공 시 폼을 초기화하고 목록을 다시 불러온 뒤 새 고객을 선택한다.
    pub async fn create_client(&self, state: &mut ViewState) -> Result<Client, CoreError> {
        self.ensure_authenticated(state).await?;

        if state.new_client.display_name.trim().is_empty() {
            let err = CoreError::validation("display_name", "상호를 입력하세요");
            self.report_error(&err.to_string()).await;
            return Err(err);
        }

        let created = match self.bff.create_client(&state.new_client).await {
            Ok(client) => client,
            Err(e) => {
                error!("고객 생성 실패: {e}");
                self.report_error(MSG_CREATE_CLIENT_FAILED).await;
                return Err(e);
            }
        };
        info!("고객 생성: id={}, name={}", created.id, created.display_name);

        state.new_client = NewClient::default();
        if let Err(e) = self.load_clients(state).await {
            // 목록 갱신 실패는 load_clients에서 이미 알림
            debug!("생성 후 목록 갱신 실패: {e}");
        }
        state.select_client(created.id.clone());

        Ok(created)
    }

    /// 문서 업로드 (예약 → 직접 전송)
    pub async fn upload_document(
        &self,
        state: &mut ViewState,
    ) -> Result<UploadedDocument, CoreError> {
        self.ensure_authenticated(state).await?;

        let handshake = UploadHandshake::new(self.bff.as_ref(), self.transport.as_ref());
        let result = handshake
            .run(
                state.selected_client.as_deref(),
                &state.document_meta,
                state.document_file.as_ref(),
            )
            .await;

        match result {
            Ok(uploaded) => {
                state.last_document_id = Some(uploaded.document_id.clone());
                self.report(
                    "문서 업로드",
                    &format!("문서 업로드 완료 (id: {})", uploaded.document_id),
                )
                .await;
                Ok(uploaded)
            }
            Err(e) if e.is_validation() => {
                self.report_error(MSG_SELECT_CLIENT_AND_FILE).await;
                Err(e)
            }
            Err(e) => {
                error!("문서 업로드 실패: {e}");
                self.report_error(&format!("업로드 오류: {e}")).await;
                Err(e)
            }
        }
    }

    /// 스레드 생성
    pub async fn create_thread(&self, state: &mut ViewState) -> Result<String, CoreError> {
        self.ensure_authenticated(state).await?;

        let Some(client_id) = state.selected_client.clone() else {
            self.report_error(MSG_SELECT_CLIENT).await;
            return Err(CoreError::validation("client_id", MSG_SELECT_CLIENT));
        };

        let form = &state.thread_form;
        let thread = NewThread::new(&client_id, &form.topic, form.linked_type, &form.linked_id);
        debug!(
            "스레드 생성 요청: client_id={client_id}, linked_type={}",
            thread.linked_type
        );

        match self.bff.create_thread(&thread).await {
            Ok(created) => {
                info!("스레드 생성: id={}", created.id);
                state.created_thread_id = Some(created.id.clone());
                Ok(created.id)
            }
            Err(e) => {
                error!("스레드 생성 실패: {e}");
                self.report_error(MSG_CREATE_THREAD_FAILED).await;
                Err(e)
            }
        }
    }

    /// 생성된 스레드에 메시지 전송
    pub async fn send_message(&self, state: &mut ViewState) -> Result<(), CoreError> {
        self.ensure_authenticated(state).await?;

        let Some(thread_id) = state.created_thread_id.clone().filter(|id| !id.is_empty()) else {
            self.report_error(MSG_CREATE_THREAD_FIRST).await;
            return Err(CoreError::validation("thread_id", MSG_CREATE_THREAD_FIRST));
        };

        let message = NewMessage {
            body: state.message_body.clone(),
        };

        match self.bff.send_message(&thread_id, &message).await {
            Ok(()) => {
                info!("메시지 전송: thread_id={thread_id}");
                self.report("메시지", "메시지 전송 완료").await;
                Ok(())
            }
            Err(e) => {
                error!("메시지 전송 실패: {e}");
                self.report_error(MSG_SEND_MESSAGE_FAILED).await;
                Err(e)
            }
        }
    }

    async fn ensure_authenticated(&self, state: &ViewState) -> Result<(), CoreError> {
        if state.authenticated {
            return Ok(());
        }
        self.report_error(MSG_NOT_AUTHENTICATED).await;
        Err(CoreError::validation("token", MSG_NOT_AUTHENTICATED))
    }

    async fn report(&self, title: &str, body: &str) {
        if let Err(e) = self.notifier.show_notification(title, body).await {
            warn!("알림 표시 실패: {e}");
        }
    }

    async fn report_error(&self, message: &str) {
        if let Err(e) = self.notifier.show_error(message).await {
            warn!("에러 알림 표시 실패: {e}");
        }
    }
}
