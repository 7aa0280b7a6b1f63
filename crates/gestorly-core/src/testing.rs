//! 테스트용 포트 구현.
//!
//! 모든 가짜 어댑터는 같은 호출 로그를 공유하여 호출 순서를 검증할 수 있다.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;

use crate::error::CoreError;
use crate::models::client::{Client, NewClient};
use crate::models::document::{FilePayload, ReservationRequest, ReservedDocument, UploadDescriptor};
use crate::models::thread::{NewMessage, NewThread, ThreadRef};
use crate::ports::bff::BffApi;
use crate::ports::notifier::Notifier;
use crate::ports::storage::SignedUploadTransport;

pub type CallLog = Arc<Mutex<Vec<Call>>>;

/// 기록된 호출
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ListClients,
    CreateClient(serde_json::Value),
    ReserveDocument {
        client_id: String,
        request: serde_json::Value,
    },
    CreateThread(serde_json::Value),
    SendMessage {
        thread_id: String,
        body: String,
    },
    Put {
        url: String,
        content_type: String,
        bytes: usize,
    },
}

pub fn client(id: &str, name: &str) -> Client {
    Client {
        id: id.to_string(),
        display_name: name.to_string(),
        tax_id: format!("TAX-{id}"),
        country: "ES".to_string(),
    }
}

#[derive(Default)]
pub struct FakeBff {
    log: CallLog,
    clients: Mutex<Vec<Client>>,
    reservation: Option<ReservedDocument>,
    thread_id: Option<String>,
    failure: Option<(u16, String)>,
}

impl FakeBff {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self) -> CallLog {
        self.log.clone()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.log.lock().clone()
    }

    pub fn with_clients(self, clients: Vec<Client>) -> Self {
        *self.clients.lock() = clients;
        self
    }

    pub fn with_reservation(mut self, document_id: &str, signed_url: &str) -> Self {
        self.reservation = Some(ReservedDocument {
            document_id: document_id.to_string(),
            upload: UploadDescriptor::from_url(signed_url),
        });
        self
    }

    pub fn with_thread(mut self, thread_id: &str) -> Self {
        self.thread_id = Some(thread_id.to_string());
        self
    }

    /// 모든 호출이 주어진 상태 코드로 실패
    pub fn failing_with(mut self, status: u16, body: &str) -> Self {
        self.failure = Some((status, body.to_string()));
        self
    }

    fn record(&self, call: Call) -> Result<(), CoreError> {
        self.log.lock().push(call);
        match &self.failure {
            Some((status, body)) => Err(CoreError::Request {
                status: *status,
                body: body.clone(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl BffApi for FakeBff {
    async fn list_clients(&self) -> Result<Vec<Client>, CoreError> {
        self.record(Call::ListClients)?;
        Ok(self.clients.lock().clone())
    }

    async fn create_client(&self, new_client: &NewClient) -> Result<Client, CoreError> {
        self.record(Call::CreateClient(serde_json::to_value(new_client)?))?;
        let mut clients = self.clients.lock();
        let created = Client {
            id: format!("c{}", clients.len() + 1),
            display_name: new_client.display_name.clone(),
            tax_id: new_client.tax_id.clone(),
            country: new_client.country.clone(),
        };
        clients.push(created.clone());
        Ok(created)
    }

    async fn reserve_document(
        &self,
        client_id: &str,
        request: &ReservationRequest,
    ) -> Result<ReservedDocument, CoreError> {
        self.record(Call::ReserveDocument {
            client_id: client_id.to_string(),
            request: serde_json::to_value(request)?,
        })?;
        self.reservation
            .clone()
            .ok_or_else(|| CoreError::Decode("예약 응답 없음".to_string()))
    }

    async fn create_thread(&self, thread: &NewThread) -> Result<ThreadRef, CoreError> {
        self.record(Call::CreateThread(serde_json::to_value(thread)?))?;
        let id = self.thread_id.clone().unwrap_or_else(|| "t1".to_string());
        Ok(ThreadRef { id })
    }

    async fn send_message(&self, thread_id: &str, message: &NewMessage) -> Result<(), CoreError> {
        self.record(Call::SendMessage {
            thread_id: thread_id.to_string(),
            body: message.body.clone(),
        })
    }
}

pub struct FakeTransport {
    log: CallLog,
    failure: Option<(u16, String)>,
}

impl FakeTransport {
    pub fn new(log: CallLog) -> Self {
        Self { log, failure: None }
    }

    pub fn failing_with(mut self, status: u16, body: &str) -> Self {
        self.failure = Some((status, body.to_string()));
        self
    }
}

#[async_trait]
impl SignedUploadTransport for FakeTransport {
    async fn put(&self, target: &UploadDescriptor, file: &FilePayload) -> Result<(), CoreError> {
        self.log.lock().push(Call::Put {
            url: target.signed_url.clone(),
            content_type: file.effective_content_type().to_string(),
            bytes: file.len(),
        });
        match &self.failure {
            Some((status, body)) => Err(CoreError::Transfer {
                status: *status,
                body: body.clone(),
            }),
            None => Ok(()),
        }
    }
}

/// 표시된 알림을 기록하는 Notifier
#[derive(Default)]
pub struct RecordingNotifier {
    pub notifications: Mutex<Vec<(String, String)>>,
    pub errors: Mutex<Vec<String>>,
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn show_notification(&self, title: &str, body: &str) -> Result<(), CoreError> {
        self.notifications
            .lock()
            .push((title.to_string(), body.to_string()));
        Ok(())
    }

    async fn show_error(&self, message: &str) -> Result<(), CoreError> {
        self.errors.lock().push(message.to_string());
        Ok(())
    }
}
