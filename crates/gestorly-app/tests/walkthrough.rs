//! 전체 흐름 통합 테스트.
//!
//! mockito 서버를 BFF와 스토리지로 동시에 사용하여
//! 고객 → 문서 → 스레드 → 메시지 흐름과 실패 경로를 검증한다.

use assert_matches::assert_matches;
use async_trait::async_trait;
use gestorly_app::cli::{ThreadOptions, WalkthroughArgs};
use gestorly_app::commands;
use gestorly_app::session::DemoSession;
use gestorly_core::config::AppConfig;
use gestorly_core::error::CoreError;
use gestorly_core::models::thread::LinkedType;
use gestorly_core::ports::notifier::Notifier;
use gestorly_core::view_state::ViewState;
use mockito::Matcher;
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Default)]
struct RecordingNotifier {
    notifications: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn show_notification(&self, _title: &str, body: &str) -> Result<(), CoreError> {
        self.notifications.lock().push(body.to_string());
        Ok(())
    }

    async fn show_error(&self, message: &str) -> Result<(), CoreError> {
        self.errors.lock().push(message.to_string());
        Ok(())
    }
}

fn session_for(server: &mockito::ServerGuard) -> (DemoSession, Arc<RecordingNotifier>) {
    let mut config = AppConfig::default_config();
    config.server.base_url = server.url();
    let notifier = Arc::new(RecordingNotifier::default());
    let session = DemoSession::new(&config, notifier.clone()).unwrap();
    (session, notifier)
}

fn walkthrough_args(file: Option<std::path::PathBuf>) -> WalkthroughArgs {
    WalkthroughArgs {
        create_client: None,
        client: None,
        file,
        doc_type: "factura".to_string(),
        period: "2025-08".to_string(),
        thread: ThreadOptions {
            topic: "Soporte inicial".to_string(),
            linked_type: LinkedType::General,
            linked_id: String::new(),
        },
        body: "Hola, esto es una prueba.".to_string(),
    }
}

#[tokio::test]
async fn full_walkthrough_against_mock_bff() {
    let mut server = mockito::Server::new_async().await;
    let signed_url = format!("{}/storage/upload/a.pdf?token=sig", server.url());

    let list = server
        .mock("GET", "/api/v1/clients")
        .match_header("authorization", "Bearer tok")
        .with_status(200)
        .with_body(r#"{"data":[{"id":"c1","display_name":"Alfa","tax_id":"A1","country":"ES"}]}"#)
        .create_async()
        .await;
    let reserve = server
        .mock("POST", "/api/v1/clients/c1/documents")
        .match_body(Matcher::Json(serde_json::json!({
            "filename": "a.pdf", "type": "factura", "period": "2025-08"
        })))
        .with_status(200)
        .with_body(
            serde_json::json!({"data": {"document_id": "d1", "upload": {"signedUrl": signed_url}}})
                .to_string(),
        )
        .create_async()
        .await;
    let put = server
        .mock("PUT", "/storage/upload/a.pdf")
        .match_query(Matcher::UrlEncoded("token".to_string(), "sig".to_string()))
        .match_header("content-type", "application/pdf")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .create_async()
        .await;
    let thread = server
        .mock("POST", "/api/v1/threads")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "client_id": "c1", "linked_type": "general", "linked_id": null
        })))
        .with_status(201)
        .with_body(r#"{"data":{"id":"t1"}}"#)
        .create_async()
        .await;
    let message = server
        .mock("POST", "/api/v1/threads/t1/messages")
        .match_body(Matcher::Json(serde_json::json!({"body": "Hola, esto es una prueba."})))
        .with_status(201)
        .with_body(r#"{"data":{"id":"m1"}}"#)
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("a.pdf");
    std::fs::write(&file, b"%PDF-1.4 demo").unwrap();

    let (session, notifier) = session_for(&server);
    let mut state = ViewState::new();
    session.use_token(&mut state, "tok").await;

    commands::walkthrough(&session, &mut state, walkthrough_args(Some(file)))
        .await
        .unwrap();

    assert_eq!(state.selected_client.as_deref(), Some("c1"));
    assert_eq!(state.last_document_id.as_deref(), Some("d1"));
    assert_eq!(state.created_thread_id.as_deref(), Some("t1"));
    assert!(notifier.errors.lock().is_empty());
    assert_eq!(notifier.notifications.lock().len(), 2);

    list.assert_async().await;
    reserve.assert_async().await;
    put.assert_async().await;
    thread.assert_async().await;
    message.assert_async().await;
}

#[tokio::test]
async fn walkthrough_without_file_skips_upload() {
    let mut server = mockito::Server::new_async().await;
    let _list = server
        .mock("GET", "/api/v1/clients")
        .with_status(200)
        .with_body(r#"{"data":[{"id":"c7","display_name":"Gamma","tax_id":"G7","country":"ES"}]}"#)
        .create_async()
        .await;
    let reserve = server
        .mock("POST", Matcher::Regex("^/api/v1/clients/.+/documents$".to_string()))
        .expect(0)
        .create_async()
        .await;
    let _thread = server
        .mock("POST", "/api/v1/threads")
        .with_status(200)
        .with_body(r#"{"data":{"id":"t7"}}"#)
        .create_async()
        .await;
    let _message = server
        .mock("POST", "/api/v1/threads/t7/messages")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let (session, _notifier) = session_for(&server);
    let mut state = ViewState::new();
    session.use_token(&mut state, "tok").await;

    commands::walkthrough(&session, &mut state, walkthrough_args(None))
        .await
        .unwrap();

    assert!(state.last_document_id.is_none());
    assert_eq!(state.created_thread_id.as_deref(), Some("t7"));
    reserve.assert_async().await;
}

#[tokio::test]
async fn walkthrough_stops_on_unauthorized() {
    let mut server = mockito::Server::new_async().await;
    let _list = server
        .mock("GET", "/api/v1/clients")
        .with_status(401)
        .with_body("unauthorized")
        .create_async()
        .await;
    let thread = server
        .mock("POST", "/api/v1/threads")
        .expect(0)
        .create_async()
        .await;

    let (session, notifier) = session_for(&server);
    let mut state = ViewState::new();
    session.use_token(&mut state, "expired").await;

    let err = commands::walkthrough(&session, &mut state, walkthrough_args(None))
        .await
        .unwrap_err();

    assert_matches!(err, CoreError::Request { status: 401, .. });
    assert!(err.to_string().contains("unauthorized"));
    assert_eq!(notifier.errors.lock().len(), 1);
    assert!(!state.loading_clients);
    thread.assert_async().await;
}

#[tokio::test]
async fn missing_token_blocks_before_network() {
    let mut server = mockito::Server::new_async().await;
    let list = server
        .mock("GET", "/api/v1/clients")
        .expect(0)
        .create_async()
        .await;

    let (session, notifier) = session_for(&server);
    let mut state = ViewState::new();
    session.use_token(&mut state, "").await;

    let result = session.controller().load_clients(&mut state).await;
    assert_matches!(result, Err(CoreError::Validation { .. }));
    assert_eq!(notifier.errors.lock().len(), 1);
    list.assert_async().await;
}

#[tokio::test]
async fn upload_reservation_failure_leaves_no_transfer() {
    let mut server = mockito::Server::new_async().await;
    let _reserve = server
        .mock("POST", "/api/v1/clients/c1/documents")
        .with_status(422)
        .with_body(r#"{"error":"invalid period"}"#)
        .create_async()
        .await;
    let put = server
        .mock("PUT", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("nomina.pdf");
    std::fs::write(&file, b"%PDF").unwrap();

    let (session, notifier) = session_for(&server);
    let mut state = ViewState::new();
    session.use_token(&mut state, "tok").await;

    let result = commands::run(
        &session,
        &mut state,
        gestorly_app::cli::Command::Documents(gestorly_app::cli::DocumentsCommand::Upload {
            client: "c1".to_string(),
            file,
            doc_type: "nomina".to_string(),
            period: "2025-13".to_string(),
            content_type: None,
        }),
    )
    .await;

    let err = result.unwrap_err();
    assert_matches!(err, CoreError::Reservation(_));
    assert_eq!(err.status(), Some(422));
    assert!(notifier.errors.lock()[0].contains("invalid period"));
    put.assert_async().await;
}
