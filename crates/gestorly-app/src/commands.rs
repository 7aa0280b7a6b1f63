//! 서브커맨드 실행.
//!
//! 각 커맨드는 뷰 상태의 폼 필드를 채운 뒤 컨트롤러 동작을 호출한다.
//! 실패 알림은 컨트롤러가 이미 표시하므로 여기서는 결과 렌더링만 담당한다.

use gestorly_core::error::CoreError;
use gestorly_core::models::client::NewClient;
use gestorly_core::models::document::{DocumentMeta, FilePayload};
use gestorly_core::view_state::ViewState;
use std::path::Path;
use tracing::{info, warn};

use crate::cli::{ClientsCommand, Command, DocumentsCommand, ThreadOptions, ThreadsCommand, WalkthroughArgs};
use crate::session::DemoSession;

/// 커맨드 실행
pub async fn run(
    session: &DemoSession,
    state: &mut ViewState,
    command: Command,
) -> Result<(), CoreError> {
    match command {
        Command::Clients(ClientsCommand::List) => {
            session.controller().load_clients(state).await?;
            print!("{}", render_clients(state));
        }
        Command::Clients(ClientsCommand::Create {
            name,
            tax_id,
            country,
        }) => {
            state.new_client = NewClient {
                display_name: name,
                tax_id,
                country,
            };
            let created = session.controller().create_client(state).await?;
            println!("고객 생성: {} ({})", created.display_name, created.id);
            print!("{}", render_clients(state));
        }
        Command::Documents(DocumentsCommand::Upload {
            client,
            file,
            doc_type,
            period,
            content_type,
        }) => {
            state.select_client(client);
            state.document_meta = DocumentMeta { doc_type, period };
            state.document_file = Some(read_file(session, &file, content_type).await?);
            session.controller().upload_document(state).await?;
        }
        Command::Threads(ThreadsCommand::Create { client, thread }) => {
            state.select_client(client);
            apply_thread_options(state, thread);
            let id = session.controller().create_thread(state).await?;
            println!("스레드 생성: {id}");
        }
        Command::Threads(ThreadsCommand::Message { thread, body }) => {
            state.created_thread_id = Some(thread);
            state.message_body = body;
            session.controller().send_message(state).await?;
        }
        Command::Walkthrough(args) => walkthrough(session, state, args).await?,
        Command::Config => {}
    }
    Ok(())
}

/// 로그인 → 고객 → 문서 → 스레드 → 메시지 순서로 실행. 첫 실패에서 중단한다.
pub async fn walkthrough(
    session: &DemoSession,
    state: &mut ViewState,
    args: WalkthroughArgs,
) -> Result<(), CoreError> {
    let controller = session.controller();

    println!("── 1) 고객");
    controller.load_clients(state).await?;

    if let Some(name) = args.create_client {
        state.new_client = NewClient {
            display_name: name,
            ..NewClient::default()
        };
        controller.create_client(state).await?;
    } else if let Some(client) = args.client {
        state.select_client(client);
    } else if state.selected_client.is_none() {
        if let Some(first) = state.clients.first() {
            let id = first.id.clone();
            state.select_client(id);
        }
    }
    print!("{}", render_clients(state));
    match state.selected_client_record() {
        Some(selected) => println!("선택된 고객: {}", selected.summary()),
        None => warn!("선택된 고객이 목록에 없음: {:?}", state.selected_client),
    }

    println!("── 2) 문서 업로드");
    match args.file {
        Some(path) => {
            state.document_meta = DocumentMeta {
                doc_type: args.doc_type,
                period: args.period,
            };
            state.document_file = Some(read_file(session, &path, None).await?);
            let uploaded = controller.upload_document(state).await?;
            println!("문서 ID: {} ({} bytes)", uploaded.document_id, uploaded.bytes);
        }
        None => {
            info!("파일이 지정되지 않아 문서 업로드를 건너뜀");
            println!("(파일 없음 — 건너뜀)");
        }
    }

    println!("── 3) 스레드");
    apply_thread_options(state, args.thread);
    let thread_id = controller.create_thread(state).await?;
    println!("스레드 생성: {thread_id}");

    println!("── 4) 메시지 → 스레드 #{}", state.thread_label());
    state.message_body = args.body;
    controller.send_message(state).await?;

    Ok(())
}

/// 고객 목록 렌더링 (선택된 고객은 `▶` 표시)
pub fn render_clients(state: &ViewState) -> String {
    if state.clients.is_empty() {
        return "(고객 없음)\n".to_string();
    }

    let selected = state.selected_client.as_deref();
    state
        .clients
        .iter()
        .map(|c| {
            let marker = if Some(c.id.as_str()) == selected { "▶" } else { " " };
            format!("{marker} {}  [{}]\n", c.summary(), c.id)
        })
        .collect()
}

fn apply_thread_options(state: &mut ViewState, options: ThreadOptions) {
    state.thread_form.topic = options.topic;
    state.thread_form.linked_type = options.linked_type;
    state.thread_form.linked_id = options.linked_id;
}

/// 업로드 파일 읽기. 실패는 사용자에게 알린 뒤 반환한다.
async fn read_file(
    session: &DemoSession,
    path: &Path,
    content_type: Option<String>,
) -> Result<FilePayload, CoreError> {
    match FilePayload::read(path).await {
        Ok(mut payload) => {
            if content_type.is_some() {
                payload.content_type = content_type;
            }
            Ok(payload)
        }
        Err(e) => {
            warn!("파일 읽기 실패: {}: {e}", path.display());
            if let Err(notify_err) = session
                .notifier()
                .show_error(&format!("파일을 읽을 수 없습니다: {}", path.display()))
                .await
            {
                warn!("에러 알림 표시 실패: {notify_err}");
            }
            Err(e)
        }
    }
}
