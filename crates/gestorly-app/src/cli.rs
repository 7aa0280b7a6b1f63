//! 명령줄 인자.

use clap::{Args as ClapArgs, Parser, Subcommand};
use gestorly_core::models::client::DEFAULT_COUNTRY;
use gestorly_core::models::document::{DEFAULT_DOCUMENT_TYPE, DEFAULT_PERIOD};
use gestorly_core::models::thread::{LinkedType, DEFAULT_MESSAGE_BODY, DEFAULT_TOPIC};
use std::path::PathBuf;

/// Gestorly BFF 데모 클라이언트
///
/// 토큰을 넣고 고객 → 문서 → 스레드 흐름을 수동으로 점검한다.
#[derive(Parser, Debug)]
#[command(name = "gestorly-demo")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// BFF URL (기본: http://localhost:3000, 또는 GESTORLY_BFF_URL)
    #[arg(long, short = 's', global = true)]
    pub server: Option<String>,

    /// 세션 토큰 (JWT). 없으면 GESTORLY_TOKEN 환경변수
    #[arg(long, short = 't', global = true)]
    pub token: Option<String>,

    /// 설정 파일 경로 (TOML)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// 로그 레벨 (trace, debug, info, warn, error)
    #[arg(long, short = 'l', default_value = "warn", global = true)]
    pub log_level: String,

    /// 종료 시 뷰 상태를 JSON으로 출력
    #[arg(long, global = true)]
    pub print_state: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// 고객 목록 / 생성
    #[command(subcommand)]
    Clients(ClientsCommand),

    /// 문서 업로드
    #[command(subcommand)]
    Documents(DocumentsCommand),

    /// 스레드 생성 / 메시지 전송
    #[command(subcommand)]
    Threads(ThreadsCommand),

    /// 로그인 → 고객 → 문서 → 스레드 전체 흐름 실행
    Walkthrough(WalkthroughArgs),

    /// 적용된 설정 출력
    Config,
}

#[derive(Subcommand, Debug)]
pub enum ClientsCommand {
    /// 고객 목록 불러오기
    List,

    /// 고객 생성 후 목록 갱신
    Create {
        /// 상호
        #[arg(long)]
        name: String,
        /// NIF/CIF
        #[arg(long, default_value = "")]
        tax_id: String,
        /// 국가 코드
        #[arg(long, default_value = DEFAULT_COUNTRY)]
        country: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum DocumentsCommand {
    /// 서명 URL 방식으로 문서 업로드
    Upload {
        /// 대상 고객 ID
        #[arg(long)]
        client: String,
        /// 업로드할 파일
        #[arg(long)]
        file: PathBuf,
        /// 문서 타입 (factura/nomina/...)
        #[arg(long = "type", default_value = DEFAULT_DOCUMENT_TYPE)]
        doc_type: String,
        /// 기간 (YYYY-MM 또는 YYYY-Qn)
        #[arg(long, default_value = DEFAULT_PERIOD)]
        period: String,
        /// MIME 타입 (기본: 확장자로 추정)
        #[arg(long)]
        content_type: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ThreadsCommand {
    /// 스레드 생성
    Create {
        /// 대상 고객 ID
        #[arg(long)]
        client: String,
        #[command(flatten)]
        thread: ThreadOptions,
    },

    /// 스레드에 메시지 전송
    Message {
        /// 스레드 ID
        #[arg(long)]
        thread: String,
        /// 메시지 본문
        #[arg(long, default_value = DEFAULT_MESSAGE_BODY)]
        body: String,
    },
}

/// 스레드 폼 옵션
#[derive(ClapArgs, Debug, Clone)]
pub struct ThreadOptions {
    /// 스레드 주제
    #[arg(long, default_value = DEFAULT_TOPIC)]
    pub topic: String,
    /// 연결 분류 (general, task, filing)
    #[arg(long, default_value = "general")]
    pub linked_type: LinkedType,
    /// 연결 엔티티 ID (선택)
    #[arg(long, default_value = "")]
    pub linked_id: String,
}

#[derive(ClapArgs, Debug)]
pub struct WalkthroughArgs {
    /// 이 이름으로 고객을 새로 만들어 사용
    #[arg(long, conflicts_with = "client")]
    pub create_client: Option<String>,
    /// 기존 고객 ID 사용 (기본: 목록의 첫 번째 고객)
    #[arg(long)]
    pub client: Option<String>,
    /// 업로드할 파일 (없으면 문서 단계를 건너뜀)
    #[arg(long)]
    pub file: Option<PathBuf>,
    /// 문서 타입
    #[arg(long = "type", default_value = DEFAULT_DOCUMENT_TYPE)]
    pub doc_type: String,
    /// 기간
    #[arg(long, default_value = DEFAULT_PERIOD)]
    pub period: String,
    #[command(flatten)]
    pub thread: ThreadOptions,
    /// 메시지 본문
    #[arg(long, default_value = DEFAULT_MESSAGE_BODY)]
    pub body: String,
}
