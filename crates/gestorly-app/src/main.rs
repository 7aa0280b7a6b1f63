//! # gestorly-demo
//!
//! Gestorly BFF 수동 점검용 클라이언트 바이너리.

use anyhow::{anyhow, Result};
use clap::Parser;
use gestorly_app::cli::{Args, Command};
use gestorly_app::commands;
use gestorly_app::notifier::ConsoleNotifier;
use gestorly_app::session::DemoSession;
use gestorly_app::settings::{self, TOKEN_ENV};
use gestorly_core::view_state::ViewState;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// 헤더 출력
fn print_header(base_url: &str, authenticated: bool) {
    println!();
    println!("Gestorly — Demo MVP");
    println!("Login → Clientes → Documentos → Threads");
    println!("BFF: {base_url}");
    if !authenticated {
        println!("⚠️  토큰 없음 — --token 또는 {TOKEN_ENV} 로 지정하세요");
    }
    println!();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // tracing 초기화
    let log_filter = format!(
        "gestorly_demo={},gestorly_app={},gestorly_core={},gestorly_network={}",
        args.log_level, args.log_level, args.log_level, args.log_level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    // 설정 로드 (CLI --server 오버라이드 포함, 검증은 로드 마지막에 한 번)
    let config = settings::load(args.config.as_deref(), args.server.as_deref())
        .map_err(|e| anyhow!("설정 로드 실패: {e}"))?;

    if let Command::Config = args.command {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let token = args
        .token
        .clone()
        .or_else(|| std::env::var(TOKEN_ENV).ok())
        .unwrap_or_default();

    let notifier = Arc::new(ConsoleNotifier::new());
    let session = DemoSession::new(&config, notifier)
        .map_err(|e| anyhow!("클라이언트 초기화 실패: {e}"))?;

    let mut state = ViewState::new();
    session.use_token(&mut state, token.trim()).await;
    print_header(session.base_url(), state.authenticated);

    info!("커맨드 실행: {:?}", args.command);
    let outcome = commands::run(&session, &mut state, args.command).await;

    if args.print_state {
        match serde_json::to_string_pretty(&state) {
            Ok(json) => println!("{json}"),
            Err(e) => warn!("뷰 상태 직렬화 실패: {e}"),
        }
    }

    outcome.map_err(|e| {
        error!("실패: {e}");
        anyhow!(e)
    })
}
