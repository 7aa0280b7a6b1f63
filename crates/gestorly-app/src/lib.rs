//! # gestorly-app
//!
//! Gestorly BFF 데모 클라이언트 진입점 구성요소.
//! CLI 정의, 설정 로드, 어댑터 와이어링, 콘솔 알림, 커맨드 실행.

pub mod cli;
pub mod commands;
pub mod notifier;
pub mod session;
pub mod settings;
