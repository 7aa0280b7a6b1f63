//! # gestorly-core
//!
//! Gestorly BFF 데모 클라이언트의 도메인 모델, 포트(trait), 에러 타입.
//! 네트워크와 표현 계층에 독립적인 동작 로직(업로드 핸드셰이크, 화면 동작
//! 컨트롤러)을 제공한다.
//!
//! ## 구조
//!
//! - [`models`]: BFF 엔티티 및 요청 본문 (serde)
//! - [`ports`]: 어댑터 인터페이스 (async_trait)
//! - [`error`]: 핵심 에러 타입 (thiserror)
//! - [`config`]: 애플리케이션 설정 구조체
//! - [`view_state`]: 명시적 화면 상태
//! - [`upload`]: 예약 → 직접 전송 핸드셰이크
//! - [`controller`]: 화면 동작 컨트롤러

pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod ports;
pub mod upload;
pub mod view_state;

#[cfg(test)]
pub(crate) mod testing;
