//! 포트 인터페이스 (trait).
//!
//! 어댑터 crate(`gestorly-network`, `gestorly-app`)가 이 trait들을 구현하며,
//! 바이너리에서 `Arc<dyn T>`로 와이어링한다.
//!
//! 모든 async trait은 object safety를 위해 `async_trait` 매크로를 사용한다.

pub mod bff;
pub mod notifier;
pub mod storage;
