//! 세션 토큰 보관.
//!
//! 사용자가 붙여넣은 토큰을 그대로 보관한다. 구조/만료 검증이나 갱신은
//! 하지 않으며, 비어 있는 토큰도 그대로 Bearer 값으로 사용된다.

use tokio::sync::RwLock;
use tracing::debug;

/// 세션 토큰 저장소
#[derive(Debug, Default)]
pub struct TokenStore {
    token: RwLock<String>,
}

impl TokenStore {
    /// 초기 토큰으로 생성
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(token.into()),
        }
    }

    /// 토큰 교체
    pub async fn set(&self, token: impl Into<String>) {
        let token = token.into();
        debug!("세션 토큰 교체 ({} 자)", token.len());
        *self.token.write().await = token;
    }

    /// 현재 토큰 (비어 있을 수 있음)
    pub async fn get(&self) -> String {
        self.token.read().await.clone()
    }

    /// `Authorization` 헤더 값
    pub async fn authorization(&self) -> String {
        format!("Bearer {}", self.get().await)
    }
}
