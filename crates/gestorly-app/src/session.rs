//! 어댑터 와이어링.
//!
//! 설정에서 HTTP 어댑터를 생성하고 `DemoController`에 주입한다.
//! 세션 토큰은 뷰 상태와 네트워크 토큰 저장소 양쪽에 반영된다.

use gestorly_core::config::AppConfig;
use gestorly_core::controller::DemoController;
use gestorly_core::error::CoreError;
use gestorly_core::ports::notifier::Notifier;
use gestorly_core::view_state::ViewState;
use gestorly_network::auth::TokenStore;
use gestorly_network::http_client::HttpBffClient;
use gestorly_network::upload::SignedUrlUploader;
use std::sync::Arc;
use tracing::info;

/// 데모 세션: 컨트롤러 + 토큰 저장소 + 알림
pub struct DemoSession {
    controller: DemoController,
    tokens: Arc<TokenStore>,
    notifier: Arc<dyn Notifier>,
    base_url: String,
}

impl DemoSession {
    pub fn new(config: &AppConfig, notifier: Arc<dyn Notifier>) -> Result<Self, CoreError> {
        let tokens = Arc::new(TokenStore::default());
        let timeout = config.request_timeout();

        let bff = Arc::new(HttpBffClient::new(
            &config.server.base_url,
            tokens.clone(),
            timeout,
        )?);
        let base_url = bff.base_url().to_string();
        let uploader = Arc::new(SignedUrlUploader::new(timeout)?);

        info!("BFF: {base_url}");

        Ok(Self {
            controller: DemoController::new(bff, uploader, notifier.clone()),
            tokens,
            notifier,
            base_url,
        })
    }

    /// "토큰 사용": 뷰 상태와 요청 헤더에 같은 토큰을 반영
    pub async fn use_token(&self, state: &mut ViewState, token: &str) {
        state.use_token(token);
        self.tokens.set(token).await;
    }

    pub fn controller(&self) -> &DemoController {
        &self.controller
    }

    pub fn notifier(&self) -> &dyn Notifier {
        self.notifier.as_ref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
