//! BFF HTTP 클라이언트.
//!
//! `BffApi` 포트 구현. 모든 BFF 호출은 [`HttpBffClient::fetch_json`]을 거치며,
//! 여기서 Bearer 토큰과 JSON Content-Type 헤더가 주입되고 비정상 응답이
//! `CoreError::Request`로 정규화된다. 재시도, 취소, 기본 타임아웃은 없다.

use async_trait::async_trait;
use gestorly_core::error::CoreError;
use gestorly_core::models::client::{Client, ClientList, NewClient};
use gestorly_core::models::document::{ReservationRequest, ReservedDocument};
use gestorly_core::models::thread::{NewMessage, NewThread, ThreadRef};
use gestorly_core::models::Envelope;
use gestorly_core::ports::bff::BffApi;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use crate::auth::TokenStore;
use crate::{build_client, read_body};

/// 모든 BFF 경로의 공통 접두사
const API_PREFIX: [&str; 2] = ["api", "v1"];

/// 기본 Content-Type
const JSON_CONTENT_TYPE: &str = "application/json";

/// 요청 옵션: 메서드, JSON 본문, 추가 헤더
#[derive(Debug, Clone)]
pub struct RequestOptions {
    method: Method,
    body: Option<serde_json::Value>,
    headers: HeaderMap,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self {
            method: Method::GET,
            body: None,
            headers: HeaderMap::new(),
        }
    }

    /// JSON 본문을 가진 POST
    pub fn post<B: Serialize + ?Sized>(body: &B) -> Result<Self, CoreError> {
        Ok(Self {
            method: Method::POST,
            body: Some(serde_json::to_value(body)?),
            headers: HeaderMap::new(),
        })
    }

    /// 추가 헤더. `Content-Type`은 덮어쓸 수 있지만 `Authorization`은 무시된다.
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// Gestorly BFF 클라이언트: `BffApi` 포트 구현
#[derive(Debug)]
pub struct HttpBffClient {
    client: reqwest::Client,
    base_url: Url,
    tokens: Arc<TokenStore>,
}

impl HttpBffClient {
    /// 새 BFF 클라이언트 생성
    ///
    /// `timeout`이 `None`이면 타임아웃을 설정하지 않는다.
    pub fn new(
        base_url: &str,
        tokens: Arc<TokenStore>,
        timeout: Option<Duration>,
    ) -> Result<Self, CoreError> {
        let base_url = Url::parse(base_url.trim())
            .map_err(|e| CoreError::Config(format!("잘못된 BFF URL '{base_url}': {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(CoreError::Config(format!(
                "BFF URL 은 경로를 가질 수 있어야 함: {base_url}"
            )));
        }

        Ok(Self {
            client: build_client(timeout)?,
            base_url,
            tokens,
        })
    }

    /// BFF 기본 URL
    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    /// `/api/v1/{segments...}` 절대 URL (세그먼트는 퍼센트 인코딩됨)
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, CoreError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| CoreError::Config(format!("잘못된 BFF URL: {}", self.base_url)))?
            .pop_if_empty()
            .extend(API_PREFIX)
            .extend(segments);
        Ok(url)
    }

    /// 요청 헤더 구성
    ///
    /// 기본 `Content-Type: application/json` → 호출자 헤더 → `Authorization` 순으로
    /// 병합한다. 토큰이 비어 있어도 `Bearer ` 값으로 요청한다.
    async fn request_headers(&self, extra: &HeaderMap) -> Result<HeaderMap, CoreError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));

        for (name, value) in extra {
            if name != AUTHORIZATION {
                headers.insert(name.clone(), value.clone());
            }
        }

        let bearer = HeaderValue::from_str(&self.tokens.authorization().await).map_err(|_| {
            CoreError::validation("token", "토큰에 헤더로 보낼 수 없는 문자가 포함됨")
        })?;
        headers.insert(AUTHORIZATION, bearer);

        Ok(headers)
    }

    /// 인증 요청 래퍼
    ///
    /// 2xx 이외의 응답은 상태 코드와 본문 원문을 담은 `CoreError::Request`.
    /// 성공 응답 본문은 `T`로 역직렬화하며, 형태가 다르면 `CoreError::Decode`.
    /// 빈 본문은 JSON `null`로 취급한다.
    pub async fn fetch_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        options: RequestOptions,
    ) -> Result<T, CoreError> {
        let url = self.endpoint(segments)?;
        let headers = self.request_headers(&options.headers).await?;
        let method = options.method;

        debug!("BFF 요청: {method} {url}");

        let mut req = self.client.request(method.clone(), url.clone()).headers(headers);
        if let Some(body) = &options.body {
            req = req.body(serde_json::to_vec(body)?);
        }

        let resp = req
            .send()
            .await
            .map_err(|e| CoreError::Network(format!("{method} {url} 요청 실패: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let body = read_body(resp).await;
            warn!("BFF 에러 응답: {method} {url} → {status}");
            return Err(CoreError::Request {
                status: status.as_u16(),
                body,
            });
        }

        let text = resp
            .text()
            .await
            .map_err(|e| CoreError::Network(format!("{method} {url} 응답 수신 실패: {e}")))?;
        let text = if text.trim().is_empty() { "null" } else { text.as_str() };

        serde_json::from_str(text)
            .map_err(|e| CoreError::Decode(format!("{method} {}: {e}", url.path())))
    }
}

#[async_trait]
impl BffApi for HttpBffClient {
    async fn list_clients(&self) -> Result<Vec<Client>, CoreError> {
        let list: ClientList = self
            .fetch_json(&["clients"], RequestOptions::get())
            .await?;
        debug!("고객 목록 수신: {}건", list.data.len());
        Ok(list.data)
    }

    async fn create_client(&self, client: &NewClient) -> Result<Client, CoreError> {
        debug!("고객 생성 요청: {}", client.display_name);
        let created: Envelope<Client> = self
            .fetch_json(&["clients"], RequestOptions::post(client)?)
            .await?;
        Ok(created.into_inner())
    }

    async fn reserve_document(
        &self,
        client_id: &str,
        request: &ReservationRequest,
    ) -> Result<ReservedDocument, CoreError> {
        let reserved: Envelope<ReservedDocument> = self
            .fetch_json(
                &["clients", client_id, "documents"],
                RequestOptions::post(request)?,
            )
            .await?;
        let reserved = reserved.into_inner();
        debug!("문서 예약 성공: document_id={}", reserved.document_id);
        Ok(reserved)
    }

    async fn create_thread(&self, thread: &NewThread) -> Result<ThreadRef, CoreError> {
        let created: Envelope<ThreadRef> = self
            .fetch_json(&["threads"], RequestOptions::post(thread)?)
            .await?;
        Ok(created.into_inner())
    }

    async fn send_message(&self, thread_id: &str, message: &NewMessage) -> Result<(), CoreError> {
        let _: serde_json::Value = self
            .fetch_json(
                &["threads", thread_id, "messages"],
                RequestOptions::post(message)?,
            )
            .await?;
        Ok(())
    }
}
