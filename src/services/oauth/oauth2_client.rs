//! # OAuth2 토큰 교환 클라이언트
//!
//! 외부 프로바이더(Google, 네이버, 카카오)를 상대로 OAuth 2.0 Authorization
//! Code Grant 의 서버 측 단계를 수행합니다.
//!
//! ```text
//! ┌─────────────┐          ┌─────────────────┐                 ┌─────────────┐
//! │  브라우저     │          │   이 서비스       │                 │  프로바이더   │
//! └─────────────┘          └─────────────────┘                 └─────────────┘
//!        │ 1. authorize 요청        │                                  │
//!        ├─────────────────────────►│ build_authorization_redirect     │
//!        │ 2. 302 Redirect          │                                  │
//!        │◄─────────────────────────┤                                  │
//!        │ 3. 로그인 / 동의          │                                  │
//!        ├────────────────────────────────────────────────────────────►│
//!        │ 4. callback ?code&state  │                                  │
//!        ├─────────────────────────►│ 5. exchange_code_for_token       │
//!        │                          ├─────────────────────────────────►│
//!        │                          │ 6. fetch_user_info (Bearer)      │
//!        │                          ├─────────────────────────────────►│
//!        │                          │ 7. UserInfoNormalizer            │
//!        │ 8. 세션 JWT 응답           │                                  │
//!        │◄─────────────────────────┤                                  │
//! ```
//!
//! 재시도, 캐시, 백프레셔는 없습니다. 프로바이더 호출 한 번이 실패하면
//! 바로 에러로 돌려주며, 재시도는 호출자의 몫입니다.

use std::sync::Arc;
use std::time::Duration as StdDuration;

use chrono::Duration;
use reqwest::{Client, RequestBuilder};

use crate::config::ProviderKind;
use crate::domain::models::oauth::{CanonicalUserInfo, ProviderRegistration, ProviderToken};
use crate::errors::AppError;
use crate::services::oauth::unlink::unlink_strategy;
use crate::services::oauth::user_info_normalizer::UserInfoNormalizer;
use crate::utils::clock::Clock;
use crate::utils::json_utils::{lookup_i64, lookup_string, parse_object};

const HTTP_TIMEOUT_SECONDS: u64 = 10;

/// 요청을 보내고 성공 응답의 본문을 돌려줍니다.
///
/// 전송 계층 에러는 문자열로 바꿔 `OAuth2Transport`로, 성공이 아닌 상태는
/// 숫자 상태 코드를 보존한 `OAuth2Exchange`로 감쌉니다. reqwest 에러 타입은
/// 호출자에게 노출되지 않습니다.
pub(crate) async fn send_request(
    operation: &'static str,
    request: RequestBuilder,
) -> Result<String, AppError> {
    let response = request.send().await.map_err(|e| {
        log::warn!("{} 요청 전송 실패: {}", operation, e);
        AppError::OAuth2Transport {
            operation,
            message: e.to_string(),
        }
    })?;

    let status = response.status();
    if !status.is_success() {
        log::warn!("{} 실패: HTTP {}", operation, status.as_u16());
        return Err(AppError::OAuth2Exchange {
            operation,
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|e| AppError::OAuth2Transport {
        operation,
        message: e.to_string(),
    })
}

/// OAuth2 토큰 교환 클라이언트
///
/// 상태를 갖지 않으므로 여러 사용자의 요청을 동시에 처리해도 조정이 필요 없습니다.
/// 내부 `reqwest::Client`는 커넥션 풀을 공유합니다.
#[derive(Clone)]
pub struct OAuth2Client {
    http: Client,
    clock: Arc<dyn Clock>,
    normalizer: Arc<UserInfoNormalizer>,
}

impl OAuth2Client {
    pub fn new(clock: Arc<dyn Clock>, normalizer: Arc<UserInfoNormalizer>) -> Self {
        let http = Client::builder()
            .timeout(StdDuration::from_secs(HTTP_TIMEOUT_SECONDS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self::with_http_client(http, clock, normalizer)
    }

    pub fn with_http_client(
        http: Client,
        clock: Arc<dyn Clock>,
        normalizer: Arc<UserInfoNormalizer>,
    ) -> Self {
        Self {
            http,
            clock,
            normalizer,
        }
    }

    /// 프로바이더 인증 페이지 URL 생성
    ///
    /// 네트워크 호출 없이 URL 만 만듭니다. 호출자는 이 URL 로 302 리다이렉트합니다.
    ///
    /// # 생성되는 URL 구조
    ///
    /// ```text
    /// {authorization_uri}?
    ///   client_id=...&
    ///   response_type=code&
    ///   access_type=offline&
    ///   include_granted_scopes=true&
    ///   scope=profile%20email&
    ///   state=...&
    ///   redirect_uri=...
    /// ```
    ///
    /// 모든 값은 UTF-8 퍼센트 인코딩되며 스코프는 공백으로 구분합니다.
    /// `access_type=offline`은 Google 에서 리프레시 토큰을 받기 위한 옵션입니다.
    pub fn build_authorization_redirect(registration: &ProviderRegistration, state: &str) -> String {
        let scope = registration.scopes.join(" ");
        let params = [
            ("client_id", registration.client_id.as_str()),
            ("response_type", "code"),
            ("access_type", "offline"),
            ("include_granted_scopes", "true"),
            ("scope", scope.as_str()),
            ("state", state),
            ("redirect_uri", registration.redirect_uri.as_str()),
        ];

        let query_string = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        let authorization_uri = &registration.provider_details.authorization_uri;
        let separator = if authorization_uri.contains('?') { '&' } else { '?' };

        format!("{}{}{}", authorization_uri, separator, query_string)
    }

    /// Authorization Code 를 프로바이더 토큰으로 교환
    ///
    /// 응답에 `refresh_token`이 없어도 허용합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::OAuth2Exchange` - 토큰 엔드포인트가 성공이 아닌 상태를 반환
    /// * `AppError::OAuth2Transport` - 요청 전송 실패
    /// * `AppError::ProviderResponse` - `access_token`/`expires_in` 누락
    pub async fn exchange_code_for_token(
        &self,
        registration: &ProviderRegistration,
        code: &str,
        state: &str,
    ) -> Result<ProviderToken, AppError> {
        let params = [
            ("client_id", registration.client_id.as_str()),
            ("client_secret", registration.client_secret.as_str()),
            ("grant_type", registration.authorization_grant_type.as_str()),
            ("code", code),
            ("state", state),
            ("redirect_uri", registration.redirect_uri.as_str()),
        ];

        log::debug!("{} 토큰 교환 요청", registration.registration_id);
        self.request_token(registration, "Get access token", &params).await
    }

    /// 프로바이더 리프레시 토큰으로 액세스 토큰 갱신
    ///
    /// 갱신 응답에 `refresh_token`이 없으면(네이버 등) 전달받은 리프레시 토큰을
    /// 그대로 유지합니다. 응답에 새 값이 있으면 새 값을 사용합니다.
    ///
    /// # Errors
    ///
    /// `exchange_code_for_token`과 같습니다.
    pub async fn refresh_token(
        &self,
        registration: &ProviderRegistration,
        refresh_token: &str,
    ) -> Result<ProviderToken, AppError> {
        let params = [
            ("client_id", registration.client_id.as_str()),
            ("client_secret", registration.client_secret.as_str()),
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
        ];

        log::debug!("{} 토큰 갱신 요청", registration.registration_id);
        let mut token = self.request_token(registration, "Refresh token", &params).await?;

        if token.refresh_token.is_none() {
            token.refresh_token = Some(refresh_token.to_string());
        }

        Ok(token)
    }

    /// 토큰 엔드포인트에 form POST 후 토큰 JSON 을 해석합니다.
    async fn request_token(
        &self,
        registration: &ProviderRegistration,
        operation: &'static str,
        params: &[(&str, &str)],
    ) -> Result<ProviderToken, AppError> {
        let request = self
            .http
            .post(&registration.provider_details.token_uri)
            .form(params);

        let body = send_request(operation, request).await?;
        let attributes = parse_object(&body)?;

        let Some(access_token) = lookup_string(&attributes, "access_token") else {
            // 네이버는 실패를 200 + error 본문으로 알린다
            let reason = match lookup_string(&attributes, "error") {
                Some(error) => format!(
                    "{} {}",
                    error,
                    lookup_string(&attributes, "error_description").unwrap_or_default()
                ),
                None => "access_token is missing".to_string(),
            };
            return Err(AppError::ProviderResponse(format!(
                "{} ({}): {}",
                operation,
                registration.registration_id,
                reason.trim()
            )));
        };

        let expires_in = lookup_i64(&attributes, "expires_in").ok_or_else(|| {
            AppError::ProviderResponse(format!(
                "{} ({}): expires_in is missing",
                operation, registration.registration_id
            ))
        })?;

        let expires_at = Some(expires_in)
            .filter(|seconds| *seconds >= 0)
            .and_then(Duration::try_seconds)
            .and_then(|lifetime| self.clock.now().checked_add_signed(lifetime))
            .ok_or_else(|| {
                AppError::ProviderResponse(format!(
                    "{} ({}): expires_in is out of range ({})",
                    operation, registration.registration_id, expires_in
                ))
            })?;

        Ok(ProviderToken {
            access_token,
            refresh_token: lookup_string(&attributes, "refresh_token"),
            expires_at,
        })
    }

    /// 액세스 토큰으로 사용자 정보를 조회하고 정규화합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::OAuth2Exchange` - 사용자 정보 엔드포인트가 성공이 아닌 상태를 반환
    /// * `AppError::UnsupportedProvider` - registration id 에 맞는 매퍼가 없음
    pub async fn fetch_user_info(
        &self,
        registration: &ProviderRegistration,
        access_token: &str,
    ) -> Result<CanonicalUserInfo, AppError> {
        let request = self
            .http
            .get(&registration.provider_details.user_info_uri)
            .bearer_auth(access_token);

        log::debug!("{} 사용자 정보 요청", registration.registration_id);
        let body = send_request("Get user info", request).await?;
        let attributes = parse_object(&body)?;

        self.normalizer
            .normalize(&registration.registration_id, attributes)
    }

    /// 프로바이더 연결 해제 (프로바이더별 전략으로 분기)
    ///
    /// # Errors
    ///
    /// * `AppError::UnsupportedProvider` - 연결 해제 방식을 모르는 registration id
    /// * `AppError::OAuth2Exchange` - 성공이 아닌 HTTP 상태
    pub async fn unlink(
        &self,
        registration: &ProviderRegistration,
        access_token: &str,
    ) -> Result<(), AppError> {
        let kind = ProviderKind::from_str(&registration.registration_id)?;

        unlink_strategy(kind)
            .unlink(&self.http, registration, access_token)
            .await?;

        log::info!("{} 연결 해제 완료", kind);
        Ok(())
    }

    /// 콜백 처리: 코드 교환 후 사용자 정보 조회
    pub async fn login(
        &self,
        registration: &ProviderRegistration,
        code: &str,
        state: &str,
    ) -> Result<(ProviderToken, CanonicalUserInfo), AppError> {
        let token = self.exchange_code_for_token(registration, code, state).await?;
        let user_info = self.fetch_user_info(registration, &token.access_token).await?;

        Ok((token, user_info))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::domain::models::oauth::ProviderDetails;
    use crate::utils::clock::FixedClock;

    fn registration(registration_id: &str, base_uri: &str) -> ProviderRegistration {
        ProviderRegistration {
            registration_id: registration_id.to_string(),
            client_id: "client-id".to_string(),
            client_secret: "client-secret".to_string(),
            authorization_grant_type: "authorization_code".to_string(),
            redirect_uri: "http://localhost:8080/api/oauth2/callback".to_string(),
            scopes: vec!["profile".to_string(), "email".to_string()],
            provider_details: ProviderDetails {
                authorization_uri: format!("{}/authorize", base_uri),
                token_uri: format!("{}/token", base_uri),
                user_info_uri: format!("{}/userinfo", base_uri),
                unlink_uri: Some(format!("{}/unlink", base_uri)),
            },
        }
    }

    fn client() -> (OAuth2Client, Arc<FixedClock>) {
        let clock = Arc::new(FixedClock::new(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()));
        let client = OAuth2Client::new(clock.clone(), Arc::new(UserInfoNormalizer::with_defaults()));
        (client, clock)
    }

    async fn mount_token_response(server: &MockServer, status: u16, body: serde_json::Value) {
        Mock::given(method("POST"))
            .and(path("/token"))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(server)
            .await;
    }

    #[test]
    fn test_authorization_redirect_encodes_and_orders_params() {
        let registration = registration("google", "https://accounts.example.com");

        let url = OAuth2Client::build_authorization_redirect(&registration, "a b");

        assert_eq!(
            url,
            "https://accounts.example.com/authorize?client_id=client-id&response_type=code\
             &access_type=offline&include_granted_scopes=true&scope=profile%20email&state=a%20b\
             &redirect_uri=http%3A%2F%2Flocalhost%3A8080%2Fapi%2Foauth2%2Fcallback"
        );
        assert!(!url.contains(' '));
    }

    #[test]
    fn test_authorization_redirect_appends_to_existing_query() {
        let mut registration = registration("kakao", "https://kauth.example.com");
        registration.provider_details.authorization_uri =
            "https://kauth.example.com/authorize?prompt=login".to_string();

        let url = OAuth2Client::build_authorization_redirect(&registration, "s");

        assert!(url.starts_with("https://kauth.example.com/authorize?prompt=login&client_id=client-id"));
    }

    #[tokio::test]
    async fn test_exchange_code_for_token_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/token"))
            .and(body_string_contains("grant_type=authorization_code"))
            .and(body_string_contains("code=auth-code"))
            .and(body_string_contains("state=xyz"))
            .and(body_string_contains("client_secret=client-secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "AT1",
                "refresh_token": "RT1",
                "expires_in": 3600
            })))
            .mount(&server)
            .await;

        let (client, clock) = client();
        let token = client
            .exchange_code_for_token(&registration("google", &server.uri()), "auth-code", "xyz")
            .await
            .unwrap();

        assert_eq!(token.access_token, "AT1");
        assert_eq!(token.refresh_token.as_deref(), Some("RT1"));
        assert_eq!(token.expires_at, clock.now() + Duration::seconds(3600));
    }

    #[tokio::test]
    async fn test_exchange_code_without_refresh_token() {
        let server = MockServer::start().await;
        mount_token_response(&server, 200, json!({ "access_token": "AT1", "expires_in": 3600 })).await;

        let (client, _) = client();
        let token = client
            .exchange_code_for_token(&registration("google", &server.uri()), "code", "state")
            .await
            .unwrap();

        assert_eq!(token.refresh_token, None);
    }

    #[tokio::test]
    async fn test_exchange_code_http_400() {
        let server = MockServer::start().await;
        mount_token_response(
            &server,
            400,
            json!({ "error": "invalid_grant", "error_description": "Bad Request" }),
        )
        .await;

        let (client, _) = client();
        let result = client
            .exchange_code_for_token(&registration("google", &server.uri()), "code", "state")
            .await;

        match result {
            Err(AppError::OAuth2Exchange { operation, status }) => {
                assert_eq!(status, 400);
                assert_eq!(operation, "Get access token");
            }
            other => panic!("expected OAuth2Exchange, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_exchange_code_accepts_string_expires_in() {
        let server = MockServer::start().await;
        mount_token_response(
            &server,
            200,
            json!({ "access_token": "AT1", "refresh_token": "RT1", "token_type": "bearer", "expires_in": "3600" }),
        )
        .await;

        let (client, clock) = client();
        let token = client
            .exchange_code_for_token(&registration("naver", &server.uri()), "code", "state")
            .await
            .unwrap();

        assert_eq!(token.expires_at, clock.now() + Duration::seconds(3600));
    }

    #[tokio::test]
    async fn test_exchange_code_error_body_with_200() {
        let server = MockServer::start().await;
        mount_token_response(
            &server,
            200,
            json!({ "error": "invalid_request", "error_description": "no valid data in session" }),
        )
        .await;

        let (client, _) = client();
        let result = client
            .exchange_code_for_token(&registration("naver", &server.uri()), "code", "state")
            .await;

        match result {
            Err(AppError::ProviderResponse(message)) => assert!(message.contains("invalid_request")),
            other => panic!("expected ProviderResponse, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_exchange_code_missing_expires_in() {
        let server = MockServer::start().await;
        mount_token_response(&server, 200, json!({ "access_token": "AT1" })).await;

        let (client, _) = client();
        let result = client
            .exchange_code_for_token(&registration("google", &server.uri()), "code", "state")
            .await;

        assert!(matches!(result, Err(AppError::ProviderResponse(_))));
    }

    #[tokio::test]
    async fn test_exchange_code_rejects_huge_expires_in() {
        let server = MockServer::start().await;
        mount_token_response(
            &server,
            200,
            json!({ "access_token": "AT", "expires_in": i64::MAX }),
        )
        .await;

        let (client, _) = client();
        let result = client
            .exchange_code_for_token(&registration("google", &server.uri()), "code", "state")
            .await;

        assert!(matches!(result, Err(AppError::ProviderResponse(msg)) if msg.contains("out of range")));
    }

    #[tokio::test]
    async fn test_refresh_rejects_negative_expires_in() {
        let server = MockServer::start().await;
        mount_token_response(
            &server,
            200,
            json!({ "access_token": "AT", "expires_in": -30 }),
        )
        .await;

        let (client, _) = client();
        let result = client
            .refresh_token(&registration("kakao", &server.uri()), "RT0")
            .await;

        assert!(matches!(result, Err(AppError::ProviderResponse(_))));
    }

    #[tokio::test]
    async fn test_exchange_code_transport_failure() {
        let (client, _) = client();
        // 포트 1 은 열려 있지 않으므로 연결이 거부된다
        let result = client
            .exchange_code_for_token(&registration("google", "http://127.0.0.1:1"), "code", "state")
            .await;

        assert!(matches!(
            result,
            Err(AppError::OAuth2Transport { operation: "Get access token", .. })
        ));
    }

    #[tokio::test]
    async fn test_refresh_keeps_original_refresh_token_when_omitted() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/token"))
            .and(body_string_contains("grant_type=refresh_token"))
            .and(body_string_contains("refresh_token=RT-original"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "AT2",
                "expires_in": 3600
            })))
            .mount(&server)
            .await;

        let (client, _) = client();
        let token = client
            .refresh_token(&registration("naver", &server.uri()), "RT-original")
            .await
            .unwrap();

        assert_eq!(token.access_token, "AT2");
        assert_eq!(token.refresh_token.as_deref(), Some("RT-original"));
    }

    #[tokio::test]
    async fn test_refresh_keeps_original_refresh_token_when_null() {
        let server = MockServer::start().await;
        mount_token_response(
            &server,
            200,
            json!({ "access_token": "AT2", "refresh_token": null, "expires_in": 3600 }),
        )
        .await;

        let (client, _) = client();
        let token = client
            .refresh_token(&registration("google", &server.uri()), "RT-original")
            .await
            .unwrap();

        assert_eq!(token.refresh_token.as_deref(), Some("RT-original"));
    }

    #[tokio::test]
    async fn test_refresh_uses_new_refresh_token() {
        let server = MockServer::start().await;
        mount_token_response(
            &server,
            200,
            json!({ "access_token": "AT2", "refresh_token": "RT-new", "expires_in": 7200 }),
        )
        .await;

        let (client, clock) = client();
        let token = client
            .refresh_token(&registration("kakao", &server.uri()), "RT-original")
            .await
            .unwrap();

        assert_eq!(token.refresh_token.as_deref(), Some("RT-new"));
        assert_eq!(token.expires_at, clock.now() + Duration::seconds(7200));
    }

    #[tokio::test]
    async fn test_refresh_http_401() {
        let server = MockServer::start().await;
        mount_token_response(&server, 401, json!({ "error": "invalid_client" })).await;

        let (client, _) = client();
        let result = client
            .refresh_token(&registration("google", &server.uri()), "RT")
            .await;

        assert!(matches!(
            result,
            Err(AppError::OAuth2Exchange { operation: "Refresh token", status: 401 })
        ));
    }

    #[tokio::test]
    async fn test_fetch_user_info_sends_bearer_and_normalizes() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/userinfo"))
            .and(header("authorization", "Bearer AT1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "resultcode": "00",
                "message": "success",
                "response": { "id": "naver-1", "email": "user@naver.com", "name": "네이버" }
            })))
            .mount(&server)
            .await;

        let (client, _) = client();
        let info = client
            .fetch_user_info(&registration("naver", &server.uri()), "AT1")
            .await
            .unwrap();

        assert_eq!(info.registration_id, "naver");
        assert_eq!(info.provider_user_id, "naver-1");
        assert_eq!(info.email.as_deref(), Some("user@naver.com"));
    }

    #[tokio::test]
    async fn test_fetch_user_info_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/userinfo"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let (client, _) = client();
        let result = client
            .fetch_user_info(&registration("google", &server.uri()), "expired")
            .await;

        assert!(matches!(
            result,
            Err(AppError::OAuth2Exchange { operation: "Get user info", status: 401 })
        ));
    }

    #[tokio::test]
    async fn test_fetch_user_info_unsupported_provider() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/userinfo"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 1 })))
            .mount(&server)
            .await;

        let (client, _) = client();
        let result = client
            .fetch_user_info(&registration("github", &server.uri()), "AT1")
            .await;

        assert!(matches!(result, Err(AppError::UnsupportedProvider(_))));
    }

    #[tokio::test]
    async fn test_login_exchanges_then_fetches_user() {
        let server = MockServer::start().await;
        mount_token_response(
            &server,
            200,
            json!({ "access_token": "AT1", "refresh_token": "RT1", "expires_in": 3600 }),
        )
        .await;
        Mock::given(method("GET"))
            .and(path("/userinfo"))
            .and(header("authorization", "Bearer AT1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "sub": "g-1",
                "email": "user@gmail.com"
            })))
            .mount(&server)
            .await;

        let (client, _) = client();
        let (token, info) = client
            .login(&registration("google", &server.uri()), "code", "state")
            .await
            .unwrap();

        assert_eq!(token.access_token, "AT1");
        assert_eq!(info.subject(), "google:g-1");
    }

    #[tokio::test]
    async fn test_google_unlink_posts_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/unlink"))
            .and(body_string_contains("token=AT1"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let (client, _) = client();
        client
            .unlink(&registration("google", &server.uri()), "AT1")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_naver_unlink_uses_delete_grant() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/unlink"))
            .and(body_string_contains("grant_type=delete"))
            .and(body_string_contains("access_token=AT1"))
            .and(body_string_contains("service_provider=NAVER"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "AT1",
                "result": "success"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let (client, _) = client();
        client
            .unlink(&registration("naver", &server.uri()), "AT1")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_naver_unlink_error_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/unlink"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "error": "invalid_request",
                "error_description": "invalid access_token"
            })))
            .mount(&server)
            .await;

        let (client, _) = client();
        let result = client.unlink(&registration("naver", &server.uri()), "AT1").await;

        assert!(matches!(result, Err(AppError::ProviderResponse(_))));
    }

    #[tokio::test]
    async fn test_kakao_unlink_sends_bearer() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/unlink"))
            .and(header("authorization", "Bearer AT1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 1234567890_u64 })))
            .expect(1)
            .mount(&server)
            .await;

        let (client, _) = client();
        client
            .unlink(&registration("kakao", &server.uri()), "AT1")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_unlink_http_error_and_unknown_provider() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/unlink"))
            .respond_with(ResponseTemplate::new(400))
            .mount(&server)
            .await;

        let (client, _) = client();

        let result = client.unlink(&registration("kakao", &server.uri()), "AT1").await;
        assert!(matches!(
            result,
            Err(AppError::OAuth2Exchange { operation: "Unlink", status: 400 })
        ));

        let result = client.unlink(&registration("github", &server.uri()), "AT1").await;
        assert!(matches!(result, Err(AppError::UnsupportedProvider(_))));
    }
}
