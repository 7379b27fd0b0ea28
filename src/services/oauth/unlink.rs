//! 프로바이더별 연결 해제(접근 권한 철회)
//!
//! 엔드포인트, 메서드, 페이로드가 프로바이더마다 다르므로 프로바이더마다
//! [`UnlinkStrategy`] 구현을 하나씩 둡니다.
//!
//! | 프로바이더 | 요청 |
//! |------------|------|
//! | google | `POST /revoke` form `token=<access_token>` |
//! | naver | `POST /oauth2.0/token` form `grant_type=delete, client_id, client_secret, access_token, service_provider=NAVER` |
//! | kakao | `POST /v1/user/unlink` header `Authorization: Bearer <access_token>` |

use async_trait::async_trait;
use reqwest::Client;

use crate::config::ProviderKind;
use crate::domain::models::oauth::ProviderRegistration;
use crate::errors::AppError;
use crate::services::oauth::oauth2_client::send_request;
use crate::utils::json_utils::{lookup_string, parse_object};

const OPERATION: &str = "Unlink";

/// 프로바이더 하나의 연결 해제 방식
#[async_trait]
pub trait UnlinkStrategy: Send + Sync {
    /// # Errors
    ///
    /// * `AppError::OAuth2Exchange` - 성공이 아닌 HTTP 상태
    /// * `AppError::OAuth2Transport` - 요청 전송 실패
    async fn unlink(
        &self,
        http: &Client,
        registration: &ProviderRegistration,
        access_token: &str,
    ) -> Result<(), AppError>;
}

/// 프로바이더 종류에 맞는 연결 해제 전략
pub fn unlink_strategy(kind: ProviderKind) -> &'static dyn UnlinkStrategy {
    match kind {
        ProviderKind::Google => &GoogleUnlink,
        ProviderKind::Naver => &NaverUnlink,
        ProviderKind::Kakao => &KakaoUnlink,
    }
}

fn endpoint<'a>(registration: &'a ProviderRegistration, kind: ProviderKind) -> &'a str {
    registration
        .provider_details
        .unlink_uri
        .as_deref()
        .unwrap_or(kind.default_unlink_uri())
}

pub struct GoogleUnlink;

#[async_trait]
impl UnlinkStrategy for GoogleUnlink {
    async fn unlink(
        &self,
        http: &Client,
        registration: &ProviderRegistration,
        access_token: &str,
    ) -> Result<(), AppError> {
        let request = http
            .post(endpoint(registration, ProviderKind::Google))
            .form(&[("token", access_token)]);

        send_request(OPERATION, request).await.map(|_| ())
    }
}

pub struct NaverUnlink;

#[async_trait]
impl UnlinkStrategy for NaverUnlink {
    async fn unlink(
        &self,
        http: &Client,
        registration: &ProviderRegistration,
        access_token: &str,
    ) -> Result<(), AppError> {
        let params = [
            ("grant_type", "delete"),
            ("client_id", registration.client_id.as_str()),
            ("client_secret", registration.client_secret.as_str()),
            ("access_token", access_token),
            ("service_provider", "NAVER"),
        ];

        let request = http
            .post(endpoint(registration, ProviderKind::Naver))
            .form(&params);

        let body = send_request(OPERATION, request).await?;

        // 네이버는 실패도 200 으로 응답하고 본문에 error 를 담는다
        let attributes = parse_object(&body)?;
        if let Some(error) = lookup_string(&attributes, "error") {
            let description = lookup_string(&attributes, "error_description").unwrap_or_default();
            return Err(AppError::ProviderResponse(format!("naver unlink: {} {}", error, description)));
        }

        Ok(())
    }
}

pub struct KakaoUnlink;

#[async_trait]
impl UnlinkStrategy for KakaoUnlink {
    async fn unlink(
        &self,
        http: &Client,
        registration: &ProviderRegistration,
        access_token: &str,
    ) -> Result<(), AppError> {
        let request = http
            .post(endpoint(registration, ProviderKind::Kakao))
            .bearer_auth(access_token);

        send_request(OPERATION, request).await.map(|_| ())
    }
}
