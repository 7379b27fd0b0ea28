//! OAuth2 로그인 응답 DTO
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::models::oauth::CanonicalUserInfo;

/// 소셜 로그인 성공 응답
///
/// 자체 발급 세션 토큰과 정규화된 사용자 정보를 함께 돌려줍니다.
/// 프로바이더 토큰 자체는 응답에 넣지 않습니다.
#[derive(Debug, Serialize)]
pub struct OAuthLoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
    pub token_type: &'static str,
    pub user: CanonicalUserInfo,
    /// 프로바이더 액세스 토큰 만료 시각
    pub provider_token_expires_at: DateTime<Utc>,
}
