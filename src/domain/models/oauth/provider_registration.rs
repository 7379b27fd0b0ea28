//! OAuth2 프로바이더 등록 정보
//!
//! 프로세스 시작 시 한 번 로드되고 이후에는 읽기 전용으로만 사용됩니다.

use std::fmt;

/// 프로바이더 엔드포인트 URI 모음
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderDetails {
    /// 브라우저를 리다이렉트할 인증 엔드포인트
    pub authorization_uri: String,
    /// 코드 교환 및 토큰 갱신 엔드포인트
    pub token_uri: String,
    /// 사용자 정보 엔드포인트
    pub user_info_uri: String,
    /// 연결 해제 엔드포인트 (없으면 프로바이더 기본값 사용)
    pub unlink_uri: Option<String>,
}

/// 프로바이더별 OAuth2 클라이언트 등록 정보
#[derive(Clone, PartialEq)]
pub struct ProviderRegistration {
    /// 등록 식별자 (`google`, `naver`, `kakao` ...)
    pub registration_id: String,
    pub client_id: String,
    pub client_secret: String,
    pub authorization_grant_type: String,
    pub redirect_uri: String,
    /// 요청할 스코프 (순서 유지)
    pub scopes: Vec<String>,
    pub provider_details: ProviderDetails,
}

// client_secret 은 로그에 남지 않도록 가린다
impl fmt::Debug for ProviderRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderRegistration")
            .field("registration_id", &self.registration_id)
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .field("authorization_grant_type", &self.authorization_grant_type)
            .field("redirect_uri", &self.redirect_uri)
            .field("scopes", &self.scopes)
            .field("provider_details", &self.provider_details)
            .finish()
    }
}
