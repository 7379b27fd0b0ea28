//! OAuth2 요청관련 DTO
//!
//! 프로바이더 콜백 쿼리와 연결 해제 요청 본문을 매핑합니다.
use serde::Deserialize;
use validator::Validate;

/// OAuth 콜백 쿼리 파라미터 구조체
///
/// 사용자가 동의를 거부하면 프로바이더는 `code` 없이 `error`만 보내므로
/// `code`와 `state`는 기본값을 허용하고 검증 단계에서 확인합니다.
#[derive(Debug, Deserialize, Validate)]
pub struct OAuthCallbackQuery {
    #[serde(default)]
    #[validate(length(min = 1, message = "Authorization code가 필요합니다"))]
    pub code: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "State가 필요합니다"))]
    pub state: String,

    /// 에러가 있을 경우 (사용자가 거부했거나 에러 발생)
    pub error: Option<String>,
    pub error_description: Option<String>,
}

/// 프로바이더 연결 해제 요청 구조체
#[derive(Debug, Deserialize, Validate)]
pub struct UnlinkRequest {
    /// 프로바이더가 발급한 액세스 토큰
    #[validate(length(min = 1, message = "프로바이더 액세스 토큰이 필요합니다"))]
    pub access_token: String,
}
