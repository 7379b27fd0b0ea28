//! OAuth2 프로바이더 도메인 모델
//!
//! - [`provider_registration`] - 프로바이더별 정적 설정 (client id/secret, 스코프, 엔드포인트)
//! - [`provider_token`] - 토큰 교환/갱신 결과
//! - [`user_info`] - 프로바이더 무관한 정규화된 사용자 정보

pub mod provider_registration;
pub mod provider_token;
pub mod user_info;

pub use provider_registration::{ProviderDetails, ProviderRegistration};
pub use provider_token::ProviderToken;
pub use user_info::CanonicalUserInfo;
