//! OAuth2 프로바이더 연동 서비스 모듈
//!
//! - [`oauth2_client`] - 인증 URL 생성, 코드 교환, 토큰 갱신, 사용자 정보 조회
//! - [`user_info_normalizer`] - 프로바이더별 사용자 정보를 공통 형태로 변환
//! - [`unlink`] - 프로바이더별 연결 해제 전략

pub mod oauth2_client;
pub mod unlink;
pub mod user_info_normalizer;

pub use oauth2_client::OAuth2Client;
pub use unlink::{unlink_strategy, UnlinkStrategy};
pub use user_info_normalizer::{UserInfoMapper, UserInfoNormalizer};
