//! 도메인 모델 모듈
//!
//! - [`oauth`] - 외부 OAuth2 프로바이더와 주고받는 데이터
//! - [`token`] - 자체 발급 JWT 클레임과 토큰 쌍
//! - [`auth`] - 인증된 요청의 사용자 정보

pub mod auth;
pub mod oauth;
pub mod token;

pub use auth::*;
pub use oauth::*;
pub use token::*;
