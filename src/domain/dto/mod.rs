//! HTTP 요청/응답 DTO 모듈
//!
//! - [`oauth`] - OAuth2 콜백, 연결 해제 요청과 로그인 응답
//! - [`tokens`] - 세션 토큰 갱신 요청과 공통 응답 래퍼

pub mod oauth;
pub mod tokens;

pub use oauth::*;
pub use tokens::*;
