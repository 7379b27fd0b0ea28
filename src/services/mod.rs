//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스들은 `main`에서 불변 설정과 시계를 주입받아 한 번 생성되고,
//! `web::Data`로 핸들러에 공유됩니다.
//!
//! # Features
//!
//! - JWT 액세스/리프레시 토큰 발급과 검증 ([`auth`])
//! - OAuth2 코드 교환, 토큰 갱신, 사용자 정보 정규화, 연결 해제 ([`oauth`])
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{auth::TokenService, oauth::OAuth2Client};
//!
//! let (provider_token, user) = oauth2_client.login(&registration, code, state).await?;
//! let tokens = token_service.issue_token_pair(&user.subject())?;
//! ```

pub mod auth;
pub mod oauth;
