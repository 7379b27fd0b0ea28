//! 소셜 로그인 인증 서비스 백엔드
//!
//! OAuth2 프로바이더(Google, 네이버, 카카오)에 로그인을 위임하고,
//! 자체 서명한 JWT 로 세션을 관리하는 서비스입니다.
//!
//! # Features
//!
//! - **OAuth2 클라이언트**: 인가 리다이렉트 URL 생성, 코드 교환, 토큰 갱신
//! - **사용자 정보 정규화**: 프로바이더별 응답을 하나의 사용자 모델로 변환
//! - **연결 해제**: 프로바이더별 방식으로 접근 권한 철회
//! - **JWT 세션**: 액세스/리프레시 토큰 발급, subject 추출, 만료 판정
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리 (+ AuthMiddleware)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← OAuth2Client, TokenService
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ OAuth2 Provider │ ← Google / Naver / Kakao
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use social_auth_backend::core::AppState;
//!
//! let state = AppState::from_env()?;
//! let registration = state.registrations.get("google")?;
//!
//! let (provider_token, user) = state.oauth2_client.login(&registration, code, csrf).await?;
//! let tokens = state.token_service.issue_token_pair(&user.subject())?;
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
