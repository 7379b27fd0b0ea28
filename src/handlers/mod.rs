//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 핸들러는 요청을 검증하고 [`AppState`](crate::core::AppState)의 서비스를 호출한 뒤
//! 결과를 JSON 으로 돌려주는 일만 합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈)                            ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   OAuth2Client / TokenService                   ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Google / Naver / Kakao                        ← 외부 프로바이더
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! - **`oauth`**: 인가 리다이렉트, 콜백, 연결 해제
//! - **`token_handlers`**: 세션 토큰 갱신
//!
//! ## 에러 처리
//!
//! 모든 핸들러는 `Result<HttpResponse, AppError>`를 반환하며,
//! `AppError`의 `ResponseError` 구현이 상태 코드와 JSON 본문을 결정합니다.

pub mod oauth;
pub mod token_handlers;
