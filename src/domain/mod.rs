//! 도메인 계층 모듈
//!
//! OAuth2 프로바이더 연동과 JWT 세션 인증에서 사용하는 데이터 타입을 정의합니다.
//!
//! # 모듈 구성
//!
//! - [`models`] - 프로바이더 등록 정보, 프로바이더 토큰, 정규화된 사용자 정보, JWT 클레임
//! - [`dto`] - HTTP 요청/응답 DTO
//!
//! # 데이터 흐름
//!
//! ```text
//! ProviderRegistration ──► OAuth2Client ──► ProviderToken
//!                               │
//!                               ▼
//!                     user-info JSON ──► UserInfoNormalizer ──► CanonicalUserInfo
//!                                                                     │
//!                                                                     ▼
//!                                                    TokenService ──► TokenPair (JWT)
//! ```

pub mod models;
pub mod dto;
