//! # Core Module
//!
//! 애플리케이션 조립 지점입니다. 설정을 한 번 로드하고, 서비스들을 만들어
//! [`AppState`](state::AppState) 하나로 묶어 핸들러와 미들웨어에 주입합니다.
//!
//! ```text
//! JwtConfig ───────────────┐
//! ProviderRegistrations ───┼──► AppState ──► web::Data<AppState>
//! Clock ───────────────────┘       ├─ TokenService
//!                                  └─ OAuth2Client (+ UserInfoNormalizer)
//! ```

pub mod state;

pub use state::AppState;
