//! # Configuration Module
//!
//! 서비스의 설정 관리를 담당하는 모듈입니다.
//! Spring Framework의 `@Configuration` 클래스와 유사한 역할을 수행하며,
//! 환경 변수 기반의 설정값들을 프로세스 시작 시 한 번 읽어 불변 구조체로 제공합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 서버 바인딩, 실행 환경 설정
//! - [`auth_config`] - OAuth2 프로바이더 등록 정보, JWT 설정
//!
//! ## 설계 원칙
//!
//! ### 1. 한 번 로드, 읽기 전용
//!
//! 설정은 `main`에서 한 번 로드한 뒤 `Arc`로 감싸 서비스에 주입합니다.
//! 전역 가변 싱글톤은 두지 않습니다.
//!
//! ### 2. 보안 우선
//!
//! - 민감한 정보는 환경 변수로만 제공
//! - 기본 서명 키는 개발 환경에서만 허용
//! - `Debug` 출력에서 비밀값을 가림
//!
//! ### 3. 테스트 가능성
//!
//! 모든 로더는 `from_lookup(|key| ...)` 형태를 제공하므로 테스트에서
//! 프로세스 환경 변수를 건드리지 않고 설정을 만들 수 있습니다.
//!
//! ## Spring과의 비교
//!
//! | Spring | Rust (이 프로젝트) |
//! |--------|-------------------|
//! | `@Configuration` | `pub struct Config` |
//! | `@Value("${property}")` | `lookup("PROPERTY")` |
//! | `@Profile("dev")` | `Environment::Development` |
//! | `application.yml` | `.env` 파일 |
//! | `ClientRegistrationRepository` | `ProviderRegistrations` |

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
