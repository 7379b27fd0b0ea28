//! 애플리케이션 공유 상태

use std::sync::Arc;

use crate::config::{JwtConfig, ProviderRegistrations};
use crate::errors::AppError;
use crate::services::auth::TokenService;
use crate::services::oauth::{OAuth2Client, UserInfoNormalizer};
use crate::utils::clock::{Clock, SystemClock};

/// 핸들러가 공유하는 읽기 전용 상태
///
/// 모든 필드는 생성 이후 변경되지 않으므로 워커 스레드 사이에서 잠금 없이 공유됩니다.
#[derive(Clone)]
pub struct AppState {
    pub registrations: Arc<ProviderRegistrations>,
    pub token_service: TokenService,
    pub oauth2_client: OAuth2Client,
}

impl AppState {
    pub fn new(
        jwt_config: JwtConfig,
        registrations: ProviderRegistrations,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let normalizer = Arc::new(UserInfoNormalizer::with_defaults());

        Self {
            registrations: Arc::new(registrations),
            token_service: TokenService::new(Arc::new(jwt_config), clock.clone()),
            oauth2_client: OAuth2Client::new(clock, normalizer),
        }
    }

    /// 환경 변수에서 설정을 읽어 시스템 시계로 상태를 만듭니다.
    pub fn from_env() -> Result<Self, AppError> {
        let jwt_config = JwtConfig::from_env()?;
        let registrations = ProviderRegistrations::from_env()?;

        if registrations.is_empty() {
            log::warn!("등록된 OAuth2 프로바이더가 없습니다");
        }

        Ok(Self::new(jwt_config, registrations, Arc::new(SystemClock)))
    }
}
