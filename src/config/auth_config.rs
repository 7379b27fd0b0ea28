//! # Authentication Configuration Module
//!
//! OAuth2 프로바이더 등록 정보와 JWT 토큰 설정을 관리하는 모듈입니다.
//! Spring Security의 `spring.security.oauth2.client.registration.*` 와
//! `jwt.*` 설정과 유사한 역할을 수행합니다.
//!
//! 모든 설정은 프로세스 시작 시 한 번 읽어서 불변 구조체로 만들고,
//! `Arc`로 공유합니다. 런타임에 다시 환경 변수를 읽지 않습니다.
//!
//! ## 지원하는 프로바이더
//!
//! | registration id | 환경 변수 접두사 | 기본 스코프 |
//! |-----------------|------------------|-------------|
//! | `google` | `GOOGLE_` | `profile,email` |
//! | `naver` | `NAVER_` | `name,email,profile_image` |
//! | `kakao` | `KAKAO_` | `profile_nickname,profile_image,account_email` |
//!
//! ## 필수 환경 변수 설정
//!
//! ### 프로바이더 설정 (사용할 프로바이더만)
//! ```bash
//! export GOOGLE_CLIENT_ID="your-google-client-id"
//! export GOOGLE_CLIENT_SECRET="your-google-client-secret"
//! export GOOGLE_REDIRECT_URI="http://localhost:8080/api/oauth2/callback/google"
//! # 선택: GOOGLE_SCOPES, GOOGLE_AUTHORIZATION_URI, GOOGLE_TOKEN_URI,
//! #       GOOGLE_USER_INFO_URI, GOOGLE_UNLINK_URI
//! ```
//!
//! ### JWT 토큰 설정
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_ALGORITHM="HS256"
//! export JWT_ACCESS_TOKEN_EXPIRATION_SECONDS="3600"
//! export JWT_REFRESH_TOKEN_EXPIRATION_SECONDS="1209600"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{JwtConfig, ProviderRegistrations};
//!
//! let jwt_config = JwtConfig::from_env()?;
//! let registrations = ProviderRegistrations::from_env()?;
//!
//! let google = registrations.get("google")?;
//! ```

use std::collections::HashMap;
use std::env;
use std::fmt;
use std::sync::Arc;

use chrono::Duration;
use jsonwebtoken::Algorithm;

use crate::config::Environment;
use crate::domain::models::oauth::{ProviderDetails, ProviderRegistration};
use crate::errors::AppError;

/// 개발 환경에서만 사용하는 기본 서명 키
const DEVELOPMENT_JWT_SECRET: &str = "development-only-jwt-secret-change-me";

const DEFAULT_ACCESS_TOKEN_SECONDS: i64 = 3600;
const DEFAULT_REFRESH_TOKEN_SECONDS: i64 = 14 * 24 * 3600;

/// 지원하는 OAuth2 프로바이더를 나타내는 열거형
///
/// 연결 해제처럼 프로바이더마다 API가 전혀 다른 동작은 이 닫힌 집합을
/// 기준으로 분기합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ProviderKind {
    /// Google OAuth 2.0
    Google,
    /// 네이버 로그인
    Naver,
    /// 카카오 로그인
    Kakao,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 3] = [ProviderKind::Google, ProviderKind::Naver, ProviderKind::Kakao];

    /// 문자열에서 ProviderKind를 생성합니다. (대소문자 무관)
    ///
    /// # 예제
    ///
    /// ```rust,ignore
    /// let provider = ProviderKind::from_str("google")?;
    /// assert_eq!(provider, ProviderKind::Google);
    ///
    /// assert!(ProviderKind::from_str("twitter").is_err());
    /// ```
    pub fn from_str(s: &str) -> Result<Self, AppError> {
        match s.to_lowercase().as_str() {
            "google" => Ok(ProviderKind::Google),
            "naver" => Ok(ProviderKind::Naver),
            "kakao" => Ok(ProviderKind::Kakao),
            _ => Err(AppError::UnsupportedProvider(s.to_string())),
        }
    }

    /// registration id 로 쓰이는 소문자 문자열 표현
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Google => "google",
            ProviderKind::Naver => "naver",
            ProviderKind::Kakao => "kakao",
        }
    }

    /// 환경 변수 접두사 (`GOOGLE`, `NAVER`, `KAKAO`)
    pub fn env_prefix(&self) -> &'static str {
        match self {
            ProviderKind::Google => "GOOGLE",
            ProviderKind::Naver => "NAVER",
            ProviderKind::Kakao => "KAKAO",
        }
    }

    pub fn default_scopes(&self) -> &'static [&'static str] {
        match self {
            ProviderKind::Google => &["profile", "email"],
            ProviderKind::Naver => &["name", "email", "profile_image"],
            ProviderKind::Kakao => &["profile_nickname", "profile_image", "account_email"],
        }
    }

    /// 프로바이더의 공개 엔드포인트 기본값
    pub fn default_details(&self) -> ProviderDetails {
        let (authorization_uri, token_uri, user_info_uri) = match self {
            ProviderKind::Google => (
                "https://accounts.google.com/o/oauth2/v2/auth",
                "https://oauth2.googleapis.com/token",
                "https://www.googleapis.com/oauth2/v3/userinfo",
            ),
            ProviderKind::Naver => (
                "https://nid.naver.com/oauth2.0/authorize",
                "https://nid.naver.com/oauth2.0/token",
                "https://openapi.naver.com/v1/nid/me",
            ),
            ProviderKind::Kakao => (
                "https://kauth.kakao.com/oauth/authorize",
                "https://kauth.kakao.com/oauth/token",
                "https://kapi.kakao.com/v2/user/me",
            ),
        };

        ProviderDetails {
            authorization_uri: authorization_uri.to_string(),
            token_uri: token_uri.to_string(),
            user_info_uri: user_info_uri.to_string(),
            unlink_uri: None,
        }
    }

    /// 연결 해제(토큰 폐기) 기본 엔드포인트
    pub fn default_unlink_uri(&self) -> &'static str {
        match self {
            ProviderKind::Google => "https://oauth2.googleapis.com/revoke",
            ProviderKind::Naver => "https://nid.naver.com/oauth2.0/token",
            ProviderKind::Kakao => "https://kapi.kakao.com/v1/user/unlink",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JSON Web Token (JWT) 관련 설정
///
/// 액세스 토큰과 리프레시 토큰은 만료 시간만 다릅니다.
///
/// ## 권장 설정값
///
/// - **개발**: 액세스 토큰 1시간, 리프레시 토큰 14일
/// - **프로덕션**: 액세스 토큰 15분, 리프레시 토큰 14일
#[derive(Clone)]
pub struct JwtConfig {
    secret: String,
    pub algorithm: Algorithm,
    pub access_token_lifetime: Duration,
    pub refresh_token_lifetime: Duration,
}

impl JwtConfig {
    pub fn new(
        secret: impl Into<String>,
        algorithm: Algorithm,
        access_token_lifetime: Duration,
        refresh_token_lifetime: Duration,
    ) -> Self {
        Self {
            secret: secret.into(),
            algorithm,
            access_token_lifetime,
            refresh_token_lifetime,
        }
    }

    /// 프로세스 환경 변수에서 설정을 읽습니다.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 키 조회 함수로부터 설정을 읽습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigError` - 프로덕션에서 `JWT_SECRET` 누락,
    ///   지원하지 않는 알고리즘, 0 이하이거나 숫자가 아닌 만료 시간
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("ENVIRONMENT")
            .map(|value| Environment::from_str(&value))
            .unwrap_or(Environment::Production);

        let secret = match lookup("JWT_SECRET").filter(|s| !s.is_empty()) {
            Some(secret) => secret,
            None if environment == Environment::Production => {
                return Err(AppError::ConfigError("JWT_SECRET must be set".to_string()));
            }
            None => {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                DEVELOPMENT_JWT_SECRET.to_string()
            }
        };

        let algorithm = match lookup("JWT_ALGORITHM").as_deref().unwrap_or("HS256") {
            "HS256" => Algorithm::HS256,
            "HS384" => Algorithm::HS384,
            "HS512" => Algorithm::HS512,
            other => {
                return Err(AppError::ConfigError(format!(
                    "JWT_ALGORITHM must be one of HS256, HS384, HS512 (got {})",
                    other
                )));
            }
        };

        let access_token_lifetime = parse_lifetime(
            &lookup,
            "JWT_ACCESS_TOKEN_EXPIRATION_SECONDS",
            DEFAULT_ACCESS_TOKEN_SECONDS,
        )?;
        let refresh_token_lifetime = parse_lifetime(
            &lookup,
            "JWT_REFRESH_TOKEN_EXPIRATION_SECONDS",
            DEFAULT_REFRESH_TOKEN_SECONDS,
        )?;

        Ok(Self::new(
            secret,
            algorithm,
            access_token_lifetime,
            refresh_token_lifetime,
        ))
    }

    /// 서명 비밀키
    pub fn secret(&self) -> &[u8] {
        self.secret.as_bytes()
    }
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"***")
            .field("algorithm", &self.algorithm)
            .field("access_token_lifetime", &self.access_token_lifetime)
            .field("refresh_token_lifetime", &self.refresh_token_lifetime)
            .finish()
    }
}

/// 초 단위 만료 시간을 읽습니다. `Duration` 범위를 넘는 값도 설정 오류입니다.
fn parse_lifetime<F>(lookup: &F, key: &str, default: i64) -> Result<Duration, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    let seconds = match lookup(key) {
        Some(raw) => raw.trim().parse::<i64>().ok().filter(|seconds| *seconds > 0).ok_or_else(|| {
            AppError::ConfigError(format!(
                "{} must be a positive number of seconds (got {:?})",
                key, raw
            ))
        })?,
        None => default,
    };

    Duration::try_seconds(seconds).ok_or_else(|| {
        AppError::ConfigError(format!("{} is out of range (got {})", key, seconds))
    })
}

/// 로드된 프로바이더 등록 정보 모음
///
/// registration id 로 조회하며, 로드 이후에는 변경되지 않습니다.
#[derive(Debug, Clone, Default)]
pub struct ProviderRegistrations {
    by_id: HashMap<String, Arc<ProviderRegistration>>,
}

impl ProviderRegistrations {
    pub fn new(registrations: impl IntoIterator<Item = ProviderRegistration>) -> Self {
        let by_id = registrations
            .into_iter()
            .map(|registration| (registration.registration_id.clone(), Arc::new(registration)))
            .collect();

        Self { by_id }
    }

    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// `<PREFIX>_CLIENT_ID`가 설정된 프로바이더만 등록합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigError` - client id 는 있지만 secret 이나 redirect uri 가 없는 경우
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut registrations = Vec::new();

        for kind in ProviderKind::ALL {
            if let Some(registration) = load_registration(kind, &lookup)? {
                log::info!("OAuth2 프로바이더 등록: {}", kind);
                registrations.push(registration);
            }
        }

        Ok(Self::new(registrations))
    }

    /// registration id 로 등록 정보를 조회합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::UnsupportedProvider` - 등록되지 않은 id
    pub fn get(&self, registration_id: &str) -> Result<Arc<ProviderRegistration>, AppError> {
        self.by_id
            .get(registration_id)
            .cloned()
            .ok_or_else(|| AppError::UnsupportedProvider(registration_id.to_string()))
    }

    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.by_id.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

fn load_registration<F>(kind: ProviderKind, lookup: &F) -> Result<Option<ProviderRegistration>, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    let prefix = kind.env_prefix();
    let var = |name: &str| lookup(&format!("{}_{}", prefix, name)).filter(|v| !v.trim().is_empty());
    let required = |name: &str| {
        var(name).ok_or_else(|| {
            AppError::ConfigError(format!("{}_{} must be set when {}_CLIENT_ID is set", prefix, name, prefix))
        })
    };

    let Some(client_id) = var("CLIENT_ID") else {
        return Ok(None);
    };

    let scopes = match var("SCOPES") {
        Some(raw) => raw
            .split(',')
            .map(str::trim)
            .filter(|scope| !scope.is_empty())
            .map(str::to_string)
            .collect(),
        None => kind.default_scopes().iter().map(|s| s.to_string()).collect(),
    };

    let defaults = kind.default_details();
    let provider_details = ProviderDetails {
        authorization_uri: var("AUTHORIZATION_URI").unwrap_or(defaults.authorization_uri),
        token_uri: var("TOKEN_URI").unwrap_or(defaults.token_uri),
        user_info_uri: var("USER_INFO_URI").unwrap_or(defaults.user_info_uri),
        unlink_uri: var("UNLINK_URI"),
    };

    Ok(Some(ProviderRegistration {
        registration_id: kind.as_str().to_string(),
        client_id,
        client_secret: required("CLIENT_SECRET")?,
        authorization_grant_type: "authorization_code".to_string(),
        redirect_uri: required("REDIRECT_URI")?,
        scopes,
        provider_details,
    }))
}
