//! JWT 토큰 관리 서비스 구현
//!
//! JSON Web Token 기반의 세션 인증을 제공합니다.
//! 액세스 토큰과 리프레시 토큰의 발급, 검증, subject 추출을 담당합니다.
//!
//! 토큰 상태는 `발급 → 유효 → 만료` 순서로만 진행합니다. 만료된 토큰은
//! 다시 유효해지지 않으며, 리프레시 흐름으로 새 토큰을 발급받아야 합니다.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::config::JwtConfig;
use crate::domain::models::token::{TokenClaims, TokenPair};
use crate::errors::{AppError, AppResult, ErrorContext};
use crate::utils::clock::Clock;

/// JWT 토큰 관리 서비스
///
/// 설정된 HMAC 알고리즘과 비밀키로 토큰을 서명하고 검증합니다.
/// 현재 시각은 주입된 [`Clock`]에서만 읽습니다.
#[derive(Clone)]
pub struct TokenService {
    config: Arc<JwtConfig>,
    clock: Arc<dyn Clock>,
}

impl TokenService {
    pub fn new(config: Arc<JwtConfig>, clock: Arc<dyn Clock>) -> Self {
        Self { config, clock }
    }

    /// 액세스 토큰 발급
    ///
    /// # Arguments
    ///
    /// * `subject` - 토큰의 주체 (사용자 이름)
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 빈 subject 또는 서명 실패
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let access_token = token_service.issue_access_token("google:1234")?;
    /// ```
    pub fn issue_access_token(&self, subject: &str) -> AppResult<String> {
        self.create_token(subject, self.config.access_token_lifetime)
    }

    /// 리프레시 토큰 발급
    ///
    /// 액세스 토큰과 구조는 같고 만료 시간만 깁니다.
    pub fn issue_refresh_token(&self, subject: &str) -> AppResult<String> {
        self.create_token(subject, self.config.refresh_token_lifetime)
    }

    /// 토큰 쌍 발급 (액세스 + 리프레시)
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let token_pair = token_service.issue_token_pair(&user_info.subject())?;
    /// println!("Expires in: {} seconds", token_pair.expires_in);
    /// ```
    pub fn issue_token_pair(&self, subject: &str) -> AppResult<TokenPair> {
        Ok(TokenPair {
            access_token: self.issue_access_token(subject)?,
            refresh_token: self.issue_refresh_token(subject)?,
            expires_in: self.config.access_token_lifetime.num_seconds(),
        })
    }

    fn create_token(&self, subject: &str, lifetime: Duration) -> AppResult<String> {
        if subject.is_empty() {
            return Err(AppError::InternalError("토큰 subject 가 비어 있습니다".to_string()));
        }

        let now = self.clock.now();
        let claims = TokenClaims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: (now + lifetime).timestamp(),
        };

        let header = Header::new(self.config.algorithm);
        let encoding_key = EncodingKey::from_secret(self.config.secret());

        encode(&header, &claims, &encoding_key).context("JWT 토큰 생성 실패")
    }

    /// 서명을 검증하고 클레임을 추출합니다.
    ///
    /// 만료 여부는 여기서 판단하지 않습니다. 라이브러리의 시스템 시각 기반
    /// `exp` 검사를 끄고, 주입된 시계로 [`is_expired`](Self::is_expired)에서 판단합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidToken` - 서명 불일치, 형식 오류, `sub`/`exp` 누락
    pub fn claims(&self, token: &str) -> AppResult<TokenClaims> {
        let decoding_key = DecodingKey::from_secret(self.config.secret());

        let mut validation = Validation::new(self.config.algorithm);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["sub", "exp"]);

        decode::<TokenClaims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| AppError::InvalidToken(e.to_string()))
    }

    /// 토큰의 subject 추출
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidToken` - 서명 검증 실패 또는 형식 오류
    pub fn extract_subject(&self, token: &str) -> AppResult<String> {
        Ok(self.claims(token)?.sub)
    }

    /// 만료 시각이 현재 시각보다 엄격히 이전이면 `true`
    ///
    /// 만료는 에러가 아닙니다. 호출자는 이 값으로 토큰 갱신을 시도할지
    /// 재인증을 요구할지 결정합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidToken` - 서명 검증 실패 또는 형식 오류
    pub fn is_expired(&self, token: &str) -> AppResult<bool> {
        let expires_at = expires_at(&self.claims(token)?)?;
        Ok(expires_at < self.clock.now())
    }

    /// 서명이 유효하고, subject 가 일치하고, 만료되지 않았으면 `true`
    ///
    /// 인증이 필요한 요청을 통과시킬지 결정하는 단일 판정 함수입니다.
    pub fn validate(&self, token: &str, expected_subject: &str) -> bool {
        let checked = self
            .claims(token)
            .and_then(|claims| Ok((expires_at(&claims)?, claims.sub)));

        match checked {
            Ok((expires_at, subject)) => {
                subject == expected_subject && self.clock.now() <= expires_at
            }
            Err(e) => {
                log::debug!("토큰 검증 실패: {}", e);
                false
            }
        }
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// HTTP Authorization 헤더의 "Bearer {token}" 형식에서 토큰 부분만을 추출합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 잘못된 헤더 형식
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let auth_header = "Bearer eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...";
    /// let token = token_service.extract_bearer_token(auth_header)?;
    /// let subject = token_service.extract_subject(token)?;
    /// ```
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> AppResult<&'a str> {
        match auth_header.strip_prefix("Bearer ") {
            Some(token) if !token.trim().is_empty() => Ok(token.trim()),
            _ => Err(AppError::AuthenticationError("유효하지 않은 인증 헤더 형식입니다".to_string())),
        }
    }
}

/// `exp` 클레임을 시각으로 변환합니다. 비교는 현재 시각의 밀리초 단위까지 그대로 사용합니다.
fn expires_at(claims: &TokenClaims) -> AppResult<DateTime<Utc>> {
    DateTime::from_timestamp(claims.exp, 0)
        .ok_or_else(|| AppError::InvalidToken(format!("exp 범위 오류: {}", claims.exp)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use jsonwebtoken::Algorithm;
    use crate::utils::clock::FixedClock;

    const ACCESS_SECONDS: i64 = 3600;
    const REFRESH_SECONDS: i64 = 7 * 24 * 3600;

    fn service_with(secret: &str, clock: Arc<FixedClock>) -> TokenService {
        let config = JwtConfig::new(
            secret,
            Algorithm::HS256,
            Duration::seconds(ACCESS_SECONDS),
            Duration::seconds(REFRESH_SECONDS),
        );
        TokenService::new(Arc::new(config), clock)
    }

    fn fixed_clock() -> Arc<FixedClock> {
        Arc::new(FixedClock::new(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()))
    }

    #[test]
    fn test_access_token_valid_until_lifetime_passes() {
        let clock = fixed_clock();
        let service = service_with("test-secret", clock.clone());

        let token = service.issue_access_token("alice").unwrap();
        assert!(service.validate(&token, "alice"));
        assert!(!service.is_expired(&token).unwrap());

        // 만료 시각과 같은 순간까지는 아직 만료가 아님
        clock.advance(Duration::seconds(ACCESS_SECONDS));
        assert!(!service.is_expired(&token).unwrap());

        clock.advance(Duration::seconds(1));
        assert!(service.is_expired(&token).unwrap());
        assert!(!service.validate(&token, "alice"));

        // 만료는 에러가 아니므로 subject 는 여전히 추출 가능
        assert_eq!(service.extract_subject(&token).unwrap(), "alice");
    }

    #[test]
    fn test_expired_within_the_second_after_exp() {
        let clock = fixed_clock();
        let service = service_with("test-secret", clock.clone());
        let token = service.issue_access_token("alice").unwrap();

        clock.advance(Duration::milliseconds(ACCESS_SECONDS * 1000 + 500));

        assert!(service.is_expired(&token).unwrap());
        assert!(!service.validate(&token, "alice"));
    }

    #[test]
    fn test_out_of_range_exp_is_invalid() {
        let service = service_with("test-secret", fixed_clock());
        let claims = TokenClaims {
            sub: "alice".to_string(),
            iat: 0,
            exp: i64::MAX,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert!(matches!(service.is_expired(&token), Err(AppError::InvalidToken(_))));
        assert!(!service.validate(&token, "alice"));
    }

    #[test]
    fn test_refresh_token_outlives_access_token() {
        let clock = fixed_clock();
        let service = service_with("test-secret", clock.clone());

        let pair = service.issue_token_pair("bob").unwrap();
        assert_eq!(pair.expires_in, ACCESS_SECONDS);

        let access = service.claims(&pair.access_token).unwrap();
        let refresh = service.claims(&pair.refresh_token).unwrap();
        assert_eq!(access.exp - access.iat, ACCESS_SECONDS);
        assert_eq!(refresh.exp - refresh.iat, REFRESH_SECONDS);
        assert_eq!(access.iat, clock.now().timestamp());

        clock.advance(Duration::seconds(ACCESS_SECONDS + 1));
        assert!(!service.validate(&pair.access_token, "bob"));
        assert!(service.validate(&pair.refresh_token, "bob"));
    }

    #[test]
    fn test_token_signed_with_other_key_is_invalid() {
        let clock = fixed_clock();
        let issuer = service_with("issuer-secret", clock.clone());
        let verifier = service_with("verifier-secret", clock);

        let token = issuer.issue_access_token("alice").unwrap();

        assert!(matches!(
            verifier.extract_subject(&token),
            Err(AppError::InvalidToken(_))
        ));
        assert!(matches!(verifier.is_expired(&token), Err(AppError::InvalidToken(_))));
        assert!(!verifier.validate(&token, "alice"));
    }

    #[test]
    fn test_subject_roundtrip() {
        let service = service_with("test-secret", fixed_clock());

        for subject in ["alice", "google:109876543210", "kakao:1234567890", "홍길동"] {
            let token = service.issue_access_token(subject).unwrap();
            assert_eq!(service.extract_subject(&token).unwrap(), subject);
        }
    }

    #[test]
    fn test_validate_rejects_other_subject() {
        let service = service_with("test-secret", fixed_clock());
        let token = service.issue_access_token("alice").unwrap();

        assert!(!service.validate(&token, "mallory"));
    }

    #[test]
    fn test_malformed_and_tampered_tokens_are_invalid() {
        let service = service_with("test-secret", fixed_clock());

        for garbage in ["", "not-a-jwt", "a.b.c"] {
            assert!(matches!(
                service.extract_subject(garbage),
                Err(AppError::InvalidToken(_))
            ));
        }

        let token = service.issue_access_token("alice").unwrap();
        let other = service.issue_access_token("mallory").unwrap();
        let parts: Vec<&str> = token.split('.').collect();
        let other_parts: Vec<&str> = other.split('.').collect();
        let forged = format!("{}.{}.{}", parts[0], other_parts[1], parts[2]);

        assert!(matches!(
            service.extract_subject(&forged),
            Err(AppError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_token_is_three_dot_separated_parts() {
        let service = service_with("test-secret", fixed_clock());
        let token = service.issue_access_token("alice").unwrap();

        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn test_empty_subject_is_rejected() {
        let service = service_with("test-secret", fixed_clock());

        assert!(matches!(
            service.issue_access_token(""),
            Err(AppError::InternalError(_))
        ));
    }

    #[test]
    fn test_extract_bearer_token() {
        let service = service_with("test-secret", fixed_clock());

        assert_eq!(service.extract_bearer_token("Bearer abc.def.ghi").unwrap(), "abc.def.ghi");
        assert!(service.extract_bearer_token("Basic dXNlcjpwYXNz").is_err());
        assert!(service.extract_bearer_token("Bearer ").is_err());
    }
}
