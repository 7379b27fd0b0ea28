//! 프로바이더 사용자 정보 정규화
//!
//! 프로바이더마다 사용자 정보 응답의 모양이 다릅니다.
//!
//! ```text
//! google  { "sub": "...", "email": "...", "name": "...", "picture": "..." }
//! naver   { "resultcode": "00", "response": { "id": "...", "email": "...", "name": "...", "profile_image": "..." } }
//! kakao   { "id": 123, "properties": { "nickname": "...", "profile_image": "..." },
//!           "kakao_account": { "email": "...", "profile": { "nickname": "...", "profile_image_url": "..." } } }
//! ```
//!
//! 각 프로바이더는 [`UserInfoMapper`] 하나로 표현하고, [`UserInfoNormalizer`]가
//! registration id 로 분기합니다. 새 프로바이더는 기존 매퍼를 고치지 않고
//! [`UserInfoNormalizer::register`]로 추가합니다.

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::domain::models::oauth::CanonicalUserInfo;
use crate::errors::AppError;
use crate::utils::json_utils::lookup_string;

/// 프로바이더 하나의 사용자 정보 매핑 전략
pub trait UserInfoMapper: Send + Sync {
    /// 이 매퍼가 담당하는 registration id
    fn registration_id(&self) -> &str;

    /// 원본 속성을 정규화된 사용자 정보로 변환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ProviderResponse` - 프로바이더 사용자 식별자가 없는 경우
    fn map(&self, attributes: Map<String, Value>) -> Result<CanonicalUserInfo, AppError>;
}

/// 경로 후보 중 처음으로 값이 있는 것을 고릅니다.
fn first_string(attributes: &Map<String, Value>, paths: &[&str]) -> Option<String> {
    paths.iter().find_map(|path| lookup_string(attributes, path))
}

struct FieldPaths<'a> {
    id: &'a [&'a str],
    email: &'a [&'a str],
    name: &'a [&'a str],
    image: &'a [&'a str],
}

fn map_with_paths(
    registration_id: &str,
    paths: FieldPaths<'_>,
    attributes: Map<String, Value>,
) -> Result<CanonicalUserInfo, AppError> {
    let provider_user_id = first_string(&attributes, paths.id).ok_or_else(|| {
        AppError::ProviderResponse(format!(
            "{} user info has no user id ({})",
            registration_id,
            paths.id.join(" | ")
        ))
    })?;

    Ok(CanonicalUserInfo {
        registration_id: registration_id.to_string(),
        provider_user_id,
        email: first_string(&attributes, paths.email),
        name: first_string(&attributes, paths.name),
        image_url: first_string(&attributes, paths.image),
        attributes,
    })
}

/// Google 사용자 정보 (v3 `sub`, v2 `id` 모두 허용)
#[derive(Debug, Default)]
pub struct GoogleUserInfoMapper;

impl UserInfoMapper for GoogleUserInfoMapper {
    fn registration_id(&self) -> &str {
        "google"
    }

    fn map(&self, attributes: Map<String, Value>) -> Result<CanonicalUserInfo, AppError> {
        map_with_paths(
            self.registration_id(),
            FieldPaths {
                id: &["sub", "id"],
                email: &["email"],
                name: &["name"],
                image: &["picture"],
            },
            attributes,
        )
    }
}

/// 네이버 사용자 정보 (`response` 아래에 중첩)
#[derive(Debug, Default)]
pub struct NaverUserInfoMapper;

impl UserInfoMapper for NaverUserInfoMapper {
    fn registration_id(&self) -> &str {
        "naver"
    }

    fn map(&self, attributes: Map<String, Value>) -> Result<CanonicalUserInfo, AppError> {
        map_with_paths(
            self.registration_id(),
            FieldPaths {
                id: &["response.id"],
                email: &["response.email"],
                name: &["response.name", "response.nickname"],
                image: &["response.profile_image"],
            },
            attributes,
        )
    }
}

/// 카카오 사용자 정보 (숫자 `id`, `properties`와 `kakao_account` 중첩)
#[derive(Debug, Default)]
pub struct KakaoUserInfoMapper;

impl UserInfoMapper for KakaoUserInfoMapper {
    fn registration_id(&self) -> &str {
        "kakao"
    }

    fn map(&self, attributes: Map<String, Value>) -> Result<CanonicalUserInfo, AppError> {
        map_with_paths(
            self.registration_id(),
            FieldPaths {
                id: &["id"],
                email: &["kakao_account.email"],
                name: &["properties.nickname", "kakao_account.profile.nickname"],
                image: &[
                    "properties.profile_image",
                    "kakao_account.profile.profile_image_url",
                ],
            },
            attributes,
        )
    }
}

/// registration id 로 매퍼를 고르는 단일 분기점
pub struct UserInfoNormalizer {
    mappers: HashMap<String, Box<dyn UserInfoMapper>>,
}

impl UserInfoNormalizer {
    /// 매퍼가 하나도 없는 정규화기
    pub fn empty() -> Self {
        Self {
            mappers: HashMap::new(),
        }
    }

    /// Google, 네이버, 카카오 매퍼가 등록된 정규화기
    pub fn with_defaults() -> Self {
        Self::empty()
            .register(GoogleUserInfoMapper)
            .register(NaverUserInfoMapper)
            .register(KakaoUserInfoMapper)
    }

    /// 매퍼를 추가합니다. 같은 registration id 가 있으면 교체합니다.
    pub fn register<M>(mut self, mapper: M) -> Self
    where
        M: UserInfoMapper + 'static,
    {
        self.mappers
            .insert(mapper.registration_id().to_string(), Box::new(mapper));
        self
    }

    pub fn supports(&self, registration_id: &str) -> bool {
        self.mappers.contains_key(registration_id)
    }

    /// # Errors
    ///
    /// * `AppError::UnsupportedProvider` - 등록된 매퍼가 없는 registration id
    /// * `AppError::ProviderResponse` - 사용자 식별자가 없는 응답
    pub fn normalize(
        &self,
        registration_id: &str,
        attributes: Map<String, Value>,
    ) -> Result<CanonicalUserInfo, AppError> {
        let mapper = self
            .mappers
            .get(registration_id)
            .ok_or_else(|| AppError::UnsupportedProvider(registration_id.to_string()))?;

        mapper.map(attributes)
    }
}

impl Default for UserInfoNormalizer {
    fn default() -> Self {
        Self::with_defaults()
    }
}
