use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

/// JWT 토큰에서 추출된 사용자 정보
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 토큰의 subject (`<registration_id>:<provider_user_id>`)
    pub subject: String,
}

impl AuthenticatedUser {
    /// subject 의 프로바이더 부분
    pub fn registration_id(&self) -> Option<&str> {
        self.subject.split_once(':').map(|(provider, _)| provider)
    }
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(actix_web::error::ErrorUnauthorized(
                "인증되지 않은 요청입니다"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_id_from_subject() {
        let user = AuthenticatedUser { subject: "kakao:12345".to_string() };
        assert_eq!(user.registration_id(), Some("kakao"));

        let local = AuthenticatedUser { subject: "admin".to_string() };
        assert_eq!(local.registration_id(), None);
    }
}
