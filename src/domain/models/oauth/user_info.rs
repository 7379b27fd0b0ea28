use serde::Serialize;
use serde_json::{Map, Value};

/// 프로바이더 무관한 정규화된 사용자 정보
///
/// 사용자 정보 응답마다 새로 만들어지며, 호출자가 계정에 매핑한 뒤 버려집니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CanonicalUserInfo {
    pub registration_id: String,
    /// 프로바이더 내부의 사용자 식별자
    pub provider_user_id: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub image_url: Option<String>,
    /// 프로바이더가 보낸 원본 속성
    pub attributes: Map<String, Value>,
}

impl CanonicalUserInfo {
    /// 세션 토큰의 subject 로 사용하는 `<registration_id>:<provider_user_id>` 문자열
    pub fn subject(&self) -> String {
        format!("{}:{}", self.registration_id, self.provider_user_id)
    }
}
