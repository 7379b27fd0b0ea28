use chrono::{DateTime, Utc};
use serde::Serialize;

/// 프로바이더가 발급한 토큰
///
/// 코드 교환 또는 토큰 갱신이 성공했을 때 만들어집니다.
/// `expires_at`은 항상 교환 시각 + 프로바이더가 알려준 `expires_in`입니다.
/// 저장은 호출자의 책임입니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProviderToken {
    pub access_token: String,
    /// 일부 프로바이더는 특정 grant 에서 리프레시 토큰을 주지 않습니다
    pub refresh_token: Option<String>,
    pub expires_at: DateTime<Utc>,
}
