//! 타입이 지정되지 않은 JSON 값 탐색 유틸리티
//!
//! 프로바이더 응답은 프로바이더마다 구조가 달라서 고정된 DTO 대신
//! `serde_json::Map`을 그대로 다룹니다.

use serde_json::{Map, Value};

use crate::errors::AppError;

/// 응답 본문을 JSON 객체로 해석합니다.
///
/// # Errors
///
/// * `AppError::ProviderResponse` - JSON이 아니거나 최상위가 객체가 아닌 경우
pub fn parse_object(body: &str) -> Result<Map<String, Value>, AppError> {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(AppError::ProviderResponse(format!(
            "expected JSON object, got {}",
            type_name(&other)
        ))),
        Err(e) => Err(AppError::ProviderResponse(format!("malformed JSON: {}", e))),
    }
}

/// 점으로 구분된 경로를 따라 중첩 값을 찾습니다.
///
/// ```rust,ignore
/// let email = lookup(&attrs, "kakao_account.email");
/// ```
pub fn lookup<'a>(map: &'a Map<String, Value>, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let mut current = map.get(segments.next()?)?;

    for segment in segments {
        current = current.as_object()?.get(segment)?;
    }

    Some(current)
}

/// 경로의 값을 문자열로 읽습니다. 숫자는 10진 문자열로 변환하고
/// `null`과 빈 문자열은 없는 값으로 취급합니다.
pub fn lookup_string(map: &Map<String, Value>, path: &str) -> Option<String> {
    match lookup(map, path)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// 경로의 값을 정수로 읽습니다. 숫자 문자열(`"3600"`)도 허용합니다.
pub fn lookup_i64(map: &Map<String, Value>, path: &str) -> Option<i64> {
    match lookup(map, path)? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
