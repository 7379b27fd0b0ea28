//! 공통 유틸리티 모듈
//!
//! # Modules
//!
//! - [`clock`] - 주입 가능한 현재 시각 공급자
//! - [`json_utils`] - 프로바이더 JSON 응답 탐색 함수들

pub mod clock;
pub mod json_utils;
