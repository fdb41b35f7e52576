//! 도메인 모델 모듈
//!
//! 영속 엔티티, 인증 컨텍스트, 요청/응답 DTO를 제공합니다.

pub mod auth;
pub mod dto;
pub mod entities;
