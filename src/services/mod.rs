//! 비즈니스 로직 계층
//!
//! 핸들러와 리포지토리 사이에서 도메인 규칙을 적용하고
//! 엔티티를 응답 DTO로 변환합니다. 서비스는 생성 시점에
//! 리포지토리를 주입받아 `web::Data`로 핸들러에 전달됩니다.

pub mod auth;
pub mod catalog;
pub mod orders;
