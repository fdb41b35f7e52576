//! 요청/응답 DTO 모듈
//!
//! 연산별 요청 DTO는 `validator` 파생 매크로로 형태 검증 규칙을 선언하며,
//! 검증은 스토어에 닿기 전에 핸들러에서 수행됩니다.
//! 응답 DTO는 엔티티를 클라이언트에 노출 가능한 형태로 변환합니다.

pub mod orders;
pub mod products;
