//! HTTP 핸들러 모듈
//!
//! 핸들러는 얇은 통과 계층입니다: 추출자로 인가를 확인하고,
//! 요청 본문을 검증한 뒤, 서비스 연산을 호출해 결과를 JSON으로
//! 반환합니다. 어떤 핸들러도 에러를 삼키거나 등급을 낮추지 않습니다.

pub mod orders;
pub mod products;
