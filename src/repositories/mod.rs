//! 데이터 액세스 계층
//!
//! 엔티티별 리포지토리가 MongoDB 컬렉션에 대한 CRUD 연산을 담당합니다.
//! 리포지토리는 생성 시점에 `Database`를 주입받으며, 전역 상태를 갖지 않습니다.

pub mod orders;
pub mod products;
