//! 애플리케이션 설정 모듈
//!
//! 환경 변수 기반의 설정을 타입으로 묶어 제공합니다.
//! 설정 값은 부팅 시점에 한 번 읽어 구조체로 만들고,
//! 이를 필요로 하는 구성 요소에 명시적으로 주입합니다.

mod auth_config;

pub use auth_config::JwtConfig;
