//! 인증 컨텍스트 모듈
//!
//! 인증 미들웨어가 검증한 호출자 신원과 역할, 그리고
//! 핸들러에서 사용하는 접근 제어 추출자를 제공합니다.

pub mod authenticated_user;
pub mod authentication_request;

pub use authenticated_user::{AdminUser, AuthenticatedUser, Role};
pub use authentication_request::AuthMode;
