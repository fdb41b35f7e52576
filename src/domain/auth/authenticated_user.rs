//! 인증된 사용자 컨텍스트와 접근 제어 추출자
//!
//! 인증 미들웨어가 JWT 검증에 성공하면 `AuthenticatedUser`를 요청
//! Extensions에 저장하고, 핸들러는 추출자를 통해 이를 꺼내 씁니다.
//!
//! 접근 규칙:
//! - 상품 조회: 공개 (추출자 불필요)
//! - 주문 생성/본인 주문 조회: 인증된 사용자 (`AuthenticatedUser`)
//! - 상품 등록·수정·삭제, 전체 주문 조회, 주문 상태 변경: 관리자 (`AdminUser`)
//!
//! 비인증 요청이 보호된 연산에 닿으면 401, 인증되었지만 관리자가 아닌
//! 요청이 관리자 전용 연산에 닿으면 403으로 실패합니다.

use std::future::{Ready, ready};

use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// 사용자 역할
///
/// 인증 협력자가 발급한 토큰에 단일 역할로 실려 옵니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// 일반 사용자
    User,
    /// 관리자
    Admin,
}

/// JWT 토큰에서 추출된 사용자 정보
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 사용자 고유 ID
    pub user_id: String,

    /// 사용자 역할
    pub role: Role,
}

impl AuthenticatedUser {
    /// 관리자 권한을 보유하고 있는지 확인
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// ActixWeb FromRequest trait 구현
///
/// 미들웨어가 저장한 신원이 없으면 401로 실패합니다.
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "인증되지 않은 요청입니다".to_string(),
            )
            .into())),
        }
    }
}

/// 관리자 전용 추출자
///
/// 신원이 없으면 401, 관리자가 아니면 403으로 실패합니다.
/// 페이로드를 읽기 전에 평가되므로 권한 없는 요청은 스토어에 닿지 않습니다.
#[derive(Debug, Clone)]
pub struct AdminUser(pub AuthenticatedUser);

impl FromRequest for AdminUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            None => ready(Err(AppError::AuthenticationError(
                "인증되지 않은 요청입니다".to_string(),
            )
            .into())),
            Some(user) if !user.is_admin() => ready(Err(AppError::AuthorizationError(
                "접근 권한이 부족합니다".to_string(),
            )
            .into())),
            Some(user) => ready(Ok(AdminUser(user.clone()))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::dev::Payload;
    use actix_web::test::TestRequest;

    fn insert_user(req: &HttpRequest, role: Role) {
        req.extensions_mut().insert(AuthenticatedUser {
            user_id: "user-1".to_string(),
            role,
        });
    }

    #[test]
    fn test_is_admin() {
        let admin = AuthenticatedUser {
            user_id: "a".to_string(),
            role: Role::Admin,
        };
        let user = AuthenticatedUser {
            user_id: "u".to_string(),
            role: Role::User,
        };

        assert!(admin.is_admin());
        assert!(!user.is_admin());
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
    }

    #[actix_web::test]
    async fn test_authenticated_user_extractor_without_identity() {
        let req = TestRequest::default().to_http_request();
        let result = AuthenticatedUser::from_request(&req, &mut Payload::None).await;

        let err = result.unwrap_err();
        assert_eq!(
            err.as_response_error().status_code(),
            actix_web::http::StatusCode::UNAUTHORIZED
        );
    }

    #[actix_web::test]
    async fn test_admin_extractor_rejects_plain_user() {
        let req = TestRequest::default().to_http_request();
        insert_user(&req, Role::User);

        let result = AdminUser::from_request(&req, &mut Payload::None).await;

        let err = result.unwrap_err();
        assert_eq!(
            err.as_response_error().status_code(),
            actix_web::http::StatusCode::FORBIDDEN
        );
    }

    #[actix_web::test]
    async fn test_admin_extractor_without_identity_is_unauthorized() {
        let req = TestRequest::default().to_http_request();
        let result = AdminUser::from_request(&req, &mut Payload::None).await;

        let err = result.unwrap_err();
        assert_eq!(
            err.as_response_error().status_code(),
            actix_web::http::StatusCode::UNAUTHORIZED
        );
    }

    #[actix_web::test]
    async fn test_admin_extractor_accepts_admin() {
        let req = TestRequest::default().to_http_request();
        insert_user(&req, Role::Admin);

        let result = AdminUser::from_request(&req, &mut Payload::None).await;

        let AdminUser(user) = result.unwrap();
        assert_eq!(user.user_id, "user-1");
    }
}
