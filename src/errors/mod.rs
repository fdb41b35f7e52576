//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다. 하위 계층에서 발생한 에러는 변형 없이
//! 경계까지 전파되며, 경계에서 HTTP 상태 코드와 JSON 응답으로 변환됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::{AppError, AppResult};
//!
//! async fn get_product(id: &str) -> AppResult<Product> {
//!     let product = product_repo.find_by_id(id).await?
//!         .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;
//!
//!     Ok(product)
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 백엔드 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    ///
    /// 상세 내용은 서버 로그에만 기록되며 클라이언트에는 노출되지 않습니다.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 선언적 검증 실패 (400 Bad Request)
    ///
    /// 위반된 제약 조건 전체를 필드별로 담아 응답합니다.
    #[error("Validation failed")]
    ValidationFailed(#[from] validator::ValidationErrors),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 권한 부족 에러 (403 Forbidden)
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    ///
    /// 상세 내용은 서버 로그에만 기록되며 클라이언트에는 노출되지 않습니다.
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    /// 각 에러 타입에 대응하는 HTTP 상태 코드
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) | AppError::ValidationFailed(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    /// 500 계열 에러는 전체 내용을 서버 로그에 남기고, 클라이언트에는
    /// 일반화된 메시지만 전달합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        match self {
            AppError::ValidationFailed(errors) => actix_web::HttpResponse::build(status)
                .json(serde_json::json!({
                    "error": "validation_error",
                    "message": "입력 데이터가 유효하지 않습니다",
                    "details": errors,
                })),
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                log::error!("서버 내부 에러: {}", self);
                actix_web::HttpResponse::build(status).json(serde_json::json!({
                    "error": "Server Error"
                }))
            }
            _ => actix_web::HttpResponse::build(status).json(serde_json::json!({
                "error": self.to_string()
            })),
        }
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1))]
        title: String,
        #[validate(range(min = 0.0))]
        price: f64,
    }

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("title is required".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_validation_failed_reports_all_fields() {
        let sample = Sample {
            title: String::new(),
            price: -1.0,
        };
        let errors = sample.validate().unwrap_err();
        assert_eq!(errors.field_errors().len(), 2);

        let error = AppError::from(errors);
        let response = error.error_response();
        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("Product not found".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_authentication_error_response() {
        let error = AppError::AuthenticationError("Invalid token".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_authorization_error_response() {
        let error = AppError::AuthorizationError("Insufficient permissions".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_status_code_agrees_with_response_status() {
        let errors = vec![
            AppError::DatabaseError("x".to_string()),
            AppError::ValidationError("x".to_string()),
            AppError::NotFound("x".to_string()),
            AppError::AuthenticationError("x".to_string()),
            AppError::AuthorizationError("x".to_string()),
            AppError::InternalError("x".to_string()),
        ];

        for error in errors {
            assert_eq!(error.status_code(), error.error_response().status());
        }
    }

    #[test]
    fn test_database_error_is_opaque() {
        let error = AppError::DatabaseError("connection refused at 10.0.0.3".to_string());
        let response = error.error_response();

        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
