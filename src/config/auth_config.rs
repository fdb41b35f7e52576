//! # Authentication Configuration Module
//!
//! JWT 토큰 서명과 만료 정책에 대한 설정을 관리합니다.
//! 외부 인증 협력자가 발급한 베어러 토큰을 검증하기 위해
//! 동일한 서명 비밀키를 공유합니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_HOURS="24"
//! ```

use std::env;

/// JWT 토큰 설정
///
/// 부팅 시점에 환경 변수에서 한 번 로드하여 `TokenService`에 주입합니다.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 서명 비밀키
    pub secret: String,
    /// 액세스 토큰 만료 시간 (시간 단위)
    pub expiration_hours: i64,
}

impl JwtConfig {
    /// 환경 변수에서 JWT 설정을 로드합니다.
    ///
    /// ## 환경 변수
    /// - `JWT_SECRET`: 서명 비밀키 (기본값: "plainfit-dev-secret")
    /// - `JWT_EXPIRATION_HOURS`: 만료 시간 (기본값: 24)
    pub fn from_env() -> Self {
        let secret =
            env::var("JWT_SECRET").unwrap_or_else(|_| "plainfit-dev-secret".to_string());

        let expiration_hours = env::var("JWT_EXPIRATION_HOURS")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(24);

        Self {
            secret,
            expiration_hours,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = JwtConfig {
            secret: "test-secret".to_string(),
            expiration_hours: 24,
        };

        assert_eq!(config.expiration_hours, 24);
        assert!(!config.secret.is_empty());
    }
}
