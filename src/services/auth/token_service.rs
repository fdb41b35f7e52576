//! JWT 토큰 검증 서비스 구현
//!
//! 외부 인증 협력자가 발급한 베어러 토큰을 검증하여 호출자 신원을
//! 복원합니다. HMAC-SHA256 서명을 사용하며, 발급 기능은 테스트와
//! 내부 도구를 위해 함께 제공됩니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::{
    config::JwtConfig,
    domain::auth::{AuthenticatedUser, Role},
    errors::{AppError, AppResult},
};

/// JWT 클레임
///
/// 인증 협력자와 공유하는 토큰 페이로드 형식입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 사용자 고유 ID
    pub sub: String,
    /// 사용자 역할
    pub role: Role,
    /// 발급 시각 (Unix timestamp)
    pub iat: i64,
    /// 만료 시각 (Unix timestamp)
    pub exp: i64,
}

/// JWT 토큰 검증 서비스
///
/// 부팅 시점에 `JwtConfig`를 주입받아 생성되며, 인증 미들웨어에
/// `web::Data`로 전달됩니다.
pub struct TokenService {
    config: JwtConfig,
}

impl TokenService {
    /// 주입받은 설정으로 토큰 서비스를 생성합니다.
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }

    /// 사용자 신원에 대한 JWT 토큰 발급
    ///
    /// 로그인 플로우는 이 서비스의 범위 밖이며, 검증의 대응 연산으로서
    /// 테스트에서 사용됩니다.
    pub fn issue(&self, user_id: &str, role: Role) -> AppResult<String> {
        let now = Utc::now();
        let expiration = now + Duration::hours(self.config.expiration_hours);

        let claims = TokenClaims {
            sub: user_id.to_string(),
            role,
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.secret.as_bytes()),
        )
        .map_err(|e| AppError::InternalError(format!("토큰 발급 실패: {}", e)))
    }

    /// JWT 토큰 검증 및 호출자 신원 복원
    ///
    /// # Returns
    ///
    /// * `Ok(AuthenticatedUser)` - 서명과 만료 시간이 유효한 경우
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 서명 불일치, 만료, 형식 오류
    pub fn verify(&self, token: &str) -> AppResult<AuthenticatedUser> {
        let decoding_key = DecodingKey::from_secret(self.config.secret.as_bytes());
        let validation = Validation::default();

        let token_data = decode::<TokenClaims>(token, &decoding_key, &validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                }
                _ => AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string()),
            })?;

        Ok(AuthenticatedUser {
            user_id: token_data.claims.sub,
            role: token_data.claims.role,
        })
    }

    /// Authorization 헤더에서 베어러 토큰 추출
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> AppResult<&'a str> {
        auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::AuthenticationError("Bearer 토큰 형식이 아닙니다".to_string())
        })
    }
}
