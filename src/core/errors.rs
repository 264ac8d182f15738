//! # Application Error Handling
//!
//! 컬렉터 프로필 백엔드의 통합 에러 타입입니다.
//! 서비스와 리포지토리는 모두 [`AppError`]를 반환하고,
//! 핸들러에서는 `actix_web::ResponseError` 구현을 통해 HTTP 응답으로 자동 변환됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 입력값 검증 실패 |
//! | `InvalidToken` | 400 Bad Request | 알 수 없거나 만료된 비밀번호 재설정 토큰 |
//! | `AuthenticationError` | 401 Unauthorized | 잘못된 이메일/비밀번호 |
//! | `NotFound` | 404 Not Found | 사용자, 컬렉션, 아이템 없음 |
//! | `ConflictError` | 409 Conflict | 중복 이메일 |
//! | `StorageError` | 500 Internal Server Error | JSON 파일 저장소 읽기/쓰기 실패 |
//! | `InternalError` | 500 Internal Server Error | 해싱 실패 등 예상치 못한 오류 |
//!
//! 모든 에러 응답 본문은 `{"error": "<message>", "detail": "<message>"}` 형식입니다.
//! 프론트엔드는 `detail`을 읽고, 두 필드의 메시지는 항상 같습니다.
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! let user = users.find_by_id(id).await?
//!     .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 모든 변형은 사람이 읽을 수 있는 메시지를 하나 담습니다.
/// 재시도 가능한 일시적 실패 분류는 없습니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러 (400)
    ///
    /// `validator` 검증 실패나 필수 문자열 누락 시 발생합니다.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 없음 (404)
    ///
    /// 사용자, 컬렉션, 아이템 ID가 존재하지 않거나
    /// 비밀번호 찾기 요청의 이메일이 등록되지 않은 경우입니다.
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409)
    ///
    /// 회원가입 또는 프로필 수정 시 다른 사용자가 이미 사용 중인 이메일입니다.
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 (401)
    ///
    /// 존재하지 않는 이메일과 틀린 비밀번호를 구분하지 않고 같은 메시지로 응답합니다.
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 비밀번호 재설정 토큰 오류 (400)
    ///
    /// 어떤 사용자도 보유하지 않은 토큰, 이미 사용된 토큰, 만료된 토큰 모두 이 변형입니다.
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// JSON 파일 저장소 에러 (500)
    ///
    /// 파일 I/O 실패나 손상된 JSON 파일을 나타냅니다.
    #[error("Storage error: {0}")]
    StorageError(String),

    /// 내부 서버 에러 (500)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidToken(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::StorageError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// 에러를 `{"error": "...", "detail": "..."}` JSON 응답으로 변환합니다.
    ///
    /// 5xx 에러는 서버 로그에 남기고, 클라이언트에는 같은 메시지만 전달합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("❌ {}", self);
        }

        let message = self.to_string();
        actix_web::HttpResponse::build(status).json(serde_json::json!({
            "error": message,
            "detail": message
        }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 `AppError`로 변환하는 확장 trait
///
/// ```rust,ignore
/// let hash = bcrypt::hash(password, cost).context("비밀번호 해싱 실패")?;
/// let raw = tokio::fs::read(&path).await.storage_context("users.json 읽기 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 메시지와 함께 `InternalError`로 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 컨텍스트 메시지와 함께 `StorageError`로 변환합니다.
    fn storage_context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn storage_context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::StorageError(format!("{}: {}", msg, e)))
    }
}
