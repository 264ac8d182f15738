//! # 라우트 설정
//!
//! 모든 HTTP 엔드포인트를 스코프별로 등록합니다.
//!
//! ```text
//! /health
//! /api/auth         register, login, forgot-password, reset-password
//! /api/users        목록/검색, 조회, 프로필 보기, 프로필 수정
//! /api/collections  생성, 소유자별 목록, 수정, 삭제
//! /api/items        추가, 컬렉션별 목록, 수정, 삭제
//! ```
//!
//! 같은 스코프 안에서는 더 구체적인 경로(`/{id}/profile`, `/collection/{id}`)를 먼저 등록합니다.

use actix_web::{error::JsonPayloadError, web, HttpRequest};
use serde_json::json;

use crate::core::errors::AppError;
use crate::handlers;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler));
    cfg.service(health_check);

    configure_auth_routes(cfg);
    configure_user_routes(cfg);
    configure_collection_routes(cfg);
    configure_item_routes(cfg);
}

fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/auth")
            .service(handlers::auth::register)
            .service(handlers::auth::login)
            .service(handlers::auth::forgot_password)
            .service(handlers::auth::reset_password)
    );
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/users")
            .service(handlers::users::list_users)
            .service(handlers::users::get_profile)
            .service(handlers::users::get_user)
            .service(handlers::users::update_user)
    );
}

fn configure_collection_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/collections")
            .service(handlers::collections::create_collection)
            .service(handlers::collections::list_user_collections)
            .service(handlers::collections::update_collection)
            .service(handlers::collections::delete_collection)
    );
}

fn configure_item_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/items")
            .service(handlers::items::add_item)
            .service(handlers::items::list_collection_items)
            .service(handlers::items::update_item)
            .service(handlers::items::remove_item)
    );
}

/// 잘못된 JSON 본문도 `{"error": ..., "detail": ...}` 형태의 400으로 응답합니다.
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::ValidationError(format!("잘못된 요청 본문입니다: {}", err)).into()
}

#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "collector_profile_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "storage": "JSON files",
            "password_hashing": "bcrypt"
        }
    }))
}
