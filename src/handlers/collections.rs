//! # Collection HTTP Handlers
//!
//! `GET /api/collections/{user_id}`는 소유자 본인의 목록이므로 비공개 컬렉션도 포함합니다.
//! 다른 사용자에게 보여줄 목록은 `GET /api/users/{id}/profile`을 사용합니다.

use actix_web::{delete, get, post, put, web, HttpResponse};
use validator::Validate;

use crate::{
    core::errors::AppError,
    domain::dto::collections::request::{CreateCollectionRequest, UpdateCollectionRequest},
    state::AppState,
};

#[post("")]
pub async fn create_collection(
    state: web::Data<AppState>,
    payload: web::Json<CreateCollectionRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let collection = state.collection_service.create(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(collection))
}

#[get("/{user_id}")]
pub async fn list_user_collections(
    state: web::Data<AppState>,
    user_id: web::Path<u64>,
) -> Result<HttpResponse, AppError> {
    let collections = state
        .collection_service
        .list_for_owner(user_id.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(collections))
}

#[put("/{collection_id}")]
pub async fn update_collection(
    state: web::Data<AppState>,
    collection_id: web::Path<u64>,
    payload: web::Json<UpdateCollectionRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let collection = state
        .collection_service
        .update(collection_id.into_inner(), payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(collection))
}

#[delete("/{collection_id}")]
pub async fn delete_collection(
    state: web::Data<AppState>,
    collection_id: web::Path<u64>,
) -> Result<HttpResponse, AppError> {
    state.collection_service.delete(collection_id.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}
