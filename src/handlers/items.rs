//! # Item HTTP Handlers

use actix_web::{delete, get, post, put, web, HttpResponse};
use validator::Validate;

use crate::{
    core::errors::AppError,
    domain::dto::items::request::{CreateItemRequest, UpdateItemRequest},
    state::AppState,
};

#[post("")]
pub async fn add_item(
    state: web::Data<AppState>,
    payload: web::Json<CreateItemRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let item = state.item_service.add(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(item))
}

#[get("/collection/{collection_id}")]
pub async fn list_collection_items(
    state: web::Data<AppState>,
    collection_id: web::Path<u64>,
) -> Result<HttpResponse, AppError> {
    let items = state.item_service.list(collection_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(items))
}

#[put("/{item_id}")]
pub async fn update_item(
    state: web::Data<AppState>,
    item_id: web::Path<u64>,
    payload: web::Json<UpdateItemRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let item = state
        .item_service
        .update(item_id.into_inner(), payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(item))
}

#[delete("/{item_id}")]
pub async fn remove_item(
    state: web::Data<AppState>,
    item_id: web::Path<u64>,
) -> Result<HttpResponse, AppError> {
    state.item_service.remove(item_id.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}
