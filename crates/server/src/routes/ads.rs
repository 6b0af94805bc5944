use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use common::types::MessageBody;
use service::ads::{Ad, CreateAdInput};

use crate::errors::JsonApiError;
use crate::routes::AppState;

pub const CREATED_MESSAGE: &str = "Ad created successfully";
pub const DELETED_MESSAGE: &str = "Ad deleted successfully";

#[derive(Debug, Serialize)]
pub struct CreatedAd {
    pub id: i64,
    pub message: &'static str,
}

/// 创建广告 (`POST /ads`)
pub async fn create_ad(
    State(state): State<AppState>,
    payload: Result<Json<CreateAdInput>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedAd>), JsonApiError> {
    let Json(input) = payload?;
    let id = state.ads.create(input).await?;
    Ok((StatusCode::CREATED, Json(CreatedAd { id, message: CREATED_MESSAGE })))
}

/// 获取指定广告 (`GET /ads/{id}`)
pub async fn get_ad(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Ad>, JsonApiError> {
    let Path(id) = id?;
    Ok(Json(state.ads.get(id).await?))
}

/// 删除指定广告 (`DELETE /ads/{id}`)
pub async fn delete_ad(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<MessageBody>, JsonApiError> {
    let Path(id) = id?;
    state.ads.delete(id).await?;
    Ok(Json(MessageBody::new(DELETED_MESSAGE)))
}
