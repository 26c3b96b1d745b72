use super::extract::{ApiJson, ApiPath};
use super::{ApiError, AppState};
use crate::model::{Order, OrderId, OrderPlaced, PlaceOrder};
use axum::extract::State;
use axum::Json;

/// `POST /orders`
pub async fn create_order(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<PlaceOrder>,
) -> Result<Json<OrderPlaced>, ApiError> {
    let order_id = state.factory.place_order(request).await?;
    Ok(Json(OrderPlaced { order_id }))
}

/// `GET /orders/:order_id`
///
/// Any integer is accepted; one the registry could never have issued is simply not found.
pub async fn get_order(
    State(state): State<AppState>,
    ApiPath(order_id): ApiPath<i64>,
) -> Result<Json<Order>, ApiError> {
    let order_id = u64::try_from(order_id).map_err(|_| ApiError::OrderNotFound)?;
    let order = state.orders.order_status(OrderId(order_id)).await?;
    Ok(Json(order))
}
