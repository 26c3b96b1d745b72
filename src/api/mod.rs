//! # HTTP Surface
//!
//! | Route                       | Handler                                   |
//! |-----------------------------|-------------------------------------------|
//! | `GET /menu`                 | [`menu::get_menu`]                        |
//! | `POST /orders`              | [`orders::create_order`]                  |
//! | `GET /orders/:order_id`     | [`orders::get_order`]                     |
//! | `POST /realtime/ephemeral`  | [`realtime::create_ephemeral_session`]    |
//!
//! Handlers are thin: ordering goes through [`OrderFactory`], lookups through
//! [`OrderClient`], and failures become [`ApiError`] responses.

pub mod error;
pub mod extract;
pub mod menu;
pub mod orders;
pub mod realtime;

pub use error::ApiError;
pub use realtime::RealtimeProxy;

use crate::clients::OrderClient;
use crate::lifecycle::OrderSystem;
use crate::model::Menu;
use crate::order_actor::OrderFactory;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared handler state. Every field is a cheap handle.
#[derive(Clone)]
pub struct AppState {
    pub factory: OrderFactory,
    pub orders: OrderClient,
    pub menu: Arc<Menu>,
    pub realtime: Arc<RealtimeProxy>,
}

impl AppState {
    pub fn new(system: &OrderSystem, realtime: RealtimeProxy) -> Self {
        Self {
            factory: system.factory.clone(),
            orders: system.orders.clone(),
            menu: system.menu.clone(),
            realtime: Arc::new(realtime),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/menu", get(menu::get_menu))
        .route("/orders", post(orders::create_order))
        .route("/orders/:order_id", get(orders::get_order))
        .route("/realtime/ephemeral", post(realtime::create_ephemeral_session))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
