/// A customer order as held by the registry.
///
/// # Actor Framework
/// This struct implements [`ActorEntity`](crate::framework::ActorEntity) (see
/// [`crate::order_actor::entity`]), so it lives inside a
/// [`ResourceActor`](crate::framework::ResourceActor). `status` is the only field that
/// changes after creation.
use crate::model::Status;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Registry-assigned order identifier. Serialized as a bare number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u64);

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: OrderId,
    pub pizza_type: String,
    pub size: String,
    pub quantity: i64,
    pub address: String,
    pub status: Status,
}

impl Order {
    /// Builds a freshly placed order. Every order starts out `created`.
    pub fn new(order_id: OrderId, params: OrderCreate) -> Self {
        Self {
            order_id,
            pizza_type: params.pizza_type,
            size: params.size,
            quantity: params.quantity,
            address: params.address,
            status: Status::Created,
        }
    }
}

/// Validated, normalized payload for inserting an order into the registry.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderCreate {
    pub pizza_type: String,
    pub size: String,
    pub quantity: i64,
    pub address: String,
}

/// A caller's request to place an order, before menu validation.
///
/// `id` is the menu item id. Any integer is accepted here; ids that match no menu item
/// are rejected by the factory, not by deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceOrder {
    pub id: i64,
    /// Optional for wire compatibility with clients that still send it. Ignored: the
    /// stored name always comes from the menu.
    #[serde(default)]
    pub pizza_type: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub quantity: Option<i64>,
    pub address: String,
}

/// Response body for a placed order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderPlaced {
    pub order_id: OrderId,
}
