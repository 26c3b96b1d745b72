//! The order registry: the actor that owns every order, and the factory that feeds it.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Order`]
//! - [`actions`] - [`OrderAction`], the only way an order changes after creation
//! - [`error`] - [`OrderError`]
//! - [`factory`] - [`OrderFactory`], which validates requests against the menu
//! - [`new()`] - creates the registry actor and its client

pub mod actions;
pub mod entity;
pub mod error;
pub mod factory;

pub use actions::*;
pub use error::*;
pub use factory::*;

use crate::model::Order;
use crate::framework::{ResourceActor, ResourceClient};

/// Creates the order registry actor and its client.
pub fn new() -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(32)
}
