//! Custom actions for the Order registry.
//!
//! Orders have no generic update: after creation the only change an order ever sees is
//! a status transition, sent as an [`OrderAction`] and handled by
//! [`ActorEntity::handle_action`](crate::framework::ActorEntity::handle_action).

use crate::model::Status;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderAction {
    /// Set the order's status. Re-applying the current status is allowed; going
    /// backwards is not.
    ///
    /// Returns the status now stored.
    AdvanceStatus(Status),
}
