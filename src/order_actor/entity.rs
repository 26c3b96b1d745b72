//! [`ActorEntity`] implementation for [`Order`].

use super::actions::OrderAction;
use super::error::OrderError;
use crate::framework::ActorEntity;
use crate::model::{Order, OrderCreate, OrderId, Status};

impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Action = OrderAction;
    type ActionResult = Status;
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        Ok(Order::new(id, params))
    }

    fn handle_action(&mut self, action: OrderAction) -> Result<Status, OrderError> {
        match action {
            OrderAction::AdvanceStatus(to) if to < self.status => {
                Err(OrderError::InvalidTransition {
                    from: self.status,
                    to,
                })
            }
            OrderAction::AdvanceStatus(to) => {
                self.status = to;
                Ok(to)
            }
        }
    }
}
