use crate::clients::actor_client::ActorClient;
use crate::framework::ResourceClient;
use crate::model::{Order, OrderCreate, OrderId, Status};
use crate::order_actor::{OrderAction, OrderError};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for the order registry.
///
/// Cheap to clone; every clone talks to the same registry actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Stores an already validated order and returns its new id.
    #[instrument(skip(self, params))]
    pub async fn insert(&self, params: OrderCreate) -> Result<OrderId, OrderError> {
        debug!(?params, "insert called");
        Ok(self.inner.create(params).await?)
    }

    /// Point-in-time snapshot of one order.
    #[instrument(skip(self))]
    pub async fn order_status(&self, order_id: OrderId) -> Result<Order, OrderError> {
        self.get(order_id)
            .await?
            .ok_or_else(|| OrderError::NotFound(order_id.to_string()))
    }

    /// Sets the order's status. `NotFound` means the order is gone.
    #[instrument(skip(self))]
    pub async fn advance_status(
        &self,
        order_id: OrderId,
        status: Status,
    ) -> Result<Status, OrderError> {
        Ok(self
            .inner
            .perform_action(order_id, OrderAction::AdvanceStatus(status))
            .await?)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockClient;
    use crate::framework::FrameworkError;

    #[tokio::test]
    async fn order_status_maps_missing_order_to_not_found() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_get(OrderId(4)).return_ok(None);
        let client = OrderClient::new(mock.client());

        assert_eq!(
            client.order_status(OrderId(4)).await,
            Err(OrderError::NotFound("order_4".into()))
        );
        mock.verify();
    }

    #[tokio::test]
    async fn advance_status_surfaces_registry_errors() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_action(OrderId(2))
            .return_err(FrameworkError::NotFound("order_2".into()));
        mock.expect_action(OrderId(2))
            .return_err(FrameworkError::EntityError(Box::new(
                OrderError::InvalidTransition {
                    from: Status::Done,
                    to: Status::Created,
                },
            )));
        let client = OrderClient::new(mock.client());

        assert_eq!(
            client.advance_status(OrderId(2), Status::Preparing).await,
            Err(OrderError::NotFound("order_2".into()))
        );
        assert!(matches!(
            client.advance_status(OrderId(2), Status::Created).await,
            Err(OrderError::InvalidTransition { .. })
        ));
        mock.verify();
    }
}
