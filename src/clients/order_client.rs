//! # Order Client
//!
//! Provides a high‑level API for interacting with the `Order` actor.
//! It wraps a `ResourceClient<Order>` and exposes the order desk operations.
use crate::browse::{filter_orders, sort_orders, SortDirection, SortField};
use crate::model::{Order, OrderDraft};
use crate::order_actor::OrderError;
use crate::sequence;
use crate::validation::validate_draft;
use async_trait::async_trait;
use record_framework::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
///
/// Numbering happens inside the actor (`Order::from_create_params`), so two
/// clients creating at the same time still get distinct, consecutive numbers.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Validates the draft, then asks the actor to number and store it.
    #[instrument(skip(self, draft), fields(customer = %draft.customer))]
    pub async fn create_order(&self, draft: OrderDraft) -> Result<Order, OrderError> {
        debug!(?draft, "create_order called");
        validate_draft(&draft)?;
        info!("Sending create_order to actor");

        self.inner.create(draft).await.map_err(Self::map_error)
    }

    /// The number the next created order would receive.
    #[instrument(skip(self))]
    pub async fn next_order_number(&self) -> Result<u32, OrderError> {
        let orders = self.list().await?;
        Ok(sequence::next_order_number(&orders))
    }

    /// Orders matching `query`, in display order.
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str) -> Result<Vec<Order>, OrderError> {
        let orders = self.list().await?;
        Ok(filter_orders(&orders, query))
    }

    /// Orders matching `query`, sorted by `field`.
    #[instrument(skip(self))]
    pub async fn browse(
        &self,
        query: &str,
        field: SortField,
        direction: SortDirection,
    ) -> Result<Vec<Order>, OrderError> {
        let mut orders = self.search(query).await?;
        sort_orders(&mut orders, field, direction);
        Ok(orders)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::EntityError(inner) => match inner.downcast::<OrderError>() {
                Ok(err) => *err,
                Err(other) => OrderError::ActorCommunicationError(other.to_string()),
            },
            FrameworkError::ObserverFailed(e) => OrderError::Persistence(e.0),
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OrderId;
    use crate::validation::ValidationError;
    use chrono::NaiveDate;
    use record_framework::mock::{create_mock_client, expect_create, MockClient};

    fn draft() -> OrderDraft {
        OrderDraft {
            date: NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
            supplier: "Socorte".into(),
            material: "Fita de cetim".into(),
            service_description: Some("Corte a 2 cm".into()),
            customer: "Atelier Sul".into(),
            commercial: "Marisa".into(),
        }
    }

    #[tokio::test]
    async fn test_create_order_forwards_draft() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(client);

        let task = tokio::spawn(async move { order_client.create_order(draft()).await });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload, draft());
        responder
            .send(Ok(Order::from_draft(OrderId::from("o1"), 1, payload)))
            .unwrap();

        let created = task.await.unwrap().unwrap();
        assert_eq!(created.order_number, 1);
    }

    #[tokio::test]
    async fn test_invalid_draft_never_reaches_actor() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(client);

        let mut bad = draft();
        bad.customer = "  ".into();
        let result = order_client.create_order(bad).await;
        assert_eq!(
            result,
            Err(OrderError::Validation(ValidationError::MissingField("customer")))
        );

        drop(order_client);
        assert!(receiver.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_entity_error_keeps_its_variant() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_create()
            .return_err(FrameworkError::EntityError(Box::new(OrderError::Validation(
                ValidationError::MissingField("material"),
            ))));
        let order_client = OrderClient::new(mock.client());

        let result = order_client.create_order(draft()).await;
        assert!(matches!(result, Err(OrderError::Validation(_))));
        mock.verify();
    }

    #[tokio::test]
    async fn test_next_order_number_from_listing() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_list().return_ok(vec![
            Order::from_draft(OrderId::from("b"), 2, draft()),
            Order::from_draft(OrderId::from("a"), 1, draft()),
        ]);
        mock.expect_list().return_ok(Vec::new());
        let order_client = OrderClient::new(mock.client());

        assert_eq!(order_client.next_order_number().await.unwrap(), 3);
        assert_eq!(order_client.next_order_number().await.unwrap(), 1);
        mock.verify();
    }

    #[tokio::test]
    async fn test_closed_actor_maps_to_communication_error() {
        let (client, receiver) = create_mock_client::<Order>(1);
        drop(receiver);
        let order_client = OrderClient::new(client);

        let result = order_client.delete(OrderId::from("x")).await;
        assert!(matches!(result, Err(OrderError::ActorCommunicationError(_))));
    }
}
