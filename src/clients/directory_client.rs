//! # Directory Client
//!
//! One client type serves both settings lists. [`SupplierClient`] and
//! [`CommercialClient`] are aliases over the generic [`DirectoryClient`].
use crate::browse::sorted_by_name;
use crate::directory_actor::DirectoryError;
use crate::model::{Commercial, DirectoryEntry, Supplier};
use crate::validation::validate_name;
use async_trait::async_trait;
use record_framework::{ActorClient, FrameworkError, ResourceClient};
use tracing::{info, instrument};

/// Client for a supplier or commercial actor.
pub struct DirectoryClient<E: DirectoryEntry> {
    inner: ResourceClient<E>,
}

pub type SupplierClient = DirectoryClient<Supplier>;
pub type CommercialClient = DirectoryClient<Commercial>;

impl<E: DirectoryEntry> Clone for DirectoryClient<E> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<E> DirectoryClient<E>
where
    E: DirectoryEntry<Error = DirectoryError>,
{
    pub fn new(inner: ResourceClient<E>) -> Self {
        Self { inner }
    }

    /// Appends an entry. The name is trimmed and must not be blank.
    #[instrument(skip(self, name), fields(kind = E::KIND))]
    pub async fn add(&self, name: &str) -> Result<E, DirectoryError> {
        validate_name(name)?;
        info!(name = name.trim(), "Adding entry");
        self.inner
            .create(E::create(name))
            .await
            .map_err(Self::map_error)
    }

    /// Removes an entry. Existing orders keep the name they were issued with.
    #[instrument(skip(self), fields(kind = E::KIND))]
    pub async fn remove(&self, id: E::Id) -> Result<bool, DirectoryError> {
        self.delete(id).await
    }

    /// Entries ordered by name, the way selection lists show them.
    pub async fn sorted(&self) -> Result<Vec<E>, DirectoryError> {
        let entries = self.list().await?;
        Ok(sorted_by_name(entries))
    }

    /// Names only, in stored order.
    pub async fn names(&self) -> Result<Vec<String>, DirectoryError> {
        let entries = self.list().await?;
        Ok(entries.iter().map(|e| e.name().to_string()).collect())
    }
}

#[async_trait]
impl<E> ActorClient<E> for DirectoryClient<E>
where
    E: DirectoryEntry<Error = DirectoryError>,
{
    type Error = DirectoryError;

    fn inner(&self) -> &ResourceClient<E> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::EntityError(inner) => match inner.downcast::<DirectoryError>() {
                Ok(err) => *err,
                Err(other) => DirectoryError::ActorCommunicationError(other.to_string()),
            },
            FrameworkError::ObserverFailed(e) => DirectoryError::Persistence(e.0),
            other => DirectoryError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{SupplierId, seed_commercials};
    use crate::validation::ValidationError;
    use record_framework::mock::{create_mock_client, expect_create, expect_delete, MockClient};

    #[tokio::test]
    async fn test_add_sends_name() {
        let (client, mut receiver) = create_mock_client::<Supplier>(10);
        let suppliers = SupplierClient::new(client);

        let task = tokio::spawn(async move { suppliers.add("Empaco").await });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.name, "Empaco");
        responder
            .send(Ok(Supplier::seeded("s9", "Empaco")))
            .unwrap();

        let added = task.await.unwrap().unwrap();
        assert_eq!(added.id, SupplierId::from("s9"));
    }

    #[tokio::test]
    async fn test_blank_name_is_refused_locally() {
        let mock = MockClient::<Supplier>::new();
        let suppliers = SupplierClient::new(mock.client());

        let result = suppliers.add("   ").await;
        assert_eq!(
            result,
            Err(DirectoryError::Validation(ValidationError::MissingField("name")))
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_remove_forwards_id() {
        let (client, mut receiver) = create_mock_client::<Supplier>(10);
        let suppliers = SupplierClient::new(client);

        let task = tokio::spawn(async move { suppliers.remove(SupplierId::from("3")).await });

        let (id, responder) = expect_delete(&mut receiver)
            .await
            .expect("Expected Delete request");
        assert_eq!(id, SupplierId::from("3"));
        responder.send(Ok(true)).unwrap();

        assert!(task.await.unwrap().unwrap());
    }

    #[tokio::test]
    async fn test_sorted_orders_by_name() {
        let mut mock = MockClient::<Commercial>::new();
        mock.expect_list().return_ok(seed_commercials());
        mock.expect_list().return_ok(seed_commercials());
        let commercials = CommercialClient::new(mock.client());

        let sorted = commercials.sorted().await.unwrap();
        assert_eq!(sorted[0].name, "Antonio Couraceiro");
        assert_eq!(sorted.last().unwrap().name, "Ruben");

        let names = commercials.names().await.unwrap();
        assert_eq!(names[0], "Fátima");
        mock.verify();
    }
}
