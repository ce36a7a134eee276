use crate::clients::{
    ActorClient, CommercialClient, DirectoryClient, OrderClient, SupplierClient,
};
use crate::document::{ComposedDocument, DocumentCanvas, DocumentComposer};
use crate::error::DeskError;
use crate::lifecycle::DeskConfig;
use crate::model::{Commercial, OrderDraft, OrderId, Supplier};
use crate::storage::{
    load_commercials, load_orders, load_suppliers, PersistenceSink, SharedStore, COMMERCIALS_KEY,
    ORDERS_KEY, SUPPLIERS_KEY,
};
use crate::{directory_actor, order_actor};
use chrono::NaiveDate;
use tracing::{error, info, instrument};

/// The running desk: one actor per collection plus the document composer.
///
/// # Example
///
/// ```rust
/// use order_desk::lifecycle::{DeskConfig, OrderDesk};
/// use order_desk::storage::MemoryStore;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let desk = OrderDesk::start(Arc::new(MemoryStore::new()), &DeskConfig::default());
///     assert_eq!(desk.orders.next_order_number().await?, 1);
///     desk.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct OrderDesk {
    pub orders: OrderClient,
    pub suppliers: SupplierClient,
    pub commercials: CommercialClient,
    composer: DocumentComposer,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl OrderDesk {
    /// Loads all collections from `store` and spawns their actors.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn start(store: SharedStore, config: &DeskConfig) -> Self {
        // 1. Load (fail-closed) and create actors
        let (order_actor, order_client) = order_actor::new(config.buffer_size);
        let order_actor = order_actor.with_records(load_orders(&store));

        let (supplier_actor, supplier_client) =
            directory_actor::new::<Supplier>(config.buffer_size);
        let supplier_actor = supplier_actor.with_records(load_suppliers(&store));

        let (commercial_actor, commercial_client) =
            directory_actor::new::<Commercial>(config.buffer_size);
        let commercial_actor = commercial_actor.with_records(load_commercials(&store));

        // 2. Start actors with their persistence sinks injected
        let handles = vec![
            tokio::spawn(order_actor.run(PersistenceSink::new(store.clone(), ORDERS_KEY))),
            tokio::spawn(supplier_actor.run(PersistenceSink::new(store.clone(), SUPPLIERS_KEY))),
            tokio::spawn(commercial_actor.run(PersistenceSink::new(store, COMMERCIALS_KEY))),
        ];

        info!(labels = ?config.labels, "Order desk started");
        Self {
            orders: OrderClient::new(order_client),
            suppliers: DirectoryClient::new(supplier_client),
            commercials: DirectoryClient::new(commercial_client),
            composer: DocumentComposer::new(config.labels.labels()),
            handles,
        }
    }

    /// A blank order form with today's date and the first supplier and commercial.
    pub async fn new_draft(&self, today: NaiveDate) -> Result<OrderDraft, DeskError> {
        let suppliers = self.suppliers.names().await?;
        let commercials = self.commercials.names().await?;
        Ok(OrderDraft::with_defaults(today, &suppliers, &commercials))
    }

    /// Renders the stored order `id` onto `canvas`. Order state is never touched.
    #[instrument(skip(self, canvas))]
    pub async fn export<C: DocumentCanvas>(
        &self,
        id: OrderId,
        canvas: &mut C,
    ) -> Result<ComposedDocument, DeskError> {
        let order = self
            .orders
            .get(id.clone())
            .await?
            .ok_or(DeskError::OrderNotFound(id))?;
        Ok(self.composer.compose(&order, canvas)?)
    }

    /// Gracefully shuts down every actor.
    ///
    /// Dropping the clients closes the channels; each actor drains what it already
    /// received, then exits its loop.
    pub async fn shutdown(self) -> Result<(), DeskError> {
        info!("Shutting down order desk...");

        drop(self.orders);
        drop(self.suppliers);
        drop(self.commercials);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = ?e, "Actor task failed");
                return Err(DeskError::ActorTask(e.to_string()));
            }
        }

        info!("Order desk shutdown complete.");
        Ok(())
    }
}
