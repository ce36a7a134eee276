//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns one ordered record
//! collection. It implements the "Server" side of the Actor Model, processing
//! messages sequentially and ensuring exclusive access to the collection.

use crate::client::ResourceClient;
use crate::entity::{Placement, RecordEntity};
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use crate::observer::CollectionObserver;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages an ordered collection of records.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`) and
/// the receiver end of the channel.
///
/// **Concurrency Model**:
/// The actor processes its messages *sequentially* in a loop: every request runs to
/// completion before the next one is read. No `Mutex` guards the `store`, and
/// derived values such as "the next sequence number" are computed and used inside a
/// single request, so two creates can never observe the same state.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Seed**: Optionally load previously stored records with [`ResourceActor::with_records`].
/// 3.  **Run**: Spawn `actor.run(observer)` in a background task.
///
/// ```rust
/// use record_framework::{NoopObserver, RecordEntity, ResourceActor};
///
/// #[derive(Clone, Debug)]
/// struct Note { id: u32, text: String }
/// #[derive(Debug)]
/// struct NoteCreate { text: String }
/// #[derive(Debug, thiserror::Error)]
/// #[error("note error")]
/// struct NoteError;
///
/// impl RecordEntity for Note {
///     type Id = u32;
///     type Create = NoteCreate;
///     type Error = NoteError;
///
///     fn id(&self) -> &u32 { &self.id }
///     fn from_create_params(id: u32, params: NoteCreate, _: &[Self]) -> Result<Self, NoteError> {
///         Ok(Self { id, text: params.text })
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let counter = std::sync::atomic::AtomicU32::new(1);
///     let (actor, client) = ResourceActor::<Note>::new(10, move || {
///         counter.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
///     });
///     tokio::spawn(actor.run(NoopObserver));
///
///     let note = client.create(NoteCreate { text: "hello".into() }).await.unwrap();
///     assert_eq!(client.list().await.unwrap().len(), 1);
///     assert!(client.delete(note.id).await.unwrap());
/// }
/// ```
///
/// ## Operations
///
/// * **Create**:
///     1. Generates a new ID with the injected generator.
///     2. Calls `T::from_create_params` with the current collection.
///     3. Inserts at the front or back per [`RecordEntity::placement`].
///     4. Notifies the observer and returns the new record, or
///        [`FrameworkError::ObserverFailed`] if the observer rejected the change. The
///        record stays in the collection in both cases.
///
/// * **Get** / **List**: Return clones; the collection is never shared.
///
/// * **Delete**:
///     1. Removes every record whose ID matches.
///     2. If something was removed, calls [`RecordEntity::after_remove`] and notifies
///        the observer.
///     3. Returns whether a record was removed, or [`FrameworkError::ObserverFailed`]
///        after removing it if the observer rejected the change. Unknown IDs are a
///        no-op.
pub struct ResourceActor<T: RecordEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: Vec<T>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: RecordEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    /// * `next_id_fn` - Identifier generator called once per created record.
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: Vec::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Replaces the initial collection, in display order.
    pub fn with_records(mut self, records: Vec<T>) -> Self {
        self.store = records;
        self
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// # Observer Injection
    /// The `observer` sees the full collection after every mutation. It is passed here
    /// rather than to `new()` so that actors and clients can be wired before the sink
    /// exists.
    pub async fn run(mut self, mut observer: impl CollectionObserver<T>) {
        // Extract just the type name (e.g., "Order" instead of "order_desk::model::order::Order")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, size = self.store.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = (self.next_id_fn)();

                    match T::from_create_params(id.clone(), params, &self.store) {
                        Ok(item) => {
                            match T::placement() {
                                Placement::Front => self.store.insert(0, item.clone()),
                                Placement::Back => self.store.push(item.clone()),
                            }
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let result = notify(&mut observer, &self.store, entity_type)
                                .map(|()| item);
                            let _ = respond_to.send(result);
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.iter().find(|r| r.id() == &id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.clone()));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let before = self.store.len();
                    self.store.retain(|r| r.id() != &id);
                    let removed = self.store.len() != before;

                    if removed {
                        T::after_remove(&mut self.store);
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        let result = notify(&mut observer, &self.store, entity_type)
                            .map(|()| true);
                        let _ = respond_to.send(result);
                    } else {
                        debug!(entity_type, %id, "Delete ignored, not present");
                        let _ = respond_to.send(Ok(false));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

// The mutation is kept in memory either way; the caller learns the sink failed.
fn notify<T: RecordEntity>(
    observer: &mut impl CollectionObserver<T>,
    records: &[T],
    entity_type: &str,
) -> Result<(), FrameworkError> {
    observer.on_change(records).map_err(|e| {
        warn!(entity_type, error = %e, "Observer rejected change");
        FrameworkError::ObserverFailed(e)
    })
}
