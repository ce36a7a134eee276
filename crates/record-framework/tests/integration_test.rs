use record_framework::mock::RecordingObserver;
use record_framework::{
    CollectionObserver, FrameworkError, ObserverError, Placement, RecordEntity, ResourceActor,
};
use std::sync::atomic::{AtomicU32, Ordering};

// --- Test Entity ---

/// A ticket whose `position` must always be 1..N, newest first.
#[derive(Clone, Debug, PartialEq)]
struct Ticket {
    id: u32,
    position: u32,
    title: String,
}

#[derive(Debug)]
struct TicketCreate {
    title: String,
}

#[derive(Debug, thiserror::Error)]
#[error("Ticket title must not be empty")]
struct TicketError;

impl RecordEntity for Ticket {
    type Id = u32;
    type Create = TicketCreate;
    type Error = TicketError;

    fn id(&self) -> &u32 {
        &self.id
    }

    fn from_create_params(
        id: u32,
        params: TicketCreate,
        existing: &[Self],
    ) -> Result<Self, TicketError> {
        if params.title.is_empty() {
            return Err(TicketError);
        }
        let position = existing.iter().map(|t| t.position).max().unwrap_or(0) + 1;
        Ok(Self {
            id,
            position,
            title: params.title,
        })
    }

    fn placement() -> Placement {
        Placement::Front
    }

    fn after_remove(collection: &mut Vec<Self>) {
        collection.sort_by_key(|t| t.position);
        for (index, ticket) in collection.iter_mut().enumerate() {
            ticket.position = index as u32 + 1;
        }
        collection.reverse();
    }
}

fn counter() -> impl Fn() -> u32 + Send + Sync + 'static {
    let next = AtomicU32::new(100);
    move || next.fetch_add(1, Ordering::SeqCst)
}

// --- Test ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let observer = RecordingObserver::<Ticket>::new();
    let (actor, client) = ResourceActor::new(10, counter());
    let handle = tokio::spawn(actor.run(observer.clone()));

    // 1. Create three, newest first
    for title in ["a", "b", "c"] {
        client
            .create(TicketCreate { title: title.into() })
            .await
            .unwrap();
    }
    let tickets = client.list().await.unwrap();
    let titles: Vec<_> = tickets.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, ["c", "b", "a"]);
    let positions: Vec<_> = tickets.iter().map(|t| t.position).collect();
    assert_eq!(positions, [3, 2, 1]);

    // 2. Delete the middle one, the hook closes the gap
    let middle = tickets[1].id;
    assert!(client.delete(middle).await.unwrap());
    let tickets = client.list().await.unwrap();
    let pairs: Vec<_> = tickets.iter().map(|t| (t.title.as_str(), t.position)).collect();
    assert_eq!(pairs, [("c", 2), ("a", 1)]);

    // 3. Unknown id is a no-op and publishes nothing
    let published = observer.snapshots().len();
    assert!(!client.delete(9999).await.unwrap());
    assert_eq!(observer.snapshots().len(), published);

    // 4. Get
    let first = client.get(tickets[0].id).await.unwrap().unwrap();
    assert_eq!(first.title, "c");

    // Observer saw 3 creates + 1 delete, last one matches the actor state
    assert_eq!(observer.snapshots().len(), 4);
    assert_eq!(observer.last().unwrap(), tickets);

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_rejected_create_leaves_collection_untouched() {
    let observer = RecordingObserver::<Ticket>::new();
    let seed = vec![Ticket {
        id: 1,
        position: 1,
        title: "seeded".into(),
    }];
    let (actor, client) = ResourceActor::new(10, counter());
    tokio::spawn(actor.with_records(seed.clone()).run(observer.clone()));

    let result = client.create(TicketCreate { title: String::new() }).await;
    assert!(result.is_err());
    assert_eq!(client.list().await.unwrap(), seed);
    assert!(observer.snapshots().is_empty());
}

struct RejectingObserver;

impl CollectionObserver<Ticket> for RejectingObserver {
    fn on_change(&mut self, _records: &[Ticket]) -> Result<(), ObserverError> {
        Err(ObserverError("disk full".into()))
    }
}

#[tokio::test]
async fn test_observer_failure_reported_but_state_kept() {
    let (actor, client) = ResourceActor::new(10, counter());
    tokio::spawn(actor.run(RejectingObserver));

    let created = client.create(TicketCreate { title: "a".into() }).await;
    assert!(matches!(created, Err(FrameworkError::ObserverFailed(_))));
    let tickets = client.list().await.unwrap();
    assert_eq!(tickets.len(), 1);
    assert_eq!(tickets[0].title, "a");

    let deleted = client.delete(tickets[0].id).await;
    assert!(matches!(deleted, Err(FrameworkError::ObserverFailed(_))));
    assert!(client.list().await.unwrap().is_empty());

    // Unknown ids never reach the observer.
    assert!(!client.delete(999).await.unwrap());
}
