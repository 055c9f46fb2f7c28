use actor_framework::{ActorEntity, FrameworkError, Records, ResourceActor};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

// --- Test Entity ---

/// A line item whose totals are mirrored into a shared ledger by its callbacks.
#[derive(Clone, Debug, PartialEq)]
struct Entry {
    id: u32,
    sku: String,
    amount: i64,
    flagged: bool,
}

#[derive(Debug)]
struct EntryCreate {
    sku: String,
    amount: i64,
}

#[derive(Debug)]
struct EntryUpdate {
    sku: Option<String>,
    amount: Option<i64>,
}

#[derive(Debug)]
enum EntryAction {
    Flag,
}

#[derive(Debug)]
struct MinAmount(i64);

#[derive(Debug, PartialEq, thiserror::Error)]
enum EntryError {
    #[error("amount must be positive")]
    NonPositive,
    #[error("sku has already been taken")]
    DuplicateSku,
    #[error("ledger unavailable")]
    LedgerDown,
}

/// Shared state the callbacks write to, plus a switch to make them fail.
#[derive(Default)]
struct Ledger {
    total: Mutex<i64>,
    down: AtomicBool,
}

impl Ledger {
    fn write(&self, records: &Records<Entry>) -> Result<(), EntryError> {
        if self.down.load(Ordering::SeqCst) {
            return Err(EntryError::LedgerDown);
        }
        *self.total.lock().unwrap() = records.values().map(|e| e.amount).sum();
        Ok(())
    }

    fn total(&self) -> i64 {
        *self.total.lock().unwrap()
    }
}

#[async_trait]
impl ActorEntity for Entry {
    type Id = u32;
    type Create = EntryCreate;
    type Update = EntryUpdate;
    type Action = EntryAction;
    type ActionResult = bool;
    type Query = MinAmount;
    type Context = Arc<Ledger>;
    type Error = EntryError;

    fn from_create_params(id: u32, params: EntryCreate) -> Result<Self, Self::Error> {
        if params.amount <= 0 {
            return Err(EntryError::NonPositive);
        }
        Ok(Self {
            id,
            sku: params.sku,
            amount: params.amount,
            flagged: false,
        })
    }

    async fn on_update(&mut self, update: EntryUpdate, _ctx: &Arc<Ledger>) -> Result<(), Self::Error> {
        if let Some(sku) = update.sku {
            self.sku = sku;
        }
        if let Some(amount) = update.amount {
            if amount <= 0 {
                return Err(EntryError::NonPositive);
            }
            self.amount = amount;
        }
        Ok(())
    }

    fn check_unique(&self, others: &[&Self]) -> Result<(), Self::Error> {
        if others.iter().any(|other| other.sku == self.sku) {
            return Err(EntryError::DuplicateSku);
        }
        Ok(())
    }

    async fn after_save(&self, records: &Records<Self>, ledger: &Arc<Ledger>) -> Result<(), Self::Error> {
        ledger.write(records)
    }

    async fn after_delete(&self, records: &Records<Self>, ledger: &Arc<Ledger>) -> Result<(), Self::Error> {
        ledger.write(records)
    }

    async fn handle_action(&mut self, action: EntryAction, _ctx: &Arc<Ledger>) -> Result<bool, Self::Error> {
        match action {
            EntryAction::Flag => Ok(!std::mem::replace(&mut self.flagged, true)),
        }
    }

    fn matches(&self, query: &MinAmount) -> bool {
        self.amount >= query.0
    }
}

fn start() -> (actor_framework::ResourceClient<Entry>, Arc<Ledger>) {
    let ledger = Arc::new(Ledger::default());
    let (actor, client) = ResourceActor::<Entry>::new(10);
    tokio::spawn(actor.run(ledger.clone()));
    (client, ledger)
}

fn create(sku: &str, amount: i64) -> EntryCreate {
    EntryCreate {
        sku: sku.to_string(),
        amount,
    }
}

fn entity_error(e: FrameworkError) -> EntryError {
    e.into_entity_error::<EntryError>().expect("expected an entity error")
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let (client, ledger) = start();

    let id = client.create(create("A-1", 10)).await.unwrap();
    assert_eq!(id, 1);
    assert_eq!(ledger.total(), 10);

    assert!(client.perform_action(id, EntryAction::Flag).await.unwrap());
    assert!(!client.perform_action(id, EntryAction::Flag).await.unwrap());
    assert!(client.get(id).await.unwrap().unwrap().flagged);

    let updated = client
        .update(id, EntryUpdate { sku: None, amount: Some(25) })
        .await
        .unwrap();
    assert_eq!(updated.amount, 25);
    assert_eq!(ledger.total(), 25);

    client.delete(id).await.unwrap();
    assert!(client.get(id).await.unwrap().is_none());
    assert_eq!(ledger.total(), 0);
}

#[tokio::test]
async fn test_validation_and_uniqueness_reject_writes() {
    let (client, ledger) = start();

    let err = client.create(create("A-1", 0)).await.unwrap_err();
    assert_eq!(entity_error(err), EntryError::NonPositive);

    client.create(create("A-1", 5)).await.unwrap();
    let err = client.create(create("A-1", 7)).await.unwrap_err();
    assert_eq!(entity_error(err), EntryError::DuplicateSku);

    // Failed creates still consume an ID.
    let next = client.create(create("B-1", 1)).await.unwrap();
    assert_eq!(next, 4);
    assert_eq!(ledger.total(), 6);
}

#[tokio::test]
async fn test_failed_update_keeps_committed_record() {
    let (client, _ledger) = start();
    let first = client.create(create("A-1", 5)).await.unwrap();
    let second = client.create(create("B-1", 5)).await.unwrap();

    let err = client
        .update(second, EntryUpdate { sku: Some("A-1".into()), amount: Some(9) })
        .await
        .unwrap_err();
    assert_eq!(entity_error(err), EntryError::DuplicateSku);

    let stored = client.get(second).await.unwrap().unwrap();
    assert_eq!(stored.sku, "B-1");
    assert_eq!(stored.amount, 5);

    // Keeping its own sku is not a conflict.
    let same = client
        .update(first, EntryUpdate { sku: Some("A-1".into()), amount: None })
        .await;
    assert!(same.is_ok());
}

#[tokio::test]
async fn test_failing_callbacks_roll_back() {
    let (client, ledger) = start();
    let id = client.create(create("A-1", 5)).await.unwrap();

    ledger.down.store(true, Ordering::SeqCst);

    let err = client.create(create("B-1", 3)).await.unwrap_err();
    assert_eq!(entity_error(err), EntryError::LedgerDown);
    assert!(client.query(MinAmount(0)).await.unwrap().iter().all(|e| e.sku != "B-1"));

    let err = client
        .update(id, EntryUpdate { sku: None, amount: Some(50) })
        .await
        .unwrap_err();
    assert_eq!(entity_error(err), EntryError::LedgerDown);
    assert_eq!(client.get(id).await.unwrap().unwrap().amount, 5);

    let err = client.delete(id).await.unwrap_err();
    assert_eq!(entity_error(err), EntryError::LedgerDown);
    assert!(client.get(id).await.unwrap().is_some());

    ledger.down.store(false, Ordering::SeqCst);
    client.delete(id).await.unwrap();
    assert_eq!(ledger.total(), 0);
}

#[tokio::test]
async fn test_query_returns_matches_in_id_order() {
    let (client, _ledger) = start();
    for (sku, amount) in [("C", 30), ("A", 10), ("B", 20)] {
        client.create(create(sku, amount)).await.unwrap();
    }

    let hits = client.query(MinAmount(15)).await.unwrap();
    let skus: Vec<&str> = hits.iter().map(|e| e.sku.as_str()).collect();
    assert_eq!(skus, vec!["C", "B"]);
}

#[tokio::test]
async fn test_missing_record_is_not_found() {
    let (client, _ledger) = start();

    assert!(matches!(
        client.update(42, EntryUpdate { sku: None, amount: None }).await,
        Err(FrameworkError::NotFound(id)) if id == "42"
    ));
    assert!(matches!(client.delete(42).await, Err(FrameworkError::NotFound(_))));
    assert!(matches!(
        client.perform_action(42, EntryAction::Flag).await,
        Err(FrameworkError::NotFound(_))
    ));
}
