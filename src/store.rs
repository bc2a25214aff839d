use async_trait::async_trait;
use time::Date;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Something that was logged on one calendar day.
pub trait Entry: Clone + Send + Sync + 'static {
    fn id(&self) -> Uuid;
    fn date(&self) -> Date;
}

/// Storage for logged entries. Implementations must keep insertion order.
#[async_trait]
pub trait EntryRepository<T: Entry>: Send + Sync {
    async fn append(&self, entry: T) -> anyhow::Result<T>;
    async fn list_by_date(&self, date: Date) -> anyhow::Result<Vec<T>>;
    /// Entries with `from <= date <= to`.
    async fn list_between(&self, from: Date, to: Date) -> anyhow::Result<Vec<T>>;
    /// Removes and returns the entry, or `None` if no entry has this id.
    async fn delete_by_id(&self, id: Uuid) -> anyhow::Result<Option<T>>;
}

/// Process-local store; contents are lost on restart.
pub struct InMemoryRepository<T> {
    entries: RwLock<Vec<T>>,
}

impl<T> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entry> EntryRepository<T> for InMemoryRepository<T> {
    async fn append(&self, entry: T) -> anyhow::Result<T> {
        self.entries.write().await.push(entry.clone());
        Ok(entry)
    }

    async fn list_by_date(&self, date: Date) -> anyhow::Result<Vec<T>> {
        let entries = self.entries.read().await;
        Ok(entries.iter().filter(|e| e.date() == date).cloned().collect())
    }

    async fn list_between(&self, from: Date, to: Date) -> anyhow::Result<Vec<T>> {
        let entries = self.entries.read().await;
        Ok(entries
            .iter()
            .filter(|e| e.date() >= from && e.date() <= to)
            .cloned()
            .collect())
    }

    async fn delete_by_id(&self, id: Uuid) -> anyhow::Result<Option<T>> {
        let mut entries = self.entries.write().await;
        Ok(entries
            .iter()
            .position(|e| e.id() == id)
            .map(|idx| entries.remove(idx)))
    }
}
