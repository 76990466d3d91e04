use crate::domain::audit::AuditEntry;
use crate::domain::ports::AuditSink;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory audit trail.
///
/// The one mutable shared resource in the process: appends from concurrent
/// requests are serialized through the lock. Created once in `main` and passed
/// as `Arc<dyn AuditSink>` to whoever needs to log.
#[derive(Debug, Default, Clone)]
pub struct InMemoryAuditLog {
    entries: Arc<RwLock<Vec<AuditEntry>>>,
}

impl InMemoryAuditLog {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AuditSink for InMemoryAuditLog {
    async fn append(&self, message: String) -> Result<()> {
        let entry = AuditEntry::new(message);
        tracing::info!(target: "audit", "{}", entry.message);
        let mut entries = self.entries.write().await;
        entries.push(entry);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<AuditEntry>> {
        let entries = self.entries.read().await;
        Ok(entries.clone())
    }

    async fn clear(&self) -> Result<()> {
        let mut entries = self.entries.write().await;
        entries.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_append_and_list() {
        let log = InMemoryAuditLog::new();
        log.append("first".to_string()).await.unwrap();
        log.append("second".to_string()).await.unwrap();

        let entries = log.list().await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].message, "first");
        assert_eq!(entries[1].message, "second");
    }

    #[tokio::test]
    async fn test_list_is_a_snapshot() {
        let log = InMemoryAuditLog::new();
        log.append("first".to_string()).await.unwrap();

        let snapshot = log.list().await.unwrap();
        log.append("second".to_string()).await.unwrap();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(log.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_clear() {
        let log = InMemoryAuditLog::new();
        log.append("first".to_string()).await.unwrap();
        log.clear().await.unwrap();

        assert!(log.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_appends_are_all_kept() {
        let log = InMemoryAuditLog::new();
        let mut handles = Vec::new();
        for i in 0..32 {
            let log = log.clone();
            handles.push(tokio::spawn(async move {
                log.append(format!("entry {i}")).await.unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(log.list().await.unwrap().len(), 32);
    }
}
