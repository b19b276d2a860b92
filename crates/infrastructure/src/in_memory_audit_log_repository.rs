use async_trait::async_trait;
use chatadmin_application::{AuditEvent, AuditRepository};
use chatadmin_core::AppResult;
use tokio::sync::RwLock;

/// In-memory append-only audit log.
#[derive(Debug, Default)]
pub struct InMemoryAuditLogRepository {
    events: RwLock<Vec<AuditEvent>>,
}

impl InMemoryAuditLogRepository {
    /// Creates an empty in-memory audit log.
    #[must_use]
    pub fn new() -> Self {
        Self {
            events: RwLock::new(Vec::new()),
        }
    }

    /// Returns a snapshot of the recorded events in append order.
    pub async fn events(&self) -> Vec<AuditEvent> {
        self.events.read().await.clone()
    }
}

#[async_trait]
impl AuditRepository for InMemoryAuditLogRepository {
    async fn append_event(&self, event: AuditEvent) -> AppResult<()> {
        self.events.write().await.push(event);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chatadmin_application::{AuditEvent, AuditRepository};
    use chatadmin_domain::AuditAction;
    use chrono::Utc;

    use super::InMemoryAuditLogRepository;

    #[tokio::test]
    async fn append_preserves_order() {
        let repository = InMemoryAuditLogRepository::new();

        for action in [AuditAction::WidgetCreated, AuditAction::WidgetDeleted] {
            let appended = repository
                .append_event(AuditEvent {
                    action,
                    resource_id: "w1".to_owned(),
                    detail: None,
                    recorded_at: Utc::now(),
                })
                .await;
            assert!(appended.is_ok());
        }

        let events = repository.events().await;
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].action, AuditAction::WidgetCreated);
        assert_eq!(events[1].action, AuditAction::WidgetDeleted);
    }
}
