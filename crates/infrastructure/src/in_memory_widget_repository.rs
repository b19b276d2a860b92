use std::collections::HashMap;

use async_trait::async_trait;
use chatadmin_application::{WidgetRecord, WidgetRepository};
use chatadmin_core::{AppError, AppResult, WidgetId};
use tokio::sync::RwLock;

/// In-memory widget repository implementation.
#[derive(Debug, Default)]
pub struct InMemoryWidgetRepository {
    widgets: RwLock<HashMap<WidgetId, WidgetRecord>>,
}

impl InMemoryWidgetRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            widgets: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl WidgetRepository for InMemoryWidgetRepository {
    async fn save_widget(&self, record: WidgetRecord) -> AppResult<()> {
        let mut widgets = self.widgets.write().await;

        if widgets.contains_key(&record.widget_id()) {
            return Err(AppError::Conflict(format!(
                "widget '{}' already exists",
                record.widget_id()
            )));
        }

        widgets.insert(record.widget_id(), record);
        Ok(())
    }

    async fn list_widgets(&self) -> AppResult<Vec<WidgetRecord>> {
        let widgets = self.widgets.read().await;

        let mut values: Vec<WidgetRecord> = widgets.values().cloned().collect();
        values.sort_by(|left, right| {
            left.name()
                .as_str()
                .cmp(right.name().as_str())
                .then_with(|| {
                    left.widget_id()
                        .to_string()
                        .cmp(&right.widget_id().to_string())
                })
        });

        Ok(values)
    }

    async fn find_widget(&self, widget_id: WidgetId) -> AppResult<Option<WidgetRecord>> {
        Ok(self.widgets.read().await.get(&widget_id).cloned())
    }

    async fn replace_widget(&self, record: WidgetRecord) -> AppResult<()> {
        let mut widgets = self.widgets.write().await;

        if !widgets.contains_key(&record.widget_id()) {
            return Err(AppError::NotFound(format!(
                "widget '{}' does not exist",
                record.widget_id()
            )));
        }

        widgets.insert(record.widget_id(), record);
        Ok(())
    }

    async fn delete_widget(&self, widget_id: WidgetId) -> AppResult<()> {
        let removed = self.widgets.write().await.remove(&widget_id);

        if removed.is_none() {
            return Err(AppError::NotFound(format!(
                "widget '{widget_id}' does not exist"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chatadmin_application::{WidgetRecord, WidgetRepository};
    use chatadmin_core::{NonEmptyString, WidgetId};
    use chatadmin_domain::WidgetConfig;
    use chrono::Utc;

    use super::InMemoryWidgetRepository;

    fn record(name: &str) -> WidgetRecord {
        WidgetRecord::new(
            WidgetId::new(),
            NonEmptyString::new(name).unwrap_or_else(|_| unreachable!()),
            WidgetConfig::default(),
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn save_and_list_widgets() {
        let repository = InMemoryWidgetRepository::new();

        let save_result = repository.save_widget(record("Support widget")).await;
        assert!(save_result.is_ok());

        let listed = repository.list_widgets().await;
        assert!(listed.is_ok());
        assert_eq!(listed.unwrap_or_default().len(), 1);
    }

    #[tokio::test]
    async fn duplicate_saves_conflict() {
        let repository = InMemoryWidgetRepository::new();
        let record = record("Support widget");

        let first = repository.save_widget(record.clone()).await;
        assert!(first.is_ok());

        let second = repository.save_widget(record).await;
        assert!(second.is_err());
    }

    #[tokio::test]
    async fn list_is_sorted_by_name() {
        let repository = InMemoryWidgetRepository::new();

        assert!(repository.save_widget(record("Zeta widget")).await.is_ok());
        assert!(repository.save_widget(record("Alpha widget")).await.is_ok());

        let listed = repository.list_widgets().await.unwrap_or_default();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].name().as_str(), "Alpha widget");
    }

    #[tokio::test]
    async fn replace_requires_an_existing_widget() {
        let repository = InMemoryWidgetRepository::new();

        let replaced = repository.replace_widget(record("Support widget")).await;
        assert!(replaced.is_err());
    }

    #[tokio::test]
    async fn replace_swaps_the_stored_configuration() {
        let repository = InMemoryWidgetRepository::new();
        let stored = record("Support widget");
        assert!(repository.save_widget(stored.clone()).await.is_ok());

        let mut config = WidgetConfig::default();
        config.content.bot_name = "Grace".to_owned();
        let updated = stored.with_config(config, Utc::now());
        assert!(repository.replace_widget(updated).await.is_ok());

        let found = repository.find_widget(stored.widget_id()).await;
        assert!(found.is_ok());
        let found = found.unwrap_or_default();
        assert!(found.is_some_and(|record| record.config().content.bot_name == "Grace"));
    }

    #[tokio::test]
    async fn delete_removes_the_widget() {
        let repository = InMemoryWidgetRepository::new();
        let stored = record("Support widget");
        assert!(repository.save_widget(stored.clone()).await.is_ok());

        assert!(repository.delete_widget(stored.widget_id()).await.is_ok());
        assert!(repository.delete_widget(stored.widget_id()).await.is_err());

        let found = repository.find_widget(stored.widget_id()).await;
        assert!(found.is_ok());
        assert!(found.unwrap_or_default().is_none());
    }
}
