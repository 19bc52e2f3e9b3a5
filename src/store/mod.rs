mod sample;

use crate::model::{Field, TaskRecord};

/// Read-only, ordered collection of task records
#[derive(Debug, Clone)]
pub struct TaskStore {
    records: Vec<TaskRecord>,
}

impl TaskStore {
    /// Build a store from records in their display order.
    ///
    /// Records with a `taskId` already present are skipped, so the id stays
    /// unique within the store.
    pub fn new(records: Vec<TaskRecord>) -> Self {
        let mut unique: Vec<TaskRecord> = Vec::with_capacity(records.len());
        for record in records {
            if unique.iter().any(|r| r.task_id == record.task_id) {
                tracing::warn!(task_id = %record.task_id, "duplicate task id skipped");
                continue;
            }
            unique.push(record);
        }
        TaskStore { records: unique }
    }

    /// The built-in sample dataset
    pub fn sample() -> Self {
        TaskStore::new(sample::sample_records())
    }

    pub fn records(&self) -> &[TaskRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find(&self, task_id: &str) -> Option<&TaskRecord> {
        self.records.iter().find(|r| r.task_id == task_id)
    }

    /// Distinct non-empty values of a field, in first-seen order
    pub fn distinct_values(&self, field: Field) -> Vec<String> {
        let mut values: Vec<String> = Vec::new();
        for record in &self.records {
            let value = record.value(field).as_string();
            if !value.is_empty() && !values.contains(&value) {
                values.push(value);
            }
        }
        values
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        TaskStore::sample()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Compliance, Criticality};

    #[test]
    fn test_sample_has_thirty_unique_records() {
        let store = TaskStore::sample();
        assert_eq!(store.len(), 30);
        let mut ids: Vec<&str> = store.records().iter().map(|r| r.task_id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 30);
    }

    #[test]
    fn test_sample_counts_are_consistent() {
        let store = TaskStore::sample();
        for r in store.records() {
            assert!(
                r.open_tasks <= r.triggered_tasks,
                "{} has more open than triggered tasks",
                r.task_id
            );
        }
    }

    #[test]
    fn test_duplicate_ids_are_skipped() {
        let first = TaskStore::sample().records()[0].clone();
        let mut dup = first.clone();
        dup.owner = "Someone Else".into();
        let store = TaskStore::new(vec![first, dup]);
        assert_eq!(store.len(), 1);
        assert_eq!(store.records()[0].owner, "John Doe");
    }

    #[test]
    fn test_find() {
        let store = TaskStore::sample();
        let r = store.find("T010").unwrap();
        assert_eq!(r.obligation_title, "Budget Planning 2024");
        assert_eq!(r.criticality, Criticality::High);
        assert_eq!(r.compliance, Compliance::Pending);
        assert!(store.find("T999").is_none());
    }

    #[test]
    fn test_distinct_values_first_seen_order() {
        let store = TaskStore::sample();
        assert_eq!(
            store.distinct_values(Field::Compliance),
            vec!["Pending", "Compliant", "Non-Compliant"]
        );
        assert_eq!(store.distinct_values(Field::ContractId).len(), 8);
        assert_eq!(store.distinct_values(Field::ContractId)[0], "C001");
    }
}
