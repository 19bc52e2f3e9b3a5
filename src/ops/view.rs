use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::{FilterSpec, SortSpec, SpecError, TaskRecord};

use super::filter::apply_filters;
use super::group::{GroupNode, group_by_contract, group_by_hierarchy};
use super::sort::apply_sort;

/// How the result is presented
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Flat,
    /// contract → tasks
    Contract,
    /// contract → category → subdomain → tasks
    Hierarchy,
}

impl ViewMode {
    /// Toggle order: flat → contract → hierarchy → flat
    pub fn next(self) -> ViewMode {
        match self {
            ViewMode::Flat => ViewMode::Contract,
            ViewMode::Contract => ViewMode::Hierarchy,
            ViewMode::Hierarchy => ViewMode::Flat,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ViewMode::Flat => "flat",
            ViewMode::Contract => "contract",
            ViewMode::Hierarchy => "hierarchy",
        }
    }

    pub fn is_grouped(self) -> bool {
        self != ViewMode::Flat
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ViewMode {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "flat" => Ok(ViewMode::Flat),
            "contract" | "grouped" => Ok(ViewMode::Contract),
            "hierarchy" | "tree" => Ok(ViewMode::Hierarchy),
            other => Err(SpecError::UnknownViewMode(other.to_string())),
        }
    }
}

/// The committed specs a view is computed from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveView {
    pub filter: FilterSpec,
    pub sort: SortSpec,
    pub mode: ViewMode,
}

/// Output of the pipeline
#[derive(Debug, Clone, PartialEq)]
pub enum ViewResult<'a> {
    Flat(Vec<&'a TaskRecord>),
    Grouped(Vec<GroupNode<'a>>),
}

impl<'a> ViewResult<'a> {
    /// Number of tasks shown
    pub fn task_count(&self) -> usize {
        match self {
            ViewResult::Flat(tasks) => tasks.len(),
            ViewResult::Grouped(groups) => groups.iter().map(GroupNode::task_count).sum(),
        }
    }

    /// Tasks in display order, regardless of grouping
    pub fn tasks(&self) -> Vec<&'a TaskRecord> {
        match self {
            ViewResult::Flat(tasks) => tasks.clone(),
            ViewResult::Grouped(groups) => groups.iter().flat_map(GroupNode::tasks).collect(),
        }
    }
}

/// filter → sort, the flat part of the pipeline
pub fn filter_and_sort<'a>(records: &'a [TaskRecord], view: &ActiveView) -> Vec<&'a TaskRecord> {
    let all: Vec<&TaskRecord> = records.iter().collect();
    let filtered = apply_filters(&all, &view.filter);
    apply_sort(&filtered, &view.sort)
}

/// Run the full pipeline over every record: filter → sort → group.
pub fn compute<'a>(records: &'a [TaskRecord], view: &ActiveView) -> ViewResult<'a> {
    let sorted = filter_and_sort(records, view);
    tracing::debug!(
        total = records.len(),
        shown = sorted.len(),
        mode = %view.mode,
        "view recomputed"
    );
    match view.mode {
        ViewMode::Flat => ViewResult::Flat(sorted),
        ViewMode::Contract => ViewResult::Grouped(group_by_contract(&sorted)),
        ViewMode::Hierarchy => ViewResult::Grouped(group_by_hierarchy(&sorted)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Condition, Field, Operator, SortOrder, SortRule};
    use crate::store::TaskStore;

    #[test]
    fn test_view_mode_cycle_and_parse() {
        assert_eq!(ViewMode::Flat.next(), ViewMode::Contract);
        assert_eq!(ViewMode::Hierarchy.next(), ViewMode::Flat);
        assert_eq!("tree".parse::<ViewMode>().unwrap(), ViewMode::Hierarchy);
        assert_eq!(
            "cards".parse::<ViewMode>(),
            Err(SpecError::UnknownViewMode("cards".into()))
        );
    }

    #[test]
    fn test_default_view_is_all_records_in_store_order() {
        let store = TaskStore::sample();
        let result = compute(store.records(), &ActiveView::default());
        let ViewResult::Flat(tasks) = result else {
            panic!("expected flat result");
        };
        assert_eq!(tasks.len(), 30);
        assert_eq!(tasks[1].task_id, "T007");
    }

    #[test]
    fn test_high_criticality_by_open_tasks_desc() {
        let store = TaskStore::sample();
        let view = ActiveView {
            filter: FilterSpec::new(Condition::And).with(Field::Criticality, Operator::Is, "High"),
            sort: SortSpec::new(vec![SortRule::new(Field::OpenTasks, SortOrder::Desc)]),
            mode: ViewMode::Flat,
        };
        let tasks = compute(store.records(), &view).tasks();
        assert_eq!(tasks.len(), 13);
        assert_eq!(tasks[0].task_id, "T010");
        assert_eq!(tasks[0].open_tasks, 7);
    }

    #[test]
    fn test_grouped_modes_keep_filtered_count() {
        let store = TaskStore::sample();
        for mode in [ViewMode::Contract, ViewMode::Hierarchy] {
            let view = ActiveView {
                filter: FilterSpec::default().with(Field::Compliance, Operator::Is, "Pending"),
                sort: SortSpec::default(),
                mode,
            };
            let result = compute(store.records(), &view);
            assert!(matches!(result, ViewResult::Grouped(_)));
            assert_eq!(result.task_count(), 13);
        }
    }
}
