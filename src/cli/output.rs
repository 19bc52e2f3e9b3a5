use serde::Serialize;

use crate::model::{Field, FilterSpec, Operator, SortSpec, TaskRecord};
use crate::ops::group::{GroupContent, GroupLevel, GroupNode};
use crate::ops::view::{ViewMode, ViewResult};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListJson<'a> {
    pub view: ViewMode,
    pub filter: &'a FilterSpec,
    pub sort: &'a SortSpec,
    pub count: usize,
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<&'a TaskRecord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<GroupJson<'a>>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupJson<'a> {
    pub level: &'static str,
    pub key: String,
    pub task_count: usize,
    pub open_tasks: u64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<GroupJson<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tasks: Vec<&'a TaskRecord>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldJson {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: &'static str,
    pub numeric_sort: bool,
    pub operators: Vec<String>,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

fn level_name(level: GroupLevel) -> &'static str {
    match level {
        GroupLevel::Contract => "contract",
        GroupLevel::Category => "category",
        GroupLevel::Subdomain => "subdomain",
    }
}

pub fn group_to_json<'a>(node: &GroupNode<'a>) -> GroupJson<'a> {
    let (groups, tasks) = match &node.content {
        GroupContent::Groups(groups) => (groups.iter().map(group_to_json).collect(), Vec::new()),
        GroupContent::Tasks(tasks) => (Vec::new(), tasks.clone()),
    };
    GroupJson {
        level: level_name(node.level),
        key: node.key.clone(),
        task_count: node.task_count(),
        open_tasks: node.open_tasks(),
        groups,
        tasks,
    }
}

pub fn list_to_json<'a>(
    mode: ViewMode,
    filter: &'a FilterSpec,
    sort: &'a SortSpec,
    result: &ViewResult<'a>,
    total: usize,
) -> ListJson<'a> {
    let (tasks, groups) = match result {
        ViewResult::Flat(tasks) => (Some(tasks.clone()), None),
        ViewResult::Grouped(groups) => (None, Some(groups.iter().map(group_to_json).collect())),
    };
    ListJson {
        view: mode,
        filter,
        sort,
        count: result.task_count(),
        total,
        tasks,
        groups,
    }
}

pub fn field_to_json(field: Field) -> FieldJson {
    FieldJson {
        name: field.name(),
        label: field.label(),
        kind: field_kind(field),
        numeric_sort: field.is_numeric_sort(),
        operators: Operator::offered_for(field)
            .iter()
            .map(|op| op.name().to_string())
            .collect(),
    }
}

fn field_kind(field: Field) -> &'static str {
    if field.is_numeric_filter() {
        "number"
    } else {
        "text"
    }
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

/// Format a single task as a one-line summary
pub fn format_task_line(task: &TaskRecord) -> String {
    format!(
        "{}  {}  {:<6}  {:<13}  {}/{}  {} ({})",
        task.task_id,
        task.contract_id,
        task.criticality.label(),
        task.compliance.label(),
        task.open_tasks,
        task.triggered_tasks,
        task.obligation_title,
        task.owner
    )
}

fn plural_tasks(n: usize) -> String {
    if n == 1 {
        "1 task".to_string()
    } else {
        format!("{} tasks", n)
    }
}

/// Format a group and everything below it, indented two spaces per level
pub fn format_group_tree(node: &GroupNode, indent: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let prefix = "  ".repeat(indent);
    lines.push(format!(
        "{}{}: {} ({})",
        prefix,
        node.level.label(),
        node.key,
        plural_tasks(node.task_count())
    ));
    match &node.content {
        GroupContent::Groups(groups) => {
            for g in groups {
                lines.extend(format_group_tree(g, indent + 1));
            }
        }
        GroupContent::Tasks(tasks) => {
            let task_prefix = "  ".repeat(indent + 1);
            for t in tasks {
                lines.push(format!("{}{}", task_prefix, format_task_line(t)));
            }
        }
    }
    lines
}

/// Format a pipeline result followed by a count line
pub fn format_view(result: &ViewResult, total: usize) -> Vec<String> {
    let mut lines = Vec::new();
    match result {
        ViewResult::Flat(tasks) => {
            for t in tasks {
                lines.push(format_task_line(t));
            }
        }
        ViewResult::Grouped(groups) => {
            for g in groups {
                lines.extend(format_group_tree(g, 0));
            }
        }
    }
    if !lines.is_empty() {
        lines.push(String::new());
    }
    lines.push(format!("{} of {}", result.task_count(), plural_tasks(total)));
    lines
}

/// Format every field of a task, one per line
pub fn format_task_detail(task: &TaskRecord) -> Vec<String> {
    Field::ALL
        .iter()
        .map(|&field| {
            format!(
                "{:<18}{}",
                format!("{}:", field.label()),
                task.value(field).as_string()
            )
        })
        .collect()
}

/// Format the field table for `tg fields`
pub fn format_field_table() -> Vec<String> {
    Field::ALL
        .iter()
        .map(|&field| {
            let ops: Vec<&str> = Operator::offered_for(field).iter().map(|op| op.name()).collect();
            format!(
                "{:<16}{:<18}{:<8}{}",
                field.name(),
                field.label(),
                field_kind(field),
                ops.join(", ")
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::group::group_by_hierarchy;
    use crate::store::TaskStore;
    use insta::assert_snapshot;

    #[test]
    fn test_format_task_line() {
        let store = TaskStore::sample();
        let line = format_task_line(store.find("T001").unwrap());
        assert_snapshot!(line, @"T001  C001  High    Pending        3/5  Review Security Protocols (John Doe)");
    }

    #[test]
    fn test_format_task_detail() {
        let store = TaskStore::sample();
        let lines = format_task_detail(store.find("T009").unwrap());
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "Task ID:          T009");
        assert_eq!(lines[2], "Obligation Title: Inventory Management Review");
        assert_eq!(lines[9], "Open Tasks:       3");
    }

    #[test]
    fn test_format_group_tree() {
        let store = TaskStore::sample();
        let records: Vec<&TaskRecord> = store.records().iter().take(3).collect();
        let groups = group_by_hierarchy(&records);
        let lines = format_group_tree(&groups[0], 0);
        assert_eq!(lines[0], "Contract: C001 (3 tasks)");
        assert_eq!(lines[1], "  Category: Security (3 tasks)");
        assert_eq!(lines[2], "    Subdomain: Cybersecurity (1 task)");
        assert!(lines[3].starts_with("      T001  C001"));
        assert_eq!(lines.len(), 8);
    }

    #[test]
    fn test_format_view_count_line() {
        let result = ViewResult::Flat(Vec::new());
        assert_eq!(format_view(&result, 30), vec!["0 of 30 tasks"]);
    }

    #[test]
    fn test_group_json_shape() {
        let store = TaskStore::sample();
        let records: Vec<&TaskRecord> = store.records().iter().take(3).collect();
        let groups = group_by_hierarchy(&records);
        let json = serde_json::to_value(group_to_json(&groups[0])).unwrap();
        assert_eq!(json["level"], "contract");
        assert_eq!(json["taskCount"], 3);
        assert_eq!(json["openTasks"], 6);
        assert!(json.get("tasks").is_none());
        let sub = &json["groups"][0]["groups"][0];
        assert_eq!(sub["key"], "Cybersecurity");
        assert_eq!(sub["tasks"][0]["taskId"], "T001");
    }

    #[test]
    fn test_field_table() {
        let lines = format_field_table();
        assert_eq!(lines.len(), 11);
        assert!(lines[9].starts_with("openTasks       Open Tasks        number  greaterThan"));
    }
}
