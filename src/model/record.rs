use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity label of an obligation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Criticality {
    High,
    Medium,
    Low,
}

impl Criticality {
    pub fn label(self) -> &'static str {
        match self {
            Criticality::High => "High",
            Criticality::Medium => "Medium",
            Criticality::Low => "Low",
        }
    }
}

impl fmt::Display for Criticality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Compliance status of an obligation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Compliance {
    Compliant,
    #[serde(rename = "Non-Compliant")]
    NonCompliant,
    Pending,
}

impl Compliance {
    pub fn label(self) -> &'static str {
        match self {
            Compliance::Compliant => "Compliant",
            Compliance::NonCompliant => "Non-Compliant",
            Compliance::Pending => "Pending",
        }
    }
}

impl fmt::Display for Compliance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One compliance-obligation row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    pub task_id: String,
    pub contract_id: String,
    pub obligation_title: String,
    pub category: String,
    pub domain: String,
    pub subdomain: String,
    pub criticality: Criticality,
    pub owner: String,
    pub triggered_tasks: u32,
    pub open_tasks: u32,
    pub compliance: Compliance,
}

/// A field value as seen by the filter and sort engines.
///
/// Only the two task counters are numeric at runtime; every other field,
/// including the enumerated labels, is text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(u32),
}

impl FieldValue<'_> {
    /// The value rendered as a string, the way it would be compared by `is`.
    pub fn as_string(&self) -> String {
        match self {
            FieldValue::Text(s) => (*s).to_string(),
            FieldValue::Number(n) => n.to_string(),
        }
    }
}

/// Every field a filter or sort rule can address, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    TaskId,
    ContractId,
    ObligationTitle,
    Category,
    Domain,
    Subdomain,
    Criticality,
    Owner,
    TriggeredTasks,
    OpenTasks,
    Compliance,
}

impl Field {
    pub const ALL: [Field; 11] = [
        Field::TaskId,
        Field::ContractId,
        Field::ObligationTitle,
        Field::Category,
        Field::Domain,
        Field::Subdomain,
        Field::Criticality,
        Field::Owner,
        Field::TriggeredTasks,
        Field::OpenTasks,
        Field::Compliance,
    ];

    /// Parse a field name. Accepts the camelCase name and its snake_case alias.
    pub fn parse(name: &str) -> Option<Field> {
        let field = match name.trim() {
            "taskId" | "task_id" => Field::TaskId,
            "contractId" | "contract_id" => Field::ContractId,
            "obligationTitle" | "obligation_title" => Field::ObligationTitle,
            "category" => Field::Category,
            "domain" => Field::Domain,
            "subdomain" => Field::Subdomain,
            "criticality" => Field::Criticality,
            "owner" => Field::Owner,
            "triggeredTasks" | "triggered_tasks" => Field::TriggeredTasks,
            "openTasks" | "open_tasks" => Field::OpenTasks,
            "compliance" => Field::Compliance,
            _ => return None,
        };
        Some(field)
    }

    /// Canonical (camelCase) name
    pub fn name(self) -> &'static str {
        match self {
            Field::TaskId => "taskId",
            Field::ContractId => "contractId",
            Field::ObligationTitle => "obligationTitle",
            Field::Category => "category",
            Field::Domain => "domain",
            Field::Subdomain => "subdomain",
            Field::Criticality => "criticality",
            Field::Owner => "owner",
            Field::TriggeredTasks => "triggeredTasks",
            Field::OpenTasks => "openTasks",
            Field::Compliance => "compliance",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::TaskId => "Task ID",
            Field::ContractId => "Contract ID",
            Field::ObligationTitle => "Obligation Title",
            Field::Category => "Category",
            Field::Domain => "Domain",
            Field::Subdomain => "Subdomain",
            Field::Criticality => "Criticality",
            Field::Owner => "Owner",
            Field::TriggeredTasks => "Triggered Tasks",
            Field::OpenTasks => "Open Tasks",
            Field::Compliance => "Compliance",
        }
    }

    /// Fields whose runtime value is a number (the filter panel offers
    /// numeric operators for these).
    pub fn is_numeric_filter(self) -> bool {
        matches!(self, Field::TriggeredTasks | Field::OpenTasks)
    }

    /// Fields compared numerically when sorting. The two identifiers are
    /// included: their digits are extracted before comparison.
    pub fn is_numeric_sort(self) -> bool {
        matches!(
            self,
            Field::TaskId | Field::ContractId | Field::TriggeredTasks | Field::OpenTasks
        )
    }

    /// Next field in display order, wrapping around
    pub fn next(self) -> Field {
        let idx = Field::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Field::ALL[(idx + 1) % Field::ALL.len()]
    }

    /// Previous field in display order, wrapping around
    pub fn prev(self) -> Field {
        let idx = Field::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Field::ALL[(idx + Field::ALL.len() - 1) % Field::ALL.len()]
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TaskRecord {
    /// Typed accessor for a field
    pub fn value(&self, field: Field) -> FieldValue<'_> {
        match field {
            Field::TaskId => FieldValue::Text(&self.task_id),
            Field::ContractId => FieldValue::Text(&self.contract_id),
            Field::ObligationTitle => FieldValue::Text(&self.obligation_title),
            Field::Category => FieldValue::Text(&self.category),
            Field::Domain => FieldValue::Text(&self.domain),
            Field::Subdomain => FieldValue::Text(&self.subdomain),
            Field::Criticality => FieldValue::Text(self.criticality.label()),
            Field::Owner => FieldValue::Text(&self.owner),
            Field::TriggeredTasks => FieldValue::Number(self.triggered_tasks),
            Field::OpenTasks => FieldValue::Number(self.open_tasks),
            Field::Compliance => FieldValue::Text(self.compliance.label()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> TaskRecord {
        TaskRecord {
            task_id: "T001".into(),
            contract_id: "C001".into(),
            obligation_title: "Review Security Protocols".into(),
            category: "Security".into(),
            domain: "IT".into(),
            subdomain: "Cybersecurity".into(),
            criticality: Criticality::High,
            owner: "John Doe".into(),
            triggered_tasks: 5,
            open_tasks: 3,
            compliance: Compliance::NonCompliant,
        }
    }

    #[test]
    fn test_parse_accepts_both_spellings() {
        assert_eq!(Field::parse("openTasks"), Some(Field::OpenTasks));
        assert_eq!(Field::parse("open_tasks"), Some(Field::OpenTasks));
        assert_eq!(Field::parse("taskId"), Some(Field::TaskId));
        assert_eq!(Field::parse("priority"), None);
        assert_eq!(Field::parse(""), None);
    }

    #[test]
    fn test_name_round_trips_through_parse() {
        for field in Field::ALL {
            assert_eq!(Field::parse(field.name()), Some(field));
        }
    }

    #[test]
    fn test_numeric_field_sets_differ() {
        assert!(Field::TaskId.is_numeric_sort());
        assert!(!Field::TaskId.is_numeric_filter());
        assert!(Field::OpenTasks.is_numeric_sort());
        assert!(Field::OpenTasks.is_numeric_filter());
        assert!(!Field::Owner.is_numeric_sort());
    }

    #[test]
    fn test_value_accessor() {
        let r = record();
        assert_eq!(r.value(Field::Owner), FieldValue::Text("John Doe"));
        assert_eq!(r.value(Field::OpenTasks), FieldValue::Number(3));
        assert_eq!(r.value(Field::Compliance), FieldValue::Text("Non-Compliant"));
        assert_eq!(r.value(Field::TaskId), FieldValue::Text("T001"));
    }

    #[test]
    fn test_next_prev_wrap() {
        assert_eq!(Field::Compliance.next(), Field::TaskId);
        assert_eq!(Field::TaskId.prev(), Field::Compliance);
        assert_eq!(Field::TaskId.next(), Field::ContractId);
    }

    #[test]
    fn test_serializes_camel_case_with_labels() {
        let json = serde_json::to_value(record()).unwrap();
        assert_eq!(json["taskId"], "T001");
        assert_eq!(json["openTasks"], 3);
        assert_eq!(json["compliance"], "Non-Compliant");
        assert_eq!(json["criticality"], "High");
    }
}
