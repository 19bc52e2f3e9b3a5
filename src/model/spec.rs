use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::record::Field;

/// Error type for parsing filter, sort and view specifications
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpecError {
    #[error("unknown field '{0}' (try `tg fields`)")]
    UnknownField(String),
    #[error("malformed filter '{0}': expected FIELD:OPERATOR:VALUE")]
    MalformedPredicate(String),
    #[error("unknown sort order '{0}': expected asc or desc")]
    UnknownSortOrder(String),
    #[error("unknown view mode '{0}': expected flat, contract or hierarchy")]
    UnknownViewMode(String),
}

// ---------------------------------------------------------------------------
// Filter spec
// ---------------------------------------------------------------------------

/// How predicates are combined
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Condition {
    #[default]
    And,
    Or,
}

impl Condition {
    pub fn toggled(self) -> Condition {
        match self {
            Condition::And => Condition::Or,
            Condition::Or => Condition::And,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Condition::And => "AND",
            Condition::Or => "OR",
        }
    }
}

/// Comparison operator of a predicate.
///
/// Parsing never fails: names outside the known set are kept as `Unknown`
/// and impose no constraint when matched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Operator {
    Is,
    Contains,
    GreaterThan,
    LessThan,
    Unknown(String),
}

impl Operator {
    /// Operators offered for a field, first one is the default
    pub fn offered_for(field: Field) -> &'static [Operator] {
        if field.is_numeric_filter() {
            &[Operator::GreaterThan, Operator::LessThan, Operator::Is]
        } else {
            &[Operator::Is, Operator::Contains]
        }
    }

    pub fn default_for(field: Field) -> Operator {
        Operator::offered_for(field)[0].clone()
    }

    pub fn name(&self) -> &str {
        match self {
            Operator::Is => "is",
            Operator::Contains => "contains",
            Operator::GreaterThan => "greaterThan",
            Operator::LessThan => "lessThan",
            Operator::Unknown(name) => name,
        }
    }

    /// Human label, numeric `is` reads as "equals"
    pub fn label(&self, field: Option<Field>) -> &str {
        match self {
            Operator::Is if field.is_some_and(Field::is_numeric_filter) => "equals",
            Operator::Is => "is",
            Operator::Contains => "contains",
            Operator::GreaterThan => "greater than",
            Operator::LessThan => "less than",
            Operator::Unknown(name) => name,
        }
    }
}

impl From<&str> for Operator {
    fn from(name: &str) -> Self {
        match name.trim() {
            "is" | "eq" | "equals" => Operator::Is,
            "contains" => Operator::Contains,
            "greaterThan" | "gt" => Operator::GreaterThan,
            "lessThan" | "lt" => Operator::LessThan,
            other => Operator::Unknown(other.to_string()),
        }
    }
}

impl From<String> for Operator {
    fn from(name: String) -> Self {
        Operator::from(name.as_str())
    }
}

impl From<Operator> for String {
    fn from(op: Operator) -> Self {
        op.name().to_string()
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One field constraint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Predicate {
    pub operator: Operator,
    pub value: String,
}

/// A committed set of predicates, at most one per field, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    pub condition: Condition,
    pub filters: IndexMap<Field, Predicate>,
}

impl FilterSpec {
    pub fn new(condition: Condition) -> Self {
        FilterSpec {
            condition,
            filters: IndexMap::new(),
        }
    }

    /// Set the predicate for `field`. An existing predicate for the same
    /// field is overwritten in place; an empty value is dropped.
    pub fn insert(&mut self, field: Field, operator: Operator, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            return;
        }
        self.filters.insert(field, Predicate { operator, value });
    }

    /// Builder form of [`FilterSpec::insert`]
    pub fn with(mut self, field: Field, operator: Operator, value: impl Into<String>) -> Self {
        self.insert(field, operator, value);
        self
    }

    /// Predicates that take part in matching (empty values never do)
    pub fn active_predicates(&self) -> impl Iterator<Item = (Field, &Predicate)> {
        self.filters
            .iter()
            .filter(|(_, p)| !p.value.is_empty())
            .map(|(f, p)| (*f, p))
    }

    pub fn is_empty(&self) -> bool {
        self.active_predicates().next().is_none()
    }

    /// One-line description, e.g. `openTasks greaterThan 3 AND owner is Jane`
    pub fn summary(&self) -> String {
        let joiner = format!(" {} ", self.condition.label());
        self.active_predicates()
            .map(|(field, p)| format!("{} {} {}", field, p.operator, p.value))
            .collect::<Vec<_>>()
            .join(&joiner)
    }
}

/// Parse `FIELD:OPERATOR:VALUE`. The value keeps any further colons.
pub fn parse_predicate(input: &str) -> Result<(Field, Predicate), SpecError> {
    let mut parts = input.splitn(3, ':');
    let (Some(field), Some(op), Some(value)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(SpecError::MalformedPredicate(input.to_string()));
    };
    let field = Field::parse(field).ok_or_else(|| SpecError::UnknownField(field.to_string()))?;
    if op.trim().is_empty() {
        return Err(SpecError::MalformedPredicate(input.to_string()));
    }
    let operator = Operator::from(op);
    if let Operator::Unknown(name) = &operator {
        tracing::warn!(operator = %name, %field, "unknown operator, predicate imposes no constraint");
    }
    Ok((
        field,
        Predicate {
            operator,
            value: value.to_string(),
        },
    ))
}

// ---------------------------------------------------------------------------
// Sort spec
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn toggled(self) -> SortOrder {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl FromStr for SortOrder {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "asc" | "ascending" => Ok(SortOrder::Asc),
            "desc" | "descending" => Ok(SortOrder::Desc),
            other => Err(SpecError::UnknownSortOrder(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortRule {
    pub field: Field,
    pub order: SortOrder,
}

impl SortRule {
    pub fn new(field: Field, order: SortOrder) -> Self {
        SortRule { field, order }
    }
}

/// Ordered sort rules; the first rule is primary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SortSpec {
    pub rules: Vec<SortRule>,
}

impl SortSpec {
    pub fn new(rules: Vec<SortRule>) -> Self {
        SortSpec { rules }
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn summary(&self) -> String {
        self.rules
            .iter()
            .map(|r| format!("{} {}", r.field, r.order.name()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Parse `FIELD[:asc|desc]`
pub fn parse_sort_rule(input: &str) -> Result<SortRule, SpecError> {
    let (field, order) = match input.split_once(':') {
        Some((field, order)) => (field, order.parse()?),
        None => (input, SortOrder::Asc),
    };
    let field = Field::parse(field).ok_or_else(|| SpecError::UnknownField(field.to_string()))?;
    Ok(SortRule::new(field, order))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_parsing_is_total() {
        assert_eq!(Operator::from("is"), Operator::Is);
        assert_eq!(Operator::from("gt"), Operator::GreaterThan);
        assert_eq!(Operator::from("lessThan"), Operator::LessThan);
        assert_eq!(
            Operator::from("startsWith"),
            Operator::Unknown("startsWith".into())
        );
    }

    #[test]
    fn test_offered_operators() {
        assert_eq!(Operator::default_for(Field::OpenTasks), Operator::GreaterThan);
        assert_eq!(Operator::default_for(Field::Owner), Operator::Is);
        assert!(!Operator::offered_for(Field::OpenTasks).contains(&Operator::Contains));
        assert_eq!(Operator::Is.label(Some(Field::OpenTasks)), "equals");
        assert_eq!(Operator::Is.label(Some(Field::Owner)), "is");
    }

    #[test]
    fn test_insert_drops_empty_and_overwrites() {
        let mut spec = FilterSpec::default();
        spec.insert(Field::Owner, Operator::Is, "");
        assert!(spec.is_empty());

        spec.insert(Field::Owner, Operator::Is, "John Doe");
        spec.insert(Field::Category, Operator::Contains, "sec");
        spec.insert(Field::Owner, Operator::Contains, "jane");
        assert_eq!(spec.filters.len(), 2);
        // overwritten in place, keeps first position
        let (first_field, first) = spec.filters.get_index(0).unwrap();
        assert_eq!(*first_field, Field::Owner);
        assert_eq!(first.operator, Operator::Contains);
        assert_eq!(first.value, "jane");
    }

    #[test]
    fn test_empty_values_are_inactive_even_when_present() {
        let mut spec = FilterSpec::default();
        spec.filters.insert(
            Field::Owner,
            Predicate {
                operator: Operator::Is,
                value: String::new(),
            },
        );
        assert!(spec.is_empty());
        assert_eq!(spec.active_predicates().count(), 0);
    }

    #[test]
    fn test_parse_predicate() {
        let (field, pred) = parse_predicate("openTasks:gt:3").unwrap();
        assert_eq!(field, Field::OpenTasks);
        assert_eq!(pred.operator, Operator::GreaterThan);
        assert_eq!(pred.value, "3");

        let (_, pred) = parse_predicate("obligationTitle:contains:a:b").unwrap();
        assert_eq!(pred.value, "a:b");

        assert_eq!(
            parse_predicate("owner:is"),
            Err(SpecError::MalformedPredicate("owner:is".into()))
        );
        assert_eq!(
            parse_predicate("nope:is:x"),
            Err(SpecError::UnknownField("nope".into()))
        );
    }

    #[test]
    fn test_parse_sort_rule() {
        assert_eq!(
            parse_sort_rule("openTasks:desc").unwrap(),
            SortRule::new(Field::OpenTasks, SortOrder::Desc)
        );
        assert_eq!(
            parse_sort_rule("owner").unwrap(),
            SortRule::new(Field::Owner, SortOrder::Asc)
        );
        assert_eq!(
            parse_sort_rule("owner:sideways"),
            Err(SpecError::UnknownSortOrder("sideways".into()))
        );
    }

    #[test]
    fn test_summaries() {
        let spec = FilterSpec::new(Condition::Or)
            .with(Field::Criticality, Operator::Is, "High")
            .with(Field::OpenTasks, Operator::GreaterThan, "3");
        assert_eq!(spec.summary(), "criticality is High OR openTasks greaterThan 3");

        let sort = SortSpec::new(vec![
            SortRule::new(Field::Compliance, SortOrder::Desc),
            SortRule::new(Field::Owner, SortOrder::Asc),
        ]);
        assert_eq!(sort.summary(), "compliance desc, owner asc");
    }

    #[test]
    fn test_filter_spec_json_shape() {
        let spec = FilterSpec::default().with(Field::Criticality, Operator::Is, "High");
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["condition"], "AND");
        assert_eq!(json["filters"]["criticality"]["operator"], "is");
        assert_eq!(json["filters"]["criticality"]["value"], "High");
    }
}
