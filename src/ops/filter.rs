use crate::model::{Condition, Field, FieldValue, FilterSpec, Operator, Predicate, TaskRecord};

/// Apply a filter spec, keeping record order.
///
/// An empty spec is the identity. Otherwise each record is tested against
/// every active predicate and kept when they combine to true under the
/// spec's condition.
pub fn apply_filters<'a>(records: &[&'a TaskRecord], spec: &FilterSpec) -> Vec<&'a TaskRecord> {
    if spec.is_empty() {
        return records.to_vec();
    }
    tracing::debug!(filter = %spec.summary(), "applying filters");
    records
        .iter()
        .copied()
        .filter(|record| record_matches(record, spec))
        .collect()
}

/// Whether a single record passes the spec. Zero active predicates pass
/// under both AND and OR.
pub fn record_matches(record: &TaskRecord, spec: &FilterSpec) -> bool {
    let mut predicates = spec.active_predicates().peekable();
    if predicates.peek().is_none() {
        return true;
    }
    match spec.condition {
        Condition::And => predicates.all(|(field, p)| predicate_matches(record, field, p)),
        Condition::Or => predicates.any(|(field, p)| predicate_matches(record, field, p)),
    }
}

/// Evaluate one predicate. Type mismatches evaluate to false, unknown
/// operators to true.
pub fn predicate_matches(record: &TaskRecord, field: Field, predicate: &Predicate) -> bool {
    let actual = record.value(field);
    let expected = predicate.value.as_str();
    match &predicate.operator {
        Operator::Is => match actual {
            FieldValue::Text(s) => s == expected,
            FieldValue::Number(n) => {
                n.to_string() == expected || parse_number(expected) == Some(f64::from(n))
            }
        },
        Operator::Contains => match actual {
            FieldValue::Text(s) => s.to_lowercase().contains(&expected.to_lowercase()),
            FieldValue::Number(_) => false,
        },
        Operator::GreaterThan => match (actual, parse_number(expected)) {
            (FieldValue::Number(n), Some(v)) => f64::from(n) > v,
            _ => false,
        },
        Operator::LessThan => match (actual, parse_number(expected)) {
            (FieldValue::Number(n), Some(v)) => f64::from(n) < v,
            _ => false,
        },
        Operator::Unknown(_) => true,
    }
}

/// Decimal number in a filter value, surrounding whitespace ignored
fn parse_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}
