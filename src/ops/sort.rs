use std::cmp::Ordering;

use feruca::{Collator, Locale, Tailoring};

use crate::model::{Field, FieldValue, SortOrder, SortSpec, TaskRecord};

/// Stable sort by the spec's rules in precedence order. An empty spec
/// leaves the input order untouched.
pub fn apply_sort<'a>(records: &[&'a TaskRecord], spec: &SortSpec) -> Vec<&'a TaskRecord> {
    let mut sorted = records.to_vec();
    if spec.is_empty() {
        return sorted;
    }
    tracing::debug!(sort = %spec.summary(), "applying sort");
    let mut collator = text_collator();
    sorted.sort_by(|a, b| compare_records(a, b, spec, &mut collator));
    sorted
}

/// Root-locale collator. Spaces and punctuation keep their weight so
/// `Ann Lee` sorts before `Anna Bell`.
pub fn text_collator() -> Collator {
    Collator::new(Tailoring::Cldr(Locale::Root), false, true)
}

/// Composite comparator: the first rule whose values differ decides.
pub fn compare_records(
    a: &TaskRecord,
    b: &TaskRecord,
    spec: &SortSpec,
    collator: &mut Collator,
) -> Ordering {
    for rule in &spec.rules {
        let ord = compare_field(a, b, rule.field, collator);
        let ord = match rule.order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    Ordering::Equal
}

/// Ascending comparison of one field
pub fn compare_field(
    a: &TaskRecord,
    b: &TaskRecord,
    field: Field,
    collator: &mut Collator,
) -> Ordering {
    if field.is_numeric_sort() {
        compare_digits(
            sort_digits(a.value(field)).as_deref(),
            sort_digits(b.value(field)).as_deref(),
        )
    } else {
        // lowercase first so values differing only in case tie
        let a = a.value(field).as_string().to_lowercase();
        let b = b.value(field).as_string().to_lowercase();
        collator.collate(a.as_str(), b.as_str())
    }
}

/// Numeric sort key as a digit string without leading zeros. Identifiers
/// keep only their digits (`T010` -> `10`); a value without digits has no
/// key and sorts first.
fn sort_digits(value: FieldValue<'_>) -> Option<String> {
    let digits: String = match value {
        FieldValue::Number(n) => n.to_string(),
        FieldValue::Text(s) => s.chars().filter(char::is_ascii_digit).collect(),
    };
    if digits.is_empty() {
        return None;
    }
    Some(digits.trim_start_matches('0').to_string())
}

/// Orders digit strings by magnitude without parsing, so ids of any
/// length compare correctly.
fn compare_digits(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
    }
}
