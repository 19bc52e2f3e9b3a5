use crate::model::{Condition, Field, FilterSpec, Operator};

use super::PanelState;

/// One editable row of the filter panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterRow {
    pub field: Option<Field>,
    pub operator: Operator,
    pub value: String,
}

impl FilterRow {
    pub fn empty() -> Self {
        FilterRow {
            field: None,
            operator: Operator::Is,
            value: String::new(),
        }
    }

    /// Operators the row offers, given its field
    pub fn offered_operators(&self) -> &'static [Operator] {
        match self.field {
            Some(field) => Operator::offered_for(field),
            None => Operator::offered_for(Field::TaskId),
        }
    }
}

/// Rows and combination mode being edited
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterDraft {
    pub rows: Vec<FilterRow>,
    pub condition: Condition,
}

impl Default for FilterDraft {
    fn default() -> Self {
        FilterDraft {
            rows: vec![FilterRow::empty()],
            condition: Condition::And,
        }
    }
}

impl FilterDraft {
    /// Seed a draft from a committed spec, one row per predicate
    pub fn from_spec(spec: &FilterSpec) -> Self {
        let rows: Vec<FilterRow> = spec
            .active_predicates()
            .map(|(field, p)| FilterRow {
                field: Some(field),
                operator: p.operator.clone(),
                value: p.value.clone(),
            })
            .collect();
        if rows.is_empty() {
            return FilterDraft::default();
        }
        FilterDraft {
            rows,
            condition: spec.condition,
        }
    }

    pub fn add_row(&mut self) {
        self.rows.push(FilterRow::empty());
    }

    pub fn remove_row(&mut self, index: usize) {
        if index < self.rows.len() {
            self.rows.remove(index);
        }
    }

    /// Pick a field. The operator resets to the field's default and the
    /// value is cleared.
    pub fn set_field(&mut self, index: usize, field: Field) {
        if let Some(row) = self.rows.get_mut(index) {
            row.field = Some(field);
            row.operator = Operator::default_for(field);
            row.value.clear();
        }
    }

    pub fn set_operator(&mut self, index: usize, operator: Operator) {
        if let Some(row) = self.rows.get_mut(index) {
            row.operator = operator;
        }
    }

    /// Step to the next operator the row's field offers
    pub fn cycle_operator(&mut self, index: usize) {
        if let Some(row) = self.rows.get_mut(index) {
            let offered = row.offered_operators();
            let next = match offered.iter().position(|op| *op == row.operator) {
                Some(pos) => offered[(pos + 1) % offered.len()].clone(),
                None => offered[0].clone(),
            };
            row.operator = next;
        }
    }

    pub fn set_value(&mut self, index: usize, value: impl Into<String>) {
        if let Some(row) = self.rows.get_mut(index) {
            row.value = value.into();
        }
    }

    pub fn set_condition(&mut self, condition: Condition) {
        self.condition = condition;
    }

    pub fn toggle_condition(&mut self) {
        self.condition = self.condition.toggled();
    }

    /// Back to a single empty row and AND
    pub fn clear_all(&mut self) {
        *self = FilterDraft::default();
    }

    /// The spec this draft commits to. Rows missing a field or a value are
    /// left out; a later row on the same field overwrites an earlier one.
    pub fn to_spec(&self) -> FilterSpec {
        let mut spec = FilterSpec::new(self.condition);
        for row in &self.rows {
            if let Some(field) = row.field {
                spec.insert(field, row.operator.clone(), row.value.clone());
            }
        }
        spec
    }
}

/// Filter panel: closed, or open with a draft
#[derive(Debug, Clone, Default)]
pub struct FilterPanel {
    state: PanelState<FilterDraft>,
}

impl FilterPanel {
    pub fn open(&mut self, active: &FilterSpec) {
        self.state = PanelState::Open(FilterDraft::from_spec(active));
    }

    /// Close without applying, discarding the draft
    pub fn close(&mut self) {
        self.state.take();
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn draft(&self) -> Option<&FilterDraft> {
        self.state.draft()
    }

    pub fn draft_mut(&mut self) -> Option<&mut FilterDraft> {
        self.state.draft_mut()
    }

    /// Commit the draft. The panel stays open; `None` when closed.
    pub fn apply(&self) -> Option<FilterSpec> {
        self.state.draft().map(FilterDraft::to_spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_empty_seeds_single_row() {
        let mut panel = FilterPanel::default();
        assert!(!panel.is_open());
        panel.open(&FilterSpec::default());
        let draft = panel.draft().unwrap();
        assert_eq!(draft.rows, vec![FilterRow::empty()]);
        assert_eq!(draft.condition, Condition::And);
    }

    #[test]
    fn test_open_seeds_from_active_spec() {
        let active = FilterSpec::new(Condition::Or)
            .with(Field::Owner, Operator::Contains, "doe")
            .with(Field::OpenTasks, Operator::GreaterThan, "2");
        let mut panel = FilterPanel::default();
        panel.open(&active);
        let draft = panel.draft().unwrap();
        assert_eq!(draft.rows.len(), 2);
        assert_eq!(draft.condition, Condition::Or);
        assert_eq!(draft.to_spec(), active);
    }

    #[test]
    fn test_set_field_resets_operator_and_value() {
        let mut draft = FilterDraft::default();
        draft.set_field(0, Field::Owner);
        draft.set_value(0, "Jane");
        draft.set_operator(0, Operator::Contains);

        draft.set_field(0, Field::OpenTasks);
        assert_eq!(draft.rows[0].operator, Operator::GreaterThan);
        assert_eq!(draft.rows[0].value, "");

        draft.set_field(0, Field::Category);
        assert_eq!(draft.rows[0].operator, Operator::Is);
    }

    #[test]
    fn test_cycle_operator_stays_within_offered_set() {
        let mut draft = FilterDraft::default();
        draft.set_field(0, Field::OpenTasks);
        draft.cycle_operator(0);
        assert_eq!(draft.rows[0].operator, Operator::LessThan);
        draft.cycle_operator(0);
        assert_eq!(draft.rows[0].operator, Operator::Is);
        draft.cycle_operator(0);
        assert_eq!(draft.rows[0].operator, Operator::GreaterThan);

        draft.set_field(0, Field::Owner);
        draft.cycle_operator(0);
        assert_eq!(draft.rows[0].operator, Operator::Contains);
        draft.cycle_operator(0);
        assert_eq!(draft.rows[0].operator, Operator::Is);
    }

    #[test]
    fn test_apply_drops_incomplete_rows_and_overwrites() {
        let mut panel = FilterPanel::default();
        panel.open(&FilterSpec::default());
        let draft = panel.draft_mut().unwrap();
        draft.set_field(0, Field::Owner);
        draft.set_value(0, "John Doe");
        draft.add_row(); // no field
        draft.set_value(1, "ignored");
        draft.add_row();
        draft.set_field(2, Field::Category); // no value
        draft.add_row();
        draft.set_field(3, Field::Owner);
        draft.set_operator(3, Operator::Contains);
        draft.set_value(3, "jane");

        let spec = panel.apply().unwrap();
        assert!(panel.is_open());
        assert_eq!(spec.filters.len(), 1);
        let pred = &spec.filters[&Field::Owner];
        assert_eq!(pred.operator, Operator::Contains);
        assert_eq!(pred.value, "jane");
    }

    #[test]
    fn test_clear_all_stays_open() {
        let mut panel = FilterPanel::default();
        panel.open(&FilterSpec::new(Condition::Or).with(Field::Owner, Operator::Is, "x"));
        panel.draft_mut().unwrap().clear_all();
        assert!(panel.is_open());
        assert_eq!(panel.draft().unwrap(), &FilterDraft::default());
    }

    #[test]
    fn test_close_discards_draft() {
        let active = FilterSpec::default().with(Field::Owner, Operator::Is, "John Doe");
        let mut panel = FilterPanel::default();
        panel.open(&active);
        panel.draft_mut().unwrap().set_value(0, "Someone");
        panel.close();
        assert!(panel.apply().is_none());

        panel.open(&active);
        assert_eq!(panel.draft().unwrap().rows[0].value, "John Doe");
    }

    #[test]
    fn test_removing_every_row_applies_empty_spec() {
        let mut panel = FilterPanel::default();
        panel.open(&FilterSpec::default());
        panel.draft_mut().unwrap().remove_row(0);
        panel.draft_mut().unwrap().remove_row(5);
        assert!(panel.draft().unwrap().rows.is_empty());
        assert!(panel.apply().unwrap().is_empty());
    }

    #[test]
    fn test_toggle_condition() {
        let mut draft = FilterDraft::default();
        draft.toggle_condition();
        assert_eq!(draft.condition, Condition::Or);
        draft.set_condition(Condition::And);
        assert_eq!(draft.to_spec().condition, Condition::And);
    }
}
