use crate::model::{Field, SortOrder, SortRule, SortSpec};

use super::PanelState;

/// One editable rule of the sort panel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortRow {
    pub field: Option<Field>,
    pub order: SortOrder,
}

/// Rules being edited, top row is primary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortDraft {
    pub rows: Vec<SortRow>,
}

impl Default for SortDraft {
    fn default() -> Self {
        SortDraft {
            rows: vec![SortRow::default()],
        }
    }
}

impl SortDraft {
    pub fn from_spec(spec: &SortSpec) -> Self {
        if spec.is_empty() {
            return SortDraft::default();
        }
        SortDraft {
            rows: spec
                .rules
                .iter()
                .map(|r| SortRow {
                    field: Some(r.field),
                    order: r.order,
                })
                .collect(),
        }
    }

    pub fn add_rule(&mut self) {
        self.rows.push(SortRow::default());
    }

    /// Remove a rule. Removing the only rule leaves a single empty one.
    pub fn remove_rule(&mut self, index: usize) {
        if index >= self.rows.len() {
            return;
        }
        self.rows.remove(index);
        if self.rows.is_empty() {
            self.rows.push(SortRow::default());
        }
    }

    pub fn set_field(&mut self, index: usize, field: Field) {
        if let Some(row) = self.rows.get_mut(index) {
            row.field = Some(field);
        }
    }

    pub fn set_order(&mut self, index: usize, order: SortOrder) {
        if let Some(row) = self.rows.get_mut(index) {
            row.order = order;
        }
    }

    pub fn toggle_order(&mut self, index: usize) {
        if let Some(row) = self.rows.get_mut(index) {
            row.order = row.order.toggled();
        }
    }

    /// Drag-reorder: take the rule at `from` and insert it at `to`.
    pub fn move_rule(&mut self, from: usize, to: usize) {
        if from >= self.rows.len() || to >= self.rows.len() || from == to {
            return;
        }
        let row = self.rows.remove(from);
        self.rows.insert(to, row);
    }

    pub fn clear_all(&mut self) {
        *self = SortDraft::default();
    }

    /// Rules with a field, in row order
    pub fn to_spec(&self) -> SortSpec {
        SortSpec::new(
            self.rows
                .iter()
                .filter_map(|row| row.field.map(|f| SortRule::new(f, row.order)))
                .collect(),
        )
    }
}

/// Label for a direction, worded by field kind
pub fn order_label(field: Option<Field>, order: SortOrder) -> &'static str {
    let numeric = field.is_some_and(Field::is_numeric_sort);
    match (numeric, order) {
        (true, SortOrder::Asc) => "Ascending",
        (true, SortOrder::Desc) => "Descending",
        (false, SortOrder::Asc) => "A to Z",
        (false, SortOrder::Desc) => "Z to A",
    }
}

/// Sort panel: closed, or open with a draft
#[derive(Debug, Clone, Default)]
pub struct SortPanel {
    state: PanelState<SortDraft>,
}

impl SortPanel {
    pub fn open(&mut self, active: &SortSpec) {
        self.state = PanelState::Open(SortDraft::from_spec(active));
    }

    /// Close without applying, discarding the draft
    pub fn close(&mut self) {
        self.state.take();
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn draft(&self) -> Option<&SortDraft> {
        self.state.draft()
    }

    pub fn draft_mut(&mut self) -> Option<&mut SortDraft> {
        self.state.draft_mut()
    }

    /// Commit the draft and close the panel
    pub fn apply(&mut self) -> Option<SortSpec> {
        self.state.take().map(|draft| draft.to_spec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(field: Field, order: SortOrder) -> SortRule {
        SortRule::new(field, order)
    }

    #[test]
    fn test_open_seeds_rules() {
        let mut panel = SortPanel::default();
        panel.open(&SortSpec::default());
        assert_eq!(panel.draft().unwrap().rows, vec![SortRow::default()]);

        let active = SortSpec::new(vec![rule(Field::Owner, SortOrder::Desc)]);
        panel.open(&active);
        assert_eq!(panel.draft().unwrap().to_spec(), active);
    }

    #[test]
    fn test_removing_last_rule_resets_to_empty_rule() {
        let mut draft = SortDraft::default();
        draft.set_field(0, Field::Owner);
        draft.remove_rule(0);
        assert_eq!(draft.rows, vec![SortRow::default()]);
    }

    #[test]
    fn test_move_rule_changes_precedence() {
        let mut draft = SortDraft::default();
        draft.set_field(0, Field::Compliance);
        draft.add_rule();
        draft.set_field(1, Field::Owner);
        draft.add_rule();
        draft.set_field(2, Field::TaskId);

        draft.move_rule(2, 0);
        let fields: Vec<Field> = draft.to_spec().rules.iter().map(|r| r.field).collect();
        assert_eq!(fields, vec![Field::TaskId, Field::Compliance, Field::Owner]);

        draft.move_rule(0, 9);
        draft.move_rule(7, 0);
        let fields: Vec<Field> = draft.to_spec().rules.iter().map(|r| r.field).collect();
        assert_eq!(fields, vec![Field::TaskId, Field::Compliance, Field::Owner]);
    }

    #[test]
    fn test_apply_skips_empty_rules_and_closes() {
        let mut panel = SortPanel::default();
        panel.open(&SortSpec::default());
        let draft = panel.draft_mut().unwrap();
        draft.add_rule();
        draft.set_field(1, Field::OpenTasks);
        draft.toggle_order(1);

        let spec = panel.apply().unwrap();
        assert!(!panel.is_open());
        assert_eq!(spec.rules, vec![rule(Field::OpenTasks, SortOrder::Desc)]);
        assert!(panel.apply().is_none());
    }

    #[test]
    fn test_close_discards() {
        let mut panel = SortPanel::default();
        panel.open(&SortSpec::default());
        panel.draft_mut().unwrap().set_field(0, Field::Owner);
        panel.close();
        assert!(!panel.is_open());
        panel.open(&SortSpec::default());
        assert_eq!(panel.draft().unwrap().rows[0].field, None);
    }

    #[test]
    fn test_clear_all() {
        let mut draft = SortDraft::from_spec(&SortSpec::new(vec![
            rule(Field::Owner, SortOrder::Asc),
            rule(Field::TaskId, SortOrder::Desc),
        ]));
        draft.clear_all();
        assert_eq!(draft, SortDraft::default());
        assert!(draft.to_spec().is_empty());
    }

    #[test]
    fn test_order_labels() {
        assert_eq!(order_label(Some(Field::TaskId), SortOrder::Asc), "Ascending");
        assert_eq!(order_label(Some(Field::OpenTasks), SortOrder::Desc), "Descending");
        assert_eq!(order_label(Some(Field::Owner), SortOrder::Asc), "A to Z");
        assert_eq!(order_label(None, SortOrder::Desc), "Z to A");
    }
}
