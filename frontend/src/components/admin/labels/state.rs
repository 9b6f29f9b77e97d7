//! Label vocabulary manager state. Mirrors the server's label list and the
//! transient per-label `selected` checkmarks used for bulk deletion. The
//! mirror is replaced wholesale after every fetch, which also resets all
//! checkmarks (`selected` never comes over the wire).

use common::model::label::Label;

use crate::error::UiError;

pub struct LabelManagerComponent {
    pub labels: Vec<Label>,
    pub new_label: String,
    pub busy: bool,
    pub error: Option<String>,
    pub loaded: bool,
}

impl LabelManagerComponent {
    pub fn new() -> Self {
        Self {
            labels: Vec::new(),
            new_label: String::new(),
            busy: false,
            error: None,
            loaded: false,
        }
    }

    pub fn replace_labels(&mut self, labels: Vec<Label>) {
        self.labels = labels;
    }

    /// Flips the bulk-delete checkmark on exactly one label.
    pub fn toggle(&mut self, id: &str) {
        for label in &mut self.labels {
            if label.id == id {
                label.selected = !label.selected;
            }
        }
    }

    pub fn selected_ids(&self) -> Vec<String> {
        self.labels
            .iter()
            .filter(|label| label.selected)
            .map(|label| label.id.clone())
            .collect()
    }

    /// A new label must have non-empty text.
    pub fn validate_add(&self) -> Result<String, UiError> {
        let text = self.new_label.trim();
        if text.is_empty() {
            return Err(UiError::Validation("Enter a label text".to_string()));
        }
        Ok(text.to_string())
    }

    /// Bulk delete requires at least one checked label; an empty selection
    /// is refused before any request is made.
    pub fn validate_delete(&self) -> Result<Vec<String>, UiError> {
        let ids = self.selected_ids();
        if ids.is_empty() {
            return Err(UiError::Validation("Select labels to delete".to_string()));
        }
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(id: &str, text: &str) -> Label {
        Label {
            id: id.to_string(),
            text: text.to_string(),
            selected: false,
        }
    }

    #[test]
    fn toggle_flips_exactly_one_label() {
        let mut manager = LabelManagerComponent::new();
        manager.replace_labels(vec![label("1", "cyst"), label("2", "nodule")]);

        manager.toggle("1");
        assert!(manager.labels[0].selected);
        assert!(!manager.labels[1].selected);
        assert_eq!(manager.selected_ids(), vec!["1"]);

        manager.toggle("1");
        assert!(manager.selected_ids().is_empty());
    }

    #[test]
    fn delete_with_empty_selection_is_refused() {
        let mut manager = LabelManagerComponent::new();
        manager.replace_labels(vec![label("1", "cyst")]);
        assert!(matches!(
            manager.validate_delete(),
            Err(UiError::Validation(_))
        ));

        manager.toggle("1");
        assert_eq!(manager.validate_delete().unwrap(), vec!["1"]);
    }

    #[test]
    fn add_requires_non_blank_text() {
        let mut manager = LabelManagerComponent::new();
        assert!(matches!(manager.validate_add(), Err(UiError::Validation(_))));

        manager.new_label = "  ".to_string();
        assert!(matches!(manager.validate_add(), Err(UiError::Validation(_))));

        manager.new_label = " cyst ".to_string();
        assert_eq!(manager.validate_add().unwrap(), "cyst");
    }

    #[test]
    fn refetch_resets_checkmarks() {
        let mut manager = LabelManagerComponent::new();
        manager.replace_labels(vec![label("1", "cyst")]);
        manager.toggle("1");

        // The wire format never carries `selected`, so a fresh snapshot
        // always arrives unchecked.
        manager.replace_labels(vec![label("1", "cyst")]);
        assert!(manager.selected_ids().is_empty());
    }
}
