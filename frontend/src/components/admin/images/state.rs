//! Image set manager state: the cached filename list, the delete-selection,
//! and the file picked for upload. The filename list is replaced wholesale
//! after every fetch; the selection only keeps names that still exist.

use yew::NodeRef;

use crate::error::UiError;

pub struct ImageManagerComponent {
    pub images: Vec<String>,
    /// Filenames checked for deletion, in click order.
    pub selection: Vec<String>,
    /// File picked in the upload input, if any.
    pub pending_file: Option<web_sys::File>,
    /// Reference to the upload `<input type="file">`, cleared after a
    /// successful mutation so the displayed filename matches the state.
    pub file_input_ref: NodeRef,
    pub busy: bool,
    pub error: Option<String>,
    pub loaded: bool,
}

impl ImageManagerComponent {
    pub fn new() -> Self {
        Self {
            images: Vec::new(),
            selection: Vec::new(),
            pending_file: None,
            file_input_ref: NodeRef::default(),
            busy: false,
            error: None,
            loaded: false,
        }
    }

    pub fn replace_images(&mut self, images: Vec<String>) {
        self.images = images;
        self.selection.retain(|name| self.images.contains(name));
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selection.iter().any(|n| n == name)
    }

    pub fn toggle(&mut self, name: &str) {
        if self.is_selected(name) {
            self.selection.retain(|n| n != name);
        } else {
            self.selection.push(name.to_string());
        }
    }

    /// Upload requires a picked file; refused locally otherwise.
    pub fn validate_upload(&self) -> Result<web_sys::File, UiError> {
        self.pending_file
            .clone()
            .ok_or_else(|| UiError::Validation("Select an image to upload".to_string()))
    }

    /// Deletion requires a non-empty selection; refused locally otherwise.
    pub fn validate_delete(&self) -> Result<Vec<String>, UiError> {
        if self.selection.is_empty() {
            return Err(UiError::Validation("Select images to delete".to_string()));
        }
        Ok(self.selection.clone())
    }

    /// Resets the mutation inputs after a confirmed upload or deletion.
    /// The next upload needs a freshly picked file; the caller also clears
    /// the DOM file input so it does not keep showing the old filename.
    pub fn finish_mutation(&mut self) {
        self.selection.clear();
        self.pending_file = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn toggle_adds_and_removes_from_selection() {
        let mut manager = ImageManagerComponent::new();
        manager.replace_images(names(&["a.png", "b.png"]));

        manager.toggle("a.png");
        assert!(manager.is_selected("a.png"));

        manager.toggle("b.png");
        assert_eq!(manager.selection, names(&["a.png", "b.png"]));

        manager.toggle("a.png");
        assert_eq!(manager.selection, names(&["b.png"]));
    }

    #[test]
    fn delete_with_empty_selection_is_refused() {
        let manager = ImageManagerComponent::new();
        assert!(matches!(
            manager.validate_delete(),
            Err(UiError::Validation(_))
        ));
    }

    #[test]
    fn upload_without_a_file_is_refused() {
        let manager = ImageManagerComponent::new();
        assert!(matches!(
            manager.validate_upload(),
            Err(UiError::Validation(_))
        ));
    }

    #[test]
    fn finished_mutation_requires_a_fresh_file_pick() {
        let mut manager = ImageManagerComponent::new();
        manager.replace_images(names(&["a.png", "b.png"]));
        manager.toggle("a.png");

        manager.finish_mutation();
        assert!(manager.selection.is_empty());
        assert!(manager.pending_file.is_none());
        // A second upload without re-picking a file is refused.
        assert!(matches!(
            manager.validate_upload(),
            Err(UiError::Validation(_))
        ));
    }

    #[test]
    fn refetch_drops_vanished_names_from_selection() {
        let mut manager = ImageManagerComponent::new();
        manager.replace_images(names(&["a.png", "b.png"]));
        manager.toggle("a.png");
        manager.toggle("b.png");

        manager.replace_images(names(&["b.png"]));
        assert_eq!(manager.selection, names(&["b.png"]));
    }
}
