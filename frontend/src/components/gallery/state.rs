//! Gallery state: the local mirror of the server-owned collections plus the
//! per-image staging area for label association.
//!
//! The cached `images` and `labels` are point-in-time snapshots, replaced
//! wholesale after every successful fetch, never merged. Staged label texts
//! are ephemeral UI state for the currently selected image; they are
//! discarded when the selection changes and when a submission succeeds.
//!
//! Fields are `pub` because they are accessed by the `view` and `update`
//! modules. The mutating methods are pure with respect to the network, which
//! keeps them testable off-browser.

use common::model::label::Label;

use crate::error::UiError;
use crate::pagination::{Pager, GALLERY_PAGE_SIZE};

/// A validated association ready to be sent: the image key plus the
/// duplicate-free staged label texts.
#[derive(Debug, Clone, PartialEq)]
pub struct AssociationDraft {
    pub image: String,
    pub labels: Vec<String>,
}

pub struct GalleryComponent {
    /// Last-fetched image keys, in server order.
    pub images: Vec<String>,

    /// Last-fetched label vocabulary.
    pub labels: Vec<Label>,

    /// The image currently open for labeling, if any.
    pub selected_image: Option<String>,

    /// Label texts staged for the selected image. Insertion-ordered,
    /// duplicate-free.
    pub staged: Vec<String>,

    /// Derives the visible window of `images`.
    pub pager: Pager,

    /// True while an association request is in flight; further submits are
    /// ignored until it completes.
    pub submitting: bool,

    /// Last surfaced error, rendered as a dismissible banner.
    pub error: Option<String>,

    /// Guard so the first-render fetch runs once.
    pub loaded: bool,

    /// Monotonic refetch counter; completions carrying an older value are
    /// discarded so an out-of-order response cannot overwrite newer state.
    fetch_seq: u64,
}

impl GalleryComponent {
    pub fn new() -> Self {
        Self {
            images: Vec::new(),
            labels: Vec::new(),
            selected_image: None,
            staged: Vec::new(),
            pager: Pager::new(GALLERY_PAGE_SIZE),
            submitting: false,
            error: None,
            loaded: false,
            fetch_seq: 0,
        }
    }

    /// Starts a new refetch generation and returns its sequence number.
    /// Any completion tagged with an earlier number is stale.
    pub fn begin_fetch(&mut self) -> u64 {
        self.fetch_seq += 1;
        self.fetch_seq
    }

    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.fetch_seq
    }

    /// Wholesale snapshot replacement. Returns `false` for stale responses,
    /// which are dropped without touching the cache.
    pub fn replace_images(&mut self, seq: u64, images: Vec<String>) -> bool {
        if !self.is_current(seq) {
            return false;
        }
        self.images = images;
        if let Some(selected) = &self.selected_image {
            if !self.images.contains(selected) {
                self.selected_image = None;
                self.staged.clear();
            }
        }
        self.pager.clamp(self.images.len());
        true
    }

    pub fn replace_labels(&mut self, seq: u64, labels: Vec<Label>) -> bool {
        if !self.is_current(seq) {
            return false;
        }
        self.labels = labels;
        true
    }

    /// Opens `name` for labeling. Selecting a different image discards the
    /// staged labels of the previous one; staged state never carries over.
    pub fn select_image(&mut self, name: String) {
        if self.selected_image.as_deref() != Some(name.as_str()) {
            self.staged.clear();
        }
        self.selected_image = Some(name);
    }

    /// Stages a label text for the selected image. Set semantics: staging a
    /// text already present is a no-op. Returns whether anything changed.
    pub fn stage_label(&mut self, text: String) -> bool {
        if self.selected_image.is_none() || text.is_empty() {
            return false;
        }
        if self.staged.iter().any(|t| *t == text) {
            return false;
        }
        self.staged.push(text);
        true
    }

    pub fn unstage_label(&mut self, text: &str) {
        self.staged.retain(|t| t != text);
    }

    /// Checks the submission preconditions locally. An image must be
    /// selected and at least one label staged; otherwise this is a
    /// validation failure and no request may be issued.
    pub fn validate_submission(&self) -> Result<AssociationDraft, UiError> {
        let image = self
            .selected_image
            .clone()
            .filter(|_| !self.staged.is_empty())
            .ok_or_else(|| {
                UiError::Validation("Select an image and at least one label".to_string())
            })?;
        Ok(AssociationDraft {
            image,
            labels: self.staged.clone(),
        })
    }

    /// Leaves the `Submitting` state after a confirmed association: the
    /// staging session is over and the cache will be refetched.
    pub fn finish_submission(&mut self) {
        self.submitting = false;
        self.selected_image = None;
        self.staged.clear();
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
    fn staging_is_idempotent_per_label_text() {
        let mut gallery = GalleryComponent::new();
        gallery.select_image("scan.png".to_string());

        assert!(gallery.stage_label("cyst".to_string()));
        assert!(!gallery.stage_label("cyst".to_string()));
        assert_eq!(gallery.staged, vec!["cyst"]);

        assert!(gallery.stage_label("nodule".to_string()));
        assert_eq!(gallery.staged, vec!["cyst", "nodule"]);
    }

    #[test]
    fn staging_requires_a_selected_image() {
        let mut gallery = GalleryComponent::new();
        assert!(!gallery.stage_label("cyst".to_string()));
        assert!(gallery.staged.is_empty());
    }

    #[test]
    fn switching_images_discards_staged_labels() {
        let mut gallery = GalleryComponent::new();
        gallery.select_image("a.png".to_string());
        gallery.stage_label("cyst".to_string());

        gallery.select_image("b.png".to_string());
        assert!(gallery.staged.is_empty());
        assert_eq!(gallery.selected_image.as_deref(), Some("b.png"));

        // Re-selecting the same image keeps the staging session.
        gallery.stage_label("nodule".to_string());
        gallery.select_image("b.png".to_string());
        assert_eq!(gallery.staged, vec!["nodule"]);
    }

    #[test]
    fn unstage_removes_by_value() {
        let mut gallery = GalleryComponent::new();
        gallery.select_image("a.png".to_string());
        gallery.stage_label("cyst".to_string());
        gallery.stage_label("nodule".to_string());

        gallery.unstage_label("cyst");
        assert_eq!(gallery.staged, vec!["nodule"]);
    }

    #[test]
    fn submission_without_image_or_labels_is_refused() {
        let mut gallery = GalleryComponent::new();
        assert!(matches!(
            gallery.validate_submission(),
            Err(UiError::Validation(_))
        ));

        gallery.select_image("a.png".to_string());
        assert!(matches!(
            gallery.validate_submission(),
            Err(UiError::Validation(_))
        ));

        gallery.stage_label("cyst".to_string());
        let draft = gallery.validate_submission().unwrap();
        assert_eq!(draft.image, "a.png");
        assert_eq!(draft.labels, vec!["cyst"]);
    }

    #[test]
    fn stale_fetch_completions_are_discarded() {
        let mut gallery = GalleryComponent::new();
        let old = gallery.begin_fetch();
        let new = gallery.begin_fetch();

        assert!(gallery.replace_images(new, vec!["fresh.png".to_string()]));
        // The superseded response arrives late and must not win.
        assert!(!gallery.replace_images(old, vec!["stale.png".to_string()]));
        assert_eq!(gallery.images, vec!["fresh.png"]);

        assert!(!gallery.replace_labels(old, vec![label("1", "stale")]));
        assert!(gallery.replace_labels(new, vec![label("2", "fresh")]));
        assert_eq!(gallery.labels[0].text, "fresh");
    }

    #[test]
    fn replace_is_wholesale_not_a_merge() {
        let mut gallery = GalleryComponent::new();
        let seq = gallery.begin_fetch();
        gallery.replace_images(seq, vec!["a.png".to_string(), "b.png".to_string()]);

        let seq = gallery.begin_fetch();
        gallery.replace_images(seq, vec!["c.png".to_string()]);
        assert_eq!(gallery.images, vec!["c.png"]);
    }

    #[test]
    fn replace_clamps_the_page_and_drops_vanished_selection() {
        let mut gallery = GalleryComponent::new();
        let names: Vec<String> = (0..13).map(|i| format!("{i}.png")).collect();
        let seq = gallery.begin_fetch();
        gallery.replace_images(seq, names.clone());
        gallery.pager.next(names.len());
        gallery.pager.next(names.len());
        assert_eq!(gallery.pager.current(), 3);

        gallery.select_image("12.png".to_string());
        gallery.stage_label("cyst".to_string());

        let seq = gallery.begin_fetch();
        gallery.replace_images(seq, vec!["0.png".to_string()]);
        assert_eq!(gallery.pager.current(), 1);
        assert!(gallery.selected_image.is_none());
        assert!(gallery.staged.is_empty());
    }

    #[test]
    fn successful_submission_resets_the_staging_session() {
        let mut gallery = GalleryComponent::new();
        gallery.select_image("a.png".to_string());
        gallery.stage_label("cyst".to_string());
        gallery.submitting = true;

        gallery.finish_submission();
        assert!(!gallery.submitting);
        assert!(gallery.selected_image.is_none());
        assert!(gallery.staged.is_empty());
    }
}
