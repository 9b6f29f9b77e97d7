use common::model::label::Label;

use crate::error::UiError;

/// Fetch completions carry the sequence number their request was issued
/// under, so stale responses can be told apart from current ones.
pub enum Msg {
    Refresh,
    ImagesLoaded { seq: u64, images: Vec<String> },
    LabelsLoaded { seq: u64, labels: Vec<Label> },
    FetchFailed { seq: u64, error: UiError },
    SelectImage(String),
    StageLabel(String),
    UnstageLabel(String),
    Submit,
    SubmitSucceeded,
    SubmitFailed(UiError),
    PrevPage,
    NextPage,
    DismissError,
}
