//! Typed response schemas. Every backend reply is decoded into one of these
//! at the transport boundary; a body that fails to decode is reported as a
//! network error instead of leaking untyped fields into view state.

use serde::Deserialize;

use crate::model::label::Label;

#[derive(Debug, Clone, Deserialize)]
pub struct ImagesResponse {
    pub images: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LabelsResponse {
    pub labels: Vec<Label>,
}

/// Human-readable confirmation for upload/delete operations.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error envelope the backend uses for rejected requests.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_label_listing() {
        let resp: LabelsResponse = serde_json::from_str(
            r#"{"labels":[{"_id":"1","text":"cyst"},{"_id":"2","text":"nodule"}]}"#,
        )
        .unwrap();
        assert_eq!(resp.labels.len(), 2);
        assert_eq!(resp.labels[1].text, "nodule");
    }

    #[test]
    fn rejects_malformed_image_listing() {
        assert!(serde_json::from_str::<ImagesResponse>(r#"{"images":"oops"}"#).is_err());
    }
}
