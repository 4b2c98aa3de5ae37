use serde::{Deserialize, Serialize};

/// Success envelope for `POST /api/link-preview`.
///
/// `success` is the JSON number 1 (or 0 on failure), not a boolean — the
/// editor's link tool checks for a truthy number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewResponse {
    pub success: u8,
    pub meta: PreviewMeta,
}

/// Metadata block of a successful preview response. All fields are always
/// present; missing inputs degrade to placeholders rather than to nulls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewMeta {
    pub title: String,
    pub description: String,
    pub site_name: String,
    pub url: String,
    pub image: PreviewImage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewImage {
    pub url: String,
}
