mod link_preview;

pub use link_preview::{PreviewImage, PreviewMeta, PreviewResponse};
