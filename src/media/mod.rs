/// Image handling module
///
/// This module handles:
/// - The in-memory data URL representation (data_url.rs)
/// - Reading uploaded files (source.rs)
/// - Decoding and composing the comparison preview (preview.rs)
/// - Saving the enhanced image (export.rs)

pub mod data_url;
pub mod export;
pub mod preview;
pub mod source;

pub use data_url::DataUrl;
