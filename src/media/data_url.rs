use std::fmt;
use std::sync::Arc;

use base64::{engine::general_purpose::STANDARD, Engine};

/// An encoded image held in memory, tagged with its MIME type.
///
/// This is the app's only image representation: uploads are stored as-is and
/// downloads write the same bytes back out. Cloning is cheap.
#[derive(Clone, PartialEq, Eq)]
pub struct DataUrl {
    mime: Arc<str>,
    bytes: Arc<[u8]>,
}

impl DataUrl {
    pub fn new(mime: impl Into<Arc<str>>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            mime: mime.into(),
            bytes: bytes.into(),
        }
    }

    pub fn mime(&self) -> &str {
        &self.mime
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

// The payload can be megabytes; keep it out of logs.
impl fmt::Debug for DataUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataUrl")
            .field("mime", &self.mime)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl fmt::Display for DataUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "data:{};base64,{}", self.mime, STANDARD.encode(&self.bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_base64_with_media_type() {
        let url = DataUrl::new("image/png", b"hi".to_vec());
        assert_eq!(url.to_string(), "data:image/png;base64,aGk=");
    }

    #[test]
    fn debug_omits_payload() {
        let url = DataUrl::new("image/png", vec![0u8; 4096]);
        let debug = format!("{url:?}");
        assert!(debug.contains("4096"));
        assert!(debug.len() < 100);
    }
}
