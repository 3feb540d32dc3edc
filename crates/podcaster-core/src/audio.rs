/// Encoded audio produced by a speech synthesizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioData {
    /// Encoded audio bytes (MP3 unless the provider says otherwise)
    pub bytes: Vec<u8>,
    /// Content type reported by the provider, e.g. `audio/mpeg`
    pub content_type: String,
}

impl AudioData {
    pub fn new(bytes: impl Into<Vec<u8>>, content_type: impl Into<String>) -> Self {
        Self {
            bytes: bytes.into(),
            content_type: content_type.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
