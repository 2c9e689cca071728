//! Uniform wrapper around a deserialized API response.

/// Message attached to a resolved envelope
pub const SUCCESS_MESSAGE: &str = "Success";

/// Message attached to a rejected envelope
pub const FAILURE_MESSAGE: &str = "Failed";

/// A fetched document plus a success flag and message.
///
/// Invariant: `status == true` iff `document` holds the real payload.
/// Until [`Envelope::resolve`] is called the document is the type's
/// `Default` placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope<T> {
    pub document: T,
    pub status: bool,
    pub message: String,
}

impl<T: Default> Envelope<T> {
    /// Placeholder envelope: default document, `status = false`, empty message
    pub fn pending() -> Self {
        Self {
            document: T::default(),
            status: false,
            message: String::new(),
        }
    }

    /// Envelope for a call that failed
    pub fn failed() -> Self {
        let mut envelope = Self::pending();
        envelope.reject();
        envelope
    }

    /// Mark the call as failed, restoring the placeholder document
    pub fn reject(&mut self) {
        self.document = T::default();
        self.status = false;
        self.message = FAILURE_MESSAGE.to_string();
    }
}

impl<T> Envelope<T> {
    /// Envelope for a call that succeeded
    pub fn succeeded(document: T) -> Self {
        Self {
            document,
            status: true,
            message: SUCCESS_MESSAGE.to_string(),
        }
    }

    /// Replace the placeholder with the real payload
    pub fn resolve(&mut self, document: T) {
        self.document = document;
        self.status = true;
        self.message = SUCCESS_MESSAGE.to_string();
    }
}
