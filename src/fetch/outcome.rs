//! Two-variant outcome returned by the data-access layer.

/// Success with a value, or failure with a message.
///
/// `error` carries a machine-readable code when one exists. The Last.fm
/// boundary never produces one, so it is empty in practice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Success(T),
    Failure { message: String, error: String },
}

impl<T> Outcome<T> {
    pub fn failure(message: impl Into<String>) -> Self {
        Outcome::Failure {
            message: message.into(),
            error: String::new(),
        }
    }
}

#[cfg(test)]
impl<T> Outcome<T> {
    /// Consume and return the success value, if any
    pub fn success(self) -> Option<T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure { .. } => None,
        }
    }
}
