//! The single shared piece of fetch control flow.

use std::future::Future;

use super::envelope::Envelope;
use super::outcome::Outcome;

/// Run one envelope-producing call and convert it into an [`Outcome`].
///
/// The call is expected to have normalized HTTP-level failures into
/// `status = false` already; this function is total over the status flag
/// and does not catch anything else.
pub async fn fetch<T, F, Fut>(call: F) -> Outcome<Envelope<T>>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Envelope<T>>,
{
    let envelope = call().await;
    if envelope.status {
        Outcome::Success(envelope)
    } else {
        Outcome::Failure {
            message: envelope.message,
            error: String::new(),
        }
    }
}
