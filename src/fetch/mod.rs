//! Fetch pipeline shared by every screen.
//!
//! ```text
//! MusicApi call ──► Envelope<T> ──► fetch() ──► Outcome<Envelope<T>>
//!  (never fails)     (status+msg)               (Success | Failure)
//! ```
//!
//! The [`Repository`] applies [`fetch`] to each of the nine API operations
//! so screen controllers only ever see an [`Outcome`].

mod envelope;
mod orchestrator;
mod outcome;
mod repository;
pub mod traits;

pub use envelope::{Envelope, FAILURE_MESSAGE, SUCCESS_MESSAGE};
pub use orchestrator::fetch;
pub use outcome::Outcome;
pub use repository::{Fetched, Repository};
pub use traits::MusicApi;

#[cfg(test)]
pub use traits::mocks;
