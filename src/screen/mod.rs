//! Screen state and the controllers that drive it.
//!
//! Every screen holds a [`FetchableState`] inside a [`Store`]. Controllers
//! mutate it in response to fetch outcomes and user toggles; renderers read
//! or subscribe to it.

pub mod browser;
pub mod controller;
mod expansion;
mod retry;
mod state;
mod status;
mod store;

pub use browser::{Browser, Screens, Trigger};
pub use controller::LoadResult;
pub use expansion::Expansion;
pub use retry::RetryPolicy;
pub use state::{DataBuffer, FetchableState};
pub use status::{Phase, Status};
pub use store::Store;
