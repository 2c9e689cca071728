//! Per-screen state bundle: status, derived phase, data buffer, UI flags.

use super::status::{Phase, Status};

/// Storage for a screen's loaded data.
///
/// Single-object screens hold an `Option<T>` that each success replaces.
/// List screens hold a `Vec<T>` that each success appends to.
pub trait DataBuffer: Default {
    /// What one successful fetch contributes
    type Item;

    fn is_empty(&self) -> bool;

    fn absorb(&mut self, item: Self::Item);
}

impl<T> DataBuffer for Option<T> {
    type Item = T;

    fn is_empty(&self) -> bool {
        self.is_none()
    }

    fn absorb(&mut self, item: T) {
        *self = Some(item);
    }
}

impl<T> DataBuffer for Vec<T> {
    type Item = Vec<T>;

    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }

    fn absorb(&mut self, items: Vec<T>) {
        self.extend(items);
    }
}

/// State of one screen.
///
/// `B` is the data buffer, `U` holds screen-specific UI flags. The phase is
/// recomputed on every status change and cannot be set directly.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchableState<B, U = ()> {
    status: Status,
    phase: Phase,
    error: Option<String>,
    pub data: B,
    pub ui: U,
}

impl<B: Default, U: Default> Default for FetchableState<B, U> {
    fn default() -> Self {
        Self {
            status: Status::Idle,
            phase: Phase::Idle,
            error: None,
            data: B::default(),
            ui: U::default(),
        }
    }
}

impl<B: DataBuffer, U> FetchableState<B, U> {
    pub fn with_ui(ui: U) -> Self {
        Self {
            status: Status::Idle,
            phase: Phase::Idle,
            error: None,
            data: B::default(),
            ui,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Message of the last failed fetch, cleared on success
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_status(&mut self, status: Status) {
        if self.status != status {
            tracing::debug!(from = %self.status, to = %status, "screen status changed");
        }
        self.status = status;
        self.phase = status.into();
    }

    /// A trigger should fetch: nothing loaded yet and nothing in flight
    pub fn wants_load(&self) -> bool {
        self.data.is_empty() && self.status != Status::Loading
    }

    /// Enter Loading if [`wants_load`](Self::wants_load); returns whether it did
    pub fn try_begin(&mut self) -> bool {
        if self.wants_load() {
            self.set_status(Status::Loading);
            true
        } else {
            false
        }
    }

    /// Fold a successful fetch into the buffer
    pub fn succeed(&mut self, item: B::Item) {
        self.data.absorb(item);
        self.error = None;
        self.set_status(Status::Success);
    }

    /// Record a failed fetch; the buffer is left untouched
    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.set_status(Status::Failure);
    }
}
