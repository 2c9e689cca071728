//! Load status and the progress phase derived from it.

/// Where a screen is in its fetch lifecycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    Idle,
    Loading,
    Success,
    Failure,
}

/// Which view variant the renderer shows (nothing, spinner, content, error)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl From<Status> for Phase {
    fn from(status: Status) -> Self {
        match status {
            Status::Idle => Phase::Idle,
            Status::Loading => Phase::Loading,
            Status::Success => Phase::Success,
            Status::Failure => Phase::Error,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Status::Idle => "idle",
            Status::Loading => "loading",
            Status::Success => "success",
            Status::Failure => "failure",
        };
        f.write_str(name)
    }
}
