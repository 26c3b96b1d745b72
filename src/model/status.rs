use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of an order in its lifecycle.
///
/// The derived ordering is the lifecycle order: `Created < Preparing < Done < Delivered`.
/// On the wire each variant is its lowercase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Created,
    Preparing,
    Done,
    Delivered,
}

impl Status {
    /// Every status, in the order an order passes through them.
    pub const LIFECYCLE: [Status; 4] = [
        Status::Created,
        Status::Preparing,
        Status::Done,
        Status::Delivered,
    ];

    /// The status that follows this one, or `None` once delivered.
    pub fn next(self) -> Option<Status> {
        match self {
            Status::Created => Some(Status::Preparing),
            Status::Preparing => Some(Status::Done),
            Status::Done => Some(Status::Delivered),
            Status::Delivered => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Created => "created",
            Status::Preparing => "preparing",
            Status::Done => "done",
            Status::Delivered => "delivered",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
