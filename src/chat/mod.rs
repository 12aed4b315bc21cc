use serde::{Deserialize, Serialize};

pub mod endpoints;
pub mod manager;
pub use endpoints::*;

/// What happens when appending a chat entry to storage fails mid-answer.
///
/// `BestEffort` logs the failure and keeps going with the in-memory
/// transcript, so a reply can still be produced while the persisted chat ends
/// up missing entries. `Strict` fails the request instead.
#[derive(Copy, Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum Persistence {
    BestEffort,
    Strict,
}
