//! Shared types handed to the upstream request layer.

mod response;

pub use response::StatusResponse;
