pub mod gateway;

pub use gateway::{FailureKind, UpstreamGateway, UpstreamOutcome};
