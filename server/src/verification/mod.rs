//! Ticket verification engine: fare-zone resolution, validity evaluation
//! and the verification history.

pub mod evaluator;
pub mod lifecycle;
pub mod outcome;
pub mod recorder;
pub mod resolver;
pub mod service;

pub use evaluator::{evaluate, Verdict};
pub use lifecycle::{Activation, TicketLifecycle};
pub use outcome::{LookupFailure, VerifyResult};
pub use recorder::VerificationRecorder;
pub use resolver::{FareZoneResolver, Position};
pub use service::VerificationService;
