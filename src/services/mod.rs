//! Service layer module
//!
//! Contains the usage ledger, page registry, session manager, generation
//! coordinator and the remote generation client

pub mod client;
pub mod coordinator;
pub mod ledger;
pub mod registry;
pub mod session;

pub use client::{GenerateClient, LambdaClient};
pub use coordinator::{GeneratedPage, GenerationCoordinator};
pub use ledger::UsageLedger;
pub use registry::PageRegistry;
pub use session::{SessionManager, SessionState, DEFAULT_SESSION};
