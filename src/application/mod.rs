//! Application layer: services and use cases
//!
//! This layer drives the domain tree and depends on I/O boundary traits.

pub mod error;
pub mod error_ext;
pub mod prompts;
pub mod services;
pub mod session;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use session::{Session, SessionSummary};
