pub mod cap;
pub mod env;
pub mod error;
pub mod handler;
pub mod models;

// Re-export commonly used types
pub use cap::*;
pub use env::{DispatchRegistrar, MountTarget, RouteIndicator};
pub use error::{BoxError, CollaboratorError, CollaboratorResult};
pub use handler::Handler;
pub use models::{Action, Icon, Role};
