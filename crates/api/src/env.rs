//! Narrow interfaces to the environment the router runs in.
//!
//! None of these are implemented by sitekit itself: the address bar, the DOM
//! binding and the request dispatcher all belong to the host application.

use crate::error::CollaboratorResult;
use crate::handler::Handler;
use std::sync::Arc;

/// The externally visible route, typically the address-bar fragment.
pub trait RouteIndicator {
    fn route(&self) -> String;
    fn set_route(&mut self, route: &str);
}

/// Binds handlers to the UI.
pub trait MountTarget {
    /// Mounts `handler` into the element identified by `attach_point`.
    /// `None` clears the attach point.
    fn mount(
        &mut self,
        attach_point: &str,
        handler: Option<&Arc<dyn Handler>>,
    ) -> CollaboratorResult<()>;

    fn unmount(&mut self, handler: &Arc<dyn Handler>) -> CollaboratorResult<()>;
}

/// Request-dispatch collaborator (CRUD/RPC wiring) that receives every
/// registered handler.
pub trait DispatchRegistrar: Send + Sync {
    fn register_handlers(&mut self, handlers: &[Arc<dyn Handler>]) -> CollaboratorResult<()>;
}
