use crate::cap::{
    AccessControlled, ComponentTracker, Iconographic, LifecycleAware, Parameterized, Renderable,
    Scriptable, Stylable,
};

/// An application-supplied module or component.
///
/// Capabilities are discovered through the `as_*` accessors instead of a fat
/// interface: a handler overrides only the accessors for what it supports and
/// returns `Some(self)` from them. Every accessor defaults to `None`, which is
/// a valid answer rather than an error.
///
/// ```ignore
/// impl Handler for Contact {
///     fn name(&self) -> &str { "contact" }
///     fn as_renderable(&self) -> Option<&dyn Renderable> { Some(self) }
/// }
/// ```
pub trait Handler: Send + Sync {
    /// Stable module key used for routing and registry lookups.
    fn name(&self) -> &str;

    /// Identity tag used to de-duplicate static assets.
    ///
    /// Handlers of the same kind must return the same tag so their CSS, JS and
    /// icons are emitted once no matter how many instances exist.
    fn type_tag(&self) -> &str {
        self.name()
    }

    /// Display title for navigation links. Falls back to [`Handler::name`].
    fn title(&self) -> Option<&str> {
        None
    }

    fn as_renderable(&self) -> Option<&dyn Renderable> {
        None
    }

    fn as_stylable(&self) -> Option<&dyn Stylable> {
        None
    }

    fn as_scriptable(&self) -> Option<&dyn Scriptable> {
        None
    }

    fn as_iconographic(&self) -> Option<&dyn Iconographic> {
        None
    }

    fn as_access_controlled(&self) -> Option<&dyn AccessControlled> {
        None
    }

    fn as_parameterized(&self) -> Option<&dyn Parameterized> {
        None
    }

    fn as_lifecycle_aware(&self) -> Option<&dyn LifecycleAware> {
        None
    }

    fn as_component_tracker(&self) -> Option<&dyn ComponentTracker> {
        None
    }
}
