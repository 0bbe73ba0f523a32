/// Receives the route segments that follow the module key.
pub trait Parameterized: Send + Sync {
    fn set_params(&self, params: &[String]);
}

/// Hooks invoked synchronously around a navigation.
pub trait LifecycleAware: Send + Sync {
    /// Called before the module is left. Returning `false` cancels the navigation.
    fn before_leave(&self) -> bool {
        true
    }

    /// Called once the module is mounted, or when its parameters changed in place.
    fn after_enter(&self) {}
}
