use crate::models::{Action, Role};

pub trait AccessControlled: Send + Sync {
    /// Roles allowed to perform `action` on this handler.
    fn allowed_roles(&self, action: Action) -> Vec<Role>;
}
