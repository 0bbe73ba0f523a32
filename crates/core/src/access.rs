use sitekit_api::{Action, Handler};

/// True when anyone may read `handler`.
///
/// Handlers that do not declare access rules are not public. Navigation
/// menus and static content use this same check, so every listed module is
/// also navigable.
pub fn is_publicly_readable(handler: &dyn Handler) -> bool {
    handler
        .as_access_controlled()
        .map(|access| {
            access
                .allowed_roles(Action::Read)
                .iter()
                .any(|role| role.is_any())
        })
        .unwrap_or(false)
}
