use crate::models::Icon;

/// Produces the HTML fragment of a handler.
///
/// Rendering may have side effects: a handler that composes sub-components
/// through a builder typically records them while rendering, which is why the
/// aggregator renders every handler before asking for tracked components.
pub trait Renderable: Send + Sync {
    fn render_html(&self) -> String;
}

pub trait Stylable: Send + Sync {
    fn render_css(&self) -> String;
}

pub trait Scriptable: Send + Sync {
    fn render_js(&self) -> String;
}

pub trait Iconographic: Send + Sync {
    /// Icons in declaration order. The first one is used for navigation links.
    fn icons(&self) -> Vec<Icon>;
}
