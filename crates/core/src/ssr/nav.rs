use crate::access::is_publicly_readable;
use crate::registry::ModuleRegistry;
use crate::ssr::{escape_attr, escape_text};
use std::fmt::Write;

/// Navigation fragment with one link per publicly readable module, in
/// registration order. Returns the markup and the number of links.
pub fn render_navigation(registry: &ModuleRegistry) -> (String, usize) {
    let mut html = String::new();
    let mut count = 0;

    for module in registry.all() {
        let handler = module.handler.as_ref();
        if !is_publicly_readable(handler) {
            continue;
        }

        let title = handler.title().unwrap_or(&module.key);
        let icon_id = handler
            .as_iconographic()
            .and_then(|provider| provider.icons().into_iter().next())
            .map(|icon| icon.id);

        if count == 0 {
            html.push_str("<nav><ul>\n");
        }
        count += 1;

        let _ = write!(
            html,
            "<li><a href='#{key}' id='nav-{key}'>",
            key = escape_attr(&module.key)
        );
        if let Some(id) = icon_id {
            let _ = write!(html, "<svg><use href='#{}'></use></svg> ", escape_attr(&id));
        }
        html.push_str(&escape_text(title));
        html.push_str("</a></li>\n");
    }

    if count > 0 {
        html.push_str("</ul></nav>\n");
    }

    (html, count)
}
