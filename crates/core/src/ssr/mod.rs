//! Server-side asset aggregation.
//!
//! Runs once before requests are served and merges every registered module
//! into a single document: one stylesheet, one script, one icon sprite, the
//! navigation fragment and the HTML of public modules. The client router
//! later mounts into the same registry, so the output must match it exactly.

pub mod components;
pub mod document;
pub mod nav;

pub use components::ComponentSet;
pub use document::{AggregatedDocument, AssetLinking};
pub use nav::render_navigation;

use crate::access::is_publicly_readable;
use crate::error::{Result, SiteError};
use crate::site::SiteContext;
use std::sync::Arc;
use tracing::{debug, info};

pub struct Aggregator {
    context: Arc<SiteContext>,
}

impl Aggregator {
    pub fn new(context: Arc<SiteContext>) -> Self {
        Self { context }
    }

    /// Discovery pass: every module, plus whatever each renderable module
    /// reports as tracked after its HTML has been rendered.
    pub fn discover(&self) -> ComponentSet {
        let mut components = ComponentSet::new();

        for module in self.context.registry().all() {
            let handler = &module.handler;
            components.register(handler.clone());

            if let Some(renderable) = handler.as_renderable() {
                let _ = renderable.render_html();
            }

            if let Some(tracker) = handler.as_component_tracker() {
                for component in tracker.tracked_components() {
                    if components.register(component.clone()) {
                        debug!(
                            "Discovered component '{}' through '{}'",
                            component.type_tag(),
                            module.key
                        );
                    }
                }
            }
        }

        components
    }

    pub fn aggregate(&self) -> Result<AggregatedDocument> {
        let registry = self.context.registry();
        let config = self.context.config();

        let components = self.discover();

        let mut styles = vec![self.context.palette().render_css()];
        styles.extend(components.collect_css());
        let scripts = components.collect_js();
        let icons = components.collect_icons();

        let (navigation, links) = render_navigation(registry);
        if links == 0 {
            return Err(SiteError::NoPublicModules {
                registered: registry.len(),
            });
        }

        let mut body = vec![
            navigation.clone(),
            format!("<div id=\"{}\"></div>", escape_attr(&config.mount_point)),
        ];
        for module in registry.all() {
            let handler = module.handler.as_ref();
            if !is_publicly_readable(handler) {
                continue;
            }
            if let Some(renderable) = handler.as_renderable() {
                let html = renderable.render_html();
                if !html.is_empty() {
                    body.push(html);
                }
            }
        }

        info!(
            "Aggregated {} module(s): {} component type(s), {} icon(s), {} nav link(s)",
            registry.len(),
            components.len(),
            icons.len(),
            links
        );

        Ok(AggregatedDocument {
            title: config.title.clone(),
            styles,
            scripts,
            icons,
            navigation,
            body,
        })
    }
}

/// Escapes `&`, `<` and `>` for use in element content.
pub(crate) fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Like [`escape_text`], plus both quote characters.
pub(crate) fn escape_attr(s: &str) -> String {
    escape_text(s).replace('\'', "&#39;").replace('"', "&quot;")
}
