use indexmap::IndexMap;
use sitekit_api::Handler;
use std::sync::Arc;

/// Discovered components, de-duplicated by type tag in discovery order.
#[derive(Default)]
pub struct ComponentSet {
    components: IndexMap<String, Arc<dyn Handler>>,
}

impl ComponentSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps the first component seen for each type tag.
    pub fn register(&mut self, component: Arc<dyn Handler>) -> bool {
        let tag = component.type_tag();
        if self.components.contains_key(tag) {
            return false;
        }
        self.components.insert(tag.to_string(), component);
        true
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn type_tags(&self) -> Vec<&str> {
        self.components.keys().map(String::as_str).collect()
    }

    pub fn collect_css(&self) -> Vec<String> {
        self.components
            .values()
            .filter_map(|c| c.as_stylable().map(|s| s.render_css()))
            .filter(|css| !css.is_empty())
            .collect()
    }

    pub fn collect_js(&self) -> Vec<String> {
        self.components
            .values()
            .filter_map(|c| c.as_scriptable().map(|s| s.render_js()))
            .filter(|js| !js.is_empty())
            .collect()
    }

    /// Merged sprite. A later component overrides an earlier icon with the same id.
    pub fn collect_icons(&self) -> IndexMap<String, String> {
        let mut icons = IndexMap::new();
        for component in self.components.values() {
            if let Some(provider) = component.as_iconographic() {
                for icon in provider.icons() {
                    icons.insert(icon.id, icon.svg);
                }
            }
        }
        icons
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitekit_api::{Icon, Iconographic};

    struct Badge {
        name: &'static str,
        icons: Vec<(&'static str, &'static str)>,
    }

    impl Handler for Badge {
        fn name(&self) -> &str {
            self.name
        }

        fn as_iconographic(&self) -> Option<&dyn Iconographic> {
            Some(self)
        }
    }

    impl Iconographic for Badge {
        fn icons(&self) -> Vec<Icon> {
            self.icons.iter().map(|(id, svg)| Icon::new(*id, *svg)).collect()
        }
    }

    #[test]
    fn test_register_dedups_by_type_tag() {
        let mut set = ComponentSet::new();
        assert!(set.register(Arc::new(Badge { name: "badge", icons: vec![] })));
        assert!(!set.register(Arc::new(Badge { name: "badge", icons: vec![] })));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_later_icon_wins_and_keeps_position() {
        let mut set = ComponentSet::new();
        set.register(Arc::new(Badge {
            name: "first",
            icons: vec![("star", "<path d='1'/>"), ("home", "<path d='2'/>")],
        }));
        set.register(Arc::new(Badge {
            name: "second",
            icons: vec![("star", "<path d='3'/>")],
        }));

        let icons = set.collect_icons();
        let ids: Vec<_> = icons.keys().map(String::as_str).collect();
        assert_eq!(ids, vec!["star", "home"]);
        assert_eq!(icons["star"], "<path d='3'/>");
    }
}
