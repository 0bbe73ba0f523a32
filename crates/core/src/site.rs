//! The explicit context shared by the navigator and the aggregator.

use crate::config::SiteConfig;
use crate::error::{Result, SiteError};
use crate::palette::ColorPalette;
use crate::registry::ModuleRegistry;
use sitekit_api::{DispatchRegistrar, Handler};
use std::sync::Arc;

pub struct SiteContext {
    config: SiteConfig,
    registry: ModuleRegistry,
    palette: ColorPalette,
}

impl SiteContext {
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn registry(&self) -> &ModuleRegistry {
        &self.registry
    }

    pub fn palette(&self) -> &ColorPalette {
        &self.palette
    }
}

pub struct SiteBuilder {
    config: SiteConfig,
    palette: ColorPalette,
    handlers: Vec<Arc<dyn Handler>>,
    dispatcher: Option<Box<dyn DispatchRegistrar>>,
}

impl SiteBuilder {
    pub fn new(config: SiteConfig) -> Self {
        Self {
            config,
            palette: ColorPalette::default(),
            handlers: Vec::new(),
            dispatcher: None,
        }
    }

    pub fn with_palette(mut self, palette: ColorPalette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_dispatcher(mut self, dispatcher: Box<dyn DispatchRegistrar>) -> Self {
        self.dispatcher = Some(dispatcher);
        self
    }

    pub fn register(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    pub fn register_all(mut self, handlers: impl IntoIterator<Item = Arc<dyn Handler>>) -> Self {
        self.handlers.extend(handlers);
        self
    }

    pub fn build(self) -> Result<Arc<SiteContext>> {
        self.config.validate()?;

        let mut registry = ModuleRegistry::new();
        for handler in &self.handlers {
            registry.register(handler.clone());
        }

        if let Some(mut dispatcher) = self.dispatcher {
            dispatcher
                .register_handlers(&registry.handlers())
                .map_err(SiteError::Dispatch)?;
        }

        tracing::info!(
            "Site ready with {} module(s), default route '{}'",
            registry.len(),
            self.config.default_route
        );

        Ok(Arc::new(SiteContext {
            config: self.config,
            registry,
            palette: self.palette,
        }))
    }
}
