//! Navigation state machine.
//!
//! Tracks the single active module and moves between modules on route
//! changes: pre-leave hook, unmount, parameter delivery, mount, cache
//! retirement, post-enter hook. Hooks run synchronously, so one navigation
//! always completes (or is cancelled) before the next begins. A failed mount
//! puts the previous module back instead of leaving a half-done transition.

use crate::cache::InstanceCache;
use crate::error::{Result, SiteError};
use crate::route::{Route, parse_route};
use crate::site::SiteContext;
use sitekit_api::{Handler, MountTarget, RouteIndicator};
use std::sync::Arc;
use tracing::{debug, warn};

/// What a navigation request ended up doing. None of these are errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// `key` is now mounted. `restored` is set when the instance came from the cache.
    Entered { key: String, restored: bool },
    /// The active module received new parameters without being remounted.
    Updated { key: String },
    /// No module is registered under `key`; the active module was kept.
    NotFound { key: String },
    /// The active module refused to be left.
    Cancelled { active: String },
    /// Neither the start route nor the default module is registered.
    Unresolved,
}

pub struct Navigator<R, M> {
    context: Arc<SiteContext>,
    cache: InstanceCache,
    active: Option<Arc<dyn Handler>>,
    route_indicator: R,
    mount_target: M,
}

impl<R: RouteIndicator, M: MountTarget> Navigator<R, M> {
    pub fn new(context: Arc<SiteContext>, route_indicator: R, mount_target: M) -> Self {
        let cache = InstanceCache::new(context.config().cache_size);
        Self {
            context,
            cache,
            active: None,
            route_indicator,
            mount_target,
        }
    }

    /// First activation, from the route currently shown by the environment.
    ///
    /// Unknown routes fall back to the default module. If that is not
    /// registered either, the attach point is mounted empty.
    pub fn start(&mut self, attach_point: &str) -> Result<NavigationOutcome> {
        let current = self.route_indicator.route();
        if self.active.is_some() {
            return self.navigate(attach_point, &current);
        }

        let default_module = self.context.config().default_route.clone();
        let route = parse_route(&current, &default_module);

        let (route, handler) = match self.context.registry().find(&route.module) {
            Some(handler) => (route, Some(handler)),
            None => {
                if route.module != default_module {
                    warn!(
                        "Start route '{}' is not registered, falling back to '{}'",
                        route.module, default_module
                    );
                }
                let handler = self.context.registry().find(&default_module);
                (Route::new(default_module, Vec::new()), handler)
            }
        };

        let Some(handler) = handler else {
            warn!("Default module '{}' is not registered", route.module);
            self.mount_target
                .mount(attach_point, None)
                .map_err(SiteError::Mount)?;
            return Ok(NavigationOutcome::Unresolved);
        };

        self.activate(attach_point, route, handler)
    }

    /// Moves to the module named by `route`.
    pub fn navigate(&mut self, attach_point: &str, route: &str) -> Result<NavigationOutcome> {
        let route = parse_route(route, &self.context.config().default_route);

        if let Some(active) = &self.active {
            if active.name() == route.module {
                debug!("Updating parameters of active module '{}'", route.module);
                if let Some(p) = active.as_parameterized() {
                    p.set_params(&route.params);
                }
                if let Some(lifecycle) = active.as_lifecycle_aware() {
                    lifecycle.after_enter();
                }
                return Ok(NavigationOutcome::Updated { key: route.module });
            }
        }

        let Some(resolved) = self.context.registry().find(&route.module) else {
            warn!("No module registered for route '{}'", route.module);
            return Ok(NavigationOutcome::NotFound { key: route.module });
        };

        let leaving = self.active.clone();
        if let Some(current) = &leaving {
            if let Some(lifecycle) = current.as_lifecycle_aware() {
                if !lifecycle.before_leave() {
                    debug!("Navigation away from '{}' cancelled", current.name());
                    return Ok(NavigationOutcome::Cancelled {
                        active: current.name().to_string(),
                    });
                }
            }
            self.mount_target
                .unmount(current)
                .map_err(SiteError::Mount)?;
        }

        let (target, restored) = match self.cache.get(&route.module) {
            Some(instance) => (instance.clone(), true),
            None => (resolved, false),
        };
        self.enter(attach_point, route, target, restored, leaving)
    }

    fn activate(
        &mut self,
        attach_point: &str,
        route: Route,
        resolved: Arc<dyn Handler>,
    ) -> Result<NavigationOutcome> {
        let (target, restored) = match self.cache.get(&route.module) {
            Some(instance) => (instance.clone(), true),
            None => (resolved, false),
        };
        self.enter(attach_point, route, target, restored, None)
    }

    /// Mounts `target` and commits the transition. Active module, cache and
    /// route indicator only change once the mount succeeded.
    fn enter(
        &mut self,
        attach_point: &str,
        route: Route,
        target: Arc<dyn Handler>,
        restored: bool,
        leaving: Option<Arc<dyn Handler>>,
    ) -> Result<NavigationOutcome> {
        if let Some(p) = target.as_parameterized() {
            p.set_params(&route.params);
        }

        if let Err(err) = self.mount_target.mount(attach_point, Some(&target)) {
            if let Some(previous) = &leaving {
                self.remount(attach_point, previous);
            }
            return Err(SiteError::Mount(err));
        }

        // Take the target before retiring the current module so a full cache
        // cannot evict the instance we just restored.
        if restored {
            self.cache.take(&route.module);
        }
        if let Some(previous) = leaving {
            self.cache.put(previous);
        }

        self.active = Some(target.clone());
        self.route_indicator.set_route(&route.to_fragment());

        // Only after mount: observers may rely on the rendered output existing.
        if let Some(lifecycle) = target.as_lifecycle_aware() {
            lifecycle.after_enter();
        }

        debug!(
            "Entered module '{}' (restored from cache: {})",
            route.module, restored
        );
        Ok(NavigationOutcome::Entered {
            key: route.module,
            restored,
        })
    }

    /// Puts the module we failed to leave back on screen. If even that fails
    /// the navigator falls back to idle so the next navigation mounts afresh.
    fn remount(&mut self, attach_point: &str, previous: &Arc<dyn Handler>) {
        match self.mount_target.mount(attach_point, Some(previous)) {
            Ok(()) => debug!("Remounted '{}' after a failed mount", previous.name()),
            Err(err) => {
                warn!("Could not remount '{}': {}", previous.name(), err);
                self.active = None;
            }
        }
    }

    pub fn context(&self) -> &Arc<SiteContext> {
        &self.context
    }

    pub fn active(&self) -> Option<&Arc<dyn Handler>> {
        self.active.as_ref()
    }

    pub fn active_key(&self) -> Option<&str> {
        self.active.as_ref().map(|h| h.name())
    }

    /// Cached module keys, least recently used first.
    pub fn cached_keys(&self) -> Vec<String> {
        self.cache.keys()
    }

    pub fn route_indicator(&self) -> &R {
        &self.route_indicator
    }

    pub fn mount_target(&self) -> &M {
        &self.mount_target
    }

    pub fn mount_target_mut(&mut self) -> &mut M {
        &mut self.mount_target
    }
}
