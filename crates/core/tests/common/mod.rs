#![allow(dead_code)]

use sitekit_api::{
    AccessControlled, Action, CollaboratorError, CollaboratorResult, ComponentTracker, Handler,
    Icon, Iconographic, LifecycleAware, MountTarget, Parameterized, Renderable, Role,
    RouteIndicator, Scriptable, Stylable,
};
use sitekit_core::{SiteBuilder, SiteConfig, SiteContext};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Ordered record of hook, mount and parameter events shared by fixtures.
#[derive(Clone, Default)]
pub struct Journal(Arc<Mutex<Vec<String>>>);

impl Journal {
    pub fn push(&self, event: impl Into<String>) {
        self.0.lock().unwrap().push(event.into());
    }

    pub fn events(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.0.lock().unwrap().clear();
    }
}

/// Configurable handler supporting every capability.
pub struct TestModule {
    pub name: String,
    pub tag: Option<String>,
    pub title: Option<String>,
    pub html: String,
    pub css: String,
    pub js: String,
    pub icons: Vec<Icon>,
    pub read_roles: Option<Vec<Role>>,
    pub lifecycle: bool,
    pub allow_leave: AtomicBool,
    pub params: Mutex<Vec<String>>,
    pub renders: AtomicUsize,
    pub tracked: Vec<Arc<dyn Handler>>,
    pub journal: Journal,
}

impl TestModule {
    pub fn new(name: &str, journal: &Journal) -> Self {
        Self {
            name: name.to_string(),
            tag: None,
            title: None,
            html: String::new(),
            css: String::new(),
            js: String::new(),
            icons: Vec::new(),
            read_roles: None,
            lifecycle: true,
            allow_leave: AtomicBool::new(true),
            params: Mutex::new(Vec::new()),
            renders: AtomicUsize::new(0),
            tracked: Vec::new(),
            journal: journal.clone(),
        }
    }

    pub fn public(mut self) -> Self {
        self.read_roles = Some(vec![Role::ANY]);
        self
    }

    pub fn private(mut self) -> Self {
        self.read_roles = Some(vec![Role('a')]);
        self
    }

    pub fn tagged(mut self, tag: &str) -> Self {
        self.tag = Some(tag.to_string());
        self
    }

    pub fn titled(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn html(mut self, html: &str) -> Self {
        self.html = html.to_string();
        self
    }

    pub fn css(mut self, css: &str) -> Self {
        self.css = css.to_string();
        self
    }

    pub fn js(mut self, js: &str) -> Self {
        self.js = js.to_string();
        self
    }

    pub fn icon(mut self, id: &str, svg: &str) -> Self {
        self.icons.push(Icon::new(id, svg));
        self
    }

    pub fn without_lifecycle(mut self) -> Self {
        self.lifecycle = false;
        self
    }

    pub fn tracking(mut self, component: Arc<dyn Handler>) -> Self {
        self.tracked.push(component);
        self
    }

    pub fn refuse_leave(&self, refuse: bool) {
        self.allow_leave.store(!refuse, Ordering::SeqCst);
    }

    pub fn current_params(&self) -> Vec<String> {
        self.params.lock().unwrap().clone()
    }

    pub fn render_count(&self) -> usize {
        self.renders.load(Ordering::SeqCst)
    }
}

impl Handler for TestModule {
    fn name(&self) -> &str {
        &self.name
    }

    fn type_tag(&self) -> &str {
        self.tag.as_deref().unwrap_or(&self.name)
    }

    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn as_renderable(&self) -> Option<&dyn Renderable> {
        Some(self)
    }

    fn as_stylable(&self) -> Option<&dyn Stylable> {
        Some(self)
    }

    fn as_scriptable(&self) -> Option<&dyn Scriptable> {
        Some(self)
    }

    fn as_iconographic(&self) -> Option<&dyn Iconographic> {
        if self.icons.is_empty() { None } else { Some(self) }
    }

    fn as_access_controlled(&self) -> Option<&dyn AccessControlled> {
        self.read_roles.as_ref().map(|_| self as &dyn AccessControlled)
    }

    fn as_parameterized(&self) -> Option<&dyn Parameterized> {
        Some(self)
    }

    fn as_lifecycle_aware(&self) -> Option<&dyn LifecycleAware> {
        if self.lifecycle { Some(self) } else { None }
    }

    fn as_component_tracker(&self) -> Option<&dyn ComponentTracker> {
        if self.tracked.is_empty() { None } else { Some(self) }
    }
}

impl Renderable for TestModule {
    fn render_html(&self) -> String {
        self.renders.fetch_add(1, Ordering::SeqCst);
        self.html.clone()
    }
}

impl Stylable for TestModule {
    fn render_css(&self) -> String {
        self.css.clone()
    }
}

impl Scriptable for TestModule {
    fn render_js(&self) -> String {
        self.js.clone()
    }
}

impl Iconographic for TestModule {
    fn icons(&self) -> Vec<Icon> {
        self.icons.clone()
    }
}

impl AccessControlled for TestModule {
    fn allowed_roles(&self, action: Action) -> Vec<Role> {
        match action {
            Action::Read => self.read_roles.clone().unwrap_or_default(),
            _ => vec![Role('a')],
        }
    }
}

impl Parameterized for TestModule {
    fn set_params(&self, params: &[String]) {
        self.journal
            .push(format!("params:{}:{}", self.name, params.join(",")));
        *self.params.lock().unwrap() = params.to_vec();
    }
}

impl LifecycleAware for TestModule {
    fn before_leave(&self) -> bool {
        self.journal.push(format!("before_leave:{}", self.name));
        self.allow_leave.load(Ordering::SeqCst)
    }

    fn after_enter(&self) {
        self.journal.push(format!("after_enter:{}", self.name));
    }
}

impl ComponentTracker for TestModule {
    fn tracked_components(&self) -> Vec<Arc<dyn Handler>> {
        self.tracked.clone()
    }
}

/// In-memory address bar.
#[derive(Default)]
pub struct MemoryRoute {
    pub current: String,
    pub writes: Vec<String>,
}

impl MemoryRoute {
    pub fn at(route: &str) -> Self {
        Self {
            current: route.to_string(),
            writes: Vec::new(),
        }
    }
}

impl RouteIndicator for MemoryRoute {
    fn route(&self) -> String {
        self.current.clone()
    }

    fn set_route(&mut self, route: &str) {
        self.current = route.to_string();
        self.writes.push(route.to_string());
    }
}

/// Mount target that records into the journal and can be told to fail.
pub struct RecordingMount {
    pub journal: Journal,
    pub mounted: Option<String>,
    pub fail_mount: bool,
    /// Fails only the next mount, then behaves again.
    pub fail_next_mount: bool,
    pub fail_unmount: bool,
}

impl RecordingMount {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
            mounted: None,
            fail_mount: false,
            fail_next_mount: false,
            fail_unmount: false,
        }
    }
}

impl MountTarget for RecordingMount {
    fn mount(
        &mut self,
        attach_point: &str,
        handler: Option<&Arc<dyn Handler>>,
    ) -> CollaboratorResult<()> {
        if self.fail_mount || std::mem::take(&mut self.fail_next_mount) {
            return Err(Box::new(CollaboratorError::AttachPointMissing(
                attach_point.to_string(),
            )));
        }
        let name = handler.map(|h| h.name().to_string());
        self.journal.push(format!(
            "mount:{}:{}",
            attach_point,
            name.as_deref().unwrap_or("-")
        ));
        self.mounted = name;
        Ok(())
    }

    fn unmount(&mut self, handler: &Arc<dyn Handler>) -> CollaboratorResult<()> {
        if self.fail_unmount {
            return Err(Box::new(CollaboratorError::Rejected(
                handler.name().to_string(),
            )));
        }
        self.journal.push(format!("unmount:{}", handler.name()));
        self.mounted = None;
        Ok(())
    }
}

pub fn context_with(config: SiteConfig, modules: &[Arc<TestModule>]) -> Arc<SiteContext> {
    modules
        .iter()
        .fold(SiteBuilder::new(config), |builder, m| {
            builder.register(m.clone() as Arc<dyn Handler>)
        })
        .build()
        .unwrap()
}

pub fn context(modules: &[Arc<TestModule>]) -> Arc<SiteContext> {
    context_with(SiteConfig::default(), modules)
}
