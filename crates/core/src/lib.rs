pub mod access;
pub mod build;
pub mod cache;
pub mod config;
pub mod error;
pub mod logging;
pub mod navigation;
pub mod palette;
pub mod registry;
pub mod route;
pub mod site;
pub mod ssr;

pub use config::SiteConfig;
pub use error::{Result, SiteError};
pub use navigation::{NavigationOutcome, Navigator};
pub use palette::ColorPalette;
pub use registry::{ModuleRegistry, RegisteredModule};
pub use route::{Route, parse_route};
pub use site::{SiteBuilder, SiteContext};
pub use ssr::{AggregatedDocument, Aggregator};
