pub mod access;
pub mod discovery;
pub mod lifecycle;
pub mod render;

pub use access::*;
pub use discovery::*;
pub use lifecycle::*;
pub use render::*;
