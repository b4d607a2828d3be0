//! Application types and their static window configuration
//!
//! The desktop knows a fixed set of applications plus an open-ended family
//! of per-project content windows (`project-<slug>`), each hosted in an
//! external frame.

mod app_type;
mod table;

pub use app_type::{AppType, AppTypeError, ContentApp};
pub use table::{app_config, AppConfig, ContentMode, PLACEHOLDER_URL};
