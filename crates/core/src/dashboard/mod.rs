//! Dashboard module - the snapshot handed to renderers and the renderer port.

mod dashboard_model;
mod dashboard_renderer;

pub use dashboard_model::DashboardSnapshot;
pub use dashboard_renderer::{DashboardRenderer, MockDashboardRenderer, NoOpDashboardRenderer};
