//! GUI module - User interface components

mod app;
mod chart_viewer;
mod control_panel;
mod narrative;
mod table_view;

pub use app::ReviewDashboardApp;
pub use chart_viewer::ChartViewer;
pub use control_panel::{ControlPanel, ControlPanelAction};
pub use table_view::ReviewTableView;
