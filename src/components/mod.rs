pub mod app;
pub mod location_modal;
pub mod map_view;
pub mod stats_panel;

pub use app::App;
