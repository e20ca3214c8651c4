//! UI-Komponenten: Menü, Status-Bar, Distanz-Anzeige.

pub mod distance;
pub mod menu;
pub mod status;

pub use distance::render_distance_box;
pub use menu::render_menu;
pub use status::render_status_bar;
