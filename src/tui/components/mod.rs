pub mod breadcrumb;
pub mod scrollable;
pub mod status_bar;
pub mod tab_bar;

pub use breadcrumb::render_breadcrumb;
pub use scrollable::Scrollable;
pub use status_bar::render_status_bar;
pub use tab_bar::render_tab_bar;
