pub mod app;
pub mod pinch_zoom_text;
pub mod zoom_toggle;
