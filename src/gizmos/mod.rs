//! Page widgets ("gizmos")
//!
//! Each gizmo is a plain options value that serialises into the page context
//! and renders its own HTML fragment.

pub mod map_view;
pub mod text_input;

pub use map_view::{MapView, MapViewOptions, MvLayer, MAP_ELEMENT_ID};
pub use text_input::TextInputOptions;
