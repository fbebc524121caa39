//! Styling and theming for the application.

pub mod palette;
mod widgets;

pub use widgets::{
    banner_style, content_style, detail_header_style, ghost_button_style, header_style,
    icon_button_style, list_style, primary_button_style, row_border_style, row_hovered_style,
    row_selected_style, row_style, scrollable_style,
};
