use icondata::Icon;
use leptos::{prelude::*, svg::svg};

/// Renders an `icondata` glyph as an inline SVG that inherits the text colour.
pub fn component(icon: Icon, class: &'static str) -> impl IntoView {
    svg()
        .attr("viewBox", icon.view_box)
        .attr("fill", "currentColor")
        .attr("aria-hidden", "true")
        .attr("innerHTML", icon.data)
        .class(class)
}
