use crate::descriptor::AnimatedStyle;
use crate::element::{Element, Size};
use crate::rect::Viewport;

use super::LoaderProps;

/// Build the overlay tree: an underlay with the indicator stacked on top.
///
/// With an animated binding both layers carry the same binding, so they move
/// and fade together. Custom content is wrapped in an animated container
/// only when there is a binding.
pub(super) fn render_overlay(
    props: &LoaderProps,
    animated: Option<&AnimatedStyle>,
    viewport: Viewport,
) -> Element {
    let underlay_style = props.underlay_style();
    let underlay_id = format!("{}-underlay", props.id);
    let indicator_id = format!("{}-indicator", props.id);

    let underlay = match (animated, &props.custom_underlay) {
        (Some(binding), Some(custom)) => Element::layers([custom(&underlay_style)])
            .id(underlay_id)
            .style(underlay_style)
            .bind(binding.clone()),
        (Some(binding), None) => Element::panel()
            .id(underlay_id)
            .style(underlay_style)
            .bind(binding.clone()),
        (None, Some(custom)) => custom(&underlay_style),
        (None, None) => Element::panel().id(underlay_id).style(underlay_style),
    };

    let indicator = match &props.custom_indicator {
        Some(custom) => custom(),
        None => Element::spinner(props.indicator_props.clone()),
    };
    let indicator = match animated {
        Some(binding) => Element::layers([indicator])
            .id(indicator_id)
            .bind(binding.clone()),
        None => indicator,
    };

    Element::layers([underlay, indicator])
        .id(props.id.clone())
        .size(Size::Fixed(viewport.width), Size::Fixed(viewport.height))
}
