use glam::Vec2;
use iced::alignment::{Horizontal, Vertical};
use iced::padding::Padding;
use iced::widget::container;
use iced::{Element, Length, Rectangle, Size};

use crate::content::{self, ContentContext, ItemSorter, TooltipContent, ValueFormatter};
use crate::measure::BoxMeasurer;
use crate::message::{TooltipRenderUpdate, TooltipUiMessage};
use crate::payload::{DedupRule, PayloadEntry, displayed_payload};
use crate::placement::{AnchorPosition, Placement, compute_placement};
use crate::style::{
    self, AnimationSettings, OverlayStyle, Transform, Transition, Visibility, WrapperStyle,
};

/// Errors that can occur when configuring a tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipError {
    /// Offset is negative or not finite.
    InvalidOffset,
    /// View box has a non-finite origin or size.
    InvalidViewBox,
}

/// A floating annotation box for a bounded chart region.
///
/// The tooltip is retained in application state like any other widget that
/// produces messages: configuration goes in through setters, the post-paint
/// measurement comes back through [`update`](Self::update), and
/// [`view`](Self::view) renders the positioned overlay. Stack the result
/// over the chart it annotates and report the painted box size with
/// [`measure`](Self::measure) after every frame.
pub struct Tooltip {
    // Configuration
    active: bool,
    payload: Vec<PayloadEntry>,
    filter_null: bool,
    dedup: DedupRule,
    label: Option<String>,
    separator: String,
    formatter: Option<ValueFormatter>,
    item_sorter: Option<ItemSorter>,
    coordinate: Option<Vec2>,
    position: AnchorPosition,
    view_box: Rectangle,
    offset: f32,
    use_translate3d: bool,
    animation: AnimationSettings,
    wrapper_style: WrapperStyle,
    content: TooltipContent,
    // State
    measurer: BoxMeasurer,
}

impl Default for Tooltip {
    fn default() -> Self {
        Self::new()
    }
}

impl Tooltip {
    /// Create a tooltip with default settings: inactive, empty payload, a
    /// zero region and the target at the region origin.
    pub fn new() -> Self {
        Self {
            active: false,
            payload: Vec::new(),
            filter_null: true,
            dedup: DedupRule::Off,
            label: None,
            separator: " : ".to_owned(),
            formatter: None,
            item_sorter: None,
            coordinate: Some(Vec2::ZERO),
            position: AnchorPosition::default(),
            view_box: Rectangle {
                x: 0.0,
                y: 0.0,
                width: 0.0,
                height: 0.0,
            },
            offset: 10.0,
            use_translate3d: false,
            animation: AnimationSettings::default(),
            wrapper_style: WrapperStyle::default(),
            content: TooltipContent::Default,
            measurer: BoxMeasurer::new(),
        }
    }

    /// Show or hide the overlay. Hidden tooltips still compute placement.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Replace the raw payload.
    pub fn set_payload(&mut self, payload: Vec<PayloadEntry>) {
        self.payload = payload;
    }

    /// Enable or disable dropping entries with missing samples (default: enabled).
    pub fn set_filter_null(&mut self, enabled: bool) {
        self.filter_null = enabled;
    }

    /// Set the dedup rule for the displayed entry set.
    pub fn set_dedup(&mut self, rule: DedupRule) {
        self.dedup = rule;
    }

    /// Set the heading line of the built-in content.
    pub fn set_label(&mut self, label: impl Into<String>) {
        let l = label.into();
        self.label = (!l.is_empty()).then_some(l);
    }

    /// Set the separator between an entry's name and value (default: `" : "`).
    pub fn set_separator(&mut self, separator: impl Into<String>) {
        self.separator = separator.into();
    }

    /// Set a custom value formatter for the built-in content.
    pub fn set_formatter(&mut self, formatter: ValueFormatter) {
        self.formatter = Some(formatter);
    }

    /// Set the display order of the built-in content.
    pub fn set_item_sorter(&mut self, sorter: ItemSorter) {
        self.item_sorter = Some(sorter);
    }

    /// Move the target coordinate; `None` suppresses automatic placement.
    pub fn set_coordinate(&mut self, coordinate: Option<Vec2>) {
        self.coordinate = coordinate;
    }

    /// Pin the anchor explicitly, per axis.
    pub fn set_position(&mut self, position: AnchorPosition) {
        self.position = position;
    }

    /// Set the region the box must stay within.
    pub fn set_view_box(&mut self, view_box: Rectangle) {
        self.view_box = view_box;
    }

    /// Set the gap kept between the target and the box edge (default: 10 px).
    pub fn set_offset(&mut self, offset: f32) {
        self.offset = offset.max(0.0);
    }

    /// Select the 3D transform variant. Has no effect on placement.
    pub fn set_use_translate3d(&mut self, enabled: bool) {
        self.use_translate3d = enabled;
    }

    /// Configure the transition exposed to the host's animation layer.
    pub fn set_animation(&mut self, animation: AnimationSettings) {
        self.animation = animation;
    }

    /// Override parts of the bubble style.
    pub fn set_wrapper_style(&mut self, style: WrapperStyle) {
        self.wrapper_style = style;
    }

    /// Select the content strategy.
    pub fn set_content(&mut self, content: TooltipContent) {
        self.content = content;
    }

    /// The entry set actually displayed, after null filtering and dedup.
    pub fn displayed_payload(&self) -> Vec<PayloadEntry> {
        displayed_payload(&self.payload, self.filter_null, &self.dedup)
    }

    /// The current placement, computed from the last measured size.
    pub fn placement(&self) -> Placement {
        compute_placement(
            self.view_box,
            self.coordinate,
            self.position,
            self.measurer.box_size(),
            self.offset,
        )
    }

    /// The computed overlay style for this render pass.
    ///
    /// The overlay is visible only while it is active, has something to
    /// show, and has a definite anchor; placement is computed regardless so
    /// the box is ready the moment it becomes visible.
    pub fn overlay_style(&self) -> OverlayStyle {
        let placement = self.placement();
        let has_payload = !self.displayed_payload().is_empty();
        self.overlay_style_for(placement, has_payload)
    }

    fn overlay_style_for(&self, placement: Placement, has_payload: bool) -> OverlayStyle {
        let visibility = if self.active && has_payload && placement.is_placeable() {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };

        let transform = match placement.translate {
            Some(translation) if self.use_translate3d => {
                Transform::Translate3d(translation.extend(0.0))
            }
            Some(translation) => Transform::Translate(translation),
            None => Transform::None,
        };

        let transition = (self.animation.enabled && self.active).then(|| Transition {
            duration_ms: self.animation.duration_ms,
            easing: self.animation.easing,
        });

        OverlayStyle {
            visibility,
            transform,
            transition,
        }
    }

    /// The size the box was last measured at, or the unmeasured sentinel.
    pub fn box_size(&self) -> Size {
        self.measurer.box_size()
    }

    /// Turn one post-paint report into the message to feed back, or `None`
    /// at the fixed point.
    ///
    /// Call after every paint with the rendered box's bounding size (`None`
    /// when there is no backing node). Feeding the returned message to
    /// [`update`](Self::update) triggers at most one corrective re-render;
    /// once the report repeats, this returns `None` and the loop is done.
    pub fn measure(&self, report: Option<Size>) -> Option<TooltipUiMessage> {
        self.measurer
            .needs_update(report)
            .then_some(TooltipUiMessage::RenderUpdate(TooltipRenderUpdate {
                measured: report,
            }))
    }

    /// Handle a message sent to the tooltip.
    pub fn update(&mut self, message: TooltipUiMessage) {
        match message {
            TooltipUiMessage::RenderUpdate(update) => {
                self.measurer.observe(update.measured);
            }
        }
    }

    /// View the positioned overlay.
    ///
    /// Always returns a complete element; while hidden it renders
    /// transparently in place so the host can keep measuring the box.
    pub fn view(&self) -> Element<'_, TooltipUiMessage> {
        let placement = self.placement();
        let displayed = self.displayed_payload();
        let overlay = self.overlay_style_for(placement, !displayed.is_empty());

        let ctx = ContentContext {
            payload: &displayed,
            label: self.label.as_deref(),
            separator: &self.separator,
            coordinate: self.coordinate,
            active: self.active,
            hidden: !overlay.visibility.is_visible(),
        };
        let content: Element<'_, TooltipUiMessage> = match &self.content {
            TooltipContent::Default => {
                content::default_content(ctx, self.formatter.as_ref(), self.item_sorter.as_ref())
            }
            TooltipContent::Custom(renderer) => renderer(ctx),
        };

        let wrapper = self.wrapper_style;
        let visibility = overlay.visibility;
        let bubble = container(content)
            .padding(6.0)
            .style(move |theme| style::bubble_style(theme, wrapper, visibility));

        // Position the bubble at the anchor inside a full-size transparent
        // layer; an unplaced box sits at the region origin, hidden.
        let translation = overlay.transform.translation().unwrap_or(Vec2::ZERO);
        container(bubble)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(Padding {
                top: translation.y,
                left: translation.x,
                ..Padding::ZERO
            })
            .align_x(Horizontal::Left)
            .align_y(Vertical::Top)
            .style(container::transparent)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Easing;

    fn measured(tooltip: &mut Tooltip, size: Size) {
        let message = tooltip.measure(Some(size)).expect("size change expected");
        tooltip.update(message);
    }

    fn tooltip_at_the_right_edge() -> Tooltip {
        let mut tooltip = Tooltip::new();
        tooltip.set_view_box(Rectangle {
            x: 0.0,
            y: 0.0,
            width: 300.0,
            height: 200.0,
        });
        tooltip.set_coordinate(Some(Vec2::new(280.0, 50.0)));
        tooltip.set_payload(vec![PayloadEntry::new("uv", 300.0).with_data_key("uv")]);
        tooltip.set_active(true);
        tooltip
    }

    #[test]
    fn measurement_loop_reaches_a_steady_state() {
        let mut tooltip = tooltip_at_the_right_edge();

        // First render pass: nothing measured yet, not placeable, hidden.
        assert_eq!(tooltip.placement().translate, None);
        assert!(!tooltip.overlay_style().visibility.is_visible());

        // Post-paint report arrives and triggers one corrective update.
        measured(&mut tooltip, Size::new(40.0, 20.0));
        assert_eq!(
            tooltip.placement().translate,
            Some(Vec2::new(230.0, 60.0))
        );
        assert!(tooltip.overlay_style().visibility.is_visible());
        let sides = tooltip.placement().sides;
        assert!(sides.left && sides.bottom);

        // The corrective render repeats the report: fixed point.
        assert_eq!(tooltip.measure(Some(Size::new(40.0, 20.0))), None);
    }

    #[test]
    fn losing_the_backing_node_hides_the_overlay() {
        let mut tooltip = tooltip_at_the_right_edge();
        measured(&mut tooltip, Size::new(40.0, 20.0));
        assert!(tooltip.overlay_style().visibility.is_visible());

        let message = tooltip.measure(None).expect("reset expected");
        tooltip.update(message);
        assert_eq!(tooltip.placement().translate, None);
        assert!(!tooltip.overlay_style().visibility.is_visible());
        assert_eq!(tooltip.measure(None), None);
    }

    #[test]
    fn visibility_requires_active_and_payload() {
        let mut tooltip = tooltip_at_the_right_edge();
        measured(&mut tooltip, Size::new(40.0, 20.0));

        tooltip.set_active(false);
        assert!(!tooltip.overlay_style().visibility.is_visible());

        tooltip.set_active(true);
        tooltip.set_payload(vec![PayloadEntry::missing("uv")]);
        assert!(!tooltip.overlay_style().visibility.is_visible());

        // Placement is still computed while hidden.
        assert!(tooltip.placement().is_placeable());
    }

    #[test]
    fn full_override_places_an_unmeasured_box() {
        let mut tooltip = tooltip_at_the_right_edge();
        tooltip.set_position(AnchorPosition::new(12.0, 34.0));

        assert_eq!(tooltip.placement().translate, Some(Vec2::new(12.0, 34.0)));
        assert!(tooltip.overlay_style().visibility.is_visible());
    }

    #[test]
    fn transition_requires_animation_and_active() {
        let mut tooltip = tooltip_at_the_right_edge();
        measured(&mut tooltip, Size::new(40.0, 20.0));

        let transition = tooltip.overlay_style().transition.expect("animated");
        assert_eq!(transition.duration_ms, 400);
        assert_eq!(transition.easing, Easing::Ease);

        tooltip.set_active(false);
        assert_eq!(tooltip.overlay_style().transition, None);

        tooltip.set_active(true);
        tooltip.set_animation(AnimationSettings {
            enabled: false,
            ..AnimationSettings::default()
        });
        assert_eq!(tooltip.overlay_style().transition, None);
    }

    #[test]
    fn translate3d_keeps_the_translation() {
        let mut tooltip = tooltip_at_the_right_edge();
        tooltip.set_use_translate3d(true);
        measured(&mut tooltip, Size::new(40.0, 20.0));

        let transform = tooltip.overlay_style().transform;
        assert_eq!(transform, Transform::Translate3d(glam::Vec3::new(230.0, 60.0, 0.0)));
        assert_eq!(transform.translation(), Some(Vec2::new(230.0, 60.0)));
    }

    #[test]
    fn absent_coordinate_stays_hidden() {
        let mut tooltip = tooltip_at_the_right_edge();
        tooltip.set_coordinate(None);
        measured(&mut tooltip, Size::new(40.0, 20.0));

        assert_eq!(tooltip.placement().translate, None);
        assert!(!tooltip.overlay_style().visibility.is_visible());
    }
}
