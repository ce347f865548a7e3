use std::cmp::Ordering;
use std::sync::Arc;

use glam::Vec2;
use iced::{Element, Rectangle};

use crate::content::{ContentContext, ItemSorter, TooltipContent, ValueFormatter};
use crate::message::TooltipUiMessage;
use crate::payload::{DedupRule, PayloadEntry};
use crate::placement::AnchorPosition;
use crate::style::{AnimationSettings, WrapperStyle};
use crate::tooltip::{Tooltip, TooltipError};

/// Builder for configuring and constructing a [`Tooltip`].
///
/// Provides a fluent API for setting up the overlay before handing it to
/// application state. All settings have sensible defaults.
///
/// # Example
///
/// ```
/// use iced_tooltip::{PayloadEntry, Rectangle, TooltipBuilder};
///
/// let tooltip = TooltipBuilder::new()
///     .with_view_box(Rectangle {
///         x: 0.0,
///         y: 0.0,
///         width: 300.0,
///         height: 200.0,
///     })
///     .with_label("2024-06-01")
///     .with_payload(vec![
///         PayloadEntry::new("uv", 300.0).with_data_key("uv"),
///         PayloadEntry::new("pv", 200.0).with_data_key("pv"),
///     ])
///     .with_offset(12.0)
///     .build()
///     .unwrap();
/// # let _ = tooltip;
/// ```
#[derive(Default)]
pub struct TooltipBuilder {
    active: Option<bool>,
    payload: Vec<PayloadEntry>,
    filter_null: Option<bool>,
    dedup: Option<DedupRule>,
    label: Option<String>,
    separator: Option<String>,
    formatter: Option<ValueFormatter>,
    item_sorter: Option<ItemSorter>,
    coordinate: Option<Vec2>,
    position: Option<AnchorPosition>,
    view_box: Option<Rectangle>,
    offset: Option<f32>,
    use_translate3d: Option<bool>,
    animation: Option<AnimationSettings>,
    wrapper_style: Option<WrapperStyle>,
    content: Option<TooltipContent>,
}

impl TooltipBuilder {
    /// Create a new TooltipBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the overlay from the start. Inactive by default.
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }

    /// Set the initial raw payload.
    pub fn with_payload(mut self, payload: Vec<PayloadEntry>) -> Self {
        self.payload = payload;
        self
    }

    /// Enable or disable dropping entries with missing samples.
    pub fn with_filter_null(mut self, enabled: bool) -> Self {
        self.filter_null = Some(enabled);
        self
    }

    /// Set the dedup rule for the displayed entry set.
    pub fn with_dedup(mut self, rule: DedupRule) -> Self {
        self.dedup = Some(rule);
        self
    }

    /// Set the heading line of the built-in content.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        let l = label.into();
        if !l.is_empty() {
            self.label = Some(l);
        }
        self
    }

    /// Set the separator between an entry's name and value.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    /// Provide a custom value formatter for the built-in content.
    pub fn with_formatter<F>(mut self, formatter: F) -> Self
    where
        F: Fn(&PayloadEntry) -> String + Send + Sync + 'static,
    {
        self.formatter = Some(Arc::new(formatter));
        self
    }

    /// Provide a display order for the built-in content.
    pub fn with_item_sorter<F>(mut self, sorter: F) -> Self
    where
        F: Fn(&PayloadEntry, &PayloadEntry) -> Ordering + Send + Sync + 'static,
    {
        self.item_sorter = Some(Arc::new(sorter));
        self
    }

    /// Set the initial target coordinate.
    pub fn with_coordinate(mut self, coordinate: Vec2) -> Self {
        self.coordinate = Some(coordinate);
        self
    }

    /// Pin the anchor explicitly, per axis.
    pub fn with_position(mut self, position: AnchorPosition) -> Self {
        self.position = Some(position);
        self
    }

    /// Set the region the box must stay within.
    pub fn with_view_box(mut self, view_box: Rectangle) -> Self {
        self.view_box = Some(view_box);
        self
    }

    /// Set the gap kept between the target and the box edge.
    pub fn with_offset(mut self, offset: f32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Select the 3D transform variant. Has no effect on placement.
    pub fn with_translate3d(mut self, enabled: bool) -> Self {
        self.use_translate3d = Some(enabled);
        self
    }

    /// Configure the transition exposed to the host's animation layer.
    pub fn with_animation(mut self, animation: AnimationSettings) -> Self {
        self.animation = Some(animation);
        self
    }

    /// Override parts of the bubble style.
    pub fn with_wrapper_style(mut self, style: WrapperStyle) -> Self {
        self.wrapper_style = Some(style);
        self
    }

    /// Replace the built-in content with a custom renderer.
    pub fn with_content<F>(mut self, renderer: F) -> Self
    where
        F: Fn(ContentContext<'_>) -> Element<'static, TooltipUiMessage> + Send + Sync + 'static,
    {
        self.content = Some(TooltipContent::Custom(Arc::new(renderer)));
        self
    }

    /// Build the tooltip; validates the offset and view box.
    pub fn build(self) -> Result<Tooltip, TooltipError> {
        if let Some(offset) = self.offset
            && (!offset.is_finite() || offset < 0.0)
        {
            return Err(TooltipError::InvalidOffset);
        }
        if let Some(view_box) = self.view_box
            && !(view_box.x.is_finite()
                && view_box.y.is_finite()
                && view_box.width.is_finite()
                && view_box.height.is_finite())
        {
            return Err(TooltipError::InvalidViewBox);
        }

        let mut tooltip = Tooltip::new();

        if let Some(active) = self.active {
            tooltip.set_active(active);
        }
        if !self.payload.is_empty() {
            tooltip.set_payload(self.payload);
        }
        if let Some(enabled) = self.filter_null {
            tooltip.set_filter_null(enabled);
        }
        if let Some(rule) = self.dedup {
            tooltip.set_dedup(rule);
        }
        if let Some(label) = self.label {
            tooltip.set_label(label);
        }
        if let Some(separator) = self.separator {
            tooltip.set_separator(separator);
        }
        if let Some(formatter) = self.formatter {
            tooltip.set_formatter(formatter);
        }
        if let Some(sorter) = self.item_sorter {
            tooltip.set_item_sorter(sorter);
        }
        if let Some(coordinate) = self.coordinate {
            tooltip.set_coordinate(Some(coordinate));
        }
        if let Some(position) = self.position {
            tooltip.set_position(position);
        }
        if let Some(view_box) = self.view_box {
            tooltip.set_view_box(view_box);
        }
        if let Some(offset) = self.offset {
            tooltip.set_offset(offset);
        }
        if let Some(enabled) = self.use_translate3d {
            tooltip.set_use_translate3d(enabled);
        }
        if let Some(animation) = self.animation {
            tooltip.set_animation(animation);
        }
        if let Some(style) = self.wrapper_style {
            tooltip.set_wrapper_style(style);
        }
        if let Some(content) = self.content {
            tooltip.set_content(content);
        }

        Ok(tooltip)
    }
}
