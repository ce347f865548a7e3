//! Content rendering strategies for the tooltip box.

use std::cmp::Ordering;
use std::sync::Arc;

use glam::Vec2;
use iced::Element;
use iced::widget::text::Wrapping;
use iced::widget::{column, text};

use crate::message::TooltipUiMessage;
use crate::payload::{PayloadEntry, PayloadValue};

/// Formats one entry's value for display.
///
/// When unset, the built-in content falls back to
/// [`PayloadValue::display`] plus the entry's unit suffix.
pub type ValueFormatter = Arc<dyn Fn(&PayloadEntry) -> String + Send + Sync>;

/// Orders entries for display.
///
/// Sorting affects presentation only, never the visibility gate.
pub type ItemSorter = Arc<dyn Fn(&PayloadEntry, &PayloadEntry) -> Ordering + Send + Sync>;

/// Renders the tooltip content from the processed payload.
pub type ContentRenderer =
    Arc<dyn Fn(ContentContext<'_>) -> Element<'static, TooltipUiMessage> + Send + Sync>;

/// Snapshot handed to a content renderer, after payload processing.
#[derive(Debug, Clone, Copy)]
pub struct ContentContext<'a> {
    /// The displayed entry set, filtered and deduplicated.
    pub payload: &'a [PayloadEntry],
    /// Heading line, usually the shared axis value.
    pub label: Option<&'a str>,
    /// Separator between an entry's name and value.
    pub separator: &'a str,
    /// The annotated point, when known.
    pub coordinate: Option<Vec2>,
    /// The caller's visibility intent.
    pub active: bool,
    /// Whether the overlay renders invisibly this pass. Custom renderers
    /// must draw nothing visible while this is set; the widget tree still
    /// participates in layout so the box stays measurable.
    pub hidden: bool,
}

/// How the box content is produced.
#[derive(Clone, Default)]
pub enum TooltipContent {
    /// The built-in name/value list.
    #[default]
    Default,
    /// A caller-supplied renderer, invoked once per render pass with the
    /// processed payload.
    Custom(ContentRenderer),
}

/// The built-in list content: an optional heading plus one line per entry.
pub(crate) fn default_content(
    ctx: ContentContext<'_>,
    formatter: Option<&ValueFormatter>,
    sorter: Option<&ItemSorter>,
) -> Element<'static, TooltipUiMessage> {
    let mut entries: Vec<&PayloadEntry> = ctx.payload.iter().collect();
    if let Some(sorter) = sorter {
        entries.sort_by(|a, b| sorter(a, b));
    }

    let mut lines = column![].spacing(2.0);
    if let Some(label) = ctx.label
        && !label.is_empty()
    {
        lines = lines.push(text(label.to_owned()).size(12.0).wrapping(Wrapping::None));
    }

    for entry in entries {
        let mut line = text(line_for(entry, ctx.separator, formatter))
            .size(12.0)
            .wrapping(Wrapping::None);
        if let Some(color) = entry.color {
            // Entries with an explicit color bypass the container's text
            // color, so the hidden state has to zero the alpha here.
            let alpha = if ctx.hidden { 0.0 } else { 1.0 };
            line = line.color(color.scale_alpha(alpha));
        }
        lines = lines.push(line);
    }

    lines.into()
}

/// One displayed line: `name`, separator, value and unit.
fn line_for(entry: &PayloadEntry, separator: &str, formatter: Option<&ValueFormatter>) -> String {
    let value = formatter
        .map(|format| format(entry))
        .unwrap_or_else(|| formatted_value(entry));

    if entry.hide_name || entry.name.is_empty() {
        value
    } else {
        format!("{}{}{}", entry.name, separator, value)
    }
}

fn formatted_value(entry: &PayloadEntry) -> String {
    let value = entry
        .value
        .as_ref()
        .map(PayloadValue::display)
        .unwrap_or_default();
    match &entry.unit {
        Some(unit) => format!("{value}{unit}"),
        None => value,
    }
}
