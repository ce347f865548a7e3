use iced::Size;

#[derive(Debug, Clone, Copy, PartialEq)]
/// Messages sent by the tooltip overlay to the application.
///
/// These messages close the render feedback loop: the host produces them
/// after a paint and feeds them back through [`Tooltip::update`].
///
/// [`Tooltip::update`]: crate::Tooltip::update
pub enum TooltipUiMessage {
    /// Internal post-paint measurement update.
    RenderUpdate(TooltipRenderUpdate),
}

/// Render-side facts folded back into the tooltip state after a paint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipRenderUpdate {
    /// Bounding size of the rendered box, or `None` when no backing node
    /// exists (e.g. headless rendering).
    pub measured: Option<Size>,
}
