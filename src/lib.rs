//! A flip-aware tooltip overlay widget for Iced charts.
//!
//! - Positions a floating annotation box next to a target coordinate
//! - Flips sides to stay inside the plotting area, clamping at the near edge
//! - Feeds post-paint size measurements back through a single message, so
//!   the render → measure → re-render loop always terminates
//! - Ships a default name/value content renderer, payload filtering with
//!   order-preserving dedup, layered styling, and transition values for the
//!   host's animation layer
//!
//! Quick start:
//!
//! ```
//! use iced_tooltip::{PayloadEntry, Rectangle, TooltipBuilder};
//!
//! let tooltip = TooltipBuilder::new()
//!     .with_active(true)
//!     .with_view_box(Rectangle {
//!         x: 0.0,
//!         y: 0.0,
//!         width: 300.0,
//!         height: 200.0,
//!     })
//!     .with_payload(vec![PayloadEntry::new("price", 42.5).with_unit(" €")])
//!     .build()
//!     .unwrap();
//! # let _ = tooltip;
//! ```
//!
//! Stack [`Tooltip::view`] over the chart, report the painted box size with
//! [`Tooltip::measure`] after every frame, and feed the returned message to
//! [`Tooltip::update`]. See `demos/` for the complete loop.

pub mod content;
pub mod measure;
pub mod message;
pub mod payload;
pub mod placement;
pub mod style;
pub mod tooltip;
pub mod tooltip_builder;

// Iced re-exports.
pub use iced::{Color, Rectangle, Size};

// Re-exports of public types.
pub use content::{ContentContext, ContentRenderer, ItemSorter, TooltipContent, ValueFormatter};
pub use measure::BoxMeasurer;
pub use message::{TooltipRenderUpdate, TooltipUiMessage};
pub use payload::{DedupRule, KeyExtractor, PayloadEntry, PayloadValue, displayed_payload};
pub use placement::{AnchorPosition, Placement, Sides, compute_placement};
pub use style::{
    AnimationSettings, Easing, OverlayStyle, Transform, Transition, Visibility, WrapperStyle,
};
pub use tooltip::{Tooltip, TooltipError};
pub use tooltip_builder::TooltipBuilder;
