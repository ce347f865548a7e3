//! Pure placement rules for the tooltip box.

use glam::Vec2;
use iced::{Rectangle, Size};

/// Explicit anchor override for the tooltip box.
///
/// Each axis applies independently: a fully specified override bypasses
/// automatic placement outright, while a single-axis override pins that axis
/// and leaves the other to the automatic rule. Non-finite components are
/// ignored as if unset.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnchorPosition {
    /// Horizontal anchor in region pixel space.
    pub x: Option<f32>,
    /// Vertical anchor in region pixel space.
    pub y: Option<f32>,
}

impl AnchorPosition {
    /// Pin both axes.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
        }
    }

    /// Pin only the horizontal axis.
    pub fn x_only(x: f32) -> Self {
        Self {
            x: Some(x),
            y: None,
        }
    }

    /// Pin only the vertical axis.
    pub fn y_only(y: f32) -> Self {
        Self {
            x: None,
            y: Some(y),
        }
    }

    pub(crate) fn resolved_x(&self) -> Option<f32> {
        self.x.filter(|x| x.is_finite())
    }

    pub(crate) fn resolved_y(&self) -> Option<f32> {
        self.y.filter(|y| y.is_finite())
    }
}

/// Which side of the target coordinate the box occupies, per axis.
///
/// Exposed for styling hooks, e.g. pointing an arrow back at the target.
/// Exactly one of `right`/`left` and one of `bottom`/`top` hold once the box
/// is placed and the target is known; all four are false otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sides {
    /// The box starts at or after the target on the x axis.
    pub right: bool,
    /// The box starts before the target on the x axis.
    pub left: bool,
    /// The box starts at or after the target on the y axis.
    pub bottom: bool,
    /// The box starts before the target on the y axis.
    pub top: bool,
}

/// Final anchor for the overlay.
///
/// `translate` is `None` while the box cannot be positioned yet (unmeasured
/// without a full override); the next measurement pass resolves it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Placement {
    /// Top-left anchor of the box in region pixel space.
    pub translate: Option<Vec2>,
    /// Side classification relative to the target coordinate.
    pub sides: Sides,
}

impl Placement {
    /// Whether a definite anchor was produced.
    pub fn is_placeable(&self) -> bool {
        self.translate.is_some()
    }
}

/// Compute the anchor for a box of `box_size` annotating `coordinate` inside
/// `view_box`, keeping an `offset` gap from the target.
///
/// A fully specified `position` wins outright, even before the box has been
/// measured. Otherwise each axis prefers the side after the target and flips
/// to the side before it when the box would cross the far region edge, then
/// clamps to the near edge. Flipping never reconsiders the far edge: a box
/// larger than the region overflows it rather than disappearing.
pub fn compute_placement(
    view_box: Rectangle,
    coordinate: Option<Vec2>,
    position: AnchorPosition,
    box_size: Size,
    offset: f32,
) -> Placement {
    let translate = if let (Some(x), Some(y)) = (position.resolved_x(), position.resolved_y()) {
        Some(Vec2::new(x, y))
    } else if box_size.width > 0.0
        && box_size.height > 0.0
        && let Some(target) = coordinate
    {
        // A single overridden axis is taken verbatim; only the automatic
        // branch clamps to the region.
        let x = position.resolved_x().unwrap_or_else(|| {
            place_axis(target.x, box_size.width, offset, view_box.x, view_box.width)
        });
        let y = position.resolved_y().unwrap_or_else(|| {
            place_axis(target.y, box_size.height, offset, view_box.y, view_box.height)
        });
        Some(Vec2::new(x, y))
    } else {
        None
    };

    Placement {
        translate,
        sides: sides_for(translate, coordinate),
    }
}

/// One axis of the flip-then-clamp rule.
fn place_axis(target: f32, box_len: f32, offset: f32, region_start: f32, region_len: f32) -> f32 {
    let candidate = if target + box_len + offset > region_start + region_len {
        target - box_len - offset
    } else {
        target + offset
    };
    candidate.max(region_start)
}

fn sides_for(translate: Option<Vec2>, coordinate: Option<Vec2>) -> Sides {
    let (Some(anchor), Some(target)) = (translate, coordinate) else {
        return Sides::default();
    };

    let horizontal = anchor.x.is_finite() && target.x.is_finite();
    let vertical = anchor.y.is_finite() && target.y.is_finite();
    Sides {
        right: horizontal && anchor.x >= target.x,
        left: horizontal && anchor.x < target.x,
        bottom: vertical && anchor.y >= target.y,
        top: vertical && anchor.y < target.y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(width: f32, height: f32) -> Rectangle {
        Rectangle {
            x: 0.0,
            y: 0.0,
            width,
            height,
        }
    }

    #[test]
    fn fits_after_the_target() {
        let placement = compute_placement(
            region(300.0, 200.0),
            Some(Vec2::new(50.0, 50.0)),
            AnchorPosition::default(),
            Size::new(40.0, 20.0),
            10.0,
        );
        assert_eq!(placement.translate, Some(Vec2::new(60.0, 60.0)));
        assert!(placement.sides.right && placement.sides.bottom);
        assert!(!placement.sides.left && !placement.sides.top);
    }

    #[test]
    fn flips_at_the_far_edge() {
        let placement = compute_placement(
            region(300.0, 200.0),
            Some(Vec2::new(280.0, 50.0)),
            AnchorPosition::default(),
            Size::new(40.0, 20.0),
            10.0,
        );
        assert_eq!(placement.translate, Some(Vec2::new(230.0, 60.0)));
        assert!(placement.sides.left && placement.sides.bottom);
    }

    #[test]
    fn clamp_beats_flip_overflow() {
        // Box wider than the region: flipping would push it before the
        // region start, so the near edge is clamped and the far edge is
        // allowed to overflow.
        let placement = compute_placement(
            region(100.0, 200.0),
            Some(Vec2::new(90.0, 10.0)),
            AnchorPosition::default(),
            Size::new(150.0, 20.0),
            10.0,
        );
        assert_eq!(placement.translate, Some(Vec2::new(0.0, 20.0)));
    }

    #[test]
    fn translate_never_precedes_the_region() {
        let view_box = Rectangle {
            x: 25.0,
            y: 40.0,
            width: 120.0,
            height: 80.0,
        };
        for target in [
            Vec2::new(25.0, 40.0),
            Vec2::new(30.0, 45.0),
            Vec2::new(140.0, 115.0),
        ] {
            let placement = compute_placement(
                view_box,
                Some(target),
                AnchorPosition::default(),
                Size::new(90.0, 60.0),
                10.0,
            );
            let translate = placement.translate.unwrap();
            assert!(translate.x >= view_box.x);
            assert!(translate.y >= view_box.y);
        }
    }

    #[test]
    fn full_override_bypasses_the_region() {
        // The box has not been measured, yet a full override still places it.
        let placement = compute_placement(
            region(10.0, 10.0),
            Some(Vec2::ZERO),
            AnchorPosition::new(1000.0, -50.0),
            Size::new(-1.0, -1.0),
            10.0,
        );
        assert_eq!(placement.translate, Some(Vec2::new(1000.0, -50.0)));
        assert!(placement.sides.right && placement.sides.top);
    }

    #[test]
    fn partial_override_pins_one_axis() {
        // The overridden axis skips the clamp; the other still flips.
        let placement = compute_placement(
            region(300.0, 200.0),
            Some(Vec2::new(280.0, 50.0)),
            AnchorPosition::x_only(-5.0),
            Size::new(40.0, 20.0),
            10.0,
        );
        assert_eq!(placement.translate, Some(Vec2::new(-5.0, 60.0)));
    }

    #[test]
    fn nan_override_is_ignored() {
        let placement = compute_placement(
            region(300.0, 200.0),
            Some(Vec2::new(280.0, 50.0)),
            AnchorPosition::new(f32::NAN, 5.0),
            Size::new(40.0, 20.0),
            10.0,
        );
        assert_eq!(placement.translate, Some(Vec2::new(230.0, 5.0)));
    }

    #[test]
    fn unmeasured_box_is_not_placeable() {
        let placement = compute_placement(
            region(300.0, 200.0),
            Some(Vec2::new(50.0, 50.0)),
            AnchorPosition::default(),
            Size::new(-1.0, -1.0),
            10.0,
        );
        assert_eq!(placement.translate, None);
        assert_eq!(placement.sides, Sides::default());
    }

    #[test]
    fn absent_coordinate_is_not_placeable() {
        let placement = compute_placement(
            region(300.0, 200.0),
            None,
            AnchorPosition::default(),
            Size::new(40.0, 20.0),
            10.0,
        );
        assert_eq!(placement.translate, None);
    }

    #[test]
    fn recomputation_is_stable() {
        let compute = || {
            compute_placement(
                region(300.0, 200.0),
                Some(Vec2::new(280.0, 50.0)),
                AnchorPosition::default(),
                Size::new(40.0, 20.0),
                10.0,
            )
        };
        assert_eq!(compute(), compute());
    }
}
