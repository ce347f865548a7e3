//! Layered styling for the overlay container.
//!
//! Styles compose in a fixed order: the built-in bubble style first, then
//! the caller's [`WrapperStyle`] overrides, then the visibility/transform
//! layer. The last layer always wins, so a hidden or repositioned box can
//! never be overridden from below.

use glam::{Vec2, Vec3};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Easing curve for the slide transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
    Linear,
}

impl Easing {
    /// The CSS keyword for this curve, for hosts handing transitions to a
    /// CSS-like animation layer.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Ease => "ease",
            Self::EaseIn => "ease-in",
            Self::EaseOut => "ease-out",
            Self::EaseInOut => "ease-in-out",
            Self::Linear => "linear",
        }
    }
}

/// A transition the host's animation layer should apply to the translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub duration_ms: u32,
    pub easing: Easing,
}

/// Animation configuration for the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationSettings {
    /// Whether the translation animates at all.
    pub enabled: bool,
    pub duration_ms: u32,
    pub easing: Easing,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            duration_ms: 400,
            easing: Easing::Ease,
        }
    }
}

/// Whether the overlay is shown or kept invisible in place.
///
/// A hidden overlay still occupies its layout slot so the host can keep
/// measuring it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    Visible,
    #[default]
    Hidden,
}

impl Visibility {
    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Visible)
    }
}

/// The translation applied to the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Transform {
    /// No definite anchor yet; the box stays at the region origin.
    #[default]
    None,
    /// Plain 2D translation.
    Translate(Vec2),
    /// The same translation as a 3D variant with z = 0, for hosts that
    /// composite 3D transforms separately.
    Translate3d(Vec3),
}

impl Transform {
    /// The 2D translation carried by this transform, if any.
    pub fn translation(&self) -> Option<Vec2> {
        match self {
            Self::None => None,
            Self::Translate(translation) => Some(*translation),
            Self::Translate3d(translation) => Some(translation.truncate()),
        }
    }
}

/// Computed inline style of the overlay container for one render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayStyle {
    pub visibility: Visibility,
    pub transform: Transform,
    /// Present while the translation should animate.
    pub transition: Option<Transition>,
}

/// Caller overrides merged over the built-in bubble style.
///
/// Unset fields keep the built-in value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WrapperStyle {
    pub background: Option<Background>,
    pub text_color: Option<Color>,
    pub border: Option<Border>,
}

const BUBBLE_ALPHA: f32 = 0.7;

/// The built-in bubble style: a translucent rounded box on the weak
/// background of the current theme.
pub(crate) fn base_bubble_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(
            palette
                .background
                .weak
                .color
                .scale_alpha(BUBBLE_ALPHA)
                .into(),
        ),
        text_color: Some(palette.background.weak.text.scale_alpha(BUBBLE_ALPHA)),
        border: iced::border::rounded(2),
        ..container::Style::default()
    }
}

/// Compose the bubble style for one render pass.
pub(crate) fn bubble_style(
    theme: &Theme,
    wrapper: WrapperStyle,
    visibility: Visibility,
) -> container::Style {
    let base = base_bubble_style(theme);
    let style = container::Style {
        background: wrapper.background.or(base.background),
        text_color: wrapper.text_color.or(base.text_color),
        border: wrapper.border.unwrap_or(base.border),
        ..base
    };

    match visibility {
        Visibility::Visible => style,
        // The hidden layer wins over every override: strip all color but
        // keep the box in layout so it can still be measured.
        Visibility::Hidden => container::Style {
            background: None,
            text_color: Some(Color::TRANSPARENT),
            border: Border::default(),
            ..container::Style::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapper_overrides_the_base() {
        let wrapper = WrapperStyle {
            text_color: Some(Color::WHITE),
            ..WrapperStyle::default()
        };

        let style = bubble_style(&Theme::Dark, wrapper, Visibility::Visible);
        assert_eq!(style.text_color, Some(Color::WHITE));
        // Unset fields keep the built-in value.
        assert_eq!(
            style.background,
            base_bubble_style(&Theme::Dark).background
        );
    }

    #[test]
    fn hidden_wins_over_the_wrapper() {
        let wrapper = WrapperStyle {
            background: Some(Background::Color(Color::WHITE)),
            text_color: Some(Color::BLACK),
            ..WrapperStyle::default()
        };

        let style = bubble_style(&Theme::Dark, wrapper, Visibility::Hidden);
        assert_eq!(style.background, None);
        assert_eq!(style.text_color, Some(Color::TRANSPARENT));
    }

    #[test]
    fn transform_exposes_its_translation() {
        assert_eq!(Transform::None.translation(), None);
        assert_eq!(
            Transform::Translate(Vec2::new(3.0, 4.0)).translation(),
            Some(Vec2::new(3.0, 4.0))
        );
        assert_eq!(
            Transform::Translate3d(Vec3::new(3.0, 4.0, 0.0)).translation(),
            Some(Vec2::new(3.0, 4.0))
        );
    }

    #[test]
    fn easing_keywords() {
        assert_eq!(Easing::Ease.keyword(), "ease");
        assert_eq!(Easing::EaseInOut.keyword(), "ease-in-out");
    }
}
