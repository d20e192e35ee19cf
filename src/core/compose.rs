use super::constants::*;
use super::layer::Role;
use glam::Vec2;
use std::fmt;

/// Layout breakpoint derived from the viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    Wide,
    Narrow,
}

impl Breakpoint {
    #[inline]
    pub fn for_width(viewport_width: f32) -> Self {
        if viewport_width <= NARROW_BREAKPOINT_PX {
            Breakpoint::Narrow
        } else {
            Breakpoint::Wide
        }
    }

    /// Centering offset of the center figure, in percent of its own size.
    #[inline]
    pub fn center_base_pct(self) -> Vec2 {
        match self {
            Breakpoint::Wide => Vec2::from(CENTER_BASE_WIDE_PCT),
            Breakpoint::Narrow => Vec2::from(CENTER_BASE_NARROW_PCT),
        }
    }
}

/// A layer's CSS translation: a percentage base plus a pixel offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerTransform {
    pub base_pct: Option<Vec2>,
    pub offset_px: Vec2,
}

impl LayerTransform {
    #[inline]
    pub fn translate(offset_px: Vec2) -> Self {
        Self {
            base_pct: None,
            offset_px,
        }
    }

    /// Render as a CSS `transform` value.
    pub fn css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for LayerTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // adding zero folds -0.0 so a centred pointer prints "0px"
        let o = self.offset_px + Vec2::ZERO;
        match self.base_pct {
            None => write!(f, "translate({}px, {}px)", o.x, o.y),
            Some(b) => write!(
                f,
                "translate(calc({}% + {}px), calc({}% + {}px))",
                b.x, o.x, b.y, o.y
            ),
        }
    }
}

/// Compose a layer's final transform from its already-scaled movement.
///
/// The center figure keeps its breakpoint centering and its movement is
/// clamped so it never leaves the text it overlaps.
pub fn compose(role: Role, movement: Vec2, viewport_width: f32) -> LayerTransform {
    match role {
        Role::CenterFigure => {
            let limit = Vec2::new(CENTER_CLAMP_X_PX, CENTER_CLAMP_Y_PX);
            LayerTransform {
                base_pct: Some(Breakpoint::for_width(viewport_width).center_base_pct()),
                offset_px: movement.clamp(-limit, limit),
            }
        }
        _ => LayerTransform::translate(movement),
    }
}
