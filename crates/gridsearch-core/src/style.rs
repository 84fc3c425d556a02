//! Colours and the default tile palette.

use crate::cell::{Paint, Role};

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// An RGB colour packed into a `u32` (0x00RRGGBB).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color(pub u32);

impl Color {
    /// Construct from individual RGB components.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    /// Red component.
    #[inline]
    pub const fn r(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    /// Green component.
    #[inline]
    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    /// Blue component.
    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 & 0xFF) as u8
    }
}

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// Colours a renderer uses for each paint state and endpoint marker.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Palette {
    pub blank: Color,
    pub wall: Color,
    pub visited: Color,
    pub path: Color,
    pub start_marker: Color,
    pub end_marker: Color,
}

impl Palette {
    /// Background colour for a paint state.
    pub const fn background(&self, paint: Paint) -> Color {
        match paint {
            Paint::Blank => self.blank,
            Paint::Wall => self.wall,
            Paint::Visited => self.visited,
            Paint::Path => self.path,
        }
    }

    /// Marker colour drawn on top of the endpoints.
    pub const fn marker(&self, role: Role) -> Option<Color> {
        match role {
            Role::Start => Some(self.start_marker),
            Role::End => Some(self.end_marker),
            Role::Open | Role::Wall => None,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            blank: Color::from_rgb(200, 200, 200),
            wall: Color::from_rgb(50, 50, 50),
            visited: Color::from_rgb(50, 245, 250),
            path: Color::from_rgb(7, 138, 0),
            start_marker: Color::from_rgb(0, 255, 0),
            end_marker: Color::from_rgb(255, 0, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_components() {
        let c = Color::from_rgb(0xAB, 0xCD, 0xEF);
        assert_eq!(c.r(), 0xAB);
        assert_eq!(c.g(), 0xCD);
        assert_eq!(c.b(), 0xEF);
    }

    #[test]
    fn palette_maps_paint_and_markers() {
        let p = Palette::default();
        assert_eq!(p.background(Paint::Wall), Color::from_rgb(50, 50, 50));
        assert_eq!(p.background(Paint::Path), p.path);
        assert_eq!(p.marker(Role::End), Some(p.end_marker));
        assert_eq!(p.marker(Role::Open), None);
    }
}
