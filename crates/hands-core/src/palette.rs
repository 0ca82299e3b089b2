//! Neon color palettes for the overlay and effects.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// CSS `rgba()` string for a 2D canvas context.
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {:.3})", self.r, self.g, self.b, self.a)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub name: &'static str,
    pub connector: Rgba,
    pub landmark: Rgba,
    pub glow: Rgba,
    pub lightning: Rgba,
    pub arrow: Rgba,
    pub sphere: Rgba,
    pub particle: Rgba,
    pub trail: Rgba,
}

pub const HEART_PINK: Rgba = Rgba::rgb(255, 80, 170);

pub const PALETTES: [Palette; 3] = [
    Palette {
        name: "neon",
        connector: Rgba::rgb(0, 249, 255),
        landmark: Rgba::rgb(255, 0, 255),
        glow: Rgba::rgb(255, 0, 255),
        lightning: Rgba::rgb(180, 220, 255),
        arrow: Rgba::rgb(0, 255, 140),
        sphere: Rgba::rgb(0, 249, 255),
        particle: Rgba::rgb(255, 0, 255),
        trail: Rgba::rgb(0, 249, 255),
    },
    Palette {
        name: "ember",
        connector: Rgba::rgb(255, 140, 0),
        landmark: Rgba::rgb(255, 40, 40),
        glow: Rgba::rgb(255, 90, 0),
        lightning: Rgba::rgb(255, 230, 150),
        arrow: Rgba::rgb(255, 200, 0),
        sphere: Rgba::rgb(255, 120, 0),
        particle: Rgba::rgb(255, 60, 20),
        trail: Rgba::rgb(255, 170, 60),
    },
    Palette {
        name: "toxic",
        connector: Rgba::rgb(120, 255, 0),
        landmark: Rgba::rgb(230, 255, 80),
        glow: Rgba::rgb(120, 255, 0),
        lightning: Rgba::rgb(200, 255, 200),
        arrow: Rgba::rgb(0, 255, 200),
        sphere: Rgba::rgb(160, 255, 60),
        particle: Rgba::rgb(220, 255, 0),
        trail: Rgba::rgb(90, 255, 120),
    },
];

#[inline]
pub fn palette(index: usize) -> &'static Palette {
    &PALETTES[index % PALETTES.len()]
}

/// Index of the palette called `name`, if any.
pub fn palette_index(name: &str) -> Option<usize> {
    PALETTES.iter().position(|p| p.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_string_is_well_formed() {
        assert_eq!(
            Rgba::rgb(0, 249, 255).with_alpha(0.5).to_css(),
            "rgba(0, 249, 255, 0.500)"
        );
    }

    #[test]
    fn palette_lookup_wraps_and_finds_names() {
        assert_eq!(palette(PALETTES.len()).name, PALETTES[0].name);
        assert_eq!(palette_index("EMBER"), Some(1));
        assert_eq!(palette_index("plaid"), None);
    }
}
