//! Cell: the atomic unit of the canvas.
//!
//! A cell is a character plus a palette index. Unlike a true-color terminal
//! cell there is no style state here: color resolution happens at
//! presentation time through the [`Palette`](super::Palette).

/// True-color RGB value used by palettes.
///
/// Three bytes for 24-bit color depth. The canvas itself never stores these;
/// cells carry palette indices and the presenter resolves them.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black (0, 0, 0)
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White (255, 255, 255)
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create from a 24-bit hex color (e.g., 0xFF5500).
    #[inline]
    pub const fn from_u32(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }
}

impl std::fmt::Debug for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<u32> for Rgb {
    /// Convert from a 24-bit hex color (e.g., 0xFF5500)
    #[inline]
    fn from(hex: u32) -> Self {
        Self::from_u32(hex)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

/// A single canvas cell: one character and one palette index.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    /// The character to display.
    pub ch: char,
    /// Index into the active [`Palette`](super::Palette).
    pub color: u8,
}

impl Cell {
    /// The default cell: a space in palette color 0.
    pub const EMPTY: Self = Self { ch: ' ', color: 0 };

    /// Create a cell.
    #[inline]
    pub const fn new(ch: char, color: u8) -> Self {
        Self { ch, color }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl std::fmt::Debug for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cell({:?}, {})", self.ch, self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_from_hex() {
        let rgb: Rgb = 0xFF8000.into();
        assert_eq!(rgb.r, 255);
        assert_eq!(rgb.g, 128);
        assert_eq!(rgb.b, 0);
    }

    #[test]
    fn test_rgb_from_tuple() {
        let rgb: Rgb = (12, 34, 56).into();
        assert_eq!(rgb, Rgb::new(12, 34, 56));
    }

    #[test]
    fn test_cell_default_is_empty() {
        assert_eq!(Cell::default(), Cell::EMPTY);
        assert_eq!(Cell::EMPTY.ch, ' ');
        assert_eq!(Cell::EMPTY.color, 0);
    }

    #[test]
    fn test_cell_equality() {
        assert_eq!(Cell::new('A', 2), Cell::new('A', 2));
        assert_ne!(Cell::new('A', 2), Cell::new('A', 3));
        assert_ne!(Cell::new('A', 2), Cell::new('B', 2));
    }
}
