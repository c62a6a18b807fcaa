use macroquad::color::Color;

/// Colour of points plotted for vertex 0.
pub const START_COLOR: Rgba = Rgba::new(0, 255, 255, 255);
/// Colour of points plotted for the last vertex.
pub const END_COLOR: Rgba = Rgba::new(255, 20, 147, 255);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

// Truncates toward zero; `as` saturates anything outside 0..=255
fn merge_channel(a: u8, b: u8, amount: f32) -> u8 {
    ((1.0 - amount) * a as f32 + amount * b as f32) as u8
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Blends `a` into `b` by `amount`. The fraction is not clamped.
    pub fn lerp(a: Rgba, b: Rgba, amount: f32) -> Rgba {
        Rgba {
            r: merge_channel(a.r, b.r, amount),
            g: merge_channel(a.g, b.g, amount),
            b: merge_channel(a.b, b.b, amount),
            a: merge_channel(a.a, b.a, amount),
        }
    }

    /// Colour of a point jumping toward vertex `index` of a `sides`-gon.
    pub fn for_vertex(index: usize, sides: usize) -> Rgba {
        let amount = index as f32 / (sides - 1) as f32;
        Self::lerp(START_COLOR, END_COLOR, amount)
    }
}

impl From<Rgba> for Color {
    fn from(c: Rgba) -> Self {
        Color::from_rgba(c.r, c.g, c.b, c.a)
    }
}
