use macroquad::prelude::*;

/// Pixels plotted so far. The screen is redrawn every frame, so points live here
/// and get uploaded to a texture instead of being drawn straight to the framebuffer.
pub struct Canvas {
    image: Image,
    dirty: bool,
}

impl Canvas {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            image: Image::gen_image_color(width, height, BLACK),
            dirty: true,
        }
    }

    pub fn image(&self) -> &Image {
        &self.image
    }

    pub fn clear(&mut self) {
        self.image
            .get_image_data_mut()
            .iter_mut()
            .for_each(|pixel| *pixel = [0, 0, 0, 255]);
        self.dirty = true;
    }

    /// Returns false when the pixel falls outside the canvas.
    pub fn plot(&mut self, (x, y): (i32, i32), color: Color) -> bool {
        if x < 0 || y < 0 || x >= self.image.width() as i32 || y >= self.image.height() as i32 {
            return false;
        }
        self.image.set_pixel(x as u32, y as u32, color);
        self.dirty = true;
        true
    }

    /// Clears the dirty flag, reporting whether the texture needs a re-upload.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }
}
