//! Drawing surface shared by the graphical front-end and the framebuffer

use std::io;

use crate::font::{self, Font};
use crate::rgb::Rgba;
use crate::xpm::XpmImage;

/// A pixel surface the menu can be drawn on.
///
/// Implementors provide pixel access; rectangles, text and images are built
/// on top of it. Coordinates outside the surface are silently clipped.
pub trait Canvas {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Set one pixel; ignored outside the surface
    fn plot(&mut self, x: i32, y: i32, color: Rgba);

    /// Current color of a pixel, `None` outside the surface
    fn pixel(&self, x: i32, y: i32) -> Option<Rgba>;

    /// Push the drawn frame to the output device
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn clear(&mut self, color: Rgba) {
        let (width, height) = (self.width(), self.height());
        self.draw_rect(0, 0, width, height, color);
    }

    /// Blend `color` over the current pixel using its alpha
    fn blend(&mut self, x: i32, y: i32, color: Rgba) {
        match color.a {
            0 => {}
            0xff => self.plot(x, y, color),
            _ => {
                if let Some(below) = self.pixel(x, y) {
                    self.plot(x, y, color.blend_over(below));
                }
            }
        }
    }

    fn draw_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgba) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x as i64 + width as i64).min(self.width() as i64) as i32;
        let y1 = (y as i64 + height as i64).min(self.height() as i64) as i32;

        for py in y0..y1 {
            for px in x0..x1 {
                self.plot(px, py, color);
            }
        }
    }

    /// Rectangle outline `thickness` pixels wide, drawn inside the bounds
    fn draw_frame(&mut self, x: i32, y: i32, width: u32, height: u32, thickness: u32, color: Rgba) {
        if width == 0 || height == 0 {
            return;
        }
        let t = thickness.min(width / 2).min(height / 2).max(1);
        self.draw_rect(x, y, width, t, color);
        self.draw_rect(x, y + (height - t) as i32, width, t, color);
        self.draw_rect(x, y, t, height, color);
        self.draw_rect(x + (width - t) as i32, y, t, height, color);
    }

    fn draw_text(&mut self, x: i32, y: i32, color: Rgba, font: &Font, text: &str) {
        font::render(self, x, y, color, font, text);
    }

    /// Draw an image with its top-left corner at (x, y); transparent pixels
    /// leave the background untouched.
    fn draw_image(&mut self, x: i32, y: i32, image: &XpmImage) {
        for iy in 0..image.height() {
            for ix in 0..image.width() {
                if let Some(color) = image.pixel(ix, iy) {
                    self.blend(x + ix as i32, y + iy as i32, color);
                }
            }
        }
    }
}

/// An in-memory RGBA surface
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32, fill: Rgba) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; width as usize * height as usize],
        }
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y as usize * self.width as usize + x as usize])
    }

    /// Rows of pixels, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Rgba]> {
        self.pixels.chunks(self.width.max(1) as usize)
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = u32::try_from(x).ok()?;
        let y = u32::try_from(y).ok()?;
        (x < self.width && y < self.height)
            .then(|| y as usize * self.width as usize + x as usize)
    }
}

impl Canvas for PixelBuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn plot(&mut self, x: i32, y: i32, color: Rgba) {
        if let Some(index) = self.index(x, y) {
            self.pixels[index] = color;
        }
    }

    fn pixel(&self, x: i32, y: i32) -> Option<Rgba> {
        self.index(x, y).map(|index| self.pixels[index])
    }
}
