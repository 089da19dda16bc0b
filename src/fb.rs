//! Linux framebuffer device
//!
//! Drawing happens in a back buffer using logical coordinates, i.e. after
//! rotation. `flush` converts it to the device pixel layout and writes the
//! whole frame to `/dev/fbN`.

use std::fs::{File, OpenOptions};
use std::io;
use std::os::unix::fs::FileExt;
use std::os::unix::io::AsRawFd;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::gfx::{Canvas, PixelBuffer};
use crate::rgb::Rgba;

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FbBitfield {
    pub offset: u32,
    pub length: u32,
    pub msb_right: u32,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct FbVarScreeninfo {
    pub xres: u32,
    pub yres: u32,
    pub xres_virtual: u32,
    pub yres_virtual: u32,
    pub xoffset: u32,
    pub yoffset: u32,
    pub bits_per_pixel: u32,
    pub grayscale: u32,
    pub red: FbBitfield,
    pub green: FbBitfield,
    pub blue: FbBitfield,
    pub transp: FbBitfield,
    pub nonstd: u32,
    pub activate: u32,
    pub height: u32,
    pub width: u32,
    pub accel_flags: u32,
    pub pixclock: u32,
    pub left_margin: u32,
    pub right_margin: u32,
    pub upper_margin: u32,
    pub lower_margin: u32,
    pub hsync_len: u32,
    pub vsync_len: u32,
    pub sync: u32,
    pub vmode: u32,
    pub rotate: u32,
    pub colorspace: u32,
    pub reserved: [u32; 4],
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct FbFixScreeninfo {
    pub id: [u8; 16],
    pub smem_start: libc::c_ulong,
    pub smem_len: u32,
    pub type_: u32,
    pub type_aux: u32,
    pub visual: u32,
    pub xpanstep: u16,
    pub ypanstep: u16,
    pub ywrapstep: u16,
    pub line_length: u32,
    pub mmio_start: libc::c_ulong,
    pub mmio_len: u32,
    pub accel: u32,
    pub capabilities: u16,
    pub reserved: [u16; 2],
}

/// `FB_VISUAL_MONO01`: set bits are black
const FB_VISUAL_MONO01: u32 = 0;

nix::ioctl_read_bad!(fbioget_vscreeninfo, 0x4600, FbVarScreeninfo);
nix::ioctl_read_bad!(fbioget_fscreeninfo, 0x4602, FbFixScreeninfo);

/// Screen rotation, clockwise
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Rotation {
    #[default]
    None,
    Cw90,
    Half,
    Cw270,
}

impl Rotation {
    pub fn from_degrees(angle: u16) -> Option<Rotation> {
        match angle {
            0 => Some(Rotation::None),
            90 => Some(Rotation::Cw90),
            180 => Some(Rotation::Half),
            270 => Some(Rotation::Cw270),
            _ => None,
        }
    }

    /// Whether width and height swap between the device and the canvas
    pub fn is_transposed(self) -> bool {
        matches!(self, Rotation::Cw90 | Rotation::Cw270)
    }

    /// Map logical (x, y) on a `width` x `height` canvas to device coordinates
    pub fn apply(self, x: u32, y: u32, width: u32, height: u32) -> (u32, u32) {
        match self {
            Rotation::None => (x, y),
            Rotation::Cw90 => (height - 1 - y, x),
            Rotation::Half => (width - 1 - x, height - 1 - y),
            Rotation::Cw270 => (y, width - 1 - x),
        }
    }
}

/// Device pixel layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelFormat {
    pub bits_per_pixel: u32,
    pub red: FbBitfield,
    pub green: FbBitfield,
    pub blue: FbBitfield,
    /// Gray levels run from white down to black (1 and 2 bpp only)
    pub inverted: bool,
}

impl PixelFormat {
    pub fn bytes_per_pixel(&self) -> usize {
        self.bits_per_pixel as usize / 8
    }

    /// Depths below a byte hold gray levels packed several to a byte
    pub fn is_packed(&self) -> bool {
        self.bits_per_pixel < 8
    }

    /// Pack a color into a device pixel value
    pub fn pack(&self, color: Rgba) -> u32 {
        if self.is_packed() {
            let luma = (color.r as u32 * 77 + color.g as u32 * 150 + color.b as u32 * 29) >> 8;
            let level = luma >> (8 - self.bits_per_pixel);
            let max = (1 << self.bits_per_pixel) - 1;
            return if self.inverted { max - level } else { level };
        }
        let channel = |value: u8, field: &FbBitfield| {
            let length = field.length.min(8);
            if length == 0 {
                return 0;
            }
            ((value as u32) >> (8 - length)) << field.offset
        };
        channel(color.r, &self.red) | channel(color.g, &self.green) | channel(color.b, &self.blue)
    }
}

/// Convert a logical frame to device bytes
pub fn encode_frame(
    frame: &PixelBuffer,
    rotation: Rotation,
    format: &PixelFormat,
    line_length: usize,
    out: &mut [u8],
) {
    let bpp = format.bytes_per_pixel();
    let (width, height) = (frame.width(), frame.height());

    for (y, row) in frame.rows().enumerate() {
        for (x, &color) in row.iter().enumerate() {
            let (px, py) = rotation.apply(x as u32, y as u32, width, height);
            if format.is_packed() {
                put_packed(out, format, line_length, px, py, format.pack(color));
                continue;
            }
            let at = py as usize * line_length + px as usize * bpp;
            let Some(dst) = out.get_mut(at..at + bpp) else {
                continue;
            };
            let value = format.pack(color).to_le_bytes();
            dst.copy_from_slice(&value[..bpp]);
        }
    }
}

/// Store a 1 or 2 bpp value. The leftmost pixel of a byte sits in the low
/// bits on little-endian hosts and in the high bits on big-endian ones.
fn put_packed(
    out: &mut [u8],
    format: &PixelFormat,
    line_length: usize,
    px: u32,
    py: u32,
    value: u32,
) {
    let bits = format.bits_per_pixel as usize;
    let per_byte = 8 / bits;
    let at = py as usize * line_length + px as usize / per_byte;
    let Some(byte) = out.get_mut(at) else {
        return;
    };
    let slot = px as usize % per_byte;
    let shift = if cfg!(target_endian = "little") {
        slot * bits
    } else {
        8 - bits - slot * bits
    };
    let mask = (((1u32 << bits) - 1) << shift) as u8;
    *byte = (*byte & !mask) | ((value << shift) as u8 & mask);
}

/// An opened framebuffer device
pub struct Framebuffer {
    file: File,
    format: PixelFormat,
    rotation: Rotation,
    line_length: usize,
    back: PixelBuffer,
    frame: Vec<u8>,
}

impl Framebuffer {
    pub fn open(path: &Path, rotation: Rotation) -> Result<Framebuffer> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)
            .with_context(|| format!("Failed to open {}", path.display()))?;

        let mut var = FbVarScreeninfo::default();
        let mut fix = FbFixScreeninfo::default();
        unsafe {
            fbioget_vscreeninfo(file.as_raw_fd(), &mut var)
                .context("FBIOGET_VSCREENINFO failed")?;
            fbioget_fscreeninfo(file.as_raw_fd(), &mut fix)
                .context("FBIOGET_FSCREENINFO failed")?;
        }

        if !matches!(var.bits_per_pixel, 1 | 2 | 16 | 24 | 32) {
            bail!("unsupported framebuffer depth {} bpp", var.bits_per_pixel);
        }

        let format = PixelFormat {
            bits_per_pixel: var.bits_per_pixel,
            red: var.red,
            green: var.green,
            blue: var.blue,
            inverted: var.bits_per_pixel == 1 && fix.visual == FB_VISUAL_MONO01,
        };
        let (width, height) = if rotation.is_transposed() {
            (var.yres, var.xres)
        } else {
            (var.xres, var.yres)
        };
        let line_length = fix.line_length as usize;

        log::info!(
            "Framebuffer {}: {}x{} {} bpp, rotation {:?}",
            path.display(),
            var.xres,
            var.yres,
            var.bits_per_pixel,
            rotation
        );

        Ok(Framebuffer {
            file,
            format,
            rotation,
            line_length,
            back: PixelBuffer::new(width, height, Rgba::BLACK),
            frame: vec![0; line_length * var.yres as usize],
        })
    }

    pub fn bits_per_pixel(&self) -> u32 {
        self.format.bits_per_pixel
    }
}

impl Canvas for Framebuffer {
    fn width(&self) -> u32 {
        self.back.width()
    }

    fn height(&self) -> u32 {
        self.back.height()
    }

    fn plot(&mut self, x: i32, y: i32, color: Rgba) {
        self.back.plot(x, y, color);
    }

    fn pixel(&self, x: i32, y: i32) -> Option<Rgba> {
        self.back.pixel(x, y)
    }

    fn flush(&mut self) -> io::Result<()> {
        encode_frame(
            &self.back,
            self.rotation,
            &self.format,
            self.line_length,
            &mut self.frame,
        );
        self.file.write_all_at(&self.frame, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(offset: u32, length: u32) -> FbBitfield {
        FbBitfield {
            offset,
            length,
            msb_right: 0,
        }
    }

    fn rgb565() -> PixelFormat {
        PixelFormat {
            bits_per_pixel: 16,
            red: field(11, 5),
            green: field(5, 6),
            blue: field(0, 5),
            inverted: false,
        }
    }

    fn xrgb8888() -> PixelFormat {
        PixelFormat {
            bits_per_pixel: 32,
            red: field(16, 8),
            green: field(8, 8),
            blue: field(0, 8),
            inverted: false,
        }
    }

    #[test]
    fn test_pack_565() {
        let format = rgb565();
        assert_eq!(format.pack(Rgba::WHITE), 0xffff);
        assert_eq!(format.pack(Rgba::RED), 0xf800);
        assert_eq!(format.pack(Rgba::opaque(0, 255, 0)), 0x07e0);
        assert_eq!(format.pack(Rgba::BLACK), 0);
    }

    #[test]
    fn test_pack_8888() {
        let format = xrgb8888();
        assert_eq!(format.pack(Rgba::opaque(0x12, 0x34, 0x56)), 0x0012_3456);
    }

    #[test]
    fn test_rotation_corners() {
        // logical 3x2 canvas
        assert_eq!(Rotation::None.apply(2, 1, 3, 2), (2, 1));
        assert_eq!(Rotation::Cw90.apply(0, 0, 3, 2), (1, 0));
        assert_eq!(Rotation::Cw90.apply(2, 1, 3, 2), (0, 2));
        assert_eq!(Rotation::Half.apply(0, 0, 3, 2), (2, 1));
        assert_eq!(Rotation::Cw270.apply(0, 0, 3, 2), (0, 2));
        assert_eq!(Rotation::Cw270.apply(2, 1, 3, 2), (1, 0));
        assert_eq!(Rotation::from_degrees(45), None);
    }

    #[test]
    fn test_encode_frame_rotated() {
        // logical 2x1, device 1x2 after a quarter turn
        let mut frame = PixelBuffer::new(2, 1, Rgba::BLACK);
        frame.plot(0, 0, Rgba::WHITE);

        let format = rgb565();
        let mut out = vec![0u8; 4];
        encode_frame(&frame, Rotation::Cw90, &format, 2, &mut out);
        assert_eq!(out, [0xff, 0xff, 0x00, 0x00]);

        encode_frame(&frame, Rotation::Cw270, &format, 2, &mut out);
        assert_eq!(out, [0x00, 0x00, 0xff, 0xff]);
    }

    #[test]
    fn test_encode_frame_24bpp_with_padding() {
        let format = PixelFormat {
            bits_per_pixel: 24,
            ..xrgb8888()
        };
        let mut frame = PixelBuffer::new(1, 2, Rgba::BLACK);
        frame.plot(0, 1, Rgba::opaque(1, 2, 3));

        let mut out = vec![0u8; 8];
        encode_frame(&frame, Rotation::None, &format, 4, &mut out);
        assert_eq!(out, [0, 0, 0, 0, 3, 2, 1, 0]);
    }

    fn gray(bits_per_pixel: u32, inverted: bool) -> PixelFormat {
        PixelFormat {
            bits_per_pixel,
            red: FbBitfield::default(),
            green: FbBitfield::default(),
            blue: FbBitfield::default(),
            inverted,
        }
    }

    #[test]
    fn test_pack_gray_levels() {
        let format = gray(2, false);
        assert_eq!(format.pack(Rgba::BLACK), 0);
        assert_eq!(format.pack(Rgba::opaque(128, 128, 128)), 2);
        assert_eq!(format.pack(Rgba::WHITE), 3);

        assert_eq!(gray(1, false).pack(Rgba::WHITE), 1);
        assert_eq!(gray(1, true).pack(Rgba::WHITE), 0);
        assert_eq!(gray(1, true).pack(Rgba::BLACK), 1);
    }

    #[test]
    fn test_encode_frame_1bpp() {
        // 10x2 logical frame, two bytes per device line
        let mut frame = PixelBuffer::new(10, 2, Rgba::BLACK);
        frame.plot(0, 0, Rgba::WHITE);
        frame.plot(9, 1, Rgba::WHITE);

        let mut out = vec![0xffu8; 4];
        encode_frame(&frame, Rotation::None, &gray(1, false), 2, &mut out);
        if cfg!(target_endian = "little") {
            assert_eq!(out, [0x01, 0x00, 0x00, 0x02]);
        } else {
            assert_eq!(out, [0x80, 0x00, 0x00, 0x40]);
        }
    }

    #[test]
    fn test_encode_frame_2bpp() {
        let mut frame = PixelBuffer::new(4, 1, Rgba::BLACK);
        frame.plot(1, 0, Rgba::WHITE);
        frame.plot(3, 0, Rgba::opaque(128, 128, 128));

        let mut out = vec![0u8; 1];
        encode_frame(&frame, Rotation::None, &gray(2, false), 1, &mut out);
        if cfg!(target_endian = "little") {
            assert_eq!(out, [0b1000_1100]);
        } else {
            assert_eq!(out, [0b0011_0010]);
        }
    }
}
