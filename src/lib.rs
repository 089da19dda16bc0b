//! raven-kexecboot library
//!
//! Menu engine, image and font decoding, and the Linux glue (framebuffer,
//! input, device scanning, kexec) used by the `raven-kexecboot` binary.

pub mod app;
pub mod config;
pub mod debuglog;
pub mod devicescan;
pub mod fb;
pub mod font;
pub mod gfx;
pub mod input;
pub mod kexec;
pub mod menu;
pub mod rgb;
pub mod ui;
pub mod xpm;
