//! Menu icons
//!
//! Icons are XPM files in the theme directory, decoded once at start-up and
//! shared with the menu entries that show them.

use std::collections::HashMap;
use std::path::Path;
use std::rc::Rc;

use crate::devicescan::DeviceKind;
use crate::xpm::{self, Visual, XpmError, XpmImage};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Logo,
    Device(DeviceKind),
    System,
    Rescan,
    Reboot,
    Shutdown,
    Debug,
    Back,
    Exit,
}

impl Icon {
    pub const ALL: [Icon; 13] = [
        Icon::Logo,
        Icon::Device(DeviceKind::Mmc),
        Icon::Device(DeviceKind::HardDisk),
        Icon::Device(DeviceKind::Usb),
        Icon::Device(DeviceKind::Mtd),
        Icon::Device(DeviceKind::Other),
        Icon::System,
        Icon::Rescan,
        Icon::Reboot,
        Icon::Shutdown,
        Icon::Debug,
        Icon::Back,
        Icon::Exit,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            Icon::Logo => "logo.xpm",
            Icon::Device(DeviceKind::Mmc) => "mmc.xpm",
            Icon::Device(DeviceKind::HardDisk) => "hdd.xpm",
            Icon::Device(DeviceKind::Usb) => "usb.xpm",
            Icon::Device(DeviceKind::Mtd) => "memory.xpm",
            Icon::Device(DeviceKind::Other) => "storage.xpm",
            Icon::System => "system.xpm",
            Icon::Rescan => "rescan.xpm",
            Icon::Reboot => "reboot.xpm",
            Icon::Shutdown => "shutdown.xpm",
            Icon::Debug => "debug.xpm",
            Icon::Back => "back.xpm",
            Icon::Exit => "exit.xpm",
        }
    }
}

/// The set of decoded icons; any of them may be missing
#[derive(Debug, Default)]
pub struct Theme {
    icons: HashMap<Icon, Rc<XpmImage>>,
}

impl Theme {
    /// Load every icon found in `dir`. Missing files are skipped, broken
    /// ones are logged and skipped.
    pub fn load(dir: &Path, visual: Visual) -> Theme {
        let mut theme = Theme::default();

        for icon in Icon::ALL {
            let path = dir.join(icon.file_name());
            match xpm::load_file(&path, visual) {
                Ok(image) => theme.insert(icon, image),
                Err(XpmError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                    log::debug!("No icon {}", path.display());
                }
                Err(e) => log::warn!("Failed to load {}: {}", path.display(), e),
            }
        }

        log::info!("Theme {}: {} icon(s)", dir.display(), theme.icons.len());
        theme
    }

    pub fn insert(&mut self, icon: Icon, image: XpmImage) {
        self.icons.insert(icon, Rc::new(image));
    }

    pub fn icon(&self, icon: Icon) -> Option<Rc<XpmImage>> {
        self.icons.get(&icon).cloned()
    }
}
