//! Block device scanning
//!
//! Walks `/proc/partitions`, mounts every candidate read-only with each
//! filesystem type the kernel knows and collects the kernels it offers.

use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{Context, Result};
use nix::mount::{mount, umount, MsFlags};

use crate::config::{parse_boot_cfg, BootConfig, BootSection};
use crate::xpm::{self, Visual, XpmImage};

/// Device name prefixes never worth scanning
const SKIPPED_PREFIXES: &[&str] = &["loop", "ram", "zram", "sr", "dm-"];

/// What kind of storage a device is; picks the menu icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceKind {
    Mmc,
    HardDisk,
    Usb,
    Mtd,
    Other,
}

impl DeviceKind {
    /// Classify by kernel device name
    pub fn from_name(name: &str) -> DeviceKind {
        if name.starts_with("mmcblk") {
            DeviceKind::Mmc
        } else if name.starts_with("mtdblock") {
            DeviceKind::Mtd
        } else if ["sd", "hd", "vd", "nvme"].iter().any(|p| name.starts_with(p)) {
            DeviceKind::HardDisk
        } else {
            DeviceKind::Other
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DeviceKind::Mmc => "MMC/SD",
            DeviceKind::HardDisk => "Disk",
            DeviceKind::Usb => "USB",
            DeviceKind::Mtd => "NAND",
            DeviceKind::Other => "Storage",
        }
    }
}

/// A partition found in /proc/partitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    pub name: String,
    pub path: PathBuf,
    pub blocks: u64,
    pub kind: DeviceKind,
}

/// A bootable kernel found on a device
#[derive(Debug, Clone)]
pub struct BootItem {
    pub device: PathBuf,
    pub fstype: String,
    pub kind: DeviceKind,
    /// Kernel path relative to the device root
    pub kernel: String,
    pub label: Option<String>,
    pub cmdline: Option<String>,
    pub initrd: Option<String>,
    pub icon_path: Option<String>,
    pub icon: Option<Rc<XpmImage>>,
    pub priority: i32,
    pub is_default: bool,
}

impl BootItem {
    fn from_section(device: &Device, fstype: &str, section: BootSection) -> Self {
        Self {
            device: device.path.clone(),
            fstype: fstype.to_string(),
            kind: device.kind,
            kernel: section.kernel,
            label: section.label,
            cmdline: section.append,
            initrd: section.initrd,
            icon_path: section.icon,
            icon: None,
            priority: section.priority,
            is_default: section.is_default,
        }
    }

    /// Menu label: the configured one or the device and kernel
    pub fn title(&self) -> String {
        match &self.label {
            Some(label) if !label.is_empty() => label.clone(),
            _ => format!("{}: {}", self.device.display(), self.kernel),
        }
    }

    /// Second menu line describing where the kernel lives
    pub fn description(&self) -> String {
        format!(
            "{} {} ({}) {}",
            self.kind.name(),
            self.device.display(),
            self.fstype,
            self.kernel
        )
    }
}

/// Parse the contents of /proc/partitions
pub fn parse_partitions(text: &str) -> Vec<Device> {
    text.lines()
        .filter_map(|line| {
            let fields: Vec<&str> = line.split_whitespace().collect();
            let [_major, _minor, blocks, name] = fields[..] else {
                return None;
            };
            let blocks = blocks.parse::<u64>().ok()?;
            // extended partition placeholders report a single block
            if blocks <= 1 || SKIPPED_PREFIXES.iter().any(|p| name.starts_with(p)) {
                return None;
            }
            Some(Device {
                name: name.to_string(),
                path: Path::new("/dev").join(name),
                blocks,
                kind: DeviceKind::from_name(name),
            })
        })
        .collect()
}

/// Parse the contents of /proc/filesystems, keeping block filesystems only
pub fn parse_filesystems(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.starts_with("nodev"))
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Unmounts its target when dropped
#[derive(Debug)]
pub struct MountGuard {
    target: PathBuf,
}

impl MountGuard {
    /// Mount `device` read-only on `target`, trying each filesystem type in
    /// turn. Returns the guard and the type that worked.
    pub fn mount_any(device: &Path, target: &Path, fstypes: &[String]) -> Result<(Self, String)> {
        fs::create_dir_all(target).ok();

        for fstype in fstypes {
            let flags = MsFlags::MS_RDONLY | MsFlags::MS_NOATIME;
            if mount(Some(device), target, Some(fstype.as_str()), flags, None::<&str>).is_ok() {
                log::debug!("Mounted {} ({}) on {}", device.display(), fstype, target.display());
                let guard = MountGuard {
                    target: target.to_path_buf(),
                };
                return Ok((guard, fstype.clone()));
            }
        }

        anyhow::bail!("no filesystem type could mount {}", device.display())
    }

    /// Mount with a known filesystem type
    pub fn mount(device: &Path, target: &Path, fstype: &str) -> Result<Self> {
        fs::create_dir_all(target).ok();
        mount(Some(device), target, Some(fstype), MsFlags::MS_RDONLY, None::<&str>)
            .with_context(|| format!("Failed to mount {} on {}", device.display(), target.display()))?;
        Ok(MountGuard {
            target: target.to_path_buf(),
        })
    }

    pub fn target(&self) -> &Path {
        &self.target
    }
}

impl Drop for MountGuard {
    fn drop(&mut self) {
        if let Err(e) = umount(&self.target) {
            log::warn!("Failed to unmount {}: {}", self.target.display(), e);
        }
    }
}

/// Path of `file` (absolute within the device) under the mounted `root`
pub fn resolve(root: &Path, file: &str) -> PathBuf {
    root.join(file.trim_start_matches('/'))
}

/// Collect the boot items of a mounted device rooted at `root`
pub fn items_from_root(
    root: &Path,
    device: &Device,
    fstype: &str,
    boot: &BootConfig,
    visual: Visual,
) -> Vec<BootItem> {
    let cfg = boot
        .cfg_paths
        .iter()
        .map(|path| resolve(root, path))
        .find(|path| path.is_file());

    let mut items: Vec<BootItem> = match cfg {
        Some(path) => match fs::read_to_string(&path) {
            Ok(text) => parse_boot_cfg(&text)
                .into_iter()
                .map(|section| BootItem::from_section(device, fstype, section))
                .collect(),
            Err(e) => {
                log::warn!("Failed to read {}: {}", path.display(), e);
                Vec::new()
            }
        },
        None => boot
            .kernel_paths
            .iter()
            .find(|kernel| resolve(root, kernel).is_file())
            .map(|kernel| {
                let section = BootSection {
                    kernel: kernel.clone(),
                    ..Default::default()
                };
                BootItem::from_section(device, fstype, section)
            })
            .into_iter()
            .collect(),
    };

    for item in &mut items {
        let Some(icon) = &item.icon_path else {
            continue;
        };
        match xpm::load_file(&resolve(root, icon), visual) {
            Ok(image) => item.icon = Some(Rc::new(image)),
            Err(e) => log::warn!("Failed to load icon {}: {}", icon, e),
        }
    }

    items
}

/// Scans the system for bootable kernels
pub struct Scanner<'a> {
    pub boot: &'a BootConfig,
    pub visual: Visual,
}

impl Scanner<'_> {
    pub fn scan(&self) -> Result<Vec<BootItem>> {
        let partitions = fs::read_to_string("/proc/partitions")
            .context("Failed to read /proc/partitions")?;
        let filesystems = fs::read_to_string("/proc/filesystems")
            .context("Failed to read /proc/filesystems")?;
        let fstypes = parse_filesystems(&filesystems);

        let mut items = Vec::new();
        for mut device in parse_partitions(&partitions) {
            if is_usb(&device.name) {
                device.kind = DeviceKind::Usb;
            }
            match self.scan_device(&device, &fstypes) {
                Ok(found) => {
                    log::info!("{}: {} kernel(s)", device.path.display(), found.len());
                    items.extend(found);
                }
                Err(e) => log::debug!("Skipping {}: {:#}", device.path.display(), e),
            }
        }

        Ok(items)
    }

    fn scan_device(&self, device: &Device, fstypes: &[String]) -> Result<Vec<BootItem>> {
        let (guard, fstype) = MountGuard::mount_any(&device.path, &self.boot.mount_point, fstypes)?;
        Ok(items_from_root(guard.target(), device, &fstype, self.boot, self.visual))
    }
}

fn is_usb(name: &str) -> bool {
    fs::canonicalize(Path::new("/sys/class/block").join(name))
        .map(|path| path.to_string_lossy().contains("/usb"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARTITIONS: &str = "major minor  #blocks  name

 179        0    7761920 mmcblk0
 179        1      65536 mmcblk0p1
   8        0  500107608 sda
   8        1          1 sda1
   8        5   10485760 sda5
   7        0      12345 loop0
   1        0       4096 ram0
  11        0    1048575 sr0
 253        0     102400 dm-0
  31        0       1024 mtdblock0
";

    #[test]
    fn test_parse_partitions() {
        let names: Vec<String> = parse_partitions(PARTITIONS)
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(names, ["mmcblk0", "mmcblk0p1", "sda", "sda5", "mtdblock0"]);

        let device = &parse_partitions(PARTITIONS)[1];
        assert_eq!(device.path, PathBuf::from("/dev/mmcblk0p1"));
        assert_eq!(device.kind, DeviceKind::Mmc);
        assert_eq!(device.blocks, 65536);
    }

    #[test]
    fn test_parse_filesystems() {
        let text = "nodev\tsysfs\nnodev\tproc\n\text4\n\tvfat\nnodev\ttmpfs\n\tjffs2\n";
        assert_eq!(parse_filesystems(text), ["ext4", "vfat", "jffs2"]);
    }

    #[test]
    fn test_device_kind() {
        assert_eq!(DeviceKind::from_name("mmcblk1p2"), DeviceKind::Mmc);
        assert_eq!(DeviceKind::from_name("sdb1"), DeviceKind::HardDisk);
        assert_eq!(DeviceKind::from_name("nvme0n1p1"), DeviceKind::HardDisk);
        assert_eq!(DeviceKind::from_name("mtdblock3"), DeviceKind::Mtd);
        assert_eq!(DeviceKind::from_name("ubiblock0"), DeviceKind::Other);
    }

    fn device() -> Device {
        Device {
            name: "mmcblk0p1".to_string(),
            path: PathBuf::from("/dev/mmcblk0p1"),
            blocks: 1000,
            kind: DeviceKind::Mmc,
        }
    }

    #[test]
    fn test_items_from_boot_cfg() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir(root.path().join("boot")).unwrap();
        fs::write(
            root.path().join("boot/boot.cfg"),
            "LABEL=Linux\nKERNEL=/boot/zImage\nICON=/boot/icon.xpm\n\
             LABEL=Broken icon\nKERNEL=/boot/zImage\nICON=/boot/missing.xpm\n",
        )
        .unwrap();
        fs::write(
            root.path().join("boot/icon.xpm"),
            "static char *icon[] = {\n\"1 1 1 1\",\n\"x c white\",\n\"x\"};\n",
        )
        .unwrap();

        let items = items_from_root(root.path(), &device(), "ext4", &BootConfig::default(), Visual::Color);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title(), "Linux");
        assert_eq!(items[0].fstype, "ext4");
        assert_eq!(items[0].device, PathBuf::from("/dev/mmcblk0p1"));
        assert_eq!(items[0].icon.as_ref().unwrap().width(), 1);
        assert!(items[1].icon.is_none());
    }

    #[test]
    fn test_items_fall_back_to_kernel_paths() {
        let root = tempfile::tempdir().unwrap();
        fs::write(root.path().join("zImage"), b"kernel").unwrap();

        let items = items_from_root(root.path(), &device(), "vfat", &BootConfig::default(), Visual::Color);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].kernel, "/zImage");
        assert_eq!(items[0].title(), "/dev/mmcblk0p1: /zImage");
        assert!(items[0].cmdline.is_none());
    }

    #[test]
    fn test_items_none_found() {
        let root = tempfile::tempdir().unwrap();
        let items = items_from_root(root.path(), &device(), "ext4", &BootConfig::default(), Visual::Color);
        assert!(items.is_empty());
    }
}
