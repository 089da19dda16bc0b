//! Kernel hand-off and power control

use std::ffi::OsString;
use std::fs;
use std::path::Path;
use std::process::Command;

use anyhow::{bail, Context, Result};
use nix::sys::reboot::{reboot, RebootMode};

use crate::config::BootConfig;
use crate::devicescan::{resolve, BootItem, MountGuard};

/// Build the command line handed to the new kernel.
///
/// Starts from the item's own arguments, adds the host arguments named in
/// `preserve` unless the item already sets them, and finally points `root=`
/// at the item's device when nothing else does.
pub fn compose_cmdline(item: &BootItem, host_cmdline: &str, preserve: &[String]) -> String {
    let mut args: Vec<String> = item
        .cmdline
        .as_deref()
        .unwrap_or_default()
        .split_whitespace()
        .map(str::to_string)
        .collect();

    let has_key = |args: &[String], key: &str| args.iter().any(|arg| arg_key(arg) == key);

    for arg in host_cmdline.split_whitespace() {
        let key = arg_key(arg);
        if preserve.iter().any(|p| p == key) && !has_key(&args, key) {
            args.push(arg.to_string());
        }
    }

    if !has_key(&args, "root") {
        args.push(format!("root={}", item.device.display()));
        args.push(format!("rootfstype={}", item.fstype));
    }

    args.join(" ")
}

fn arg_key(arg: &str) -> &str {
    arg.split_once('=').map_or(arg, |(key, _)| key)
}

/// Arguments of the `kexec -l` call for a kernel mounted under `root`
pub fn load_args(item: &BootItem, root: &Path, cmdline: &str) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![
        "-l".into(),
        resolve(root, &item.kernel).into_os_string(),
        format!("--command-line={}", cmdline).into(),
    ];
    if let Some(initrd) = &item.initrd {
        let mut arg = OsString::from("--initrd=");
        arg.push(resolve(root, initrd));
        args.push(arg);
    }
    args
}

/// Load the item's kernel and jump into it.
///
/// Only returns on failure, or after logging the commands in dry-run mode.
pub fn boot(item: &BootItem, boot: &BootConfig, dry_run: bool) -> Result<()> {
    let host_cmdline = fs::read_to_string("/proc/cmdline").unwrap_or_default();
    let cmdline = compose_cmdline(item, host_cmdline.trim(), &boot.preserve_args);
    log::info!("Booting {} with '{}'", item.title(), cmdline);

    if dry_run {
        let args = load_args(item, &boot.mount_point, &cmdline);
        log::info!("Dry run: {} {:?}", boot.kexec.display(), args);
        log::info!("Dry run: {} -e", boot.kexec.display());
        return Ok(());
    }

    {
        let guard = MountGuard::mount(&item.device, &boot.mount_point, &item.fstype)?;
        let status = Command::new(&boot.kexec)
            .args(load_args(item, guard.target(), &cmdline))
            .status()
            .with_context(|| format!("Failed to run {}", boot.kexec.display()))?;
        if !status.success() {
            bail!("kexec failed to load {}: {}", item.kernel, status);
        }
    }

    sync_filesystems();
    let status = Command::new(&boot.kexec)
        .arg("-e")
        .status()
        .with_context(|| format!("Failed to run {}", boot.kexec.display()))?;
    bail!("kexec -e returned ({})", status)
}

fn sync_filesystems() {
    log::info!("Syncing filesystems...");
    unsafe {
        libc::sync();
    }
}

fn power(mode: RebootMode, dry_run: bool) -> Result<()> {
    if dry_run {
        log::info!("Dry run: {:?}", mode);
        return Ok(());
    }
    sync_filesystems();
    reboot(mode).context("reboot syscall failed")?;
    Ok(())
}

pub fn restart(dry_run: bool) -> Result<()> {
    log::info!("Rebooting");
    power(RebootMode::RB_AUTOBOOT, dry_run)
}

pub fn power_off(dry_run: bool) -> Result<()> {
    log::info!("Powering off");
    power(RebootMode::RB_POWER_OFF, dry_run)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devicescan::DeviceKind;
    use std::path::PathBuf;

    fn item(cmdline: Option<&str>) -> BootItem {
        BootItem {
            device: PathBuf::from("/dev/mmcblk0p2"),
            fstype: "ext4".to_string(),
            kind: DeviceKind::Mmc,
            kernel: "/boot/zImage".to_string(),
            label: None,
            cmdline: cmdline.map(str::to_string),
            initrd: None,
            icon_path: None,
            icon: None,
            priority: 0,
            is_default: false,
        }
    }

    fn preserve() -> Vec<String> {
        vec!["console".to_string(), "mtdparts".to_string()]
    }

    #[test]
    fn test_cmdline_adds_root() {
        let line = compose_cmdline(&item(None), "", &[]);
        assert_eq!(line, "root=/dev/mmcblk0p2 rootfstype=ext4");
    }

    #[test]
    fn test_cmdline_keeps_item_root() {
        let line = compose_cmdline(&item(Some("root=/dev/sda1 quiet")), "", &[]);
        assert_eq!(line, "root=/dev/sda1 quiet");
    }

    #[test]
    fn test_cmdline_preserves_host_args() {
        let host = "console=ttyS0,115200 mtdparts=nand:1M(boot) quiet kexecboot.ui=text";
        let line = compose_cmdline(&item(Some("rootwait")), host, &preserve());
        assert_eq!(
            line,
            "rootwait console=ttyS0,115200 mtdparts=nand:1M(boot) root=/dev/mmcblk0p2 rootfstype=ext4"
        );
    }

    #[test]
    fn test_cmdline_item_overrides_host() {
        let line = compose_cmdline(
            &item(Some("console=tty0 root=/dev/sda1")),
            "console=ttyS0",
            &preserve(),
        );
        assert_eq!(line, "console=tty0 root=/dev/sda1");
    }

    #[test]
    fn test_load_args() {
        let mut item = item(None);
        let strings = |args: Vec<OsString>| -> Vec<String> {
            args.into_iter()
                .map(|arg| arg.to_string_lossy().into_owned())
                .collect()
        };

        let args = strings(load_args(&item, Path::new("/mnt"), "quiet"));
        assert_eq!(args, ["-l", "/mnt/boot/zImage", "--command-line=quiet"]);

        item.initrd = Some("/boot/initrd".to_string());
        let args = strings(load_args(&item, Path::new("/mnt"), "quiet"));
        assert_eq!(args[3], "--initrd=/mnt/boot/initrd");
    }
}
