//! raven-kexecboot - kexec based boot menu
//!
//! Runs as init from an initramfs or as a normal program:
//! - scans block devices for kernels
//! - shows a menu on the framebuffer or the terminal
//! - loads the chosen kernel with kexec and jumps into it

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{self, Command};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use nix::mount::{mount, MsFlags};

use kexecboot::app::{App, Outcome};
use kexecboot::config::{Settings, UiMode};
use kexecboot::debuglog;
use kexecboot::devicescan::Scanner;
use kexecboot::fb::{Framebuffer, Rotation};
use kexecboot::input::{EvdevInput, InputSource, TerminalInput};
use kexecboot::kexec;
use kexecboot::ui::gui::{Colors, GraphicFrontend};
use kexecboot::ui::theme::{Icon, Theme};
use kexecboot::ui::tui::TextFrontend;
use kexecboot::ui::{build_menu, Frontend};
use kexecboot::xpm::Visual;

#[derive(Parser)]
#[command(name = "raven-kexecboot")]
#[command(author = "RavenLinux Team")]
#[command(version = "0.1.0")]
#[command(about = "Boot menu that starts kernels with kexec", long_about = None)]
struct Cli {
    /// Use the text interface instead of the framebuffer
    #[arg(long)]
    text: bool,

    /// Screen rotation in degrees (0, 90, 180, 270)
    #[arg(long)]
    angle: Option<u16>,

    /// Framebuffer device
    #[arg(long)]
    fb: Option<PathBuf>,

    /// Read keys from this evdev device only
    #[arg(long)]
    input: Option<PathBuf>,

    /// Settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    debug: bool,

    /// Log the kexec and reboot calls instead of making them
    #[arg(short = 'n', long)]
    dry_run: bool,
}

fn main() {
    let cli = Cli::parse();
    let is_init = process::id() == 1;

    if let Err(e) = run(cli, is_init) {
        log::error!("{:#}", e);
        eprintln!("raven-kexecboot: {:#}", e);
        if is_init {
            emergency_shell();
        }
        process::exit(1);
    }
}

fn run(cli: Cli, is_init: bool) -> Result<()> {
    if is_init {
        mount_essential_filesystems();
    }

    let mut settings = Settings::load(cli.config.as_deref())?;
    let cmdline = fs::read_to_string("/proc/cmdline").unwrap_or_default();
    settings.apply_cmdline(&cmdline);
    apply_cli_overrides(&mut settings, &cli);

    if debuglog::init(settings.ui.debug).is_err() {
        eprintln!("raven-kexecboot: logger already installed");
    }
    log::info!("raven-kexecboot {} starting", env!("CARGO_PKG_VERSION"));
    if !is_init {
        log::info!("Not running as init (pid={})", process::id());
    }

    let rotation = Rotation::from_degrees(settings.ui.angle).unwrap_or_else(|| {
        log::warn!("Unsupported angle {}, not rotating", settings.ui.angle);
        Rotation::None
    });

    let framebuffer = match settings.ui.mode {
        UiMode::Graphic => match Framebuffer::open(&settings.ui.framebuffer, rotation) {
            Ok(fb) => Some(fb),
            Err(e) => {
                log::warn!("Falling back to the text interface: {:#}", e);
                None
            }
        },
        UiMode::Text => None,
    };

    let visual = framebuffer
        .as_ref()
        .map_or(Visual::Color, |fb| Visual::from_bpp(fb.bits_per_pixel()));
    let theme = Theme::load(&settings.ui.theme_dir, visual);

    let graphic = framebuffer.is_some();
    let mut frontend: Box<dyn Frontend> = match framebuffer {
        Some(fb) => {
            let colors = Colors::from_palette(&settings.ui.palette);
            Box::new(GraphicFrontend::new(fb, theme.icon(Icon::Logo), colors))
        }
        None => Box::new(TextFrontend::new()?),
    };
    let mut input = open_input(graphic, settings.ui.input.as_deref());

    let mut timeout = settings.ui.timeout;
    loop {
        let scanner = Scanner {
            boot: &settings.boot,
            visual,
        };
        let items = scanner.scan().unwrap_or_else(|e| {
            log::error!("Device scan failed: {:#}", e);
            Vec::new()
        });
        log::info!("Found {} bootable kernel(s)", items.len());

        let menu = build_menu(items, &theme, !is_init).context("Failed to build the menu")?;
        let outcome = App::new(menu, frontend.as_mut(), input.as_mut(), timeout, !is_init).run()?;
        // auto-boot only applies to the first menu shown
        timeout = 0;

        match outcome {
            Outcome::Boot(item) => {
                frontend.draw_lines("Booting", &[item.title(), item.description()])?;
                match kexec::boot(&item, &settings.boot, cli.dry_run) {
                    Ok(()) if cli.dry_run => return Ok(()),
                    Ok(()) => {}
                    Err(e) => log::error!("Boot failed: {:#}", e),
                }
            }
            Outcome::Rescan => log::info!("Rescanning devices"),
            Outcome::Reboot => {
                kexec::restart(cli.dry_run)?;
                return Ok(());
            }
            Outcome::Shutdown => {
                kexec::power_off(cli.dry_run)?;
                return Ok(());
            }
            Outcome::Exit => return Ok(()),
        }
    }
}

fn apply_cli_overrides(settings: &mut Settings, cli: &Cli) {
    if cli.text {
        settings.ui.mode = UiMode::Text;
    }
    if let Some(angle) = cli.angle {
        settings.ui.angle = angle;
    }
    if let Some(fb) = &cli.fb {
        settings.ui.framebuffer = fb.clone();
    }
    if let Some(input) = &cli.input {
        settings.ui.input = Some(input.clone());
    }
    if cli.debug {
        settings.ui.debug = true;
    }
}

/// Evdev for the framebuffer or when a device is named, else the terminal
fn open_input(graphic: bool, device: Option<&Path>) -> Box<dyn InputSource> {
    if graphic || device.is_some() {
        match EvdevInput::open(device) {
            Ok(input) => return Box::new(input),
            Err(e) => log::warn!("Using terminal input: {:#}", e),
        }
    }
    Box::new(TerminalInput)
}

fn mount_essential_filesystems() {
    let mounts = [
        ("proc", "/proc", "proc"),
        ("sysfs", "/sys", "sysfs"),
        ("devtmpfs", "/dev", "devtmpfs"),
    ];

    for (source, target, fstype) in mounts {
        fs::create_dir_all(target).ok();
        let flags = MsFlags::MS_NOSUID | MsFlags::MS_NOEXEC;
        if let Err(e) = mount(Some(source), target, Some(fstype), flags, None::<&str>) {
            // EBUSY when the initramfs already mounted it
            eprintln!("raven-kexecboot: mounting {} failed: {}", target, e);
        }
    }
}

/// Keep init alive with a shell when the menu cannot run
fn emergency_shell() -> ! {
    eprintln!();
    eprintln!("!!! raven-kexecboot failed, starting a shell !!!");
    eprintln!();

    loop {
        for shell in ["/bin/sh", "/bin/ash"] {
            if !Path::new(shell).exists() {
                continue;
            }
            match Command::new(shell).status() {
                Ok(status) => eprintln!("Shell exited ({}), restarting", status),
                Err(e) => eprintln!("Failed to start {}: {}", shell, e),
            }
            break;
        }
        thread::sleep(Duration::from_secs(1));
    }
}
