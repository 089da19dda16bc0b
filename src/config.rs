//! Configuration for raven-kexecboot
//!
//! Two sources live here: the global settings file (TOML, overridable from
//! the kernel command line) and the per-device `boot.cfg` files describing
//! the kernels a partition offers.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Where the settings file is searched, first match wins
pub const SETTINGS_PATHS: &[&str] = &["/etc/kexecboot/kexecboot.toml", "/etc/kexecboot.toml"];

/// Global settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub boot: BootConfig,
}

/// Which front-end draws the menu
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UiMode {
    #[default]
    Graphic,
    Text,
}

impl FromStr for UiMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "graphic" | "gui" | "fb" => Ok(UiMode::Graphic),
            "text" | "tui" => Ok(UiMode::Text),
            other => Err(format!("unknown ui mode '{}'", other)),
        }
    }
}

/// Presentation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub mode: UiMode,

    /// Screen rotation in degrees (0, 90, 180 or 270)
    #[serde(default)]
    pub angle: u16,

    /// Seconds before the default item boots, 0 disables
    #[serde(default)]
    pub timeout: u32,

    #[serde(default = "default_theme_dir")]
    pub theme_dir: PathBuf,

    #[serde(default = "default_framebuffer")]
    pub framebuffer: PathBuf,

    /// Read keys from this evdev node only instead of every one found
    #[serde(default)]
    pub input: Option<PathBuf>,

    #[serde(default)]
    pub palette: Palette,

    /// Show debug messages and log at debug level
    #[serde(default)]
    pub debug: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mode: UiMode::default(),
            angle: 0,
            timeout: 0,
            theme_dir: default_theme_dir(),
            framebuffer: default_framebuffer(),
            input: None,
            palette: Palette::default(),
            debug: false,
        }
    }
}

/// Colors of the graphical menu, as X11 names or `#` hex values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: String,
    pub text: String,
    pub description: String,
    pub highlight: String,
    pub highlight_text: String,
    pub border: String,
    pub footer: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: "#1a1a2e".to_string(),
            text: "white".to_string(),
            description: "light gray".to_string(),
            highlight: "#3a3a6e".to_string(),
            highlight_text: "white".to_string(),
            border: "#5c5ca8".to_string(),
            footer: "gray".to_string(),
        }
    }
}

/// Boot settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BootConfig {
    #[serde(default = "default_kexec")]
    pub kexec: PathBuf,

    /// Where scanned partitions are mounted
    #[serde(default = "default_mount_point")]
    pub mount_point: PathBuf,

    /// Kernels looked for when a partition has no boot.cfg
    #[serde(default = "default_kernel_paths")]
    pub kernel_paths: Vec<String>,

    #[serde(default = "default_cfg_paths")]
    pub cfg_paths: Vec<String>,

    /// Host command line arguments passed on to the booted kernel
    #[serde(default = "default_preserve_args")]
    pub preserve_args: Vec<String>,
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            kexec: default_kexec(),
            mount_point: default_mount_point(),
            kernel_paths: default_kernel_paths(),
            cfg_paths: default_cfg_paths(),
            preserve_args: default_preserve_args(),
        }
    }
}

fn default_theme_dir() -> PathBuf {
    PathBuf::from("/usr/share/kexecboot")
}

fn default_framebuffer() -> PathBuf {
    PathBuf::from("/dev/fb0")
}

fn default_kexec() -> PathBuf {
    PathBuf::from("/usr/sbin/kexec")
}

fn default_mount_point() -> PathBuf {
    PathBuf::from("/mnt")
}

fn default_kernel_paths() -> Vec<String> {
    ["/boot/zImage", "/boot/bzImage", "/boot/vmlinuz", "/zImage", "/vmlinuz"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_cfg_paths() -> Vec<String> {
    vec!["/boot/boot.cfg".to_string(), "/boot.cfg".to_string()]
}

fn default_preserve_args() -> Vec<String> {
    vec!["console".to_string(), "mtdparts".to_string()]
}

impl Settings {
    /// Load settings from `path`, or from the first readable file in
    /// [`SETTINGS_PATHS`], or fall back to defaults.
    ///
    /// An explicitly given file must exist and parse.
    pub fn load(path: Option<&Path>) -> Result<Settings> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        for path in SETTINGS_PATHS {
            let path = Path::new(path);
            if !path.exists() {
                continue;
            }
            match Self::from_file(path) {
                Ok(settings) => return Ok(settings),
                Err(e) => log::warn!("Ignoring {}: {:#}", path.display(), e),
            }
        }

        log::info!("Using default settings");
        Ok(Settings::default())
    }

    pub fn from_file(path: &Path) -> Result<Settings> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let settings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Apply `kexecboot.*` overrides from a kernel command line
    pub fn apply_cmdline(&mut self, cmdline: &str) {
        for arg in cmdline.split_whitespace() {
            let Some(option) = arg.strip_prefix("kexecboot.") else {
                continue;
            };
            let (key, value) = option.split_once('=').unwrap_or((option, ""));

            match key {
                "ui" => match value.parse() {
                    Ok(mode) => self.ui.mode = mode,
                    Err(e) => log::warn!("Ignoring kexecboot.ui: {}", e),
                },
                "angle" => match value.parse::<u16>() {
                    Ok(angle) if angle % 90 == 0 && angle < 360 => self.ui.angle = angle,
                    _ => log::warn!("Ignoring kexecboot.angle={}", value),
                },
                "timeout" => match value.parse() {
                    Ok(timeout) => self.ui.timeout = timeout,
                    Err(_) => log::warn!("Ignoring kexecboot.timeout={}", value),
                },
                "debug" => self.ui.debug = !matches!(value, "0" | "no" | "off"),
                _ => log::warn!("Unknown kernel option {}", arg),
            }
        }
    }
}

/// Keywords understood in boot.cfg
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Label,
    Kernel,
    Append,
    Initrd,
    Icon,
    Priority,
    Default,
}

impl FromStr for Keyword {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const KEYWORDS: &[(&str, Keyword)] = &[
            ("LABEL", Keyword::Label),
            ("KERNEL", Keyword::Kernel),
            ("APPEND", Keyword::Append),
            ("INITRD", Keyword::Initrd),
            ("ICON", Keyword::Icon),
            ("PRIORITY", Keyword::Priority),
            ("DEFAULT", Keyword::Default),
        ];

        KEYWORDS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s))
            .map(|&(_, keyword)| keyword)
            .ok_or(())
    }
}

/// One kernel described by a boot.cfg file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BootSection {
    pub label: Option<String>,
    pub kernel: String,
    pub append: Option<String>,
    pub initrd: Option<String>,
    pub icon: Option<String>,
    pub priority: i32,
    pub is_default: bool,
}

/// Parse a boot.cfg file.
///
/// Every `LABEL` line opens a new section; keys seen before the first label
/// form an unnamed section. `DEFAULT=<label>` marks the section with that
/// label, a bare `DEFAULT` marks the section it appears in. Sections without
/// a kernel are dropped.
pub fn parse_boot_cfg(text: &str) -> Vec<BootSection> {
    let mut sections: Vec<BootSection> = Vec::new();
    let mut current: Option<BootSection> = None;
    let mut default_label: Option<String> = None;

    for (number, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (key, value) = match line.split_once('=') {
            Some((key, value)) => (key.trim(), unquote(value.trim())),
            None => (line, ""),
        };

        let Ok(keyword) = key.parse::<Keyword>() else {
            log::warn!("boot.cfg line {}: unknown keyword '{}'", number + 1, key);
            continue;
        };

        if keyword == Keyword::Label {
            sections.extend(current.take());
            current = Some(BootSection {
                label: Some(value.to_string()),
                ..Default::default()
            });
            continue;
        }

        let section = current.get_or_insert_with(BootSection::default);
        match keyword {
            Keyword::Kernel => section.kernel = value.to_string(),
            Keyword::Append => section.append = Some(value.to_string()),
            Keyword::Initrd => section.initrd = Some(value.to_string()),
            Keyword::Icon => section.icon = Some(value.to_string()),
            Keyword::Priority => match value.parse() {
                Ok(priority) => section.priority = priority,
                Err(_) => log::warn!("boot.cfg line {}: bad priority '{}'", number + 1, value),
            },
            Keyword::Default if value.is_empty() => section.is_default = true,
            Keyword::Default => default_label = Some(value.to_string()),
            Keyword::Label => {}
        }
    }
    sections.extend(current);

    sections.retain(|section| {
        if section.kernel.is_empty() {
            log::warn!("boot.cfg section {:?} has no KERNEL, skipped", section.label);
        }
        !section.kernel.is_empty()
    });

    if let Some(label) = default_label {
        for section in &mut sections {
            if section.label.as_deref() == Some(label.as_str()) {
                section.is_default = true;
            }
        }
    }

    sections
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_keyword_case_insensitive() {
        assert_eq!("label".parse(), Ok(Keyword::Label));
        assert_eq!("Kernel".parse(), Ok(Keyword::Kernel));
        assert_eq!("APPEND".parse(), Ok(Keyword::Append));
        assert!("APPENDX".parse::<Keyword>().is_err());
    }

    #[test]
    fn test_parse_sections() {
        let cfg = r#"
# two kernels
LABEL=Angstrom
KERNEL=/boot/zImage
APPEND=root=/dev/mmcblk0p2 rootwait
priority=10

label="Recovery"
kernel=/boot/zImage-recovery
INITRD=/boot/initrd.img
ICON=/boot/recovery.xpm
BOGUS=1
"#;
        let sections = parse_boot_cfg(cfg);
        assert_eq!(sections.len(), 2);

        assert_eq!(sections[0].label.as_deref(), Some("Angstrom"));
        assert_eq!(sections[0].kernel, "/boot/zImage");
        assert_eq!(
            sections[0].append.as_deref(),
            Some("root=/dev/mmcblk0p2 rootwait")
        );
        assert_eq!(sections[0].priority, 10);

        assert_eq!(sections[1].label.as_deref(), Some("Recovery"));
        assert_eq!(sections[1].initrd.as_deref(), Some("/boot/initrd.img"));
        assert_eq!(sections[1].icon.as_deref(), Some("/boot/recovery.xpm"));
        assert_eq!(sections[1].priority, 0);
    }

    #[test]
    fn test_parse_unlabelled_and_kernelless() {
        let sections = parse_boot_cfg("KERNEL=/zImage\nLABEL=empty\nAPPEND=quiet\n");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].label, None);
        assert_eq!(sections[0].kernel, "/zImage");
    }

    #[test]
    fn test_parse_default() {
        let cfg = "DEFAULT=b\nLABEL=a\nKERNEL=/a\nLABEL=b\nKERNEL=/b\nLABEL=c\nKERNEL=/c\nDEFAULT\n";
        let sections = parse_boot_cfg(cfg);
        let defaults: Vec<bool> = sections.iter().map(|s| s.is_default).collect();
        assert_eq!(defaults, vec![false, true, true]);
    }

    #[test]
    fn test_settings_defaults_from_partial_toml() {
        let settings: Settings = toml::from_str("[ui]\ntimeout = 5\n").unwrap();
        assert_eq!(settings.ui.timeout, 5);
        assert_eq!(settings.ui.mode, UiMode::Graphic);
        assert_eq!(settings.ui.framebuffer, PathBuf::from("/dev/fb0"));
        assert_eq!(settings.boot, BootConfig::default());

        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_settings_palette_and_mode() {
        let text = "[ui]\nmode = \"text\"\n[ui.palette]\nbackground = \"navy\"\n";
        let settings: Settings = toml::from_str(text).unwrap();
        assert_eq!(settings.ui.mode, UiMode::Text);
        assert_eq!(settings.ui.palette.background, "navy");
        assert_eq!(settings.ui.palette.text, Palette::default().text);
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[boot]\nkexec = \"/sbin/kexec\"").unwrap();
        let settings = Settings::load(Some(file.path())).unwrap();
        assert_eq!(settings.boot.kexec, PathBuf::from("/sbin/kexec"));

        let mut broken = tempfile::NamedTempFile::new().unwrap();
        writeln!(broken, "[boot\n").unwrap();
        assert!(Settings::load(Some(broken.path())).is_err());
    }

    #[test]
    fn test_cmdline_overrides() {
        let mut settings = Settings::default();
        settings.apply_cmdline(
            "console=ttyS0 kexecboot.ui=text kexecboot.angle=270 kexecboot.timeout=7 kexecboot.debug",
        );
        assert_eq!(settings.ui.mode, UiMode::Text);
        assert_eq!(settings.ui.angle, 270);
        assert_eq!(settings.ui.timeout, 7);
        assert!(settings.ui.debug);

        settings.apply_cmdline("kexecboot.angle=45 kexecboot.ui=vga kexecboot.debug=0");
        assert_eq!(settings.ui.angle, 270);
        assert_eq!(settings.ui.mode, UiMode::Text);
        assert!(!settings.ui.debug);
    }
}
