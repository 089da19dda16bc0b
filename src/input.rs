//! Input handling
//!
//! Key presses from evdev devices or the controlling terminal are turned
//! into menu [`Action`]s.

use std::collections::VecDeque;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Read};
use std::mem::size_of;
use std::os::unix::fs::OpenOptionsExt;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{bail, Result};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

/// What the user asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Up,
    Down,
    Select,
    Back,
    Rescan,
    Reboot,
    Shutdown,
    DebugToggle,
    Exit,
    /// The wait ran out without a key
    Timeout,
    /// A key without a binding
    None,
    /// Reading input failed
    Error,
}

/// A source of actions
pub trait InputSource {
    /// Wait for the next action. `None` waits forever, otherwise the wait
    /// ends with [`Action::Timeout`].
    fn next_action(&mut self, timeout: Option<Duration>) -> Action;
}

/// Polling interval while waiting for a key
const POLL_STEP: Duration = Duration::from_millis(10);

const EV_KEY: u16 = 0x01;

const KEY_ESC: u16 = 1;
const KEY_BACKSPACE: u16 = 14;
const KEY_Q: u16 = 16;
const KEY_R: u16 = 19;
const KEY_ENTER: u16 = 28;
const KEY_D: u16 = 32;
const KEY_SPACE: u16 = 57;
const KEY_F11: u16 = 87;
const KEY_F12: u16 = 88;
const KEY_KPENTER: u16 = 96;
const KEY_UP: u16 = 103;
const KEY_LEFT: u16 = 105;
const KEY_RIGHT: u16 = 106;
const KEY_DOWN: u16 = 108;
const KEY_VOLUMEDOWN: u16 = 114;
const KEY_VOLUMEUP: u16 = 115;
const KEY_POWER: u16 = 116;

/// Map a Linux key code to an action
pub fn keymap(code: u16) -> Action {
    match code {
        KEY_UP | KEY_VOLUMEUP => Action::Up,
        KEY_DOWN | KEY_VOLUMEDOWN => Action::Down,
        KEY_ENTER | KEY_KPENTER | KEY_SPACE | KEY_RIGHT | KEY_POWER => Action::Select,
        KEY_ESC | KEY_BACKSPACE | KEY_LEFT => Action::Back,
        KEY_R => Action::Rescan,
        KEY_F11 => Action::Reboot,
        KEY_F12 => Action::Shutdown,
        KEY_D => Action::DebugToggle,
        KEY_Q => Action::Exit,
        _ => Action::None,
    }
}

/// Size of `struct input_event` on this platform
pub const EVENT_SIZE: usize = size_of::<libc::timeval>() + 8;

/// Decode one `struct input_event` into (type, code, value)
pub fn decode_event(raw: &[u8]) -> Option<(u16, u16, i32)> {
    let at = size_of::<libc::timeval>();
    let fields = raw.get(at..at + 8)?;
    let kind = u16::from_ne_bytes([fields[0], fields[1]]);
    let code = u16::from_ne_bytes([fields[2], fields[3]]);
    let value = i32::from_ne_bytes([fields[4], fields[5], fields[6], fields[7]]);
    Some((kind, code, value))
}

/// The action of a decoded event; presses and autorepeats count, releases
/// and non-key events do not
pub fn event_action(kind: u16, code: u16, value: i32) -> Option<Action> {
    if kind != EV_KEY || value == 0 {
        return None;
    }
    match keymap(code) {
        Action::None => {
            log::debug!("Unbound key {}", code);
            None
        }
        action => Some(action),
    }
}

/// Keys read from `/dev/input/event*`
pub struct EvdevInput {
    devices: Vec<(PathBuf, File)>,
    /// Bound keys read but not handed out yet, oldest first
    pending: VecDeque<Action>,
}

impl EvdevInput {
    /// Open `only`, or every event device that can be opened
    pub fn open(only: Option<&Path>) -> Result<EvdevInput> {
        let paths: Vec<PathBuf> = match only {
            Some(path) => vec![path.to_path_buf()],
            None => {
                let mut paths: Vec<PathBuf> = fs::read_dir("/dev/input")?
                    .filter_map(|entry| entry.ok())
                    .map(|entry| entry.path())
                    .filter(|path| {
                        path.file_name()
                            .and_then(|name| name.to_str())
                            .is_some_and(|name| name.starts_with("event"))
                    })
                    .collect();
                paths.sort();
                paths
            }
        };

        let mut devices = Vec::new();
        for path in paths {
            match OpenOptions::new()
                .read(true)
                .custom_flags(libc::O_NONBLOCK)
                .open(&path)
            {
                Ok(file) => {
                    log::debug!("Listening on {}", path.display());
                    devices.push((path, file));
                }
                Err(e) => log::warn!("Failed to open {}: {}", path.display(), e),
            }
        }

        if devices.is_empty() {
            bail!("no input devices could be opened");
        }
        Ok(EvdevInput {
            devices,
            pending: VecDeque::new(),
        })
    }

    /// Drain pending events into the queue, returning the oldest bound key
    fn poll_once(&mut self) -> io::Result<Option<Action>> {
        if let Some(action) = self.pending.pop_front() {
            return Ok(Some(action));
        }

        let mut buffer = [0u8; EVENT_SIZE * 16];

        for (path, file) in &mut self.devices {
            loop {
                let count = match file.read(&mut buffer) {
                    Ok(0) => break,
                    Ok(count) => count,
                    Err(e) if e.kind() == io::ErrorKind::WouldBlock => break,
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                    Err(e) => {
                        log::error!("Reading {} failed: {}", path.display(), e);
                        return Err(e);
                    }
                };

                self.pending.extend(
                    buffer[..count]
                        .chunks_exact(EVENT_SIZE)
                        .filter_map(decode_event)
                        .filter_map(|(kind, code, value)| event_action(kind, code, value)),
                );
            }
        }

        Ok(self.pending.pop_front())
    }
}

impl InputSource for EvdevInput {
    fn next_action(&mut self, timeout: Option<Duration>) -> Action {
        let deadline = timeout.map(|timeout| Instant::now() + timeout);

        loop {
            match self.poll_once() {
                Ok(Some(action)) => return action,
                Ok(None) => {}
                Err(_) => return Action::Error,
            }
            if deadline.is_some_and(|deadline| Instant::now() >= deadline) {
                return Action::Timeout;
            }
            thread::sleep(POLL_STEP);
        }
    }
}

/// Map a terminal key to an action
pub fn terminal_keymap(code: KeyCode, modifiers: KeyModifiers) -> Action {
    match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Action::Exit,
        KeyCode::Up | KeyCode::Char('k') => Action::Up,
        KeyCode::Down | KeyCode::Char('j') => Action::Down,
        KeyCode::Enter | KeyCode::Right | KeyCode::Char(' ') => Action::Select,
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Left => Action::Back,
        KeyCode::Char('r') => Action::Rescan,
        KeyCode::F(11) => Action::Reboot,
        KeyCode::F(12) => Action::Shutdown,
        KeyCode::Char('d') => Action::DebugToggle,
        KeyCode::Char('q') => Action::Exit,
        _ => Action::None,
    }
}

/// Keys read from the controlling terminal through crossterm
#[derive(Debug, Default)]
pub struct TerminalInput;

impl InputSource for TerminalInput {
    fn next_action(&mut self, timeout: Option<Duration>) -> Action {
        let deadline = timeout.map(|timeout| Instant::now() + timeout);

        loop {
            let wait = match deadline {
                Some(deadline) => {
                    let left = deadline.saturating_duration_since(Instant::now());
                    if left.is_zero() {
                        return Action::Timeout;
                    }
                    left.min(Duration::from_millis(100))
                }
                None => Duration::from_millis(100),
            };

            match event::poll(wait) {
                Ok(false) => continue,
                Ok(true) => {}
                Err(e) => {
                    log::error!("Terminal input failed: {}", e);
                    return Action::Error;
                }
            }

            match event::read() {
                Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => {
                    match terminal_keymap(key.code, key.modifiers) {
                        Action::None => continue,
                        action => return action,
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    log::error!("Terminal input failed: {}", e);
                    return Action::Error;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn raw_event(kind: u16, code: u16, value: i32) -> Vec<u8> {
        let mut raw = vec![0u8; size_of::<libc::timeval>()];
        raw.extend_from_slice(&kind.to_ne_bytes());
        raw.extend_from_slice(&code.to_ne_bytes());
        raw.extend_from_slice(&value.to_ne_bytes());
        raw
    }

    #[test]
    fn test_event_size_matches_layout() {
        assert_eq!(raw_event(0, 0, 0).len(), EVENT_SIZE);
    }

    #[test]
    fn test_decode_event() {
        let raw = raw_event(EV_KEY, KEY_DOWN, 1);
        assert_eq!(decode_event(&raw), Some((EV_KEY, KEY_DOWN, 1)));
        assert_eq!(decode_event(&raw[..EVENT_SIZE - 1]), None);
    }

    #[test]
    fn test_press_and_repeat_only() {
        assert_eq!(event_action(EV_KEY, KEY_UP, 1), Some(Action::Up));
        assert_eq!(event_action(EV_KEY, KEY_UP, 2), Some(Action::Up));
        assert_eq!(event_action(EV_KEY, KEY_UP, 0), None);
        // EV_REL movement
        assert_eq!(event_action(0x02, KEY_UP, 1), None);
        assert_eq!(event_action(EV_KEY, 240, 1), None);
    }

    #[test]
    fn test_evdev_keeps_every_press() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        for (code, value) in [(KEY_DOWN, 1), (KEY_DOWN, 0), (KEY_ENTER, 1)] {
            file.write_all(&raw_event(EV_KEY, code, value)).unwrap();
        }
        file.flush().unwrap();

        let mut input = EvdevInput::open(Some(file.path())).unwrap();
        let wait = Some(Duration::from_millis(20));
        assert_eq!(input.next_action(wait), Action::Down);
        assert_eq!(input.next_action(wait), Action::Select);
        assert_eq!(input.next_action(wait), Action::Timeout);
    }

    #[test]
    fn test_keymap() {
        assert_eq!(keymap(KEY_ENTER), Action::Select);
        assert_eq!(keymap(KEY_POWER), Action::Select);
        assert_eq!(keymap(KEY_VOLUMEDOWN), Action::Down);
        assert_eq!(keymap(KEY_ESC), Action::Back);
        assert_eq!(keymap(KEY_R), Action::Rescan);
        assert_eq!(keymap(KEY_D), Action::DebugToggle);
        assert_eq!(keymap(KEY_F12), Action::Shutdown);
        assert_eq!(keymap(0), Action::None);
    }

    #[test]
    fn test_terminal_keymap() {
        let none = KeyModifiers::NONE;
        assert_eq!(terminal_keymap(KeyCode::Up, none), Action::Up);
        assert_eq!(terminal_keymap(KeyCode::Char('j'), none), Action::Down);
        assert_eq!(terminal_keymap(KeyCode::Enter, none), Action::Select);
        assert_eq!(
            terminal_keymap(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Action::Exit
        );
        assert_eq!(terminal_keymap(KeyCode::Char('c'), none), Action::None);
    }
}
