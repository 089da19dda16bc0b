//! The menu session: draw, wait for input, react, until something leaves
//! the menu.

use std::time::Duration;

use anyhow::{bail, Result};

use crate::debuglog;
use crate::devicescan::BootItem;
use crate::input::{Action, InputSource};
use crate::menu::ItemRef;
use crate::ui::{BootMenu, Frontend, MenuAction};

/// Consecutive input errors tolerated before giving up
const MAX_INPUT_ERRORS: u32 = 10;

const HELP: &str = "Up/Down: move  Enter: select  Esc: back  R: rescan  D: log";

/// How a menu session ended
#[derive(Debug, Clone)]
pub enum Outcome {
    Boot(BootItem),
    Rescan,
    Reboot,
    Shutdown,
    Exit,
}

pub struct App<'a> {
    menu: BootMenu,
    frontend: &'a mut dyn Frontend,
    input: &'a mut dyn InputSource,
    /// The item booted when the countdown runs out
    default: Option<ItemRef>,
    /// Seconds left before auto-boot
    countdown: Option<u32>,
    show_debug: bool,
    allow_exit: bool,
    input_errors: u32,
}

impl<'a> App<'a> {
    /// Start a session on a freshly built menu. The countdown only runs
    /// when `timeout` is non-zero and the preselected item boots something.
    pub fn new(
        menu: BootMenu,
        frontend: &'a mut dyn Frontend,
        input: &'a mut dyn InputSource,
        timeout: u32,
        allow_exit: bool,
    ) -> Self {
        let default = menu.selected();
        let mut app = Self {
            menu,
            frontend,
            input,
            default,
            countdown: None,
            show_debug: false,
            allow_exit,
            input_errors: 0,
        };
        if timeout > 0 && app.default_item().is_some() {
            app.countdown = Some(timeout);
        }
        app
    }

    pub fn run(mut self) -> Result<Outcome> {
        loop {
            self.draw()?;

            let wait = self.countdown.map(|_| Duration::from_secs(1));
            let action = self.input.next_action(wait);
            log::debug!("Input: {:?}", action);

            if let Some(outcome) = self.handle(action)? {
                self.menu.destroy(true);
                return Ok(outcome);
            }
        }
    }

    fn draw(&mut self) -> Result<()> {
        if self.show_debug {
            return self.frontend.draw_lines("Debug log", &debuglog::history());
        }

        let footer = match (self.countdown, self.default_item()) {
            (Some(seconds), Some(item)) => format!(
                "Booting {} in {}s, press any key to cancel",
                item.title(),
                seconds
            ),
            _ => HELP.to_string(),
        };
        self.frontend.draw_menu(&self.menu, &footer)
    }

    fn default_item(&self) -> Option<&BootItem> {
        let entry = self.menu.item(self.default?)?.payload()?;
        match &entry.action {
            MenuAction::Boot(item) => Some(item),
            _ => None,
        }
    }

    fn handle(&mut self, action: Action) -> Result<Option<Outcome>> {
        if action == Action::Error {
            self.input_errors += 1;
            if self.input_errors >= MAX_INPUT_ERRORS {
                bail!("input failed {} times in a row", self.input_errors);
            }
            return Ok(None);
        }
        self.input_errors = 0;

        if action != Action::Timeout && self.countdown.take().is_some() {
            log::info!("Auto-boot cancelled");
        }

        let outcome = match action {
            Action::Timeout => return Ok(self.tick()),
            Action::Up => {
                self.menu.select(-1);
                None
            }
            Action::Down => {
                self.menu.select(1);
                None
            }
            Action::Select if self.show_debug => None,
            Action::Select => self.activate(),
            Action::Back => {
                if self.show_debug {
                    self.show_debug = false;
                } else {
                    self.menu.ascend();
                }
                None
            }
            Action::DebugToggle => {
                self.show_debug = !self.show_debug;
                None
            }
            Action::Rescan => Some(Outcome::Rescan),
            Action::Reboot => Some(Outcome::Reboot),
            Action::Shutdown => Some(Outcome::Shutdown),
            Action::Exit => self.exit(),
            Action::None | Action::Error => None,
        };
        Ok(outcome)
    }

    fn tick(&mut self) -> Option<Outcome> {
        match self.countdown? {
            0 | 1 => {
                self.countdown = None;
                let item = self.default_item()?.clone();
                log::info!("Timeout, booting {}", item.title());
                Some(Outcome::Boot(item))
            }
            left => {
                self.countdown = Some(left - 1);
                None
            }
        }
    }

    fn exit(&self) -> Option<Outcome> {
        if self.allow_exit {
            Some(Outcome::Exit)
        } else {
            log::warn!("Exit is not available when running as init");
            None
        }
    }

    fn activate(&mut self) -> Option<Outcome> {
        let action = self.menu.selected_item()?.payload()?.action.clone();
        match action {
            MenuAction::Boot(item) => Some(Outcome::Boot(item)),
            MenuAction::Submenu => {
                self.menu.descend();
                None
            }
            MenuAction::Rescan => Some(Outcome::Rescan),
            MenuAction::Reboot => Some(Outcome::Reboot),
            MenuAction::Shutdown => Some(Outcome::Shutdown),
            MenuAction::ShowDebug => {
                self.show_debug = true;
                None
            }
            MenuAction::Back => {
                self.menu.ascend();
                None
            }
            MenuAction::Exit => self.exit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::tests::boot_item;
    use crate::ui::theme::Theme;
    use crate::ui::build_menu;
    use std::collections::VecDeque;

    #[derive(Default)]
    struct Recorder {
        menus: Vec<(String, String)>,
        pages: Vec<String>,
    }

    impl Frontend for Recorder {
        fn draw_menu(&mut self, menu: &BootMenu, footer: &str) -> Result<()> {
            let label = menu
                .selected_item()
                .map(|item| item.label().to_string())
                .unwrap_or_default();
            self.menus.push((label, footer.to_string()));
            Ok(())
        }

        fn draw_lines(&mut self, title: &str, _lines: &[String]) -> Result<()> {
            self.pages.push(title.to_string());
            Ok(())
        }
    }

    /// Plays back actions, then fails
    struct Script(VecDeque<Action>);

    impl Script {
        fn new(actions: &[Action]) -> Self {
            Script(actions.iter().copied().collect())
        }
    }

    impl InputSource for Script {
        fn next_action(&mut self, _timeout: Option<Duration>) -> Action {
            self.0.pop_front().unwrap_or(Action::Error)
        }
    }

    fn menu() -> BootMenu {
        let items = vec![boot_item("first", 0, false), boot_item("second", 0, false)];
        build_menu(items, &Theme::default(), false).unwrap()
    }

    fn run(menu: BootMenu, actions: &[Action], timeout: u32, allow_exit: bool) -> (Result<Outcome>, Recorder) {
        let mut frontend = Recorder::default();
        let mut input = Script::new(actions);
        let outcome = App::new(menu, &mut frontend, &mut input, timeout, allow_exit).run();
        (outcome, frontend)
    }

    fn booted(outcome: Result<Outcome>) -> String {
        match outcome.unwrap() {
            Outcome::Boot(item) => item.title(),
            other => panic!("expected a boot, got {:?}", other),
        }
    }

    #[test]
    fn test_select_boots_item() {
        let (outcome, frontend) = run(menu(), &[Action::Down, Action::Select], 0, false);
        assert_eq!(booted(outcome), "second");
        assert_eq!(frontend.menus[0].0, "first");
        assert_eq!(frontend.menus[1].0, "second");
    }

    #[test]
    fn test_wraparound_navigation() {
        let (outcome, _) = run(menu(), &[Action::Up, Action::Up, Action::Up, Action::Select], 0, false);
        assert_eq!(booted(outcome), "second");
    }

    #[test]
    fn test_system_submenu_reboot() {
        let actions = [
            Action::Up,
            Action::Select,
            Action::Down,
            Action::Select,
        ];
        let (outcome, frontend) = run(menu(), &actions, 0, false);
        assert!(matches!(outcome.unwrap(), Outcome::Reboot));
        assert_eq!(frontend.menus[2].0, "Back");
    }

    #[test]
    fn test_back_leaves_submenu() {
        let actions = [Action::Up, Action::Select, Action::Back, Action::Select];
        let (outcome, _) = run(menu(), &actions, 0, false);
        // back on the root selects "System" again, which reopens the submenu
        assert!(outcome.is_err());

        let actions = [Action::Up, Action::Select, Action::Select, Action::Down, Action::Select];
        let (outcome, _) = run(menu(), &actions, 0, false);
        assert_eq!(booted(outcome), "first");
    }

    #[test]
    fn test_countdown_boots_default() {
        let (outcome, frontend) = run(menu(), &[Action::Timeout, Action::Timeout], 2, false);
        assert_eq!(booted(outcome), "first");
        assert!(frontend.menus[0].1.contains("in 2s"));
        assert!(frontend.menus[1].1.contains("in 1s"));
    }

    #[test]
    fn test_key_cancels_countdown() {
        let actions = [
            Action::Down,
            Action::Timeout,
            Action::Timeout,
            Action::Timeout,
            Action::Rescan,
        ];
        let (outcome, frontend) = run(menu(), &actions, 2, false);
        assert!(matches!(outcome.unwrap(), Outcome::Rescan));
        assert_eq!(frontend.menus[1].1, HELP);
    }

    #[test]
    fn test_no_countdown_without_boot_items() {
        let empty = build_menu(Vec::new(), &Theme::default(), false).unwrap();
        let (outcome, frontend) = run(empty, &[Action::Timeout, Action::Select], 3, false);
        assert!(matches!(outcome.unwrap(), Outcome::Rescan));
        assert_eq!(frontend.menus[0].1, HELP);
    }

    #[test]
    fn test_debug_view_toggles() {
        let actions = [
            Action::DebugToggle,
            Action::Select,
            Action::Back,
            Action::Shutdown,
        ];
        let (outcome, frontend) = run(menu(), &actions, 0, false);
        assert!(matches!(outcome.unwrap(), Outcome::Shutdown));
        assert_eq!(frontend.pages, ["Debug log", "Debug log"]);
        assert_eq!(frontend.menus.len(), 2);
    }

    #[test]
    fn test_exit_only_when_allowed() {
        let (outcome, _) = run(menu(), &[Action::Exit, Action::Rescan], 0, false);
        assert!(matches!(outcome.unwrap(), Outcome::Rescan));

        let (outcome, _) = run(menu(), &[Action::Exit], 0, true);
        assert!(matches!(outcome.unwrap(), Outcome::Exit));
    }

    #[test]
    fn test_input_errors_give_up() {
        let (outcome, frontend) = run(menu(), &[], 0, false);
        assert!(outcome.is_err());
        assert_eq!(frontend.menus.len(), MAX_INPUT_ERRORS as usize);
    }
}
