//! Menu presentation
//!
//! Front-ends draw the current menu level and free-form text pages. The
//! boot menu itself is built here from the scanned boot items.

pub mod gui;
pub mod theme;
pub mod tui;

use std::rc::Rc;

use anyhow::Result;

use crate::devicescan::BootItem;
use crate::menu::{LevelId, Menu, MenuError};
use crate::xpm::XpmImage;
use theme::{Icon, Theme};

pub const TITLE: &str = "Raven kexecboot";
pub const NO_DEVICES: &str = "No bootable devices found";

/// What activating a menu entry does
#[derive(Debug, Clone)]
pub enum MenuAction {
    Boot(BootItem),
    Submenu,
    Rescan,
    Reboot,
    Shutdown,
    ShowDebug,
    Back,
    Exit,
}

/// Payload of every boot menu item
#[derive(Debug, Clone)]
pub struct MenuEntry {
    pub icon: Option<Rc<XpmImage>>,
    pub action: MenuAction,
}

pub type BootMenu = Menu<MenuEntry>;

/// A menu renderer
pub trait Frontend {
    /// Draw the current level of `menu` with a status line
    fn draw_menu(&mut self, menu: &BootMenu, footer: &str) -> Result<()>;

    /// Draw a page of text, keeping the last lines when they do not fit
    fn draw_lines(&mut self, title: &str, lines: &[String]) -> Result<()>;
}

/// Build the boot menu.
///
/// The root level lists the boot items, highest priority first, followed by
/// a rescan entry and the system submenu. The default item is preselected:
/// the first one flagged as default, else the first one.
pub fn build_menu(
    mut items: Vec<BootItem>,
    theme: &Theme,
    allow_exit: bool,
) -> Result<BootMenu, MenuError> {
    items.sort_by(|a, b| b.priority.cmp(&a.priority));
    let default = items.iter().position(|item| item.is_default).unwrap_or(0);

    let mut menu = Menu::with_capacity(2)?;
    let root = menu.allocate_level(items.len() + 2, None)?;
    let system = menu.allocate_level(5, Some(root))?;

    for item in items {
        let icon = item
            .icon
            .clone()
            .or_else(|| theme.icon(Icon::Device(item.kind)));
        let label = item.title();
        let description = item.description();
        add_entry(
            &mut menu,
            root,
            &label,
            Some(&description),
            None,
            MenuEntry {
                icon,
                action: MenuAction::Boot(item),
            },
        )?;
    }

    let add = |menu: &mut BootMenu,
               level: LevelId,
               label: &str,
               submenu: Option<LevelId>,
               icon: Icon,
               action: MenuAction| {
        let entry = MenuEntry {
            icon: theme.icon(icon),
            action,
        };
        add_entry(menu, level, label, None, submenu, entry)
    };

    add(&mut menu, root, "Rescan", None, Icon::Rescan, MenuAction::Rescan)?;
    add(&mut menu, root, "System", Some(system), Icon::System, MenuAction::Submenu)?;

    add(&mut menu, system, "Back", None, Icon::Back, MenuAction::Back)?;
    add(&mut menu, system, "Reboot", None, Icon::Reboot, MenuAction::Reboot)?;
    add(&mut menu, system, "Shutdown", None, Icon::Shutdown, MenuAction::Shutdown)?;
    add(&mut menu, system, "Show debug info", None, Icon::Debug, MenuAction::ShowDebug)?;
    if allow_exit {
        add(&mut menu, system, "Exit", None, Icon::Exit, MenuAction::Exit)?;
    }

    menu.select_by_index(default)?;
    Ok(menu)
}

fn add_entry(
    menu: &mut BootMenu,
    level: LevelId,
    label: &str,
    description: Option<&str>,
    submenu: Option<LevelId>,
    entry: MenuEntry,
) -> Result<(), MenuError> {
    let id = menu.next_id()?;
    let item = menu.add_item(level, id, label, description, submenu)?;
    menu.set_payload(item, entry)?;
    Ok(())
}

/// Heading of the current level: the title at the root, else the label of
/// the entry that opened it
pub fn level_title(menu: &BootMenu) -> String {
    menu.current_level()
        .and_then(|id| menu.level(id)?.parent())
        .and_then(|parent| {
            let parent = menu.level(parent)?;
            Some(parent.item(parent.current()?)?.label().to_string())
        })
        .unwrap_or_else(|| TITLE.to_string())
}

/// Notice shown when the root level offers nothing to boot
pub fn notice(menu: &BootMenu) -> Option<&'static str> {
    let level = menu.level(menu.current_level()?)?;
    if level.parent().is_some() {
        return None;
    }
    let bootable = level.items().any(|(_, item)| {
        matches!(
            item.payload(),
            Some(MenuEntry {
                action: MenuAction::Boot(_),
                ..
            })
        )
    });
    (!bootable).then_some(NO_DEVICES)
}
