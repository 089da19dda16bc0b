//! Boot menu engine
//!
//! A menu is a tree of levels. Levels are kept in an arena owned by the
//! [`Menu`] and refer to each other through [`LevelId`] handles: an item
//! points at its submenu, a level points back at its parent. Items live in
//! the level that holds them and carry an optional payload of type `P`.
//!
//! Selection always moves within the current level and wraps around at both
//! ends. Item slots may be vacant; navigation skips them.

use std::collections::TryReserveError;

use thiserror::Error;

/// Menu engine errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MenuError {
    #[error("out of memory while growing the menu")]
    Allocation,

    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("item {index} out of range, level has {count} items")]
    OutOfRange { index: usize, count: usize },

    #[error("item ids exhausted")]
    IdsExhausted,
}

impl From<TryReserveError> for MenuError {
    fn from(_: TryReserveError) -> Self {
        MenuError::Allocation
    }
}

/// Handle of a level inside its menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LevelId(usize);

/// Handle of an item: its level and slot index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemRef {
    pub level: LevelId,
    pub index: usize,
}

/// A selectable menu entry
#[derive(Debug)]
pub struct MenuItem<P> {
    id: u32,
    label: String,
    description: Option<String>,
    submenu: Option<LevelId>,
    payload: Option<P>,
}

impl<P> MenuItem<P> {
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn submenu(&self) -> Option<LevelId> {
        self.submenu
    }

    pub fn payload(&self) -> Option<&P> {
        self.payload.as_ref()
    }
}

/// One level of the menu tree
#[derive(Debug)]
pub struct MenuLevel<P> {
    items: Vec<Option<MenuItem<P>>>,
    current: Option<usize>,
    parent: Option<LevelId>,
}

impl<P> MenuLevel<P> {
    /// Number of present items
    pub fn count(&self) -> usize {
        self.items.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Slot index of the selected item
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn parent(&self) -> Option<LevelId> {
        self.parent
    }

    pub fn item(&self, index: usize) -> Option<&MenuItem<P>> {
        self.items.get(index)?.as_ref()
    }

    /// Present items with their slot index, in order
    pub fn items(&self) -> impl Iterator<Item = (usize, &MenuItem<P>)> {
        self.items
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|item| (index, item)))
    }

    fn first_present(&self) -> Option<usize> {
        self.items.iter().position(Option::is_some)
    }

    fn step(&mut self, direction: i32) -> Option<usize> {
        let len = self.items.len();
        let found = match self.current {
            Some(current) if direction != 0 && current < len => {
                let forward = direction > 0;
                (1..=len)
                    .map(|k| {
                        if forward {
                            (current + k) % len
                        } else {
                            (current + len - k) % len
                        }
                    })
                    .find(|&index| self.items[index].is_some())
            }
            _ => self.first_present(),
        };

        if found.is_some() {
            self.current = found;
        }
        found
    }
}

/// The menu: an arena of levels, an id generator and the active level
#[derive(Debug)]
pub struct Menu<P> {
    levels: Vec<MenuLevel<P>>,
    /// `None` once every id has been handed out
    next_id: Option<u32>,
    current: Option<LevelId>,
}

impl<P> Menu<P> {
    /// Create an empty menu with room for `capacity` levels
    pub fn with_capacity(capacity: usize) -> Result<Self, MenuError> {
        let mut levels = Vec::new();
        levels.try_reserve_exact(capacity)?;
        Ok(Self {
            levels,
            next_id: Some(0),
            current: None,
        })
    }

    /// Return a fresh item id; ids are never reused, so the generator
    /// fails once the last id has been handed out
    pub fn next_id(&mut self) -> Result<u32, MenuError> {
        let id = self.next_id.ok_or(MenuError::IdsExhausted)?;
        self.next_id = id.checked_add(1);
        Ok(id)
    }

    /// Append a new empty level. The first level allocated becomes current.
    pub fn allocate_level(
        &mut self,
        capacity: usize,
        parent: Option<LevelId>,
    ) -> Result<LevelId, MenuError> {
        if let Some(parent) = parent {
            self.level(parent)
                .ok_or(MenuError::InvalidArgument("unknown parent level"))?;
        }

        let mut items = Vec::new();
        items.try_reserve_exact(capacity)?;
        self.levels.try_reserve(1)?;
        self.levels.push(MenuLevel {
            items,
            current: None,
            parent,
        });

        let id = LevelId(self.levels.len() - 1);
        if self.current.is_none() {
            self.current = Some(id);
        }
        Ok(id)
    }

    /// Append an item to `level`, copying its strings
    pub fn add_item(
        &mut self,
        level: LevelId,
        id: u32,
        label: &str,
        description: Option<&str>,
        submenu: Option<LevelId>,
    ) -> Result<ItemRef, MenuError> {
        if let Some(submenu) = submenu {
            self.level(submenu)
                .ok_or(MenuError::InvalidArgument("unknown submenu level"))?;
        }
        let target = self
            .levels
            .get_mut(level.0)
            .ok_or(MenuError::InvalidArgument("unknown level"))?;

        target.items.try_reserve(1)?;
        target.items.push(Some(MenuItem {
            id,
            label: label.to_string(),
            description: description.map(str::to_string),
            submenu,
            payload: None,
        }));

        Ok(ItemRef {
            level,
            index: target.items.len() - 1,
        })
    }

    /// Attach a payload to an item, returning the one it replaces
    pub fn set_payload(&mut self, item: ItemRef, data: P) -> Result<Option<P>, MenuError> {
        let slot = self
            .levels
            .get_mut(item.level.0)
            .and_then(|level| level.items.get_mut(item.index))
            .and_then(Option::as_mut)
            .ok_or(MenuError::InvalidArgument("unknown item"))?;
        Ok(slot.payload.replace(data))
    }

    pub fn level(&self, id: LevelId) -> Option<&MenuLevel<P>> {
        self.levels.get(id.0)
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub fn item(&self, item: ItemRef) -> Option<&MenuItem<P>> {
        self.level(item.level)?.item(item.index)
    }

    pub fn current_level(&self) -> Option<LevelId> {
        self.current
    }

    pub fn set_current_level(&mut self, level: LevelId) -> Result<(), MenuError> {
        self.level(level)
            .ok_or(MenuError::InvalidArgument("unknown level"))?;
        self.current = Some(level);
        Ok(())
    }

    /// Currently selected item of the current level
    pub fn selected(&self) -> Option<ItemRef> {
        let level = self.current?;
        let index = self.level(level)?.current?;
        Some(ItemRef { level, index })
    }

    pub fn selected_item(&self) -> Option<&MenuItem<P>> {
        self.item(self.selected()?)
    }

    /// Move the selection in the current level.
    ///
    /// `0` selects the first item, a positive direction the next and a
    /// negative one the previous, wrapping at both ends. Returns the new slot
    /// index or `None` when the level is empty.
    pub fn select(&mut self, direction: i32) -> Option<usize> {
        let current = self.current?;
        self.levels.get_mut(current.0)?.step(direction)
    }

    /// Select the `n`-th present item of the current level
    pub fn select_by_index(&mut self, n: usize) -> Result<usize, MenuError> {
        let current = self
            .current
            .ok_or(MenuError::InvalidArgument("no current level"))?;
        let level = self
            .levels
            .get_mut(current.0)
            .ok_or(MenuError::InvalidArgument("unknown level"))?;

        let index = level
            .items()
            .nth(n)
            .map(|(index, _)| index)
            .ok_or_else(|| MenuError::OutOfRange {
                index: n,
                count: level.count(),
            })?;
        level.current = Some(index);
        Ok(index)
    }

    /// Enter the submenu of the selected item. Returns whether it moved.
    pub fn descend(&mut self) -> bool {
        let Some(submenu) = self.selected_item().and_then(MenuItem::submenu) else {
            return false;
        };
        self.current = Some(submenu);
        let level = &mut self.levels[submenu.0];
        if level.current.is_none() {
            level.step(0);
        }
        true
    }

    /// Return to the parent of the current level. Returns whether it moved.
    pub fn ascend(&mut self) -> bool {
        let Some(parent) = self.current.and_then(|id| self.levels[id.0].parent) else {
            return false;
        };
        self.current = Some(parent);
        true
    }

    /// Tear the menu down. With `free_payloads` the payloads are dropped,
    /// otherwise they are handed back to the caller.
    pub fn destroy(self, free_payloads: bool) -> Vec<P> {
        let payloads = self
            .levels
            .into_iter()
            .flat_map(|level| level.items)
            .flatten()
            .filter_map(|item| item.payload);

        if free_payloads {
            payloads.for_each(drop);
            Vec::new()
        } else {
            payloads.collect()
        }
    }

    #[cfg(test)]
    fn vacate(&mut self, item: ItemRef) {
        self.levels[item.level.0].items[item.index] = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu_with(count: usize) -> (Menu<u32>, LevelId) {
        let mut menu = Menu::with_capacity(1).unwrap();
        let root = menu.allocate_level(2, None).unwrap();
        for i in 0..count {
            let id = menu.next_id().unwrap();
            menu.add_item(root, id, &format!("item {}", i), None, None)
                .unwrap();
        }
        (menu, root)
    }

    #[test]
    fn test_growth_preserves_items() {
        let (menu, root) = menu_with(50);
        let level = menu.level(root).unwrap();
        assert_eq!(level.count(), 50);
        for (index, item) in level.items() {
            assert_eq!(item.label(), format!("item {}", index));
            assert_eq!(item.id(), index as u32);
        }
    }

    #[test]
    fn test_next_cycles_back() {
        let (mut menu, _) = menu_with(5);
        for start in 0..5 {
            menu.select_by_index(start).unwrap();
            let mut last = None;
            for _ in 0..5 {
                last = menu.select(1);
            }
            assert_eq!(last, Some(start));
        }
    }

    #[test]
    fn test_previous_cycles_back() {
        let (mut menu, _) = menu_with(4);
        menu.select_by_index(2).unwrap();
        assert_eq!(menu.select(-1), Some(1));
        assert_eq!(menu.select(-1), Some(0));
        assert_eq!(menu.select(-1), Some(3));
        assert_eq!(menu.select(-1), Some(2));
    }

    #[test]
    fn test_select_first() {
        let (mut menu, _) = menu_with(3);
        menu.select_by_index(2).unwrap();
        assert_eq!(menu.select(0), Some(0));
        assert_eq!(menu.selected_item().unwrap().label(), "item 0");
    }

    #[test]
    fn test_select_skips_vacant_slots() {
        let (mut menu, root) = menu_with(4);
        menu.vacate(ItemRef { level: root, index: 0 });
        menu.vacate(ItemRef { level: root, index: 2 });

        assert_eq!(menu.select(0), Some(1));
        assert_eq!(menu.select(1), Some(3));
        assert_eq!(menu.select(1), Some(1));
        assert_eq!(menu.select(-1), Some(3));

        assert_eq!(menu.select_by_index(1), Ok(3));
        assert_eq!(menu.select_by_index(0), Ok(1));
        assert_eq!(
            menu.select_by_index(2),
            Err(MenuError::OutOfRange { index: 2, count: 2 })
        );
    }

    #[test]
    fn test_out_of_range_leaves_selection() {
        let (mut menu, root) = menu_with(3);
        menu.select_by_index(1).unwrap();
        assert!(matches!(
            menu.select_by_index(3),
            Err(MenuError::OutOfRange { index: 3, count: 3 })
        ));
        assert_eq!(menu.level(root).unwrap().current(), Some(1));
    }

    #[test]
    fn test_empty_level_has_no_selection() {
        let (mut menu, root) = menu_with(0);
        assert_eq!(menu.select(0), None);
        assert_eq!(menu.select(1), None);
        assert_eq!(menu.select(-1), None);
        assert!(menu.selected().is_none());
        assert!(menu.level(root).unwrap().is_empty());
    }

    #[test]
    fn test_no_level_no_selection() {
        let mut menu: Menu<()> = Menu::with_capacity(0).unwrap();
        assert_eq!(menu.select(0), None);
        assert!(matches!(
            menu.select_by_index(0),
            Err(MenuError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_ids_strictly_increase() {
        let mut menu: Menu<()> = Menu::with_capacity(0).unwrap();
        let ids: Vec<u32> = (0..100).map(|_| menu.next_id().unwrap()).collect();
        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_ids_never_wrap() {
        let mut menu: Menu<()> = Menu::with_capacity(0).unwrap();
        menu.next_id = Some(u32::MAX - 1);
        assert_eq!(menu.next_id(), Ok(u32::MAX - 1));
        assert_eq!(menu.next_id(), Ok(u32::MAX));
        assert_eq!(menu.next_id(), Err(MenuError::IdsExhausted));
        assert_eq!(menu.next_id(), Err(MenuError::IdsExhausted));
    }

    #[test]
    fn test_invalid_handles() {
        let (mut menu, root) = menu_with(1);
        let bogus = LevelId(42);
        assert!(matches!(
            menu.add_item(bogus, 0, "x", None, None),
            Err(MenuError::InvalidArgument(_))
        ));
        assert!(matches!(
            menu.add_item(root, 0, "x", None, Some(bogus)),
            Err(MenuError::InvalidArgument(_))
        ));
        assert!(matches!(
            menu.allocate_level(1, Some(bogus)),
            Err(MenuError::InvalidArgument(_))
        ));
        assert!(menu
            .set_payload(ItemRef { level: root, index: 9 }, 1)
            .is_err());
        assert_eq!(menu.level(root).unwrap().count(), 1);
    }

    #[test]
    fn test_descend_and_ascend() {
        let mut menu: Menu<()> = Menu::with_capacity(2).unwrap();
        let root = menu.allocate_level(2, None).unwrap();
        let system = menu.allocate_level(2, Some(root)).unwrap();
        assert_eq!(menu.current_level(), Some(root));

        let id = menu.next_id().unwrap();
        menu.add_item(root, id, "Boot", None, None).unwrap();
        let id = menu.next_id().unwrap();
        menu.add_item(root, id, "System", Some("more"), Some(system))
            .unwrap();
        let id = menu.next_id().unwrap();
        menu.add_item(system, id, "Reboot", None, None).unwrap();

        menu.select(0);
        assert!(!menu.descend());

        menu.select(1);
        assert!(menu.descend());
        assert_eq!(menu.current_level(), Some(system));
        assert_eq!(menu.selected_item().unwrap().label(), "Reboot");

        assert!(menu.ascend());
        assert_eq!(menu.current_level(), Some(root));
        assert_eq!(menu.selected_item().unwrap().label(), "System");
        assert!(!menu.ascend());
    }

    #[test]
    fn test_payloads_and_destroy() {
        let (mut menu, root) = menu_with(3);
        let item = ItemRef { level: root, index: 1 };
        assert_eq!(menu.set_payload(item, 7), Ok(None));
        assert_eq!(menu.set_payload(item, 8), Ok(Some(7)));
        assert_eq!(menu.item(item).unwrap().payload(), Some(&8));

        menu.set_payload(ItemRef { level: root, index: 2 }, 9).unwrap();
        assert_eq!(menu.destroy(false), vec![8, 9]);

        let (mut menu, root) = menu_with(1);
        menu.set_payload(ItemRef { level: root, index: 0 }, 1).unwrap();
        assert!(menu.destroy(true).is_empty());
    }
}
