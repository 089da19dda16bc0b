//! Text front-end on the controlling terminal

use std::io::{stdout, Stdout};

use anyhow::{Context, Result};
use crossterm::{
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::{level_title, notice, BootMenu, Frontend};
use crate::debuglog;

/// One list row: label and optional description
pub type Row = (String, Option<String>);

/// Rows of the current level and the position of the selected one
pub fn menu_rows(menu: &BootMenu) -> (Vec<Row>, Option<usize>) {
    let Some(level) = menu.current_level().and_then(|id| menu.level(id)) else {
        return (Vec::new(), None);
    };

    let mut selected = None;
    let rows = level
        .items()
        .enumerate()
        .map(|(position, (index, item))| {
            if level.current() == Some(index) {
                selected = Some(position);
            }
            (
                item.label().to_string(),
                item.description().map(str::to_string),
            )
        })
        .collect();

    (rows, selected)
}

/// The last lines of `lines` that fit in `height` rows
pub fn tail(lines: &[String], height: usize) -> &[String] {
    &lines[lines.len().saturating_sub(height)..]
}

pub struct TextFrontend {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TextFrontend {
    /// Take over the terminal: raw mode, alternate screen, no log echo
    pub fn new() -> Result<TextFrontend> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        stdout()
            .execute(EnterAlternateScreen)
            .context("Failed to enter the alternate screen")?;
        debuglog::set_echo(false);

        let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
        Ok(TextFrontend { terminal })
    }
}

impl Drop for TextFrontend {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = stdout().execute(LeaveAlternateScreen);
        debuglog::set_echo(true);
    }
}

fn chunks(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(3),    // Content
            Constraint::Length(3), // Footer
        ])
        .split(area)
}

fn header(title: &str) -> Paragraph<'_> {
    Paragraph::new(format!("  {}", title))
        .style(Style::default().fg(Color::Cyan).bold())
        .block(Block::default().borders(Borders::BOTTOM))
}

impl Frontend for TextFrontend {
    fn draw_menu(&mut self, menu: &BootMenu, footer: &str) -> Result<()> {
        let title = level_title(menu);
        let notice = notice(menu);
        let (rows, selected) = menu_rows(menu);

        self.terminal.draw(|frame| {
            let chunks = chunks(frame.size());
            frame.render_widget(header(&title), chunks[0]);

            let items: Vec<ListItem> = rows
                .iter()
                .map(|(label, description)| {
                    let mut lines = vec![Line::from(label.as_str())];
                    if let Some(description) = description {
                        lines.push(Line::styled(
                            format!("  {}", description),
                            Style::default().fg(Color::DarkGray),
                        ));
                    }
                    ListItem::new(lines)
                })
                .collect();

            let mut block = Block::default().borders(Borders::ALL);
            if let Some(notice) = notice {
                block = block.title(format!(" {} ", notice));
            }
            let list = List::new(items)
                .block(block)
                .highlight_style(Style::default().fg(Color::Black).bg(Color::Cyan))
                .highlight_symbol("> ");

            let mut state = ListState::default();
            state.select(selected);
            frame.render_stateful_widget(list, chunks[1], &mut state);

            let footer = Paragraph::new(format!("  {}", footer))
                .block(Block::default().borders(Borders::TOP));
            frame.render_widget(footer, chunks[2]);
        })?;

        Ok(())
    }

    fn draw_lines(&mut self, title: &str, lines: &[String]) -> Result<()> {
        self.terminal.draw(|frame| {
            let chunks = chunks(frame.size());
            frame.render_widget(header(title), chunks[0]);

            let body = chunks[1].union(chunks[2]);
            let height = body.height.saturating_sub(2) as usize;
            let text: Vec<Line> = tail(lines, height)
                .iter()
                .map(|line| Line::from(line.as_str()))
                .collect();
            let page = Paragraph::new(text).block(Block::default().borders(Borders::ALL));
            frame.render_widget(page, body);
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::build_menu;
    use crate::ui::tests::boot_item;
    use crate::ui::theme::Theme;

    #[test]
    fn test_menu_rows() {
        let items = vec![boot_item("first", 0, false), boot_item("second", 0, true)];
        let menu = build_menu(items, &Theme::default(), false).unwrap();

        let (rows, selected) = menu_rows(&menu);
        assert_eq!(selected, Some(1));
        let labels: Vec<&str> = rows.iter().map(|(label, _)| label.as_str()).collect();
        assert_eq!(labels, ["first", "second", "Rescan", "System"]);
        assert!(rows[0].1.as_deref().unwrap().contains("/dev/mmcblk0p1"));
        assert_eq!(rows[2].1, None);
    }

    #[test]
    fn test_menu_rows_follow_submenu() {
        let mut menu = build_menu(Vec::new(), &Theme::default(), false).unwrap();
        menu.select(1);
        menu.descend();

        let (rows, selected) = menu_rows(&menu);
        assert_eq!(selected, Some(0));
        assert_eq!(rows[0].0, "Back");
        assert_eq!(rows.len(), 4);
    }

    #[test]
    fn test_tail() {
        let lines: Vec<String> = (0..5).map(|i| i.to_string()).collect();
        assert_eq!(tail(&lines, 2), ["3", "4"]);
        assert_eq!(tail(&lines, 10).len(), 5);
        assert!(tail(&lines, 0).is_empty());
    }
}
