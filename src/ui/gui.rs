//! Graphical front-end drawing on any [`Canvas`]

use std::rc::Rc;

use anyhow::{Context, Result};

use super::{level_title, notice, BootMenu, Frontend, MenuEntry};
use crate::config::Palette;
use crate::font::{Font, FIXED_6X9};
use crate::gfx::Canvas;
use crate::menu::MenuLevel;
use crate::rgb::{self, Rgba};
use crate::xpm::XpmImage;

const MARGIN: u32 = 4;

/// Resolved palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Colors {
    pub background: Rgba,
    pub text: Rgba,
    pub description: Rgba,
    pub highlight: Rgba,
    pub highlight_text: Rgba,
    pub border: Rgba,
    pub footer: Rgba,
}

impl Colors {
    pub fn from_palette(palette: &Palette) -> Colors {
        Colors {
            background: rgb::parse(&palette.background),
            text: rgb::parse(&palette.text),
            description: rgb::parse(&palette.description),
            highlight: rgb::parse(&palette.highlight),
            highlight_text: rgb::parse(&palette.highlight_text),
            border: rgb::parse(&palette.border),
            footer: rgb::parse(&palette.footer),
        }
    }
}

impl Default for Colors {
    fn default() -> Self {
        Colors::from_palette(&Palette::default())
    }
}

/// Vertical layout of one screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub header: u32,
    pub list_top: u32,
    pub slot: u32,
    pub visible: usize,
    pub footer_top: u32,
}

/// First visible slot so that `selected` stays on screen
pub fn scroll_offset(selected: usize, count: usize, visible: usize) -> usize {
    if visible == 0 || count <= visible {
        return 0;
    }
    (selected + 1).saturating_sub(visible).min(count - visible)
}

pub struct GraphicFrontend<C: Canvas> {
    canvas: C,
    logo: Option<Rc<XpmImage>>,
    colors: Colors,
    font: &'static Font,
}

impl<C: Canvas> GraphicFrontend<C> {
    pub fn new(canvas: C, logo: Option<Rc<XpmImage>>, colors: Colors) -> Self {
        Self {
            canvas,
            logo,
            colors,
            font: &FIXED_6X9,
        }
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn layout(&self, level: Option<&MenuLevel<MenuEntry>>) -> Layout {
        let font_height = self.font.height;
        let logo_height = self.logo.as_ref().map_or(0, |logo| logo.height());
        let header = logo_height.max(font_height) + 2 * MARGIN;

        let icon_height = level
            .into_iter()
            .flat_map(|level| level.items())
            .filter_map(|(_, item)| item.payload()?.icon.as_ref().map(|icon| icon.height()))
            .max()
            .unwrap_or(0);
        let slot = icon_height.max(2 * font_height) + 2 * MARGIN;

        let footer_top = self.canvas.height().saturating_sub(font_height + 2 * MARGIN);
        // the notice line sits between header and list
        let list_top = header + font_height + MARGIN;
        let visible = (footer_top.saturating_sub(list_top) / slot) as usize;

        Layout {
            header,
            list_top,
            slot,
            visible,
            footer_top,
        }
    }

    /// Screen rectangle of visible slot `n`
    pub fn slot_rect(&self, layout: &Layout, n: usize) -> (i32, i32, u32, u32) {
        (
            MARGIN as i32,
            (layout.list_top + n as u32 * layout.slot) as i32,
            self.canvas.width().saturating_sub(2 * MARGIN),
            layout.slot,
        )
    }

    fn draw_header(&mut self, title: &str) -> u32 {
        let mut x = MARGIN as i32;
        if let Some(logo) = self.logo.clone() {
            self.canvas.draw_image(x, MARGIN as i32, &logo);
            x += (logo.width() + MARGIN) as i32;
        }
        let header_height = self
            .logo
            .as_ref()
            .map_or(0, |logo| logo.height())
            .max(self.font.height)
            + 2 * MARGIN;
        let text_y = (header_height - self.font.height) as i32 / 2;
        self.canvas.draw_text(x, text_y, self.colors.text, self.font, title);

        let width = self.canvas.width();
        self.canvas.draw_rect(0, header_height as i32 - 1, width, 1, self.colors.border);
        header_height
    }

    fn draw_footer(&mut self, top: u32, text: &str) {
        let width = self.canvas.width();
        self.canvas.draw_rect(0, top as i32, width, 1, self.colors.border);
        self.canvas.draw_text(
            MARGIN as i32,
            (top + MARGIN) as i32,
            self.colors.footer,
            self.font,
            text,
        );
    }
}

impl<C: Canvas> Frontend for GraphicFrontend<C> {
    fn draw_menu(&mut self, menu: &BootMenu, footer: &str) -> Result<()> {
        let level = menu.current_level().and_then(|id| menu.level(id));
        let layout = self.layout(level);

        self.canvas.clear(self.colors.background);
        self.draw_header(&level_title(menu));

        if let Some(text) = notice(menu) {
            self.canvas.draw_text(
                MARGIN as i32,
                layout.header as i32 + MARGIN as i32 / 2,
                self.colors.description,
                self.font,
                text,
            );
        }

        if let Some(level) = level {
            let items: Vec<_> = level.items().collect();
            let selected = level
                .current()
                .and_then(|current| items.iter().position(|(index, _)| *index == current));
            let first = scroll_offset(selected.unwrap_or(0), items.len(), layout.visible);

            for (n, (index, item)) in items
                .iter()
                .skip(first)
                .take(layout.visible)
                .enumerate()
            {
                let (x, y, width, height) = self.slot_rect(&layout, n);
                let is_selected = level.current() == Some(*index);

                let text_color = if is_selected {
                    self.canvas.draw_rect(x, y, width, height, self.colors.highlight);
                    self.canvas.draw_frame(x, y, width, height, 1, self.colors.border);
                    self.colors.highlight_text
                } else {
                    self.colors.text
                };

                let mut text_x = x + MARGIN as i32;
                if let Some(icon) = item.payload().and_then(|entry| entry.icon.as_ref()) {
                    let icon_y = y + (height.saturating_sub(icon.height()) / 2) as i32;
                    self.canvas.draw_image(text_x, icon_y, icon);
                    text_x += (icon.width() + MARGIN) as i32;
                }

                let line = self.font.height as i32;
                let text_y = y + (height as i32 - 2 * line) / 2;
                self.canvas
                    .draw_text(text_x, text_y, text_color, self.font, item.label());
                if let Some(description) = item.description() {
                    self.canvas.draw_text(
                        text_x,
                        text_y + line,
                        self.colors.description,
                        self.font,
                        description,
                    );
                }
            }
        }

        self.draw_footer(layout.footer_top, footer);
        self.canvas.flush().context("Failed to update the screen")
    }

    fn draw_lines(&mut self, title: &str, lines: &[String]) -> Result<()> {
        self.canvas.clear(self.colors.background);
        let top = self.draw_header(title) + MARGIN;

        let line = self.font.height;
        let fits = (self.canvas.height().saturating_sub(top) / line) as usize;
        let skip = lines.len().saturating_sub(fits);

        for (n, text) in lines.iter().skip(skip).enumerate() {
            let y = top + n as u32 * line;
            self.canvas
                .draw_text(MARGIN as i32, y as i32, self.colors.text, self.font, text);
        }

        self.canvas.flush().context("Failed to update the screen")
    }
}
