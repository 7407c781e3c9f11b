//! GameView: maps a `GameSession` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSession;
use crate::types::{Card, GRID_CELLS, GRID_WIDTH};

use crate::term::fb::{Cell, CellStyle, FrameBuffer, Rgb};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal renderer for the card grid.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Wide cells leave room for a "10♥" label with padding.
        Self {
            cell_w: 7,
            cell_h: 3,
        }
    }
}

const GRID_BG: Rgb = Rgb::new(30, 30, 40);
const CURSOR_BG: Rgb = Rgb::new(70, 70, 95);
const RED_SUIT: Rgb = Rgb::new(235, 100, 100);
const BLACK_SUIT: Rgb = Rgb::new(225, 225, 225);

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the current session into a framebuffer.
    ///
    /// `cursor` is the highlighted cell; `message` is an optional transient
    /// line shown instead of the key legend.
    pub fn render(
        &self,
        session: &GameSession,
        cursor: usize,
        message: Option<&str>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let grid_px_w = (GRID_WIDTH as u16) * self.cell_w;
        let grid_px_h = (GRID_WIDTH as u16) * self.cell_h;
        let frame_w = grid_px_w + 2;
        let frame_h = grid_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            ..CellStyle::default()
        };

        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        for idx in 0..GRID_CELLS {
            let highlight = idx == cursor && !session.game_over();
            match session.grid().get(idx).flatten() {
                Some(card) => {
                    self.draw_card_cell(&mut fb, start_x, start_y, idx, card, highlight)
                }
                None => self.draw_empty_cell(&mut fb, start_x, start_y, idx, highlight),
            }
        }

        self.draw_side_panel(&mut fb, session, viewport, start_x, start_y, frame_w);

        if session.game_over() {
            self.draw_overlay_text(&mut fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }

        self.draw_footer(&mut fb, viewport, message);

        fb
    }

    fn cell_origin(&self, start_x: u16, start_y: u16, idx: usize) -> (u16, u16) {
        let cx = (idx % GRID_WIDTH) as u16;
        let cy = (idx / GRID_WIDTH) as u16;
        (start_x + 1 + cx * self.cell_w, start_y + 1 + cy * self.cell_h)
    }

    fn draw_card_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        idx: usize,
        card: Card,
        highlight: bool,
    ) {
        let bg = if highlight { CURSOR_BG } else { GRID_BG };
        let (px, py) = self.cell_origin(start_x, start_y, idx);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', CellStyle {
            bg,
            ..CellStyle::default()
        });

        let style = CellStyle {
            fg: card_color(card),
            bg,
            bold: true,
            ..CellStyle::default()
        };
        let label = card.to_string();
        let len = label.chars().count() as u16;
        let tx = px + self.cell_w.saturating_sub(len) / 2;
        let ty = py + self.cell_h / 2;
        fb.put_str(tx, ty, &label, style);
    }

    fn draw_empty_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        idx: usize,
        highlight: bool,
    ) {
        let bg = if highlight { CURSOR_BG } else { GRID_BG };
        let (px, py) = self.cell_origin(start_x, start_y, idx);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', CellStyle {
            bg,
            ..CellStyle::default()
        });

        // Digit hint matching the 1-9 placement keys.
        let style = CellStyle {
            fg: Rgb::new(110, 110, 125),
            bg,
            bold: highlight,
            dim: !highlight,
            ..CellStyle::default()
        };
        let tx = px + self.cell_w / 2;
        let ty = py + self.cell_h / 2;
        fb.put_char(tx, ty, char::from(b'1' + idx as u8), style);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        session: &GameSession,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            ..CellStyle::default()
        };

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{}", session.score()), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "DECK", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{}", session.cards_remaining()), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SEED", label);
        y = y.saturating_add(1);
        let seed: String = session.seed().chars().take(panel_w as usize).collect();
        fb.put_str(panel_x, y, &seed, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "CURRENT", label);
        y = y.saturating_add(1);
        match session.current_card() {
            Some(card) => {
                let style = CellStyle {
                    fg: card_color(card),
                    bold: true,
                    ..CellStyle::default()
                };
                fb.put_str(panel_x, y, &card.to_string(), style);
            }
            None => fb.put_str(panel_x, y, "-", value),
        }
        y = y.saturating_add(2);

        if !session.log().is_empty() {
            fb.put_str(panel_x, y, "CLEARS", label);
            y = y.saturating_add(1);
            for event in session.log().iter().rev().take(5) {
                if y >= viewport.height {
                    break;
                }
                let line = format!("+{} {}", event.points, event.kind.label());
                fb.put_str(panel_x, y, &line, value);
                y = y.saturating_add(1);
            }
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bold: true,
            ..CellStyle::default()
        };
        fb.put_str(x, mid_y, text, style);
    }

    fn draw_footer(&self, fb: &mut FrameBuffer, viewport: Viewport, message: Option<&str>) {
        let y = viewport.height.saturating_sub(1);
        match message {
            Some(text) => {
                // Transient toast: inverted banner.
                let style = CellStyle {
                    bold: true,
                    reverse: true,
                    ..CellStyle::default()
                };
                fb.put_str(0, y, text, style);
            }
            None => {
                let style = CellStyle {
                    dim: true,
                    ..CellStyle::default()
                };
                fb.put_str(
                    0,
                    y,
                    "arrows move / enter place / 1-9 cells / r restart / n new / c share / q quit",
                    style,
                );
            }
        }
    }
}

fn card_color(card: Card) -> Rgb {
    if card.suit.is_red() {
        RED_SUIT
    } else {
        BLACK_SUIT
    }
}
