//! GameView: lays a [`GameSnapshot`] out on a framebuffer.
//!
//! Pure; no terminal I/O happens here.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Glyph, Rgb};
use crate::types::PieceKind;

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

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

const CONTROLS: [&str; 4] = ["←→ move", "↑  rotate", "␣↓ drop", "q  quit"];

pub struct GameView {
    /// Terminal columns per board cell.
    cell_w: u16,
    /// Terminal rows per board cell.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell keeps blocks roughly square in most fonts.
        Self { cell_w: 2, cell_h: 1 }
    }
}

/// Where the well's border sits on screen.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::default());

        let cols = snap.width() as u16;
        let rows = snap.visible_height() as u16;
        let well_w = cols * self.cell_w;
        let well_h = rows * self.cell_h;
        let frame = Frame {
            x: viewport.width.saturating_sub(well_w + 2) / 2,
            y: viewport.height.saturating_sub(well_h + 2) / 2,
            w: well_w + 2,
            h: well_h + 2,
        };

        let well = CellStyle::new(WELL_BG, WELL_BG);
        fb.fill_rect(frame.x + 1, frame.y + 1, well_w, well_h, ' ', well);
        draw_border(fb, frame, CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG));

        let empty = CellStyle::new(Rgb::new(90, 90, 100), WELL_BG).dim();
        for (y, row) in snap.visible_rows().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let (ch, style) = match cell {
                    Some(kind) => ('█', CellStyle::new(piece_color(*kind), WELL_BG)),
                    None => ('·', empty),
                };
                self.fill_cell(fb, frame, x as u16, y as u16, ch, style);
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        if snap.game_over {
            draw_game_over(fb, frame);
        }
    }

    /// Render into a freshly allocated framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        x: u16,
        y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = frame.x + 1 + x * self.cell_w;
        let py = frame.y + 1 + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame: Frame,
    ) {
        let x = frame.x.saturating_add(frame.w).saturating_add(2);
        if viewport.width.saturating_sub(x) < 10 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);

        let stats = [
            ("SCORE", snap.score.to_string()),
            ("LEVEL", snap.level.to_string()),
            ("SPEED", format!("{}ms", snap.fall_interval_ms)),
        ];
        let mut y = frame.y;
        for (name, text) in &stats {
            fb.put_str(x, y, name, label);
            fb.put_str(x, y + 1, text, value);
            y += 3;
        }

        let hint = value.dim();
        for line in CONTROLS {
            fb.put_str(x, y, line, hint);
            y += 1;
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, frame: Frame, style: CellStyle) {
    let Frame { x, y, w, h } = frame;
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

fn draw_game_over(fb: &mut FrameBuffer, frame: Frame) {
    let mid = frame.y.saturating_add(frame.h / 2);
    let style = CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
    let hint = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
    put_centered(fb, frame, mid, "GAME OVER", style);
    put_centered(fb, frame, mid + 1, "r again  q quit", hint);
}

fn put_centered(fb: &mut FrameBuffer, frame: Frame, y: u16, text: &str, style: CellStyle) {
    let len = text.chars().count() as u16;
    let x = frame.x.saturating_add(frame.w.saturating_sub(len) / 2);
    fb.put_str(x, y, text, style);
}

fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::Z => Rgb::new(220, 80, 80),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;

    fn snapshot(kind: PieceKind) -> GameSnapshot {
        GameState::new(3).spawn_kind(kind).snapshot(0, 50)
    }

    #[test]
    fn test_piece_colors_are_distinct() {
        for (i, a) in PieceKind::ALL.iter().enumerate() {
            for b in &PieceKind::ALL[i + 1..] {
                assert_ne!(piece_color(*a), piece_color(*b), "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn test_tiny_viewport_does_not_panic() {
        let view = GameView::default();
        let fb = view.render(&snapshot(PieceKind::I), Viewport::new(5, 3));
        assert_eq!(fb.width(), 5);
        assert_eq!(fb.height(), 3);
    }
}
