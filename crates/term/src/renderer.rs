//! TerminalRenderer: pushes frame buffers to a terminal.
//!
//! The first frame, and any frame whose size differs from the previous one, is
//! drawn in full. After that only horizontal runs of changed glyphs are sent.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// A horizontal stretch of glyphs that differ between two frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub x: u16,
    pub y: u16,
    pub len: u16,
}

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalRenderer<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    /// Undo [`TerminalRenderer::enter`].
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Make the next draw a full redraw, e.g. after a resize.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw `fb`, then swap it with the previously drawn frame.
    ///
    /// On return `fb` holds stale contents the caller can render over, so two
    /// buffers are reused forever without cloning.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let mut prev = match self.last.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                prev
            }
            _ => {
                encode_full_into(fb, &mut self.buf)?;
                FrameBuffer::new(fb.width(), fb.height())
            }
        };
        self.flush_buf()?;

        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Encode a complete redraw of `fb` into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    let mut style = None;
    for y in 0..fb.height() {
        for glyph in fb.row(y) {
            if style != Some(glyph.style) {
                apply_style_into(out, glyph.style)?;
                style = Some(glyph.style);
            }
            out.queue(Print(glyph.ch))?;
        }
        if y + 1 < fb.height() {
            out.queue(Print("\r\n"))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode only the glyphs of `next` that differ from `prev`.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut style = None;
    for run in changed_runs(prev, next) {
        out.queue(cursor::MoveTo(run.x, run.y))?;
        let start = usize::from(run.x);
        for glyph in &next.row(run.y)[start..start + usize::from(run.len)] {
            if style != Some(glyph.style) {
                apply_style_into(out, glyph.style)?;
                style = Some(glyph.style);
            }
            out.queue(Print(glyph.ch))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Maximal runs of differing glyphs, row by row. Frames of different sizes
/// yield one run per row of `next`.
pub fn changed_runs(prev: &FrameBuffer, next: &FrameBuffer) -> Vec<Run> {
    if prev.width() != next.width() || prev.height() != next.height() {
        return (0..next.height())
            .map(|y| Run { x: 0, y, len: next.width() })
            .collect();
    }

    let mut runs = Vec::new();
    for y in 0..next.height() {
        let mut start = None;
        for (x, (a, b)) in prev.row(y).iter().zip(next.row(y)).enumerate() {
            let x = x as u16;
            match (a != b, start) {
                (true, None) => start = Some(x),
                (false, Some(s)) => {
                    runs.push(Run { x: s, y, len: x - s });
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = start {
            runs.push(Run { x: s, y, len: next.width() - s });
        }
    }
    runs
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(to_color(style.fg)))?;
    out.queue(SetBackgroundColor(to_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(rows: &[&str]) -> FrameBuffer {
        let mut fb = FrameBuffer::new(rows[0].chars().count() as u16, rows.len() as u16);
        for (y, row) in rows.iter().enumerate() {
            fb.put_str(0, y as u16, row, CellStyle::default());
        }
        fb
    }

    #[test]
    fn test_runs_coalesce_adjacent_changes() {
        let a = frame(&[".....", "....."]);
        let b = frame(&[".XXX.", "X...X"]);
        assert_eq!(
            changed_runs(&a, &b),
            vec![
                Run { x: 1, y: 0, len: 3 },
                Run { x: 0, y: 1, len: 1 },
                Run { x: 4, y: 1, len: 1 },
            ]
        );
    }

    #[test]
    fn test_style_only_change_is_a_run() {
        let a = frame(&["ab"]);
        let mut b = a.clone();
        b.put_char(1, 0, 'b', CellStyle::default().bold());
        assert_eq!(changed_runs(&a, &b), vec![Run { x: 1, y: 0, len: 1 }]);
    }

    #[test]
    fn test_identical_frames_encode_no_text() {
        let a = frame(&["abc"]);
        let mut out = Vec::new();
        encode_diff_into(&a, &a.clone(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains('a'));
    }

    #[test]
    fn test_draw_swap_sends_full_then_diff() {
        let mut renderer = TerminalRenderer::with_writer(Vec::new());

        let mut fb = frame(&["hello"]);
        renderer.draw_swap(&mut fb).unwrap();
        let first = String::from_utf8_lossy(renderer.writer()).into_owned();
        assert!(first.contains("hello"));

        let mut next = frame(&["hellO"]);
        renderer.draw_swap(&mut next).unwrap();
        let all = String::from_utf8_lossy(renderer.writer()).into_owned();
        let second = &all[first.len()..];
        assert!(second.contains('O'));
        assert!(!second.contains("hell"));
    }
}
