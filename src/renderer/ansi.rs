//! ANSI serialization of a frame.
//!
//! Consecutive cells with the same style are emitted as one run, so a frame
//! costs one style change per run rather than per cell.

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{
    Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};

use super::buffer::FrameBuffer;
use crate::types::{Attr, Cell, Rgba};

fn to_color(color: Rgba) -> Color {
    if color.is_terminal_default() {
        Color::Reset
    } else {
        Color::Rgb {
            r: color.r.clamp(0, 255) as u8,
            g: color.g.clamp(0, 255) as u8,
            b: color.b.clamp(0, 255) as u8,
        }
    }
}

fn queue_attrs<W: Write>(out: &mut W, attrs: Attr) -> io::Result<()> {
    queue!(out, SetAttribute(Attribute::Reset))?;
    if attrs.contains(Attr::BOLD) {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if attrs.contains(Attr::DIM) {
        queue!(out, SetAttribute(Attribute::Dim))?;
    }
    if attrs.contains(Attr::ITALIC) {
        queue!(out, SetAttribute(Attribute::Italic))?;
    }
    if attrs.contains(Attr::UNDERLINE) {
        queue!(out, SetAttribute(Attribute::Underlined))?;
    }
    Ok(())
}

fn same_style(a: &Cell, b: &Cell) -> bool {
    a.fg == b.fg && a.bg == b.bg && a.attrs == b.attrs
}

/// Write a frame as styled text, one terminal line per row.
pub fn write_frame<W: Write>(out: &mut W, frame: &FrameBuffer) -> io::Result<()> {
    for y in 0..frame.height() {
        let row = frame.row(y);
        let mut start = 0;
        while start < row.len() {
            let style = &row[start];
            let end = row[start..]
                .iter()
                .position(|cell| !same_style(style, cell))
                .map_or(row.len(), |offset| start + offset);

            let text: String = row[start..end]
                .iter()
                .filter(|cell| cell.char != 0)
                .filter_map(|cell| char::from_u32(cell.char))
                .collect();

            queue!(
                out,
                SetForegroundColor(to_color(style.fg)),
                SetBackgroundColor(to_color(style.bg))
            )?;
            queue_attrs(out, style.attrs)?;
            queue!(out, Print(text))?;

            start = end;
        }
        queue!(out, SetAttribute(Attribute::Reset), ResetColor, Print("\n"))?;
    }
    out.flush()
}
