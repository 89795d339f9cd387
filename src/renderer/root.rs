//! Visual root - the isolated render target owned by one element.
//!
//! Every render recomputes the whole output from the template: nothing from a
//! previous render is reused, so the output always reflects the latest state.
//! Observers that want to react to new output can watch [`VisualRoot::revision`],
//! a signal bumped once per render.

use std::fmt;

use serde::{Deserialize, Serialize};
use spark_signals::{signal, Signal};

use super::buffer::{FrameBuffer, string_width};
use super::style::StyleScope;
use super::template::{Node, Template};
use crate::types::{Attr, Rgba};

/// Largest padding honored by a render; larger values are clamped.
pub const MAX_PADDING: u16 = 256;

/// Layout options for a visual root.
///
/// Missing fields take their defaults when loaded from JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Blank cells between the content and each edge, up to [`MAX_PADDING`].
    pub padding: u16,
    /// Glyph drawn before list items.
    pub bullet: char,
    /// Minimum frame width, in cells.
    pub min_width: u16,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            padding: 1,
            bullet: '•',
            min_width: 0,
        }
    }
}

struct Line {
    prefix: Option<char>,
    content: String,
    attrs: Attr,
}

/// Render target exclusively owned by a single element.
pub struct VisualRoot {
    options: RenderOptions,
    frame: FrameBuffer,
    lines: Vec<String>,
    slotted: Vec<String>,
    background: Rgba,
    render_count: u64,
    revision: Signal<u64>,
}

impl VisualRoot {
    pub fn new() -> Self {
        Self::with_options(RenderOptions::default())
    }

    pub fn with_options(options: RenderOptions) -> Self {
        Self {
            options,
            frame: FrameBuffer::new(0, 0),
            lines: Vec::new(),
            slotted: Vec::new(),
            background: Rgba::TERMINAL_DEFAULT,
            render_count: 0,
            revision: signal(0),
        }
    }

    pub fn options(&self) -> RenderOptions {
        self.options
    }

    /// Render a template, replacing the previous output.
    ///
    /// `slot` is the host element's child content, projected where the
    /// template places its slot. `styles` resolves custom style properties.
    pub fn render(&mut self, template: &Template, slot: &[String], styles: &StyleScope) {
        let background = match &template.background {
            Some(bg) => styles.resolve_color(&bg.var, bg.fallback),
            None => Rgba::TERMINAL_DEFAULT,
        };

        let mut lines = Vec::new();
        let mut slotted = Vec::new();
        for node in &template.nodes {
            match node {
                Node::Text { content, attrs } => lines.push(Line {
                    prefix: None,
                    content: content.clone(),
                    attrs: *attrs,
                }),
                Node::Item { label, value } => lines.push(Line {
                    prefix: Some(self.options.bullet),
                    content: format!("{label}: {value}"),
                    attrs: Attr::NONE,
                }),
                Node::Slot => {
                    for text in slot.iter().map(|t| t.trim()).filter(|t| !t.is_empty()) {
                        slotted.push(text.to_string());
                        lines.push(Line {
                            prefix: None,
                            content: text.to_string(),
                            attrs: Attr::NONE,
                        });
                    }
                }
            }
        }

        // Frame dimensions saturate at u16::MAX; text() keeps the full content.
        let pad = self.options.padding.min(MAX_PADDING);
        let content_width = lines
            .iter()
            .map(|line| string_width(&line.content) + if line.prefix.is_some() { 2 } else { 0 })
            .max()
            .unwrap_or(0);
        let width = clamp_cells(content_width)
            .saturating_add(pad.saturating_mul(2))
            .max(self.options.min_width);
        let height = clamp_cells(lines.len()).saturating_add(pad.saturating_mul(2));

        let mut frame = FrameBuffer::with_background(width, height, background);
        for (row, line) in lines.iter().enumerate() {
            let y = pad.saturating_add(clamp_cells(row));
            if y >= height {
                break;
            }
            let mut x = pad;
            if let Some(bullet) = line.prefix {
                let used =
                    frame.draw_text(x, y, &format!("{bullet} "), template.foreground, Attr::NONE);
                x = x.saturating_add(used);
            }
            frame.draw_text(x, y, &line.content, template.foreground, line.attrs);
        }

        self.frame = frame;
        self.lines = lines.into_iter().map(|line| line.content).collect();
        self.slotted = slotted;
        self.background = background;
        self.render_count += 1;
        self.revision.set(self.render_count);

        tracing::trace!(
            render = self.render_count,
            width,
            height,
            "visual root rendered"
        );
    }

    /// Number of renders performed so far.
    pub fn render_count(&self) -> u64 {
        self.render_count
    }

    /// Observation hook: a signal carrying the render count, set once per
    /// render. Effects that read it re-run after every render.
    pub fn revision(&self) -> Signal<u64> {
        self.revision.clone()
    }

    /// The latest rendered frame.
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    /// Text content of the latest render, one line per template line.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Child content projected into the slot by the latest render.
    pub fn slotted(&self) -> &[String] {
        &self.slotted
    }

    /// Background color resolved by the latest render.
    pub fn background(&self) -> Rgba {
        self.background
    }
}

fn clamp_cells(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

impl Default for VisualRoot {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for VisualRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisualRoot")
            .field("options", &self.options)
            .field("lines", &self.lines)
            .field("background", &self.background)
            .field("render_count", &self.render_count)
            .finish()
    }
}
