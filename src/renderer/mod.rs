//! Render collaborator.
//!
//! Components describe their output as a [`Template`]; a [`VisualRoot`]
//! owned by the element turns it into a [`FrameBuffer`], resolving custom
//! style properties through a [`StyleScope`].
//!
//! # Pipeline
//!
//! ```text
//! property values → Template → VisualRoot::render → FrameBuffer → write_frame (ANSI)
//! ```

pub mod ansi;
pub mod buffer;
pub mod root;
pub mod style;
pub mod template;

pub use ansi::write_frame;
pub use buffer::FrameBuffer;
pub use root::{MAX_PADDING, RenderOptions, VisualRoot};
pub use style::StyleScope;
pub use template::{Background, Node, Template};
