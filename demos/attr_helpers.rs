//! attr-helpers Example - property/attribute reflection
//!
//! Demonstrates:
//! - Registering the `<attr-helpers>` definition
//! - Assigning a property before the definition takes over the element
//! - Setting properties and attributes, and watching them reflect
//! - Overriding the background through a style variable
//! - Watching renders through the revision signal
//!
//! Run with: RUST_LOG=attr_helpers=trace cargo run --example attr_helpers

use std::io::{self, Write};

use attr_helpers::components::BACKGROUND_VAR;
use attr_helpers::{AttrHelpers, CustomElement, Element, StyleScope, define, upgrade, write_frame};
use spark_signals::effect;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("=== attr-helpers Example ===\n");

    define::<AttrHelpers>()?;

    // Markup as it exists before the definition is applied.
    let mut markup = Element::new("attr-helpers")
        .with_text("Pickle")
        .with_styles(StyleScope::new().with_var(BACKGROUND_VAR, "#03A9F4"));
    markup.set_property("one", "set before upgrade");
    markup.connect();

    let mut el = upgrade::<AttrHelpers>(markup)?;

    // Observe renders through the visual root's revision signal.
    let revision = el.shadow_root().map(|root| root.revision());
    let _stop = revision.map(|revision| {
        effect(move || println!("[revision {}]", revision.get()))
    });

    show(&el, "after upgrade")?;

    el.set_two(Some(42.0));
    el.set_three(true);
    show(&el, "after setting two and three")?;

    el.set_attribute("one", "from attribute");
    el.remove_attribute("three");
    show(&el, "after attribute changes")?;

    // Zero counts as absent for numbers.
    el.set_two(Some(0.0));
    println!("two = {:?}, attribute = {:?}", el.two(), el.get_attribute("two"));

    println!("\nrenders: {}", el.render_count());
    Ok(())
}

fn show(el: &AttrHelpers, label: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "--- {label} ---")?;
    for (name, value) in el.snapshot() {
        writeln!(stdout, "  {name} = {value:?}")?;
    }
    if let Some(root) = el.shadow_root() {
        write_frame(&mut stdout, root.frame())?;
    }
    writeln!(stdout)?;
    stdout.flush()
}
