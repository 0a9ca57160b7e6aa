// ============================================================================
// Recursive descent printer
// ============================================================================

use std::fmt::Display;
use std::io::{self, Write};

use itertools::Itertools;
use serde::Deserialize;

use crate::container::{Container, Element};

/// Delimiters and spacing used when rendering containers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PrintStyle {
    /// Spaces per nesting level.
    pub indent_width: usize,
    pub open: String,
    pub close: String,
    /// Between values of a flat container.
    pub separator: String,
}

impl Default for PrintStyle {
    fn default() -> Self {
        PrintStyle {
            indent_width: 4,
            open: "{".to_string(),
            close: "}".to_string(),
            separator: " ".to_string(),
        }
    }
}

impl PrintStyle {
    pub fn indent(&self, depth: usize) -> String {
        " ".repeat(depth * self.indent_width)
    }
}

/// One scalar on its own line, indented for its depth.
pub fn write_scalar<T, W>(value: &T, out: &mut W, depth: usize, style: &PrintStyle) -> io::Result<()>
where
    T: Display + ?Sized,
    W: Write + ?Sized,
{
    writeln!(out, "{}{}", style.indent(depth), value)
}

/// All values on one line, separator-joined, no delimiters.
///
/// An empty container prints the bare delimiter pair (`{}`) so it never
/// shows up as a blank line.
pub fn write_flat<C, W>(container: &C, out: &mut W, style: &PrintStyle) -> io::Result<()>
where
    C: Container + ?Sized,
    C::Item: Display,
    W: Write + ?Sized,
{
    if container.is_empty() {
        return writeln!(out, "{}{}", style.open, style.close);
    }
    writeln!(out, "{}", container.iter().join(&style.separator))
}

/// Bracketed block: delimiters at `depth`, children one level deeper.
pub fn write_nested<C, W>(
    container: &C,
    out: &mut W,
    depth: usize,
    style: &PrintStyle,
) -> io::Result<()>
where
    C: Container + ?Sized,
    C::Item: Element,
    W: Write + ?Sized,
{
    let pad = style.indent(depth);
    writeln!(out, "{}{}", pad, style.open)?;
    for child in container.iter() {
        child.write_node(out, depth + 1, style)?;
    }
    writeln!(out, "{}{}", pad, style.close)
}

/// Flat layout for a sequence of scalars, nested layout for anything deeper.
pub fn write_container<C, W>(container: &C, out: &mut W, style: &PrintStyle) -> io::Result<()>
where
    C: Container + ?Sized,
    C::Item: Element,
    W: Write + ?Sized,
{
    <C::Item as Element>::write_level(container, out, style)
}

pub fn render<C>(container: &C, style: &PrintStyle) -> io::Result<String>
where
    C: Container + ?Sized,
    C::Item: Element,
{
    let mut buf = Vec::new();
    write_container(container, &mut buf, style)?;
    String::from_utf8(buf).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
}

pub fn print_container<C>(container: &C) -> io::Result<()>
where
    C: Container + ?Sized,
    C::Item: Element,
{
    print_container_with(container, &PrintStyle::default())
}

pub fn print_container_with<C>(container: &C, style: &PrintStyle) -> io::Result<()>
where
    C: Container + ?Sized,
    C::Item: Element,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_container(container, &mut out, style)
}
