//! Text rendering of a chain

use std::io;

use crate::node::{Iter, Link};
use crate::style::RenderStyle;

/// Render with the default style: `"1 → 2 → 3 → ╳\n"`.
///
/// # Example
///
/// ```
/// use nodelist::{from_slice, ops};
///
/// assert_eq!(ops::render(&from_slice(&[1, 2, 3])), "1 → 2 → 3 → ╳\n");
/// assert_eq!(ops::render(&None), "╳\n");
/// ```
pub fn render(head: &Link) -> String {
    render_with(head, &RenderStyle::default())
}

/// Render with the glyphs of `style`.
pub fn render_with(head: &Link, style: &RenderStyle) -> String {
    let mut out = String::new();
    for value in Iter::new(head) {
        out.push_str(&value.to_string());
        out.push_str(&style.arrow);
    }
    out.push_str(&style.terminator);
    out.push('\n');
    out
}

/// Write the rendering to `writer`.
pub fn write_to<W: io::Write>(head: &Link, writer: &mut W, style: &RenderStyle) -> io::Result<()> {
    writer.write_all(render_with(head, style).as_bytes())
}

/// Print the rendering to stdout.
pub fn traverse_and_print(head: &Link) {
    print!("{}", render(head));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::from_slice;

    #[test]
    fn test_render_single() {
        assert_eq!(render(&from_slice(&[7])), "7 → ╳\n");
    }

    #[test]
    fn test_render_ascii() {
        let out = render_with(&from_slice(&[-1, 2]), &RenderStyle::ascii());
        assert_eq!(out, "-1 -> 2 -> X\n");
    }

    #[test]
    fn test_write_to_buffer() {
        let mut buf = Vec::new();
        write_to(&from_slice(&[1, 2]), &mut buf, &RenderStyle::default()).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "1 → 2 → ╳\n");
    }
}
