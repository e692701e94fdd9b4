//! Display and Debug implementations for LinkedList

use std::fmt;

use super::LinkedList;
use crate::style::RenderStyle;

impl fmt::Debug for LinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl fmt::Display for LinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Same as `render`, minus the trailing newline
        let style = RenderStyle::default();
        for value in self.iter() {
            write!(f, "{}{}", value, style.arrow)?;
        }
        write!(f, "{}", style.terminator)
    }
}
