use crate::output::{Document, Output};

/// A bare confirmation, used by commands whose result is not worth showing.
pub fn show(message: &str, out: &Output) -> Document {
    Document::new().with(out.message(message))
}
