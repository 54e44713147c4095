use console::Style;
use once_cell::sync::Lazy;
use tabula::{Theme, HEAD_STYLE};

pub const LABEL: &str = "label";
pub const ID: &str = "id";
pub const RED: &str = "red";
pub const GREEN: &str = "green";
pub const YELLOW: &str = "yellow";
pub const BLUE: &str = "blue";
pub const CYAN: &str = "cyan";
pub const MAGENTA: &str = "magenta";
pub const GRAY: &str = "gray";

pub static DOCLI_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add(HEAD_STYLE, Style::new().red())
        .add(LABEL, Style::new().red())
        .add(ID, Style::new().bold().cyan())
        .add(RED, Style::new().red())
        .add(GREEN, Style::new().green())
        .add(YELLOW, Style::new().yellow())
        .add(BLUE, Style::new().blue())
        .add(CYAN, Style::new().cyan())
        .add(MAGENTA, Style::new().magenta())
        .add(GRAY, Style::new().color256(8))
});
