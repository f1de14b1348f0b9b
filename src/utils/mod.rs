pub mod display;

pub use display::{display_name, format_thousands};
