//! Page components.

pub mod header;
pub mod star_field;
