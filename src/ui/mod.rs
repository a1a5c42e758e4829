pub mod accordion;
pub mod slider;
