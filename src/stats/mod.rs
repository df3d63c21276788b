//! Statistics aggregation over positioned elements.

mod character;
mod counter;
mod line;

pub use character::CharacterStatistic;
pub use counter::{FloatCounter, ObjectCounter};
pub use line::TextLineStatistic;
