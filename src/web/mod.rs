//! Browser implementations of the motion host traits, plus small page helpers.

pub mod dom;
pub mod page;
