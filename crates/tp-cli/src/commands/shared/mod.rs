pub mod input;
pub mod parse;
pub mod report;
