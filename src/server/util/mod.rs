pub mod parse;
pub mod time;
pub mod validate;
