pub mod input;
pub mod resume;
