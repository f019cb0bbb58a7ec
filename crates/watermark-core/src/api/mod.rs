pub mod extract;
pub mod mark;
