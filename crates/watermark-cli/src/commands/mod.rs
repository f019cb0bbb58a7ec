pub mod capacity;
pub mod extract;
pub mod mark;
