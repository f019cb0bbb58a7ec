mod codec;
pub mod compression;

pub use codec::*;
