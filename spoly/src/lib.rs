mod types;

pub use types::*;

pub mod util;
