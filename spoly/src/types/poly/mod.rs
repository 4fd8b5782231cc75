mod term;
mod poly;
mod parse;

pub use term::Term;
pub use poly::Polynomial;
pub use parse::ParsePolyError;
