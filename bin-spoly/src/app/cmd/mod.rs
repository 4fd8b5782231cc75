pub mod demo;
pub mod show;
pub mod coeff;
pub mod arith;
pub mod cmp;
pub mod eval;
