use std::fmt::{Display, Debug};
use std::ops::Neg;

use crate::util::format::fmt_term;

// `Term` : a single monomial `coeff * x^power`.
// Terms owned by a `Polynomial` never carry a zero coefficient.

#[derive(Clone, Copy, PartialEq)]
pub struct Term {
    pub(crate) coeff: f64,
    pub(crate) power: isize
}

impl Term {
    pub fn new(coeff: f64, power: isize) -> Self {
        Self { coeff, power }
    }

    pub fn coeff(&self) -> f64 {
        self.coeff
    }

    pub fn power(&self) -> isize {
        self.power
    }

    pub fn eval(&self, x: f64) -> f64 {
        if self.power == 0 {
            self.coeff
        } else {
            self.coeff * x.powf(self.power as f64)
        }
    }
}

impl From<(f64, isize)> for Term {
    fn from(pair: (f64, isize)) -> Self {
        Self::new(pair.0, pair.1)
    }
}

impl From<Term> for (f64, isize) {
    fn from(t: Term) -> Self {
        (t.coeff, t.power)
    }
}

impl Neg for Term {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self::new(-self.coeff, self.power)
    }
}

impl Neg for &Term {
    type Output = Term;
    fn neg(self) -> Self::Output {
        -*self
    }
}

impl Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&fmt_term(self.coeff, self.power, true))
    }
}

impl Debug for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}
