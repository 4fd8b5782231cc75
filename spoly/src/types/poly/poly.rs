use std::fmt::{Display, Debug};
use std::ops::{Add, AddAssign, Sub, SubAssign, Neg};
use delegate::delegate;
use itertools::{EitherOrBoth, Itertools};
use log::{trace, warn};
use num_traits::Zero;
use auto_impl_ops::auto_ops;

use crate::util::format::fmt_terms;
use super::Term;

// A sparse polynomial in one variable: a sequence of terms sorted by
// strictly descending power, with no zero coefficient and no repeated power.
//
// Every mutation goes through `change_coefficient`, so the ordering can be
// relied upon by `==` and by the merge in `+` / `-`.

#[derive(PartialEq, Default)]
pub struct Polynomial {
    terms: Vec<Term>
}

impl Polynomial {
    pub fn new() -> Self {
        Self { terms: vec![] }
    }

    delegate! {
        to self.terms {
            #[call(len)] pub fn nterms(&self) -> usize;
            #[call(first)] pub fn lead_term(&self) -> Option<&Term>;
            pub fn iter(&self) -> std::slice::Iter<'_, Term>;
        }
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn degree(&self) -> isize {
        self.lead_term().map_or(0, |t| t.power)
    }

    pub fn coefficient(&self, power: isize) -> f64 {
        match self.position(power) {
            Ok(i) => self.terms[i].coeff,
            Err(_) => 0.0
        }
    }

    pub fn eval(&self, x: f64) -> f64 {
        self.iter().fold(0.0, |acc, t| acc + t.eval(x))
    }

    // Sets the coefficient of `x^power`, inserting, updating or removing the
    // term as needed. Returns false only when nothing was changed: a zero
    // for an absent power, or a coefficient that is not finite.
    pub fn change_coefficient(&mut self, coeff: f64, power: isize) -> bool {
        if !coeff.is_finite() {
            trace!("reject coeff {coeff} for x^{power}");
            return false
        }

        match self.position(power) {
            Ok(i) if coeff == 0.0 => self.remove(i),
            Ok(i) => {
                self.terms[i].coeff = coeff;
                true
            },
            Err(_) if coeff == 0.0 => false,
            Err(i) => self.insert(i, coeff, power)
        }
    }

    pub fn clear(&mut self) {
        self.terms.clear()
    }

    // Replaces the terms of `self` by those of `rhs`, one by one.
    pub fn assign(&mut self, rhs: &Polynomial) {
        self.clear();
        self.terms.reserve(rhs.nterms());
        for t in rhs.iter() {
            self.change_coefficient(t.coeff, t.power);
        }
    }

    // `Ok(i)` if `x^power` is stored at `i`, otherwise `Err(i)` where `i` is
    // the first position holding a smaller power.
    fn position(&self, power: isize) -> Result<usize, usize> {
        self.terms.binary_search_by(|t| power.cmp(&t.power))
    }

    // requires: no term of `power` is present and `pos` is where it belongs.
    fn insert(&mut self, pos: usize, coeff: f64, power: isize) -> bool {
        if coeff == 0.0 {
            return false
        }

        debug_assert!(pos == 0 || self.terms[pos - 1].power > power);
        debug_assert!(pos == self.nterms() || self.terms[pos].power < power);

        self.terms.insert(pos, Term::new(coeff, power));
        true
    }

    fn remove(&mut self, pos: usize) -> bool {
        if pos >= self.nterms() {
            return false
        }

        self.terms.remove(pos);
        true
    }

    // One pass over both term sequences from the highest power down, writing
    // `a + sign * b` into a fresh polynomial.
    fn merge(&self, rhs: &Polynomial, sign: f64) -> Polynomial {
        use EitherOrBoth::{Both, Left, Right};

        let mut res = Polynomial::new();
        let iter = self.iter().merge_join_by(rhs.iter(), |s, t| t.power.cmp(&s.power));

        for e in iter {
            let (c, d) = match e {
                Both(s, t) => (s.coeff + sign * t.coeff, s.power),
                Left(s)    => (s.coeff, s.power),
                Right(t)   => (sign * t.coeff, t.power)
            };
            if !c.is_finite() {
                warn!("drop x^{d}: coefficient overflows to {c}.");
            }
            res.change_coefficient(c, d);
        }

        trace!("merge ({}) {} terms, {} terms -> {} terms.",
            if sign > 0.0 { "+" } else { "-" },
            self.nterms(), rhs.nterms(), res.nterms()
        );

        res
    }
}

impl Clone for Polynomial {
    fn clone(&self) -> Self {
        let mut res = Self::new();
        res.assign(self);
        res
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign(source)
    }
}

impl From<Term> for Polynomial {
    fn from(t: Term) -> Self {
        Self::from_iter([(t.coeff, t.power)])
    }
}

impl From<(f64, isize)> for Polynomial {
    fn from(pair: (f64, isize)) -> Self {
        Self::from_iter([pair])
    }
}

// Pairs are applied in order: a later pair overwrites the coefficient set by
// an earlier one of the same power.
impl FromIterator<(f64, isize)> for Polynomial {
    fn from_iter<T: IntoIterator<Item = (f64, isize)>>(iter: T) -> Self {
        let mut res = Self::new();
        for (r, d) in iter {
            res.change_coefficient(r, d);
        }
        res
    }
}

impl IntoIterator for Polynomial {
    type Item = Term;
    type IntoIter = std::vec::IntoIter<Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.into_iter()
    }
}

impl<'a> IntoIterator for &'a Polynomial {
    type Item = &'a Term;
    type IntoIter = std::slice::Iter<'a, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

impl Display for Polynomial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = fmt_terms(self.iter().map(|t| (t.coeff, t.power)));
        f.write_str(&s)
    }
}

impl Debug for Polynomial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Zero for Polynomial {
    fn zero() -> Self {
        Self::new()
    }

    fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }
}

impl Neg for Polynomial {
    type Output = Self;
    fn neg(self) -> Self::Output {
        -&self
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;
    fn neg(self) -> Self::Output {
        Polynomial { terms: self.iter().map(|t| -t).collect() }
    }
}

#[auto_ops]
impl<'a, 'b> Add<&'b Polynomial> for &'a Polynomial {
    type Output = Polynomial;
    fn add(self, rhs: &'b Polynomial) -> Self::Output {
        self.merge(rhs, 1.0)
    }
}

#[auto_ops]
impl<'a, 'b> Sub<&'b Polynomial> for &'a Polynomial {
    type Output = Polynomial;
    fn sub(self, rhs: &'b Polynomial) -> Self::Output {
        self.merge(rhs, -1.0)
    }
}
