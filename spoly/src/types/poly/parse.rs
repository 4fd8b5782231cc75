use std::str::FromStr;
use regex::Regex;

use super::Polynomial;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("cannot parse polynomial: {msg}")]
pub struct ParsePolyError {
    msg: String
}

impl ParsePolyError {
    fn new<S: Into<String>>(msg: S) -> Self {
        Self { msg: msg.into() }
    }

    pub fn msg(&self) -> &str {
        &self.msg
    }
}

impl std::error::Error for ParsePolyError {}

// sign, coefficient, `x` with an optional `^power`.
const TERM_PATTERN: &str = r"^([+-])?\s*(\d+(?:\.\d*)?(?:[eE][+-]?\d+)?|\.\d+(?:[eE][+-]?\d+)?)?(x(?:\^([+-]?\d+))?)?";

// Accepts the text produced by `Display` (`3x^2+2x-1`, `-1x^3`, `0`) as well
// as `-x` and `2.5x^-1`. Whitespace may separate terms and follow a sign,
// but does not join tokens: `x^2 1` is rejected. Terms of the same power are
// summed.
impl FromStr for Polynomial {
    type Err = ParsePolyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rest = s.trim_start();
        if rest.is_empty() {
            return Err(ParsePolyError::new("empty input"))
        }

        let re = Regex::new(TERM_PATTERN).map_err(|e| ParsePolyError::new(e.to_string()))?;
        let mut res = Polynomial::new();

        while !rest.is_empty() {
            let pos = s.len() - rest.len();
            let caps = re.captures(rest)
                .filter(|c| !c[0].is_empty())
                .ok_or_else(|| ParsePolyError::new(format!("unexpected '{rest}' at {pos}")))?;

            let sign = caps.get(1).map(|m| m.as_str());
            let coeff = caps.get(2).map(|m| m.as_str());
            let var = caps.get(3);
            let power = caps.get(4).map(|m| m.as_str());

            if pos > 0 && sign.is_none() {
                return Err(ParsePolyError::new(format!("missing sign before '{rest}' at {pos}")))
            }
            if coeff.is_none() && var.is_none() {
                return Err(ParsePolyError::new(format!("dangling sign at {pos}")))
            }

            let r = match coeff {
                Some(c) => c.parse::<f64>().map_err(|e| ParsePolyError::new(format!("'{c}': {e}")))?,
                None => 1.0
            };
            let r = if sign == Some("-") { -r } else { r };
            if !r.is_finite() {
                return Err(ParsePolyError::new(format!("coefficient out of range at {pos}")))
            }

            let d = match (var, power) {
                (None, _) => 0,
                (Some(_), None) => 1,
                (Some(_), Some(p)) => p.parse::<isize>().map_err(|e| ParsePolyError::new(format!("'{p}': {e}")))?
            };

            let sum = res.coefficient(d) + r;
            if !sum.is_finite() {
                return Err(ParsePolyError::new(format!("coefficient out of range at {pos}")))
            }
            res.change_coefficient(sum, d);

            rest = rest[caps[0].len()..].trim_start();
        }

        Ok(res)
    }
}
