// Plain-text rendering of terms: `3x^2`, `+2x`, `-1`.

pub fn fmt_mono(x: &str, d: isize) -> String {
    match d {
        0 => String::new(),
        1 => x.to_string(),
        _ => format!("{x}^{d}")
    }
}

// `leading` is false for every term but the first one, which then gets an
// explicit `+` when its coefficient is positive. Negative coefficients carry
// their own sign, and only `1` is elided (`-1x` stays as is).
pub fn fmt_term(r: f64, d: isize, leading: bool) -> String {
    let mut res = String::new();

    if !leading && r > 0.0 {
        res.push('+');
    }

    if r != 1.0 {
        res.push_str(&r.to_string());
    }

    if d != 0 {
        res.push_str(&fmt_mono("x", d));
    } else if r == 1.0 {
        res.push('1');
    }

    res
}

pub fn fmt_terms<I>(terms: I) -> String
where I: IntoIterator<Item = (f64, isize)> {
    let res = terms.into_iter().enumerate().fold(String::new(), |mut res, (i, (r, d))| {
        res.push_str(&fmt_term(r, d, i == 0));
        res
    });

    if res.is_empty() {
        "0".to_string()
    } else {
        res
    }
}
