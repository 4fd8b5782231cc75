use std::str::FromStr;
use spoly::Polynomial;
use crate::app::err::*;

pub fn measure<F, Res>(proc: F) -> (Res, std::time::Duration)
where F: FnOnce() -> Res {
    let start = std::time::Instant::now();
    let res = proc();
    let time = start.elapsed();
    (res, time)
}

pub fn load_poly(input: &str) -> CliResult<Polynomial> {
    let p = Polynomial::from_str(input)?;
    log::debug!("loaded '{input}' as {p} ({} terms).", p.nterms());
    Ok(p)
}

pub fn parse_power(input: &str) -> CliResult<isize> {
    match isize::from_str(input.trim()) {
        Ok(d) => Ok(d),
        Err(_) => bail!("invalid power: '{input}'.")
    }
}

pub fn parse_value(input: &str) -> CliResult<f64> {
    let x = match f64::from_str(input.trim()) {
        Ok(x) => x,
        Err(_) => bail!("invalid value: '{input}'.")
    };
    ensure!(x.is_finite(), "value must be finite: '{input}'.");
    Ok(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load() {
        let p = load_poly("3x^2 - 1").unwrap();
        assert_eq!(p.to_string(), "3x^2-1");

        let e = load_poly("3y").unwrap_err();
        assert!(e.to_string().starts_with("cannot parse polynomial"));
    }

    #[test]
    fn power() {
        assert_eq!(parse_power("2").unwrap(), 2);
        assert_eq!(parse_power(" -3 ").unwrap(), -3);

        let e = parse_power("x").unwrap_err();
        assert_eq!(e.to_string(), "invalid power: 'x'.");
    }

    #[test]
    fn value() {
        assert_eq!(parse_value("1.5").unwrap(), 1.5);
        assert!(parse_value("abc").is_err());
        assert!(parse_value("inf").is_err());
        assert!(parse_value("NaN").is_err());
    }

    #[test]
    fn measure_returns_result() {
        let (res, _) = measure(|| 1 + 1);
        assert_eq!(res, 2);
    }
}
