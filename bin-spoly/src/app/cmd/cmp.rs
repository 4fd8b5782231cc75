use crate::app::err::CliResult;
use crate::app::utils::load_poly;

#[derive(Clone, Default, Debug, clap::Args)]
pub struct Args {
    #[arg(allow_hyphen_values = true)]
    pub p: String,

    #[arg(allow_hyphen_values = true)]
    pub q: String,
}

pub fn run(args: &Args) -> CliResult<String> {
    let p = load_poly(&args.p)?;
    let q = load_poly(&args.q)?;

    Ok(format!("p == q: {}\np != q: {}", p == q, p != q))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(p: &str, q: &str) -> Args {
        Args { p: p.to_string(), q: q.to_string() }
    }

    #[test]
    fn equal() {
        assert_eq!(run(&args("3x^2+2x", "2x+3x^2")).unwrap(), "p == q: true\np != q: false");
    }

    #[test]
    fn not_equal() {
        assert_eq!(run(&args("3x^2+2x", "3x^2")).unwrap(), "p == q: false\np != q: true");
        assert_eq!(run(&args("0", "x-x+1")).unwrap(), "p == q: false\np != q: true");
    }
}
