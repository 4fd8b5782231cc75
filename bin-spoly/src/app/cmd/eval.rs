use crate::app::err::*;
use crate::app::utils::{load_poly, parse_value};

#[derive(Clone, Default, Debug, clap::Args)]
pub struct Args {
    #[arg(allow_hyphen_values = true)]
    pub poly: String,

    #[arg(allow_hyphen_values = true)]
    pub x: String,
}

pub fn run(args: &Args) -> CliResult<String> {
    let p = load_poly(&args.poly)?;
    let x = parse_value(&args.x)?;

    ensure!(x != 0.0 || p.iter().all(|t| t.power() >= 0),
        "cannot evaluate {p} at 0: negative power."
    );

    Ok(p.eval(x).to_string())
}
