use crate::app::err::CliResult;
use crate::app::utils::{load_poly, parse_power};

#[derive(Clone, Default, Debug, clap::Args)]
pub struct Args {
    #[arg(allow_hyphen_values = true)]
    pub poly: String,

    #[arg(allow_hyphen_values = true)]
    pub power: String,
}

pub fn run(args: &Args) -> CliResult<String> {
    let p = load_poly(&args.poly)?;
    let d = parse_power(&args.power)?;
    Ok(p.coefficient(d).to_string())
}
