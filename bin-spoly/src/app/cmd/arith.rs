use log::info;
use crate::app::err::CliResult;
use crate::app::utils::load_poly;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Op {
    Add,
    Sub
}

#[derive(Clone, Default, Debug, clap::Args)]
pub struct Args {
    #[arg(allow_hyphen_values = true)]
    pub p: String,

    #[arg(allow_hyphen_values = true)]
    pub q: String,
}

pub fn run(args: &Args, op: Op) -> CliResult<String> {
    let p = load_poly(&args.p)?;
    let q = load_poly(&args.q)?;

    let r = match op {
        Op::Add => &p + &q,
        Op::Sub => &p - &q,
    };

    info!("{op:?}: ({p}), ({q}) -> {} terms.", r.nterms());

    Ok(r.to_string())
}
