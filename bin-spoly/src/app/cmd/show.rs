use crate::app::err::CliResult;
use crate::app::utils::load_poly;

#[derive(Clone, Default, Debug, clap::Args)]
pub struct Args {
    #[arg(allow_hyphen_values = true)]
    pub poly: String,

    #[arg(short, long)]
    pub terms: bool,
}

pub fn run(args: &Args) -> CliResult<String> {
    let p = load_poly(&args.poly)?;

    let mut lines = vec![
        format!("{p}"),
        format!("degree: {}", p.degree()),
        format!("nterms: {}", p.nterms()),
    ];

    if args.terms {
        lines.extend(p.iter().map(|t|
            format!("  x^{}: {}", t.power(), t.coeff())
        ));
    }

    Ok(lines.join("\n"))
}
