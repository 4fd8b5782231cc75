use log::info;
use clap::{Parser, Subcommand};

use super::cmd::{arith, cmp, coeff, demo, eval, show};
use super::err::CliResult;
use super::utils::measure;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Cmd,

    // 0: off, 1: info, 2: debug, 3: trace.
    #[arg(long, global = true, default_value = "0")]
    pub log: u8,
}

#[derive(Subcommand, Debug)]
#[clap(rename_all = "lower")]
pub enum Cmd {
    /// Walk through construction, arithmetic, comparison and assignment.
    Demo(demo::Args),
    /// Print a polynomial in canonical form with its degree and size.
    Show(show::Args),
    /// Print the coefficient of a single power.
    Coeff(coeff::Args),
    /// Print p + q.
    Add(arith::Args),
    /// Print p - q.
    Sub(arith::Args),
    /// Compare p and q.
    Cmp(cmp::Args),
    /// Evaluate a polynomial at a point.
    Eval(eval::Args),
}

pub struct App {
    pub args: CliArgs
}

impl App {
    pub fn new() -> Self {
        let args = CliArgs::parse();
        App { args }
    }

    pub fn run(&self) -> CliResult<String> {
        self.init_logger()?;

        info!("args: {:?}", self.args);

        let (res, time) = measure(||
            self.dispatch()
        );

        info!("time: {:?}", time);

        res
    }

    fn init_logger(&self) -> CliResult<()> {
        let l = spoly::util::log::level_filter(self.args.log);
        spoly::util::log::init_simple_logger(l)?;
        Ok(())
    }

    fn dispatch(&self) -> CliResult<String> {
        match &self.args.command {
            Cmd::Demo(args)  => demo::run(args),
            Cmd::Show(args)  => show::run(args),
            Cmd::Coeff(args) => coeff::run(args),
            Cmd::Add(args)   => arith::run(args, arith::Op::Add),
            Cmd::Sub(args)   => arith::run(args, arith::Op::Sub),
            Cmd::Cmp(args)   => cmp::run(args),
            Cmd::Eval(args)  => eval::run(args),
        }
    }
}
