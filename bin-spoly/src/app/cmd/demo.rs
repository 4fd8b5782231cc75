use std::fmt::Write;
use log::info;
use spoly::Polynomial;
use crate::app::err::CliResult;

#[derive(Clone, Default, Debug, clap::Args)]
pub struct Args {}

// Exercises every public operation in turn and reports each step.
pub fn run(_args: &Args) -> CliResult<String> {
    let mut b = String::with_capacity(1024);

    let mut p1 = Polynomial::new();
    writeln!(b, "p1 (default): {p1}")?;
    writeln!(b, "p1 degree: {}", p1.degree())?;
    writeln!(b, "p1 coefficient at power 2: {}", p1.coefficient(2))?;

    p1.change_coefficient(5.0, 2);
    p1.change_coefficient(-3.0, 0);
    writeln!(b, "p1 (after change_coefficient): {p1}")?;

    let p2 = p1.clone();
    writeln!(b, "p2 (clone of p1): {p2}")?;
    writeln!(b, "p2 degree: {}", p2.degree())?;
    writeln!(b, "p2 coefficient at power 2: {}", p2.coefficient(2))?;

    let mut p3 = Polynomial::new();
    p3.change_coefficient(3.0, 2);
    p3.change_coefficient(2.0, 1);
    writeln!(b, "p3: {p3}")?;

    let mut p4 = &p2 + &p3;
    writeln!(b, "p4 = p2 + p3: {p4}")?;
    p4 = &p2 - &p3;
    writeln!(b, "p4 = p2 - p3: {p4}")?;

    writeln!(b, "p2 == p3: {}", p2 == p3)?;
    writeln!(b, "p2 != p3: {}", p2 != p3)?;

    let mut p5 = Polynomial::new();
    p5 += &p3;
    writeln!(b, "p5 += p3: {p5}")?;
    p5 -= &p2;
    writeln!(b, "p5 -= p2: {p5}")?;
    p5.assign(&p2);
    write!(b, "p5 = p2: {p5}")?;

    info!("demo finished, {} lines.", b.lines().count());

    Ok(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output() {
        let out = run(&Args::default()).unwrap();
        let lines: Vec<_> = out.lines().collect();

        assert_eq!(lines, vec![
            "p1 (default): 0",
            "p1 degree: 0",
            "p1 coefficient at power 2: 0",
            "p1 (after change_coefficient): 5x^2-3",
            "p2 (clone of p1): 5x^2-3",
            "p2 degree: 2",
            "p2 coefficient at power 2: 5",
            "p3: 3x^2+2x",
            "p4 = p2 + p3: 8x^2+2x-3",
            "p4 = p2 - p3: 2x^2-2x-3",
            "p2 == p3: false",
            "p2 != p3: true",
            "p5 += p3: 3x^2+2x",
            "p5 -= p2: -2x^2+2x+3",
            "p5 = p2: 5x^2-3",
        ]);
    }
}
