use anyhow::{Context, Result};
use clap::Parser;
use report_repair::{Arity, CliArgs, SortedKSumSolver};

fn main() -> Result<()> {
    let args = CliArgs::parse();
    let ints = report_repair::read_ints(&args.input_path).with_context(|| {
        format!(
            "Failed to read integers from given input file({}).",
            args.input_path.display()
        )
    })?;
    let solver = SortedKSumSolver::new(ints, Arity::Pair).with_context(|| {
        format!(
            "Can't search two numbers whose sum is {} in given input file({}).",
            args.target,
            args.input_path.display()
        )
    })?;

    let result = solver.find_pair(args.target);
    if result.is_found() {
        println!("{}", result);
    } else {
        eprintln!("{}", result);
    }

    Ok(())
}
