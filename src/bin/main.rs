use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use env_logger::Builder;

use simplex_lp::algorithm::solver::LpSolver;
use simplex_lp::algorithm::two_phase::phase_one::SlackBasisFinder;
use simplex_lp::algorithm::two_phase::phase_two::{Simplex, SimplexConfig};
use simplex_lp::algorithm::two_phase::strategy::pivot_rule::Bland;
use simplex_lp::algorithm::two_phase::tableau::Tableau;
use simplex_lp::io::import;

/// A linear program solver using the primal simplex method.
#[derive(Parser)]
#[command(version, about)]
struct Opts {
    /// File containing the problem description
    problem_file: PathBuf,
    /// Number of pivots after which solving stops
    #[arg(long, default_value_t = 1000)]
    max_iterations: usize,
    /// Values closer to zero than this are treated as zero
    #[arg(long, default_value_t = 1e-10)]
    epsilon: f64,
    /// Pivot with Bland's rule, which never cycles
    #[arg(long)]
    bland: bool,
    /// Print every tableau the method passed through
    #[arg(long)]
    history: bool,
    /// Print a single tableau, 0 being the initial one
    #[arg(long, value_name = "INDEX")]
    iteration: Option<usize>,
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

fn main() -> Result<()> {
    let opts = Opts::parse();
    Builder::new().filter_level(opts.verbose.log_level_filter()).init();

    let problem = import::<f64>(&opts.problem_file)
        .with_context(|| format!("Reading problem file {:?}", opts.problem_file))?;

    let config = SimplexConfig {
        max_iterations: opts.max_iterations,
        epsilon: opts.epsilon,
        record_history: opts.history || opts.iteration.is_some(),
    };
    let result = if opts.bland {
        LpSolver::new(SlackBasisFinder, Simplex::<f64, Bland>::with_config(config)).solve(&problem)
    } else {
        LpSolver::new(SlackBasisFinder, Simplex::<f64>::with_config(config)).solve(&problem)
    };

    if opts.history {
        if let Some(table) = result.table() {
            for (index, snapshot) in table.get_full_history().iter().enumerate() {
                println!("Iteration {}:\n{}", index, snapshot);
            }
        }
    }
    if let Some(index) = opts.iteration {
        let table = result.table().context("No tableau was built for this problem")?;
        let snapshot = table.display_iteration(index).context("Showing a single iteration")?;
        println!("Iteration {}:\n{}", index, snapshot);
    }

    print!("{}", result);

    Ok(())
}
