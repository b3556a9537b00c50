// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! `ballast` — split a track listing across sides of similar play time.
//!
//! Reads a `DURATION TITLE` listing, balances it under either a capacity
//! or a side-count constraint, and prints the recommended sides as text or
//! CSV.

mod args;
mod render;

use anyhow::{bail, Context};
use args::Args;
use ballast_engine::target::Constraint;
use ballast_model::{loading::CatalogLoader, time::format_hms};
use ballast_solver::solver::SolverBuilder;
use clap::Parser;
use render::{render_layout, RenderOptions};
use std::io::Write;
use std::time::Duration;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    run(&args)
}

fn run(args: &Args) -> anyhow::Result<()> {
    let catalog = CatalogLoader::new()
        .sort_longest_first(args.shuffle)
        .from_path::<u64>(&args.input)
        .with_context(|| format!("could not load track listing {}", args.input.display()))?;

    if catalog.is_empty() {
        bail!("track listing {} holds no tracks", args.input.display());
    }

    let constraint = match (args.duration, args.boxes) {
        (Some(duration), None) => Constraint::MaxCapacity(duration),
        (None, Some(count)) => Constraint::SideCount(count),
        // clap enforces exactly one of the two.
        _ => unreachable!("argument parsing allows exactly one sizing constraint"),
    };

    if args.even && args.boxes.is_some() {
        warn!("side count given explicitly, even flag is ignored");
    }

    let solver = SolverBuilder::new(constraint)
        .with_strategy(args.strategy())
        .with_even(args.even)
        .with_timeout(Duration::from_secs(args.timeout))
        .build();

    let target = solver.target_for(&catalog);
    debug!(
        total = %format_hms(catalog.total()),
        longest = %format_hms(catalog.longest()),
        track_deviation = catalog.deviation(),
        capacity = %format_hms(target.capacity()),
        optimum = target.optimum(),
        length = %format_hms(target.length()),
        strategy = %solver.strategy(),
        "resolved balancing target"
    );

    let outcome = solver.solve(&catalog);
    debug!(
        reason = %outcome.reason(),
        steps = outcome.statistics().steps,
        solutions = outcome.statistics().solutions_found,
        seconds = outcome.statistics().solve_duration.as_secs_f64(),
        "search finished"
    );

    let Some(layout) = outcome.layout() else {
        bail!(
            "no complete layout found within the time limit; \
             try a longer timeout or a larger side duration"
        );
    };
    debug!(deviation = layout.deviation(), "best layout deviation");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if !args.csv {
        writeln!(out, "\nThe recommended sides are")?;
    }
    render_layout(
        &mut out,
        &catalog,
        layout,
        &RenderOptions {
            plain: args.plain,
            csv: args.csv,
            delimiter: args.delimiter,
        },
    )?;

    Ok(())
}
