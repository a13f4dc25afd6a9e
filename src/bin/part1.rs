use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use conway_cubes::{CLIArgs, CubeSpaceSimulator};

fn main() -> Result<()> {
    env_logger::init();

    let args = CLIArgs::parse();
    let symbols = args.symbols().context("Invalid symbols of cube state.")?;
    let init_state = match &args.input_path {
        Some(path) => conway_cubes::read_state(path, &symbols).with_context(|| {
            format!(
                "Failed to read initial states from given input file({}).",
                path.display()
            )
        })?,
        None => conway_cubes::read_state_from(io::stdin().lock(), &symbols)
            .context("Failed to read initial states from standard input.")?,
    };
    log::debug!(
        "Read initial layer of {} row(s) and {} column(s).",
        init_state.row_n(),
        init_state.col_n()
    );

    let mut simulator = CubeSpaceSimulator::new(&init_state);
    simulator.run(args.cycles);

    if args.dump {
        print!("{}", simulator.grid().dump(&symbols));
    }

    log::info!(
        "Finished {} cycle(s) within bounds {}.",
        simulator.cycle_n(),
        simulator.grid().bounds()
    );
    println!(
        "After {} cycle(s), the whole space has {} active cubes.",
        simulator.cycle_n(),
        simulator.active_n()
    );

    Ok(())
}
