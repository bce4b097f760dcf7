use std::{io, thread};

use anyhow::Context;
use tcars::{
    RuleTable, Status, WORLD_SIZE, World,
    chart::{CountFooter, RuleChart},
    engine, rule,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod console;
mod options;
mod prompt;
mod stats;

use stats::Recorder;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let Some(args) = options::Args::from_env()? else {
        return Ok(());
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();

    print!("Welcome to the Totalistic Cellular Automaton!");

    // settings missing from the command line are asked for
    let rule = match args.rule()? {
        Some(rule) => rule,
        None => {
            let message = format!("Enter the rule # (0-{}): ", rule::MAX_RULE);
            let range = 0..=i64::from(rule::MAX_RULE);
            RuleTable::new(prompt::ask(&mut input, &mut stdout, range, &message)?)?
        }
    };
    println!("\n\nThe value array for rule #{} is {}", rule.index(), rule);
    println!("\nThe evolution of all possible states are as follows:");
    println!("{}", RuleChart(&rule));

    let generations = match args.generations()? {
        Some(n) => n,
        None => {
            let message = "Enter the number of generations (1-49): ";
            prompt::ask(&mut input, &mut stdout, options::GENERATIONS, message)? as usize
        }
    };
    let seed = match args.seed()? {
        Some(seed) => seed,
        None => {
            let message = "Enter the value (1 or 2) for the initial active cell: ";
            Status::try_from(prompt::ask(&mut input, &mut stdout, options::SEED_VALUES, message)?)?
        }
    };
    let sleep = args.sleep()?;

    println!("\n\nInitializing world & evolving...");
    let mut world = World::new(seed);
    let mut render = console::ConsoleRender::new(io::stdout(), args.console());
    render.render(&world, world.status_sum()).context("render generation 0")?;

    let stats_file = args.stats_file();
    let mut stats = stats::SwitchRecorder::new(world.status_sum(), stats_file.is_some());

    // the first generation is the seeded world itself
    let mut gens = engine::run(&mut world, &rule, generations - 1).parallel(args.multithreading());
    while let Some(status_sum) = gens.next() {
        if let Some(time) = sleep {
            thread::sleep(time);
        }
        render.render(gens.world(), status_sum).context("render generation")?;
        stats.record(status_sum);
    }

    println!("{}", "_".repeat(WORLD_SIZE));
    println!("{}", CountFooter(&world));
    info!(rule = rule.index(), generations, "{}", stats.report());

    if let Some(file_name) = stats_file {
        stats
            .save(&file_name)
            .with_context(|| format!("write stats to {}", file_name))?;
    }

    Ok(())
}
