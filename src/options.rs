use std::{ops::RangeInclusive, time::Duration};

use anyhow::{Context, bail};
use tcars::{RuleTable, Status};

/// The generation counts accepted, generation 0 included
pub const GENERATIONS: RangeInclusive<i64> = 1..=49;
/// The values the seed cell can start with
pub const SEED_VALUES: RangeInclusive<i64> = 1..=2;

pub struct Args {
    matches: getopts::Matches,
}

impl Args {
    fn new<T: AsRef<str>>(args: &[T]) -> Result<Option<Self>, getopts::Fail> {
        let mut opts = getopts::Options::new();
        opts.optflag("", "help", "print this help menu");
        opts.optflag("c", "console", "colour the chart for the terminal");
        opts.optflag("t", "threads", "enables multi-threading");
        opts.optopt(
            "r",
            "rule",
            "rule number (0-2186), ternary literal like 0t1001210, or `random`",
            "RULE",
        );
        opts.optopt("g", "gens", "number of generations, including the first (1-49)", "COUNT");
        opts.optopt("v", "value", "value of the initial active cell (1 or 2)", "VALUE");
        opts.optopt(
            "s",
            "sleep",
            "the amount of time to sleep between generations",
            "MILLIS",
        );
        opts.optopt("", "stats", "write stats csv to file", "FILE");

        let matches = opts.parse(args.iter().map(T::as_ref))?;
        if matches.opt_present("help") {
            println!("{}", opts.usage("usage: tcars [options]"));
            Ok(None)
        } else {
            Ok(Some(Self { matches }))
        }
    }
    pub fn from_env() -> Result<Option<Self>, getopts::Fail> {
        let env = std::env::args().collect::<Vec<_>>();
        Self::new(&env[1..])
    }

    pub fn console(&self) -> bool {
        self.matches.opt_present("console")
    }
    pub fn multithreading(&self) -> bool {
        self.matches.opt_present("threads")
    }

    /// The rule given on the command line, if any
    pub fn rule(&self) -> anyhow::Result<Option<RuleTable>> {
        let Some(rule) = self.matches.opt_str("rule") else {
            return Ok(None);
        };
        if rule.eq_ignore_ascii_case("random") {
            return Ok(Some(RuleTable::random(&mut rand::rng())));
        }
        Ok(Some(rule.parse()?))
    }

    pub fn generations(&self) -> anyhow::Result<Option<usize>> {
        let gens: Option<i64> = self.matches.opt_get("gens").context("invalid --gens")?;
        match gens {
            Some(n) if !GENERATIONS.contains(&n) => {
                bail!("generation count {} is outside 1-49", n)
            }
            Some(n) => Ok(Some(n as usize)),
            None => Ok(None),
        }
    }

    pub fn seed(&self) -> anyhow::Result<Option<Status>> {
        let value: Option<i64> = self.matches.opt_get("value").context("invalid --value")?;
        match value {
            Some(n) if !SEED_VALUES.contains(&n) => bail!("initial value {} is not 1 or 2", n),
            Some(n) => Ok(Some(Status::try_from(n)?)),
            None => Ok(None),
        }
    }

    pub fn sleep(&self) -> anyhow::Result<Option<Duration>> {
        let millis: Option<u64> = self.matches.opt_get("sleep").context("invalid --sleep")?;
        Ok(match millis {
            Some(millis) => Some(Duration::from_millis(millis)),
            None if self.console() => Some(Duration::from_millis(100)),
            None => None,
        })
    }

    pub fn stats_file(&self) -> Option<String> {
        self.matches.opt_str("stats")
    }
}
