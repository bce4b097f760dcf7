//! Plain-text charts of rules and worlds.

use crate::{RuleTable, World};
use std::fmt::{self, Display, Formatter, Write};

/// A world's statuses as one line of glyphs, followed by its status sum
pub struct GenerationRow<'a> {
    world: &'a World,
    status_sum: u32,
}
impl<'a> GenerationRow<'a> {
    pub fn new(world: &'a World, status_sum: u32) -> Self {
        Self { world, status_sum }
    }
}
impl Display for GenerationRow<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for status in self.world.statuses() {
            f.write_char(status.glyph())?;
        }
        write!(f, " {} ", self.status_sum)
    }
}

/// Every neighborhood arrangement grouped by local sum, with the status the
/// rule assigns to each sum
pub struct RuleChart<'a>(pub &'a RuleTable);

impl RuleChart<'_> {
    const HEADER: [&'static str; 8] = [
        "Local Sum:   6       5       4       3       2       1       0      ",
        "States:    |+++|   |++-|   |++ |   |+- |   |-- |   |-  |   |   |    ",
        "                   |+-+|   |+ +|   |+ -|   |- -|   | - |            ",
        "                   |-++|   | ++|   |-+ |   | --|   |  -|            ",
        "                           |+--|   | +-|   |+  |                    ",
        "                           |-+-|   |- +|   | + |                    ",
        "                           |--+|   | -+|   |  +|                    ",
        "                                   |---|                            ",
    ];
}
impl Display for RuleChart<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for line in Self::HEADER {
            writeln!(f, "{}", line)?;
        }
        f.write_str("New Status: ")?;
        for digit in self.0.digits().iter().rev() {
            write!(f, "|{}|     ", digit.glyph())?;
        }
        Ok(())
    }
}

/// Lifetime counts written under each cell's column, two rows high
///
/// The first row holds the tens digit and the second the units digit. Cells
/// that never held a non-zero status are left blank on both rows.
pub struct CountFooter<'a>(pub &'a World);

impl Display for CountFooter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut units = String::with_capacity(self.0.len());
        for count in self.0.counts() {
            let (tens, unit) = match count {
                0 => (' ', ' '),
                1..=9 => (' ', digit(count)),
                _ => (digit(count / 10), digit(count)),
            };
            f.write_char(tens)?;
            units.push(unit);
        }
        write!(f, "\n{}", units)
    }
}

fn digit(n: u32) -> char {
    char::from_digit(n % 10, 10).unwrap_or('?')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Status, engine};

    #[test]
    fn row_has_glyphs_and_sum() {
        let rule = RuleTable::new(2186).unwrap();
        let mut world = World::with_size(7, Status::One);
        assert_eq!(GenerationRow::new(&world, 1).to_string(), "   -    1 ");

        let sum = engine::step(&mut world, &rule);
        assert_eq!(GenerationRow::new(&world, sum).to_string(), "+++++++ 14 ");
    }

    #[test]
    fn rule_chart_ends_with_new_statuses() {
        let rule = RuleTable::new(777).unwrap();
        let chart = RuleChart(&rule).to_string();
        let last = chart.lines().last().unwrap();

        assert_eq!(chart.lines().count(), 9);
        assert_eq!(
            last,
            "New Status: |-|     | |     | |     |-|     |+|     |-|     | |     "
        );
    }

    #[test]
    fn footer_splits_digits() {
        let rule = RuleTable::new(2186).unwrap();
        let mut world = World::with_size(3, Status::One);
        for _ in 0..6 {
            engine::step(&mut world, &rule);
        }
        // [12, 13, 12]
        assert_eq!(CountFooter(&world).to_string(), "111\n232");
    }

    #[test]
    fn footer_blanks_zero_counts() {
        let world = World::with_size(5, Status::Two);

        assert_eq!(CountFooter(&world).to_string(), "     \n  2  ");
    }
}
