use super::{step, step_parallel};
use crate::{RuleTable, World};
use std::iter::FusedIterator;

/// A finite run of generations over a borrowed [`World`]
///
/// Each call to `next` evolves the world once and yields the new status sum.
/// The world is changed in place, so a run cannot be rewound; seed a fresh
/// world to start over.
pub struct Generations<'a> {
    world: &'a mut World,
    rule: &'a RuleTable,
    remaining: usize,
    parallel: bool,
}

impl<'a> Generations<'a> {
    pub fn new(world: &'a mut World, rule: &'a RuleTable, generations: usize) -> Self {
        Self {
            world,
            rule,
            remaining: generations,
            parallel: false,
        }
    }

    /// Evolve with [`step_parallel`] instead of [`step`]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// The world as left by the last generation yielded
    #[inline]
    pub fn world(&self) -> &World {
        &*self.world
    }
}

impl Iterator for Generations<'_> {
    type Item = u32;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        Some(if self.parallel {
            step_parallel(self.world, self.rule)
        } else {
            step(self.world, self.rule)
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Generations<'_> {}
impl FusedIterator for Generations<'_> {}
