//! Fibonacci through an accumulator-carrying tail call.
//!
//! Rust does not promise tail-call elimination, so the recursion is offered in
//! two forms: [`fibonacci`] is the tail call rewritten as a loop, and
//! [`fibonacci_recursive`] is the literal self-recursive version guarded by a
//! frame budget that stands in for a finite call stack.

use crate::core::Lesson;
use crate::utils::error::{Result, TourError};
use num_bigint::BigUint;
use num_traits::{One, Zero};
use std::io::Write;

pub const DEFAULT_FRAME_BUDGET: usize = 1_000;

/// Largest frame budget a config may ask for; stays well inside a 2 MB thread stack.
pub const MAX_FRAME_BUDGET: usize = 2_000;

/// Largest `n` a config may ask for.
pub const MAX_N: u32 = 50_000;

/// Tracks how deep the literal recursion has gone.
#[derive(Debug, Clone)]
pub struct StackBudget {
    limit: usize,
    depth: usize,
}

impl StackBudget {
    /// Budgets above [`MAX_FRAME_BUDGET`] are clamped to it.
    pub fn new(limit: usize) -> Self {
        Self {
            limit: limit.min(MAX_FRAME_BUDGET),
            depth: 0,
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    fn enter(&mut self, requested: u32) -> Result<()> {
        if self.depth >= self.limit {
            return Err(TourError::StackExhausted {
                depth: self.depth,
                requested,
            });
        }
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }
}

impl Default for StackBudget {
    fn default() -> Self {
        Self::new(DEFAULT_FRAME_BUDGET)
    }
}

pub fn fibonacci(mut n: u32, mut current: BigUint, mut previous: BigUint) -> BigUint {
    while n > 0 {
        let next = &current + &previous;
        previous = std::mem::replace(&mut current, next);
        n -= 1;
    }
    previous
}

pub fn fibonacci_recursive(
    n: u32,
    current: BigUint,
    previous: BigUint,
    budget: &mut StackBudget,
) -> Result<BigUint> {
    fn step(
        n: u32,
        current: BigUint,
        previous: BigUint,
        requested: u32,
        budget: &mut StackBudget,
    ) -> Result<BigUint> {
        if n == 0 {
            return Ok(previous);
        }
        budget.enter(requested)?;
        let next = &current + &previous;
        let result = step(n - 1, next, current, requested, budget);
        budget.leave();
        result
    }

    step(n, current, previous, n, budget)
}

pub struct RecursionLesson {
    n: u32,
    frame_budget: usize,
}

impl RecursionLesson {
    pub fn new(n: u32, frame_budget: usize) -> Self {
        Self { n, frame_budget }
    }
}

impl Lesson for RecursionLesson {
    fn name(&self) -> &'static str {
        "recursion"
    }

    fn summary(&self) -> &'static str {
        "Tail recursion with big integers"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let value = fibonacci(self.n, BigUint::one(), BigUint::zero());
        writeln!(out, "{}", value)?;

        let mut budget = StackBudget::new(self.frame_budget);
        match fibonacci_recursive(self.n, BigUint::one(), BigUint::zero(), &mut budget) {
            Ok(value) => writeln!(out, "{}", value)?,
            Err(e @ TourError::StackExhausted { .. }) => {
                tracing::warn!("literal recursion gave up: {}", e);
                writeln!(out, "{}", e)?;
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }
}
