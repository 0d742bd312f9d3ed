//! Extrapolating a deterministic register machine across its cycle.
//!
//! Run with: cargo run --example cycle_skip
//!
//! A tiny machine applies a fixed program of operations to a 16-bit
//! register once per step, wrapping on overflow. With at most 65536
//! distinct register values the trajectory must eventually repeat, so the
//! detector can answer a trillion-step question after simulating only up
//! to the first recurrence.

use anyhow::ensure;
use state_search::{Automaton, CycleDetector};
use tracing::{Level, info};

/// One machine operation on the 16-bit register.
#[derive(Debug, Clone, Copy)]
enum Op {
    Add(u16),
    Mul(u16),
    And(u16),
    Or(u16),
    ShiftL(u32),
    ShiftR(u32),
    Not,
}

impl Op {
    /// Applies the operation, wrapping on overflow.
    fn apply(self, register: u16) -> u16 {
        match self {
            Op::Add(n) => register.wrapping_add(n),
            Op::Mul(n) => register.wrapping_mul(n),
            Op::And(mask) => register & mask,
            Op::Or(mask) => register | mask,
            Op::ShiftL(bits) => register.wrapping_shl(bits),
            Op::ShiftR(bits) => register.wrapping_shr(bits),
            Op::Not => !register,
        }
    }
}

/// Runs a fixed program over the register, one full pass per step.
struct Machine {
    program: Vec<Op>,
}

impl Automaton for Machine {
    type State = u16;

    fn step(&self, register: &u16) -> u16 {
        self.program.iter().fold(*register, |acc, op| op.apply(acc))
    }
}

const TARGET: u64 = 1_000_000_000_000;
const SPOT_CHECK: u64 = 12_345;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    // Multiplier 1 mod 4, odd increment: a full-period generator that
    // walks all 65536 register values before repeating
    let scrambler = Machine {
        program: vec![Op::Mul(25173), Op::Add(13849)],
    };

    // Masks and shifts discard bits, so this one falls into a small
    // attractor after a lead-in
    let cruncher = Machine {
        program: vec![
            Op::Mul(31),
            Op::ShiftL(3),
            Op::Or(0x0005),
            Op::Add(0x9e37),
            Op::And(0x3fff),
            Op::Not,
            Op::ShiftR(2),
        ],
    };

    for (name, machine) in [("scrambler", &scrambler), ("cruncher", &cruncher)] {
        let detector = CycleDetector::new(machine);
        let report = detector.run(&1, TARGET)?;
        let outcome = &report.answer;

        match outcome.cycle {
            Some(cycle) => info!(
                name,
                offset = cycle.offset,
                period = cycle.period,
                simulated = outcome.steps_simulated,
                skipped = TARGET - outcome.steps_simulated,
                "recurrence found"
            ),
            None => info!(
                name,
                simulated = outcome.steps_simulated,
                "target reached before any repeat"
            ),
        }
        info!(
            name,
            register = outcome.state,
            target = TARGET,
            millis = report.duration().num_milliseconds(),
            "extrapolated"
        );

        // A small target must match stepping the machine directly
        let mut register = 1u16;
        for _ in 0..SPOT_CHECK {
            register = machine.step(&register);
        }
        let extrapolated = detector.run(&1, SPOT_CHECK)?.answer.state;
        ensure!(
            extrapolated == register,
            "{name}: extrapolation diverged from direct simulation"
        );
        info!(name, target = SPOT_CHECK, register, "spot check passed");
    }

    Ok(())
}
