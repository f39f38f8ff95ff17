//! Seeded random inputs for stress runs and benchmarks.
//!
//! Same seed, same text: callers can replay a failing input from its seed
//! alone.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::teque::Command;

/// Shape of a random teque command stream.
#[derive(Clone, Copy, Debug)]
pub struct TequeGenCfg {
    pub commands: usize,
    /// Probability that a command is a `get` (once the sequence is non-empty).
    /// Clamped to `[0, 1]`; NaN means no gets.
    pub get_ratio: f64,
    /// Operands are drawn from `-max_value..=max_value`.
    pub max_value: i64,
    pub seed: u64,
}

impl Default for TequeGenCfg {
    fn default() -> Self {
        Self {
            commands: 1000,
            get_ratio: 0.3,
            max_value: 1_000_000_000,
            seed: 0,
        }
    }
}

/// Random commands whose `get` indices are always in range.
pub fn teque_commands(cfg: &TequeGenCfg) -> Vec<Command> {
    let mut rng = StdRng::seed_from_u64(cfg.seed);
    let get_ratio = if cfg.get_ratio.is_nan() {
        0.0
    } else {
        cfg.get_ratio.clamp(0.0, 1.0)
    };
    let max = cfg.max_value.saturating_abs();
    let mut len = 0usize;
    let mut out = Vec::with_capacity(cfg.commands);
    for _ in 0..cfg.commands {
        if len > 0 && rng.gen_bool(get_ratio) {
            out.push(Command::Get(rng.gen_range(0..len)));
            continue;
        }
        let x = rng.gen_range(-max..=max);
        let cmd = match rng.gen_range(0..3) {
            0 => Command::PushBack(x),
            1 => Command::PushFront(x),
            _ => Command::PushMiddle(x),
        };
        out.push(cmd);
        len += 1;
    }
    out
}

/// Full teque problem input text for `cfg`.
pub fn teque_input(cfg: &TequeGenCfg) -> String {
    let cmds = teque_commands(cfg);
    let mut text = format!("{}\n", cmds.len());
    for c in &cmds {
        text.push_str(&c.to_string());
        text.push('\n');
    }
    text
}
