//! Per-phase timing, passed into the pipeline as an observer.

use std::fmt;
use std::time::{Duration, Instant};

use log::info;

/// Pipeline phases, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Load,
    BuildEdges,
    SortEdges,
    Contract,
    Materialize,
    Emit,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Load => "load points",
            Phase::BuildEdges => "build edges",
            Phase::SortEdges => "sort edges",
            Phase::Contract => "contract",
            Phase::Materialize => "materialize groups",
            Phase::Emit => "write output",
        };
        f.pad(name)
    }
}

pub trait PhaseObserver {
    fn phase_finished(&mut self, phase: Phase, elapsed: Duration);
}

/// Observer that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl PhaseObserver for NoopObserver {
    fn phase_finished(&mut self, _phase: Phase, _elapsed: Duration) {}
}

/// Collects the duration of every finished phase.
#[derive(Debug, Default, Clone)]
pub struct PhaseTimings {
    entries: Vec<(Phase, Duration)>,
}

impl PhaseTimings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[(Phase, Duration)] {
        &self.entries
    }

    pub fn get(&self, phase: Phase) -> Option<Duration> {
        self.entries
            .iter()
            .find(|(p, _)| *p == phase)
            .map(|(_, d)| *d)
    }

    pub fn total(&self) -> Duration {
        self.entries.iter().map(|(_, d)| *d).sum()
    }

    /// One line per phase plus a total, seconds with microsecond precision.
    pub fn report(&self) -> String {
        let mut out = String::new();
        for (phase, elapsed) in &self.entries {
            out.push_str(&format!("{phase:<20} {:.6}s\n", elapsed.as_secs_f64()));
        }
        out.push_str(&format!("{:<20} {:.6}s\n", "total", self.total().as_secs_f64()));
        out
    }
}

impl PhaseObserver for PhaseTimings {
    fn phase_finished(&mut self, phase: Phase, elapsed: Duration) {
        info!("{phase}: {:.6}s", elapsed.as_secs_f64());
        self.entries.push((phase, elapsed));
    }
}

/// Run `f`, reporting its wall time to `observer` as `phase`.
pub fn timed<T, O>(observer: &mut O, phase: Phase, f: impl FnOnce() -> T) -> T
where
    O: PhaseObserver + ?Sized,
{
    let start = Instant::now();
    let out = f();
    observer.phase_finished(phase, start.elapsed());
    out
}
