use std::{
    fmt::Display,
    time::{Duration, Instant},
};

use tracing::info;

pub struct Stopwatch {
    start: Instant,
    name: &'static str,
    elapsed_duration: Duration,
}

impl Stopwatch {
    pub fn new(name: &'static str) -> Self {
        Self {
            start: Instant::now(),
            elapsed_duration: Duration::ZERO,
            name,
        }
    }

    pub fn start(&mut self) {
        self.start = Instant::now();
    }

    pub fn stop(&mut self) {
        self.elapsed_duration += self.start.elapsed();
    }

    pub fn total_duration(&self) -> Duration {
        self.elapsed_duration
    }

    pub fn report(&self) {
        info!("{}", self);
    }
}

impl Display for Stopwatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]: {:?}", self.name, self.elapsed_duration)
    }
}

/// Runs `$block` with `$sw` started, stops it and evaluates to the block's
/// value.
macro_rules! timed {
    ($sw:expr, $block:block) => {{
        $sw.start();
        let value = $block;
        $sw.stop();
        value
    }};
}

pub(crate) use timed;
