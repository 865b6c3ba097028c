//! Round clock and best-time record
//!
//! `RoundTimer` belongs to a single session. `Scoreboard` is shared between
//! sessions through an `Arc`; every update happens under its mutex, so the
//! "replace if lower" best-time check is a single critical section.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

/// Elapsed-time clock for one round
#[derive(Debug, Clone)]
pub struct RoundTimer {
    accumulated: Duration,
    running_since: Option<Instant>,
}

impl RoundTimer {
    /// A timer that is already running
    #[must_use]
    pub fn start() -> Self {
        Self {
            accumulated: Duration::ZERO,
            running_since: Some(Instant::now()),
        }
    }

    /// Freeze the elapsed time; no-op if already stopped
    pub fn stop(&mut self) {
        if let Some(since) = self.running_since.take() {
            self.accumulated += since.elapsed();
        }
    }

    /// Continue counting from the frozen value; no-op if running
    pub fn resume(&mut self) {
        if self.running_since.is_none() {
            self.running_since = Some(Instant::now());
        }
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running_since.is_some()
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.accumulated + self.running_since.map_or(Duration::ZERO, |since| since.elapsed())
    }
}

/// Point-in-time copy of the scoreboard
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreSnapshot {
    pub best_time: Option<Duration>,
    pub games_played: usize,
    pub games_won: usize,
    /// Index `n` counts wins in `n` attempts
    pub guess_distribution: Vec<usize>,
}

impl ScoreSnapshot {
    /// Win rate in percent, 0 when nothing has been played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }
}

/// In-memory best time and win statistics for the lifetime of the process
#[derive(Debug, Default)]
pub struct Scoreboard {
    state: Mutex<ScoreSnapshot>,
}

impl Scoreboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a won round; returns true if `elapsed` is a new best time
    pub fn record_win(&self, elapsed: Duration, attempts: usize) -> bool {
        let mut state = self.lock();
        state.games_played += 1;
        state.games_won += 1;

        if state.guess_distribution.len() <= attempts {
            state.guess_distribution.resize(attempts + 1, 0);
        }
        state.guess_distribution[attempts] += 1;

        let new_best = state.best_time.is_none_or(|best| elapsed < best);
        if new_best {
            state.best_time = Some(elapsed);
            tracing::info!(best = %format_clock(elapsed), "new best time");
        }
        new_best
    }

    /// Record a lost or abandoned round
    pub fn record_loss(&self) {
        self.lock().games_played += 1;
    }

    #[must_use]
    pub fn best_time(&self) -> Option<Duration> {
        self.lock().best_time
    }

    #[must_use]
    pub fn snapshot(&self) -> ScoreSnapshot {
        self.lock().clone()
    }

    // Counters stay consistent even if a holder panicked mid-update
    fn lock(&self) -> MutexGuard<'_, ScoreSnapshot> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Format a duration as `MM:SS`
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use wordle_game::game::format_clock;
///
/// assert_eq!(format_clock(Duration::from_secs(83)), "01:23");
/// ```
#[must_use]
pub fn format_clock(duration: Duration) -> String {
    let total = duration.as_secs();
    format!("{:02}:{:02}", total / 60, total % 60)
}
