//! Synthetic stall on the version delete path.
//!
//! A [`StallPolicy`] decides per request whether to stall. A stalled request
//! only waits for its own deadline; nothing else can end it early.

use std::fmt::Debug;
use std::time::Duration;

use rand::Rng;

pub trait StallPolicy: Send + Sync + Debug {
    fn should_stall(&self) -> bool;
}

/// Stalls with a fixed probability drawn from the thread-local RNG.
#[derive(Debug, Clone, Copy)]
pub struct RandomStall {
    probability: f64,
}

impl RandomStall {
    /// `probability` is clamped to `[0, 1]`.
    pub fn new(probability: f64) -> Self {
        let probability = if probability.is_nan() { 0.0 } else { probability.clamp(0.0, 1.0) };
        Self { probability }
    }

    pub fn probability(&self) -> f64 { self.probability }
}

impl StallPolicy for RandomStall {
    fn should_stall(&self) -> bool {
        rand::thread_rng().gen_bool(self.probability)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NeverStall;

impl StallPolicy for NeverStall {
    fn should_stall(&self) -> bool { false }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysStall;

impl StallPolicy for AlwaysStall {
    fn should_stall(&self) -> bool { true }
}

/// Block until `deadline` elapses.
///
/// ```
/// use std::time::Duration;
/// let started = std::time::Instant::now();
/// tokio_test::block_on(service::stall::wait_for_deadline(Duration::from_millis(20)));
/// assert!(started.elapsed() >= Duration::from_millis(20));
/// ```
pub async fn wait_for_deadline(deadline: Duration) {
    let _ = tokio::time::timeout(deadline, std::future::pending::<()>()).await;
}
