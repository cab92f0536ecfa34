//! State of one interactive exploration.
//!
//! A [`Session`] holds the current bound, the progress of the computation in
//! flight, and the latest finished [`Analysis`]. `calculate` takes
//! `&mut self`, so one session can never run two computations at once;
//! hosts that share a session across tasks put it behind a lock.

use tracing::warn;

use crate::analysis::Analysis;
use crate::bound::Bound;
use crate::error::Result;
use crate::notify::{Notifier, LARGE_BOUND_THRESHOLD};
use crate::scheduler::Scheduler;

/// Bound used by a fresh session.
pub const DEFAULT_BOUND: u64 = 1_000;

/// Explicit state of one exploration session.
#[derive(Debug, Clone)]
pub struct Session {
    bound: Bound,
    progress: u8,
    large_bound_threshold: u64,
    scheduler: Scheduler,
    analysis: Option<Analysis>,
}

impl Session {
    /// A session starting at `bound` with no result yet.
    pub fn new(bound: Bound) -> Self {
        Self {
            bound,
            progress: 0,
            large_bound_threshold: LARGE_BOUND_THRESHOLD,
            scheduler: Scheduler::new(),
            analysis: None,
        }
    }

    /// Overrides the threshold for the large-bound notice.
    pub fn with_large_bound_threshold(mut self, threshold: u64) -> Self {
        self.large_bound_threshold = threshold;
        self
    }

    /// Overrides the scheduler (e.g. its chunk size).
    pub fn with_scheduler(mut self, scheduler: Scheduler) -> Self {
        self.scheduler = scheduler;
        self
    }

    /// Bound of the latest calculation request.
    #[inline]
    pub fn bound(&self) -> Bound {
        self.bound
    }

    /// Progress of the latest calculation.
    #[inline]
    pub fn progress(&self) -> u8 {
        self.progress
    }

    /// Latest finished analysis, if any.
    #[inline]
    pub fn analysis(&self) -> Option<&Analysis> {
        self.analysis.as_ref()
    }

    /// Computes the primes up to `bound` and replaces the stored analysis.
    ///
    /// Progress restarts at 0 and every chunk is forwarded to `notifier`.
    /// On failure the previous analysis is kept and nothing partial is stored.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ResourceExhausted`] if the scan cannot complete.
    pub async fn calculate<N>(&mut self, bound: Bound, mut notifier: N) -> Result<&Analysis>
    where
        N: Notifier,
    {
        self.bound = bound;
        self.progress = 0;

        if bound.get() > self.large_bound_threshold {
            notifier.large_bound(bound);
        }

        let progress = &mut self.progress;
        let run = self
            .scheduler
            .run(bound.get(), |percent| {
                *progress = percent;
                notifier.progress(percent);
            })
            .await;

        match run {
            Ok(primes) => {
                let analysis = Analysis::new(bound, primes);
                notifier.completed(&analysis.stats);
                Ok(self.analysis.insert(analysis))
            }
            Err(error) => {
                warn!(%bound, %error, "calculation failed");
                notifier.failed(&error);
                Err(error)
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Bound(DEFAULT_BOUND))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::stats::Stats;

    #[derive(Default)]
    struct Recorder {
        large: Vec<Bound>,
        progress: Vec<u8>,
        completed: Vec<Stats>,
        failed: Vec<Error>,
    }

    impl Notifier for Recorder {
        fn large_bound(&mut self, bound: Bound) {
            self.large.push(bound);
        }

        fn progress(&mut self, percent: u8) {
            self.progress.push(percent);
        }

        fn completed(&mut self, stats: &Stats) {
            self.completed.push(*stats);
        }

        fn failed(&mut self, error: &Error) {
            self.failed.push(error.clone());
        }
    }

    #[tokio::test]
    async fn calculate_stores_analysis_and_notifies() {
        let mut session = Session::default();
        let mut recorder = Recorder::default();
        let bound = Bound::new(5).unwrap();

        let analysis = session.calculate(bound, &mut recorder).await.unwrap();
        assert_eq!(analysis.stats.count, 3);

        assert_eq!(session.progress(), 100);
        assert_eq!(session.bound(), bound);
        assert!(recorder.large.is_empty());
        assert_eq!(recorder.progress, [100]);
        assert_eq!(recorder.completed.len(), 1);
        assert_eq!(recorder.completed[0].max_distance, 2);
        assert!(recorder.failed.is_empty());
    }

    #[tokio::test]
    async fn large_bound_notice() {
        let mut session = Session::default().with_large_bound_threshold(1_000);
        let mut recorder = Recorder::default();

        session
            .calculate(Bound::new(1_000).unwrap(), &mut recorder)
            .await
            .unwrap();
        assert!(recorder.large.is_empty());

        session
            .calculate(Bound::new(1_001).unwrap(), &mut recorder)
            .await
            .unwrap();
        assert_eq!(recorder.large, [Bound::new(1_001).unwrap()]);
    }

    #[tokio::test]
    async fn new_calculation_replaces_previous() {
        let mut session = Session::default();
        session
            .calculate(Bound::new(100).unwrap(), crate::NullNotifier)
            .await
            .unwrap();
        assert_eq!(session.analysis().map(|a| a.stats.count), Some(25));

        session
            .calculate(Bound::new(10).unwrap(), crate::NullNotifier)
            .await
            .unwrap();
        let analysis = session.analysis().unwrap();
        assert_eq!(analysis.stats.count, 4);
        assert_eq!(analysis.bound.get(), 10);
    }

    #[tokio::test]
    async fn progress_resets_per_run() {
        let mut session = Session::default().with_scheduler(Scheduler::new().chunk_size(10));
        let mut recorder = Recorder::default();
        session
            .calculate(Bound::new(50).unwrap(), &mut recorder)
            .await
            .unwrap();
        let first_run = recorder.progress.len();
        assert_eq!(recorder.progress.last(), Some(&100));

        session
            .calculate(Bound::new(50).unwrap(), &mut recorder)
            .await
            .unwrap();
        // the second run starts low again rather than at 100
        assert!(recorder.progress[first_run] < 100);
    }

    #[test]
    fn fresh_session_has_no_result() {
        let session = Session::default();
        assert!(session.analysis().is_none());
        assert_eq!(session.progress(), 0);
        assert_eq!(session.bound().get(), DEFAULT_BOUND);
    }
}
