//! Async behaviour of the incremental computation.

use std::cell::RefCell;
use std::rc::Rc;

use primegap::{compute_primes_sync, run_prime_computation, Scheduler};

#[tokio::test]
async fn fully_drained_run_matches_sync() {
    for max in [0, 1, 2, 5, 20, 1_000, 1_001, 12_345, 50_000] {
        let seq = run_prime_computation(max, |_| {}).await.unwrap();
        assert_eq!(seq, compute_primes_sync(max), "max = {max}");
    }
}

#[tokio::test]
async fn one_progress_report_per_chunk() {
    let mut seen = Vec::new();
    run_prime_computation(10_000, |p| seen.push(p)).await.unwrap();
    // 2..=10_000 in chunks of 1000
    assert_eq!(seen.len(), 10);
    assert_eq!(seen.first(), Some(&10));
    assert_eq!(seen.last(), Some(&100));
}

/// Between two chunks the run suspends, so another task on the same
/// single-threaded runtime gets to run before the scan finishes.
#[tokio::test(flavor = "current_thread")]
async fn yields_between_chunks() {
    let log: Rc<RefCell<Vec<&'static str>>> = Rc::default();

    let local = tokio::task::LocalSet::new();
    let ticker_log = Rc::clone(&log);
    let scan_log = Rc::clone(&log);

    local
        .run_until(async move {
            let ticker = tokio::task::spawn_local(async move {
                ticker_log.borrow_mut().push("tick");
            });
            let scan = Scheduler::new().chunk_size(100).run(5_000, |p| {
                if p == 100 {
                    scan_log.borrow_mut().push("done");
                }
            });
            scan.await.unwrap();
            ticker.await.unwrap();
        })
        .await;

    assert_eq!(*log.borrow(), ["tick", "done"]);
}

#[tokio::test]
async fn dropped_run_leaves_no_state_behind() {
    let scheduler = Scheduler::new().chunk_size(10);
    {
        let abandoned = scheduler.run(100_000, |_| {});
        drop(abandoned);
    }
    let seq = scheduler.run(30, |_| {}).await.unwrap();
    assert_eq!(seq, compute_primes_sync(30));
}

#[tokio::test]
async fn concurrent_runs_own_independent_state() {
    let a = tokio::spawn(async { run_prime_computation(20_000, |_| {}).await });
    let b = tokio::spawn(async { run_prime_computation(7_000, |_| {}).await });
    let (a, b) = (a.await.unwrap().unwrap(), b.await.unwrap().unwrap());
    assert_eq!(a, compute_primes_sync(20_000));
    assert_eq!(b, compute_primes_sync(7_000));
}
