//! Deferred delivery: the completion handler runs once, after the scheduling
//! call returned, with the synchronous result.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use std::time::Duration;

use osadist::deferred::{
    ReadyQueue, Scheduler, Task, TokioScheduler, distance_async, schedule_str_distance,
};
use osadist::distance::{DistanceConfig, DistanceEngine, SubstitutionMode, WeightOverrides};
use osadist::error::Result;

/// Delegates to a Tokio scheduler, then lingers before marking the
/// submission as returned.
struct SlowReturn {
    inner: TokioScheduler,
    returned: Arc<AtomicBool>,
}

impl Scheduler for SlowReturn {
    fn submit(&self, task: Task) -> Result<()> {
        self.inner.submit(task)?;
        std::thread::sleep(Duration::from_millis(1));
        self.returned.store(true, Ordering::SeqCst);
        Ok(())
    }
}

#[test]
fn test_handler_runs_after_caller_returns() {
    let queue = ReadyQueue::new();
    let engine = DistanceEngine::<u32>::default();
    let returned = Arc::new(AtomicBool::new(false));
    let observed_after_return = Arc::new(AtomicBool::new(false));
    let calls = Arc::new(AtomicUsize::new(0));

    {
        let returned = Arc::clone(&returned);
        let observed = Arc::clone(&observed_after_return);
        let calls = Arc::clone(&calls);
        schedule_str_distance(
            &queue,
            &engine,
            "ab".to_string(),
            "ba".to_string(),
            move |result, source, target| {
                observed.store(returned.load(Ordering::SeqCst), Ordering::SeqCst);
                calls.fetch_add(1, Ordering::SeqCst);
                assert_eq!((result, source.as_str(), target.as_str()), (1, "ab", "ba"));
            },
        )
        .unwrap();
    }
    returned.store(true, Ordering::SeqCst);

    assert_eq!(calls.load(Ordering::SeqCst), 0);
    queue.run_pending();
    queue.run_pending();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(observed_after_return.load(Ordering::SeqCst));
}

#[test]
fn test_many_deferred_results_match_sync() {
    let queue = ReadyQueue::new();
    let config = DistanceConfig::<f64>::new()
        .with_weights(WeightOverrides::new().swap(0.5).insert(2.0))
        .with_substitution(SubstitutionMode::Canonical);
    let engine = DistanceEngine::new(config).unwrap();

    let pairs = [("Floor", "Flower"), ("", "abc"), ("teh", "the"), ("abc", "")];
    let results = Arc::new(Mutex::new(Vec::new()));
    for (source, target) in pairs {
        let results = Arc::clone(&results);
        schedule_str_distance(
            &queue,
            &engine,
            source.to_string(),
            target.to_string(),
            move |result, source, target| results.lock().unwrap().push((source, target, result)),
        )
        .unwrap();
    }

    assert_eq!(queue.run_pending(), pairs.len());
    let results = results.lock().unwrap();
    for ((source, target, result), (s, t)) in results.iter().zip(pairs) {
        assert_eq!(source, s);
        assert_eq!(target, t);
        assert_eq!(*result, engine.distance_str(s, t));
    }
}

#[tokio::test]
async fn test_tokio_delivery() {
    let scheduler = TokioScheduler::current().unwrap();
    let engine = DistanceEngine::<u64>::default();
    let (tx, rx) = tokio::sync::oneshot::channel();

    schedule_str_distance(
        &scheduler,
        &engine,
        "Floor".to_string(),
        "Flower".to_string(),
        move |result, _, _| {
            let _ = tx.send(result);
        },
    )
    .unwrap();

    assert_eq!(rx.await.unwrap(), 3);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_multi_thread_handler_waits_for_submit() {
    let engine = DistanceEngine::<u32>::default();
    let mut pending = Vec::new();

    for i in 0..200 {
        let returned = Arc::new(AtomicBool::new(false));
        let scheduler = SlowReturn {
            inner: TokioScheduler::current().unwrap(),
            returned: Arc::clone(&returned),
        };
        let (tx, rx) = tokio::sync::oneshot::channel();
        schedule_str_distance(
            &scheduler,
            &engine,
            format!("word{i}"),
            "wodr".to_string(),
            move |result, _, _| {
                let _ = tx.send((returned.load(Ordering::SeqCst), result));
            },
        )
        .unwrap();
        pending.push((i, rx));
    }

    for (i, rx) in pending {
        let (seen_return, result) = rx.await.unwrap();
        assert!(seen_return, "handler {i} ran before submit returned");
        assert_eq!(result, engine.distance_str(&format!("word{i}"), "wodr"));
    }
}

#[tokio::test]
async fn test_distance_async() {
    let engine = DistanceEngine::<u32>::default();
    let result = distance_async(&engine, "kitten".to_string(), "sitting".to_string())
        .await
        .unwrap();
    assert_eq!(result, 3);
}

#[test]
fn test_distance_async_with_block_on() {
    let engine = DistanceEngine::<u32>::default();
    let result =
        tokio_test::block_on(distance_async(&engine, String::new(), String::new())).unwrap();
    assert_eq!(result, 0);
}
