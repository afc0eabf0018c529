//! Integration tests for the public circuit breaker API

use anyhow::Result;
use breakwater::{BreakwaterError, CircuitBreaker, CircuitBreakerConfig, CircuitState};
use rand::Rng;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Guarded call the way an application would write it
async fn guarded<F, Fut>(breaker: &CircuitBreaker, op: F) -> Option<bool>
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = bool>,
{
    if breaker.is_open() {
        return None;
    }
    let ok = op().await;
    if ok {
        breaker.record_success();
    } else {
        breaker.record_failure();
    }
    Some(ok)
}

#[tokio::test]
async fn test_guarded_calls_fail_fast_during_outage() -> Result<()> {
    init_tracing();

    let config = CircuitBreakerConfig::from_toml_str(
        r#"
        window_size = 8
        failure_rate = 0.5
        open_duration = "80ms"
        success_threshold = 2
        "#,
    )?;
    let breaker = CircuitBreaker::with_config("downstream", config)?;
    let attempts = Arc::new(AtomicUsize::new(0));

    // Dependency is down
    for _ in 0..10 {
        let attempts = attempts.clone();
        guarded(&breaker, || async move {
            attempts.fetch_add(1, Ordering::SeqCst);
            false
        })
        .await;
    }
    assert_eq!(attempts.load(Ordering::SeqCst), 4);
    assert_eq!(breaker.state(), CircuitState::Open);

    // Dependency recovers; probes go through once the cooldown ends
    tokio::time::sleep(Duration::from_millis(150)).await;
    assert_eq!(breaker.state(), CircuitState::HalfOpen);

    for _ in 0..2 {
        assert_eq!(guarded(&breaker, || async { true }).await, Some(true));
    }
    assert_eq!(breaker.state(), CircuitState::Closed);

    let stats = breaker.stats();
    assert_eq!(stats.failures, 0);
    assert_eq!(stats.times_opened, 1);
    assert_eq!(stats.total_calls(), 6);
    Ok(())
}

#[tokio::test]
async fn test_operator_reset() -> Result<()> {
    init_tracing();

    let breaker = CircuitBreaker::with_config(
        "downstream",
        CircuitBreakerConfig::aggressive().with_open_duration(Duration::from_secs(60)),
    )?;
    while !breaker.is_open() {
        breaker.record_failure();
    }

    breaker.force_reset();
    assert_eq!(breaker.state(), CircuitState::Closed);
    assert_eq!(breaker.stats().failure_ratio(), 0.0);
    Ok(())
}

#[tokio::test]
async fn test_invalid_toml_config_is_rejected() {
    let err = CircuitBreakerConfig::from_toml_str("success_threshold = 0").unwrap_err();
    assert!(matches!(err, BreakwaterError::Config { ref field, .. } if field == "success_threshold"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_tasks_share_one_breaker() -> Result<()> {
    init_tracing();

    let opens = Arc::new(AtomicUsize::new(0));
    let counter = opens.clone();
    let breaker = CircuitBreaker::builder("shared")
        .config(
            CircuitBreakerConfig::default()
                .with_window_size(8)
                .with_open_duration(Duration::from_millis(5))
                .with_success_threshold(4),
        )
        .on_state_change(move |state| {
            if state == CircuitState::Open {
                counter.fetch_add(1, Ordering::Relaxed);
            }
        })
        .build()?;

    let mut tasks = Vec::new();
    for _ in 0..4 {
        let breaker = breaker.clone();
        tasks.push(tokio::spawn(async move {
            for _ in 0..200 {
                let fail = rand::thread_rng().gen_range(0..3) == 0;
                if fail {
                    breaker.record_failure();
                } else {
                    breaker.record_success();
                }
                tokio::time::sleep(Duration::from_millis(1)).await;
            }
        }));
    }
    for task in tasks {
        task.await?;
    }

    let stats = breaker.stats();
    assert_eq!(stats.total_calls(), 800);
    assert!(stats.failures <= stats.window_size);
    // Every open period is announced exactly once
    assert_eq!(opens.load(Ordering::Relaxed) as u64, stats.times_opened);
    Ok(())
}
