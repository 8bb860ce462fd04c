//! Tests for signal delivery and thread affinity across threads.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use parking_lot::Mutex;

use horizon_cell_editor_core::{Signal, ThreadAffinity};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_signal_shared_between_threads() {
    init_tracing();
    let signal = Arc::new(Signal::<usize>::new());
    let total = Arc::new(AtomicUsize::new(0));

    let total_clone = total.clone();
    signal.connect(move |value| {
        total_clone.fetch_add(*value, Ordering::SeqCst);
    });

    let handles: Vec<_> = (1..=4)
        .map(|n| {
            let signal = signal.clone();
            thread::spawn(move || signal.emit(n))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap().invoked, 1);
    }

    assert_eq!(total.load(Ordering::SeqCst), 10);
}

#[test]
fn test_slot_disconnecting_a_later_slot() {
    let signal = Arc::new(Signal::<()>::new());
    let log = Arc::new(Mutex::new(Vec::new()));
    let victim = Arc::new(Mutex::new(None));

    let weak = Arc::downgrade(&signal);
    let victim_clone = victim.clone();
    let log_clone = log.clone();
    signal.connect(move |_| {
        log_clone.lock().push("killer");
        if let (Some(signal), Some(id)) = (weak.upgrade(), victim_clone.lock().take()) {
            signal.disconnect(id);
        }
    });
    let log_clone = log.clone();
    *victim.lock() = Some(signal.connect(move |_| log_clone.lock().push("victim")));

    let report = signal.emit(());
    assert_eq!(report.invoked, 1);
    assert_eq!(*log.lock(), vec!["killer"]);
    assert_eq!(signal.connection_count(), 1);
}

#[test]
fn test_panicking_slot_contained_across_emissions() {
    init_tracing();
    let signal = Signal::<u8>::new();
    let after = Arc::new(AtomicUsize::new(0));

    signal.connect(|value| {
        if *value % 2 == 1 {
            panic!("odd value {value}");
        }
    });
    let after_clone = after.clone();
    signal.connect(move |_| {
        after_clone.fetch_add(1, Ordering::SeqCst);
    });

    let reports: Vec<_> = (0..4).map(|n| signal.emit(n)).collect();
    assert_eq!(reports.iter().map(|r| r.panicked).sum::<usize>(), 2);
    assert!(reports.iter().all(|r| r.invoked == 2));
    assert_eq!(after.load(Ordering::SeqCst), 4);
}

#[test]
fn test_affinity_follows_creating_thread() {
    let affinity = ThreadAffinity::current();
    assert!(affinity.is_same_thread());

    let seen_elsewhere = thread::spawn(move || affinity.is_same_thread())
        .join()
        .unwrap();
    assert!(!seen_elsewhere);
}
