//! Tickbench Example Suite
//!
//! Demonstrates the harness and serves as a template for your own suite.
//!
//! Run with:
//!   cargo run --example suite

use std::hint::black_box;
use tickbench::prelude::*;
use tickbench::generate_json_report;

fn register(registry: &mut TestRegistry) {
    registry.add_test_with_description(
        "strings",
        "concat",
        |mut m: TestManager| {
            m.start_timer();
            let mut s = String::new();
            for i in 0..10_000 {
                s.push_str(&i.to_string());
            }
            black_box(&s);
            m.stop_timer();
            m.set_operation_count(10_000);
            m.complete(!s.is_empty());
        },
        "String building and parsing",
    );

    registry.add_test("strings", "parse", |mut m: TestManager| {
        let numbers: Vec<String> = (0..10_000).map(|i| i.to_string()).collect();
        m.start_timer();
        let sum: i64 = numbers.iter().filter_map(|s| s.parse::<i64>().ok()).sum();
        m.stop_timer();
        m.set_operation_count(10_000);
        m.complete(black_box(sum) > 0);
    });

    registry.add_test_with_description(
        "collections",
        "vec_sum",
        |mut m: TestManager| {
            let data: Vec<i64> = (0..100_000).collect();
            m.start_timer();
            let sum: i64 = black_box(data.iter().sum());
            m.stop_timer();
            m.set_operation_count(100_000);
            m.complete(sum > 0);
        },
        "Vec and HashMap operations",
    );

    registry.add_test("collections", "hashmap_insert", |mut m: TestManager| {
        use std::collections::HashMap;
        m.start_timer();
        let mut map = HashMap::new();
        for i in 0..10_000 {
            map.insert(i, i * 2);
        }
        m.stop_timer();
        m.set_operation_count(10_000);
        m.complete(black_box(map).len() == 10_000);
    });

    // A deliberately failing test, to show failure reporting.
    registry.add_test("collections", "always_fails", |mut m: TestManager| {
        m.set_error("expected failure for demonstration");
        m.complete(false);
    });
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let mut registry = TestRegistry::new();
    register(&mut registry);

    // Zero pacing: there is no live UI to keep responsive here.
    let scheduler = Scheduler::new().with_pacing(Pacing::none());
    let report = scheduler.run_blocking(&registry, &mut TraceObserver);

    println!(
        "\n{} tests, {} passed, {} failed in {:.2}ms",
        report.summary.total_tests,
        report.summary.passed,
        report.summary.failed,
        report.meta.total_duration_ms
    );

    match generate_json_report(&report) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("failed to serialize report: {e}"),
    }
}
