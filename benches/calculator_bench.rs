//! Benchmark for recomputing the ratio report on every edit.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use summit::config::SummitConfig;
use summit::formatting::FormattingConfig;
use summit::output::{render_to_string, CalculationView, OutputFormat};
use summit::{compute, CalculatorSession, Field, InputSet};

fn complete_inputs() -> InputSet {
    InputSet::new()
        .with(Field::MarketingSpend, 5000.0)
        .with(Field::SalesSpend, 3000.0)
        .with(Field::NewCustomers, 40.0)
        .with(Field::Arpa, 150.0)
        .with(Field::GrossMarginPct, 0.7)
        .with(Field::ChurnMonthlyPct, 0.02)
}

fn bench_compute(c: &mut Criterion) {
    let inputs = complete_inputs();
    c.bench_function("compute_complete", |b| {
        b.iter(|| black_box(compute(black_box(&inputs))))
    });

    let partial = InputSet::new().with(Field::Arpa, 150.0);
    c.bench_function("compute_incomplete", |b| {
        b.iter(|| black_box(compute(black_box(&partial))))
    });
}

fn bench_session_edits(c: &mut Criterion) {
    let mut group = c.benchmark_group("session_edits");
    for edits in [10usize, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("set_raw", edits), &edits, |b, &edits| {
            b.iter(|| {
                let mut session = CalculatorSession::new();
                for i in 0..edits {
                    let field = Field::ALL[i % Field::ALL.len()];
                    session.set_raw(field, &format!("{}", i + 1));
                }
                black_box(*session.report())
            })
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let inputs = complete_inputs();
    let config = SummitConfig::default();
    let view = CalculationView::new(&inputs, compute(&inputs), &config);

    for (name, format) in [
        ("render_json", OutputFormat::Json),
        ("render_markdown", OutputFormat::Markdown),
        ("render_svg", OutputFormat::Svg),
        ("render_terminal", OutputFormat::Terminal),
    ] {
        c.bench_function(name, |b| {
            b.iter(|| black_box(render_to_string(&view, format, FormattingConfig::plain())))
        });
    }
}

criterion_group!(benches, bench_compute, bench_session_edits, bench_render);
criterion_main!(benches);
