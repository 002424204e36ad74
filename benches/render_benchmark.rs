//! Benchmarks for the listing screen render and the view-state merge.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use marquee::adapters::{ImageResolver, MockCatalogClient};
use marquee::app::App;
use marquee::error::CatalogError;
use marquee::models::MovieSummary;
use marquee::orchestrator::{
    RequestGeneration, SettledLoad, SourceItems, SourceName, SourceOutcome, ViewState,
};
use marquee::ui;
use ratatui::{backend::TestBackend, Terminal};
use std::sync::Arc;

fn movies(count: usize) -> Vec<MovieSummary> {
    (0..count as u64)
        .map(|id| {
            MovieSummary::new(id, format!("Movie {}", id), format!("/{}.jpg", id), 7.0)
                .with_overview("A long overview that has to be wrapped and clipped. ".repeat(6))
        })
        .collect()
}

fn settled(generation: u64, count: usize, popular_fails: bool) -> SettledLoad {
    let popular = if popular_fails {
        Err(CatalogError::other("network"))
    } else {
        Ok(SourceItems::List(movies(count)))
    };
    SettledLoad {
        generation: RequestGeneration::new(generation),
        outcomes: vec![
            SourceOutcome {
                source: SourceName::NowPlaying,
                result: Ok(SourceItems::List(movies(count))),
            },
            SourceOutcome {
                source: SourceName::Popular,
                result: popular,
            },
            SourceOutcome {
                source: SourceName::Upcoming,
                result: Ok(SourceItems::List(movies(count))),
            },
        ],
    }
}

/// Merge of a settled load into the previous snapshot
fn bench_view_state_settle(c: &mut Criterion) {
    let mut group = c.benchmark_group("view_state_settle");

    for size in [5, 20, 100].iter() {
        let previous = ViewState::settle(&ViewState::initial(), settled(1, *size, false));
        group.throughput(Throughput::Elements(*size as u64 * 3));

        group.bench_with_input(BenchmarkId::new("all_ok", size), size, |b, &size| {
            b.iter_batched(
                || settled(2, size, false),
                |load| black_box(ViewState::settle(&previous, load)),
                criterion::BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("one_failed", size), size, |b, &size| {
            b.iter_batched(
                || settled(2, size, true),
                |load| black_box(ViewState::settle(&previous, load)),
                criterion::BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn ready_app(size: usize) -> App {
    let mut app = App::new(
        Arc::new(MockCatalogClient::new()),
        ImageResolver::default(),
        40,
    );
    // Issuing the load only builds the call futures; the benchmark commits
    // a prepared settlement instead of running them.
    let _pending = app.movies.gate.enter(&mut app.movies.orchestrator);
    app.movies.settle(settled(1, size, false), 0);
    app
}

/// Full listing screen render
fn bench_movies_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("movies_render");

    for size in [5, 20, 100].iter() {
        let mut app = ready_app(*size);
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                terminal.draw(|f| ui::render(f, &mut app)).unwrap();
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_view_state_settle, bench_movies_render);
criterion_main!(benches);
