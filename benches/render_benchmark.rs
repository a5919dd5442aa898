//! Performance benchmarks for list rendering
//!
//! Tests card building, card rendering and pagination for different page sizes.
//! Run with: cargo bench

use chitchat::adapters::mock::fixture_post;
use chitchat::card::PostCardView;
use chitchat::models::{CurrentUser, Post};
use chitchat::pagination::PaginationView;
use chitchat::render::{render_card, render_pagination};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Posts with long bodies so snippet truncation does real work
fn generate_posts(count: usize) -> Vec<Post> {
    (0..count)
        .map(|i| {
            let owner = if i % 2 == 0 { "me" } else { "someone" };
            let mut post = fixture_post(&i.to_string(), owner);
            post.body = "Lorem ipsum dolor sit amet, ünïcödé body text. ".repeat(20);
            post
        })
        .collect()
}

/// Benchmark building card views from posts
fn bench_card_views(c: &mut Criterion) {
    let mut group = c.benchmark_group("card_views");
    let viewer = CurrentUser::new("me");

    for size in [1, 9, 50, 200].iter() {
        let posts = generate_posts(*size);
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_posts", size)),
            &posts,
            |b, posts| {
                b.iter(|| {
                    let cards: Vec<PostCardView> = posts
                        .iter()
                        .map(|p| PostCardView::new(black_box(p), Some(&viewer)))
                        .collect();
                    black_box(cards)
                });
            },
        );
    }

    group.finish();
}

/// Benchmark rendering prepared cards to text
fn bench_card_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("card_render");
    let viewer = CurrentUser::new("me");

    for size in [1, 9, 50, 200].iter() {
        let cards: Vec<PostCardView> = generate_posts(*size)
            .iter()
            .map(|p| PostCardView::new(p, Some(&viewer)))
            .collect();
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_cards", size)),
            &cards,
            |b, cards| {
                b.iter(|| {
                    let text: String = cards.iter().map(|c| render_card(black_box(c))).collect();
                    black_box(text)
                });
            },
        );
    }

    group.finish();
}

/// Benchmark the pagination bar for growing collections
fn bench_pagination(c: &mut Criterion) {
    let mut group = c.benchmark_group("pagination");

    for total in [9u64, 1_000, 100_000].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_items", total)),
            total,
            |b, total| {
                b.iter(|| {
                    let view = PaginationView::new(black_box(2), black_box(*total), 9);
                    black_box(render_pagination(&view))
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_card_views, bench_card_render, bench_pagination);

criterion_main!(benches);
