//! Criterion benchmarks for huntset critical paths
//!
//! Benchmarks the operations run on every keystroke or file load:
//! - Exporter: set list to TypeScript source
//! - Importer: TypeScript source back to sets
//! - Argument splitting on nested literals
//! - Reducer: one edit on a populated state

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use huntset::editor::{reduce, Action, EditorState};
use huntset::exporter::export_sets;
use huntset::importer::{parse_content, split_top_level_args};
use huntset::models::{Column, HuntSet, Level, Piece, PieceRow};

// =============================================================================
// Test Data Generators
// =============================================================================

/// Generate `count` sets with `rows` rows of three P3s each
fn make_sets(count: usize, rows: usize) -> Vec<HuntSet> {
    (0..count)
        .map(|i| {
            let mut set = HuntSet::new(i as u64 + 1);
            set.p1_name = format!("Primary clue {}", i);
            set.border_color = Some("#e06666".to_string());
            set.column = Column::ALL[1 + i % 3];
            set.rows = (0..rows)
                .map(|r| {
                    PieceRow::new(
                        Piece::new(format!("Secondary {}-{}", i, r)).with_color("#cccccc"),
                        vec![
                            Piece::new(format!("t{}", r)),
                            Piece::new("KOTH").with_tag("disambiguation"),
                            Piece::new("\"quoted\", with comma"),
                        ],
                    )
                })
                .collect();
            set
        })
        .collect()
}

// =============================================================================
// Exporter Benchmarks
// =============================================================================

fn bench_exporter(c: &mut Criterion) {
    let mut group = c.benchmark_group("exporter");

    for (count, rows) in [(10, 3), (50, 5), (200, 5)] {
        let sets = make_sets(count, rows);
        group.bench_with_input(
            BenchmarkId::new("export_sets", format!("{}x{}", count, rows)),
            &sets,
            |b, sets| b.iter(|| export_sets(black_box(sets))),
        );
    }

    group.finish();
}

// =============================================================================
// Importer Benchmarks
// =============================================================================

fn bench_importer(c: &mut Criterion) {
    let mut group = c.benchmark_group("importer");

    for (count, rows) in [(10, 3), (50, 5), (200, 5)] {
        let content = export_sets(&make_sets(count, rows));
        group.throughput(Throughput::Bytes(content.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("parse_content", format!("{}x{}", count, rows)),
            &content,
            |b, content| b.iter(|| parse_content(black_box(content))),
        );
    }

    let nested = r#"{ piece: "a, b", tags: [PieceTag.DISAMBIGUATION, PieceTag.DANGEROUSMATERIAL], color: "#fff" }, ["x", newPiece("y", "red"), { piece: "(z)", tags: [] }]"#;
    group.bench_function("split_top_level_args", |b| {
        b.iter(|| split_top_level_args(black_box(nested)))
    });

    group.finish();
}

// =============================================================================
// Reducer Benchmarks
// =============================================================================

fn bench_reducer(c: &mut Criterion) {
    let mut group = c.benchmark_group("reducer");

    let mut state = EditorState {
        current_level: Level::MadSpace,
        ..EditorState::default()
    };
    state.level_sets.insert(Level::MadSpace, make_sets(100, 5));
    let action = Action::SetP3Text {
        id: 50,
        ri: 2,
        pi: 1,
        value: "edited".to_string(),
    };

    group.bench_function("set_p3_text_100_sets", |b| {
        b.iter(|| reduce(black_box(&state), black_box(&action)))
    });

    group.finish();
}

criterion_group!(benches, bench_exporter, bench_importer, bench_reducer);

criterion_main!(benches);
