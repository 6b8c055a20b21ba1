//! Benchmarks for propagation and the exhaustive search.
//!
//! # Benchmarks
//!
//! - **`propagation_easy`**: the single-candidate pass on a puzzle it solves
//!   completely (43 fills).
//! - **`search_backtracking`**: the full search on a puzzle that stalls
//!   propagation and needs 7 guesses for its unique solution.
//! - **`search_two_solutions`**: the full search on a puzzle whose
//!   ambiguous rectangle forces both branches to be explored to the end.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::hint;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use kazudoku_core::PuzzleGrid;
use kazudoku_solver::{BacktrackingSolver, fill_single_candidates};

const EASY: &str = "
    6_2 41_ __8
    _15 7_3 __9
    734 __8 _6_
    5_3 2_4 ___
    __8 _9_ __5
    __6 _57 _3_
    _5_ _7_ 9_4
    4_9 ___ 25_
    _87 ___ 6_3
";

const HARDER: &str = "
    _4_ 8__ 2__
    53_ ___ __4
    8__ 5_9 _1_
    2__ ___ _45
    49_ ___ 83_
    ___ ___ 1_6
    3__ _2_ 5__
    1__ _6_ _2_
    _6_ __5 3__
";

const TWO_SOLUTIONS: &str = "
    692 415 378
    81_ 763 _29
    73_ 928 _61
    573 284 196
    128 396 745
    946 157 832
    351 672 984
    469 831 257
    287 549 613
";

fn bench_propagation(c: &mut Criterion) {
    let puzzle: PuzzleGrid = EASY.parse().unwrap();
    c.bench_function("propagation_easy", |b| {
        b.iter_batched(
            || puzzle.clone(),
            |mut grid| hint::black_box(fill_single_candidates(&mut grid)),
            BatchSize::SmallInput,
        );
    });
}

fn bench_search(c: &mut Criterion) {
    let solver = BacktrackingSolver::new();
    for (name, input) in [
        ("search_backtracking", HARDER),
        ("search_two_solutions", TWO_SOLUTIONS),
    ] {
        let puzzle: PuzzleGrid = input.parse().unwrap();
        c.bench_function(name, |b| {
            b.iter(|| hint::black_box(solver.solve(hint::black_box(&puzzle))));
        });
    }
}

criterion_group!(benches, bench_propagation, bench_search);
criterion_main!(benches);
