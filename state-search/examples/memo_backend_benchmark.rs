//! Benchmark comparing memo table backends on a grid path problem.
//!
//! Run with: cargo run --example memo_backend_benchmark --release
//!
//! Given a grid of non-negative integers, find the minimum path sum from
//! top-left to bottom-right moving only right or down. States are flat
//! cell indices, so every backend applies:
//! - HashMapBackend (hashed, the default)
//! - DenseBackend (indexed directly by cell)
//! - NoMemoBackend (recomputes everything) - baseline, small grids only

use std::time::Instant;

use state_search::{
    Combine, CostToGo, DenseBackend, DpSolver, HashMapBackend, MemoBackend, NoMemoBackend,
    SearchProblem, Transition, dp_batch,
};

// =============================================================================
// Problem definition
// =============================================================================

/// Minimum path sum over a grid, states as flat cell indices.
///
/// The cost to go from a cell is the cheapest sum of cells *entered* on the
/// way to the bottom-right corner; the start cell's own value is added by
/// the caller.
struct MinPathGrid {
    cells: Vec<u64>,
    rows: usize,
    cols: usize,
}

impl MinPathGrid {
    fn random(seed: u64, rows: usize, cols: usize, max_value: u64) -> Self {
        let mut rng = seed;
        let cells = (0..rows * cols)
            .map(|_| {
                rng = rng.wrapping_mul(6364136223846793005).wrapping_add(1);
                rng % max_value
            })
            .collect();
        Self { cells, rows, cols }
    }

    /// Bottom-up table fill, used as ground truth for verification.
    fn min_path_sum_bottom_up(&self) -> u64 {
        let mut table = vec![0u64; self.cells.len()];
        for row in (0..self.rows).rev() {
            for col in (0..self.cols).rev() {
                let index = row * self.cols + col;
                let right = (col + 1 < self.cols).then(|| table[index + 1]);
                let down = (row + 1 < self.rows).then(|| table[index + self.cols]);
                table[index] = self.cells[index]
                    + match (right, down) {
                        (Some(r), Some(d)) => r.min(d),
                        (Some(r), None) => r,
                        (None, Some(d)) => d,
                        (None, None) => 0,
                    };
            }
        }
        table[0]
    }
}

impl Transition for MinPathGrid {
    type State = usize;
    type Cost = u64;

    fn successors(&self, index: &usize) -> Vec<(usize, u64)> {
        let index = *index;
        let (row, col) = (index / self.cols, index % self.cols);
        let mut next = Vec::with_capacity(2);
        if col + 1 < self.cols {
            next.push((index + 1, self.cells[index + 1]));
        }
        if row + 1 < self.rows {
            next.push((index + self.cols, self.cells[index + self.cols]));
        }
        next
    }
}

impl SearchProblem for MinPathGrid {
    fn is_goal(&self, index: &usize) -> bool {
        *index == self.cells.len() - 1
    }
}

impl CostToGo for MinPathGrid {}

const GRID_SIZE: usize = 100;
const NUM_GRIDS: usize = 100;
const SMALL_GRID_SIZE: usize = 12;
const NUM_SMALL_GRIDS: usize = 10;

fn min_path_sum<B>(grid: &MinPathGrid) -> u64
where
    B: MemoBackend<usize, Option<u64>>,
{
    let solver = DpSolver::new(grid, Combine::Min);
    grid.cells[0] + solver.run_with_backend::<B>(&0).answer.unwrap_or(0)
}

fn main() {
    println!("Minimum Path Sum Benchmark (memo backends)");
    println!("==========================================\n");

    let grids: Vec<MinPathGrid> = (0..NUM_GRIDS)
        .map(|i| MinPathGrid::random(42 + i as u64, GRID_SIZE, GRID_SIZE, 100))
        .collect();

    let small_grids: Vec<MinPathGrid> = (0..NUM_SMALL_GRIDS)
        .map(|i| MinPathGrid::random(42 + i as u64, SMALL_GRID_SIZE, SMALL_GRID_SIZE, 100))
        .collect();

    // Ground truth
    let expected: Vec<u64> = grids.iter().map(|g| g.min_path_sum_bottom_up()).collect();
    let small_expected: Vec<u64> = small_grids
        .iter()
        .map(|g| g.min_path_sum_bottom_up())
        .collect();

    // =========================================================================
    // Big grids - memoized backends
    // =========================================================================
    println!(
        "=== Big grids ({}x{}, {} grids) ===",
        GRID_SIZE, GRID_SIZE, NUM_GRIDS
    );

    println!("Running HashMapBackend...");
    let start = Instant::now();
    let hashmap_results: Vec<u64> = grids
        .iter()
        .map(min_path_sum::<HashMapBackend<usize, Option<u64>>>)
        .collect();
    let hashmap_time = start.elapsed();
    println!("HashMapBackend:  {:?}", hashmap_time);

    println!("Running DenseBackend...");
    let start = Instant::now();
    let dense_results: Vec<u64> = grids
        .iter()
        .map(min_path_sum::<DenseBackend<Option<u64>>>)
        .collect();
    let dense_time = start.elapsed();
    println!("DenseBackend:    {:?}", dense_time);

    // =========================================================================
    // Big grids - one solver, many starts via the rayon pool
    // =========================================================================
    println!("\n=== Batched runs (one grid, every top-row start) ===");

    let solver = DpSolver::new(&grids[0], Combine::Min);
    let starts: Vec<usize> = (0..GRID_SIZE).collect();

    println!("Running sequential runs...");
    let start = Instant::now();
    let sequential: Vec<Option<u64>> = starts.iter().map(|s| solver.run(s).answer).collect();
    let sequential_time = start.elapsed();
    println!("Sequential:      {:?}", sequential_time);

    println!("Running dp_batch...");
    let start = Instant::now();
    let batched: Vec<Option<u64>> =
        dp_batch::<_, HashMapBackend<usize, Option<u64>>>(&solver, &starts)
            .into_iter()
            .map(|report| report.answer)
            .collect();
    let batch_time = start.elapsed();
    println!("dp_batch:        {:?}", batch_time);

    // =========================================================================
    // Small grids - memoization overhead vs no caching at all
    // =========================================================================
    println!(
        "\n=== Small grids ({}x{}, {} grids) - baseline comparison ===",
        SMALL_GRID_SIZE, SMALL_GRID_SIZE, NUM_SMALL_GRIDS
    );

    println!("Running NoMemoBackend (exponential recursion)...");
    let start = Instant::now();
    let no_memo_results: Vec<u64> = small_grids
        .iter()
        .map(min_path_sum::<NoMemoBackend<Option<u64>>>)
        .collect();
    let no_memo_time = start.elapsed();
    println!("NoMemoBackend:   {:?}", no_memo_time);

    println!("Running HashMapBackend (small grids)...");
    let start = Instant::now();
    let small_hashmap_results: Vec<u64> = small_grids
        .iter()
        .map(min_path_sum::<HashMapBackend<usize, Option<u64>>>)
        .collect();
    let small_hashmap_time = start.elapsed();
    println!("HashMapBackend:  {:?}", small_hashmap_time);

    // =========================================================================
    // Verification
    // =========================================================================
    println!("\nVerifying results...");

    let mut all_match = true;
    for i in 0..NUM_GRIDS {
        if expected[i] != hashmap_results[i] || expected[i] != dense_results[i] {
            println!(
                "Mismatch at grid {}: bottom_up={}, hashmap={}, dense={}",
                i, expected[i], hashmap_results[i], dense_results[i]
            );
            all_match = false;
        }
    }
    for i in 0..NUM_SMALL_GRIDS {
        if small_expected[i] != no_memo_results[i]
            || small_expected[i] != small_hashmap_results[i]
        {
            println!(
                "Mismatch at small grid {}: bottom_up={}, no_memo={}, hashmap={}",
                i, small_expected[i], no_memo_results[i], small_hashmap_results[i]
            );
            all_match = false;
        }
    }
    if sequential != batched {
        println!("Mismatch between sequential runs and dp_batch");
        all_match = false;
    }

    if all_match {
        println!("All backends produce identical results");
    } else {
        println!("MISMATCHES FOUND");
    }

    // =========================================================================
    // Summary
    // =========================================================================
    println!("\n=== Performance Summary ===");
    println!("Big grids ({}x{}):", GRID_SIZE, GRID_SIZE);
    println!("  HashMapBackend:  {:?}", hashmap_time);
    println!("  DenseBackend:    {:?}", dense_time);
    println!(
        "  Dense vs HashMap: {:.2}x",
        hashmap_time.as_secs_f64() / dense_time.as_secs_f64()
    );

    println!("Batched runs ({} starts):", GRID_SIZE);
    println!("  Sequential:      {:?}", sequential_time);
    println!("  dp_batch:        {:?}", batch_time);
    println!(
        "  Speedup:          {:.2}x",
        sequential_time.as_secs_f64() / batch_time.as_secs_f64()
    );

    println!("Small grids ({}x{}):", SMALL_GRID_SIZE, SMALL_GRID_SIZE);
    println!("  NoMemoBackend:   {:?}", no_memo_time);
    println!("  HashMapBackend:  {:?}", small_hashmap_time);
    println!(
        "  Memoization pays: {:.0}x",
        no_memo_time.as_secs_f64() / small_hashmap_time.as_secs_f64()
    );
}
