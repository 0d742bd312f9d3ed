//! Shortest paths over ASCII grids with both frontier policies.
//!
//! Run with: cargo run --example grid_shortest_path
//!
//! Two searches over embedded maps: breadth-first through a walled maze
//! where every step costs one, then cheapest-first over weighted terrain
//! where the short route is not the cheap one.

use anyhow::Context;
use state_search::{Bfs, Dijkstra, SearchProblem, Transition};
use tracing::{Level, info};

const MAZE: &[&str] = &[
    "S..#....",
    ".#.#.##.",
    ".#...#..",
    ".####.#.",
    "....#...",
    "##.#.#.#",
    "...#...E",
];

const TERRAIN: &[&str] = &[
    "S1999",
    "91199",
    "99119",
    "99911",
    "9999E",
];

/// Four-directional walk through a walled maze; every step costs one.
struct Maze {
    open: Vec<Vec<bool>>,
    goal: (usize, usize),
}

impl Maze {
    fn parse(rows: &[&str]) -> anyhow::Result<(Self, (usize, usize))> {
        let mut start = None;
        let mut goal = None;
        let open = rows
            .iter()
            .enumerate()
            .map(|(row, line)| {
                line.chars()
                    .enumerate()
                    .map(|(col, cell)| {
                        match cell {
                            'S' => start = Some((row, col)),
                            'E' => goal = Some((row, col)),
                            _ => {}
                        }
                        cell != '#'
                    })
                    .collect()
            })
            .collect();

        let maze = Self {
            open,
            goal: goal.context("map has no goal cell")?,
        };
        Ok((maze, start.context("map has no start cell")?))
    }

    fn neighbors(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        [
            (row.wrapping_sub(1), col),
            (row + 1, col),
            (row, col.wrapping_sub(1)),
            (row, col + 1),
        ]
        .into_iter()
        .filter(|&(r, c)| self.open.get(r).and_then(|line| line.get(c)) == Some(&true))
    }
}

impl Transition for Maze {
    type State = (usize, usize);
    type Cost = u32;

    fn successors(&self, state: &(usize, usize)) -> Vec<((usize, usize), u32)> {
        self.neighbors(state.0, state.1).map(|cell| (cell, 1)).collect()
    }
}

impl SearchProblem for Maze {
    fn is_goal(&self, state: &(usize, usize)) -> bool {
        *state == self.goal
    }
}

/// Weighted terrain walk; entering a cell costs its digit, endpoints cost
/// nothing.
struct Terrain {
    maze: Maze,
    cost: Vec<Vec<u32>>,
}

impl Terrain {
    fn parse(rows: &[&str]) -> anyhow::Result<(Self, (usize, usize))> {
        let (maze, start) = Maze::parse(rows)?;
        let cost = rows
            .iter()
            .map(|line| {
                line.chars()
                    .map(|cell| cell.to_digit(10).unwrap_or(0))
                    .collect()
            })
            .collect();
        Ok((Self { maze, cost }, start))
    }
}

impl Transition for Terrain {
    type State = (usize, usize);
    type Cost = u32;

    fn successors(&self, state: &(usize, usize)) -> Vec<((usize, usize), u32)> {
        self.maze
            .neighbors(state.0, state.1)
            .map(|(row, col)| ((row, col), self.cost[row][col]))
            .collect()
    }
}

impl SearchProblem for Terrain {
    fn is_goal(&self, state: &(usize, usize)) -> bool {
        self.maze.is_goal(state)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .init();

    let (maze, start) = Maze::parse(MAZE)?;
    let report = Bfs::new(maze).run(&start);
    info!(
        steps = ?report.answer,
        expanded = report.stats.expanded,
        frontier_peak = report.stats.frontier_peak,
        micros = report.duration().num_microseconds().unwrap_or_default(),
        "maze solved breadth-first"
    );

    let (terrain, start) = Terrain::parse(TERRAIN)?;
    let report = Dijkstra::new(terrain).run(&start);
    info!(
        total_cost = ?report.answer,
        expanded = report.stats.expanded,
        frontier_peak = report.stats.frontier_peak,
        micros = report.duration().num_microseconds().unwrap_or_default(),
        "terrain crossed cheapest-first"
    );

    Ok(())
}
