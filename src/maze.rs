//! Cubicle maze: walls are a pure function of the coordinates and the
//! office designer's favorite number.

use crate::search;

pub struct MazeConfig {
    pub favorite: u64,
    pub start: (i64, i64),
    pub goal: (i64, i64),
}

impl Default for MazeConfig {
    fn default() -> Self {
        MazeConfig {favorite: 0, start: (1, 1), goal: (31, 39)}
    }
}

pub const STEP_CAP: usize = 50;

pub fn is_open(favorite: u64, (x, y): (i64, i64)) -> bool {
    if x < 0 || y < 0 {return false}
    let (x, y) = (x as u64, y as u64);
    let value = x * x + 3 * x + 2 * x * y + y + y * y + favorite;
    value.count_ones() % 2 == 0
}

fn neighbors(favorite: u64, (x, y): (i64, i64)) -> Vec<(i64, i64)> {
    [(0, 1), (0, -1), (1, 0), (-1, 0)].iter()
        .map(|(dx, dy)| (x + dx, y + dy))
        .filter(|&pos| is_open(favorite, pos))
        .collect()
}

/// Fewest steps from start to goal. The maze is unbounded, so this only
/// terminates when the goal is reachable.
pub fn shortest_path(cfg: &MazeConfig) -> Option<usize> {
    search::bfs_min_steps(cfg.start, |&pos| neighbors(cfg.favorite, pos), |&pos| pos == cfg.goal)
}

/// Distinct locations reachable in at most `max_steps` steps.
pub fn reachable_within(cfg: &MazeConfig, max_steps: usize) -> usize {
    search::bfs_reachable(cfg.start, |&pos| neighbors(cfg.favorite, pos), max_steps)
}

pub fn solve(part: u8, input: &str) -> String {
    let Ok(favorite) = input.trim().parse() else {
        eprintln!("expected the favorite number, got {:?}", input.trim());
        return "0".to_string();
    };
    let cfg = MazeConfig {favorite, ..MazeConfig::default()};
    if part == 1 {
        shortest_path(&cfg).map_or(-1, |steps| steps as i64).to_string()
    } else {
        reachable_within(&cfg, STEP_CAP).to_string()
    }
}
