//! HVAC duct network: shortest walk through every numbered point of
//! interest. Pairwise distances come from one grid flood per POI; the
//! visiting order is then brute-forced over permutations.

use bitvec::prelude::*;
use itertools::Itertools;
use std::collections::VecDeque;

pub struct DuctMap {
    grid: Vec<Vec<u8>>,
    /// (label, position), sorted by label; the walk starts at the first.
    pois: Vec<(u8, (usize, usize))>,
}

pub fn parse(input: &str) -> DuctMap {
    let grid: Vec<Vec<u8>> = input.trim().lines().map(|line| line.as_bytes().to_vec()).collect();
    let mut pois = vec![];
    for (r, row) in grid.iter().enumerate() {
        for (c, &cell) in row.iter().enumerate() {
            if cell.is_ascii_digit() {pois.push((cell - b'0', (r, c)))}
        }
    }
    pois.sort_unstable();
    DuctMap {grid, pois}
}

/// Flood the grid from `start`, recording the distance to every POI the
/// wave reaches.
fn distances_from(grid: &[Vec<u8>], pois: &[(u8, (usize, usize))], start: (usize, usize)) -> Vec<Option<usize>> {
    let rows = grid.len();
    let cols = grid.iter().map(|row| row.len()).max().unwrap_or(0);
    let mut dist = vec![None; pois.len()];
    let mut seen = bitvec![0; rows * cols];
    let mut frontier = VecDeque::new();
    seen.set(start.0 * cols + start.1, true);
    frontier.push_back((start, 0));
    while let Some(((r, c), steps)) = frontier.pop_front() {
        if let Some(ix) = pois.iter().position(|&(_, pos)| pos == (r, c)) {
            dist[ix] = Some(steps);
        }
        for (nr, nc) in [(r.wrapping_sub(1), c), (r + 1, c), (r, c.wrapping_sub(1)), (r, c + 1)] {
            match grid.get(nr).and_then(|row| row.get(nc)) {
                Some(&b'#') | None => continue,
                Some(_) => {}
            }
            if seen[nr * cols + nc] {continue}
            seen.set(nr * cols + nc, true);
            frontier.push_back(((nr, nc), steps + 1));
        }
    }
    dist
}

/// Fewest steps to start at POI 0 and visit every other POI, optionally
/// returning home afterwards. `None` when no order connects them all.
pub fn min_route(map: &DuctMap, round_trip: bool) -> Option<usize> {
    let n = map.pois.len();
    if n < 2 {return None}
    let dist: Vec<Vec<Option<usize>>> = map.pois.iter()
        .map(|&(_, pos)| distances_from(&map.grid, &map.pois, pos))
        .collect();

    (1..n).permutations(n - 1)
        .filter_map(|order| {
            let mut legs = vec![0];
            legs.extend(order);
            if round_trip {legs.push(0)}
            legs.iter().tuple_windows().map(|(&a, &b)| dist[a][b]).sum::<Option<usize>>()
        })
        .min()
}

pub fn solve(part: u8, input: &str) -> String {
    let map = parse(input);
    match min_route(&map, part == 2) {
        Some(steps) => steps.to_string(),
        None => {
            eprintln!("need at least two connected points of interest");
            "0".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        ###########
        #0.1.....2#
        #.#######.#
        #4.......3#
        ###########
    "};

    #[test]
    fn example_route() {
        assert_eq!(min_route(&parse(EXAMPLE), false), Some(14));
    }

    #[test]
    fn example_round_trip() {
        assert_eq!(min_route(&parse(EXAMPLE), true), Some(20));
    }

    #[test]
    fn walled_off_poi_disconnects() {
        let map = parse(indoc! {"
            #####
            #0#1#
            #####
        "});
        assert_eq!(min_route(&map, false), None);
    }

    #[test]
    fn lone_poi_is_no_route() {
        assert_eq!(solve(1, "#0#"), "0");
    }
}
