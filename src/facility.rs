//! Radioisotope testing facility: carry every generator and microchip to
//! the top floor without frying a chip.
//!
//! The search state keeps one (generator floor, microchip floor) pair per
//! element, sorted. Sorting is the canonicalization: elements are
//! interchangeable, so any two placements that differ only by element
//! identity collapse to the same state and the visited set prunes them as
//! one. Without it the state space is combinatorial in the pair count.

use arrayvec::ArrayVec;
use itertools::Itertools;
use regex::Regex;

use crate::search;

pub const FLOORS: u8 = 4;
pub const TOP: u8 = FLOORS - 1;

const MAX_PAIRS: usize = 8;

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct State {
    pub elevator: u8,
    /// (generator floor, microchip floor) per element, sorted ascending.
    pub pairs: ArrayVec<(u8, u8), MAX_PAIRS>,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Kind {Generator, Microchip}

/// Reads the four-floor prose inventory. Element names only serve to match
/// each generator with its chip; the state never keeps them.
pub fn parse(input: &str) -> State {
    let gen_re = Regex::new(r"(\w+) generator").unwrap();
    let chip_re = Regex::new(r"(\w+)-compatible microchip").unwrap();
    let mut elements: Vec<String> = vec![];
    let mut pairs: Vec<(u8, u8)> = vec![];
    for (floor, line) in input.trim().lines().take(FLOORS as usize).enumerate() {
        for (re, is_generator) in [(&gen_re, true), (&chip_re, false)] {
            for caps in re.captures_iter(line) {
                let ix = elements.iter().position(|e| e.as_str() == &caps[1]).unwrap_or_else(|| {
                    elements.push(caps[1].to_owned());
                    pairs.push((0, 0));
                    elements.len() - 1
                });
                if is_generator {pairs[ix].0 = floor as u8} else {pairs[ix].1 = floor as u8}
            }
        }
    }

    pairs.sort_unstable();
    State {elevator: 0, pairs: pairs.into_iter().take(MAX_PAIRS).collect()}
}

/// A floor is safe when it has no generator, or every chip on it sits with
/// its own generator.
fn is_safe(pairs: &[(u8, u8)]) -> bool {
    (0..FLOORS).all(|floor| {
        !pairs.iter().any(|&(g, _)| g == floor) ||
        pairs.iter().all(|&(g, m)| m != floor || g == floor)
    })
}

/// All legal single elevator rides from `state`, already canonicalized.
pub fn successors(state: &State) -> Vec<State> {
    let floor = state.elevator;
    let mut items: Vec<(usize, Kind)> = vec![];
    for (ix, &(g, m)) in state.pairs.iter().enumerate() {
        if g == floor {items.push((ix, Kind::Generator))}
        if m == floor {items.push((ix, Kind::Microchip))}
    }
    let loads: Vec<ArrayVec<(usize, Kind), 2>> =
        items.iter().map(|&item| ArrayVec::from_iter([item]))
             .chain(items.iter().tuple_combinations().map(|(&a, &b)| ArrayVec::from_iter([a, b])))
             .collect();
    let nothing_below = state.pairs.iter().all(|&(g, m)| g >= floor && m >= floor);

    let mut next_states = vec![];
    for dir in [1i8, -1] {
        if dir == 1 && floor == TOP {continue}
        // riding down with nothing left below only wastes steps
        if dir == -1 && (floor == 0 || nothing_below) {continue}
        let next = floor.wrapping_add_signed(dir);
        for load in &loads {
            let mut pairs = state.pairs.clone();
            for &(ix, kind) in load {
                match kind {
                    Kind::Generator => pairs[ix].0 = next,
                    Kind::Microchip => pairs[ix].1 = next,
                }
            }
            if !is_safe(&pairs) {continue}
            pairs.sort_unstable();
            next_states.push(State {elevator: next, pairs});
        }
    }
    next_states
}

pub fn min_steps_to_top(start: State) -> Option<usize> {
    search::bfs_min_steps(
        start,
        successors,
        |s| s.elevator == TOP && s.pairs.iter().all(|&pair| pair == (TOP, TOP)),
    )
}

pub fn solve(part: u8, input: &str) -> String {
    let mut start = parse(input);
    if part == 2 {
        // two more freshly discovered pairs waiting on the first floor
        for _ in 0..2 {
            if start.pairs.try_push((0, 0)).is_err() {break}
        }
        start.pairs.sort_unstable();
    }
    match min_steps_to_top(start) {
        Some(steps) => steps.to_string(),
        None => "-1".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        The first floor contains a hydrogen-compatible microchip and a lithium-compatible microchip.
        The second floor contains a hydrogen generator.
        The third floor contains a lithium generator.
        The fourth floor contains nothing relevant.
    "};

    #[test]
    fn example_takes_eleven_steps() {
        assert_eq!(solve(1, EXAMPLE), "11");
    }

    #[test]
    fn interchangeable_elements_canonicalize_together() {
        let swapped = indoc! {"
            The first floor contains a lithium-compatible microchip and a hydrogen-compatible microchip.
            The second floor contains a lithium generator.
            The third floor contains a hydrogen generator.
            The fourth floor contains nothing relevant.
        "};
        assert_eq!(parse(EXAMPLE), parse(swapped));
    }

    #[test]
    fn distinct_placements_stay_distinct() {
        let moved = indoc! {"
            The first floor contains a hydrogen-compatible microchip.
            The second floor contains a hydrogen generator and a lithium-compatible microchip.
            The third floor contains a lithium generator.
            The fourth floor contains nothing relevant.
        "};
        assert_ne!(parse(EXAMPLE), parse(moved));
    }

    #[test]
    fn unsafe_rides_are_never_offered() {
        // bringing the lithium chip up to the hydrogen generator alone is fatal
        let start = parse(EXAMPLE);
        for state in successors(&start) {
            assert!(is_safe(&state.pairs));
        }
    }

    #[test]
    fn everything_on_top_is_zero_steps() {
        let done = State {elevator: TOP, pairs: [(TOP, TOP); 2].into_iter().collect()};
        assert_eq!(min_steps_to_top(done), Some(0));
    }
}
