//! Shortest and longest single-visit tours over a named location graph.

use itertools::Itertools;
use regex::Regex;

pub struct RouteMap {
    names: Vec<String>,
    dist: Vec<Vec<Option<u64>>>,
}

/// Parses `A to B = N` lines into a symmetric distance matrix. Lines that
/// don't match are skipped.
pub fn parse(input: &str) -> RouteMap {
    let re = Regex::new(r"(\w+)\s+to\s+(\w+)\s+=\s+(\d+)").unwrap();
    let mut names: Vec<String> = vec![];
    let mut edges = vec![];
    for caps in re.captures_iter(input) {
        let mut ix = |name: &str| names.iter().position(|n| n.as_str() == name).unwrap_or_else(|| {
            names.push(name.to_owned());
            names.len() - 1
        });
        let (a, b) = (ix(&caps[1]), ix(&caps[2]));
        edges.push((a, b, caps[3].parse::<u64>().expect(&caps[0])));
    }

    let mut dist = vec![vec![None; names.len()]; names.len()];
    for (a, b, d) in edges {
        dist[a][b] = Some(d);
        dist[b][a] = Some(d);
    }
    RouteMap {names, dist}
}

impl RouteMap {
    fn tour_len(&self, order: &[usize]) -> Option<u64> {
        order.iter().tuple_windows().map(|(&a, &b)| self.dist[a][b]).sum()
    }

    /// Total distances of every route visiting each location exactly once;
    /// orders with a missing leg are dropped.
    fn tour_lens(&self) -> impl Iterator<Item = u64> + '_ {
        (0..self.names.len()).permutations(self.names.len())
            .filter_map(|order| self.tour_len(&order))
    }

    pub fn shortest_tour(&self) -> Option<u64> {self.tour_lens().min()}
    pub fn longest_tour(&self) -> Option<u64> {self.tour_lens().max()}
}

pub fn solve(part: u8, input: &str) -> String {
    let map = parse(input);
    let best = if part == 1 {map.shortest_tour()} else {map.longest_tour()};
    best.unwrap_or(0).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        London to Dublin = 464
        London to Belfast = 518
        Dublin to Belfast = 141
    "};

    #[test]
    fn example_tours() {
        let map = parse(EXAMPLE);
        assert_eq!(map.shortest_tour(), Some(605));
        assert_eq!(map.longest_tour(), Some(982));
    }

    #[test]
    fn missing_legs_disqualify_orders() {
        // no B-C edge, so only tours with B and C at opposite ends survive
        let map = parse("A to B = 1\nA to C = 2\n");
        assert_eq!(map.shortest_tour(), Some(3));
        assert_eq!(map.longest_tour(), Some(3));
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let map = parse("London to Dublin = 464\nnot a route\n");
        assert_eq!(map.shortest_tour(), Some(464));
    }

    #[test]
    fn empty_input_scores_zero() {
        assert_eq!(solve(1, ""), "0");
        assert_eq!(solve(2, ""), "0");
    }
}
