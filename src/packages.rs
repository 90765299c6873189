//! Sleigh balancing: pick the smallest (then least-entangled) first group
//! of packages that hits an even share of the total weight.

use itertools::Itertools;

pub fn parse(input: &str) -> Vec<u64> {
    input.trim().lines().filter_map(|line| match line.trim().parse() {
        Ok(weight) => Some(weight),
        Err(_) => {
            eprintln!("skipping non-integer weight line: {}", line);
            None
        }
    }).collect()
}

/// Quantum entanglement of the ideal first group when splitting into
/// `groups` equal-weight groups: minimum group size wins, then minimum
/// product of weights. `None` if the total weight doesn't divide evenly.
/// As in sleigh practice, the leftover packages are trusted to split into
/// the remaining groups on their own.
pub fn ideal_entanglement(weights: &[u64], groups: u64) -> Option<u64> {
    if weights.is_empty() || groups == 0 {return None}
    let total: u64 = weights.iter().sum();
    if total % groups != 0 {return None}
    let target = total / groups;

    (1..=weights.len()).find_map(|size| {
        weights.iter().copied().combinations(size)
            .filter(|group| group.iter().sum::<u64>() == target)
            .map(|group| group.iter().product::<u64>())
            .min()
    })
}

pub fn solve(part: u8, input: &str) -> String {
    let groups = if part == 1 {3} else {4};
    ideal_entanglement(&parse(input), groups).unwrap_or(0).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &[u64] = &[1, 2, 3, 4, 5, 7, 8, 9, 10, 11];

    #[test]
    fn example_three_groups() {
        // target 20, smallest group {9, 11}
        assert_eq!(ideal_entanglement(EXAMPLE, 3), Some(99));
    }

    #[test]
    fn example_four_groups() {
        // target 15, smallest group {4, 11}
        assert_eq!(ideal_entanglement(EXAMPLE, 4), Some(44));
    }

    #[test]
    fn uneven_total_is_unbalanceable() {
        assert_eq!(ideal_entanglement(&[1, 2, 3, 5], 3), None);
        assert_eq!(solve(1, "1\n2\n3\n5\n"), "0");
    }
}
