//! Packet scanner firewall: scanners bounce over their range, sitting at
//! the top at times divisible by `2 * (range - 1)`. A range-1 scanner has
//! nowhere to go and always catches.

pub const DELAY_CAP: u64 = 10_000_000;

#[derive(Debug, PartialEq)]
pub struct Layer {
    pub depth: u64,
    pub range: u64,
}

pub fn parse(input: &str) -> Vec<Layer> {
    input.trim().lines().filter_map(|line| {
        let (depth, range) = line.split_once(':')?;
        Some(Layer {
            depth: depth.trim().parse().ok()?,
            range: range.trim().parse().ok()?,
        })
    }).filter(|layer| layer.range > 0).collect()
}

fn caught(layer: &Layer, time: u64) -> bool {
    layer.range == 1 || time % (2 * (layer.range - 1)) == 0
}

/// Severity of walking out at time 0: sum of depth * range over every
/// layer whose scanner is at the top when the packet passes it.
pub fn severity(layers: &[Layer]) -> u64 {
    layers.iter().filter(|layer| caught(layer, layer.depth)).map(|layer| layer.depth * layer.range).sum()
}

/// Smallest departure delay that avoids every scanner, scanned linearly
/// up to [`DELAY_CAP`]. `None` past the cap, and immediately for a
/// range-1 layer (nothing sneaks past those).
pub fn safe_delay(layers: &[Layer]) -> Option<u64> {
    if layers.iter().any(|layer| layer.range == 1) {return None}
    (0..=DELAY_CAP).find(|delay| layers.iter().all(|layer| !caught(layer, delay + layer.depth)))
}

pub fn solve(part: u8, input: &str) -> String {
    let layers = parse(input);
    if part == 1 {
        severity(&layers).to_string()
    } else {
        safe_delay(&layers).map_or(-1, |delay| delay as i64).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        0: 3
        1: 2
        4: 4
        6: 4
    "};

    #[test]
    fn example_severity() {
        // caught at depths 0 and 6
        assert_eq!(solve(1, EXAMPLE), "24");
    }

    #[test]
    fn example_safe_delay() {
        assert_eq!(solve(2, EXAMPLE), "10");
    }

    #[test]
    fn range_one_always_catches() {
        let layers = parse("3: 1\n");
        assert_eq!(severity(&layers), 3);
        assert_eq!(safe_delay(&layers), None);
    }

    #[test]
    fn empty_firewall_is_a_free_walk() {
        assert_eq!(solve(1, ""), "0");
        assert_eq!(solve(2, ""), "0");
    }
}
