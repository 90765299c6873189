//! Kinetic sculpture: drop a capsule through rotating discs. Disc `D`
//! must sit at position 0 when the capsule arrives at time `t + D`, so
//! each disc is the modular constraint `t + D + S ≡ 0 (mod P)`.

use regex::Regex;

#[derive(Debug, PartialEq)]
pub struct Disc {
    pub index: u64,
    pub positions: u64,
    pub start: u64,
}

pub fn parse(input: &str) -> Vec<Disc> {
    let re = Regex::new(r"Disc #(\d+)\s+has\s+(\d+)\s+positions;\s+at time=0,\s+it is at position\s+(\d+)\.").unwrap();
    re.captures_iter(input)
        .map(|caps| Disc {
            index: caps[1].parse().expect(&caps[0]),
            positions: caps[2].parse().expect(&caps[0]),
            start: caps[3].parse().expect(&caps[0]),
        })
        .filter(|disc| disc.positions > 0)
        .collect()
}

fn gcd(a: u64, b: u64) -> u64 {if b == 0 {a} else {gcd(b, a % b)}}
fn lcm(a: u64, b: u64) -> u64 {a / gcd(a, b) * b}

/// First button-press time at which the capsule falls through every disc.
/// Sieves with a step that grows to the lcm of the satisfied moduli,
/// most restrictive disc first.
pub fn first_capsule_time(discs: &[Disc]) -> u64 {
    let mut discs: Vec<&Disc> = discs.iter().collect();
    discs.sort_unstable_by(|a, b| b.positions.cmp(&a.positions));

    let mut time = 0;
    let mut step = 1;
    for disc in discs {
        while (time + disc.index + disc.start) % disc.positions != 0 {time += step}
        step = lcm(step, disc.positions);
    }
    time
}

pub fn solve(part: u8, input: &str) -> String {
    let mut discs = parse(input);
    if discs.is_empty() {
        eprintln!("no disc lines parsed");
        return "0".to_string();
    }
    if part == 2 {
        discs.push(Disc {index: discs.len() as u64 + 1, positions: 11, start: 0});
    }
    first_capsule_time(&discs).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        Disc #1 has 5 positions; at time=0, it is at position 4.
        Disc #2 has 2 positions; at time=0, it is at position 1.
    "};

    #[test]
    fn example_first_press() {
        assert_eq!(solve(1, EXAMPLE), "5");
    }

    #[test]
    fn example_with_extra_disc() {
        assert_eq!(solve(2, EXAMPLE), "85");
    }

    #[test]
    fn single_disc_already_aligned() {
        assert_eq!(first_capsule_time(&parse(
            "Disc #1 has 7 positions; at time=0, it is at position 6.\n"
        )), 0);
    }

    #[test]
    fn one_position_discs_never_block() {
        let discs = parse(indoc! {"
            Disc #1 has 1 positions; at time=0, it is at position 0.
            Disc #2 has 3 positions; at time=0, it is at position 0.
        "});
        assert_eq!(first_capsule_time(&discs), 1);
    }
}
