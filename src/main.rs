use std::path::{Path, PathBuf};
use std::time::Instant;

use aoc_search::*;

const PUZZLES: [(&str, fn(u8, &str) -> String); 10] = [
    ("routes", routes::solve),
    ("recipe", recipe::solve),
    ("containers", containers::solve),
    ("packages", packages::solve),
    ("facility", facility::solve),
    ("maze", maze::solve),
    ("sculpture", sculpture::solve),
    ("vault", vault::solve),
    ("ducts", ducts::solve),
    ("firewall", firewall::solve),
];

fn input_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("inputs").join(format!("{}.txt", name))
}

fn run(name: &str, solve: fn(u8, &str) -> String, part: u8) {
    println!("== {} part {} ==", name, part);
    let path = input_path(name);
    let input = match std::fs::read_to_string(&path) {
        Ok(input) => input,
        Err(err) => {
            eprintln!("cannot read {}: {}", path.display(), err);
            println!("SCORE: 0");
            return;
        }
    };
    let time = Instant::now();
    println!("SCORE: {}", solve(part, &input));
    println!("{} seconds elapsed", time.elapsed().as_secs_f32());
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = std::env::args().collect::<Vec<_>>();
    if args.len() > 3 {
        println!("at most two arguments expected - puzzle name, optionally 1/2 for part");
        std::process::exit(1);
    }

    match &args[..] {
        [_] => {
            for (name, solve) in PUZZLES {
                run(name, solve, 1);
                run(name, solve, 2);
            }
        }
        [_, name_arg, ..] => {
            let Some(&(name, solve)) = PUZZLES.iter().find(|(name, _)| *name == name_arg.as_str()) else {
                println!("unknown puzzle {:?} - expected one of {}",
                         name_arg, PUZZLES.map(|(name, _)| name).join(", "));
                std::process::exit(1);
            };
            match &args[..] {
                [_, _, part_arg] => {
                    assert!(part_arg == "1" || part_arg == "2");
                    run(name, solve, part_arg.parse()?);
                }
                _ => {
                    run(name, solve, 1);
                    run(name, solve, 2);
                }
            }
        }
        _ => unreachable!(),
    }
    Ok(())
}
