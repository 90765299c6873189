//! Vault rooms behind MD5-keyed doors: which doors are open depends on
//! the whole path walked so far, so positions alone never repeat as
//! states and the walk is bounded by path length instead of a visited set.

use md5::{Digest, Md5};

use crate::search;

pub const GRID: i8 = 4;
pub const GOAL: (i8, i8) = (GRID - 1, GRID - 1);

/// Runaway-path safety net; real passcodes stay far below this.
const PATH_CAP: usize = 5000;

// (dr, dc, path char), in hash-nibble order
const MOVES: [(i8, i8, u8); 4] = [(-1, 0, b'U'), (1, 0, b'D'), (0, -1, b'L'), (0, 1, b'R')];

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Room {
    pub pos: (i8, i8),
    pub path: String,
}

/// Doors out of the current room, from the first four hex digits of
/// md5(passcode + path): `b` through `f` means open, in U D L R order.
fn open_doors(passcode: &str, path: &str) -> [bool; 4] {
    let mut hasher = Md5::new();
    hasher.update(passcode.as_bytes());
    hasher.update(path.as_bytes());
    let digest = hasher.finalize();
    [digest[0] >> 4, digest[0] & 0xf, digest[1] >> 4, digest[1] & 0xf].map(|nibble| nibble > 0xa)
}

/// Legal continuations of `room`; the vault itself (and the path cap) ends
/// a path.
pub fn successors(passcode: &str, room: &Room) -> Vec<Room> {
    if room.pos == GOAL || room.path.len() >= PATH_CAP {return vec![]}
    let doors = open_doors(passcode, &room.path);
    MOVES.iter().zip(doors)
        .filter_map(|(&(dr, dc, step), open)| {
            let pos = (room.pos.0 + dr, room.pos.1 + dc);
            (open && (0..GRID).contains(&pos.0) && (0..GRID).contains(&pos.1)).then(|| {
                let mut path = room.path.clone();
                path.push(step as char);
                Room {pos, path}
            })
        })
        .collect()
}

/// Shortest path string from the top-left room to the vault.
pub fn shortest_path(passcode: &str) -> Option<String> {
    let start = Room {pos: (0, 0), path: String::new()};
    search::bfs_first(start, |room| successors(passcode, room), |room| room.pos == GOAL)
        .map(|room| room.path)
}

/// Length of the longest path that still reaches the vault.
pub fn longest_path_len(passcode: &str) -> Option<usize> {
    let start = Room {pos: (0, 0), path: String::new()};
    search::dfs_max(
        start,
        |room| successors(passcode, room),
        |room| (room.pos == GOAL).then_some(room.path.len()),
    )
}

pub fn solve(part: u8, input: &str) -> String {
    let passcode = input.trim();
    if part == 1 {
        shortest_path(passcode).unwrap_or_else(|| "-1".to_string())
    } else {
        longest_path_len(passcode).map_or(-1, |len| len as i64).to_string()
    }
}
