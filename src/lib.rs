//! Brute-force and state-space-search puzzle solvers (Advent of Code
//! 2015-2017), built around a shared breadth/depth-first explorer core.

pub mod containers;
pub mod ducts;
pub mod facility;
pub mod firewall;
pub mod maze;
pub mod packages;
pub mod recipe;
pub mod routes;
pub mod sculpture;
pub mod search;
pub mod vault;
