//! Text box editing and clear tests

#[path = "../helpers/mod.rs"]
mod helpers;
