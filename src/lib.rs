//! # Connect Four Agents
//!
//! A two-player Connect Four engine paired with a family of move-selecting
//! search agents: greedy one-ply lookahead, full minimax, alpha-beta pruned
//! minimax, and a best-first heuristic scan, plus a random baseline.
//! Agents explore hypothetical continuations on board copies, so the live
//! game state is never touched by speculative search.
//!
//! ## Modules
//!
//! - [`game`] — Board, players, win/draw detection
//! - [`ai`] — Agent trait, heuristic evaluator, search strategies
//! - [`config`] — TOML match configuration
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
