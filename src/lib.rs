//! Greed, a tiny terminal arcade game.
//!
//! A robot moves along the playfield under keyboard control while artifacts
//! and rocks rain down on it. Catching an artifact is worth a point; catching
//! a rock costs one, and the game ends when the score runs out.
//!
//! The [`director::Director`] runs the show, one frame at a time, over a
//! [`cast::Cast`] of [`actor::Actor`]s. It only sees the terminal through the
//! [`service`] traits.

#![deny(unused)]

pub mod actor;
pub mod cast;
pub mod cli;
pub mod config;
pub mod director;
pub mod error;
pub mod geo;
pub mod gfx;
pub mod input;
pub mod logging;
pub mod service;
pub mod setup;
pub mod timing;

pub use error::GameError;
pub use error::Result;
