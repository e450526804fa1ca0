//! Metro route planner server.
//!
//! Answers "best route between two stations" over a transit network, by
//! fewest transfers or by shortest travel time, with fare and arrival
//! estimates. Lines can be closed and reopened to simulate disruptions.

pub mod config;
pub mod domain;
pub mod graph;
pub mod logging;
pub mod network;
pub mod planner;
pub mod web;
