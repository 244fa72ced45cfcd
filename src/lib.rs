//! dronepath - Plan pizza delivery drone flights around no-fly zones

pub mod api;
pub mod config;
pub mod delivery;
pub mod domain;
pub mod error;
pub mod geometry;
pub mod orders;
pub mod output;
pub mod planner;
pub mod zones;
