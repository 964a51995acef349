//! PROMETHEE Preference - outranking preference engine for multi-criteria
//! decision analysis.
//!
//! This crate computes partial and total PROMETHEE preference indices over
//! alternatives and boundary profiles, with criterion interaction effects,
//! reinforced preference and discordance.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
