// src/lib.rs

pub mod config;
pub mod density;
pub mod field;
pub mod integrate;
pub mod params;
pub mod sweep;
pub mod visualisation;
