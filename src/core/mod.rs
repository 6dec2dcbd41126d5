//! Core types shared across funcslice

pub mod config;
pub mod error;
