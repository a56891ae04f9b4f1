//! Remiro - Career Assessment Profile Store
//!
//! This crate implements the profile and progress core of the Remiro
//! career counselling assistant: durable user profiles with 12
//! assessment dimension slots, append-only conversation transcripts,
//! and the routing that decides which assessments and milestones to
//! offer next.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
