//! Study Plan - Personalized lesson plan generation
//!
//! This crate derives a numerology and zodiac profile from a learner's name
//! and birth date and maps it, together with their learning style and chosen
//! subject, to a structured lesson plan.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
