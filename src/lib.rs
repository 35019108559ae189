//! Disease risk scoring and fusion engine.
//!
//! The pipeline has two independent scoring paths sharing one output shape:
//! a classifier ensemble over vitals with a symptom-keyword overlay, and a
//! regional path fusing weather multipliers with case trends. See `risk`
//! for the fusion rules and `cohort` for the synthetic ground truth the
//! ensemble learns from.

pub mod api;
pub mod cli;
pub mod cohort;
pub mod config;
pub mod context;
pub mod domain;
pub mod error;
pub mod logging;
pub mod risk;
