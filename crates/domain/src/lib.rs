//! # rulekit-domain
//!
//! Pure domain model for the rulekit eligibility-rules engine.
//!
//! ## Responsibilities
//! - Define the closed vocabulary of **time units** (`year`, `month`, `day`,
//!   `hour`) that duration operators in rule data may name
//! - Validate unit tokens extracted from rule expressions before any date
//!   arithmetic is attempted
//! - Error conventions for rejected tokens
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from evaluator, adapter, or external IO
//! crates. All IO boundaries belong to the crates that consume this one.

pub mod error;
pub mod time_unit;
