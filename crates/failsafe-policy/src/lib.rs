//! # failsafe-policy
//!
//! TOML-driven automatic intervention rules for the FAILSAFE console.
//!
//! ## Overview
//!
//! This crate provides [`TomlRiskPolicy`], which implements the
//! [`RiskPolicy`](failsafe_core::traits::RiskPolicy) trait. Whenever a new
//! risk score is reported for an agent, rules are evaluated in order and
//! the first match decides whether the agent is stopped, paused,
//! quarantined, or left alone.
//!
//! ## Rule matching
//!
//! Each rule names an `agent_kind` and an agent `policy` label, both of
//! which accept the wildcard `"*"`, plus a `min_risk` threshold. Rules are
//! applied in declaration order; the first match wins.

pub mod engine;
pub mod rule;

pub use engine::TomlRiskPolicy;
pub use rule::{RiskPolicyConfig, RiskRule, RuleAction};

// ── Tests ─────────────────────────────────────────────────────────────────────
