//! Common error infrastructure for planner-core.
//!
//! The lenient entry points (`resolve_base_attributes`, the catalog pipeline)
//! never fail: unknown ids and missing values fall back to defaults. Errors
//! only come out of the strict variants, and each domain error lives next to
//! the operation that produces it (`AttributeError`, `ResolveError`).

/// Common trait for all planner-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Return a stable, snake_case code from `error_code` so callers can match
///   on it without depending on the message text
pub trait PlannerError: core::fmt::Display + core::fmt::Debug {
    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str;
}
