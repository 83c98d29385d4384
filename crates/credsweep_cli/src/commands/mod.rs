//! CLI command handlers.

/// Rule listing and inspection.
pub mod rules;
/// Tree scanning for credential leaks.
pub mod scan;

/// Convenience alias for command return types.
pub type Result<T = ()> = anyhow::Result<T>;
