/// Reshaping utilities for downstream analysis.
///
/// - `long_format` — wide observation table ⇄ one row per parameter value
pub mod long_format;
