/// Upstream data sources.
///
/// Each source gets its own file: URL construction, identifier
/// normalization and parsing of the raw text it returns.
pub mod fetch;
pub mod fw13;
pub mod wrcc;

#[cfg(test)]
pub(crate) mod fixtures;
