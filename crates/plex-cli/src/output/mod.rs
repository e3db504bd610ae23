//! Diagnostic and table output.

pub mod diagnostic;
pub mod table;

pub use diagnostic::ExpressionDiagnostic;
