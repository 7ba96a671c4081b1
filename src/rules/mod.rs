//! Contractual rule evaluation.
//!
//! The evaluator is a pure function over the extracted day columns plus an
//! immutable [`profile::VendorProfile`]; it carries no state between runs, so
//! evaluating the same sheet twice yields the same violation list. Rules are
//! independent of one another with one carve-out: soup dishes are handled by
//! the soup-consistency rule and never enter the repetition check.

pub mod evaluate;
pub mod profile;
pub mod violation;

pub use evaluate::{Evaluation, PassedCheck, SheetAudit, evaluate};
pub use profile::{Vendor, VendorProfile};
pub use violation::{CellRef, Location, RuleKind, Severity, Violation};
