//! Infrastructure layer implementing the domain's repository traits.
//!
//! - [`persistence`] - Code store implementations

pub mod persistence;
