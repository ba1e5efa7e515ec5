//! Weighted random selection
//!
//! One generic pick is shared by ambient event selection (weighted by base
//! weight) and outcome selection (weighted by result weight).

mod weighted;


pub use weighted::*;
