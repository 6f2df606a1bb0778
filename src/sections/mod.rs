//! Password scoring sections
//!
//! Each section scores one axis of password strength and names the
//! deficiencies it found on that axis.

mod complexity;
mod length;
mod uniqueness;

pub use complexity::complexity_section;
pub use length::length_section;
pub use uniqueness::uniqueness_section;

/// Maximum score a single section can award.
pub const SECTION_MAX: u8 = 4;

/// Outcome of a single scoring section: points awarded on this axis
/// (`0..=SECTION_MAX`) and actionable fixes for the deficiencies found,
/// most impactful first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionScore {
    pub score: u8,
    pub recommendations: Vec<String>,
}
