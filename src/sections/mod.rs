//! Password evaluation sections
//!
//! Each section checks one composition criterion independently of the others.

mod length;
mod variety;

pub use length::{MIN_LENGTH, length_section};
pub use variety::{lowercase_section, number_section, special_section, uppercase_section};

use secrecy::SecretString;

/// Signature shared by every section: `true` when the criterion is met.
pub type SectionFn = fn(&SecretString) -> bool;
