//! The analysis engine: ten graph computation modes plus two statistics
//! reports.
//!
//! Every function here is a pure transformation from
//! `(records, filter, selections)` to a result value. Callers obtain the
//! record slice from [`crate::store::CalibrationStore::apply_filters`] or
//! `apply_base_filters` (blanket cycles and skew-along-bracket need the
//! unranged set) and hand it in; nothing is cached or shared between
//! calls. Empty input always produces an empty, well-formed result.

mod blanket_cycles;
mod colors;
mod columns;
mod dft;
mod histogram;
mod missing_data;
mod revolutions;
mod skew;
mod skew_bracket;
mod stats;
mod support;
mod x_scaling;

pub use blanket_cycles::compute_blanket_cycles;
pub use colors::compute_colors;
pub use columns::compute_columns;
pub use dft::compute_dft;
pub use histogram::compute_histogram;
pub use missing_data::compute_missing_data;
pub use revolutions::compute_revolutions;
pub use skew::compute_skew;
pub use skew_bracket::compute_skew_along_bracket;
pub use stats::{compute_offset_skew, compute_stats};
pub use x_scaling::compute_x_scaling;
