//! Word counting.
//!
//! Two independent algorithms reach the same table:
//!
//! - **Linear**: one hash lookup per word ([`count_linear`])
//! - **Quadratic**: one scan of the record list per word ([`count_quadratic`]),
//!   followed by [`rank`] and [`to_table`]
//!
//! Both are kept and tested against each other; neither is built on top of
//! the other.

pub mod linear;
pub mod quadratic;
pub mod rank;
pub mod table;

pub use linear::count_linear;
pub use quadratic::{count_quadratic, count_quadratic_with, ScanMode};
pub use rank::{rank, rank_by};
pub use table::{lookup, to_table, FrequencyTable};
