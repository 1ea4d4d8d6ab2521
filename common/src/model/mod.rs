pub mod campus;
pub mod deduction;
pub mod payrow;
pub mod populated;
pub mod scholarship;
