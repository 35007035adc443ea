pub mod datetime;
pub mod test_utils;
pub mod validation;

pub use datetime::{parse_birth_date, parse_date_time};
pub use validation::{require_non_empty, split_list};
