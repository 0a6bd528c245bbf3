pub mod aggregate;
pub mod player;
pub mod result_set;
pub mod rows;
pub mod stat_field;
pub mod stat_value;
