pub mod failure_type;
