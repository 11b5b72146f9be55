pub mod transform_errors;
