pub mod filter;
pub mod transformer;

#[cfg(test)]
mod transformer_tests;
