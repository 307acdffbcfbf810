pub mod common;




#[cfg(test)]
mod property_tests;
