pub mod test_constants;
pub mod test_utilities;
