pub mod count_result;

pub use count_result::CountResult;
