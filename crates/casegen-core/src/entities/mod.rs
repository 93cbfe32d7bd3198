mod input_case;
mod specification;
mod test_case;

pub use input_case::InputCase;
pub use specification::Specification;
pub use test_case::{GeneratedTestCase, TestStep};
