pub mod array_literal;
pub mod resolver;

pub use array_literal::encode;
pub use resolver::{array_code, scalar_code};
