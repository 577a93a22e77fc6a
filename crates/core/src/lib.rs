//! Language-level data shared by the shader minifier passes: the reserved
//! vocabulary, the alias generator and the naming-convention heuristics.

mod constant;
mod keywords;
mod naming;
mod token_allocator;

pub use constant::*;
pub use keywords::{is_keyword, validate_identifier, KEYWORDS};
pub use naming::{is_constant_like, is_prefixed_camel};
pub use token_allocator::TokenAllocator;
