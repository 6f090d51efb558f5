mod field_optionality;
pub(crate) mod hashing;
pub(crate) mod lookup;
pub(crate) mod registry;
pub(crate) mod resolver;

pub(crate) use field_optionality::{FieldOptionality, FieldOptionalityPolicy};
pub(crate) use lookup::LookupTable;
pub(crate) use registry::TypeDefinitions;
pub(crate) use resolver::resolve;

pub(crate) const REQUEST_BODY_SUFFIX: &str = "RequestBody";
pub(crate) const RESPONSE_SUFFIX: &str = "Response";

#[cfg(test)]
mod tests;
