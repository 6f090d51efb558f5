pub(crate) mod ast;
pub(crate) mod codegen;
pub(crate) mod converter;
pub(crate) mod document;
pub(crate) mod errors;
pub(crate) mod metrics;
pub(crate) mod pipeline;
