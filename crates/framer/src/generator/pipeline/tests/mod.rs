mod golden;
pub(crate) mod support;
mod types_stage;
