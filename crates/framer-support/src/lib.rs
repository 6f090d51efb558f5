//! Runtime support for code generated by `framer`.
//!
//! Generated `types.rs` files re-export [`NonEmptyVec`] for required array
//! properties, generated `dto.rs` files implement [`Dto`], and generated
//! `dto_mocker.rs` files build their values through the [`mock`] module.

mod dto;
#[cfg(feature = "mock")]
pub mod mock;
mod non_empty;

pub use dto::Dto;
pub use non_empty::{EmptyVecError, NonEmptyVec};
