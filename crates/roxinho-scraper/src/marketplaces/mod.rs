//! Per-platform extractors. Each returns [`roxinho_core::RawProductFields`]
//! and leaves defaults to [`crate::normalize`].

pub mod amazon;
pub mod generic;
pub mod mercadolivre;
