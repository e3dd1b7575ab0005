//! DOM-free storefront behaviors.
//!
//! Everything here is written against the [`shared::dom::UiElement`] trait so it
//! runs natively in tests; `catalog_frontend` supplies the `web-sys` adapter.

pub mod behaviors;
pub mod shared;
