//! Product catalog module.
//!
//! Contains the product capability, the concrete product variants, the
//! catalog and product revisions.

mod catalog;
mod product;
mod revision;
mod smartcard;
mod smartphone;

pub use catalog::Catalog;
pub use product::{PriceRequest, Product, ProductExtra};
pub use revision::{Revision, RevisionLog};
pub use smartcard::{CardType, SmartCard, Speed};
pub use smartphone::{OperatingSystem, SmartPhoneModel, SmartPhoneVariant};
