//! Shop domain types and logic for TurboShop.
//!
//! - **Catalog**: the `Product` capability, smart cards and smart phones,
//!   product revisions
//! - **Cart**: carts priced by pluggable cart and cart item models
//! - **Settings**: currency, model selection and money rendering
//!
//! # Example
//!
//! ```rust
//! use turbo_shop::prelude::*;
//!
//! let settings = ShopSettings::from_toml_str("[shop]\ncurrency = \"EUR\"")?;
//! let models = ModelRegistry::with_defaults().resolve(&settings)?;
//! let euros = settings.money_maker()?;
//!
//! let card = SmartCard::new(
//!     "Sandisk Extreme",
//!     "SD-64",
//!     euros.make("19.90")?,
//!     CardType::Sdxc,
//!     Speed::Mbps80,
//!     64,
//! )?;
//!
//! let mut cart = Cart::new("session-1", euros.currency());
//! cart.add_product(&card, ProductExtra::default(), 2)?;
//!
//! let pricing = cart.pricing(&models)?;
//! assert_eq!(pricing.total.to_string(), "\u{20ac} 39.80");
//! # Ok::<(), CommerceError>(())
//! ```

pub mod cart;
pub mod catalog;
pub mod error;
pub mod ids;
pub mod settings;

pub use error::CommerceError;
pub use ids::*;
pub use settings::ShopSettings;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::settings::ShopSettings;
    pub use turbo_money::{Currency, Money, MoneyMaker};

    // Catalog
    pub use crate::catalog::{
        CardType, Catalog, OperatingSystem, PriceRequest, Product, ProductExtra, Revision,
        SmartCard, SmartPhoneModel, SmartPhoneVariant, Speed,
    };

    // Cart
    pub use crate::cart::{
        Cart, CartItem, CartItemModel, CartModel, CartModels, CartPricing, ExtraRow,
        LineItemPricing, ModelRegistry,
    };
}
