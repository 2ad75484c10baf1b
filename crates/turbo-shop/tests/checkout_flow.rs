//! End-to-end flow: settings → model resolution → catalog → cart pricing.

use turbo_money::{Decimal, MoneyError};
use turbo_shop::prelude::*;

#[derive(Debug)]
struct FlatShippingCart;

impl CartModel for FlatShippingCart {
    fn extra_rows(&self, cart: &Cart, subtotal: &Money) -> Result<Vec<ExtraRow>, CommerceError> {
        if subtotal.is_zero() || subtotal.is_nan() {
            return Ok(Vec::new());
        }
        Ok(vec![ExtraRow::new(
            "Shipping",
            Money::from_minor_units(500, cart.currency),
        )])
    }
}

fn catalog(euros: &MoneyMaker) -> Catalog {
    let mut catalog = Catalog::new();
    catalog
        .insert(
            SmartCard::new(
                "Transcend Ultra",
                "TS-32",
                euros.make("12.50").unwrap(),
                CardType::MicroSdhc,
                Speed::Mbps95,
                32,
            )
            .unwrap(),
        )
        .unwrap();

    let mut phone = SmartPhoneModel::new(
        "Pixel",
        "PX",
        "Google",
        OperatingSystem::Android,
        Decimal::new(61, 1),
        euros.currency(),
    );
    phone.add_variant("PX-128", euros.make(599).unwrap(), 128).unwrap();
    phone.add_variant("PX-256", euros.make(699).unwrap(), 256).unwrap();
    catalog.insert(phone).unwrap();
    catalog
}

#[test]
fn test_configured_models_price_the_cart() {
    let settings = ShopSettings::from_toml_str(
        r#"
        [shop]
        currency = "EUR"
        cart_model = "myshop::FlatShippingCart"
        "#,
    )
    .unwrap();

    let mut registry = ModelRegistry::with_defaults();
    registry
        .register_cart("myshop::FlatShippingCart", FlatShippingCart)
        .unwrap();
    let models = registry.resolve(&settings).unwrap();
    assert_eq!(models.cart_item_path(), "default::CartItem");

    let euros = settings.money_maker().unwrap();
    let catalog = catalog(&euros);
    let mut cart = Cart::new("session", euros.currency());

    let card = catalog.sellable("TS-32", &ProductExtra::default()).unwrap();
    cart.add_product(card, ProductExtra::default(), 2).unwrap();
    let phone = catalog.get("PX").unwrap();
    cart.add_product(phone, ProductExtra::with_product_code("PX-256"), 1)
        .unwrap();

    let pricing = cart.pricing(&models).unwrap();
    assert_eq!(pricing.lines.len(), 2);
    assert_eq!(pricing.subtotal.as_integer().unwrap(), 72400);
    assert_eq!(pricing.extra_rows.len(), 1);
    assert_eq!(pricing.total.as_integer().unwrap(), 72900);
    assert_eq!(pricing.total.to_string(), "\u{20ac} 729.00");
}

#[test]
fn test_unknown_configured_model_is_an_error() {
    let settings =
        ShopSettings::from_toml_str("[shop]\ncart_item_model = \"myshop::Missing\"").unwrap();
    let err = ModelRegistry::with_defaults().resolve(&settings).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unable to resolve 'myshop::Missing' configured by setting shop.cart_item_model"
    );
}

#[test]
fn test_variant_codes_resolve_through_owner() {
    let euros = MoneyMaker::default();
    let catalog = catalog(&euros);

    let variant = catalog.sellable("PX-128", &ProductExtra::default()).unwrap();
    assert_eq!(variant.product_code(), "PX-128");
    assert_eq!(variant.get_price(&PriceRequest::anonymous()), euros.make(599).unwrap());

    let model = catalog.get("PX").unwrap();
    assert_eq!(model.get_price(&PriceRequest::anonymous()), euros.make(599).unwrap());
    assert!(matches!(
        catalog.sellable("PX", &ProductExtra::default()),
        Err(CommerceError::VariantNotFound(_))
    ));
    assert!(matches!(
        catalog.sellable("NOPE", &ProductExtra::default()),
        Err(CommerceError::ProductNotFound(_))
    ));
}

#[test]
fn test_product_codes_are_unique_across_variants() {
    let euros = MoneyMaker::default();
    let mut catalog = catalog(&euros);
    let clash = SmartCard::new(
        "Clash",
        "PX-256",
        euros.make(1).unwrap(),
        CardType::Sd,
        Speed::Mbps4,
        1,
    )
    .unwrap();
    assert!(matches!(
        catalog.insert(clash),
        Err(CommerceError::DuplicateProductCode(code)) if code == "PX-256"
    ));
    assert_eq!(catalog.len(), 2);
}

#[test]
fn test_replacing_a_product_records_a_revision() {
    let euros = MoneyMaker::default();
    let mut catalog = catalog(&euros);
    let cheaper = SmartCard::new(
        "Transcend Ultra",
        "TS-32",
        euros.make("9.99").unwrap(),
        CardType::MicroSdhc,
        Speed::Mbps95,
        32,
    )
    .unwrap();
    catalog.replace(cheaper, "Price drop.").unwrap();

    let comments: Vec<_> = catalog
        .revisions("TS-32")
        .map(|r| r.comment.as_str())
        .collect();
    assert_eq!(comments, vec!["Initial version.", "Price drop."]);
}

#[test]
fn test_cart_rejects_foreign_currency_products() {
    let euros = MoneyMaker::default();
    let catalog = catalog(&euros);
    let francs = MoneyMaker::new("CHF").unwrap();
    let mut cart = Cart::new("session", francs.currency());

    let err = cart
        .add_product(catalog.get("TS-32").unwrap(), ProductExtra::default(), 1)
        .unwrap_err();
    assert!(matches!(
        err,
        CommerceError::Money(MoneyError::CurrencyMismatch { .. })
    ));
}
