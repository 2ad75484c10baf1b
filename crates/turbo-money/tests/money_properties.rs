//! Behavioural laws of money values across currencies.

use turbo_money::prelude::*;
use turbo_money::Decimal;

const SAMPLES: &[&str] = &["0", "1", "-1", "0.01", "19.99", "1234.5", "-0.333"];

fn makers() -> Vec<MoneyMaker> {
    Currency::all().map(MoneyMaker::for_currency).collect()
}

#[test]
fn default_instance_is_nan_for_every_currency() {
    for maker in makers() {
        let nan = maker.nan();
        assert!(nan.is_nan());
        for sample in SAMPLES {
            assert_ne!(nan, maker.make(*sample).unwrap());
        }
    }
}

#[test]
fn addition_commutes_and_associates() {
    let maker = MoneyMaker::new("USD").unwrap();
    for a in SAMPLES {
        for b in SAMPLES {
            let (a, b) = (maker.make(*a).unwrap(), maker.make(*b).unwrap());
            assert_eq!((a + b).unwrap(), (b + a).unwrap());
            for c in SAMPLES {
                let c = maker.make(*c).unwrap();
                let left = ((a + b).unwrap() + c).unwrap();
                let right = (a + (b + c).unwrap()).unwrap();
                assert_eq!(left, right);
            }
        }
    }
}

#[test]
fn nan_is_additive_identity() {
    let maker = MoneyMaker::default();
    for sample in SAMPLES {
        let value = maker.make(*sample).unwrap();
        assert_eq!((value + maker.nan()).unwrap(), value);
        assert_eq!((maker.nan() + value).unwrap(), value);
    }
}

#[test]
fn finite_sums_are_exact() {
    let maker = MoneyMaker::default();
    let total = (maker.make("0.10").unwrap() + maker.make("0.20").unwrap()).unwrap();
    assert_eq!(total, Decimal::new(30, 2));
    assert_eq!(total.as_integer().unwrap(), 30);
}

#[test]
fn reduce_then_reconstruct_round_trips() {
    for maker in makers() {
        let mut values = vec![maker.nan(), maker.make("sNaN").unwrap()];
        values.extend(SAMPLES.iter().map(|s| maker.make(*s).unwrap()));
        for value in values {
            let (code, amount) = value.reduce();
            let back = Money::reconstruct(code, &amount).unwrap();
            assert_eq!(back, value);
            assert_eq!(back.get_currency(), value.get_currency());
        }
    }
}

#[test]
fn json_round_trips() {
    let maker = MoneyMaker::new("GBP").unwrap();
    for value in [maker.nan(), maker.make("12.345").unwrap()] {
        let json = serde_json::to_string(&value).unwrap();
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
    }
}

#[test]
fn multiplying_by_zero_or_none() {
    for maker in makers() {
        for sample in SAMPLES {
            let value = maker.make(*sample).unwrap();
            let zero = (value * 0).unwrap();
            assert!(zero.is_zero());
            assert_eq!(zero.currency(), maker.currency());
            assert!((value * None::<i64>).unwrap().is_nan());
        }
    }
}

#[test]
fn mixing_currencies_fails() {
    let euros = MoneyMaker::new("EUR").unwrap().make(1).unwrap();
    let francs = MoneyMaker::new("CHF").unwrap().make(1).unwrap();
    assert!(matches!(
        euros + francs,
        Err(MoneyError::CurrencyMismatch { .. })
    ));
}

#[test]
fn money_by_money_fails() {
    let maker = MoneyMaker::default();
    let (a, b) = (maker.make(2).unwrap(), maker.make(3).unwrap());
    assert!(matches!(a * b, Err(MoneyError::UnsupportedOperation { .. })));
    assert!(matches!(a / b, Err(MoneyError::UnsupportedOperation { .. })));
}

#[test]
fn rendering_defaults() {
    let maker = MoneyMaker::default();
    assert_eq!(maker.nan().to_string(), "\u{20ac} \u{2013}");
    assert_eq!(maker.make(1).unwrap().to_string(), "\u{20ac} 1.00");
}

#[test]
#[allow(clippy::eq_op)]
fn float_conversion_of_nan_states() {
    let maker = MoneyMaker::default();
    assert_eq!(
        maker.make("sNaN").unwrap().to_f64(),
        Err(MoneyError::SignalingNan)
    );
    let quiet = maker.make("NaN").unwrap().to_f64().unwrap();
    assert!(quiet != quiet);
}

#[test]
fn minor_units() {
    assert_eq!(
        MoneyMaker::default().make("1.23").unwrap().as_integer().unwrap(),
        123
    );
}
