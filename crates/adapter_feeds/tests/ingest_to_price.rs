//! Feed-to-price round trip: payloads in, theoretical prices out.

use adapter_feeds::{parse_eia_response, parse_quotes_csv};
use pricer_core::calendar::BusinessCalendar;
use pricer_core::types::Date;
use pricer_models::instruments::{DeliveryMonth, FuturesOption, InstrumentKind, OptionKind};
use pricer_pricing::store::InMemoryStore;
use pricer_pricing::{MarketParams, PricingEngine};

#[test]
fn test_csv_feed_drives_pricing() {
    let csv = "\
settlement_date,product_name,delivery_month,futures_price
2025-01-02,Crude Oil,2025-06,80.00
2025-01-03,Crude Oil,2025-06,81.25
2025-01-02,Natural Gas,2025-03,3.40
";
    let store: InMemoryStore = parse_quotes_csv(csv.as_bytes()).unwrap().into_iter().collect();
    assert_eq!(store.len(), 3);

    let engine = PricingEngine::new(
        store,
        BusinessCalendar::us_federal(2024..=2026),
        MarketParams::default(),
    );

    let option = FuturesOption::new(
        OptionKind::Call,
        InstrumentKind::CrudeOil,
        DeliveryMonth::new(2025, 6).unwrap(),
        70.0,
    )
    .unwrap();
    let result = engine
        .price(&option, Date::from_ymd(2025, 1, 3).unwrap())
        .unwrap();

    // The 2025-01-03 settlement (81.25) is the latest quote, so the deep
    // ITM call is worth at least its discounted intrinsic against it.
    let floor = (-0.05f64 * result.time_to_expiration).exp() * (81.25 - 70.0);
    assert!(result.price >= floor - 1e-6);
}

#[test]
fn test_eia_feed_drives_pricing() {
    let body = r#"{
        "response": {
            "data": [
                {
                    "period": "2025-01-02",
                    "product-name": "Crude Oil",
                    "process-name": "Future Contract 1",
                    "value": 80.15
                }
            ]
        }
    }"#;

    let quotes = parse_eia_response(body).unwrap();
    let delivery = quotes[0].delivery();
    assert_eq!(delivery, DeliveryMonth::new(2025, 3).unwrap());

    let store: InMemoryStore = quotes.into_iter().collect();
    let engine = PricingEngine::new(
        store,
        BusinessCalendar::us_federal(2024..=2026),
        MarketParams::default(),
    );

    let option =
        FuturesOption::new(OptionKind::Put, InstrumentKind::CrudeOil, delivery, 85.0).unwrap();
    let result = engine
        .price(&option, Date::from_ymd(2025, 1, 2).unwrap())
        .unwrap();
    assert!(result.price > 0.0);
    assert!(result.time_to_expiration > 0.0);
}
