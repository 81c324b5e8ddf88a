use cupcake_core::{wire, Order, MAX_QUANTITY, MIN_QUANTITY, FLAVORS};
use proptest::prelude::*;

fn any_order() -> impl Strategy<Value = Order> {
    (
        0..FLAVORS.len() as i64,
        MIN_QUANTITY..=MAX_QUANTITY,
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        ".*",
        ".*",
        ".*",
        ".*",
    )
        .prop_map(
            |(flavor, quantity, extra_frosting, add_sprinkles, special_requests, name, street_address, city, zipcode)| Order {
                flavor,
                quantity,
                extra_frosting,
                add_sprinkles,
                name,
                street_address,
                city,
                zipcode,
                special_requests,
            },
        )
}

proptest! {
    #[test]
    fn round_trip_keeps_wire_fields(order in any_order()) {
        let decoded = wire::deserialize(&wire::serialize(&order).unwrap()).unwrap();
        prop_assert_eq!(decoded, Order { special_requests: false, ..order });
    }

    #[test]
    fn special_requests_never_serialized(order in any_order()) {
        let value: serde_json::Value = serde_json::from_slice(&wire::serialize(&order).unwrap()).unwrap();
        prop_assert!(value.get("specialRequests").is_none());
    }

    #[test]
    fn filled_shipping_is_valid(
        name in ".+",
        street_address in ".+",
        city in ".+",
        zipcode in ".+",
    ) {
        let order = Order { name, street_address, city, zipcode, ..Order::new() };
        prop_assert!(order.is_valid());
    }

    #[test]
    fn one_empty_shipping_field_is_invalid(order in any_order(), which in 0usize..4) {
        let mut order = Order {
            name: format!("n{}", order.name),
            street_address: format!("s{}", order.street_address),
            city: format!("c{}", order.city),
            zipcode: format!("z{}", order.zipcode),
            ..order
        };
        match which {
            0 => order.name.clear(),
            1 => order.street_address.clear(),
            2 => order.city.clear(),
            _ => order.zipcode.clear(),
        }
        prop_assert!(!order.is_valid());
    }
}
