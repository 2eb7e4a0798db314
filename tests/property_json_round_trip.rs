//! Property: JSON round-trip
//!
//! For any acyclic plain-data value, `decode(&encode(&x)?)?` reproduces
//! `x` field for field, and the decoded value answers the methods of its
//! target type.

use css_compose::{decode, encode, Rectangle};
use proptest::prelude::*;
use serde::{Deserialize, Serialize};

/// A payload covering common JSON value shapes: strings, integers,
/// finite floats, booleans, optional fields, and nested vectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Payload {
    text: String,
    number: i64,
    ratio: f64,
    flag: bool,
    optional: Option<String>,
    items: Vec<String>,
}

/// Strategy that produces an arbitrary `Payload`. Floats are kept finite
/// so equality after the round trip is meaningful.
fn arb_payload() -> impl Strategy<Value = Payload> {
    (
        ".*",
        any::<i64>(),
        -1e12f64..1e12,
        any::<bool>(),
        proptest::option::of(".*"),
        proptest::collection::vec(".*", 0..8),
    )
        .prop_map(|(text, number, ratio, flag, optional, items)| Payload {
            text,
            number,
            ratio,
            flag,
            optional,
            items,
        })
}

proptest! {
    #[test]
    fn payload_round_trips(payload in arb_payload()) {
        let text = encode(&payload).unwrap();
        let back: Payload = decode(&text).unwrap();
        prop_assert_eq!(back, payload);
    }

    #[test]
    fn decoded_rectangle_keeps_its_capabilities(
        width in -1e6f64..1e6,
        height in -1e6f64..1e6,
    ) {
        let rect = Rectangle::new(width, height);
        let back: Rectangle = decode(&encode(&rect).unwrap()).unwrap();
        prop_assert_eq!(back, rect);
        prop_assert_eq!(back.area(), width * height);
    }
}
