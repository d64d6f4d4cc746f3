//! Properties of response decoding

use proptest::prelude::*;
use ticketwatch::client::{decode_many, decode_one};
use ticketwatch::error::ClientError;
use ticketwatch::model::Terminal;

/// Arbitrary bytes either decode or fail with a schema error, never panic
#[test]
fn test_decode_arbitrary_bytes_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&any::<Vec<u8>>(), |body| {
            if let Err(err) = decode_many::<Terminal>(&body) {
                prop_assert!(matches!(err, ClientError::Schema(_)));
            }
            if let Err(err) = decode_one::<Terminal>(&body) {
                prop_assert!(matches!(err, ClientError::Schema(_)));
            }
            Ok(())
        })
        .unwrap();
}

/// Decoding a list keeps the server's order
#[test]
fn test_decode_many_order_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&proptest::collection::vec((any::<u64>(), "[a-zA-Z ]{0,12}"), 0..20), |items| {
            let terminals: Vec<Terminal> = items
                .iter()
                .map(|(id, name)| Terminal {
                    id: *id,
                    name: name.clone(),
                })
                .collect();
            let body = serde_json::to_vec(&terminals).unwrap();
            let decoded = decode_many::<Terminal>(&body).unwrap();
            prop_assert_eq!(decoded, terminals);
            Ok(())
        })
        .unwrap();
}
