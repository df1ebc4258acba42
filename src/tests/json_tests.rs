// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use serde_json::{json, Value};

use super::fixtures::*;
use crate::codec::Record;
use crate::error::{CodecError, DecodeError};
use crate::records::{Header, L1BlockInfo, Transaction};
use crate::types::TaggedBase64;

const HEADER_JSON: &str = concat!(
    r#"{"height":42,"timestamp":789,"l1_head":124,"#,
    r#""l1_finalized":{"number":123,"timestamp":"0x456","#,
    r#""hash":"0x0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef"},"#,
    r#""payload_commitment":"HASH~1yS-KEtL3oDZDBJdsW51Pd7zywIiHesBZsTbpOzrxOfu","#,
    r#""block_merkle_tree_root":"MERKLE_COMM~yB4_Aqa35_PoskgTpcCR1oVLh6BUdLHIs7erHKWi-usUAAAAAAAAAAEAAAAAAAAAJg","#,
    r#""fee_merkle_tree_root":"MERKLE_COMM~VJ9z239aP9GZDrHp3VxwPd_0l28Hc5KEAB1pFeCIxhYgAAAAAAAAAAIAAAAAAAAAdA"}"#
);

fn assert_missing(err: CodecError, key: &str) {
    match err {
        CodecError::Decode(DecodeError::MissingField { field, .. }) => assert_eq!(field, key),
        other => panic!("expected missing `{key}`, got {other:?}"),
    }
}

fn without(json: &str, key: &str) -> Value {
    let mut value: Value = serde_json::from_str(json).unwrap();
    value.as_object_mut().unwrap().remove(key);
    value
}

#[test]
fn test_l1_block_encoding() {
    assert_eq!(l1_block().to_json().unwrap(), L1_JSON);
    assert_eq!(L1BlockInfo::from_json(L1_JSON).unwrap(), l1_block());
}

#[test]
fn test_header_encoding() {
    let encoded = header().to_json().unwrap();
    assert_eq!(encoded, HEADER_JSON);
    let decoded = Header::from_json(HEADER_JSON).unwrap();
    assert_eq!(decoded, header());
    assert_eq!(decoded.to_json().unwrap(), HEADER_JSON);
}

#[test]
fn test_transaction_encoding() {
    assert_eq!(transaction().to_json().unwrap(), TRANSACTION_JSON);
    assert_eq!(Transaction::from_json(TRANSACTION_JSON).unwrap(), transaction());

    let empty = Transaction::new(7, Vec::new());
    assert_eq!(empty.to_json().unwrap(), r#"{"vm":7,"payload":[]}"#);
}

#[test]
fn test_header_without_l1_omits_key() {
    let mut h = header();
    h.l1_finalized = None;
    let encoded = h.to_json().unwrap();
    assert!(!encoded.contains("l1_finalized"));
    assert_eq!(Header::from_json(&encoded).unwrap(), h);
}

#[test]
fn test_null_l1_finalized_reads_as_absent() {
    let mut value: Value = serde_json::from_str(HEADER_JSON).unwrap();
    value["l1_finalized"] = Value::Null;
    let h = Header::from_json_value(value).unwrap();
    assert_eq!(h.l1_finalized, None);
}

#[test]
fn test_missing_required_key_fails() {
    for key in L1BlockInfo::schema().required() {
        let err = L1BlockInfo::from_json_value(without(L1_JSON, key)).unwrap_err();
        assert_missing(err, key);
    }

    for key in Header::schema().required() {
        let err = Header::from_json_value(without(HEADER_JSON, key)).unwrap_err();
        assert_missing(err, key);
    }

    for key in Transaction::schema().required() {
        let err = Transaction::from_json_value(without(TRANSACTION_JSON, key)).unwrap_err();
        assert_missing(err, key);
    }
}

#[test]
fn test_required_key_sets() {
    assert_eq!(
        L1BlockInfo::schema().required().collect::<Vec<_>>(),
        ["number", "timestamp", "hash"]
    );
    assert_eq!(
        Header::schema().required().collect::<Vec<_>>(),
        [
            "height",
            "timestamp",
            "l1_head",
            "payload_commitment",
            "block_merkle_tree_root",
            "fee_merkle_tree_root"
        ]
    );
    assert_eq!(Header::schema().optional().collect::<Vec<_>>(), ["l1_finalized"]);
    assert_eq!(
        Transaction::schema().required().collect::<Vec<_>>(),
        ["vm", "payload"]
    );
}

#[test]
fn test_nested_l1_missing_key_fails() {
    let mut value: Value = serde_json::from_str(HEADER_JSON).unwrap();
    value["l1_finalized"].as_object_mut().unwrap().remove("hash");
    let err = Header::from_json_value(value).unwrap_err();
    assert!(matches!(
        err,
        CodecError::Decode(DecodeError::MissingField {
            record: "L1BlockInfo",
            field: "hash"
        })
    ));
}

#[test]
fn test_type_mismatches_fail() {
    let cases = [
        json!({"number": 123, "timestamp": "1110", "hash": L1_HASH}),
        json!({"number": 123, "timestamp": 1110, "hash": L1_HASH}),
        json!({"number": "123", "timestamp": "0x456", "hash": L1_HASH}),
        json!({"number": 123, "timestamp": "0x456", "hash": "0x0123"}),
        json!({"number": 123, "timestamp": "0xzz", "hash": L1_HASH}),
    ];
    for case in cases {
        let err = L1BlockInfo::from_json_value(case).unwrap_err();
        assert!(
            matches!(err, CodecError::Decode(DecodeError::InvalidField { .. })),
            "{err:?}"
        );
    }

    assert!(Transaction::from_json(r#"{"vm":0,"payload":"AQID"}"#).is_err());
    assert!(Transaction::from_json(r#"{"vm":0,"payload":[256]}"#).is_err());
    assert!(Transaction::from_json(r#"{"vm":-1,"payload":[]}"#).is_err());
}

#[test]
fn test_wrong_role_tag_fails() {
    let mut value: Value = serde_json::from_str(HEADER_JSON).unwrap();
    value["block_merkle_tree_root"] = json!(header().payload_commitment.to_string());
    assert!(Header::from_json_value(value).is_err());

    let mut value: Value = serde_json::from_str(HEADER_JSON).unwrap();
    value["payload_commitment"] = json!(BLOCK_MERKLE_ROOT);
    assert!(Header::from_json_value(value).is_err());
}

#[test]
fn test_malformed_tagged_value_fails() {
    let short = TaggedBase64::new("HASH", &[7u8; 31]).unwrap().to_string();
    let cases = [
        ("payload_commitment", json!(short)),
        ("payload_commitment", json!("HASH~not base64")),
        ("payload_commitment", json!("HASH1yS-KEtL3oDZDBJdsW51Pd7zywIiHesBZsTbpOzrxOfu")),
        ("block_merkle_tree_root", json!("MERKLE_COMM~")),
        ("fee_merkle_tree_root", json!(7)),
    ];
    for (key, bad) in cases {
        let mut value: Value = serde_json::from_str(HEADER_JSON).unwrap();
        value[key] = bad;
        let err = Header::from_json_value(value).unwrap_err();
        assert!(
            matches!(err, CodecError::Decode(DecodeError::InvalidField { .. })),
            "{key}: {err:?}"
        );
    }
}

#[test]
fn test_unknown_keys_are_tolerated() {
    let mut value: Value = serde_json::from_str(L1_JSON).unwrap();
    value["extra"] = json!("ignored");
    assert_eq!(L1BlockInfo::from_json_value(value).unwrap(), l1_block());
}

#[test]
fn test_invalid_documents() {
    assert!(matches!(
        L1BlockInfo::from_json("{"),
        Err(CodecError::Decode(DecodeError::Json(_)))
    ));
    assert!(matches!(
        Transaction::from_json("[0, [1]]"),
        Err(CodecError::Decode(DecodeError::NotAnObject { record: "Transaction" }))
    ));
}
