use cbor_item::{array, decode, dump, encode, item_to_json, json_to_item, map, DataItem};
use serde_json::json;

#[test]
fn command_payload_construction_and_access() {
    let args = array([
        DataItem::from("name"),
        DataItem::from(1024u64),
        DataItem::from(true),
    ]);
    let mut payload = DataItem::Map(Vec::new());
    payload.insert("c", "cmd").unwrap();
    payload.insert("a", args.clone()).unwrap();
    payload.insert("t", 2u64).unwrap();

    assert_eq!(payload.get(&"c".into()).unwrap().to_text(), "cmd");
    assert_eq!(payload.get(&"t".into()).unwrap().to_unsigned(), 2);
    let fetched = payload.get(&"a".into()).unwrap();
    assert_eq!(fetched, &args);
    assert_eq!(fetched.at(0).unwrap().to_text(), "name");
    assert_eq!(fetched.at(1).unwrap().to_unsigned(), 1024);
    assert!(fetched.at(2).unwrap().to_bool());

    // Overwrite through the map path.
    payload.insert("t", 3u64).unwrap();
    assert_eq!(payload.len(), 3);
    assert_eq!(payload.get(&"t".into()).unwrap().to_unsigned(), 3);

    // The whole payload survives the wire.
    let bytes = encode(&payload);
    assert_eq!(decode(&bytes).unwrap(), payload);
}

#[test]
fn mixed_key_maps_keep_total_order() {
    let item = map([
        (DataItem::from("a"), DataItem::from(123u64)),
        (DataItem::from(1u64), DataItem::from("aaa")),
    ]);
    // Unsigned keys order before text keys.
    let keys: Vec<DataItem> = item.iter().map(|r| r.key().unwrap().clone()).collect();
    assert_eq!(keys[0], DataItem::Unsigned(1));
    assert_eq!(keys[1], DataItem::from("a"));
    assert_eq!(item.get(&DataItem::Unsigned(1)).unwrap().to_text(), "aaa");
}

#[test]
fn traversal_over_decoded_values() {
    let bytes = encode(&map([("b", 2u64), ("a", 1u64)]));
    let item = decode(&bytes).unwrap();
    let rendered: Vec<String> = item
        .iter()
        .map(|r| format!("{}={}", r.key().unwrap(), r.value()))
        .collect();
    assert_eq!(rendered, ["\"a\"=1", "\"b\"=2"]);
}

#[test]
fn diagnostic_dump_of_a_compound_value() {
    let item = map([
        (DataItem::from("bin"), DataItem::Binary(vec![0x0f, 0xf0])),
        (DataItem::from("nested"), array([DataItem::Negative(0), DataItem::Float(2.5)])),
        (DataItem::from("tag"), DataItem::tagged(1, 1363896240u64)),
    ]);
    assert_eq!(
        dump(&item),
        "{\"bin\": h'0ff0', \"nested\": [-1, 2.5], \"tag\": 1(1363896240)}"
    );
}

#[test]
fn json_bridge_round_trip_through_the_wire() {
    let value = json!({
        "k": ["x", 1, -2, true, null, {"nested": "v"}],
        "n": 2.5
    });
    let item = json_to_item(&value);
    let bytes = encode(&item);
    let back = decode(&bytes).unwrap();
    assert_eq!(item_to_json(&back).unwrap(), value);
}
