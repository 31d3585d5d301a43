use elemental_core::{DetectionEvent, Element, ElementId, Outcome};

#[test]
fn element_id_serializes_as_plain_number() {
    let id = ElementId::new(26).unwrap();

    assert_eq!(serde_json::to_value(id).unwrap(), serde_json::json!(26));
    let decoded: ElementId = serde_json::from_value(serde_json::json!(26)).unwrap();
    assert_eq!(decoded, id);
}

#[test]
fn element_id_deserialize_rejects_out_of_range() {
    let err = serde_json::from_value::<ElementId>(serde_json::json!(-1)).unwrap_err();
    assert!(
        err.to_string().contains("atomic number -1 is outside 1..=118"),
        "unexpected error: {err}"
    );
}

#[test]
fn outcome_serialization_uses_snake_case_tags() {
    let outcome = Outcome::NewlyDiscovered {
        id: ElementId::new(8).unwrap(),
        points_awarded: 8,
        new_score: 14,
    };

    let json = serde_json::to_value(outcome).unwrap();
    assert_eq!(json["kind"], "newly_discovered");
    assert_eq!(json["id"], 8);
    assert_eq!(json["points_awarded"], 8);
    assert_eq!(json["new_score"], 14);

    let nothing = serde_json::to_value(Outcome::Nothing).unwrap();
    assert_eq!(nothing, serde_json::json!({ "kind": "nothing" }));
}

#[test]
fn detection_event_wire_shape() {
    let found = DetectionEvent::Found(ElementId::new(1).unwrap());
    assert_eq!(
        serde_json::to_value(found).unwrap(),
        serde_json::json!({ "kind": "found", "id": 1 })
    );
    assert_eq!(
        serde_json::to_value(DetectionEvent::NotFound).unwrap(),
        serde_json::json!({ "kind": "not_found" })
    );
}

#[test]
fn element_new_trims_fields() {
    let element = Element::new(" K ", ElementId::new(19).unwrap(), " Potassium", "39.098 ").unwrap();

    assert_eq!(element.symbol, "K");
    assert_eq!(element.name, "Potassium");
    assert_eq!(element.weight, "39.098");
}
