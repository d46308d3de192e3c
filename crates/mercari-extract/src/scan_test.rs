use serde_json::json;

use super::*;

fn paths(findings: &[ScanFinding]) -> Vec<(String, Heuristic)> {
    findings
        .iter()
        .map(|f| (f.path.to_string(), f.heuristic))
        .collect()
}

#[test]
fn items_key_of_scalars_is_items_finding_only() {
    let root = json!({"a": {"b": {"items": [1, 2, 3]}}});
    let findings = scan_json_tree(&root, DEFAULT_SAMPLE_SIZE);
    assert_eq!(
        paths(&findings),
        vec![("a.b.items".to_string(), Heuristic::ItemsKey)]
    );
    assert_eq!(findings[0].sample, vec![json!(1), json!(2), json!(3)]);
}

#[test]
fn root_product_array_is_reported_at_empty_path() {
    let root = json!([{"name": "x", "price": 5}, {"name": "y", "price": 6}]);
    let findings = scan_json_tree(&root, DEFAULT_SAMPLE_SIZE);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].heuristic, Heuristic::ProductArray);
    assert_eq!(findings[0].path.to_string(), "");
    assert_eq!(
        findings[0].sample,
        vec![json!({"name": "x", "price": 5}), json!({"name": "y", "price": 6})]
    );
}

#[test]
fn sample_is_capped() {
    let root = json!({"items": [1, 2, 3, 4, 5]});
    let findings = scan_json_tree(&root, 3);
    assert_eq!(findings[0].sample.len(), 3);
    let findings = scan_json_tree(&root, 1);
    assert_eq!(findings[0].sample, vec![json!(1)]);
}

#[test]
fn product_array_accepts_every_name_and_price_key() {
    for (name_key, price_key) in [
        ("name", "price"),
        ("title", "price"),
        ("name", "prices"),
        ("title", "amount"),
    ] {
        let root = json!([{ name_key: "x", price_key: 1 }]);
        let findings = scan_json_tree(&root, DEFAULT_SAMPLE_SIZE);
        assert_eq!(findings.len(), 1, "{name_key}/{price_key}");
    }
}

#[test]
fn product_array_requires_both_keys() {
    assert!(scan_json_tree(&json!([{"name": "x"}]), 3).is_empty());
    assert!(scan_json_tree(&json!([{"price": 1}]), 3).is_empty());
}

#[test]
fn key_presence_counts_even_when_value_is_null() {
    let root = json!([{"title": null, "amount": null}]);
    assert_eq!(scan_json_tree(&root, 3).len(), 1);
}

#[test]
fn only_first_element_is_inspected() {
    let heterogeneous = json!([{"name": "x", "price": 1}, 7, "s"]);
    assert_eq!(scan_json_tree(&heterogeneous, 3).len(), 1);

    let late_product = json!([{"id": 1}, {"name": "x", "price": 1}]);
    assert!(scan_json_tree(&late_product, 3).is_empty());
}

#[test]
fn empty_and_null_first_arrays_do_not_fire() {
    assert!(scan_json_tree(&json!([]), 3).is_empty());
    assert!(scan_json_tree(&json!([null, {"name": "x", "price": 1}]), 3).is_empty());
}

#[test]
fn nested_array_as_first_element_does_not_fire() {
    let findings = scan_json_tree(&json!([[{"name": "x", "price": 1}]]), 3);
    assert_eq!(
        paths(&findings),
        vec![("0".to_string(), Heuristic::ProductArray)]
    );
}

#[test]
fn items_key_with_non_array_value_does_not_fire() {
    let root = json!({"items": {"name": "x", "price": 1}});
    assert!(scan_json_tree(&root, 3).is_empty());
}

#[test]
fn items_array_of_products_reports_both_heuristics_in_order() {
    let root = json!({"search": {"items": [{"name": "Bag", "price": 1200}]}});
    let findings = scan_json_tree(&root, DEFAULT_SAMPLE_SIZE);
    assert_eq!(
        paths(&findings),
        vec![
            ("search.items".to_string(), Heuristic::ItemsKey),
            ("search.items".to_string(), Heuristic::ProductArray),
        ]
    );
}

#[test]
fn findings_follow_document_pre_order() {
    let root = json!({
        "z": {"items": []},
        "a": [
            {"items": [1]},
            [{"title": "t", "amount": 3}]
        ],
        "items": ["last"]
    });
    let findings = scan_json_tree(&root, DEFAULT_SAMPLE_SIZE);
    assert_eq!(
        paths(&findings),
        vec![
            ("z.items".to_string(), Heuristic::ItemsKey),
            ("a.0.items".to_string(), Heuristic::ItemsKey),
            ("a.1".to_string(), Heuristic::ProductArray),
            ("items".to_string(), Heuristic::ItemsKey),
        ]
    );
}

#[test]
fn walk_continues_below_findings() {
    let root = json!({"items": [{"name": "outer", "price": 1, "items": [2]}]});
    let findings = scan_json_tree(&root, DEFAULT_SAMPLE_SIZE);
    assert_eq!(
        paths(&findings),
        vec![
            ("items".to_string(), Heuristic::ItemsKey),
            ("items".to_string(), Heuristic::ProductArray),
            ("items.0.items".to_string(), Heuristic::ItemsKey),
        ]
    );
}

#[test]
fn scalars_produce_no_findings() {
    for root in [json!(null), json!(1), json!("items"), json!(true)] {
        assert!(scan_json_tree(&root, 3).is_empty());
    }
}

#[test]
fn deep_nesting_does_not_overflow_the_stack() {
    let mut root = json!({"items": [0]});
    for _ in 0..10_000 {
        root = Value::Array(vec![root]);
    }
    let findings = scan_json_tree(&root, DEFAULT_SAMPLE_SIZE);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].path.segments().len(), 10_001);
    drop_iteratively(root);
}

#[test]
fn input_is_not_mutated() {
    let root = json!({"items": [{"name": "x", "price": 1}]});
    let before = root.clone();
    let _ = scan_json_tree(&root, 3);
    assert_eq!(root, before);
}

#[test]
fn render_finding_formats_heading_sample_and_separator() {
    let finding = ScanFinding {
        path: JsonPath::root().child(PathSegment::Key("a".into())).child(PathSegment::Index(2)),
        heuristic: Heuristic::ItemsKey,
        sample: vec![json!(1)],
    };
    assert_eq!(
        render_finding(&finding).unwrap(),
        "Found items array at a.2\n[\n  1\n]\n---"
    );

    let finding = ScanFinding {
        path: JsonPath::root(),
        heuristic: Heuristic::ProductArray,
        sample: vec![],
    };
    assert_eq!(
        render_finding(&finding).unwrap(),
        "Possible product array at \n[]\n---"
    );
}

#[test]
fn heuristic_labels() {
    assert_eq!(Heuristic::ProductArray.to_string(), "product-array");
    assert_eq!(Heuristic::ItemsKey.label(), "items-key");
}
