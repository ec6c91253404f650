use jsoneq_core::{assert::JsonAssertions, compare_subtree, AssertionError, JsonInput, Node};

#[test]
fn jsoneq_core_readme_example() -> Result<(), Box<dyn std::error::Error>> {
    let actual = Node::from_json_str(r#"{"items":[{"id":1},{"id":2},{"id":3}]}"#)?;
    let expected = Node::from_json_str(r#"{"items":[{"id":1},{"id":3}]}"#)?;
    assert!(compare_subtree(Some(&actual), Some(&expected))?.is_none());

    let reversed = Node::from_json_str(r#"{"items":[{"id":3},{"id":1}]}"#)?;
    let diff = compare_subtree(Some(&actual), Some(&reversed))?.expect("order matters");
    println!("{diff}");
    assert_eq!(diff.to_string(), "has expected element $.items[1] in the wrong order");
    Ok(())
}

#[test]
fn assertions_readme_example() -> Result<(), Box<dyn std::error::Error>> {
    let subject = Node::from_json_str(r#"{"id":42,"tags":["a","b"]}"#)?;
    let json = JsonAssertions::new(&subject);
    json.be_equivalent_to(r#"{"tags":["a","b"],"id":42}"#)?;
    json.contain_subtree(JsonInput::yaml("{ tags: [b] }"))?;

    let err = json.be_equivalent_to("{ invalid JSON }").unwrap_err();
    assert!(matches!(err, AssertionError::Parse(_)));
    Ok(())
}
