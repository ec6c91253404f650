use jsoneq_core::{assert::JsonAssertions, JsonInput, Node, RenderConfig};

const FRIENDS: &str = r#"
    {
        friends: [{
                id: 123,
                name: "John Doe"
            }, {
                id: 456,
                name: "Jane Doe",
                kids: [
                    "Jimmy",
                    "James"
                ]
            }
        ]
    }
"#;

fn unix() -> RenderConfig {
    RenderConfig::default().with_line_ending("\n")
}

#[test]
fn absent_documents_are_equivalent() {
    JsonAssertions::new(None::<&Node>).be_equivalent_to(JsonInput::Absent).unwrap();
}

#[test]
fn identical_documents_are_equivalent() {
    let lhs = Node::from_yaml_str(FRIENDS).unwrap();
    let rhs = Node::from_yaml_str(FRIENDS).unwrap();
    JsonAssertions::new(&lhs).be_equivalent_to(&lhs).unwrap();
    JsonAssertions::new(&lhs).be_equivalent_to(&rhs).unwrap();
    JsonAssertions::new(&lhs).contain_subtree(&rhs).unwrap();
}

#[test]
fn property_against_array_reports_kinds() {
    let subject = Node::property("eyes", Node::from("blue"));
    let expected = Node::Array(Vec::new());
    let err = JsonAssertions::new(&subject)
        .with_render_config(unix())
        .be_equivalent_to(&expected)
        .unwrap_err();
    assert_eq!(
        err.failure_message().unwrap(),
        "JSON document has a property instead of an array at $.\n\
         Actual document\n\
         \"eyes\": \"blue\"\n\
         was expected to be equivalent to\n\
         [].\n"
    );
}

#[test]
fn property_names_must_match() {
    let subject = Node::property("eyes", Node::from("blue"));
    let expected = Node::property("hair", Node::from("black"));
    let err = JsonAssertions::new(&subject)
        .with_render_config(unix())
        .be_equivalent_to(&expected)
        .unwrap_err();
    assert!(err.failure_message().unwrap().starts_with("JSON document has a different name at $.\n"));
}

#[test]
fn subtree_success_cases() {
    let subject = Node::from_yaml_str("{ foo: 'foo', bar: 'bar', baz: 'baz' }").unwrap();
    JsonAssertions::new(&subject).contain_subtree(JsonInput::yaml(" { foo: 'foo', baz: 'baz' } ")).unwrap();

    let subject = Node::from_yaml_str(
        "{ foo: 'foo', bar: 'bar', child: { x: 1, y: 2, grandchild: { tag: 'abrakadabra' } } }",
    )
    .unwrap();
    JsonAssertions::new(&subject)
        .contain_subtree(JsonInput::yaml(" { child: { grandchild: { tag: 'abrakadabra' } } } "))
        .unwrap();

    let subject = Node::from_yaml_str("{ items: [ { id: 1 }, { id: 2 }, { id: 3 } ] }").unwrap();
    JsonAssertions::new(&subject)
        .contain_subtree(JsonInput::yaml(" { items: [ { id: 1 }, { id: 3 } ] } "))
        .unwrap();
}

#[test]
fn not_equivalent_to_own_text_fails() {
    let text = "{ \"id\": 1 }";
    let subject = Node::from_json_str(text).unwrap();
    let err = JsonAssertions::new(&subject).not_be_equivalent_to(text).unwrap_err();
    assert!(err.failure_message().unwrap().starts_with("Expected JSON document not to be equivalent"));
}

#[test]
fn multi_member_single_item_lists_members() {
    let subject = Node::from_yaml_str("{ id: 42, admin: true }").unwrap();
    let err = JsonAssertions::new(&subject).because("more is not allowed").contain_single_item().unwrap_err();
    assert_eq!(
        err.failure_message().unwrap(),
        "Expected JSON document {\"id\":42,\"admin\":true} to contain a single item \
         because more is not allowed, but found {\"id\":42,\"admin\":true}."
    );
}

#[test]
fn count_supports_chained_checks() {
    let subject = Node::from_yaml_str("{ id: 42 }").unwrap();
    let json = JsonAssertions::new(&subject);
    json.have_count(1).unwrap();
    json.be_equivalent_to(&subject).unwrap();
}
