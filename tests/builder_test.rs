//! Tests for TreeBuilder line processing

use famtree::domain::{DomainError, FamilyTree, TreeBuilder};

fn child_names(tree: &FamilyTree, name: &str) -> Vec<String> {
    let idx = tree.find(name).expect("name present");
    tree.get_node(idx)
        .unwrap()
        .children
        .iter()
        .map(|&c| tree.name_of(c).unwrap().to_string())
        .collect()
}

#[test]
fn given_empty_builder_when_processing_line_then_parent_becomes_root() {
    // Arrange
    let mut builder = TreeBuilder::new();

    // Act
    builder.process_line("A:B,C").unwrap();

    // Assert
    let tree = builder.finish();
    assert_eq!(tree.root().and_then(|r| tree.name_of(r)), Some("A"));
    assert_eq!(child_names(&tree, "A"), vec!["B", "C"]);
}

#[test]
fn given_child_declared_as_parent_later_when_processing_then_attaches_to_existing_node() {
    let mut builder = TreeBuilder::new();

    builder.process_line("A:B,C").unwrap();
    builder.process_line("B:D,E").unwrap();

    let tree = builder.finish();
    assert_eq!(tree.len(), 5);
    assert_eq!(child_names(&tree, "B"), vec!["D", "E"]);
}

#[test]
fn given_line_without_colon_when_processing_then_missing_separator_and_tree_unchanged() {
    let mut builder = TreeBuilder::new();
    builder.process_line("A:B").unwrap();
    let before = builder.tree().render();

    let err = builder.process_line("NoColonHere").unwrap_err();

    assert!(matches!(err, DomainError::MissingSeparator { .. }));
    assert_eq!(builder.tree().render(), before);
}

#[test]
fn given_line_without_colon_on_empty_tree_when_processing_then_no_root_created() {
    let mut builder = TreeBuilder::new();

    assert!(builder.process_line("NoColonHere").is_err());

    assert!(builder.tree().is_empty());
}

#[test]
fn given_unknown_parent_when_processing_then_parent_not_found_and_tree_unchanged() {
    let mut builder = TreeBuilder::new();
    builder.process_line("A:B").unwrap();

    let err = builder.process_line("Z:W").unwrap_err();

    match err {
        DomainError::ParentNotFound(name) => assert_eq!(name, "Z"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(builder.tree().len(), 2);
    assert!(builder.tree().find("W").is_none());
}

#[test]
fn given_spaces_after_separators_when_processing_then_names_keep_spaces() {
    let tree = TreeBuilder::build_from_lines(["A: B, C"]).unwrap();

    assert_eq!(child_names(&tree, "A"), vec![" B", " C"]);
    assert!(tree.find("B").is_none());
    assert!(tree.find(" B").is_some());
}

#[test]
fn given_repeated_child_name_when_processing_then_creates_independent_nodes() {
    // X appears under B and under C; lookup resolves to the first pre-order match
    let tree = TreeBuilder::build_from_lines(["A:B,C", "B:X", "C:X", "X:Y"]).unwrap();

    assert_eq!(tree.len(), 6);
    let y = tree.find("Y").unwrap();
    let chain: Vec<_> = tree
        .ancestor_chain(y)
        .into_iter()
        .map(|idx| tree.name_of(idx).unwrap().to_string())
        .collect();
    assert_eq!(chain, vec!["X", "B", "A"]);

    // MRCA follows the first X, under B
    let mrca = tree.most_recent_common_ancestor("Y", "C").unwrap();
    assert_eq!(tree.name_of(mrca), Some("A"));
}

#[test]
fn given_root_name_repeated_as_parent_when_processing_then_extends_root() {
    let tree = TreeBuilder::build_from_lines(["A:B", "A:C"]).unwrap();

    assert_eq!(child_names(&tree, "A"), vec!["B", "C"]);
}

#[test]
fn given_bad_third_line_when_building_then_aborts_with_line_number() {
    let err = TreeBuilder::build_from_lines(["A:B,C", "B:D", "Q:R", "C:S"]).unwrap_err();

    match &err {
        DomainError::Line { line_no, source } => {
            assert_eq!(*line_no, 3);
            assert!(matches!(**source, DomainError::ParentNotFound(ref n) if n == "Q"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.to_string(), "line 3: parent not found in tree: Q");
}

#[test]
fn given_no_lines_when_building_then_tree_is_empty() {
    let tree = TreeBuilder::build_from_lines(Vec::<String>::new()).unwrap();

    assert!(tree.is_empty());
    assert_eq!(tree.render(), "");
}
