use densetree::model::{DenseArray, LabeledTable, Value};
use densetree::path::{CURRENT, enumerate_paths};
use densetree::TableError;

/// The 4x4x4 example array: every axis indexed by (CURRENT, A, B, C).
fn example_array() -> DenseArray {
    let block = |first: i64| {
        vec![
            first, 2, 3, 4, //
            4, 5, 6, 7, //
            7, 8, 9, 10, //
            10, 11, 12, 13,
        ]
    };
    let data = [block(1), block(5), block(7), block(7)].concat();
    DenseArray::from_shape_vec(4, 3, data).unwrap()
}

fn example_table() -> LabeledTable {
    LabeledTable::from_array(example_array(), &["A", "B", "C"]).unwrap()
}

// ============= Construction Tests =============
#[test]
fn test_new_table_is_zero_filled_and_square() {
    let table = LabeledTable::new(&["A", "B", "C"], 4);
    assert_eq!(table.depth(), 4);
    assert_eq!(table.num_headers(), 4);
    assert_eq!(table.array().shape(), vec![4, 4, 4, 4]);
    assert!(table.array().as_slice().iter().all(|&v| v == 0));
    assert!(!table.ignore_item_type());
}

#[test]
fn test_from_array_takes_depth_from_array() {
    let table = example_table();
    assert_eq!(table.depth(), 3);
    assert_eq!(table.headers().headers(), &["", "A", "B", "C"]);
}

#[test]
fn test_into_array_returns_storage() {
    let mut table = example_table();
    table.write_scalar(99, &["B", "B", "B"]).unwrap();
    let array = table.into_array();
    assert_eq!(array.get(&[2, 2, 2]), Some(99));
}

// ============= Resolve / Complete Tests =============
#[test]
fn test_resolve_maps_labels_to_indices() {
    let table = example_table();
    assert_eq!(table.resolve(&["C", "A", CURRENT]).unwrap(), vec![3, 1, 0]);
    assert_eq!(table.resolve(&["B"]).unwrap(), vec![2]);
    assert!(table.resolve::<&str>(&[]).unwrap().is_empty());
}

#[test]
fn test_resolve_too_many_labels() {
    let table = example_table();
    let result = table.resolve(&["A", "A", "A", "A"]);
    assert_eq!(result, Err(TableError::TooManyLabels { len: 4, depth: 3 }));
}

#[test]
fn test_resolve_unknown_label() {
    let table = example_table();
    let result = table.resolve(&["A", "Moa"]);
    assert_eq!(result, Err(TableError::UnknownLabel { label: "Moa".to_string() }));
}

#[test]
fn test_complete_in_depth_four() {
    let table = LabeledTable::new(&["A", "B", "C"], 4);
    assert_eq!(table.complete(&["A", CURRENT]), vec!["A", CURRENT, CURRENT, CURRENT]);
    assert_eq!(table.complete(&["A", "B"]), vec!["A", "B"]);
}

// ============= Read Tests =============
#[test]
fn test_read_any_full_path_is_scalar() {
    let table = example_table();
    assert_eq!(table.read_any(&["A", "C", "A"]).unwrap(), Value::Scalar(11));
}

#[test]
fn test_read_any_short_path_is_branch() {
    let table = example_table();
    let value = table.read_any(&["A", "C"]).unwrap();
    let view = value.as_branch().unwrap();
    assert_eq!(view.ndim(), 1);
    assert_eq!(view.as_slice(), &[10, 11, 12, 13]);

    let view = table.read_any(&["A"]).unwrap().as_branch().unwrap();
    assert_eq!(view.shape(), vec![4, 4]);
}

#[test]
fn test_read_any_empty_path_is_whole_array() {
    let table = example_table();
    let view = table.read_any::<&str>(&[]).unwrap().as_branch().unwrap();
    assert_eq!(view.to_dense(), example_array());
}

#[test]
fn test_read_current_completes_to_branch_value() {
    let table = example_table();
    // (CURRENT,) is the value of the whole tree, (A, CURRENT) the one of branch A
    assert_eq!(table.read_any(&[CURRENT]).unwrap(), Value::Scalar(1));
    assert_eq!(table.read_scalar(&["A", CURRENT]).unwrap(), 5);
    assert_eq!(table.read_scalar(&["B", "A", CURRENT]).unwrap(), 4);
}

#[test]
fn test_read_misplaced_current() {
    let table = example_table();
    let result = table.read_any(&[CURRENT, "A"]);
    assert!(matches!(result, Err(TableError::MisplacedCurrent { position: 1, .. })));
    assert!(matches!(table.read_scalar(&["A", CURRENT, "B"]), Err(TableError::MisplacedCurrent { .. })));
}

#[test]
fn test_read_unknown_label() {
    let table = example_table();
    let result = table.read_any(&["Moa"]);
    assert_eq!(result, Err(TableError::UnknownLabel { label: "Moa".to_string() }));
}

#[test]
fn test_read_too_many_labels() {
    let table = example_table();
    let result = table.read_scalar(&["A", "A", "A", "A"]);
    assert_eq!(result, Err(TableError::TooManyLabels { len: 4, depth: 3 }));
}

#[test]
fn test_read_scalar_rejects_branch() {
    let table = example_table();
    let result = table.read_scalar(&["A", "C"]);
    assert_eq!(
        result,
        Err(TableError::NotAScalar { path: vec!["A".to_string(), "C".to_string()], remaining_axes: 1 })
    );
}

#[test]
fn test_read_respects_ignore_item_type() {
    let mut table = example_table();
    assert!(matches!(table.read(&["A"]), Err(TableError::NotAScalar { .. })));
    assert_eq!(table.read(&["A", CURRENT]).unwrap(), Value::Scalar(5));

    table.set_ignore_item_type(true);
    let value = table.read(&["A", "C"]).unwrap();
    assert!(!value.is_scalar());
    assert_eq!(value.to_string(), "[10, 11, 12, 13]");
}

// ============= Write Tests =============
#[test]
fn test_read_after_write_for_every_full_path() {
    let mut table = LabeledTable::new(&["A", "B", "C"], 3);
    let paths: Vec<Vec<String>> = enumerate_paths(table.headers().headers(), 3)
        .map(|path| path.into_iter().map(String::from).collect())
        .collect();

    for (value, path) in paths.iter().enumerate() {
        table.write_scalar(value as i64 + 100, path).unwrap();
    }
    for (value, path) in paths.iter().enumerate() {
        assert_eq!(table.read_scalar(path).unwrap(), value as i64 + 100);
    }
}

#[test]
fn test_write_scalar_does_not_complete_path() {
    let mut table = LabeledTable::new(&["A", "B", "C"], 3);
    let result = table.write_scalar(34, &["C", CURRENT]);
    assert!(matches!(result, Err(TableError::NotAScalar { remaining_axes: 1, .. })));
}

#[test]
fn test_write_scalar_errors() {
    let mut table = LabeledTable::new(&["A", "B"], 2);
    assert!(matches!(table.write_scalar(1, &["A", "B", "A"]), Err(TableError::TooManyLabels { .. })));
    assert!(matches!(table.write_scalar(1, &["A", "Kiwi"]), Err(TableError::UnknownLabel { .. })));
    assert!(table.array().as_slice().iter().all(|&v| v == 0));
}

#[test]
fn test_write_any_broadcasts_over_branch() {
    let mut table = LabeledTable::new(&["A", "B"], 3);
    table.write_any(9, &["B"]).unwrap();

    assert_eq!(table.read_scalar(&["B", CURRENT]).unwrap(), 9);
    assert_eq!(table.read_scalar(&["B", "A", "B"]).unwrap(), 9);
    assert_eq!(table.read_scalar(&["A", "B", "B"]).unwrap(), 0);

    table.write_any(-1, &[] as &[&str]).unwrap();
    assert!(table.array().as_slice().iter().all(|&v| v == -1));
}

// ============= End-to-end Tests =============
#[test]
fn test_write_then_read_diagonal_cell() {
    let mut table = example_table();
    table.write_scalar(34, &["C", "A", CURRENT]).unwrap();

    assert_eq!(table.read_scalar(&["C", "A", CURRENT]).unwrap(), 34);
    assert_eq!(table.array().get(&[3, 1, 0]), Some(34));
    // Sibling cells keep their values
    assert_eq!(table.read_scalar(&["C", "A", "A"]).unwrap(), 5);
}

#[test]
fn test_default_depth_four_example() {
    let mut table = LabeledTable::new(&["A", "B", "C"], 4);
    table.write_scalar(123, &["A", "A", "A", CURRENT]).unwrap();

    let branch = table.read_any(&["A", "A", "A"]).unwrap().as_branch().unwrap();
    assert_eq!(branch.as_slice(), &[123, 0, 0, 0]);
    assert_eq!(table.read_scalar(&["A", "A", "A", CURRENT]).unwrap(), 123);
}
