use csv_select::projection::MalformedRowPolicy;
use csv_select::selection::{select_from_path, select_from_reader, select_from_str, SelectOptions, SelectionRequest};
use csv_select::SelectError;

const SCENARIO: &str = "col1,col2,col3\nx,y,1\nx,y,2\nz,w,3\n";

fn render(sel: &csv_select::selection::Selection) -> String {
    let mut out = Vec::new();
    sel.write_to(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn run_str(csv: &str, columns: &str, filters: &str) -> csv_select::selection::Selection {
    select_from_str(csv, columns, filters, &SelectOptions::default()).unwrap()
}

#[test]
fn greater_than_keeps_larger_values() {
    let sel = run_str(SCENARIO, "col1,col3", "col3>1");
    assert_eq!(render(&sel), "col1,col3\nx,2\nz,3\n");
    assert!(sel.issues.is_empty());
}

#[test]
fn not_equal_removes_matching_literal() {
    let sel = run_str(SCENARIO, "col1,col3", "col3!=2");
    assert_eq!(render(&sel), "col1,col3\nx,1\nz,3\n");
}

#[test]
fn empty_filter_block_passes_all_rows_in_order() {
    let sel = run_str(SCENARIO, "col1,col3", "");
    assert_eq!(render(&sel), "col1,col3\nx,1\nx,2\nz,3\n");
}

#[test]
fn output_columns_follow_selection_order() {
    let sel = run_str(SCENARIO, "col3,col1", "");
    assert_eq!(render(&sel), "col3,col1\n1,x\n2,x\n3,z\n");
}

#[test]
fn unknown_selected_column_is_absent_and_filters_on_it_drop_rows() {
    let sel = run_str(SCENARIO, "col1,col9", "");
    assert_eq!(render(&sel), "col1\nx\nx\nz\n");
    assert!(matches!(&sel.issues[0], SelectError::UnknownColumn { column } if column == "col9"));

    let sel = run_str(SCENARIO, "col1,col9", "col9=1");
    assert!(sel.table.is_empty());
    assert_eq!(render(&sel), "");
    let missing: Vec<_> = sel
        .issues
        .iter()
        .filter(|e| matches!(e, SelectError::MissingColumn { .. }))
        .collect();
    assert_eq!(missing.len(), 1);
    assert!(missing[0].to_string().contains("col9=1"));
}

#[test]
fn filters_on_unselected_columns_are_missing_columns() {
    let sel = run_str(SCENARIO, "col1", "col3>1");
    assert!(sel.table.is_empty());
    assert!(matches!(&sel.issues[0], SelectError::MissingColumn { column, .. } if column == "col3"));
}

#[test]
fn invalid_filter_line_is_skipped() {
    let sel = run_str(SCENARIO, "col1,col3", "col3 ~ 1\ncol1=x");
    assert_eq!(render(&sel), "col1,col3\nx,1\nx,2\n");
    assert_eq!(sel.issues.len(), 1);
    assert!(sel.issues[0].to_string().contains("col3 ~ 1"));
}

#[test]
fn filter_block_is_a_conjunction() {
    let combined = run_str(SCENARIO, "col1,col3", "col1=x\ncol3>=2");
    let first = run_str(SCENARIO, "col1,col3", "col1=x");
    let mut table = first.table.clone();
    csv_select::predicate::run(&mut table, "col3>=2");
    assert_eq!(combined.table, table);
    assert_eq!(render(&combined), "col1,col3\nx,2\n");
}

#[test]
fn data_file_with_not_equal_filter() {
    let sel = select_from_path(
        "tests/fixtures/data.csv",
        "col1,col4,col3,col5",
        "col3!=l3c3",
        &SelectOptions::default(),
    )
    .unwrap();
    assert_eq!(
        render(&sel),
        "col1,col4,col3,col5\n\
         l1c1,l1c4,l1c3,l1c5\n\
         l2c1,l2c4,l2c3,l2c5\n\
         l4c1,l4c4,l4c3,l4c5\n"
    );
}

#[test]
fn comparisons_are_ordinal_not_numeric() {
    let filters = std::fs::read_to_string("tests/fixtures/people_filters.txt").unwrap();
    let sel = select_from_path("tests/fixtures/people.csv", "name,age,city", &filters, &SelectOptions::default())
        .unwrap();
    // "9" >= "30" and "100" < "30" under byte-wise ordering.
    assert_eq!(render(&sel), "name,age,city\nalice,34,paris\nbob,9,berlin\n");
}

#[test]
fn missing_file_is_an_io_error() {
    let err = select_from_path("tests/fixtures/does_not_exist.csv", "a", "", &SelectOptions::default())
        .unwrap_err();
    assert!(matches!(err, SelectError::Io(_)));
}

#[test]
fn short_rows_are_skipped_and_reported() {
    let sel = select_from_path("tests/fixtures/short_rows.csv", "id,score", "", &SelectOptions::default())
        .unwrap();
    assert_eq!(render(&sel), "id,score\n1,90\n3,75\n");
    assert!(matches!(
        sel.issues[0],
        SelectError::MalformedRow { line: 3, required: 3, found: 2 }
    ));
    assert!(sel.issues.iter().all(SelectError::is_recoverable));
}

#[test]
fn short_rows_can_be_padded() {
    let opts = SelectOptions {
        malformed_rows: MalformedRowPolicy::FillEmpty,
        ..Default::default()
    };
    let sel = select_from_path("tests/fixtures/short_rows.csv", "id,score", "", &opts).unwrap();
    assert_eq!(render(&sel), "id,score\n1,90\n2,\n3,75\n");
}

#[test]
fn short_rows_can_abort() {
    let opts = SelectOptions {
        malformed_rows: MalformedRowPolicy::Abort,
        ..Default::default()
    };
    let err = select_from_path("tests/fixtures/short_rows.csv", "id,score", "", &opts).unwrap_err();
    assert!(matches!(err, SelectError::MalformedRow { line: 3, .. }));
}

#[test]
fn reader_input_matches_string_input() {
    let from_reader = select_from_reader(SCENARIO.as_bytes(), "scenario", "col1,col3", "col3<3", &SelectOptions::default())
        .unwrap();
    let from_str = run_str(SCENARIO, "col1,col3", "col3<3");
    assert_eq!(from_reader.table, from_str.table);
}

#[test]
fn job_file_runs_end_to_end() {
    let req = SelectionRequest::from_json_path("tests/fixtures/job.json").unwrap();
    let sel = req.run(&SelectOptions::default()).unwrap();
    assert_eq!(sel.stats.rows_projected, 4);
    assert_eq!(sel.stats.rows_selected, 3);
    assert!(render(&sel).starts_with("col1,col4,col3,col5\nl1c1,"));
}

#[test]
fn invalid_utf8_line_is_skipped_and_reported() {
    let sel = select_from_path("tests/fixtures/invalid_utf8.csv", "a,b", "", &SelectOptions::default())
        .unwrap();
    assert_eq!(render(&sel), "a,b\n1,2\n4,5\n");
    assert!(matches!(sel.issues[..], [SelectError::InvalidEncoding { line: 3 }]));
}

#[test]
fn invalid_utf8_line_can_abort() {
    let opts = SelectOptions {
        malformed_rows: MalformedRowPolicy::Abort,
        ..Default::default()
    };
    let err = select_from_path("tests/fixtures/invalid_utf8.csv", "a,b", "", &opts).unwrap_err();
    assert!(matches!(err, SelectError::InvalidEncoding { line: 3 }));
}

#[test]
fn reader_strips_carriage_returns() {
    let sel = select_from_reader(&b"a,b\r\n1,2\r\n"[..], "crlf", "b", "", &SelectOptions::default()).unwrap();
    assert_eq!(render(&sel), "b\n2\n");
}

#[test]
fn no_resolved_columns_writes_nothing() {
    let sel = run_str("a,b\n1,2\n3,4\n", "zz", "");
    assert_eq!(render(&sel), "");
    assert!(matches!(&sel.issues[..], [SelectError::UnknownColumn { column }] if column == "zz"));
}
