use wpforms_sync::config::parse_form_ids;

#[test]
fn test_parse_form_ids_comma_list() {
    assert_eq!(parse_form_ids("1,3,4,5,7").unwrap(), vec![1, 3, 4, 5, 7]);
}

#[test]
fn test_parse_form_ids_tolerates_spaces_and_trailing_comma() {
    assert_eq!(parse_form_ids(" 3, 4 ,5,").unwrap(), vec![3, 4, 5]);
}

#[test]
fn test_parse_form_ids_rejects_non_numeric() {
    let err = parse_form_ids("3,four").unwrap_err().to_string();
    assert!(err.contains("four"), "unexpected error: {}", err);
}
