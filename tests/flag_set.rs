//! Integration tests for flag registration and the parse loop.

use listflags::config::ParseConfig;
use listflags::{FlagError, FlagSet, SharedList, ValueError};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// =============================================================================
// END-TO-END
// =============================================================================

#[test]
fn parse_string_list_var() {
    let mut regions = Vec::new();
    let mut flags = FlagSet::new("TestTags");
    flags
        .string_list_var(&mut regions, &[], "to", "Regions to be used")
        .unwrap();
    flags.parse(["-to", "us-east-1,eu-west-2"]).unwrap();
    drop(flags);

    assert_eq!(regions, strings(&["us-east-1", "eu-west-2"]));
}

#[test]
fn parse_string_list_handle() {
    let mut flags = FlagSet::new("TestTags");
    let regions = flags.string_list(&[], "to", "Regions to be used").unwrap();
    flags.parse(["-to", "us-east-1,eu-west-2"]).unwrap();

    assert_eq!(regions.to_vec(), strings(&["us-east-1", "eu-west-2"]));
}

#[test]
fn parse_int_list_var() {
    let mut ids = Vec::new();
    let mut flags = FlagSet::new("TestTags");
    flags.int_list_var(&mut ids, "ids", "Ids to be used").unwrap();
    flags.parse(["-ids", "123,456"]).unwrap();
    drop(flags);

    assert_eq!(ids, vec![123, 456]);
}

#[test]
fn parse_both_lists_with_equals_and_double_dash() {
    let mut regions = Vec::new();
    let mut ids = Vec::new();
    let mut flags = FlagSet::new("test");
    flags.string_list_var(&mut regions, &[], "to", "").unwrap();
    flags.int_list_var(&mut ids, "ids", "").unwrap();
    flags.parse(["--to=a,b", "-ids=1,2,3"]).unwrap();
    assert!(flags.is_set("to"));
    assert!(flags.is_set("ids"));
    drop(flags);

    assert_eq!(regions, strings(&["a", "b"]));
    assert_eq!(ids, vec![1, 2, 3]);
}

// =============================================================================
// DEFAULTS
// =============================================================================

#[test]
fn default_survives_when_flag_absent() {
    let mut regions = Vec::new();
    let mut flags = FlagSet::new("test");
    flags
        .string_list_var(&mut regions, &["us-east-1"], "to", "")
        .unwrap();
    flags.parse(Vec::<String>::new()).unwrap();
    assert!(!flags.is_set("to"));
    assert_eq!(flags.lookup("to").unwrap().default_text(), "us-east-1");
    drop(flags);

    assert_eq!(regions, strings(&["us-east-1"]));
}

#[test]
fn default_survives_empty_value() {
    let mut ids = vec![5, 6];
    let mut flags = FlagSet::new("test");
    flags.int_list_var(&mut ids, "ids", "").unwrap();
    flags.parse(["-ids", ""]).unwrap();
    assert!(flags.is_set("ids"));
    drop(flags);

    assert_eq!(ids, vec![5, 6]);
}

#[test]
fn last_occurrence_wins() {
    let mut flags = FlagSet::new("test");
    let regions = flags.string_list(&[], "to", "").unwrap();
    flags.parse(["-to", "a,b", "-to", "c"]).unwrap();

    assert_eq!(regions.to_vec(), strings(&["c"]));
}

// =============================================================================
// ERRORS
// =============================================================================

#[test]
fn invalid_integer_reports_flag_and_commits_nothing() {
    let mut ids = vec![1];
    let mut flags = FlagSet::new("test");
    flags.int_list_var(&mut ids, "ids", "").unwrap();
    let err = flags.parse(["-ids", "12,x,34"]).unwrap_err();
    match &err {
        FlagError::InvalidValue {
            name,
            value,
            source: ValueError::Parse { token, .. },
        } => {
            assert_eq!(name, "ids");
            assert_eq!(value, "12,x,34");
            assert_eq!(token, "x");
        }
        other => panic!("Expected InvalidValue, got {:?}", other),
    }
    assert!(err.to_string().contains("invalid value \"12,x,34\" for flag -ids"));
    assert!(!flags.is_set("ids"));
    drop(flags);

    assert_eq!(ids, vec![1]);
}

#[test]
fn duplicate_registration_fails() {
    let mut flags = FlagSet::new("test");
    let shared: SharedList<i64> = SharedList::new();
    flags.string_list(&[], "to", "").unwrap();
    assert_eq!(
        flags.shared_list_var(&shared, None, "to", ""),
        Err(FlagError::Redefined { name: "to".into() })
    );
}

#[test]
fn undefined_flag_fails() {
    let mut flags = FlagSet::new("test");
    let err = flags.parse(["-nope", "x"]).unwrap_err();
    assert_eq!(err, FlagError::Undefined { name: "nope".into() });
    assert_eq!(err.to_string(), "flag provided but not defined: -nope");
}

#[test]
fn missing_value_fails() {
    let mut flags = FlagSet::new("test");
    flags.string_list(&[], "to", "").unwrap();
    let err = flags.parse(["-to"]).unwrap_err();
    assert_eq!(err, FlagError::MissingValue { name: "to".into() });
}

#[test]
fn bad_syntax_fails() {
    let mut flags = FlagSet::new("test");
    assert!(matches!(
        flags.parse(["---to", "x"]),
        Err(FlagError::BadSyntax { .. })
    ));
}

#[test]
fn set_by_name_uses_same_semantics() {
    let mut ids = Vec::new();
    let mut flags = FlagSet::new("test");
    flags.int_list_var(&mut ids, "ids", "").unwrap();
    flags.set("ids", "9,8").unwrap();
    assert!(flags.is_set("ids"));
    assert_eq!(flags.lookup("ids").unwrap().value_text(), "9,8");
    assert!(flags.set("missing", "1").is_err());
    drop(flags);

    assert_eq!(ids, vec![9, 8]);
}

// =============================================================================
// TERMINATION AND REMAINING ARGS
// =============================================================================

#[test]
fn parsing_stops_at_first_positional() {
    let mut flags = FlagSet::new("test");
    let regions = flags.string_list(&[], "to", "").unwrap();
    flags.parse(["-to", "a", "file", "-to", "b"]).unwrap();

    assert!(flags.parsed());
    assert_eq!(regions.to_vec(), strings(&["a"]));
    assert_eq!(flags.args(), strings(&["file", "-to", "b"]).as_slice());
}

#[test]
fn double_dash_is_consumed() {
    let mut flags = FlagSet::new("test");
    flags.string_list(&[], "to", "").unwrap();
    flags.parse(["--", "-to", "a"]).unwrap();

    assert!(!flags.is_set("to"));
    assert_eq!(flags.args(), strings(&["-to", "a"]).as_slice());
}

#[test]
fn lone_dash_is_positional() {
    let mut flags = FlagSet::new("test");
    flags.parse(["-", "x"]).unwrap();
    assert_eq!(flags.args(), strings(&["-", "x"]).as_slice());
}

#[test]
fn value_may_start_with_dash() {
    let mut flags = FlagSet::new("test");
    let regions = flags.string_list(&[], "to", "").unwrap();
    flags.parse(["-to", "-a,-b"]).unwrap();
    assert_eq!(regions.to_vec(), strings(&["-a", "-b"]));
}

#[test]
fn reparse_forgets_previously_set_flags() {
    let mut flags = FlagSet::new("test");
    let regions = flags.string_list(&[], "to", "").unwrap();
    flags.parse(["-to", "a"]).unwrap();
    assert!(flags.is_set("to"));

    flags.parse(Vec::<String>::new()).unwrap();
    assert!(!flags.is_set("to"));
    assert_eq!(regions.to_vec(), strings(&["a"]));
}

#[test]
fn failed_reparse_drops_previous_remaining_args() {
    let mut flags = FlagSet::new("test");
    flags.string_list(&[], "to", "").unwrap();
    flags.parse(["-to", "a", "rest"]).unwrap();
    assert_eq!(flags.args(), strings(&["rest"]).as_slice());

    assert!(flags.parse(["-nope"]).is_err());
    assert!(flags.args().is_empty());
}

// =============================================================================
// CONFIG
// =============================================================================

#[test]
fn ignore_unknown_skips_flag_and_its_value() {
    let config = ParseConfig {
        ignore_unknown: true,
    };
    let mut flags = FlagSet::with_config("test", config);
    let regions = flags.string_list(&[], "to", "").unwrap();
    flags
        .parse(["-verbose", "yes", "-to", "a", "-other=1", "rest"])
        .unwrap();

    assert_eq!(regions.to_vec(), strings(&["a"]));
    assert_eq!(flags.args(), strings(&["rest"]).as_slice());
    assert_eq!(flags.warnings().len(), 2);
    assert!(flags.warnings()[0].contains("-verbose"));
}

#[test]
fn ignore_unknown_does_not_swallow_following_flag() {
    let config = ParseConfig {
        ignore_unknown: true,
    };
    let mut flags = FlagSet::with_config("test", config);
    let regions = flags.string_list(&[], "to", "").unwrap();
    flags.parse(["-quiet", "-to", "a"]).unwrap();

    assert_eq!(regions.to_vec(), strings(&["a"]));
}
