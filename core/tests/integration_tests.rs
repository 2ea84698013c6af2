use cli_skeleton_core::{
    Command, Executable, ExecutableField, FieldValue, FixError, Flag, FlagType, FlagValue,
    OverwriteError, ValidationError, validate_executable,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn todo_executable() -> Executable {
    let mut exe = Executable::new("todo", "tcnksm");
    exe.vcs_host = "github.com".into();
    exe.framework_str = "urfave_cli".into();
    exe.commands.push(Command::new("add").with_synopsis("Add a new task"));
    exe.commands.push(Command::new("list"));
    exe.flags.push(Flag::new("debug", "bool").with_description("Run as DEBUG mode"));
    exe.flags.push(Flag::new("ignore-case", "B"));
    exe.flags.push(Flag::new("retries", "i"));
    exe.flags.push(
        Flag::new("token", "s").with_default(FlagValue::String("ABCD1124".into())),
    );
    exe
}

// ---------------------------------------------------------------------------
// Lifecycle: load, normalize, validate
// ---------------------------------------------------------------------------

#[test]
fn test_full_lifecycle_from_json() {
    let raw = r#"{
        "name": "todo",
        "owner": "tcnksm",
        "commands": [{ "name": "add" }],
        "flags": [
            { "long_name": "debug", "type": "b" },
            { "long_name": "port", "type": "INT", "default": 8080 }
        ]
    }"#;
    let mut exe: Executable = serde_json::from_str(raw).unwrap();

    exe.fix().unwrap();
    assert!(validate_executable(&exe).is_empty());

    let port = exe.find_flag("port").unwrap();
    assert_eq!(port.type_string, "int");
    assert_eq!(port.default, Some(FlagValue::Int(8080)));
    assert_eq!(port.short_name, "p");
    assert_eq!(port.flag_type(), Some(FlagType::Int));
}

#[test]
fn test_normalized_executable_round_trips_unchanged() {
    let mut exe = todo_executable();
    exe.fix().unwrap();

    let json = serde_json::to_string(&exe).unwrap();
    let mut reloaded: Executable = serde_json::from_str(&json).unwrap();
    reloaded.fix().unwrap();

    assert_eq!(reloaded, exe);
}

#[test]
fn test_fix_derives_every_flag() {
    let mut exe = todo_executable();
    exe.fix().unwrap();

    let names: Vec<(&str, &str, &str, &str)> = exe
        .flags
        .iter()
        .map(|f| {
            (
                f.name.as_str(),
                f.short_name.as_str(),
                f.variable_name.as_str(),
                f.type_string.as_str(),
            )
        })
        .collect();
    assert_eq!(
        names,
        vec![
            ("debug", "d", "debug", "bool"),
            ("ignore-case", "i", "ignoreCase", "bool"),
            ("retries", "r", "retries", "int"),
            ("token", "t", "token", "string"),
        ]
    );
    assert_eq!(exe.flags[2].default, Some(FlagValue::Int(0)));
    assert_eq!(
        exe.flags[3].default,
        Some(FlagValue::String("ABCD1124".into()))
    );
}

#[test]
fn test_fix_does_not_detect_short_name_collisions() {
    let mut exe = Executable::new("todo", "me");
    exe.flags.push(Flag::new("debug", "b"));
    exe.flags.push(Flag::new("dry-run", "b"));

    exe.fix().unwrap();
    assert_eq!(exe.flags[0].short_name, "d");
    assert_eq!(exe.flags[1].short_name, "d");
    assert!(exe.validate().is_empty());
}

#[test]
fn test_fix_leaves_later_flags_raw_on_failure() {
    let mut exe = todo_executable();
    exe.flags.insert(1, Flag::new("ratio", "float"));

    assert_eq!(
        exe.fix(),
        Err(FixError::UnrecognizedType("float".into()))
    );
    // Flags after the failing one keep their raw tokens.
    assert_eq!(exe.flags[2].type_string, "B");
    assert!(exe.flags[2].variable_name.is_empty());
}

#[test]
fn test_validate_four_defects() {
    let mut exe = Executable::new("", "me");
    exe.commands.push(Command::new(""));
    exe.flags.push(Flag::new("", ""));

    let errors = exe.validate();
    assert_eq!(errors.len(), 4);
    assert!(errors.contains(&ValidationError::BlankName));
    assert!(!errors.contains(&ValidationError::BlankOwner));
}

// ---------------------------------------------------------------------------
// Overwrite as a default-filling step
// ---------------------------------------------------------------------------

#[test]
fn test_overwrite_fills_defaults_then_validates() {
    let mut exe = Executable::default();
    let defaults: Vec<(&str, FieldValue)> = vec![
        ("Name", "todo".into()),
        ("Owner", "tcnksm".into()),
        ("Commands", vec![Command::new("add")].into()),
        ("Flags", vec![Flag::new("debug", "b")].into()),
    ];
    for (key, value) in defaults {
        exe.overwrite_named(key, value).unwrap();
    }

    exe.fix().unwrap();
    assert!(exe.validate().is_empty());
    assert_eq!(exe.flags[0].short_name, "d");
}

#[test]
fn test_overwrite_rejects_scalars_without_mutation() {
    let mut exe = todo_executable();
    let before = exe.clone();

    for value in [FieldValue::Int(7), FieldValue::Bool(false)] {
        for field in ExecutableField::ALL {
            let err = exe.overwrite(field, value.clone()).unwrap_err();
            assert!(matches!(err, OverwriteError::UnexpectedValue(_)));
        }
    }
    assert_eq!(exe, before);
}
