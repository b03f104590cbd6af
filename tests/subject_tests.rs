use rtimesheet::core::subject::parse;

#[test]
fn test_parse_with_task_number() {
    let p = parse("NICK:123:desc").expect("should parse");
    assert_eq!(p.project_nickname, "NICK");
    assert_eq!(p.task_number.as_deref(), Some("123"));
    assert_eq!(p.description, "desc");
}

#[test]
fn test_parse_without_task_number() {
    let p = parse("NICK:desc").expect("should parse");
    assert_eq!(p.project_nickname, "NICK");
    assert_eq!(p.task_number, None);
    assert_eq!(p.description, "desc");
}

#[test]
fn test_parse_without_colon_is_no_match() {
    assert!(parse("justtext").is_none());
    assert!(parse("").is_none());
}

#[test]
fn test_nickname_is_upper_cased() {
    assert_eq!(parse("proj:task").unwrap().project_nickname, "PROJ");
    assert_eq!(parse("PROJ:task").unwrap().project_nickname, "PROJ");
    assert_eq!(parse("Proj:task").unwrap().project_nickname, "PROJ");
}

#[test]
fn test_task_number_with_letter_lead() {
    let p = parse("acme:A12:review").unwrap();
    assert_eq!(p.task_number.as_deref(), Some("A12"));
    assert_eq!(p.description, "review");

    let p = parse("acme:x:single char").unwrap();
    assert_eq!(p.task_number.as_deref(), Some("x"));
    assert_eq!(p.description, "single char");
}

#[test]
fn test_word_after_first_colon_is_description() {
    // "meeting" is more than one char before the next colon: no task number
    let p = parse("ADMIN:meeting: notes").unwrap();
    assert_eq!(p.task_number, None);
    assert_eq!(p.description, "meeting: notes");

    let p = parse("ADMIN:12a:text").unwrap();
    assert_eq!(p.task_number, None);
    assert_eq!(p.description, "12a:text");
}

#[test]
fn test_description_may_contain_colons() {
    let p = parse("ADMIN:999:call: 10:30 with team").unwrap();
    assert_eq!(p.task_number.as_deref(), Some("999"));
    assert_eq!(p.description, "call: 10:30 with team");
}

#[test]
fn test_empty_parts() {
    let p = parse(":desc").unwrap();
    assert_eq!(p.project_nickname, "");
    assert_eq!(p.description, "desc");

    let p = parse("ADMIN:").unwrap();
    assert_eq!(p.task_number, None);
    assert_eq!(p.description, "");

    // a colon can itself be the one-character task token
    let p = parse("ADMIN:::x").unwrap();
    assert_eq!(p.task_number.as_deref(), Some(":"));
    assert_eq!(p.description, "x");
}

#[test]
fn test_multiline_subjects() {
    let p = parse("ADMIN:1:standup\n").unwrap();
    assert_eq!(p.description, "standup");

    assert!(parse("ADMIN:1:standup\nsecond line").is_none());
}

#[test]
fn test_non_ascii_subjects() {
    let p = parse("café:é7:réunion").unwrap();
    assert_eq!(p.project_nickname, "CAFÉ");
    assert_eq!(p.task_number.as_deref(), Some("é7"));
    assert_eq!(p.description, "réunion");
}

#[test]
fn test_task_number_accepts_non_ascii_digits() {
    let p = parse("b:1٣٣:").unwrap();
    assert_eq!(p.project_nickname, "B");
    assert_eq!(p.task_number.as_deref(), Some("1٣٣"));
    assert_eq!(p.description, "");
}
