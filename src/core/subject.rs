//! Subject line grammar.
//!
//! ```text
//! subject     := nickname ":" [ task ":" ] description
//! nickname    := any characters up to the first ":"
//! task        := one character (":" included) followed by zero or more digits
//!                (any Unicode numeric character, not only ASCII)
//! description := the rest of the line, colons allowed
//! ```
//!
//! The subject must be a single line; one trailing `\n` is tolerated.
//! Examples: `ADMIN:999:standup`, `acme:A12:review`, `ACME:build: part 2`.

use crate::models::subject::ParsedSubject;

/// Split a subject into nickname, optional task number and description.
///
/// Returns `None` when there is no colon at all (or the subject spans
/// several lines): such appointments are not timesheet entries.
pub fn parse(subject: &str) -> Option<ParsedSubject> {
    let line = subject.strip_suffix('\n').unwrap_or(subject);
    if line.contains('\n') {
        return None;
    }

    let (nickname, rest) = line.split_once(':')?;
    let (task_number, description) = match split_task(rest) {
        Some((task, description)) => (Some(task.to_string()), description),
        None => (None, rest),
    };

    Some(ParsedSubject {
        project_nickname: nickname.to_uppercase(),
        task_number,
        description: description.to_string(),
    })
}

/// Recognise `<char><digits>:` at the start of `rest`.
fn split_task(rest: &str) -> Option<(&str, &str)> {
    let mut chars = rest.char_indices();
    chars.next()?;

    for (i, c) in chars {
        if c == ':' {
            return Some((&rest[..i], &rest[i + 1..]));
        }
        if !c.is_numeric() {
            return None;
        }
    }

    None
}
