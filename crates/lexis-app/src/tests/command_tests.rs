use lexis_types::{AppEvent, StudyMode, Verdict};

use crate::commands::{Command, parse_command};

fn event(line: &str) -> AppEvent {
    match parse_command(line) {
        Ok(Command::Event(event)) => event,
        other => panic!("'{line}' parsed to {other:?}"),
    }
}

#[test]
fn test_short_and_long_forms() {
    assert!(matches!(event("n"), AppEvent::NextWord));
    assert!(matches!(event("NEXT"), AppEvent::NextWord));
    assert!(matches!(event(" p "), AppEvent::PreviousWord));
    assert!(matches!(event("k"), AppEvent::Verdict(Verdict::Known)));
    assert!(matches!(event("unknown"), AppEvent::Verdict(Verdict::Unknown)));
    assert!(matches!(event("s"), AppEvent::Verdict(Verdict::Passed)));
    assert!(matches!(event("reveal"), AppEvent::RevealAnswer));
    assert!(matches!(event("stats"), AppEvent::ShowStats));
    assert!(matches!(event("new"), AppEvent::LookupWord(None)));
}

#[test]
fn test_arguments() {
    assert!(matches!(event("m fill"), AppEvent::SwitchMode(StudyMode::Fill)));
    assert!(matches!(event("mode  Example"), AppEvent::SwitchMode(StudyMode::Example)));

    match event("a  ice cream ") {
        AppEvent::CheckAnswer(answer) => assert_eq!(answer, "ice cream"),
        other => panic!("unexpected {other:?}"),
    }
    match event("l Harbor") {
        AppEvent::LookupWord(Some(term)) => assert_eq!(term, "Harbor"),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn test_local_commands() {
    assert!(matches!(parse_command("q"), Ok(Command::Quit)));
    assert!(matches!(parse_command("help"), Ok(Command::Help)));
    assert!(matches!(parse_command("   "), Ok(Command::Nothing)));
}

#[test]
fn test_bad_input() {
    assert!(parse_command("m flash").unwrap_err().contains("unknown study mode"));
    assert!(parse_command("a").unwrap_err().contains("usage"));
    assert!(parse_command("l").unwrap_err().contains("usage"));
    assert!(parse_command("jump").unwrap_err().contains("unknown command"));
}
