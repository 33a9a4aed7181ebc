use lexis_types::{AppEvent, StudyMode, Verdict};

/// A parsed line of terminal input
#[derive(Debug)]
pub enum Command {
    Event(AppEvent),
    Help,
    Quit,
    Nothing,
}

pub const HELP: &str = "\
commands:
  n, next            next word
  p, prev            previous word
  k, known           mark as known
  u, unknown         mark as unknown
  s, pass            skip without a verdict
  m <mode>           switch mode (quick, fill, example)
  a <answer>         answer a fill-in card
  r, reveal          show the fill-in answer
  l <word>           look up a word and add it
  new                fetch a random new word
  stats              show statistics
  h, help            this text
  q, quit            exit";

pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    let event = match head.to_lowercase().as_str() {
        "" => return Ok(Command::Nothing),
        "h" | "help" | "?" => return Ok(Command::Help),
        "q" | "quit" | "exit" => return Ok(Command::Quit),
        "n" | "next" => AppEvent::NextWord,
        "p" | "prev" | "previous" => AppEvent::PreviousWord,
        "k" | "known" => AppEvent::Verdict(Verdict::Known),
        "u" | "unknown" => AppEvent::Verdict(Verdict::Unknown),
        "s" | "pass" => AppEvent::Verdict(Verdict::Passed),
        "r" | "reveal" => AppEvent::RevealAnswer,
        "stats" => AppEvent::ShowStats,
        "new" => AppEvent::LookupWord(None),
        "m" | "mode" => {
            let mode: StudyMode = rest.parse()?;
            AppEvent::SwitchMode(mode)
        }
        "a" | "answer" => {
            if rest.is_empty() {
                return Err("usage: a <answer>".to_string());
            }
            AppEvent::CheckAnswer(rest.to_string())
        }
        "l" | "lookup" => {
            if rest.is_empty() {
                return Err("usage: l <word>".to_string());
            }
            AppEvent::LookupWord(Some(rest.to_string()))
        }
        other => return Err(format!("unknown command '{other}', type h for help")),
    };

    Ok(Command::Event(event))
}
