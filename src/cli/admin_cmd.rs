use std::io::{self, BufRead, Write};

use crate::admin::AdminScreen;
use crate::config::ClientConfig;
use crate::domain::Difficulty;
use crate::messages::Messages;
use crate::seeds::admin_challenges;

#[derive(Debug, PartialEq)]
enum AdminCommand {
    List,
    Add,
    Edit(String),
    Delete(String),
    Help,
    Quit,
    Unknown(String),
}

fn parse_command(line: &str) -> Option<AdminCommand> {
    let mut parts = line.split_whitespace();
    let cmd = parts.next()?;
    let arg = parts.next().map(str::to_string);
    Some(match (cmd, arg) {
        ("list" | "ls", _) => AdminCommand::List,
        ("add", _) => AdminCommand::Add,
        ("edit", Some(id)) => AdminCommand::Edit(id),
        ("delete" | "rm", Some(id)) => AdminCommand::Delete(id),
        ("help" | "?", _) => AdminCommand::Help,
        ("quit" | "exit" | "q", _) => AdminCommand::Quit,
        _ => AdminCommand::Unknown(line.trim().to_string()),
    })
}

const HELP: &str = "\
Commands:
  list           show all challenges
  add            fill in the form and append a challenge
  edit <id>      fill in the form again for an existing challenge
  delete <id>    remove a challenge
  help           this text
  quit           leave (changes are discarded)

In the form, an empty line keeps the shown value, a single '-' clears it
and a single '.' cancels.";

pub fn run_admin(cfg: &ClientConfig) {
    let mut screen = AdminScreen::new(admin_challenges(), Messages::for_locale(cfg.locale));
    let stdin = io::stdin();
    if let Err(e) = run_session(&mut screen, stdin.lock(), io::stdout()) {
        eprintln!("Admin session aborted: {}", e);
        std::process::exit(1);
    }
}

fn run_session<R: BufRead, W: Write>(screen: &mut AdminScreen, mut input: R, mut out: W) -> io::Result<()> {
    writeln!(out, "{}", screen.msgs.admin_title)?;
    writeln!(out, "{}", screen.render_list())?;
    writeln!(out, "Type `help` for commands.")?;

    loop {
        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = read_line(&mut input)? else { break };
        let Some(cmd) = parse_command(&line) else { continue };

        match cmd {
            AdminCommand::List => writeln!(out, "{}", screen.render_list())?,
            AdminCommand::Add => {
                screen.cancel_edit();
                edit_form(screen, &mut input, &mut out)?;
            }
            AdminCommand::Edit(id) => {
                if screen.begin_edit(&id) {
                    edit_form(screen, &mut input, &mut out)?;
                }
            }
            AdminCommand::Delete(id) => {
                screen.delete(&id);
            }
            AdminCommand::Help => writeln!(out, "{}", HELP)?,
            AdminCommand::Quit => break,
            AdminCommand::Unknown(raw) => writeln!(out, "Unknown command '{}'. Type `help`.", raw)?,
        }
        for t in screen.toasts.drain(..) {
            writeln!(out, "{}", t)?;
        }
    }
    Ok(())
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim_end_matches(['\r', '\n']).to_string()))
}

enum FieldInput {
    Keep,
    Clear,
    Set(String),
    Cancel,
}

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str, current: &str) -> io::Result<FieldInput> {
    if current.is_empty() {
        write!(out, "{}: ", label)?;
    } else {
        write!(out, "{} [{}]: ", label, current)?;
    }
    out.flush()?;
    Ok(match read_line(input)? {
        None => FieldInput::Cancel,
        Some(l) if l.trim() == "." => FieldInput::Cancel,
        Some(l) if l.trim() == "-" => FieldInput::Clear,
        Some(l) if l.trim().is_empty() => FieldInput::Keep,
        Some(l) => FieldInput::Set(l),
    })
}

/// Walk the form fields, then commit. A cancel anywhere drops the edits.
fn edit_form<R: BufRead, W: Write>(screen: &mut AdminScreen, input: &mut R, out: &mut W) -> io::Result<()> {
    writeln!(out, "-- {} --", screen.form_title())?;
    let msgs = screen.msgs.clone();

    macro_rules! text_field {
        ($label:expr, $field:ident) => {
            match prompt(input, out, $label, &screen.form.$field.clone())? {
                FieldInput::Keep => {}
                FieldInput::Clear => screen.form.$field.clear(),
                FieldInput::Set(v) => screen.form.$field = v,
                FieldInput::Cancel => {
                    screen.cancel_edit();
                    writeln!(out, "{}", msgs.admin_cancelled)?;
                    return Ok(());
                }
            }
        };
    }

    text_field!(msgs.admin_field_title, title);
    text_field!(msgs.admin_field_description, description);

    loop {
        let current = screen.form.difficulty.as_str();
        match prompt(input, out, msgs.admin_field_difficulty, current)? {
            FieldInput::Keep => break,
            FieldInput::Clear => writeln!(out, "difficulty cannot be cleared (expected easy, medium or hard)")?,
            FieldInput::Set(v) => match v.parse::<Difficulty>() {
                Ok(d) => {
                    screen.form.difficulty = d;
                    writeln!(out, "  -> {}", d.label(msgs.locale))?;
                    break;
                }
                Err(e) => writeln!(out, "{}", e)?,
            },
            FieldInput::Cancel => {
                screen.cancel_edit();
                writeln!(out, "{}", msgs.admin_cancelled)?;
                return Ok(());
            }
        }
    }

    text_field!(msgs.admin_field_category, category);
    text_field!(msgs.admin_test_cases, test_cases);
    text_field!(msgs.admin_field_common_mistakes, common_mistakes);

    writeln!(out, "[{}]", screen.submit_label())?;
    if screen.submit_form().is_some() {
        writeln!(out, "{}", screen.render_list())?;
    }
    Ok(())
}
