//! `bcn shell`: the interactive front end.
//!
//! The shell only decides which panel is on screen (directory listing, search
//! results, add form) and forwards each command to the [`Directory`]. Every
//! outcome the user needs to know about arrives through the notification
//! sink; the shell never reports success or failure itself.

use std::io::Write;

use beacon_core::CompanyField;
use beacon_gateway::DirectoryGateway;
use beacon_session::{Directory, Outcome};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

use crate::cli::OutputFormat;
use crate::output::{render_companies, render_search};

const HELP: &str = "\
commands:
  search <query>   ask for matching companies
  list             reload and show the directory
  add              fill in and submit the add-company form
  delete <id>      delete a company by id
  help             show this message
  quit             leave the shell";

#[derive(Clone, Debug, PartialEq, Eq)]
enum ShellCommand {
    Search(String),
    List,
    Add,
    Delete(String),
    Help,
    Quit,
    Empty,
    Unknown(String),
}

impl ShellCommand {
    fn parse(line: &str) -> Self {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(word, rest)| (word, rest.trim()));

        match word.to_ascii_lowercase().as_str() {
            "" => Self::Empty,
            "search" | "s" => Self::Search(rest.to_string()),
            "list" | "ls" => Self::List,
            "add" => Self::Add,
            "delete" | "rm" => Self::Delete(rest.to_string()),
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            _ => Self::Unknown(word.to_string()),
        }
    }
}

/// The panel currently shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum View {
    Directory,
    Search,
    AddForm,
}

impl View {
    const fn prompt(self) -> &'static str {
        match self {
            Self::Directory => "bcn> ",
            Self::Search => "bcn[search]> ",
            Self::AddForm => "bcn[add]> ",
        }
    }
}

/// Run the shell until `quit` or end of input.
pub async fn run<G, R, W>(
    directory: &Directory<G>,
    input: R,
    mut out: W,
    format: OutputFormat,
) -> anyhow::Result<()>
where
    G: DirectoryGateway,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    let mut view = View::Directory;

    if directory.open().await.is_ok() {
        show_directory(directory, &mut out, format)?;
    }
    writeln!(out, "type 'help' for commands")?;

    loop {
        write!(out, "{}", view.prompt())?;
        out.flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };

        match ShellCommand::parse(&line) {
            ShellCommand::Empty => {}
            ShellCommand::Quit => break,
            ShellCommand::Help => writeln!(out, "{HELP}")?,
            ShellCommand::Unknown(word) => {
                writeln!(out, "unknown command '{word}'; type 'help' for commands")?;
            }
            ShellCommand::List => {
                view = View::Directory;
                if directory.store().refresh().await.is_ok() {
                    show_directory(directory, &mut out, format)?;
                }
            }
            ShellCommand::Search(query) => {
                let session = directory.search();
                if let Ok(Outcome::Applied) = session.submit(&query).await
                    && let Some(result) = session.result()
                {
                    view = View::Search;
                    writeln!(out, "{}", render_search(&result, format)?)?;
                }
            }
            ShellCommand::Delete(id) => {
                if directory.store().remove_input(&id).await.is_ok() {
                    view = View::Directory;
                    show_directory(directory, &mut out, format)?;
                }
            }
            ShellCommand::Add => {
                view = View::AddForm;
                if !fill_form(directory, &mut lines, &mut out).await? {
                    break;
                }
                if directory.add_company().await.is_ok() {
                    view = View::Directory;
                    show_directory(directory, &mut out, format)?;
                }
            }
        }
    }

    tracing::debug!("shell closed");
    Ok(())
}

/// Prompt for each field, keeping the current value on an empty answer.
///
/// Returns `false` when input ended mid-form.
async fn fill_form<G, R, W>(
    directory: &Directory<G>,
    lines: &mut Lines<R>,
    out: &mut W,
) -> anyhow::Result<bool>
where
    G: DirectoryGateway,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let form = directory.form();
    for field in CompanyField::ALL {
        let current = form.fields().get(field).to_string();
        if current.is_empty() {
            write!(out, "{}: ", field.label())?;
        } else {
            write!(out, "{} [{current}]: ", field.label())?;
        }
        out.flush()?;

        let Some(answer) = lines.next_line().await? else {
            return Ok(false);
        };
        let answer = answer.trim();
        if !answer.is_empty() {
            form.set_field(field, answer);
        }
    }
    Ok(true)
}

fn show_directory<G: DirectoryGateway, W: Write>(
    directory: &Directory<G>,
    out: &mut W,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let companies = directory.store().snapshot();
    writeln!(out, "{}", render_companies(&companies, format)?)?;
    Ok(())
}
