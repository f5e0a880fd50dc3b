//! Interactive terminal frontend for the donation inventory.
//!
//! Wires `DonationsView` to a real HTTP transport and drives it with line
//! commands. `refresh` failures show up as the view's error string; a failed
//! `add`/`edit`/`delete` is reported as a failed command and leaves the form
//! state exactly as the view left it.

mod transport;

use std::io::{self, BufRead, Write};

use chrono::{Local, NaiveDate};
use donations_core::{render_table, DonationClient, DonationType, DonationsView};

use transport::UreqTransport;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

const HELP: &str = "\
commands:
  list                                   refresh and show the table
  add <type> <qty> <date> <donor...>     create a donation (date may be 'today')
  edit <id> <type> <qty> <date> <donor...>   replace a donation
  delete <id>                            remove a donation
  cancel                                 leave edit mode, reset the form
  help                                   show this text
  quit                                   exit";

fn main() -> io::Result<()> {
    let base_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let mut view = DonationsView::new(DonationClient::new(&base_url), today());
    let mut transport = UreqTransport::new();

    // Startup refresh, same as the component mounting.
    view.refresh(&mut transport);
    print_view(&view);

    let stdin = io::stdin();
    prompt()?;
    for line in stdin.lock().lines() {
        let line = line?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.first().copied() {
            None => {}
            Some("quit") | Some("exit") => break,
            Some("help") => println!("{HELP}"),
            Some(_) => {
                if let Err(message) = run_command(&mut view, &mut transport, &tokens) {
                    eprintln!("command failed: {message}");
                } else {
                    print_view(&view);
                }
            }
        }
        prompt()?;
    }
    Ok(())
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn prompt() -> io::Result<()> {
    print!("> ");
    io::stdout().flush()
}

fn print_view(view: &DonationsView) {
    if let Some(error) = &view.error {
        println!("error: {error}");
    }
    print!("{}", render_table(&view.donations));
    if let Some(editing) = &view.editing {
        println!("(editing donation {})", editing.id);
    }
}

fn run_command(
    view: &mut DonationsView,
    transport: &mut UreqTransport,
    tokens: &[&str],
) -> Result<(), String> {
    match tokens[0] {
        "list" => {
            view.refresh(transport);
            Ok(())
        }
        "add" => {
            fill_form(view, &tokens[1..])?;
            view.submit(transport, today()).map_err(|e| e.to_string())
        }
        "edit" => {
            let id = parse_id(tokens.get(1))?;
            let donation = view
                .donations
                .iter()
                .find(|d| d.id == id)
                .cloned()
                .ok_or_else(|| format!("no donation with id {id}"))?;
            view.start_edit(&donation);
            fill_form(view, &tokens[2..])?;
            view.submit(transport, today()).map_err(|e| e.to_string())
        }
        "delete" => {
            let id = parse_id(tokens.get(1))?;
            view.delete(transport, id).map_err(|e| e.to_string())
        }
        "cancel" => {
            view.cancel_edit(today());
            Ok(())
        }
        other => Err(format!("unknown command {other:?}; try 'help'")),
    }
}

/// Populate the form from `<type> <qty> <date> <donor...>` arguments, the
/// way typing into the widgets would.
fn fill_form(view: &mut DonationsView, args: &[&str]) -> Result<(), String> {
    let [donation_type, quantity, date, donor @ ..] = args else {
        return Err("expected <type> <qty> <date> <donor...>".to_string());
    };
    if donor.is_empty() {
        return Err("donor name must not be empty".to_string());
    }
    view.form.donation_type = donation_type.parse::<DonationType>()?;
    view.form.quantity_or_amount = quantity.to_string();
    view.form.date = parse_date(date)?;
    view.form.donor_name = donor.join(" ");
    Ok(())
}

fn parse_id(token: Option<&&str>) -> Result<i64, String> {
    token
        .ok_or_else(|| "expected an id".to_string())?
        .parse::<i64>()
        .map_err(|e| format!("invalid id: {e}"))
}

fn parse_date(token: &str) -> Result<NaiveDate, String> {
    if token == "today" {
        return Ok(today());
    }
    token
        .parse::<NaiveDate>()
        .map_err(|e| format!("invalid date {token:?}: {e}"))
}
