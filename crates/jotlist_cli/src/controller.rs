//! Interactive session controller.
//!
//! # Responsibility
//! - Drive the menu loop and dispatch to the add/delete/show flows.
//! - Compose the input seam with the store; hold no todo state itself.
//!
//! # Invariants
//! - Only the exit action or end of input leaves the loop.
//! - The output sink carries every user-facing message; the error sink
//!   carries the delete-query parse diagnostic only.

use jotlist_core::{DeleteQuery, TodoStore};
use log::{info, warn};
use std::io::{self, BufRead, Write};

use crate::input::InputReader;
use crate::menu::{self, MenuAction};

const LIST_BORDER: &str = "==================================";

/// Whether the session can keep prompting after a flow returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FlowStatus {
    Continue,
    InputClosed,
}

/// Session controller over injected terminal streams.
pub struct MenuController<R: BufRead, W: Write, E: Write> {
    input: InputReader<R>,
    out: W,
    err: E,
}

impl<R: BufRead, W: Write, E: Write> MenuController<R, W, E> {
    pub fn new(input: R, out: W, err: E) -> Self {
        Self {
            input: InputReader::new(input),
            out,
            err,
        }
    }

    /// Runs the menu loop until the exit action or end of input.
    ///
    /// Invalid or non-numeric selections re-display the full menu and
    /// re-prompt, with no retry limit.
    pub fn run(&mut self, store: &mut TodoStore) -> io::Result<()> {
        writeln!(self.out, "Basic todo app")?;

        loop {
            menu::write_menu(&mut self.out)?;
            let token = match self.input.read_token()? {
                Some(token) => token,
                None => break,
            };
            let action = match token.parse::<i64>().ok().and_then(MenuAction::from_selection) {
                Some(action) => action,
                None => continue,
            };

            let status = match action {
                MenuAction::AddTodo => self.add_flow(store)?,
                MenuAction::DeleteTodo => self.delete_flow(store)?,
                MenuAction::ShowTodos => {
                    self.show_flow(store)?;
                    FlowStatus::Continue
                }
                MenuAction::ExitApp => {
                    info!(
                        "event=session_exit module=cli status=ok todos_remaining={}",
                        store.len()
                    );
                    return Ok(());
                }
            };

            if status == FlowStatus::InputClosed {
                break;
            }
        }

        // Closed input ends the session as cleanly as the exit action.
        info!(
            "event=input_closed module=cli status=ok todos_remaining={}",
            store.len()
        );
        Ok(())
    }

    /// Solicits todo text until the user declines another entry.
    ///
    /// Empty or whitespace-only entries are skipped silently; the loop
    /// still proceeds to the "add another" question.
    fn add_flow(&mut self, store: &mut TodoStore) -> io::Result<FlowStatus> {
        loop {
            write!(self.out, "Enter todo: ")?;
            self.out.flush()?;
            let line = match self.input.read_line()? {
                Some(line) => line,
                None => return Ok(FlowStatus::InputClosed),
            };

            if !line.trim().is_empty() {
                match store.add(line) {
                    Ok(id) => info!("event=todo_added module=cli status=ok id={id}"),
                    Err(err) => {
                        warn!("event=todo_add_rejected module=cli status=error reason={err}")
                    }
                }
            }

            writeln!(self.out)?;
            write!(self.out, "Add another todo (Y | N): ")?;
            self.out.flush()?;
            let answer = match self.input.read_token()? {
                Some(answer) => answer,
                None => return Ok(FlowStatus::InputClosed),
            };
            if !answer.eq_ignore_ascii_case("y") {
                return Ok(FlowStatus::Continue);
            }
        }
    }

    /// Shows the current list, reads one query, and removes the first
    /// matching todo.
    ///
    /// A query that does not parse as an integer falls back to whole-text
    /// matching; that fallback is reported once on the error sink. A miss
    /// is a normal outcome reported on the output sink.
    fn delete_flow(&mut self, store: &mut TodoStore) -> io::Result<FlowStatus> {
        self.show_flow(store)?;

        write!(self.out, "Enter todo to delete: ")?;
        self.out.flush()?;
        let entered = match self.input.read_line()? {
            Some(entered) => entered,
            None => return Ok(FlowStatus::InputClosed),
        };

        let query = DeleteQuery::from_raw(&entered);
        if let DeleteQuery::ByText(text) = &query {
            writeln!(
                self.err,
                "Error: Invalid string for conversion to integer: {text}"
            )?;
            warn!("event=delete_query_fallback module=cli status=ok match=text");
        }

        match store.remove(&query) {
            Some(todo) => {
                info!("event=todo_deleted module=cli status=ok id={}", todo.id);
                writeln!(self.out, "Todo deleted: {}", todo.text)?;
            }
            None => {
                info!("event=todo_delete_miss module=cli status=ok");
                writeln!(self.out, "No todo deleted")?;
            }
        }

        Ok(FlowStatus::Continue)
    }

    /// Prints the bordered listing block in insertion order.
    fn show_flow(&mut self, store: &TodoStore) -> io::Result<()> {
        writeln!(self.out, "{LIST_BORDER}")?;
        writeln!(self.out, "Available todos")?;
        if store.is_empty() {
            writeln!(self.out, "No todo added")?;
        } else {
            for todo in store.list() {
                writeln!(self.out, "Todo {}: {}", todo.id, todo.text)?;
            }
        }
        writeln!(self.out, "{LIST_BORDER}")?;
        writeln!(self.out)
    }
}
