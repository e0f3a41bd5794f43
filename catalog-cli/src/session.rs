//! Interactive session: runs commands against one selection table.

use catalog_lib::LoadOutcome;
use catalog_lib::SelectionTable;
use catalog_lib::TableEvent;
use catalog_lib::source::RecordSource;

use crate::command::Command;
use crate::command::HELP;
use crate::render::render_table;

/// Result of running one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Text to print.
    Output(String),
    /// The user asked to leave.
    Quit,
}

/// One table bound to one record source.
pub struct Session {
    table: SelectionTable,
    source: Box<dyn RecordSource>,
}

impl Session {
    pub fn new(source: Box<dyn RecordSource>) -> Self {
        Self {
            table: SelectionTable::new(),
            source,
        }
    }

    pub fn table(&self) -> &SelectionTable {
        &self.table
    }

    /// Run one command.
    pub async fn execute(&mut self, command: Command) -> Reply {
        let output = match command {
            Command::Page(number) => self.go_to(number).await,
            Command::Next => match self.table.next_page_number() {
                Some(number) => self.go_to(number).await,
                None => "Already on the last page".to_string(),
            },
            Command::Prev => match self.table.prev_page_number() {
                Some(number) => self.go_to(number).await,
                None => "Already on the first page".to_string(),
            },
            Command::Check(ids) => {
                let (on_page, elsewhere): (Vec<_>, Vec<_>) =
                    ids.into_iter().partition(|id| self.table.page().contains(*id));
                let checked = on_page
                    .into_iter()
                    .filter_map(|id| self.table.page().find(id).cloned())
                    .collect();
                let rendered = self.dispatch(TableEvent::SelectionChanged(checked));
                if elsewhere.is_empty() {
                    rendered
                } else {
                    let ids: Vec<_> = elsewhere.iter().map(|id| id.to_string()).collect();
                    format!("Not on this page, ignored: {}\n{}", ids.join(", "), rendered)
                }
            }
            Command::SelectAll => self.dispatch(TableEvent::SelectAll),
            Command::DeselectAll => self.dispatch(TableEvent::DeselectAll),
            Command::Count(text) => self.dispatch(TableEvent::SetCount(text)),
            Command::First(text) => {
                if let Some(text) = text {
                    self.table.set_count(text);
                }
                self.dispatch(TableEvent::SelectFirstN)
            }
            Command::Show => render_table(&self.table),
            Command::Selected => {
                let ids = self.table.store().ids();
                if ids.is_empty() {
                    "Nothing selected".to_string()
                } else {
                    let ids: Vec<_> = ids.iter().map(|id| id.to_string()).collect();
                    format!("{}: {}", self.table.selected_label(), ids.join(", "))
                }
            }
            Command::Help => HELP.to_string(),
            Command::Quit => return Reply::Quit,
        };
        Reply::Output(output)
    }

    /// Load a page and render the result.
    pub async fn go_to(&mut self, number: u32) -> String {
        match self.table.load_page(self.source.as_ref(), number).await {
            Ok(LoadOutcome::Failed) => format!(
                "Could not load page {} (see log)\n{}",
                number,
                render_table(&self.table)
            ),
            Ok(_) => render_table(&self.table),
            Err(err) => err.to_string(),
        }
    }

    fn dispatch(&mut self, event: TableEvent) -> String {
        match self.table.handle(event) {
            Ok(()) => render_table(&self.table),
            Err(err) => err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use catalog_lib::model::Record;
    use catalog_lib::source::MemoryRecordSource;

    use super::*;

    fn session() -> Session {
        let records = (1..=30).map(Record::new).collect();
        Session::new(Box::new(MemoryRecordSource::new(records).with_page_size(10)))
    }

    async fn run(session: &mut Session, line: &str) -> Reply {
        session.execute(line.parse().unwrap()).await
    }

    #[tokio::test]
    async fn test_browse_and_select() {
        let mut session = session();
        session.go_to(1).await;

        run(&mut session, "check 1,2").await;
        run(&mut session, "next").await;
        run(&mut session, "all").await;
        assert_eq!(session.table().selected_count(), 12);

        run(&mut session, "check 11").await;
        assert_eq!(
            run(&mut session, "selected").await,
            Reply::Output("Selected: 3: 1, 2, 11".to_string())
        );
    }

    #[tokio::test]
    async fn test_first_n_reports_invalid_input() {
        let mut session = session();
        session.go_to(2).await;
        run(&mut session, "all").await;

        let reply = run(&mut session, "first 0").await;
        assert_eq!(
            reply,
            Reply::Output(
                "Invalid input: selection count must be a positive number, got 0".to_string()
            )
        );
        assert_eq!(session.table().selected_count(), 10);

        run(&mut session, "count 3").await;
        run(&mut session, "first").await;
        assert_eq!(session.table().store().ids(), vec![11, 12, 13]);
        assert!(session.table().count().is_empty());
    }

    #[tokio::test]
    async fn test_navigation_edges() {
        let mut session = session();
        session.go_to(1).await;
        assert_eq!(
            run(&mut session, "prev").await,
            Reply::Output("Already on the first page".to_string())
        );

        let reply = run(&mut session, "page 0").await;
        assert_eq!(
            reply,
            Reply::Output("Invalid input: page number must be at least 1, got 0".to_string())
        );
        assert_eq!(session.table().page().current_page(), 1);
        assert_eq!(run(&mut session, "quit").await, Reply::Quit);
    }

    #[tokio::test]
    async fn test_check_ignores_ids_from_other_pages() {
        let mut session = session();
        session.go_to(1).await;
        let reply = run(&mut session, "check 3, 25, 26").await;
        assert_eq!(session.table().store().ids(), vec![3]);
        match reply {
            Reply::Output(text) => {
                assert!(text.starts_with("Not on this page, ignored: 25, 26\n"));
            }
            Reply::Quit => panic!("unexpected quit"),
        }
    }
}
