use chrono::{DateTime, Utc};

use crate::core::errors::{PermAuditError, Result};
use crate::core::models::command_result::CommandResult;
use crate::core::models::message::Message;
use crate::core::models::page::{LogQuery, PageRequest, RecentPage};
use crate::core::services::time_format::format_date_diff;
use crate::core::services::user_lookup::resolve_user;
use crate::core::traits::audit::AuditLogStore;
use crate::core::traits::identity::IdentityResolver;
use crate::core::traits::sender::Sender;

/// Answers `recent [user] [page]`: picks a page of the audit log, checks it
/// against the page count and sends it to the operator.
///
/// Holds no state between calls.
pub struct RecentService<S: AuditLogStore, R: IdentityResolver> {
    pub store: S,
    pub resolver: R,
}

impl<S: AuditLogStore, R: IdentityResolver> RecentService<S, R> {
    /// Run the command against the current time.
    pub fn handle(&self, args: &[String], sender: &dyn Sender) -> Result<CommandResult> {
        self.handle_at(args, Utc::now(), sender)
    }

    /// Run the command, measuring entry ages from `now`.
    ///
    /// Operator mistakes are reported through `sender` and come back as a
    /// non-success `CommandResult`. Store or resolver failures are returned
    /// as errors.
    pub fn handle_at(
        &self,
        args: &[String],
        now: DateTime<Utc>,
        sender: &dyn Sender,
    ) -> Result<CommandResult> {
        let outcome = self.query(args).and_then(|query| self.fetch(query));

        match outcome {
            Ok(page) => {
                render(&page, now, sender);
                Ok(CommandResult::Success)
            }
            Err(e) => match e.user_message() {
                Some(message) => {
                    tracing::debug!(error = %e, "recent rejected");
                    sender.send(&message);
                    Ok(e.command_result())
                }
                None => Err(e),
            },
        }
    }

    /// Interpret the raw arguments. User tokens are resolved here.
    pub fn query(&self, args: &[String]) -> Result<LogQuery> {
        match args {
            [] => Ok(LogQuery {
                filter: None,
                page: PageRequest::Last,
            }),
            [single] => match parse_page(single) {
                Some(number) => Ok(LogQuery {
                    filter: None,
                    page: PageRequest::Number(number),
                }),
                None => Ok(LogQuery {
                    filter: Some(resolve_user(single, &self.resolver)?),
                    page: PageRequest::Last,
                }),
            },
            [user, page] => {
                let filter = resolve_user(user, &self.resolver)?;
                let number = parse_page(page).ok_or_else(|| PermAuditError::InvalidPageNumber {
                    value: page.clone(),
                })?;
                Ok(LogQuery {
                    filter: Some(filter),
                    page: PageRequest::Number(number),
                })
            }
            _ => Err(PermAuditError::TooManyArguments { count: args.len() }),
        }
    }

    /// Check the requested page against the page count and load it.
    pub fn fetch(&self, query: LogQuery) -> Result<RecentPage> {
        let max_page = self.store.page_count(query.filter)?;
        if max_page == 0 {
            return Err(PermAuditError::NoEntries);
        }

        let number = match query.page {
            PageRequest::Last => max_page,
            PageRequest::Number(n) => usize::try_from(n)
                .ok()
                .filter(|n| (1..=max_page).contains(n))
                .ok_or(PermAuditError::InvalidPageRange { max_page })?,
        };

        tracing::debug!(page = number, max_page, filter = ?query.filter, "loading log page");
        let entries = self.store.page(number, query.filter)?;

        Ok(RecentPage {
            number,
            max_page,
            filter: query.filter,
            entries,
        })
    }
}

fn parse_page(raw: &str) -> Option<i64> {
    raw.parse().ok()
}

/// Send the header, then one line per entry in index order.
fn render(page: &RecentPage, now: DateTime<Utc>, sender: &dyn Sender) {
    let header = match page.filter {
        Some(id) => {
            // Every entry on a filtered page has the same actor.
            let name = page
                .entries
                .values()
                .next()
                .map(|e| e.actor_name.clone())
                .unwrap_or_else(|| id.to_string());
            Message::RecentByHeader {
                name,
                page: page.number,
                max_page: page.max_page,
            }
        }
        None => Message::RecentHeader {
            page: page.number,
            max_page: page.max_page,
        },
    };
    sender.send(&header);

    for (index, entry) in &page.entries {
        sender.send(&Message::Entry {
            index: *index,
            elapsed: format_date_diff(entry.timestamp, now),
            description: entry.formatted(),
        });
    }
}
