use crate::{
    domain::{Ticket, User},
    error::{BoardError, Result},
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::{collections::HashSet, hash::Hash, io::Read};
use tracing::warn;

/// Snapshot of the tickets and users a board is built from.
///
/// Populated once by a `DataSource` and treated as read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Dataset {
    pub tickets: Vec<Ticket>,
    pub users: Vec<User>,
}

impl Dataset {
    pub fn new(tickets: Vec<Ticket>, users: Vec<User>) -> Self {
        Self { tickets, users }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty() && self.users.is_empty()
    }

    /// Parses a `{ "tickets": [...], "users": [...] }` document.
    ///
    /// Records are validated one by one: a record that does not match the
    /// schema, or that repeats an id seen earlier in the same list, is
    /// dropped and logged. A missing list is treated as empty.
    pub fn from_json(json: &str) -> Result<Self> {
        let document: Value = serde_json::from_str(json)?;
        Self::from_value(document)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let document: Value = serde_json::from_reader(reader)?;
        Self::from_value(document)
    }

    fn from_value(document: Value) -> Result<Self> {
        let Value::Object(mut fields) = document else {
            return Err(BoardError::MalformedDataset(
                "expected a JSON object with tickets and users".to_string(),
            ));
        };

        let tickets = parse_records(fields.remove("tickets"), "ticket", |t: &Ticket| {
            t.id.clone()
        })?;
        let users = parse_records(fields.remove("users"), "user", |u: &User| u.id.clone())?;

        Ok(Self { tickets, users })
    }
}

fn parse_records<T, K, F>(list: Option<Value>, kind: &str, key: F) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    K: Eq + Hash + std::fmt::Display,
    F: Fn(&T) -> K,
{
    let items = match list {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(_) => {
            return Err(BoardError::MalformedDataset(format!(
                "{kind} list is not an array"
            )))
        }
    };

    let mut seen = HashSet::new();
    let mut records = Vec::with_capacity(items.len());

    for (index, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<T>(item) {
            Ok(record) => {
                let id = key(&record);
                if seen.contains(&id) {
                    warn!(%id, index, "dropping {kind} with duplicate id");
                    continue;
                }
                seen.insert(id);
                records.push(record);
            }
            Err(e) => warn!(index, error = %e, "dropping malformed {kind} record"),
        }
    }

    Ok(records)
}
