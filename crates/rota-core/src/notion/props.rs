//! Property JSON shaping and parsing.
//!
//! Notion pages are deeply nested JSON. This module keeps all of that shape
//! knowledge in pure functions so the client stays a thin transport and the
//! shapes are testable without IO.
//!
//! Column names in the to-dos database (fixed by the household's setup):
//! title `name`, date `do by`, relations `responsible roomie` and `chore`.

use serde_json::{Value, json};

use crate::domain::ids::{ChoreId, RoomieId, TodoId};
use crate::domain::records::{Chore, Roomie};
use crate::domain::todo::TodoDraft;
use crate::error::{Result, RotaError};

/// The bits of a source page the runner cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPage {
    pub id: String,
    pub title: String,
    pub emoji: Option<String>,
}

/// Extract id, title text and emoji icon from one query-result page.
///
/// Returns `None` for pages without a non-empty title; such pages are
/// placeholder rows in the source databases and are skipped.
pub fn parse_page(page: &Value) -> Option<ParsedPage> {
    let id = page.get("id")?.as_str()?.to_string();
    let properties = page.get("properties")?.as_object()?;

    // The title property can be under any column name; find it by type.
    let title = properties
        .values()
        .find(|prop| prop.get("type").and_then(Value::as_str) == Some("title"))
        .and_then(|prop| prop.get("title")?.as_array()?.first()?.pointer("/text/content"))
        .and_then(Value::as_str)
        .filter(|t| !t.is_empty())?
        .to_string();

    let emoji = match page.pointer("/icon/type").and_then(Value::as_str) {
        Some("emoji") => page
            .pointer("/icon/emoji")
            .and_then(Value::as_str)
            .map(str::to_string),
        _ => None,
    };

    Some(ParsedPage { id, title, emoji })
}

pub fn roomie_from_page(page: &Value) -> Option<Roomie> {
    let parsed = parse_page(page)?;
    Some(Roomie {
        id: RoomieId::new(parsed.id),
        name: parsed.title,
        emoji: parsed.emoji,
    })
}

pub fn chore_from_page(page: &Value) -> Option<Chore> {
    let parsed = parse_page(page)?;
    Some(Chore {
        id: ChoreId::new(parsed.id),
        name: parsed.title,
        emoji: parsed.emoji,
    })
}

/// Build the `POST /v1/pages` body for one to-do draft.
pub fn todo_request(todos_db: &str, draft: &TodoDraft) -> Value {
    let mut body = json!({
        "parent": { "database_id": todos_db },
        "properties": {
            "name": {
                "title": [ { "text": { "content": draft.title } } ]
            },
            "do by": {
                "date": { "start": draft.due.to_string() }
            },
            "responsible roomie": {
                "relation": [ { "id": draft.roomie.as_str() } ]
            },
            "chore": {
                "relation": [ { "id": draft.chore.as_str() } ]
            }
        }
    });

    if let Some(emoji) = &draft.icon {
        body["icon"] = json!({ "type": "emoji", "emoji": emoji });
    }

    body
}

/// Pull the new page id out of a create-page response.
pub fn created_page_id(response: &Value) -> Result<TodoId> {
    response
        .get("id")
        .and_then(Value::as_str)
        .map(TodoId::new)
        .ok_or_else(|| RotaError::Api("create response has no page id".into()))
}
