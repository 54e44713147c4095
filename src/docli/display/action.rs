use super::{details, listing, single};
use crate::error::Result;
use crate::format::{action_status, format_id, format_opt_id};
use crate::model::Action;
use crate::output::{Block, Document, Output};
use tabula::NONE;

fn or_none(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| NONE.to_string())
}

pub fn one(action: &Action, message: Option<&str>, out: &Output) -> Result<Document> {
    if out.is_json() {
        return Document::payload(action);
    }
    let p = &out.painter;
    let table = details(
        out,
        [
            ("Action ID", format_id(p, action.id)),
            ("Action Status", action_status(p, &action.status)),
            ("Action Type", action.kind.clone()),
            ("Started At", out.date(action.started_at.as_deref())),
            ("Completed At", out.date(action.completed_at.as_deref())),
            ("Resource Type", or_none(&action.resource_type)),
            ("Resource ID", format_opt_id(p, action.resource_id.as_ref())),
            ("Resource Region", or_none(&action.region_slug)),
        ],
    );
    Ok(single(out, message, table))
}

pub fn many(actions: &[Action], out: &Output) -> Result<Document> {
    if out.is_json() {
        return Document::payloads(actions);
    }
    let p = &out.painter;
    let table = listing(&["ID", "Status", "Type", "Completed"], actions, |action| {
        vec![
            format_id(p, action.id),
            action_status(p, &action.status),
            action.kind.clone(),
            out.date(action.completed_at.as_deref()),
        ]
    });
    Ok(Document::new().with(Block::Table(table)))
}

/// The confirmation message and the IDs of the started actions, nothing else.
pub fn ids(actions: &[Action], message: Option<&str>, out: &Output) -> Result<Document> {
    if out.is_json() {
        return match actions {
            [action] => Document::payload(action),
            _ => Document::payloads(actions),
        };
    }
    let mut document = Document::new();
    if let Some(message) = message {
        document.push(out.message(message));
    }
    if actions.is_empty() {
        document.push(Block::Message(format!("{}{}", out.label("Action ID: "), NONE)));
    }
    for action in actions {
        document.push(Block::Message(format!(
            "{}{}",
            out.label("Action ID: "),
            format_id(&out.painter, action.id)
        )));
    }
    Ok(document)
}

pub fn id_only(action: &Action, message: Option<&str>, out: &Output) -> Result<Document> {
    ids(std::slice::from_ref(action), message, out)
}
