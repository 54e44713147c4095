//! Rendering context and the documents adapters produce.
//!
//! Adapters never print. They return a [`Document`], and the binary hands it to
//! [`Output::render`] together with the mode chosen on the command line.

use crate::error::Result;
use crate::format::{self, Zone};
use crate::model::ApiResource;
use crate::styles::{LABEL, RED};
use serde_json::Value;
use tabula::{Painter, Table};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    Table,
    Json,
}

/// Everything an adapter needs to turn a resource into output.
#[derive(Clone, Copy)]
pub struct Output<'a> {
    pub mode: OutputMode,
    pub painter: Painter<'a>,
    pub zone: Zone,
}

impl<'a> Output<'a> {
    pub fn new(mode: OutputMode, painter: Painter<'a>, zone: Zone) -> Self {
        Self {
            mode,
            painter,
            zone,
        }
    }

    pub fn is_json(&self) -> bool {
        self.mode == OutputMode::Json
    }

    pub fn label(&self, text: &str) -> String {
        self.painter.paint(LABEL, text)
    }

    pub fn date(&self, date: Option<&str>) -> String {
        format::format_date(date, self.zone)
    }

    /// A confirmation line: red text, or `{"message": …}` in JSON mode.
    pub fn message(&self, message: &str) -> Block {
        if self.is_json() {
            Block::Json(serde_json::json!({ "message": message }))
        } else {
            Block::Message(self.painter.paint(RED, message))
        }
    }

    pub fn render(&self, document: &Document) -> String {
        document
            .blocks
            .iter()
            .map(|block| match block {
                Block::Message(line) => line.clone(),
                Block::Text(text) => text.clone(),
                Block::Table(table) => table.render(&self.painter),
                Block::Json(value) => format!("{:#}", value),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Clone)]
pub enum Block {
    /// An already styled line.
    Message(String),
    /// Raw text printed as is, such as a zone file or a public key.
    Text(String),
    Table(Table),
    Json(Value),
}

#[derive(Debug, Clone, Default)]
pub struct Document {
    blocks: Vec<Block>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// A document holding one resource as the API sent it.
    pub fn payload<T: ApiResource>(resource: &T) -> Result<Self> {
        Ok(Self::new().with(Block::Json(resource.to_payload()?)))
    }

    /// A JSON array of resources as the API sent them, in the given order.
    pub fn payloads<T: ApiResource>(resources: &[T]) -> Result<Self> {
        let items = resources
            .iter()
            .map(ApiResource::to_payload)
            .collect::<serde_json::Result<Vec<_>>>()?;
        Ok(Self::new().with(Block::Json(Value::Array(items))))
    }

    pub fn with(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }

    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
