//! Tool dispatch engine.
//!
//! [`Dispatcher::invoke`] is the single entry point for executing a
//! tool: it resolves the name against the registry, validates the
//! arguments against the tool's parameter descriptors, runs the
//! handler, and wraps the outcome in a [`ToolCallResult`]. Every code
//! path returns a well-formed result — resolution failures, validation
//! failures and handler failures all become `is_error` responses, so
//! the transport always has something it can serialise.

use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::Local;
use serde::Serialize;
use serde_json::Value;

use crate::calc;
use crate::error::ToolError;
use crate::mcp::registry::{ParamKind, ToolDefinition, ToolRegistry};
use crate::notes::NoteStore;

/// Content item in a tool call response.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ToolContent {
    /// Text content.
    Text {
        /// The text content.
        text: String,
    },
}

/// Result of a tool call.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolCallResult {
    /// Content returned by the tool.
    pub content: Vec<ToolContent>,
    /// Whether the tool call resulted in an error.
    #[serde(skip_serializing_if = "is_false")]
    pub is_error: bool,
}

#[allow(clippy::trivially_copy_pass_by_ref)] // serde's skip_serializing_if requires a predicate fn(&T) -> bool, so we must take &bool here
const fn is_false(b: &bool) -> bool {
    !*b
}

impl ToolCallResult {
    /// Creates a successful text result.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text { text: text.into() }],
            is_error: false,
        }
    }

    /// Creates an error text result.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text {
                text: message.into(),
            }],
            is_error: true,
        }
    }

    /// The text of the first content item.
    #[must_use]
    pub fn first_text(&self) -> &str {
        match &self.content[0] {
            ToolContent::Text { text } => text,
        }
    }
}

/// Resolves tool names to handlers and enforces the response contract.
///
/// Owns the note store; the registry is a read-only catalog. The store
/// sits behind a mutex so concurrent invocations cannot interleave
/// creates and deletes or duplicate an ID.
#[derive(Debug)]
pub struct Dispatcher {
    registry: ToolRegistry,
    store: Mutex<NoteStore>,
}

impl Dispatcher {
    /// Creates a dispatcher over the given note store.
    #[must_use]
    pub const fn new(store: NoteStore) -> Self {
        Self {
            registry: ToolRegistry::new(),
            store: Mutex::new(store),
        }
    }

    /// The tool registry backing this dispatcher.
    #[must_use]
    pub const fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Executes a tool call.
    ///
    /// Never panics and never returns a Rust error: unknown tools,
    /// invalid arguments and handler failures are all reported through
    /// the `is_error` flag of the returned result.
    pub fn invoke(&self, name: &str, arguments: &Value) -> ToolCallResult {
        tracing::debug!(tool = name, "dispatching tool call");

        match self.try_invoke(name, arguments) {
            Ok(text) => ToolCallResult::text(text),
            Err(e) => {
                tracing::warn!(tool = name, error = %e, "tool call failed");
                ToolCallResult::error(e.to_string())
            }
        }
    }

    fn try_invoke(&self, name: &str, arguments: &Value) -> Result<String, ToolError> {
        let tool = self
            .registry
            .resolve(name)
            .ok_or_else(|| ToolError::UnknownTool {
                name: name.to_string(),
            })?;

        validate_arguments(tool, arguments)?;

        match tool.name {
            "add_note" => self.add_note(arguments),
            "get_note" => self.get_note(arguments),
            "list_notes" => self.list_notes(),
            "delete_note" => self.delete_note(arguments),
            "search_notes" => self.search_notes(arguments),
            "calculate" => Self::calculate(arguments),
            "get_current_time" => Ok(Self::current_time()),
            other => Err(ToolError::UnknownTool {
                name: other.to_string(),
            }),
        }
    }

    /// Locks the note store. A poisoned lock is recovered rather than
    /// propagated: the store's state is valid after any single failed
    /// operation, and the invoke contract forbids panicking here.
    fn lock_store(&self) -> MutexGuard<'_, NoteStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // ==================== Tool Handlers ====================

    fn add_note(&self, arguments: &Value) -> Result<String, ToolError> {
        let title = str_arg(arguments, "title")?;
        let content = str_arg(arguments, "content")?;

        let note = self.lock_store().create(title, content)?;
        Ok(format!("Note added successfully! ID: {}", note.id))
    }

    fn get_note(&self, arguments: &Value) -> Result<String, ToolError> {
        let id = str_arg(arguments, "id")?;

        let store = self.lock_store();
        let note = store.get(id)?;
        Ok(format!(
            "Title: {}\nContent: {}\nCreated: {}",
            note.title, note.content, note.created_at
        ))
    }

    fn list_notes(&self) -> Result<String, ToolError> {
        let store = self.lock_store();
        if store.is_empty() {
            return Ok("No notes found.".to_string());
        }

        let listing = store
            .list()
            .map(|note| format!("ID: {} - {}", note.id, note.title))
            .collect::<Vec<_>>()
            .join("\n");
        Ok(format!("Notes:\n{listing}"))
    }

    fn delete_note(&self, arguments: &Value) -> Result<String, ToolError> {
        let id = str_arg(arguments, "id")?;

        self.lock_store().delete(id)?;
        Ok(format!("Note with ID {id} deleted successfully."))
    }

    fn search_notes(&self, arguments: &Value) -> Result<String, ToolError> {
        let keyword = str_arg(arguments, "keyword")?;
        let search_in = opt_str_arg(arguments, "search_in").unwrap_or("both");
        let limit = opt_limit_arg(arguments)?;

        if !matches!(search_in, "title" | "content" | "both") {
            return Err(ToolError::InvalidParameterValue {
                parameter: "search_in",
                message: format!("'{search_in}' is not one of: title, content, both"),
            });
        }
        let in_title = matches!(search_in, "title" | "both");
        let in_content = matches!(search_in, "content" | "both");

        let needle = keyword.to_lowercase();
        let store = self.lock_store();
        let matches: Vec<String> = store
            .list()
            .filter(|note| {
                (in_title && note.title.to_lowercase().contains(&needle))
                    || (in_content && note.content.to_lowercase().contains(&needle))
            })
            .take(limit.unwrap_or(usize::MAX))
            .map(|note| format!("ID: {} - {}", note.id, note.title))
            .collect();

        if matches.is_empty() {
            return Ok(format!("No notes found matching '{keyword}'."));
        }
        Ok(format!(
            "Found {} note(s) matching '{keyword}':\n{}",
            matches.len(),
            matches.join("\n")
        ))
    }

    fn calculate(arguments: &Value) -> Result<String, ToolError> {
        let expression = str_arg(arguments, "expression")?;

        let result = calc::evaluate(expression)?;
        Ok(format!("{expression} = {}", calc::format_number(result)))
    }

    fn current_time() -> String {
        format!("Current date and time: {}", Local::now().to_rfc3339())
    }
}

/// Mechanically checks `arguments` against the tool's descriptors:
/// every required parameter present, every present parameter of the
/// declared coarse type. Handlers run only on validated input.
fn validate_arguments(tool: &ToolDefinition, arguments: &Value) -> Result<(), ToolError> {
    for param in tool.params {
        let value = arguments.get(param.name).filter(|v| !v.is_null());

        let Some(value) = value else {
            if param.required {
                return Err(ToolError::MissingParameter {
                    parameter: param.name,
                });
            }
            continue;
        };

        let type_matches = match param.kind {
            ParamKind::String => value.is_string(),
            ParamKind::Number => value.is_number(),
        };
        if !type_matches {
            return Err(ToolError::InvalidParameterType {
                parameter: param.name,
                expected: param.kind.schema_type(),
            });
        }
    }
    Ok(())
}

/// Fetches a required string argument.
///
/// Validation has already established presence and type; the error
/// arm keeps this total if a handler is ever called directly.
fn str_arg<'a>(arguments: &'a Value, name: &'static str) -> Result<&'a str, ToolError> {
    arguments
        .get(name)
        .and_then(Value::as_str)
        .ok_or(ToolError::MissingParameter { parameter: name })
}

/// Fetches an optional string argument.
fn opt_str_arg<'a>(arguments: &'a Value, name: &str) -> Option<&'a str> {
    arguments.get(name).and_then(Value::as_str)
}

/// Fetches the optional numeric `limit` argument as a count.
#[allow(clippy::cast_possible_truncation)]
fn opt_limit_arg(arguments: &Value) -> Result<Option<usize>, ToolError> {
    match arguments.get("limit") {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value.as_u64().map(|v| Some(v as usize)).ok_or_else(|| {
            ToolError::InvalidParameterValue {
                parameter: "limit",
                message: "must be a non-negative integer".to_string(),
            }
        }),
    }
}
