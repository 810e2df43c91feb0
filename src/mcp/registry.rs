//! Static catalog of tool definitions.
//!
//! Every tool is described once, at process start, by its name, a
//! human-readable description and a set of typed parameter descriptors.
//! The descriptors drive two things: the mechanical argument validation
//! in the dispatcher, and the JSON Schema advertised to clients via
//! `tools/list`. Keeping a single source of truth means the schema a
//! client sees and the checks its calls are held to cannot drift apart.

use serde_json::{json, Map, Value};

/// Coarse parameter type used for mechanical argument validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// A JSON string (including identifier-as-string values such as note IDs).
    String,
    /// A JSON number.
    Number,
}

impl ParamKind {
    /// JSON Schema type name for this kind.
    #[must_use]
    pub const fn schema_type(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
        }
    }
}

/// Descriptor for a single tool parameter.
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    /// Parameter name as it appears in the arguments object.
    pub name: &'static str,
    /// Coarse type the argument must have.
    pub kind: ParamKind,
    /// Whether the argument must be present.
    pub required: bool,
    /// Description shown in the generated schema.
    pub description: &'static str,
}

/// A registered tool: unique name, description and parameter descriptors.
#[derive(Debug, Clone, Copy)]
pub struct ToolDefinition {
    /// Unique tool name, the dispatch key.
    pub name: &'static str,
    /// Human-readable description.
    pub description: &'static str,
    /// Parameter descriptors, in declaration order.
    pub params: &'static [ParamSpec],
}

impl ToolDefinition {
    /// Builds the MCP `inputSchema` JSON for this tool.
    #[must_use]
    pub fn input_schema(&self) -> Value {
        let mut properties = Map::new();
        let mut required = Vec::new();

        for param in self.params {
            properties.insert(
                param.name.to_string(),
                json!({
                    "type": param.kind.schema_type(),
                    "description": param.description,
                }),
            );
            if param.required {
                required.push(Value::String(param.name.to_string()));
            }
        }

        let mut schema = json!({
            "type": "object",
            "properties": properties,
        });
        if !required.is_empty() {
            schema["required"] = Value::Array(required);
        }
        schema
    }

    /// Serialises this definition for a `tools/list` response.
    #[must_use]
    pub fn to_listing(&self) -> Value {
        json!({
            "name": self.name,
            "description": self.description,
            "inputSchema": self.input_schema(),
        })
    }
}

/// The built-in tool catalog, in declaration order.
const TOOLS: &[ToolDefinition] = &[
    ToolDefinition {
        name: "add_note",
        description: "Add a new note to the system",
        params: &[
            ParamSpec {
                name: "title",
                kind: ParamKind::String,
                required: true,
                description: "Title of the note",
            },
            ParamSpec {
                name: "content",
                kind: ParamKind::String,
                required: true,
                description: "Content of the note",
            },
        ],
    },
    ToolDefinition {
        name: "get_note",
        description: "Retrieve a note by its ID",
        params: &[ParamSpec {
            name: "id",
            kind: ParamKind::String,
            required: true,
            description: "ID of the note to retrieve",
        }],
    },
    ToolDefinition {
        name: "list_notes",
        description: "List all available notes",
        params: &[],
    },
    ToolDefinition {
        name: "delete_note",
        description: "Delete a note by its ID",
        params: &[ParamSpec {
            name: "id",
            kind: ParamKind::String,
            required: true,
            description: "ID of the note to delete",
        }],
    },
    ToolDefinition {
        name: "search_notes",
        description: "Search notes by keyword in title or content",
        params: &[
            ParamSpec {
                name: "keyword",
                kind: ParamKind::String,
                required: true,
                description: "Keyword to search for",
            },
            ParamSpec {
                name: "search_in",
                kind: ParamKind::String,
                required: false,
                description: "Where to search: 'title', 'content', or 'both' (default)",
            },
            ParamSpec {
                name: "limit",
                kind: ParamKind::Number,
                required: false,
                description: "Maximum number of matches to return (default: all)",
            },
        ],
    },
    ToolDefinition {
        name: "calculate",
        description: "Perform basic mathematical calculations",
        params: &[ParamSpec {
            name: "expression",
            kind: ParamKind::String,
            required: true,
            description: "Mathematical expression to evaluate (e.g., '2 + 3 * 4')",
        }],
    },
    ToolDefinition {
        name: "get_current_time",
        description: "Get the current date and time",
        params: &[],
    },
];

/// Read-only lookup over the tool catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToolRegistry;

impl ToolRegistry {
    /// Creates the registry.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Resolves a tool by name.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<&'static ToolDefinition> {
        TOOLS.iter().find(|tool| tool.name == name)
    }

    /// All tool definitions, in declaration order.
    #[must_use]
    pub const fn list(&self) -> &'static [ToolDefinition] {
        TOOLS
    }
}
