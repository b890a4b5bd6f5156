//! Tool definitions and handlers
//!
//! Tools:
//! - list_categories: category names in display order
//! - list_units: units of one category with symbols and factors
//! - convert: convert a value between two units of a category
//! - convert_expression: evaluate "1000 m -> km" style text

use serde_json::{json, Value as JsonValue};
use tracing::{info, warn};
use unitconv_core::ConvertError;
use unitconv_units::{parse_value, Conversion};
use crate::config::clamp_precision;
use crate::protocol::{McpError, Server};

const TOOL_NAMES: [&str; 4] = ["list_categories", "list_units", "convert", "convert_expression"];

pub fn list() -> JsonValue {
    json!({
        "tools": [
            {
                "name": "list_categories",
                "description": "List the unit categories, in display order.",
                "inputSchema": {
                    "type": "object",
                    "properties": {}
                }
            },
            {
                "name": "list_units",
                "description": "List the units of a category with their symbols and conversion factors.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "category": {
                            "type": "string",
                            "description": "Category name, e.g. \"Length\""
                        }
                    },
                    "required": ["category"]
                }
            },
            {
                "name": "convert",
                "description": "Convert a value between two units of the same category. Unit names and symbols are case-insensitive.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "category": {
                            "type": "string",
                            "description": "Category name, e.g. \"Length\""
                        },
                        "from_unit": {
                            "type": "string",
                            "description": "Source unit name or symbol, e.g. \"Meter\" or \"m\""
                        },
                        "to_unit": {
                            "type": "string",
                            "description": "Target unit name or symbol, e.g. \"Kilometer\" or \"km\""
                        },
                        "value": {
                            "type": ["number", "string"],
                            "description": "Value to convert"
                        },
                        "precision": {
                            "type": "integer",
                            "description": "Decimals in the formatted result (default: 8)"
                        }
                    },
                    "required": ["category", "from_unit", "to_unit", "value"]
                }
            },
            {
                "name": "convert_expression",
                "description": "Convert a written expression such as \"1000 m -> km\" or \"2 kg to g\".",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "expression": {
                            "type": "string",
                            "description": "\"<value> <unit> -> <unit>\""
                        },
                        "precision": {
                            "type": "integer",
                            "description": "Decimals in the formatted result (default: 8)"
                        }
                    },
                    "required": ["expression"]
                }
            }
        ]
    })
}

pub fn call(server: &Server, params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
    let params = params.as_ref()
        .ok_or_else(|| McpError::invalid_params("Missing params"))?;

    let name = params.get("name")
        .and_then(|v| v.as_str())
        .ok_or_else(|| McpError::invalid_params("Missing tool name"))?;

    let args = params.get("arguments").cloned().unwrap_or(json!({}));

    info!(tool = name, "tool call");

    match name {
        "list_categories" => Ok(tool_list_categories(server)),
        "list_units" => tool_list_units(server, &args),
        "convert" => tool_convert(server, &args),
        "convert_expression" => tool_convert_expression(server, &args),
        _ => Err(McpError::invalid_params(format!("Unknown tool: {}", name))
            .with_data(json!({ "available": TOOL_NAMES }))),
    }
}

fn tool_list_categories(server: &Server) -> JsonValue {
    let categories = server.converter.catalog().list_categories();
    json!({
        "content": [{ "type": "text", "text": categories.join(", ") }],
        "categories": categories
    })
}

fn tool_list_units(server: &Server, args: &JsonValue) -> Result<JsonValue, McpError> {
    let name = required_str(args, "category")?;

    let category = match server.converter.catalog().category(name) {
        Ok(c) => c,
        Err(e) => return Ok(tool_error(&e)),
    };

    let lines: Vec<String> = category.units.iter()
        .map(|u| format!("- {} ({}): {}", u.name, u.symbol, u.conversion_factor))
        .collect();

    Ok(json!({
        "content": [{
            "type": "text",
            "text": format!("{} (base: {})\n{}", category.name, category.base_unit, lines.join("\n"))
        }],
        "category": category.name,
        "base_unit": category.base_unit,
        "units": category.units
    }))
}

fn tool_convert(server: &Server, args: &JsonValue) -> Result<JsonValue, McpError> {
    let category = required_str(args, "category")?;
    let from_unit = required_str(args, "from_unit")?;
    let to_unit = required_str(args, "to_unit")?;
    let raw = args.get("value")
        .ok_or_else(|| McpError::invalid_params("Missing value argument"))?;
    let precision = precision_arg(server, args)?;

    let result = json_to_value(raw)
        .and_then(|value| server.converter.convert_detailed(category, from_unit, to_unit, value));

    Ok(match result {
        Ok(conversion) => conversion_result(&conversion, precision),
        Err(e) => tool_error(&e),
    })
}

fn tool_convert_expression(server: &Server, args: &JsonValue) -> Result<JsonValue, McpError> {
    let expression = required_str(args, "expression")?;
    let precision = precision_arg(server, args)?;

    Ok(match server.converter.convert_expression(expression) {
        Ok(conversion) => conversion_result(&conversion, precision),
        Err(e) => tool_error(&e),
    })
}

fn required_str<'a>(args: &'a JsonValue, key: &str) -> Result<&'a str, McpError> {
    args.get(key)
        .and_then(|v| v.as_str())
        .ok_or_else(|| McpError::invalid_params(format!("Missing {} argument", key)))
}

/// Absent or null means the configured default; anything else must be a non-negative integer
fn precision_arg(server: &Server, args: &JsonValue) -> Result<usize, McpError> {
    match args.get("precision") {
        None | Some(JsonValue::Null) => Ok(server.config.precision),
        Some(v) => v.as_u64()
            .map(|p| clamp_precision(usize::try_from(p).unwrap_or(usize::MAX)))
            .ok_or_else(|| McpError::invalid_params(
                format!("precision must be a non-negative integer, got {}", v)
            )),
    }
}

/// Numbers pass through; strings are parsed like typed-in form text
fn json_to_value(json: &JsonValue) -> Result<f64, ConvertError> {
    match json {
        JsonValue::Number(n) => n.as_f64()
            .ok_or_else(|| ConvertError::invalid_input(n.to_string(), "not representable as f64")),
        JsonValue::String(s) => parse_value(s),
        other => Err(ConvertError::invalid_input(other.to_string(), "expected a number")),
    }
}

fn conversion_result(conversion: &Conversion, precision: usize) -> JsonValue {
    json!({
        "content": [{ "type": "text", "text": conversion.format(precision) }],
        "category": conversion.category,
        "value": conversion.from.value,
        "from": { "name": conversion.from.unit.name, "symbol": conversion.from.unit.symbol },
        "result": conversion.to.value,
        "to": { "name": conversion.to.unit.name, "symbol": conversion.to.unit.symbol },
        "formatted": conversion.to.format(precision),
        "isError": false
    })
}

fn tool_error(err: &ConvertError) -> JsonValue {
    warn!(code = err.code(), error = %err, "tool call failed");
    let report = err.report();
    let text = report.to_string();
    json!({
        "content": [{ "type": "text", "text": text }],
        "error": report,
        "isError": true
    })
}
