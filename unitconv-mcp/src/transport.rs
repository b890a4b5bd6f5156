//! Line-delimited stdio transport: one JSON-RPC message per line each way

use std::io::{self, BufRead, Write};
use serde_json::Value as JsonValue;
use tracing::{debug, info, warn};
use crate::protocol::{McpRequest, McpResponse, Server};

/// Answer requests from `reader` until end of input.
///
/// Read and write failures end the loop and are returned to the caller.
pub fn serve(server: &Server, mut reader: impl BufRead, mut writer: impl Write) -> io::Result<()> {
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            info!("client disconnected (EOF)");
            return Ok(());
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        debug!(bytes = line.len(), "received");

        if let Some(response) = handle_line(server, line) {
            write_response(&mut writer, &response)?;
        }
    }
}

/// Turn one input line into the response to send, if any
fn handle_line(server: &Server, line: &str) -> Option<McpResponse> {
    let message: JsonValue = match serde_json::from_str(line) {
        Ok(v) => v,
        Err(e) => {
            warn!(error = %e, "error parsing request");
            return Some(McpResponse::parse_error(e));
        }
    };

    // Read before the typed parse so a malformed request still gets its id back
    let id = message.get("id").filter(|id| !id.is_null()).cloned();

    let request: McpRequest = match serde_json::from_value(message) {
        Ok(r) => r,
        Err(e) => {
            warn!(error = %e, "invalid request");
            return Some(McpResponse::invalid_request(id, e));
        }
    };

    let response = server.handle_request(&request);

    // Notifications (no id) get no response
    if request.id.is_none() {
        debug!(method = %request.method, "notification processed");
        return None;
    }

    debug!(method = %request.method, "sending response");
    Some(response)
}

/// Write one response line and flush so the client sees it immediately
fn write_response(writer: &mut impl Write, response: &McpResponse) -> io::Result<()> {
    let json = serde_json::to_string(response)?;
    writeln!(writer, "{}", json)?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use crate::protocol::{INVALID_REQUEST, PARSE_ERROR};

    fn run(input: &str) -> Vec<JsonValue> {
        let server = Server::new(ServerConfig::default());
        let mut out = Vec::new();
        serve(&server, input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn test_notification_gets_no_response() {
        let replies = run("{\"jsonrpc\":\"2.0\",\"method\":\"notifications/initialized\"}\n");
        assert!(replies.is_empty());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let replies = run("{bad\n");
        assert_eq!(replies.len(), 1);
        assert_eq!(replies[0]["error"]["code"], PARSE_ERROR);
        assert!(replies[0].get("id").is_none());
    }

    #[test]
    fn test_missing_method_is_invalid_request() {
        let replies = run("{\"jsonrpc\":\"2.0\",\"id\":5}\n");
        assert_eq!(replies.len(), 1);
        assert_eq!(replies[0]["error"]["code"], INVALID_REQUEST);
        assert_eq!(replies[0]["id"], 5);
    }

    #[test]
    fn test_non_object_is_invalid_request() {
        let replies = run("[1, 2]\n");
        assert_eq!(replies[0]["error"]["code"], INVALID_REQUEST);
        assert!(replies[0].get("id").is_none());
    }

    #[test]
    fn test_one_response_per_request() {
        let input = concat!(
            "{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"ping\"}\n",
            "\n",
            "{\"jsonrpc\":\"2.0\",\"method\":\"initialized\"}\n",
            "{\"jsonrpc\":\"2.0\",\"id\":2,\"method\":\"tools/call\",\"params\":",
            "{\"name\":\"convert\",\"arguments\":{\"category\":\"Speed\",",
            "\"from_unit\":\"km/h\",\"to_unit\":\"m/s\",\"value\":3.6}}}\n",
        );
        let replies = run(input);
        assert_eq!(replies.len(), 2);
        assert_eq!(replies[0]["id"], 1);
        assert_eq!(replies[1]["id"], 2);
        let result = replies[1]["result"]["result"].as_f64().unwrap();
        assert!((result - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_stops_cleanly_at_eof() {
        assert!(run("").is_empty());

        // Last line without a trailing newline is still answered
        let replies = run("{\"jsonrpc\":\"2.0\",\"id\":9,\"method\":\"ping\"}");
        assert_eq!(replies.len(), 1);
        assert_eq!(replies[0]["id"], 9);
    }
}
