// MCP server: newline-delimited JSON-RPC over stdio

use crate::dispatcher::Dispatcher;
use crate::protocol::{
    CallToolParams, InitializeParams, InitializeResult, JsonRpcError, JsonRpcRequest,
    JsonRpcResponse,
};
use anyhow::{Context, Result};
use bytes::BytesMut;
use futures_util::{SinkExt, StreamExt};
use serde_json::Value;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio_util::codec::{Decoder, FramedRead, FramedWrite, LinesCodec, LinesCodecError};

/// Longest inbound line accepted; longer lines are discarded and answered
/// with a parse error.
pub const MAX_MESSAGE_BYTES: usize = 4 * 1024 * 1024;

/// One inbound line, or the reason it could not be read as text.
#[derive(Debug)]
enum Inbound {
    Line(String),
    Malformed(String),
}

/// Line codec that reports undecodable or oversized lines as items, so the
/// stream keeps going. Only I/O errors end it.
struct InboundCodec {
    lines: LinesCodec,
}

impl InboundCodec {
    fn new(max_length: usize) -> Self {
        Self {
            lines: LinesCodec::new_with_max_length(max_length),
        }
    }

    fn classify(
        result: Result<Option<String>, LinesCodecError>,
    ) -> Result<Option<Inbound>, LinesCodecError> {
        match result {
            Ok(line) => Ok(line.map(Inbound::Line)),
            Err(LinesCodecError::MaxLineLengthExceeded) => Ok(Some(Inbound::Malformed(
                "message exceeds maximum length".to_string(),
            ))),
            Err(LinesCodecError::Io(e)) if e.kind() == std::io::ErrorKind::InvalidData => {
                Ok(Some(Inbound::Malformed(e.to_string())))
            }
            Err(e) => Err(e),
        }
    }
}

impl Decoder for InboundCodec {
    type Item = Inbound;
    type Error = LinesCodecError;

    fn decode(&mut self, buf: &mut BytesMut) -> Result<Option<Inbound>, LinesCodecError> {
        Self::classify(self.lines.decode(buf))
    }

    fn decode_eof(&mut self, buf: &mut BytesMut) -> Result<Option<Inbound>, LinesCodecError> {
        Self::classify(self.lines.decode_eof(buf))
    }
}

pub struct McpServer {
    dispatcher: Dispatcher,
}

impl McpServer {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Serve on the process's stdin/stdout until stdin closes.
    pub async fn start(&self) -> Result<()> {
        tracing::info!("MCP server listening on stdio");
        self.serve(tokio::io::stdin(), tokio::io::stdout()).await
    }

    /// Serve one message per line until the reader is exhausted. Each request
    /// is answered before the next line is read.
    pub async fn serve<R, W>(&self, reader: R, writer: W) -> Result<()>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut inbound = FramedRead::new(reader, InboundCodec::new(MAX_MESSAGE_BYTES));
        let mut sink = FramedWrite::new(writer, LinesCodec::new());

        while let Some(frame) = inbound.next().await {
            let response = match frame.context("Failed to read MCP message")? {
                Inbound::Line(line) => self.handle_line(&line).await,
                Inbound::Malformed(reason) => {
                    tracing::warn!(reason = %reason, "unreadable MCP message");
                    Some(JsonRpcResponse::error(Value::Null, JsonRpcError::parse_error()))
                }
            };
            if let Some(response) = response {
                let encoded = serde_json::to_string(&response)?;
                sink.send(encoded)
                    .await
                    .context("Failed to write MCP response")?;
            }
        }

        tracing::info!("stdin closed, MCP server stopping");
        Ok(())
    }

    /// Handle one raw line. Blank lines and notifications produce no reply.
    pub async fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        if line.trim().is_empty() {
            return None;
        }
        let value: Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "unparseable MCP message");
                return Some(JsonRpcResponse::error(Value::Null, JsonRpcError::parse_error()));
            }
        };

        // Valid JSON of the wrong shape: echo whatever id can be read.
        let id = value.get("id").cloned().unwrap_or(Value::Null);
        match serde_json::from_value::<JsonRpcRequest>(value) {
            Ok(request) => self.handle_request(request).await,
            Err(e) => {
                tracing::warn!(error = %e, "malformed MCP request");
                Some(JsonRpcResponse::error(
                    id,
                    JsonRpcError::invalid_request(format!("not a JSON-RPC request: {e}")),
                ))
            }
        }
    }

    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        if request.jsonrpc != "2.0" {
            let id = request.id.unwrap_or(Value::Null);
            return Some(JsonRpcResponse::error(
                id,
                JsonRpcError::invalid_request("jsonrpc must be '2.0'"),
            ));
        }

        let Some(id) = request.id else {
            tracing::debug!(method = %request.method, "notification ignored");
            return None;
        };

        let params = request.params.unwrap_or(Value::Null);
        let response = match self.dispatch_method(&request.method, params).await {
            Ok(result) => JsonRpcResponse::success(id, result),
            Err(error) => JsonRpcResponse::error(id, error),
        };
        Some(response)
    }

    async fn dispatch_method(&self, method: &str, params: Value) -> Result<Value, JsonRpcError> {
        match method {
            "initialize" => {
                if let Ok(init) = serde_json::from_value::<InitializeParams>(params) {
                    tracing::info!(
                        client = %init.client_info.name,
                        client_version = %init.client_info.version,
                        protocol = %init.protocol_version,
                        "MCP client connected"
                    );
                }
                to_result(&InitializeResult::current())
            }
            "ping" => Ok(serde_json::json!({})),
            "tools/list" => to_result(&self.dispatcher.list_tools()),
            "tools/call" => {
                let call: CallToolParams = serde_json::from_value(params).map_err(|e| {
                    JsonRpcError::invalid_params(format!("Invalid tools/call params: {e}"))
                })?;
                match self.dispatcher.call_tool(call).await {
                    Ok(result) => to_result(&result),
                    Err(err) => Err(err.to_rpc_error()),
                }
            }
            other => Err(JsonRpcError::method_not_found(other)),
        }
    }
}

fn to_result<T: serde::Serialize>(value: &T) -> Result<Value, JsonRpcError> {
    serde_json::to_value(value).map_err(|e| JsonRpcError::internal_error(e.to_string()))
}
