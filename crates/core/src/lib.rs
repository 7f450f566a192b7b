#![forbid(unsafe_code)]

//! Hook I/O protocol shared by every P.A.C.E. hook: one JSON document in on stdin,
//! at most one JSON object out on stdout, exit code for the outcome.

pub mod error {
    /// Everything that can go wrong while serving one hook invocation.
    ///
    /// The host only ever sees the one-line [`HookError::diagnostic`] and exit code `1`;
    /// the variants exist for logging and tests.
    #[derive(Debug, thiserror::Error)]
    pub enum HookError {
        #[error("read stdin failed: {0}")]
        ReadInput(#[source] std::io::Error),
        #[error("malformed request: {0}")]
        MalformedRequest(#[source] serde_json::Error),
        #[error("resolve working directory failed: {0}")]
        WorkingDir(#[source] std::io::Error),
        #[error("encode response failed: {0}")]
        EncodeResponse(#[source] serde_json::Error),
        #[error("write stdout failed: {0}")]
        WriteOutput(#[source] std::io::Error),
    }

    impl HookError {
        pub fn kind(&self) -> &'static str {
            match self {
                Self::ReadInput(_) => "read_input",
                Self::MalformedRequest(_) => "malformed_request",
                Self::WorkingDir(_) => "working_dir",
                Self::EncodeResponse(_) => "encode_response",
                Self::WriteOutput(_) => "write_output",
            }
        }

        /// `<label>: <detail>` flattened to a single line.
        pub fn diagnostic(&self, label: &str) -> String {
            let detail = self
                .to_string()
                .split(['\r', '\n'])
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .collect::<Vec<_>>()
                .join(" ");
            format!("{label}: {detail}")
        }
    }

    pub type HookResult<T> = Result<T, HookError>;
}

pub mod request {
    use crate::error::{HookError, HookResult};
    use serde::Deserialize;
    use serde_json::Value;
    use std::io::Read;

    /// Loosely typed request payload. Any JSON document is accepted; a non-object
    /// document behaves as an object without fields.
    #[derive(Clone, Debug, PartialEq, serde::Deserialize)]
    #[serde(transparent)]
    pub struct Request(Value);

    impl Request {
        pub fn as_value(&self) -> &Value {
            &self.0
        }

        pub fn get(&self, key: &str) -> Option<&Value> {
            self.0.as_object().and_then(|obj| obj.get(key))
        }

        /// String value of `key`, or `""` when missing or not a string.
        pub fn str_field(&self, key: &str) -> &str {
            self.get(key).and_then(Value::as_str).unwrap_or("")
        }
    }

    /// Nesting depth is unbounded; the stack grows on the heap as needed.
    pub fn decode_request(text: &str) -> HookResult<Request> {
        let mut de = serde_json::Deserializer::from_str(text);
        de.disable_recursion_limit();
        let value = Value::deserialize(serde_stacker::Deserializer::new(&mut de))
            .map_err(HookError::MalformedRequest)?;
        de.end().map_err(HookError::MalformedRequest)?;
        Ok(Request(value))
    }

    /// Reads the whole stream before decoding; the host closes stdin after one payload.
    pub fn read_request(mut reader: impl Read) -> HookResult<Request> {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(HookError::ReadInput)?;
        decode_request(&text)
    }
}

pub mod response {
    use crate::error::{HookError, HookResult};
    use serde_json::{Map, Value};

    /// Loosely typed response payload; keys keep insertion order on the wire.
    #[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
    #[serde(transparent)]
    pub struct Response(Map<String, Value>);

    impl Response {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
            self.0.insert(key.to_string(), value.into());
            self
        }

        pub fn get(&self, key: &str) -> Option<&Value> {
            self.0.get(key)
        }

        pub fn into_value(self) -> Value {
            Value::Object(self.0)
        }
    }

    pub fn encode_response(response: &Response) -> HookResult<String> {
        serde_json::to_string(response).map_err(HookError::EncodeResponse)
    }
}

pub use error::{HookError, HookResult};
pub use request::{Request, decode_request, read_request};
pub use response::{Response, encode_response};
