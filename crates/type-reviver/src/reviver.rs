//! Reviver shapes and the arguments they receive.

use std::fmt;
use std::sync::Arc;

use custom_json_value::{Key, Value};
use serde::Deserialize;

/// Error type revivers may fail with.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Stringify direction: live value to payload.
pub type StringifyFn = Arc<dyn Fn(StringifyArgs<'_>) -> Result<Revived, BoxError> + Send + Sync>;

/// Parse direction: payload back to live value.
pub type ParseFn = Arc<dyn Fn(ParseArgs<'_>) -> Result<Value, BoxError> + Send + Sync>;

/// Envelope controls that apply to one stringify call and that a reviver can
/// override for a single invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MarkFlags {
    /// Keep the original value and discard the reviver's payload.
    pub skip: bool,
    /// Write the payload without an envelope.
    pub skip_mark: bool,
    /// Write the root's payload without an envelope.
    pub skip_root_mark: bool,
}

/// What a stringify reviver receives for one node.
#[derive(Debug, Clone, Copy)]
pub struct StringifyArgs<'a> {
    pub key: Key<'a>,
    pub value: &'a Value,
    /// Name the reviver was found under; `"default"` for the default reviver.
    pub type_name: &'a str,
    /// 1-based visit count within the current call; the root is 1.
    pub call_count: usize,
    /// Call-level flags in effect for this node.
    pub flags: MarkFlags,
    /// Envelope mark of the current call.
    pub mark: &'a str,
    /// Whether the current call leaves the root to plain encoding.
    pub skip_root: bool,
}

/// What a parse reviver receives for one envelope.
#[derive(Debug)]
pub struct ParseArgs<'a> {
    pub key: Key<'a>,
    /// The envelope's payload, already revived bottom-up.
    pub value: Value,
    pub type_name: &'a str,
    pub call_count: usize,
}

/// A stringify reviver's response: the payload plus per-invocation flag
/// overrides. `None` keeps the call-level flag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Revived {
    pub payload: Value,
    pub skip: Option<bool>,
    pub skip_mark: Option<bool>,
    pub skip_root_mark: Option<bool>,
}

impl Revived {
    pub fn new(payload: Value) -> Self {
        Self {
            payload,
            ..Self::default()
        }
    }

    /// Leave the node as it was.
    pub fn skipped() -> Self {
        Self::default().with_skip(true)
    }

    /// Payload written bare, without an envelope.
    pub fn unmarked(payload: Value) -> Self {
        Self::new(payload).with_skip_mark(true)
    }

    pub fn with_skip(mut self, skip: bool) -> Self {
        self.skip = Some(skip);
        self
    }

    pub fn with_skip_mark(mut self, skip_mark: bool) -> Self {
        self.skip_mark = Some(skip_mark);
        self
    }

    pub fn with_skip_root_mark(mut self, skip_root_mark: bool) -> Self {
        self.skip_root_mark = Some(skip_root_mark);
        self
    }

    /// Flags in effect after applying this response's overrides to `base`.
    pub fn flags(&self, base: MarkFlags) -> MarkFlags {
        MarkFlags {
            skip: self.skip.unwrap_or(base.skip),
            skip_mark: self.skip_mark.unwrap_or(base.skip_mark),
            skip_root_mark: self.skip_root_mark.unwrap_or(base.skip_root_mark),
        }
    }
}

impl From<Value> for Revived {
    fn from(payload: Value) -> Self {
        Revived::new(payload)
    }
}

/// A type-specific converter, in one of three shapes.
///
/// The shape is fixed when the reviver is built: a stringify-only reviver is
/// invisible to the parse engine and vice versa.
#[derive(Clone)]
pub enum Reviver {
    Stringify(StringifyFn),
    Parse(ParseFn),
    Pair { stringify: StringifyFn, parse: ParseFn },
}

impl Reviver {
    pub fn stringify<F>(f: F) -> Self
    where
        F: Fn(StringifyArgs<'_>) -> Result<Revived, BoxError> + Send + Sync + 'static,
    {
        Reviver::Stringify(Arc::new(f))
    }

    pub fn parse<F>(f: F) -> Self
    where
        F: Fn(ParseArgs<'_>) -> Result<Value, BoxError> + Send + Sync + 'static,
    {
        Reviver::Parse(Arc::new(f))
    }

    pub fn pair<S, P>(stringify: S, parse: P) -> Self
    where
        S: Fn(StringifyArgs<'_>) -> Result<Revived, BoxError> + Send + Sync + 'static,
        P: Fn(ParseArgs<'_>) -> Result<Value, BoxError> + Send + Sync + 'static,
    {
        Reviver::Pair {
            stringify: Arc::new(stringify),
            parse: Arc::new(parse),
        }
    }

    pub fn stringify_fn(&self) -> Option<&StringifyFn> {
        match self {
            Reviver::Stringify(f) | Reviver::Pair { stringify: f, .. } => Some(f),
            Reviver::Parse(_) => None,
        }
    }

    pub fn parse_fn(&self) -> Option<&ParseFn> {
        match self {
            Reviver::Parse(f) | Reviver::Pair { parse: f, .. } => Some(f),
            Reviver::Stringify(_) => None,
        }
    }
}

impl fmt::Debug for Reviver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shape = match self {
            Reviver::Stringify(_) => "Stringify",
            Reviver::Parse(_) => "Parse",
            Reviver::Pair { .. } => "Pair",
        };
        write!(f, "Reviver::{shape}")
    }
}
