//! Per-call options of the engines.
//!
//! Both option structs deserialize from camelCase configuration, e.g.
//! `{"mark": "$t", "space": 2, "skipRoot": true}`.

use std::fmt;

use custom_json_type_reviver::MarkFlags;
use custom_json_value::codec::Space;
use serde::Deserialize;

/// Envelope key used when no mark is configured.
pub const DEFAULT_MARK: &str = "__MarKOfCustomJSON__";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StringifyOptions {
    pub mark: Option<String>,
    pub space: Space,
    /// Leave the root value to the plain encoder.
    pub skip_root: bool,
    #[serde(flatten)]
    pub flags: MarkFlags,
}

impl StringifyOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark(&self) -> &str {
        self.mark.as_deref().unwrap_or(DEFAULT_MARK)
    }

    pub fn with_mark(mut self, mark: impl Into<String>) -> Self {
        self.mark = Some(mark.into());
        self
    }

    pub fn with_space(mut self, space: impl Into<Space>) -> Self {
        self.space = space.into();
        self
    }

    pub fn with_skip_root(mut self, skip_root: bool) -> Self {
        self.skip_root = skip_root;
        self
    }

    pub fn with_skip(mut self, skip: bool) -> Self {
        self.flags.skip = skip;
        self
    }

    pub fn with_skip_mark(mut self, skip_mark: bool) -> Self {
        self.flags.skip_mark = skip_mark;
        self
    }

    pub fn with_skip_root_mark(mut self, skip_root_mark: bool) -> Self {
        self.flags.skip_root_mark = skip_root_mark;
        self
    }
}

/// What the parse engine does with an envelope whose type has no reviver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LostReviver {
    /// Keep the envelope object as decoded.
    Original,
    /// Unwrap the payload without reconstructing it.
    #[default]
    Parse,
    /// Replace the node with undefined.
    Ignore,
}

impl fmt::Display for LostReviver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LostReviver::Original => "original",
            LostReviver::Parse => "parse",
            LostReviver::Ignore => "ignore",
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParseOptions {
    pub mark: Option<String>,
    pub lost_reviver: LostReviver,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark(&self) -> &str {
        self.mark.as_deref().unwrap_or(DEFAULT_MARK)
    }

    pub fn with_mark(mut self, mark: impl Into<String>) -> Self {
        self.mark = Some(mark.into());
        self
    }

    pub fn with_lost_reviver(mut self, lost_reviver: LostReviver) -> Self {
        self.lost_reviver = lost_reviver;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = StringifyOptions::default();
        assert_eq!(options.mark(), DEFAULT_MARK);
        assert_eq!(options.space, Space::None);
        assert!(!options.skip_root && !options.flags.skip);
        assert_eq!(ParseOptions::default().lost_reviver, LostReviver::Parse);
    }

    #[test]
    fn stringify_options_from_json() {
        let options: StringifyOptions = serde_json::from_str(
            r#"{"mark": "$t", "space": "  ", "skipRoot": true, "skipMark": true}"#,
        )
        .unwrap();
        assert_eq!(
            options,
            StringifyOptions::new()
                .with_mark("$t")
                .with_space("  ")
                .with_skip_root(true)
                .with_skip_mark(true)
        );
    }

    #[test]
    fn parse_options_from_toml() {
        let options: ParseOptions =
            toml::from_str("mark = \"@\"\nlostReviver = \"ignore\"\n").unwrap();
        assert_eq!(options.mark(), "@");
        assert_eq!(options.lost_reviver, LostReviver::Ignore);
        assert_eq!(options.lost_reviver.to_string(), "ignore");
    }
}
