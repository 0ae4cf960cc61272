//! Stringify engine: values to JSON text with reviver envelopes.

use std::borrow::Cow;

use custom_json_type_reviver::{
    flat_parse_type_revivers, merge_type_revivers, FlatTypeRevivers, Reviver, StringifyArgs,
    StringifyFn, TypeReviverMap, TypeRevivers, DEFAULT_TYPE_NAME,
};
use custom_json_value::codec::{EncodeVisitor, JsonEncoder};
use custom_json_value::{exact_type_name, Key, Value};
use tracing::{debug, trace};

use crate::mark::MarkKeys;
use crate::{Error, Result, StringifyOptions};

/// Stringify engine holding a preset registry that applies to every call.
#[derive(Debug, Clone, Default)]
pub struct CustomJsonStringify {
    preset: TypeReviverMap,
}

impl CustomJsonStringify {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_preset(preset: TypeReviverMap) -> Self {
        Self { preset }
    }

    pub fn preset(&self) -> &TypeReviverMap {
        &self.preset
    }

    pub fn preset_mut(&mut self) -> &mut TypeReviverMap {
        &mut self.preset
    }

    pub fn set_preset(&mut self, preset: TypeReviverMap) {
        self.preset = preset;
    }

    /// Encodes `value`, letting the preset plus `revivers` rewrite nodes by
    /// type name. Entries of `revivers` override preset entries.
    ///
    /// Native hooks of every type that owns a reviver are bypassed for this
    /// call only, so those revivers see the original custom value.
    pub fn stringify(
        &self,
        value: &Value,
        revivers: Option<&TypeRevivers>,
        options: &StringifyOptions,
    ) -> Result<String> {
        let flat = flat_parse_type_revivers(&merge_type_revivers(&self.preset, revivers));
        let encoder = JsonEncoder::new().with_space(&options.space);
        if flat.is_empty() {
            debug!("no revivers registered, encoding plain JSON");
            return Ok(encoder.encode(value)?);
        }

        let keys = MarkKeys::new(options.mark());
        debug!(
            revivers = flat.lookup.len(),
            mark = %keys.mark,
            skip_root = options.skip_root,
            "stringify with revivers"
        );
        let encoder = encoder.bypass_hooks(flat.owner_types.iter().map(String::as_str));
        let mut walk = StringifyWalk {
            flat: &flat,
            fallback: flat.default_reviver().and_then(Reviver::stringify_fn),
            keys: &keys,
            options,
            call_count: 0,
        };
        encoder.encode_with(value, &mut walk)
    }
}

struct StringifyWalk<'a> {
    flat: &'a FlatTypeRevivers,
    fallback: Option<&'a StringifyFn>,
    keys: &'a MarkKeys,
    options: &'a StringifyOptions,
    call_count: usize,
}

impl StringifyWalk<'_> {
    fn lookup<'v>(&self, value: &'v Value) -> Option<(&'v str, &StringifyFn)> {
        let exact = exact_type_name(value);
        match self.flat.get(exact).and_then(Reviver::stringify_fn) {
            Some(reviver) => Some((exact, reviver)),
            None => self.fallback.map(|reviver| (DEFAULT_TYPE_NAME, reviver)),
        }
    }
}

impl EncodeVisitor for StringifyWalk<'_> {
    type Error = Error;

    fn visit<'v>(&mut self, key: Key<'_>, value: &'v Value) -> Result<Cow<'v, Value>> {
        self.call_count += 1;
        // envelope members written by an outer reviver pass through
        if self.keys.is_reserved(key) {
            return Ok(Cow::Borrowed(value));
        }
        if self.options.skip_root && self.call_count == 1 {
            return Ok(Cow::Borrowed(value));
        }
        let Some((type_name, reviver)) = self.lookup(value) else {
            return Ok(Cow::Borrowed(value));
        };

        let revived = reviver(StringifyArgs {
            key,
            value,
            type_name,
            call_count: self.call_count,
            flags: self.options.flags,
            mark: self.options.mark(),
            skip_root: self.options.skip_root,
        })
        .map_err(|source| Error::reviver(type_name, source))?;

        let flags = revived.flags(self.options.flags);
        if flags.skip {
            return Ok(Cow::Borrowed(value));
        }
        let is_root = self.call_count == 1;
        if revived.payload.is_undefined() || flags.skip_mark || (flags.skip_root_mark && is_root) {
            trace!(%key, type_name, "writing bare payload");
            return Ok(Cow::Owned(revived.payload));
        }
        trace!(%key, type_name, "wrapping payload");
        Ok(Cow::Owned(self.keys.wrap(type_name, revived.payload)))
    }
}
