//! Keyframes tokens
//!
//! Keyframes are the only composite token: an ordered list of stops
//! (`"0%, 100%"`, `"50%"`, `from`, `to`), each holding property/value pairs
//! exactly as declared.

use indexmap::IndexMap;

/// A single keyframe stop
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyframeStop {
    /// Stop selector text, e.g. `0%, 100%`
    pub offset: String,
    /// Declared property/value pairs, in declaration order
    pub declarations: IndexMap<String, String>,
}

/// Ordered keyframe stops for one `@keyframes` block
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Keyframes {
    stops: Vec<KeyframeStop>,
}

impl Keyframes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a stop, replacing an existing stop with the same offset
    pub fn push_stop(
        &mut self,
        offset: impl Into<String>,
        declarations: IndexMap<String, String>,
    ) {
        let offset = offset.into();
        if let Some(existing) = self.stops.iter_mut().find(|s| s.offset == offset) {
            existing.declarations = declarations;
        } else {
            self.stops.push(KeyframeStop {
                offset,
                declarations,
            });
        }
    }

    /// Builder-style variant of [`Keyframes::push_stop`]
    pub fn with_stop<K, V>(mut self, offset: &str, declarations: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let declarations = declarations
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.push_stop(offset, declarations);
        self
    }

    pub fn stops(&self) -> &[KeyframeStop] {
        &self.stops
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_stop_replaces_same_offset() {
        let frames = Keyframes::new()
            .with_stop("0%, 100%", [("opacity", "1")])
            .with_stop("50%", [("opacity", ".7")])
            .with_stop("0%, 100%", [("opacity", "0.9")]);

        assert_eq!(frames.stops().len(), 2);
        assert_eq!(frames.stops()[0].offset, "0%, 100%");
        assert_eq!(frames.stops()[0].declarations["opacity"], "0.9");
        assert_eq!(frames.stops()[1].offset, "50%");
    }
}
