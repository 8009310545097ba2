use std::collections::HashSet;

use crate::patterns::KEYFRAMES_BLOCK;

/// A `@keyframes` rule as it appears in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyframesBlock<'a> {
    pub name: &'a str,
    /// Full verbatim rule, from `@` to the closing brace.
    pub rule: &'a str,
}

/// Find every `@keyframes` rule, keeping only the first block per name.
///
/// Prefixed variants (`@-webkit-keyframes`) share the name namespace with
/// the unprefixed rule. A block with unbalanced or doubly nested braces does
/// not match and is skipped; scanning resumes after it.
#[must_use]
pub fn discover_keyframes(css: &str) -> Vec<KeyframesBlock<'_>> {
    let mut seen = HashSet::new();
    let mut blocks = Vec::new();

    for caps in KEYFRAMES_BLOCK.captures_iter(css) {
        let (Some(rule), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if seen.insert(name.as_str()) {
            blocks.push(KeyframesBlock {
                name: name.as_str(),
                rule: rule.as_str(),
            });
        }
    }

    blocks
}
