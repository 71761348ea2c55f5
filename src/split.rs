use crate::{config::CharTiming, core::Millis};

/// Class the host puts on every generated character span.
pub const CHAR_CLASS: &str = "char";
/// Class marking a block whose characters have been split.
pub const SPLIT_CLASS: &str = "split-chars";
/// `data-fx` value selecting the pop reveal in the stylesheet.
pub const SPLIT_FX: &str = "pop";
/// Per-char `--rand` value. Uniform: the random flourish is switched off.
pub const CHAR_RAND: &str = "0s";
/// Per-char `--rot` value. Uniform, no rotation.
pub const CHAR_ROT: &str = "0deg";

/// Source inline content of a text-bearing block, before splitting.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum InlineNode {
    Text(String),
    /// Explicit line break; preserved as-is through splitting.
    Break,
    /// A non-text child. The splitter deep-copies it through unchanged.
    Element(OpaqueNode),
}

/// Opaque markup the engine carries but never interprets.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OpaqueNode {
    pub markup: String,
}

/// One rendered node after splitting.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum SplitNode {
    /// A single non-whitespace glyph, wrapped in its own span and tagged
    /// with its sequence index.
    Char { ch: char, index: u32 },
    /// Whitespace passes through as bare text.
    Whitespace(char),
    Break,
    Passthrough(InlineNode),
}

/// Split outcome plus the block-level timing the stylesheet consumes.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SplitText {
    pub nodes: Vec<SplitNode>,
    pub base: Millis,
    pub stagger: Millis,
}

impl SplitText {
    /// `--base` style variable value.
    pub fn base_css(&self) -> String {
        self.base.to_css_seconds()
    }

    /// `--stagger` style variable value.
    pub fn stagger_css(&self) -> String {
        self.stagger.to_css_seconds()
    }

    /// Reveal delay of the character at `index`: `base + index * stagger`.
    pub fn char_delay(&self, index: u32) -> Millis {
        Millis(self.base.0 + u64::from(index) * self.stagger.0)
    }

    pub fn char_count(&self) -> u32 {
        self.nodes
            .iter()
            .filter(|n| matches!(n, SplitNode::Char { .. }))
            .count() as u32
    }
}

/// A text-bearing block of the hero. Splitting is idempotent: the first
/// call records the result and later calls are no-ops.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextBlock {
    source: Vec<InlineNode>,
    split: Option<SplitText>,
}

impl TextBlock {
    pub fn new(source: Vec<InlineNode>) -> Self {
        Self {
            source,
            split: None,
        }
    }

    pub fn from_text(text: impl Into<String>) -> Self {
        Self::new(vec![InlineNode::Text(text.into())])
    }

    pub fn is_split(&self) -> bool {
        self.split.is_some()
    }

    pub fn split(&self) -> Option<&SplitText> {
        self.split.as_ref()
    }

    /// Wrap every non-whitespace character in an indexed span node.
    /// Whitespace passes through, breaks are preserved, non-text children
    /// are copied unchanged. Does nothing on an already-split block.
    pub fn split_chars(&mut self, timing: CharTiming) {
        if self.split.is_some() {
            return;
        }

        let mut nodes = Vec::new();
        let mut index: u32 = 0;
        for node in &self.source {
            match node {
                InlineNode::Text(text) => {
                    for ch in text.chars() {
                        if ch.is_whitespace() {
                            nodes.push(SplitNode::Whitespace(ch));
                        } else {
                            nodes.push(SplitNode::Char { ch, index });
                            index += 1;
                        }
                    }
                }
                InlineNode::Break => nodes.push(SplitNode::Break),
                other => nodes.push(SplitNode::Passthrough(other.clone())),
            }
        }

        self.split = Some(SplitText {
            nodes,
            base: Millis(timing.base_ms),
            stagger: Millis(timing.stagger_ms),
        });
    }
}
