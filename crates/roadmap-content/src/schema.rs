//! Section, block and sub-block records.

use serde::{Deserialize, Serialize};

use crate::meta::Meta;

/// One topic heading (e.g. "Event Loop") with its ordered blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Heading text.
    #[serde(default)]
    pub title: String,
    /// Short paragraph under the heading.
    #[serde(default)]
    pub description: String,
    /// Blocks in presentation order.
    #[serde(default)]
    pub blocks: Vec<Block>,
}

/// One labeled facet of a section: signature, pros, cons, scenarios...
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    /// Block heading. Hidden for signature blocks.
    #[serde(default)]
    pub title: String,
    /// Body text; `\n` separates paragraphs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Presentation tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    /// Language of `code_sample` (defaults to javascript when rendered).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Items laid out in a grid under the body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_blocks: Option<Vec<SubBlock>>,
    /// Inline code sample.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_sample: Option<String>,
    /// Notes callout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Block {
    /// Sub-blocks, treating an absent list as empty.
    #[must_use]
    pub fn sub_blocks(&self) -> &[SubBlock] {
        self.sub_blocks.as_deref().unwrap_or_default()
    }

    /// True when the block is a code signature banner.
    #[must_use]
    pub fn is_signature(&self) -> bool {
        self.meta == Some(Meta::Signature)
    }
}

/// One bullet-level item inside a block: a single pro, con or scenario.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubBlock {
    /// Item heading.
    #[serde(default)]
    pub title: String,
    /// Body text; `\n` separates paragraphs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Marks the item as a tip (success styling).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip: Option<bool>,
    /// Tool tags shown as chips.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<Tool>>,
    /// Inline code sample.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_sample: Option<String>,
    /// Own presentation tag. Rendering uses the parent block's tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    /// Notes callout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl SubBlock {
    /// True when `tip` is set to `true`.
    #[must_use]
    pub fn is_tip(&self) -> bool {
        self.tip.unwrap_or(false)
    }
}

/// A tool tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    /// Tool name.
    #[serde(default)]
    pub tool: String,
}

/// A suspicious entry found by [`lint_sections`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentWarning {
    /// Position of the entry, e.g. `sections[2].blocks[0].subBlocks[1]`.
    pub location: String,
    /// What is wrong with it.
    pub message: String,
}

/// Report entries that will render with empty titles.
///
/// Nothing is rejected: rendering treats empty titles as empty text.
pub fn lint_sections(sections: &[Section]) -> Vec<ContentWarning> {
    let mut warnings = Vec::new();
    let mut empty_title = |location: String| {
        warnings.push(ContentWarning {
            location,
            message: "empty title".to_owned(),
        });
    };

    for (si, section) in sections.iter().enumerate() {
        if section.title.is_empty() {
            empty_title(format!("sections[{si}]"));
        }
        for (bi, block) in section.blocks.iter().enumerate() {
            // Signature blocks never show their title.
            if block.title.is_empty() && !block.is_signature() {
                empty_title(format!("sections[{si}].blocks[{bi}]"));
            }
            for (sbi, sub) in block.sub_blocks().iter().enumerate() {
                if sub.title.is_empty() {
                    empty_title(format!("sections[{si}].blocks[{bi}].subBlocks[{sbi}]"));
                }
            }
        }
    }

    warnings
}
