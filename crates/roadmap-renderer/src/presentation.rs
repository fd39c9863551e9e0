//! `meta` tag to icon and color mapping.
//!
//! Purely cosmetic: no renderer branches on the tone beyond picking classes.

use roadmap_content::Meta;

/// Color family of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Pros and solutions.
    Success,
    /// Cons and problems.
    Failure,
    /// Notes.
    Warning,
    /// Code signatures.
    Code,
    /// Informational blocks.
    Primary,
    /// Everything else.
    Neutral,
}

impl Tone {
    /// Extra classes for the block's icon badge.
    #[must_use]
    pub fn icon_classes(self) -> &'static str {
        match self {
            Self::Success => "!bg-context-success-base text-context-success-dark",
            Self::Failure => "!bg-context-failure-base !text-context-failure-dark",
            Self::Warning => "!bg-context-warning-base !text-context-warning-dark",
            Self::Code => "!bg-code-javascript !text-black",
            Self::Primary => "!bg-primary",
            Self::Neutral => "",
        }
    }
}

/// Icon and tone selected by a block's `meta` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presentation {
    /// Material Symbols icon name.
    pub icon: &'static str,
    /// Color family.
    pub tone: Tone,
}

impl Presentation {
    /// Presentation for an optional tag. Absent and unknown tags get the
    /// generic radio-button icon and neutral tone.
    #[must_use]
    pub fn for_meta(meta: Option<&Meta>) -> Self {
        let (icon, tone) = match meta {
            Some(Meta::Scenarios) => ("deployed_code", Tone::Neutral),
            Some(Meta::Positive | Meta::Solution) => ("check", Tone::Success),
            Some(Meta::Negative | Meta::Problem) => ("close", Tone::Failure),
            Some(Meta::Notes) => ("description", Tone::Warning),
            Some(Meta::Signature) => ("deployed_code", Tone::Code),
            Some(Meta::Tool) => ("handyman", Tone::Neutral),
            Some(Meta::Component) => ("widgets", Tone::Neutral),
            Some(Meta::Security) => ("lock", Tone::Neutral),
            Some(Meta::Performance) => ("trending_up", Tone::Neutral),
            Some(Meta::Lifecycle) => ("cycle", Tone::Neutral),
            Some(Meta::Architecture) => ("family_history", Tone::Neutral),
            Some(Meta::Info) => ("description", Tone::Primary),
            Some(Meta::Other(_)) | None => ("radio_button_checked", Tone::Neutral),
        };
        Self { icon, tone }
    }
}
