//! Rich-text markup for the VR nameplate.
//!
//! The HUD renders Unity-style rich text, so a band becomes
//! `<color=VALUE>fragment</color>`.

use levelhud_core::label::LabelMarkup;
use levelhud_core::types::Band;

use crate::config::BandColors;

/// `<color=..>` markup with configurable band colours.
#[derive(Debug, Clone, Default)]
pub struct RichTextMarkup {
    colors: BandColors,
}

impl RichTextMarkup {
    /// Markup using `colors`.
    #[must_use]
    pub fn new(colors: BandColors) -> Self {
        Self { colors }
    }
}

impl LabelMarkup for RichTextMarkup {
    fn wrap(&self, band: Band, fragment: &str) -> String {
        format!("<color={}>{fragment}</color>", self.colors.for_band(band))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_colours() {
        let markup = RichTextMarkup::default();
        assert_eq!(markup.wrap(Band::Danger, "[20]"), "<color=red>[20]</color>");
        assert_eq!(markup.wrap(Band::Neutral, "[5]"), "<color=white>[5]</color>");
        assert_eq!(markup.wrap(Band::Trivial, "[1]"), "<color=#2FFFDC>[1]</color>");
    }

    #[test]
    fn custom_colours() {
        let markup = RichTextMarkup::new(BandColors {
            danger: "orange".into(),
            ..BandColors::default()
        });
        assert_eq!(markup.wrap(Band::Danger, "[9]"), "<color=orange>[9]</color>");
    }
}
