//! Level label rendering.
//!
//! The core never emits a concrete markup language. The caller supplies a
//! [`LabelMarkup`] that wraps the formatted level fragment for its render
//! surface; any `Fn(Band, &str) -> String` works.

use std::borrow::Cow;

use crate::types::{Band, LEVEL_PLACEHOLDER, Level, UNKNOWN_LEVEL_TEXT};

/// Wraps a label fragment in the display tag for its band.
pub trait LabelMarkup: Send + Sync {
    /// Produce the display form of `fragment` for `band`.
    fn wrap(&self, band: Band, fragment: &str) -> String;
}

impl<F> LabelMarkup for F
where
    F: Fn(Band, &str) -> String + Send + Sync,
{
    fn wrap(&self, band: Band, fragment: &str) -> String {
        self(band, fragment)
    }
}

/// Markup that leaves the fragment untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainMarkup;

impl LabelMarkup for PlainMarkup {
    fn wrap(&self, _band: Band, fragment: &str) -> String {
        fragment.to_owned()
    }
}

/// Level as display text: `???` for unknown (0), the decimal value otherwise.
#[must_use]
pub fn render_level(level: Level) -> Cow<'static, str> {
    if level == 0 {
        Cow::Borrowed(UNKNOWN_LEVEL_TEXT)
    } else {
        Cow::Owned(level.to_string())
    }
}

/// Substitute `level_text` for every placeholder in `template`.
#[must_use]
pub fn apply_template(template: &str, level_text: &str) -> String {
    template.replace(LEVEL_PLACEHOLDER, level_text)
}

/// `raw_name`, a space, and the wrapped level fragment.
#[must_use]
pub fn compose(raw_name: &str, wrapped_fragment: &str) -> String {
    let mut out = String::with_capacity(raw_name.len() + 1 + wrapped_fragment.len());
    out.push_str(raw_name);
    out.push(' ');
    out.push_str(wrapped_fragment);
    out
}
