use serde::{Deserialize, Serialize};

use crate::engine::CipherError;

/// Upper bound on `group_size`; generous compared to the classic
/// five-letter convention but enough to catch nonsense values.
pub const MAX_GROUP_SIZE: usize = 64;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextCase {
    #[default]
    Preserve,
    Upper,
    Lower,
}

/// Output formatting applied after any cipher runs. A value type: the
/// engine never reads ambient configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattingOptions {
    pub text_case: TextCase,
    pub remove_spaces: bool,
    pub group_size: usize,
}

impl FormattingOptions {
    pub fn validate(&self) -> Result<(), CipherError> {
        if self.group_size > MAX_GROUP_SIZE {
            return Err(CipherError::InvalidParameter {
                name: "group size",
                value: self.group_size as i64,
            });
        }
        Ok(())
    }
}

/// Applies, in this order: case transform, whitespace removal, fixed-width
/// grouping. Grouping counts whatever characters remain after the first
/// two steps, so spaces left in place still occupy group positions.
pub fn apply_formatting(text: &str, options: &FormattingOptions) -> String {
    let mut formatted = match options.text_case {
        TextCase::Preserve => text.to_owned(),
        TextCase::Upper => text.to_uppercase(),
        TextCase::Lower => text.to_lowercase(),
    };
    if options.remove_spaces {
        formatted.retain(|c| !c.is_whitespace());
    }
    if options.group_size > 0 {
        formatted = group_chars(&formatted, options.group_size);
    }
    formatted
}

fn group_chars(text: &str, size: usize) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / size);
    for (index, c) in text.chars().enumerate() {
        if index > 0 && index % size == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}
