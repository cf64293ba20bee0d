use serde::{Deserialize, Serialize};

/// Which font a character is drawn with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptClass {
    /// CJK ideographs, ASCII digits and `.`: primary font.
    Wide,
    /// Everything else: secondary font.
    Other,
}

/// CJK ideograph blocks (unified, extensions A-E, compatibility and supplement).
const IDEOGRAPH_RANGES: &[(u32, u32)] = &[
    (0x4E00, 0x9FFF),
    (0x3400, 0x4DBF),
    (0x20000, 0x2A6DF),
    (0x2A700, 0x2B73F),
    (0x2B740, 0x2B81F),
    (0x2B820, 0x2CEAF),
    (0xF900, 0xFAFF),
    (0x2F800, 0x2FA1F),
];

/// Whether `c` is a CJK ideograph from the table above.
pub fn is_ideograph(c: char) -> bool {
    let cp = c as u32;
    IDEOGRAPH_RANGES
        .iter()
        .any(|&(lo, hi)| (lo..=hi).contains(&cp))
}

/// Classify a character.
pub fn classify(c: char) -> ScriptClass {
    if is_ideograph(c) || c.is_ascii_digit() || c == '.' {
        ScriptClass::Wide
    } else {
        ScriptClass::Other
    }
}

/// A maximal substring of one script class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScriptRun<'a> {
    /// Class shared by every character of the run.
    pub class: ScriptClass,
    /// The run's text.
    pub text: &'a str,
}

/// Partition `text` into maximal single-class runs, in order.
pub fn split_runs(text: &str) -> Vec<ScriptRun<'_>> {
    let mut runs = Vec::new();
    let mut start = 0usize;
    let mut current: Option<ScriptClass> = None;

    for (i, c) in text.char_indices() {
        let class = classify(c);
        match current {
            Some(prev) if prev == class => {}
            Some(prev) => {
                runs.push(ScriptRun {
                    class: prev,
                    text: &text[start..i],
                });
                start = i;
                current = Some(class);
            }
            None => current = Some(class),
        }
    }
    if let Some(class) = current {
        runs.push(ScriptRun {
            class,
            text: &text[start..],
        });
    }
    runs
}

/// Separate wide-script and other runs by exactly one space.
///
/// Each run is trimmed; whitespace-only runs disappear.
pub fn normalize_spacing(text: &str) -> String {
    split_runs(text)
        .iter()
        .map(|r| r.text.trim())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Keep only CJK ideographs.
pub fn ideographs_only(text: &str) -> String {
    text.chars().filter(|&c| is_ideograph(c)).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/text/script.rs"]
mod tests;
