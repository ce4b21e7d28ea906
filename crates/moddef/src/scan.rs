//! Syntax-marker scanner.
//!
//! One forward pass over the source. Comments and string literals are
//! skipped entirely, so markers inside them never count. An ES6 marker
//! ends the scan immediately; AMD markers are remembered and reported
//! only if no ES6 marker shows up later.

use crate::ModuleSystem;

/// Classify a JavaScript source by its module-system syntax.
///
/// - `import` / `export` at a word boundary (including dynamic
///   `import(...)`) classifies as ES6.
/// - `define(` or `require([` classifies as AMD.
/// - Anything else, including an empty source, classifies as CommonJS.
#[must_use]
pub fn detect(source: &str) -> ModuleSystem {
    let chars: Vec<char> = source.chars().collect();
    let len = chars.len();
    let mut i = 0;
    let mut saw_amd = false;

    while i < len {
        // Skip single-line comments
        if i + 1 < len && chars[i] == '/' && chars[i + 1] == '/' {
            while i < len && chars[i] != '\n' {
                i += 1;
            }
            continue;
        }

        // Skip block comments
        if i + 1 < len && chars[i] == '/' && chars[i + 1] == '*' {
            i += 2;
            while i + 1 < len && !(chars[i] == '*' && chars[i + 1] == '/') {
                i += 1;
            }
            i += 2;
            continue;
        }

        // Skip string literals
        if chars[i] == '"' || chars[i] == '\'' || chars[i] == '`' {
            let quote = chars[i];
            i += 1;
            while i < len && chars[i] != quote {
                if chars[i] == '\\' && i + 1 < len {
                    i += 2;
                    continue;
                }
                i += 1;
            }
            i += 1;
            continue;
        }

        if at_keyword(&chars, i, "import") || at_keyword(&chars, i, "export") {
            return ModuleSystem::Es6;
        }

        if at_keyword(&chars, i, "define") {
            if next_significant(&chars, i + 6) == Some('(') {
                saw_amd = true;
            }
            i += 6;
            continue;
        }

        if at_keyword(&chars, i, "require") {
            let mut j = i + 7;
            while j < len && chars[j].is_whitespace() {
                j += 1;
            }
            if chars.get(j) == Some(&'(') && next_significant(&chars, j + 1) == Some('[') {
                saw_amd = true;
            }
            i += 7;
            continue;
        }

        i += 1;
    }

    if saw_amd {
        ModuleSystem::Amd
    } else {
        ModuleSystem::CommonJs
    }
}

/// Check whether `keyword` starts at `pos` on a word boundary.
///
/// A preceding `.` also disqualifies the match, so `obj.define(...)` is
/// a method call, not a module definition.
fn at_keyword(chars: &[char], pos: usize, keyword: &str) -> bool {
    if pos > 0 && (is_ident_char(chars[pos - 1]) || chars[pos - 1] == '.') {
        return false;
    }

    let mut end = pos;
    for expected in keyword.chars() {
        if chars.get(end) != Some(&expected) {
            return false;
        }
        end += 1;
    }

    !chars.get(end).copied().is_some_and(is_ident_char)
}

fn is_ident_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == '$'
}

/// First non-whitespace character at or after `pos`.
fn next_significant(chars: &[char], pos: usize) -> Option<char> {
    chars[pos.min(chars.len())..]
        .iter()
        .find(|ch| !ch.is_whitespace())
        .copied()
}
