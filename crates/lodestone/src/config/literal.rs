//! Static extraction and parsing of JS object literals.
//!
//! Loader and bundler config files are JavaScript, but the configuration
//! itself is almost always a plain object literal sitting behind
//! `module.exports =`, `export default`, or a `require.config(...)` call.
//! This module digs the literal out of the surrounding source and parses
//! it as a JSON5-like structure (unquoted keys, single quotes, trailing
//! commas) into a `serde_json::Value`. The source is never executed.

use serde_json::Value;

/// Extract the object literal that follows `marker` in `source`.
///
/// Between the marker and the opening brace, a single `=` or `(` is
/// allowed (`module.exports = {...}`, `require.config({...})`). Returns
/// the literal including its outer braces, or `None` when the marker is
/// absent or no balanced object follows it.
pub(crate) fn object_after(source: &str, marker: &str) -> Option<String> {
    let stripped = strip_comments(source);
    let idx = stripped.find(marker)?;
    let mut rest = stripped[idx + marker.len()..].trim_start();

    if let Some(after) = rest.strip_prefix('=').or_else(|| rest.strip_prefix('(')) {
        rest = after.trim_start();
    }

    balanced_object(rest)
}

/// Take a balanced `{ ... }` from the start of `source`, respecting
/// nested braces and string literals.
pub(crate) fn balanced_object(source: &str) -> Option<String> {
    if !source.starts_with('{') {
        return None;
    }

    let mut depth = 0;
    let mut in_string: Option<char> = None;
    let mut prev = '\0';

    for (i, ch) in source.char_indices() {
        if let Some(quote) = in_string {
            if ch == quote && prev != '\\' {
                in_string = None;
            }
        } else {
            match ch {
                '"' | '\'' | '`' => in_string = Some(ch),
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(source[..=i].to_string());
                    }
                }
                _ => {}
            }
        }
        prev = ch;
    }

    None
}

/// Strip `//` and `/* */` comments, leaving string contents untouched.
pub(crate) fn strip_comments(source: &str) -> String {
    let mut result = String::with_capacity(source.len());
    let chars: Vec<char> = source.chars().collect();
    let len = chars.len();
    let mut i = 0;
    let mut in_string: Option<char> = None;

    while i < len {
        if let Some(quote) = in_string {
            result.push(chars[i]);
            if chars[i] == quote && (i == 0 || chars[i - 1] != '\\') {
                in_string = None;
            }
            i += 1;
        } else if i + 1 < len && chars[i] == '/' && chars[i + 1] == '/' {
            while i < len && chars[i] != '\n' {
                i += 1;
            }
        } else if i + 1 < len && chars[i] == '/' && chars[i + 1] == '*' {
            i += 2;
            while i + 1 < len && !(chars[i] == '*' && chars[i + 1] == '/') {
                if chars[i] == '\n' {
                    result.push('\n');
                }
                i += 1;
            }
            i += 2;
        } else {
            if chars[i] == '"' || chars[i] == '\'' || chars[i] == '`' {
                in_string = Some(chars[i]);
            }
            result.push(chars[i]);
            i += 1;
        }
    }

    result
}

/// Parse a JS object literal into a `serde_json::Value`.
///
/// Handles unquoted keys, single- and backtick-quoted strings, trailing
/// commas, nested objects, arrays, numbers, booleans, and null.
pub(crate) fn parse(input: &str) -> Result<Value, String> {
    let mut parser = LiteralParser::new(input);
    let value = parser.value()?;
    parser.skip_whitespace();
    Ok(value)
}

struct LiteralParser {
    chars: Vec<char>,
    pos: usize,
}

impl LiteralParser {
    fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek();
        if ch.is_some() {
            self.pos += 1;
        }
        ch
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    fn value(&mut self) -> Result<Value, String> {
        self.skip_whitespace();
        match self.peek() {
            Some('{') => self.object(),
            Some('[') => self.array(),
            Some('"' | '\'' | '`') => self.string().map(Value::String),
            Some(ch) if ch == '-' || ch.is_ascii_digit() => self.number(),
            Some(ch) if ch.is_alphabetic() => self.word(),
            Some(ch) => Err(format!("unexpected character '{ch}' at offset {}", self.pos)),
            None => Err("unexpected end of input".to_string()),
        }
    }

    fn object(&mut self) -> Result<Value, String> {
        self.bump();
        let mut map = serde_json::Map::new();

        loop {
            self.skip_whitespace();
            match self.peek() {
                Some('}') => {
                    self.bump();
                    return Ok(Value::Object(map));
                }
                None => return Err("unterminated object".to_string()),
                _ => {}
            }

            let key = self.key()?;
            self.skip_whitespace();
            match self.bump() {
                Some(':') => {}
                other => return Err(format!("expected ':' after key '{key}', got {other:?}")),
            }

            let value = self.value()?;
            map.insert(key, value);

            self.skip_whitespace();
            match self.peek() {
                Some(',') => {
                    self.bump();
                }
                Some('}') => {}
                None => return Err("unterminated object".to_string()),
                Some(ch) => return Err(format!("expected ',' or '}}' in object, got '{ch}'")),
            }
        }
    }

    fn array(&mut self) -> Result<Value, String> {
        self.bump();
        let mut items = Vec::new();

        loop {
            self.skip_whitespace();
            match self.peek() {
                Some(']') => {
                    self.bump();
                    return Ok(Value::Array(items));
                }
                None => return Err("unterminated array".to_string()),
                _ => {}
            }

            items.push(self.value()?);

            self.skip_whitespace();
            match self.peek() {
                Some(',') => {
                    self.bump();
                }
                Some(']') => {}
                None => return Err("unterminated array".to_string()),
                Some(ch) => return Err(format!("expected ',' or ']' in array, got '{ch}'")),
            }
        }
    }

    fn key(&mut self) -> Result<String, String> {
        self.skip_whitespace();
        match self.peek() {
            Some('"' | '\'' | '`') => self.string(),
            Some(ch) if ch.is_alphabetic() || ch == '_' || ch == '$' => {
                let mut key = String::new();
                while let Some(ch) = self.peek() {
                    // Dotted identifier keys show up in define-style maps
                    if ch.is_alphanumeric() || ch == '_' || ch == '$' || ch == '.' {
                        key.push(ch);
                        self.bump();
                    } else {
                        break;
                    }
                }
                Ok(key)
            }
            other => Err(format!("expected object key, got {other:?}")),
        }
    }

    fn string(&mut self) -> Result<String, String> {
        let Some(quote) = self.bump() else {
            return Err("expected string".to_string());
        };
        let mut s = String::new();

        loop {
            match self.bump() {
                Some(ch) if ch == quote => return Ok(s),
                Some('\\') => match self.bump() {
                    Some('n') => s.push('\n'),
                    Some('t') => s.push('\t'),
                    Some('r') => s.push('\r'),
                    Some('\\') => s.push('\\'),
                    Some(ch) => s.push(ch),
                    None => return Err("unterminated string escape".to_string()),
                },
                Some(ch) => s.push(ch),
                None => return Err("unterminated string".to_string()),
            }
        }
    }

    fn number(&mut self) -> Result<Value, String> {
        let mut text = String::new();
        if self.peek() == Some('-') {
            text.push('-');
            self.bump();
        }
        let mut is_float = false;
        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                text.push(ch);
                self.bump();
            } else if ch == '.' && !is_float {
                is_float = true;
                text.push(ch);
                self.bump();
            } else {
                break;
            }
        }

        if is_float {
            let n: f64 = text
                .parse()
                .map_err(|_| format!("invalid number '{text}'"))?;
            serde_json::Number::from_f64(n)
                .map(Value::Number)
                .ok_or_else(|| format!("invalid number '{text}'"))
        } else {
            let n: i64 = text
                .parse()
                .map_err(|_| format!("invalid number '{text}'"))?;
            Ok(Value::Number(n.into()))
        }
    }

    fn word(&mut self) -> Result<Value, String> {
        let mut word = String::new();
        while let Some(ch) = self.peek() {
            if !ch.is_alphabetic() {
                break;
            }
            word.push(ch);
            self.bump();
        }
        match word.as_str() {
            "true" => Ok(Value::Bool(true)),
            "false" => Ok(Value::Bool(false)),
            "null" | "undefined" => Ok(Value::Null),
            other => Err(format!("unexpected token '{other}'")),
        }
    }
}
