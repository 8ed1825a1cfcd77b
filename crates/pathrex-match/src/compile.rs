//! Template tokenizer and translator.
//!
//! A template such as `/api/:version/files/*path{.:ext}` is scanned left to
//! right. At each position the first matching token class wins:
//!
//! 1. `{...}` optional group, translated recursively
//! 2. `:name` named parameter, optionally followed by a verbatim `(constraint)`
//! 3. `*name` wildcard parameter
//! 4. a regex metacharacter, which is escaped
//! 5. anything else, copied unchanged

use crate::codec;
use crate::separator::Separator;
use std::fmt::Write;
use winnow::combinator::{alt, delimited, opt, preceded};
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::{any, one_of, take_till, take_while};

const SPECIAL_CHARS: [char; 14] = [
    '.', '^', '$', '*', '+', '?', '(', ')', '|', '[', ']', '{', '}', '\\',
];

/// Regex source for a template together with its parameter keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledTemplate {
    /// Anchored regex source, e.g. `^/users/([^/]+?)/?$`.
    pub regex: String,
    /// Parameter names in capture-group order. May contain duplicates.
    pub keys: Vec<String>,
    pub separator: Separator,
}

/// Translates a template into anchored regex source and its parameter keys.
///
/// The template is percent-encoded first, so `/café` and `/caf%C3%A9`
/// compile to the same pattern. A missing trailing separator is added and
/// made optional, so `/foo` and `/foo/` accept the same paths.
///
/// ```
/// use pathrex_match::compile::compile_template;
///
/// let compiled = compile_template("/download/:file{.:ext}");
/// assert_eq!(compiled.regex, r"^/download/([^/]+?)(?:\.([^/]+?))?/?$");
/// assert_eq!(compiled.keys, ["file", "ext"]);
/// ```
pub fn compile_template(template: &str) -> CompiledTemplate {
    let separator = Separator::detect(template);
    let encoded = codec::encode(template);

    let mut keys = Vec::new();
    let mut body = translate(&encoded, separator, &mut keys);
    if !body.ends_with(separator.as_char()) {
        body.push_str(separator.escaped());
    }

    CompiledTemplate {
        regex: format!("^{}?$", body),
        keys,
        separator,
    }
}

fn translate(template: &str, separator: Separator, keys: &mut Vec<String>) -> String {
    let mut pattern = String::with_capacity(template.len() * 2);

    for token in tokenize(template) {
        match token {
            Token::Literal(text) => pattern.push_str(text),
            Token::Optional(body) => {
                let sub = translate(body, separator, keys);
                if !sub.is_empty() {
                    let _ = write!(pattern, "(?:{})?", sub);
                }
            }
            Token::Named { key, constraint } => {
                keys.push(codec::decode(key));
                match constraint {
                    Some(constraint) => pattern.push_str(constraint),
                    None => {
                        let _ = write!(pattern, "([^{}]+?)", separator.escaped());
                    }
                }
            }
            Token::Wildcard(key) => {
                keys.push(codec::decode(key));
                pattern.push_str("(.+?)");
            }
            Token::Special(c) => {
                pattern.push('\\');
                pattern.push(c);
            }
        }
    }

    pattern
}

// ============ Tokenizer ============

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token<'a> {
    Literal(&'a str),
    Optional(&'a str),
    Named {
        key: &'a str,
        constraint: Option<&'a str>,
    },
    Wildcard(&'a str),
    Special(char),
}

fn tokenize(template: &str) -> Vec<Token<'_>> {
    let mut input = template;
    let mut tokens = Vec::new();

    while !input.is_empty() {
        match token.parse_next(&mut input) {
            Ok(tok) => tokens.push(tok),
            Err(_) => {
                tokens.push(Token::Literal(input));
                break;
            }
        }
    }

    tokens
}

fn token<'a>(input: &mut &'a str) -> ModalResult<Token<'a>> {
    alt((optional_group, named_param, wildcard_param, special, literal)).parse_next(input)
}

fn is_key_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '%'
}

fn param_key<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    take_while(1.., is_key_char).parse_next(input)
}

fn optional_group<'a>(input: &mut &'a str) -> ModalResult<Token<'a>> {
    delimited('{', balanced_body, '}')
        .map(Token::Optional)
        .parse_next(input)
}

/// Everything up to the `}` that closes the group, skipping nested pairs.
fn balanced_body<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    let text: &'a str = *input;
    let mut depth = 0usize;

    for (idx, c) in text.char_indices() {
        match c {
            '{' => depth += 1,
            '}' if depth == 0 => {
                let (body, rest) = text.split_at(idx);
                *input = rest;
                return Ok(body);
            }
            '}' => depth -= 1,
            _ => {}
        }
    }

    Err(ErrMode::Backtrack(ContextError::new()))
}

fn constraint<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    ('(', take_till(1.., ')'), ')').take().parse_next(input)
}

fn named_param<'a>(input: &mut &'a str) -> ModalResult<Token<'a>> {
    let (key, constraint) = preceded(':', (param_key, opt(constraint))).parse_next(input)?;
    Ok(Token::Named { key, constraint })
}

fn wildcard_param<'a>(input: &mut &'a str) -> ModalResult<Token<'a>> {
    preceded('*', param_key)
        .map(Token::Wildcard)
        .parse_next(input)
}

fn special<'a>(input: &mut &'a str) -> ModalResult<Token<'a>> {
    one_of(SPECIAL_CHARS).map(Token::Special).parse_next(input)
}

fn literal<'a>(input: &mut &'a str) -> ModalResult<Token<'a>> {
    alt((
        take_till(1.., |c: char| c == ':' || SPECIAL_CHARS.contains(&c)),
        // a lone ':' that did not start a parameter
        any.take(),
    ))
    .map(Token::Literal)
    .parse_next(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regex_of(template: &str) -> String {
        compile_template(template).regex
    }

    #[test]
    fn test_tokenize_classes() {
        assert_eq!(
            tokenize("/files/:name(\\w+){.:ext}/*rest"),
            vec![
                Token::Literal("/files/"),
                Token::Named {
                    key: "name",
                    constraint: Some("(\\w+)"),
                },
                Token::Optional(".:ext"),
                Token::Literal("/"),
                Token::Wildcard("rest"),
            ]
        );
    }

    #[test]
    fn test_tokenize_unmatched_markers_fall_back() {
        assert_eq!(
            tokenize("a:*{b"),
            vec![
                Token::Literal("a"),
                Token::Literal(":"),
                Token::Special('*'),
                Token::Special('{'),
                Token::Literal("b"),
            ]
        );
    }

    #[test]
    fn test_empty_and_root_templates() {
        assert_eq!(regex_of(""), "^/?$");
        assert_eq!(regex_of("/"), "^/?$");
        assert_eq!(regex_of("{}"), "^/?$");
    }

    #[test]
    fn test_trailing_separator_is_optional() {
        assert_eq!(regex_of("/foo"), "^/foo/?$");
        assert_eq!(regex_of("/foo/"), "^/foo/?$");
    }

    #[test]
    fn test_named_params() {
        let compiled = compile_template("/:foo/:bar");
        assert_eq!(compiled.regex, "^/([^/]+?)/([^/]+?)/?$");
        assert_eq!(compiled.keys, ["foo", "bar"]);
    }

    #[test]
    fn test_constraint_is_verbatim() {
        let compiled = compile_template(r"/:foo(\d{3})/");
        assert_eq!(compiled.regex, r"^/(\d{3})/?$");
        assert_eq!(compiled.keys, ["foo"]);
    }

    #[test]
    fn test_wildcard() {
        let compiled = compile_template("/static/*path");
        assert_eq!(compiled.regex, "^/static/(.+?)/?$");
        assert_eq!(compiled.keys, ["path"]);
    }

    #[test]
    fn test_special_chars_escaped() {
        assert_eq!(regex_of("/:foo.:bar"), r"^/([^/]+?)\.([^/]+?)/?$");
        assert_eq!(regex_of("/a+b|c$"), r"^/a\+b\|c\$/?$");
        assert_eq!(regex_of("/*"), r"^/\*/?$");
        assert_eq!(regex_of("/:"), "^/:/?$");
        assert_eq!(regex_of("/:foo()"), r"^/([^/]+?)\(\)/?$");
    }

    #[test]
    fn test_optional_groups() {
        let compiled = compile_template("{/:foo}");
        assert_eq!(compiled.regex, "^(?:/([^/]+?))?/?$");
        assert_eq!(compiled.keys, ["foo"]);

        assert_eq!(regex_of("/foo{}"), "^/foo/?$");
    }

    #[test]
    fn test_nested_optional_groups() {
        let compiled = compile_template("/:a{.:b{-:c}}");
        assert_eq!(
            compiled.regex,
            r"^/([^/]+?)(?:\.([^/]+?)(?:-([^/]+?))?)?/?$"
        );
        assert_eq!(compiled.keys, ["a", "b", "c"]);
    }

    #[test]
    fn test_optional_group_with_counted_constraint() {
        let compiled = compile_template(r"/item{/:id(\d{2})}");
        assert_eq!(compiled.regex, r"^/item(?:/(\d{2}))?/?$");
        assert_eq!(compiled.keys, ["id"]);
    }

    #[test]
    fn test_unbalanced_braces_are_literal() {
        assert_eq!(regex_of("/{foo"), r"^/\{foo/?$");
        assert_eq!(regex_of("/foo}"), r"^/foo\}/?$");
    }

    #[test]
    fn test_backslash_separator() {
        let compiled = compile_template(r"C:\:foo\");
        assert_eq!(compiled.separator, Separator::Backslash);
        assert_eq!(compiled.regex, r"^C:\\([^\\]+?)\\?$");

        assert_eq!(regex_of(r"C:\foo"), r"^C:\\foo\\?$");
    }

    #[test]
    fn test_template_is_percent_encoded() {
        let compiled = compile_template("/:café/a b");
        assert_eq!(compiled.regex, "^/([^/]+?)/a%20b/?$");
        assert_eq!(compiled.keys, ["café"]);

        assert_eq!(compile_template("/:caf%C3%A9").keys, ["café"]);
    }

    #[test]
    fn test_duplicate_keys_are_kept() {
        let compiled = compile_template("/:id/:id");
        assert_eq!(compiled.keys, ["id", "id"]);
    }
}
