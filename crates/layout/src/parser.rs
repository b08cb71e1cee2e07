use crate::LabelError;
use crate::fragments::{self, Fragment};
use crate::session::RenderSession;
use thiserror::Error;

/// Errors raised while tokenizing a label spec, before any rendering.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpecError {
    #[error("Unbalanced braces in '{0}': directive opened but never closed")]
    UnbalancedBraces(String),

    #[error("Unexpected '}}' in '{0}'; use '}}}}' for a literal closing brace")]
    StrayClosingBrace(String),

    #[error("Empty directive '{{}}' in '{0}'")]
    EmptyDirective(String),

    #[error("Unknown fragment class: '{0}'")]
    UnknownFragment(String),
}

/// A lexical token of the label mini-language. `Text` has brace escapes
/// already resolved; `Directive` holds the content between the braces.
#[derive(Debug, Clone, PartialEq)]
pub enum RawToken {
    Text(String),
    Directive(String),
}

/// Split a spec string into text and directive tokens.
///
/// A directive is an unescaped `{...}` group; `{{` and `}}` are literal
/// braces. Directives cannot nest and cannot span newlines, so an unclosed
/// `{` or a stray `}` is a syntax error.
pub fn scan(spec: &str) -> Result<Vec<RawToken>, SpecError> {
    let mut tokens = Vec::new();
    let mut text = String::new();
    let mut chars = spec.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' => {
                if chars.peek() == Some(&'{') {
                    chars.next();
                    text.push('{');
                    continue;
                }
                let mut directive = String::new();
                let mut closed = false;
                for d in chars.by_ref() {
                    match d {
                        '}' => {
                            closed = true;
                            break;
                        }
                        '{' | '\n' => break,
                        _ => directive.push(d),
                    }
                }
                if !closed {
                    return Err(SpecError::UnbalancedBraces(spec.to_string()));
                }
                if directive.is_empty() {
                    return Err(SpecError::EmptyDirective(spec.to_string()));
                }
                if !text.is_empty() {
                    tokens.push(RawToken::Text(std::mem::take(&mut text)));
                }
                tokens.push(RawToken::Directive(directive));
            }
            '}' => {
                if chars.peek() == Some(&'}') {
                    chars.next();
                    text.push('}');
                } else {
                    return Err(SpecError::StrayClosingBrace(spec.to_string()));
                }
            }
            other => text.push(other),
        }
    }

    if !text.is_empty() {
        tokens.push(RawToken::Text(text));
    }
    Ok(tokens)
}

/// Split a directive body into its name and comma-separated arguments.
/// `"bolt(10,pan)"` becomes `("bolt", ["10", "pan"])`; a body without
/// parentheses is all name.
pub fn directive_parts(content: &str) -> (&str, Vec<String>) {
    let trimmed = content.trim();
    if let Some(open) = trimmed.find('(')
        && trimmed.ends_with(')')
    {
        let name = trimmed[..open].trim();
        let args = trimmed[open + 1..trimmed.len() - 1]
            .split(',')
            .map(|a| a.trim().to_string())
            .collect();
        return (name, args);
    }
    (trimmed, Vec::new())
}

/// Turn one line's raw tokens into renderable fragments.
///
/// Text runs have their leading/trailing whitespace extracted into separate
/// whitespace fragments, because shaped text does not reliably measure
/// surrounding space. A bare numeric directive is sugar for a fixed spacer
/// of that many mm.
pub fn parse_line(
    tokens: &[RawToken],
    session: &RenderSession,
) -> Result<Vec<Box<dyn Fragment>>, LabelError> {
    let mut result: Vec<Box<dyn Fragment>> = Vec::new();

    for token in tokens {
        match token {
            RawToken::Directive(content) => {
                // A bare number is distance to space out.
                if let Ok(distance) = content.trim().parse::<f32>() {
                    result.push(Box::new(fragments::SpacerFragment::new(distance)));
                    continue;
                }
                let (name, args) = directive_parts(content);
                result.push(session.registry.construct(name, &args, session.catalog)?);
            }
            RawToken::Text(part) => {
                let stripped_front = part.trim_start();
                let leading = &part[..part.len() - stripped_front.len()];
                if !leading.is_empty() {
                    result.push(Box::new(fragments::WhitespaceFragment::new(leading)?));
                }

                let body = stripped_front.trim_end();
                if !body.is_empty() {
                    result.push(Box::new(fragments::TextFragment::new(body)));
                }

                let trailing = &stripped_front[body.len()..];
                if !trailing.is_empty() {
                    result.push(Box::new(fragments::WhitespaceFragment::new(trailing)?));
                }
            }
        }
    }
    Ok(result)
}
