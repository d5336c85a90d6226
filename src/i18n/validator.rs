//! Textdomain validation over a token stream
//!
//! Every identifier found in the [`RuleSet`] starts a [`CallScanner`], a small
//! state machine fed one token at a time:
//!
//! ```text
//! SeekOpenParen --'('--> InArgs { depth, arg_index } --')' at depth 1--> Done
//! ```
//!
//! Only direct arguments (depth 1) are inspected. Once a call is done the
//! outer scan resumes after its closing paren, so calls nested inside a
//! translation call are not scanned a second time.

use super::rules::{FunctionRule, RuleSet};
use super::token::{Token, TokenKind};
use serde::Serialize;
use std::fmt;

/// One problem at one call site
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
  /// 1-based source line
  pub line: usize,
  pub message: String,
}

impl fmt::Display for ValidationError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:<10} {}", format!("L{}", self.line), self.message)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
  SeekOpenParen,
  InArgs { depth: usize, arg_index: usize },
  Done,
}

/// What the outer loop should do after feeding a token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
  /// Token consumed, keep feeding
  Continue,
  /// Token was the closing paren of the call
  Complete,
  /// The name was not followed by `(`; the token is not consumed
  NotACall,
}

/// Validation state for a single translation call
struct CallScanner<'a> {
  name: &'a str,
  rule: &'a FunctionRule,
  line: usize,
  domain: &'a str,
  expected: &'a str,
  state: ScanState,
  opened: bool,
  found_domain: bool,
  errors: Vec<ValidationError>,
}

impl<'a> CallScanner<'a> {
  fn new(name: &'a str, line: usize, rule: &'a FunctionRule, domain: &'a str, expected: &'a str) -> Self {
    Self {
      name,
      rule,
      line,
      domain,
      expected,
      state: ScanState::SeekOpenParen,
      opened: false,
      found_domain: false,
      errors: Vec::new(),
    }
  }

  fn step(&mut self, token: &Token) -> Step {
    match self.state {
      ScanState::SeekOpenParen => {
        if token.is_char('(') {
          self.opened = true;
          self.state = ScanState::InArgs { depth: 1, arg_index: 0 };
          Step::Continue
        } else if token.is_trivia() {
          Step::Continue
        } else {
          self.state = ScanState::Done;
          Step::NotACall
        }
      }
      ScanState::InArgs { depth, arg_index } => self.step_in_args(token, depth, arg_index),
      ScanState::Done => Step::Complete,
    }
  }

  fn step_in_args(&mut self, token: &Token, depth: usize, arg_index: usize) -> Step {
    match token {
      Token::Char { ch: '(', .. } => {
        self.state = ScanState::InArgs {
          depth: depth + 1,
          arg_index,
        };
      }
      Token::Char { ch: ')', .. } => {
        if depth == 1 {
          self.state = ScanState::Done;
          return Step::Complete;
        }
        self.state = ScanState::InArgs {
          depth: depth - 1,
          arg_index,
        };
      }
      Token::Char { ch: ',', .. } if depth == 1 => {
        self.state = ScanState::InArgs {
          depth,
          arg_index: arg_index + 1,
        };
      }
      Token::Tagged { kind, text, line } if depth == 1 => match kind {
        TokenKind::Whitespace => {}
        TokenKind::ConstantString => {
          if arg_index == self.rule.domain_position() {
            self.found_domain = text == self.expected;
          }
        }
        _ => {
          if !self.rule.accepts_expression_at(arg_index) {
            self.errors.push(ValidationError {
              line: *line,
              message: format!(
                "Argument #{} in function {}() must be in literal string",
                arg_index + 1,
                self.name
              ),
            });
          }
        }
      },
      _ => {}
    }
    Step::Continue
  }

  /// Close the scan, adding the missing-textdomain diagnostic if needed
  fn finish(mut self) -> Vec<ValidationError> {
    if self.opened && !self.found_domain {
      self.errors.push(ValidationError {
        line: self.line,
        message: format!(
          "Missing textdomain '{}' as arg #{} in function {}()",
          self.domain,
          self.rule.domain_position() + 1,
          self.name
        ),
      });
    }
    self.errors
  }
}

/// Result of scanning one call site
struct CallScan {
  next_index: usize,
  errors: Vec<ValidationError>,
}

/// Check every recognized translation call in `tokens` for `domain`
///
/// Never fails: each problem becomes one [`ValidationError`] and scanning
/// continues. A call site can produce several diagnostics.
pub fn validate(tokens: &[Token], domain: &str, rules: &RuleSet) -> Vec<ValidationError> {
  let domain = escape_domain(domain);
  let expected = format!("'{}'", domain);

  let mut errors = Vec::new();
  let mut index = 0;

  while let Some(token) = tokens.get(index) {
    let call = match token {
      Token::Tagged {
        kind: TokenKind::Identifier,
        text,
        ..
      } => {
        // `\__()` is the same global function as `__()`
        let name = text.strip_prefix('\\').unwrap_or(text.as_str());
        rules.get(name).map(|rule| (name, rule))
      }
      _ => None,
    };

    match call {
      Some((name, rule)) => {
        let scanner = CallScanner::new(name, token.line(), rule, &domain, &expected);
        let scan = scan_call(tokens, index + 1, scanner);
        errors.extend(scan.errors);
        index = scan.next_index;
      }
      None => index += 1,
    }
  }

  errors
}

fn scan_call(tokens: &[Token], start: usize, mut scanner: CallScanner<'_>) -> CallScan {
  let mut index = start;

  while let Some(token) = tokens.get(index) {
    match scanner.step(token) {
      Step::Continue => index += 1,
      Step::Complete => {
        index += 1;
        break;
      }
      Step::NotACall => break,
    }
  }

  CallScan {
    next_index: index,
    errors: scanner.finish(),
  }
}

/// Escape the domain the way it appears inside a single-quoted PHP literal
fn escape_domain(domain: &str) -> String {
  let mut escaped = String::with_capacity(domain.len());
  for c in domain.chars() {
    match c {
      '\'' | '"' | '\\' => {
        escaped.push('\\');
        escaped.push(c);
      }
      '\0' => escaped.push_str("\\0"),
      _ => escaped.push(c),
    }
  }
  escaped
}
