//! A forgiving PHP tokenizer
//!
//! Produces just enough structure for call scanning: names, literals,
//! trivia and punctuation with 1-based line numbers. Anything it does not
//! recognize becomes a [`Token::Char`]; unterminated strings and comments run
//! to end of input. It never fails.

use super::token::{Token, TokenKind};

/// Multi-character operators, longest first
const OPERATORS: &[&str] = &[
  "<<=", ">>=", "**=", "??=", "?->", "===", "!==", "<=>", "...", "==", "!=", "<>", "<=", ">=", "&&", "||", "++", "--",
  "+=", "-=", "*=", "/=", ".=", "%=", "&=", "|=", "^=", "->", "=>", "::", "<<", ">>", "??", "**", "#[",
];

/// Tokenize PHP source, starting in inline HTML like the interpreter does
pub fn tokenize(source: &str) -> Vec<Token> {
  let mut lexer = Lexer::new(source);
  lexer.run();
  lexer.tokens
}

struct Lexer {
  chars: Vec<char>,
  pos: usize,
  line: usize,
  tokens: Vec<Token>,
}

impl Lexer {
  fn new(source: &str) -> Self {
    Self {
      chars: source.chars().collect(),
      pos: 0,
      line: 1,
      tokens: Vec::new(),
    }
  }

  fn run(&mut self) {
    while self.pos < self.chars.len() {
      self.lex_inline_html();
      self.lex_php();
    }
  }

  fn peek(&self, offset: usize) -> Option<char> {
    self.chars.get(self.pos + offset).copied()
  }

  fn starts_with(&self, s: &str) -> bool {
    self.starts_with_at(self.pos, s)
  }

  fn starts_with_at(&self, at: usize, s: &str) -> bool {
    let mut i = at;
    for expected in s.chars() {
      match self.chars.get(i) {
        Some(c) if *c == expected => i += 1,
        _ => return false,
      }
    }
    true
  }

  fn starts_with_ignore_case(&self, s: &str) -> bool {
    s.chars()
      .enumerate()
      .all(|(i, expected)| matches!(self.peek(i), Some(c) if c.eq_ignore_ascii_case(&expected)))
  }

  /// Emit `chars[start..pos]` as one tagged token
  fn push(&mut self, kind: TokenKind, start: usize) {
    let text: String = self.chars[start..self.pos].iter().collect();
    let newlines = text.matches('\n').count();
    self.tokens.push(Token::tagged(kind, text, self.line));
    self.line += newlines;
  }

  fn lex_inline_html(&mut self) {
    let start = self.pos;
    while self.pos < self.chars.len() {
      let open_len = if self.starts_with_ignore_case("<?php") {
        5
      } else if self.starts_with("<?=") {
        3
      } else {
        0
      };

      if open_len > 0 {
        if self.pos > start {
          self.push(TokenKind::InlineHtml, start);
        }
        let tag_start = self.pos;
        self.pos += open_len;
        self.push(TokenKind::OpenTag, tag_start);
        return;
      }
      self.pos += 1;
    }

    if self.pos > start {
      self.push(TokenKind::InlineHtml, start);
    }
  }

  fn lex_php(&mut self) {
    while let Some(c) = self.peek(0) {
      let start = self.pos;

      if self.starts_with("?>") {
        self.pos += 2;
        self.push(TokenKind::CloseTag, start);
        return;
      }

      if c.is_whitespace() {
        while self.peek(0).is_some_and(char::is_whitespace) {
          self.pos += 1;
        }
        self.push(TokenKind::Whitespace, start);
      } else if self.starts_with("//") || (c == '#' && self.peek(1) != Some('[')) {
        self.lex_line_comment();
      } else if self.starts_with("/*") {
        self.lex_block_comment();
      } else if c == '$' && self.peek(1).is_some_and(is_ident_start) {
        self.pos += 1;
        self.eat_ident();
        self.push(TokenKind::Variable, start);
      } else if is_ident_start(c) || (c == '\\' && self.peek(1).is_some_and(is_ident_start)) {
        self.eat_ident();
        self.push(TokenKind::Identifier, start);
      } else if c.is_ascii_digit() || (c == '.' && self.peek(1).is_some_and(|n| n.is_ascii_digit())) {
        self.lex_number();
      } else if c == '\'' {
        self.lex_single_quoted();
      } else if c == '"' || c == '`' {
        self.lex_double_quoted(c);
      } else if self.starts_with("<<<") && self.lex_heredoc() {
        // consumed
      } else if let Some(op) = OPERATORS.iter().find(|op| self.starts_with(op)) {
        self.pos += op.chars().count();
        self.push(TokenKind::Operator, start);
      } else {
        self.pos += 1;
        self.tokens.push(Token::char(c, self.line));
      }
    }
  }

  fn eat_ident(&mut self) {
    while self.peek(0).is_some_and(is_ident_char) {
      self.pos += 1;
    }
  }

  /// `//` or `#` up to the end of line or a closing tag
  fn lex_line_comment(&mut self) {
    let start = self.pos;
    while let Some(c) = self.peek(0) {
      if c == '\n' || self.starts_with("?>") {
        break;
      }
      self.pos += 1;
    }
    self.push(TokenKind::Comment, start);
  }

  fn lex_block_comment(&mut self) {
    let start = self.pos;
    self.pos += 2;
    while self.pos < self.chars.len() && !self.starts_with("*/") {
      self.pos += 1;
    }
    self.pos = (self.pos + 2).min(self.chars.len());
    self.push(TokenKind::Comment, start);
  }

  fn lex_number(&mut self) {
    let start = self.pos;
    let hex = self.starts_with("0x") || self.starts_with("0X");
    while let Some(c) = self.peek(0) {
      let exponent_sign =
        !hex && (c == '+' || c == '-') && matches!(self.chars[self.pos - 1], 'e' | 'E');
      if c.is_ascii_alphanumeric() || c == '_' || c == '.' || exponent_sign {
        self.pos += 1;
      } else {
        break;
      }
    }
    self.push(TokenKind::Number, start);
  }

  fn lex_single_quoted(&mut self) {
    let start = self.pos;
    self.pos += 1;
    while let Some(c) = self.peek(0) {
      self.pos += 1;
      match c {
        '\\' => self.pos = (self.pos + 1).min(self.chars.len()),
        '\'' => break,
        _ => {}
      }
    }
    self.push(TokenKind::ConstantString, start);
  }

  /// Double-quoted or backtick string; interpolation decides the kind
  fn lex_double_quoted(&mut self, quote: char) {
    let start = self.pos;
    let mut interpolated = quote == '`';
    self.pos += 1;
    while let Some(c) = self.peek(0) {
      self.pos += 1;
      match c {
        '\\' => self.pos = (self.pos + 1).min(self.chars.len()),
        '$' if self.peek(0).is_some_and(|n| is_ident_start(n) || n == '{') => interpolated = true,
        '{' if self.peek(0) == Some('$') => interpolated = true,
        _ if c == quote => break,
        _ => {}
      }
    }
    let kind = if interpolated {
      TokenKind::InterpolatedString
    } else {
      TokenKind::ConstantString
    };
    self.push(kind, start);
  }

  /// Heredoc or nowdoc including its closing label.
  ///
  /// Returns `false` without consuming anything when `<<<` is not followed
  /// by a label, so the caller falls back to operators.
  fn lex_heredoc(&mut self) -> bool {
    let start = self.pos;
    let mut i = self.pos + 3;
    while matches!(self.chars.get(i), Some(' ' | '\t')) {
      i += 1;
    }
    let quote = match self.chars.get(i) {
      Some(q @ ('\'' | '"')) => {
        i += 1;
        Some(*q)
      }
      _ => None,
    };

    let label_start = i;
    if !self.chars.get(i).copied().is_some_and(is_ident_start) {
      return false;
    }
    while self.chars.get(i).copied().is_some_and(|c| is_ident_char(c) && c != '\\') {
      i += 1;
    }
    let label: String = self.chars[label_start..i].iter().collect();
    if let Some(q) = quote {
      if self.chars.get(i) != Some(&q) {
        return false;
      }
      i += 1;
    }
    if self.chars.get(i) != Some(&'\n') && !self.starts_with_at(i, "\r\n") {
      return false;
    }

    // Closing label: first line whose indented content starts with it
    let mut end = self.chars.len();
    while i < self.chars.len() {
      if self.chars[i] == '\n' {
        let mut j = i + 1;
        while matches!(self.chars.get(j), Some(' ' | '\t')) {
          j += 1;
        }
        let after = j + label.chars().count();
        if self.starts_with_at(j, &label) && !self.chars.get(after).copied().is_some_and(is_ident_char) {
          end = after;
          break;
        }
      }
      i += 1;
    }

    self.pos = end;
    self.push(TokenKind::Heredoc, start);
    true
  }
}

fn is_ident_start(c: char) -> bool {
  c.is_alphabetic() || c == '_' || !c.is_ascii()
}

fn is_ident_char(c: char) -> bool {
  c.is_alphanumeric() || c == '_' || c == '\\' || !c.is_ascii()
}
