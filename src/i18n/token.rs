//! Source tokens consumed by the validator

/// Kind of a tagged token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
  /// Bare name: function, constant, keyword
  Identifier,
  /// `$name`
  Variable,
  /// String literal without interpolation (`'a'`, `"a"`), quotes included
  ConstantString,
  /// Double-quoted string containing `$var` or `{$expr}`
  InterpolatedString,
  /// Heredoc or nowdoc body, markers included
  Heredoc,
  Number,
  Whitespace,
  Comment,
  /// Multi-character operator such as `->`, `=>`, `::`, `===`
  Operator,
  /// Text outside `<?php ... ?>`
  InlineHtml,
  OpenTag,
  CloseTag,
}

/// One lexical unit
///
/// Tagged tokens carry a kind and their source text. Single-character
/// punctuation (`(`, `)`, `,`, `.`, `;` ...) is a [`Token::Char`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
  Tagged { kind: TokenKind, text: String, line: usize },
  Char { ch: char, line: usize },
}

impl Token {
  pub fn tagged(kind: TokenKind, text: impl Into<String>, line: usize) -> Self {
    Token::Tagged {
      kind,
      text: text.into(),
      line,
    }
  }

  pub fn char(ch: char, line: usize) -> Self {
    Token::Char { ch, line }
  }

  /// 1-based line of the token's first character
  pub fn line(&self) -> usize {
    match self {
      Token::Tagged { line, .. } | Token::Char { line, .. } => *line,
    }
  }

  /// Kind of a tagged token, `None` for punctuation
  pub fn kind(&self) -> Option<TokenKind> {
    match self {
      Token::Tagged { kind, .. } => Some(*kind),
      Token::Char { .. } => None,
    }
  }

  pub fn is_char(&self, c: char) -> bool {
    matches!(self, Token::Char { ch, .. } if *ch == c)
  }

  /// Tokens that never separate a function name from its `(`
  pub fn is_trivia(&self) -> bool {
    matches!(self.kind(), Some(TokenKind::Whitespace | TokenKind::Comment))
  }
}
