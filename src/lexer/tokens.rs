//! Token definitions for the tame format
//!
//! This module defines all the tokens that can be produced by the tame lexer.
//! The tokens are defined using the logos derive macro for efficient tokenization.

use logos::Logos;

/// All possible tokens in the tame format
#[derive(Logos, Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// Line-leading whitespace, the section/non-section discriminator.
    ///
    /// Synthetic: logos produces `Whitespace` everywhere and the indentation
    /// transform rewrites whitespace at the start of a line into `Indent`.
    /// See [`mark_indentation`](crate::lexer::mark_indentation).
    Indent,

    // Line breaks - all three conventions, possibly mixed within one input
    #[regex(r"\r\n|\n|\r")]
    Newline,

    // Inline whitespace (spaces and tabs, excluding line breaks)
    #[regex(r"[ \t]+")]
    Whitespace,

    // Structural markers
    #[token(":")]
    Colon,
    #[token("=")]
    Equals,
    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,

    // A legal key: alphanumeric start, alphanumeric/underscore continuation
    #[regex(r"[A-Za-z0-9][A-Za-z0-9_]*", priority = 3)]
    Word,

    // Text content (catch-all for runs of non-special characters)
    #[regex(r"[^ \t\r\n:={}]+")]
    Text,
}

impl Token {
    /// Check if this token represents line-leading indentation
    pub fn is_indent(&self) -> bool {
        matches!(self, Token::Indent)
    }

    /// Check if this token is whitespace of any kind (including line breaks)
    pub fn is_whitespace(&self) -> bool {
        matches!(self, Token::Indent | Token::Whitespace | Token::Newline)
    }

    /// Human-readable name of this token kind, used in syntax error messages
    pub fn describe(&self) -> &'static str {
        match self {
            Token::Indent => "indentation",
            Token::Newline => "end of line",
            Token::Whitespace => "whitespace",
            Token::Colon => "`:`",
            Token::Equals => "`=`",
            Token::OpenBrace => "`{`",
            Token::CloseBrace => "`}`",
            Token::Word => "identifier",
            Token::Text => "text",
        }
    }
}
