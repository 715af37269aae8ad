use super::token::Token;
use std::str::Chars;

/// Turns program text into tokens, one per non-whitespace character.
pub struct Lexer<'a> {
    program: Chars<'a>,
}

impl<'a> Lexer<'a> {
    pub fn new(program: &'a str) -> Self {
        Lexer {
            program: program.chars(),
        }
    }

    /// Get the next token. This consumes the tokens.
    /// `None` is the end of the program.
    pub fn next_token(&mut self) -> Option<Token> {
        self.trim();
        self.program.next().map(Token::new)
    }

    /// Skip whitespaces, including newlines and unicode spaces
    fn trim(&mut self) {
        while let Some(ch) = self.peek() {
            if !ch.is_whitespace() {
                break;
            }
            self.program.next();
        }
    }

    fn peek(&self) -> Option<char> {
        self.program.clone().next()
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

/// Tokenize the whole program.
pub fn tokenize(program: &str) -> Vec<Token> {
    Lexer::new(program).collect()
}
