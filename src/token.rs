/// Instruction set of the tape machine.
/// ***Any other character is still a token, it just can't be executed***
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum Token {
    /// `+`
    Increment,
    /// `-`
    Decrement,
    /// `>`
    ShiftRight,
    /// `<`
    ShiftLeft,
    /// `,`
    Input,
    /// `.`
    Output,
    /// `[`
    BeginLoop,
    /// `]`
    EndLoop,

    /// Character that is not part of the instruction set
    Undefined(char),
}

impl Token {
    pub fn new(ch: char) -> Self {
        match ch {
            '+' => Token::Increment,
            '-' => Token::Decrement,
            '>' => Token::ShiftRight,
            '<' => Token::ShiftLeft,
            ',' => Token::Input,
            '.' => Token::Output,
            '[' => Token::BeginLoop,
            ']' => Token::EndLoop,
            _ => Token::Undefined(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instruction_chars() {
        for ch in "+-><,.[]".chars() {
            assert!(!matches!(Token::new(ch), Token::Undefined(_)));
        }
        assert_eq!(Token::new('['), Token::BeginLoop);
        assert_eq!(Token::new(']'), Token::EndLoop);
    }

    #[test]
    fn undefined_char_is_kept() {
        assert_eq!(Token::new('a'), Token::Undefined('a'));
        assert_eq!(Token::new(' '), Token::Undefined(' '));
    }
}
