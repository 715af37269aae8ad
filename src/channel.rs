//! Input queue and output buffer of a run

use crate::error::ErrorKind;
use std::collections::VecDeque;

#[derive(Debug, Default)]
pub struct Channel {
    input: VecDeque<char>,
    output: String,
}

impl Channel {
    pub fn new(input: &str) -> Self {
        Channel {
            input: input.chars().collect(),
            output: String::new(),
        }
    }

    /// Remove and return the next input character.
    pub fn pop_input(&mut self) -> Result<char, ErrorKind> {
        self.input.pop_front().ok_or(ErrorKind::EmptyInput)
    }

    pub fn push_output(&mut self, ch: char) {
        self.output.push(ch);
    }

    /// Take the accumulated output, leaving the buffer empty.
    pub fn drain_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }

    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_in_order() {
        let mut channel = Channel::new("ab");
        assert_eq!(channel.pop_input(), Ok('a'));
        assert_eq!(channel.remaining_input(), 1);
        assert_eq!(channel.pop_input(), Ok('b'));
        assert_eq!(channel.pop_input(), Err(ErrorKind::EmptyInput));
    }

    #[test]
    fn drain_clears() {
        let mut channel = Channel::new("");
        channel.push_output('h');
        channel.push_output('i');
        assert_eq!(channel.drain_output(), "hi");
        assert_eq!(channel.drain_output(), "");
    }
}
