//! Virtual machine that runs the tokens

use crate::{
    channel::Channel,
    config::Config,
    error::{ErrorKind, Failure},
    lexer::tokenize,
    tape::Tape,
    token::Token,
};
use log::{debug, trace};

/// Frame created for the program and for every entered loop,
/// destroyed once its token sequence is finished.
#[derive(Debug)]
struct StackFrame {
    tokens: Vec<Token>, // token sequence of this frame
    cursor: usize,      // token to run next
    nesting: isize,     // balance of `]` seen directly by this frame
    is_loop: bool,      // loop bodies re-run while the current cell is non-zero
}

impl StackFrame {
    fn new(tokens: Vec<Token>, is_loop: bool) -> Self {
        StackFrame {
            tokens,
            cursor: 0,
            nesting: 0,
            is_loop,
        }
    }
}

/// Virtual machine representation
pub struct Vm {
    frame_stack: Vec<StackFrame>, // innermost active sequence is on top
    tape: Tape,
    channel: Channel,
    steps: u64,
    step_limit: Option<u64>,
}

impl Vm {
    /// Prepare a run of `program` reading from `input`.
    pub fn load(program: &str, input: &str, config: Config) -> anyhow::Result<Self> {
        config.validate()?;
        Ok(Self::start(program, input, &config))
    }

    fn start(program: &str, input: &str, config: &Config) -> Self {
        let tokens = tokenize(program);
        debug!(
            "loaded {} tokens, {} input chars, {}-bit cells",
            tokens.len(),
            input.chars().count(),
            config.cell_bits
        );

        Vm {
            frame_stack: vec![StackFrame::new(tokens, false)],
            tape: Tape::new(config.initial_cells, config.growth_chunk, config.cell_bits),
            channel: Channel::new(input),
            steps: 0,
            step_limit: config.step_limit,
        }
    }

    /// Run until the program ends or fails. A finished vm has nothing left to run,
    /// so calling this again yields an empty output.
    pub fn run(&mut self) -> Result<String, Failure> {
        loop {
            match self.step() {
                Ok(true) => {}
                Ok(false) => break,
                Err(kind) => {
                    self.frame_stack.clear();
                    debug!("run failed after {} steps: {:?}", self.steps, kind);
                    return Err(Failure::new(kind, self.channel.drain_output()));
                }
            }
        }

        let output = self.channel.drain_output();
        debug!(
            "run finished after {} steps, tape has {} cells, {} chars of output",
            self.steps,
            self.tape.len(),
            output.chars().count()
        );
        Ok(output)
    }

    /// Run a single step. Returns whether there is anything left to run.
    ///
    /// A step is either one dispatched token or one re-test of a loop guard at the
    /// end of its body.
    pub fn step(&mut self) -> Result<bool, ErrorKind> {
        let (token, is_loop) = match self.frame_stack.last() {
            Some(frame) => (frame.tokens.get(frame.cursor).copied(), frame.is_loop),
            None => return Ok(false),
        };

        // Reaching the end of the program is not a step
        if token.is_none() && !is_loop {
            self.frame_stack.pop();
            return Ok(!self.frame_stack.is_empty());
        }

        if let Some(limit) = self.step_limit {
            if self.steps >= limit {
                return Err(ErrorKind::StepLimitExceeded(limit));
            }
        }
        self.steps += 1;

        match token {
            Some(token) => {
                if let Some(frame) = self.frame_stack.last_mut() {
                    frame.cursor += 1;
                }
                self.execute(token)?;
            }
            None => {
                if self.tape.current().value() != 0 {
                    if let Some(frame) = self.frame_stack.last_mut() {
                        frame.cursor = 0;
                    }
                } else {
                    self.frame_stack.pop();
                    trace!("left loop, depth {}", self.depth());
                }
            }
        }

        Ok(!self.frame_stack.is_empty())
    }

    /// Execute one token against the tape and the channel
    fn execute(&mut self, token: Token) -> Result<(), ErrorKind> {
        match token {
            Token::Increment => self.tape.current_mut().increment(),
            Token::Decrement => self.tape.current_mut().decrement(),
            Token::ShiftRight => self.tape.move_right(),
            Token::ShiftLeft => self.tape.move_left(),
            Token::Input => {
                let ch = self.channel.pop_input()?;
                self.tape.current_mut().fill(u32::from(ch) as i64);
            }
            Token::Output => {
                let value = self.tape.current().value();
                let ch = char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER);
                self.channel.push_output(ch);
            }
            Token::BeginLoop => self.enter_loop()?,
            Token::EndLoop => return Err(self.stray_end_loop()),
            Token::Undefined(ch) => return Err(ErrorKind::UndefinedToken(ch)),
        }

        Ok(())
    }

    /// Extract the body of the loop opened by the last token, move the cursor
    /// past the matching `]` and start the body if the current cell is non-zero.
    fn enter_loop(&mut self) -> Result<(), ErrorKind> {
        let frame = match self.frame_stack.last_mut() {
            Some(frame) => frame,
            None => return Ok(()),
        };

        let (body, next) = extract_loop_body(&frame.tokens, frame.cursor)?;
        frame.cursor = next;

        if self.tape.current().value() != 0 {
            trace!(
                "entering loop of {} tokens at depth {}",
                body.len(),
                self.depth() + 1
            );
            self.frame_stack.push(StackFrame::new(body, true));
        }

        Ok(())
    }

    /// A `]` reached directly is never a valid step: unbalanced `]` is a syntax
    /// error, anything else an undefined token.
    fn stray_end_loop(&mut self) -> ErrorKind {
        let nesting = match self.frame_stack.last_mut() {
            Some(frame) => {
                frame.nesting -= 1;
                frame.nesting
            }
            None => -1,
        };

        if nesting < 0 {
            ErrorKind::InvalidSyntax
        } else {
            // Unreachable: `nesting` starts at 0 and only goes down
            ErrorKind::UndefinedToken(']')
        }
    }

    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Number of steps run so far
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn remaining_input(&self) -> usize {
        self.channel.remaining_input()
    }

    /// Number of loops currently running
    pub fn depth(&self) -> usize {
        self.frame_stack.len().saturating_sub(1)
    }
}

/// Scan from `start` (just after a `[`) for the matching `]`.
/// Returns the tokens in between and the position right after the `]`.
fn extract_loop_body(tokens: &[Token], start: usize) -> Result<(Vec<Token>, usize), ErrorKind> {
    let mut nesting = 1usize;

    for (offset, token) in tokens[start..].iter().enumerate() {
        match token {
            Token::BeginLoop => nesting += 1,
            Token::EndLoop => {
                nesting -= 1;
                if nesting == 0 {
                    let end = start + offset;
                    return Ok((tokens[start..end].to_vec(), end + 1));
                }
            }
            _ => {}
        }
    }

    // Reached the end of the sequence with the loop still open
    Err(ErrorKind::InvalidSyntax)
}

/// Runs programs with a fixed, validated configuration.
#[derive(Debug, Clone, Default)]
pub struct Interpreter {
    config: Config,
}

impl Interpreter {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        config.validate()?;
        Ok(Interpreter { config })
    }

    /// One top-level run of `program` over `input`.
    pub fn interpret(&self, program: &str, input: &str) -> Result<String, Failure> {
        Vm::start(program, input, &self.config).run()
    }
}
