use super::{Address, Labels, Opcode, Program, Stack, Val};
use crate::error;
use crate::lang::{Error, Line};
use tracing::{debug, info, trace};

type Result<T> = std::result::Result<T, Error>;

/// ## Stack machine
///
/// Owns the program counter, the operand stack and the label table.
/// Each fetched line is decoded and dispatched, then the counter
/// advances by one even if the instruction jumped. A jump therefore
/// resumes on the line after the label declaration.
///
/// A failing instruction never stops the machine. Its error is
/// handed to the caller as an `Event::Error` and the next line runs.

#[derive(Debug)]
pub struct Runtime {
    program: Program,
    labels: Labels,
    stack: Stack<Val>,
    pc: Address,
}

/// ## Events are returned by `Runtime::execute`
///
/// Anything other than `Running` means the caller has something to
/// show. `Stopped` is returned once the counter has left the program
/// and on every call after that.

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Stopped,
    Running,
    Print(String),
    Error(Error),
}

impl Runtime {
    pub fn new<T: Into<Program>>(program: T) -> Runtime {
        let program = program.into();
        let labels = Labels::build(&program);
        debug!(lines = program.len(), labels = labels.len(), "built label table");
        Runtime {
            program,
            labels,
            stack: Stack::new(),
            pc: 0,
        }
    }

    pub fn pc(&self) -> Address {
        self.pc
    }

    pub fn stack(&self) -> &Stack<Val> {
        &self.stack
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn is_stopped(&self) -> bool {
        self.pc >= self.program.len()
    }

    /// Runs the program to the end, handing every printout and
    /// error to `emit` in execution order.
    pub fn run<F: FnMut(Event)>(&mut self, mut emit: F) {
        info!(lines = self.program.len(), "run");
        loop {
            match self.execute(usize::MAX) {
                Event::Stopped => break,
                Event::Running => {}
                event => emit(event),
            }
        }
        info!(depth = self.stack.len(), "stopped");
    }

    /// Executes at most `cycles` instructions. Returns early with the
    /// first instruction that has something to report.
    pub fn execute(&mut self, cycles: usize) -> Event {
        for _ in 0..cycles {
            if self.is_stopped() {
                return Event::Stopped;
            }
            if let Some(event) = self.step() {
                return event;
            }
        }
        if self.is_stopped() {
            Event::Stopped
        } else {
            Event::Running
        }
    }

    fn step(&mut self) -> Option<Event> {
        let addr = self.pc;
        let line = self.program.line(addr)?.clone();
        let outcome = self.dispatch(&line);
        self.pc += 1;
        match outcome {
            Ok(Some(s)) => Some(Event::Print(s)),
            Ok(None) => None,
            Err(error) => {
                let error = error.at_address(addr).in_instruction(&line.to_string());
                debug!(%error, "instruction failed");
                Some(Event::Error(error))
            }
        }
    }

    fn dispatch(&mut self, line: &Line) -> Result<Option<String>> {
        let op = Opcode::decode(line)?;
        trace!(pc = self.pc, %op, depth = self.stack.len());
        self.stack.require(op.arity())?;
        match op {
            Opcode::Push(val) => self.stack.push(val),
            Opcode::Pop => {
                self.stack.pop()?;
            }
            Opcode::Dup => {
                let val = *self.stack.peek()?;
                self.stack.push(val);
            }
            Opcode::Swap => {
                let (b, a) = self.stack.pop_2()?;
                self.stack.push(a);
                self.stack.push(b);
            }
            Opcode::Add => self.binary(|b, a| Ok(b.wrapping_add(a)))?,
            Opcode::Sub => self.binary(|b, a| Ok(b.wrapping_sub(a)))?,
            Opcode::Mul => self.binary(|b, a| Ok(b.wrapping_mul(a)))?,
            Opcode::Div => self.binary(|b, a| {
                if a == 0 {
                    Err(error!(DivisionByZero))
                } else {
                    Ok(b.wrapping_div(a))
                }
            })?,
            Opcode::Mod => self.binary(|b, a| {
                if a == 0 {
                    Err(error!(DivisionByZero))
                } else {
                    Ok(b.wrapping_rem(a))
                }
            })?,
            Opcode::Cmpe => self.binary(|b, a| Ok((a == b) as Val))?,
            Opcode::Cmpg => self.binary(|b, a| Ok((a < b) as Val))?,
            Opcode::Cmpl => self.binary(|b, a| Ok((a > b) as Val))?,
            Opcode::Jmp(label) => self.jump(&label),
            Opcode::Cjmp(label) => {
                if self.stack.pop()? == 1 {
                    match label {
                        Some(label) => self.jump(&label),
                        None => return Err(error!(MalformedOperand; "MISSING LABEL")),
                    }
                }
            }
            Opcode::Print => {
                return Ok(Some(match self.stack.peek() {
                    Ok(val) => format!("Top of stack: {}", val),
                    Err(_) => "Top of stack: Empty".to_string(),
                }));
            }
            Opcode::Label(_) => {}
            Opcode::Unknown(_) => return Err(error!(UnknownOpcode)),
        }
        Ok(None)
    }

    /// Pops `a` then `b` and pushes `f(b, a)`.
    /// Operands stay consumed when `f` fails.
    fn binary<F>(&mut self, f: F) -> Result<()>
    where
        F: Fn(Val, Val) -> Result<Val>,
    {
        let (b, a) = self.stack.pop_2()?;
        self.stack.push(f(b, a)?);
        Ok(())
    }

    /// Unresolved labels leave the counter alone.
    fn jump(&mut self, label: &str) {
        match self.labels.resolve(label) {
            Ok(addr) => self.pc = addr,
            Err(error) => debug!(%error, "jump ignored"),
        }
    }
}
