//! Interpreter that walks an expanded symbol string and drives a [`Turtle`]
//! against a [`Mesh`].
//!
//! The entry point is [`Interpreter`]. Construct it with a [`Dialect`] and a
//! parsed [`Descriptor`], optionally adjust it with
//! [`Interpreter::with_config`], then call [`Interpreter::interpret`] with
//! the expanded string and a target mesh.

use crate::error::StateError;
use crate::grammar::Descriptor;
use crate::mesh::Mesh;
use crate::turtle::Turtle;
use serde::{Deserialize, Serialize};
use std::iter::Peekable;
use std::str::Chars;

/// Which command table a descriptor's symbols are read against.
///
/// The extended dialect reassigns `<` / `>` from rolling to thickness
/// control, moves rolling onto `\` / `/`, and adds `%`, `=` and `*`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dialect {
    Basic,
    Extended,
}

impl Dialect {
    /// Selects the dialect by descriptor file-name convention: names ending
    /// in `.l++` use the extended table, everything else the basic one.
    pub fn from_descriptor_name(name: &str) -> Self {
        if name.ends_with(".l++") {
            Self::Extended
        } else {
            Self::Basic
        }
    }

    /// The immutable command table for this dialect. Symbols with no entry
    /// map to [`TurtleOp::Ignore`]: grammars routinely carry purely
    /// structural symbols, and those must not abort interpretation.
    pub fn lookup(self, symbol: char) -> TurtleOp {
        match self {
            Self::Basic => match symbol {
                '+' => TurtleOp::TurnLeft,
                '-' => TurtleOp::TurnRight,
                '&' => TurtleOp::PitchDown,
                '^' => TurtleOp::PitchUp,
                '<' => TurtleOp::RollLeft,
                '>' => TurtleOp::RollRight,
                '|' => TurtleOp::TurnAround,
                'F' | 'f' => TurtleOp::Draw,
                'G' | 'g' => TurtleOp::Move,
                '[' => TurtleOp::Push,
                ']' => TurtleOp::Pop,
                _ => TurtleOp::Ignore,
            },
            Self::Extended => match symbol {
                '+' => TurtleOp::TurnLeft,
                '-' => TurtleOp::TurnRight,
                '&' => TurtleOp::PitchDown,
                '^' => TurtleOp::PitchUp,
                '<' => TurtleOp::Thicken,
                '>' => TurtleOp::Narrow,
                '\\' => TurtleOp::RollLeft,
                '/' => TurtleOp::RollRight,
                '%' => TurtleOp::SetReduction,
                '=' => TurtleOp::SetThickness,
                '|' => TurtleOp::TurnAround,
                '*' => TurtleOp::DrawLeaf,
                'F' | 'f' => TurtleOp::Draw,
                'G' | 'g' => TurtleOp::Move,
                '[' => TurtleOp::Push,
                ']' => TurtleOp::Pop,
                _ => TurtleOp::Ignore,
            },
        }
    }
}

/// Operations a command symbol can resolve to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurtleOp {
    /// Rotate about the up axis (`+` / `-`).
    TurnLeft,
    TurnRight,
    /// Rotate about the right axis (`&` / `^`).
    PitchDown,
    PitchUp,
    /// Rotate about the forward axis (`<` / `>` basic, `\` / `/` extended).
    RollLeft,
    RollRight,
    /// Reverse course (`|`).
    TurnAround,
    /// Multiply / divide branch thickness (`<` / `>` extended).
    Thicken,
    Narrow,
    /// Set the taper factor (`%` extended).
    SetReduction,
    /// Set absolute thickness (`=` extended).
    SetThickness,
    /// Emit a segment and advance (`F` / `f`).
    Draw,
    /// Advance without geometry (`G` / `g`).
    Move,
    /// Emit a leaf polygon (`*` extended).
    DrawLeaf,
    /// Save the turtle state onto the branch stack (`[`).
    Push,
    /// Restore the most recently saved state (`]`).
    Pop,
    /// Symbol has no meaning in the active dialect.
    Ignore,
}

/// Knobs that are not carried by the descriptor itself.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InterpreterConfig {
    /// Cross-section tessellation of drawn segments.
    pub slices: u32,
    /// Maximum branch-stack depth; exceeding it is a [`StateError`].
    pub max_stack_depth: usize,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            slices: 8,
            max_stack_depth: 1024,
        }
    }
}

/// Walks a symbol string left to right, dispatching each command against the
/// turtle and the mesh, and owning the branch stack.
#[derive(Clone, Debug)]
pub struct Interpreter {
    dialect: Dialect,
    coefficient: f32,
    config: InterpreterConfig,
    turtle: Turtle,
    stack: Vec<Turtle>,
}

impl Interpreter {
    /// Creates an interpreter for one pass, seeding the turtle's thickness
    /// and the parameter coefficient from the descriptor.
    pub fn new(dialect: Dialect, descriptor: &Descriptor) -> Self {
        Self {
            dialect,
            coefficient: descriptor.coefficient,
            config: InterpreterConfig::default(),
            turtle: Turtle {
                thickness: descriptor.thickness,
                ..Turtle::default()
            },
            stack: Vec::new(),
        }
    }

    /// Replaces the configuration (builder pattern).
    pub fn with_config(mut self, config: InterpreterConfig) -> Self {
        self.config = config;
        self
    }

    /// The live turtle, e.g. for inspecting the final pose after a pass.
    pub fn turtle(&self) -> &Turtle {
        &self.turtle
    }

    /// Interprets the full symbol string against `mesh`.
    ///
    /// Each character is a command symbol, optionally followed by
    /// `(<integer>)`. A missing parameter defaults to the unit value 1; a
    /// literal 1 (implicit or explicit) is treated as the unit placeholder
    /// and picks up the descriptor's default coefficient, while any other
    /// literal is used verbatim.
    ///
    /// Geometry emitted inside a branch stays in the mesh when the branch is
    /// popped: `]` restores turtle pose only, never mesh contents. Errors
    /// leave already-emitted geometry in place.
    pub fn interpret(&mut self, symbols: &str, mesh: &mut Mesh) -> Result<(), StateError> {
        let mut chars = symbols.chars().peekable();
        while let Some(symbol) = chars.next() {
            let op = self.dialect.lookup(symbol);
            let explicit = if chars.peek() == Some(&'(') {
                chars.next();
                match scan_parameter(&mut chars) {
                    Some(value) => value,
                    // Unterminated parameter at end of input: the command is
                    // dropped, matching the scanner's command-then-parameter
                    // commit order.
                    None => break,
                }
            } else {
                1.0
            };
            self.run(op, explicit, mesh)?;
        }
        Ok(())
    }

    fn run(&mut self, op: TurtleOp, explicit: f32, mesh: &mut Mesh) -> Result<(), StateError> {
        // A literal 1 is the unit placeholder: it picks up the descriptor's
        // default coefficient. Any other literal is used verbatim.
        let param = if explicit == 1.0 {
            explicit * self.coefficient
        } else {
            explicit
        };
        match op {
            TurtleOp::TurnLeft => self.turtle.turn_left(param),
            TurtleOp::TurnRight => self.turtle.turn_right(param),
            TurtleOp::PitchDown => self.turtle.pitch_down(param),
            TurtleOp::PitchUp => self.turtle.pitch_up(param),
            TurtleOp::RollLeft => self.turtle.roll_left(param),
            TurtleOp::RollRight => self.turtle.roll_right(param),
            TurtleOp::TurnAround => self.turtle.turn_180(),
            TurtleOp::Thicken => self.turtle.thicken(param),
            TurtleOp::Narrow => self.turtle.narrow(param),
            TurtleOp::SetReduction => self.turtle.set_reduction(param),
            TurtleOp::SetThickness => self.turtle.set_thickness(param),
            TurtleOp::Draw => self.turtle.draw(param, self.config.slices, mesh),
            TurtleOp::Move => self.turtle.move_by(param),
            TurtleOp::DrawLeaf => self.turtle.draw_leaf(param, mesh),
            TurtleOp::Push => {
                if self.stack.len() >= self.config.max_stack_depth {
                    return Err(StateError::StackOverflow {
                        limit: self.config.max_stack_depth,
                    });
                }
                self.stack.push(self.turtle.clone());
            }
            TurtleOp::Pop => {
                self.turtle = self.stack.pop().ok_or(StateError::UnmatchedPop)?;
            }
            TurtleOp::Ignore => {}
        }
        Ok(())
    }
}

/// Accumulates decimal digits until the closing `)`. Non-digit characters
/// inside the parentheses are skipped; `None` means the input ended before
/// the parameter closed.
fn scan_parameter(chars: &mut Peekable<Chars<'_>>) -> Option<f32> {
    let mut value = 0.0f32;
    loop {
        match chars.next()? {
            ')' => return Some(value),
            c if c.is_ascii_digit() => value = value * 10.0 + f32::from(c as u8 - b'0'),
            _ => {}
        }
    }
}
