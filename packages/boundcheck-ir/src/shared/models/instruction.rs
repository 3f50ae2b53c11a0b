//! Memory-access instruction shapes
//!
//! The checker consumes a closed set of instruction kinds. Operands are
//! generic: any IR can plug in by implementing [`OperandModel`]; [`Operand`]
//! is a ready-made operand for embedders and tests.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::location::SourceLocation;
use super::variable::VarName;

/// How an operand refers to memory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReferenceKind {
    /// Direct reference to a named global variable
    DirectGlobal,
    /// Direct reference to a stack-allocated slot
    DirectStackSlot,
    /// Anything else (a pointer value computed at runtime)
    Indirect,
}

/// Literal resolution of an operand
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Literal {
    Var(VarName),
    Num(i64),
    /// Neither a variable nor a numeral (e.g. undefined)
    Unresolved,
}

impl Literal {
    pub fn as_var(&self) -> Option<&VarName> {
        match self {
            Literal::Var(name) => Some(name),
            _ => None,
        }
    }

    pub fn is_var(&self) -> bool {
        matches!(self, Literal::Var(_))
    }

    pub fn is_num(&self) -> bool {
        matches!(self, Literal::Num(_))
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Var(name) => write!(f, "{}", name),
            Literal::Num(n) => write!(f, "{}", n),
            Literal::Unresolved => write!(f, "<unresolved>"),
        }
    }
}

/// Operand contract consumed from the IR
pub trait OperandModel: fmt::Debug {
    fn reference_kind(&self) -> ReferenceKind;

    fn literal(&self) -> Literal;
}

/// Minimal operand model
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operand {
    /// `@g` - address of a global
    GlobalVar(VarName),
    /// `%slot` - address of a stack slot
    StackSlot(VarName),
    /// A pointer or integer held in a variable
    Var(VarName),
    Constant(i64),
    Undefined,
}

impl Operand {
    pub fn var(name: impl Into<VarName>) -> Self {
        Operand::Var(name.into())
    }

    pub fn global(name: impl Into<VarName>) -> Self {
        Operand::GlobalVar(name.into())
    }

    pub fn stack_slot(name: impl Into<VarName>) -> Self {
        Operand::StackSlot(name.into())
    }
}

impl OperandModel for Operand {
    fn reference_kind(&self) -> ReferenceKind {
        match self {
            Operand::GlobalVar(_) => ReferenceKind::DirectGlobal,
            Operand::StackSlot(_) => ReferenceKind::DirectStackSlot,
            _ => ReferenceKind::Indirect,
        }
    }

    fn literal(&self) -> Literal {
        match self {
            Operand::GlobalVar(name) | Operand::StackSlot(name) | Operand::Var(name) => {
                Literal::Var(name.clone())
            }
            Operand::Constant(n) => Literal::Num(*n),
            Operand::Undefined => Literal::Unresolved,
        }
    }
}

/// Instruction kinds that access memory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Instruction<O = Operand> {
    Load {
        pointer: O,
        location: SourceLocation,
    },
    Store {
        pointer: O,
        location: SourceLocation,
    },
    MemCopy {
        destination: O,
        source: O,
        length: O,
        location: SourceLocation,
    },
    MemMove {
        destination: O,
        source: O,
        length: O,
        location: SourceLocation,
    },
    MemSet {
        destination: O,
        length: O,
        location: SourceLocation,
    },
}

impl<O> Instruction<O> {
    pub fn location(&self) -> SourceLocation {
        match self {
            Instruction::Load { location, .. }
            | Instruction::Store { location, .. }
            | Instruction::MemCopy { location, .. }
            | Instruction::MemMove { location, .. }
            | Instruction::MemSet { location, .. } => *location,
        }
    }

    pub fn mnemonic(&self) -> &'static str {
        match self {
            Instruction::Load { .. } => "load",
            Instruction::Store { .. } => "store",
            Instruction::MemCopy { .. } => "memcpy",
            Instruction::MemMove { .. } => "memmove",
            Instruction::MemSet { .. } => "memset",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_kinds() {
        assert_eq!(Operand::global("g").reference_kind(), ReferenceKind::DirectGlobal);
        assert_eq!(
            Operand::stack_slot("buf").reference_kind(),
            ReferenceKind::DirectStackSlot
        );
        assert_eq!(Operand::var("p").reference_kind(), ReferenceKind::Indirect);
        assert_eq!(Operand::Constant(4).reference_kind(), ReferenceKind::Indirect);
    }

    #[test]
    fn test_literals() {
        assert_eq!(Operand::var("p").literal(), Literal::Var(VarName::new("p")));
        assert_eq!(Operand::Constant(16).literal(), Literal::Num(16));
        assert_eq!(Operand::Undefined.literal(), Literal::Unresolved);
    }

    #[test]
    fn test_location_and_mnemonic() {
        let instr = Instruction::MemSet {
            destination: Operand::var("p"),
            length: Operand::Constant(8),
            location: SourceLocation::new(14, 3),
        };
        assert_eq!(instr.location(), SourceLocation::new(14, 3));
        assert_eq!(instr.mnemonic(), "memset");
    }
}
