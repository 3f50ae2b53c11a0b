//! Instruction builders
//!
//! Every builder places the instruction at a fixed source location so that
//! records can be compared without threading locations through each test.

use boundcheck_ir::{AccessChecker, Instruction, Operand, SourceLocation};

pub const LINE: u32 = 42;
pub const COLUMN: u32 = 7;

pub fn here() -> SourceLocation {
    SourceLocation::new(LINE, COLUMN)
}

pub fn checker() -> AccessChecker {
    AccessChecker::default()
}

pub fn load(pointer: &str) -> Instruction {
    Instruction::Load {
        pointer: Operand::var(pointer),
        location: here(),
    }
}

pub fn store(pointer: &str) -> Instruction {
    Instruction::Store {
        pointer: Operand::var(pointer),
        location: here(),
    }
}

pub fn memcpy(destination: Operand, source: Operand, length: Operand) -> Instruction {
    Instruction::MemCopy {
        destination,
        source,
        length,
        location: here(),
    }
}

pub fn memmove(destination: Operand, source: Operand, length: Operand) -> Instruction {
    Instruction::MemMove {
        destination,
        source,
        length,
        location: here(),
    }
}

pub fn memset(destination: Operand, length: Operand) -> Instruction {
    Instruction::MemSet {
        destination,
        length,
        location: here(),
    }
}
