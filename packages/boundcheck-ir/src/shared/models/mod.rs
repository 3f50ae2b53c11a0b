//! Shared models
//!
//! - `VarName`: program / shadow variable identity
//! - `LinearExpression`, `LinearConstraint`: offset arithmetic handed to the
//!   abstract domain
//! - `SourceLocation`: (line, column) of a checked instruction
//! - `Instruction`, `Operand`, `Literal`: the instruction shapes the checker
//!   consumes

pub mod instruction;
pub mod linear;
pub mod location;
pub mod variable;

pub use instruction::{Instruction, Literal, Operand, OperandModel, ReferenceKind};
pub use linear::{LinearConstraint, LinearExpression};
pub use location::SourceLocation;
pub use variable::VarName;
