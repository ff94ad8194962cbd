//! CIL opcode catalogue.
//!
//! This crate describes every instruction form of the CIL stack bytecode:
//! its mnemonic, stack effect, operand encoding, and where it lives in the
//! one-byte or `0xFE`-prefixed two-byte group.
//!
//! The catalogue is plain static data. [`OpcodeTable::standard`] returns a
//! shared, immutable table that can be used from any number of threads.
//!
//! # Example
//!
//! ```
//! use il_opcodes::{OpcodeTable, OperandKind};
//!
//! let table = OpcodeTable::standard();
//! let call = table.lookup(0x28, None).unwrap();
//! assert_eq!(call.mnemonic, "call");
//! assert_eq!(call.operand, OperandKind::Method);
//!
//! let ceq = table.lookup(0xFE, Some(0x01)).unwrap();
//! assert_eq!(ceq.mnemonic, "ceq");
//! ```

mod opcode;
mod operand;
pub mod stack;
mod table;

pub use opcode::{
    Encoding, FlowControl, OpcodeClass, OpcodeDefinition, PREFIX_BYTE, UNUSED_MNEMONIC,
};
pub use operand::OperandKind;
pub use stack::{StackEffect, StackSlot};
pub use table::OpcodeTable;
