//! CIL Method Body Disassembler
//!
//! This crate decodes the instruction stream of a tiny-header CIL method body
//! into typed records, and renders those records as a text listing.
//!
//! # Usage
//!
//! ```
//! use il_disasm::{decode_all, Operand};
//!
//! // ldarg.1; ldc.i4 104; call 65; ret
//! let body = [0x03, 0x20, 0x68, 0, 0, 0, 0x28, 0x41, 0, 0, 0, 0x2A];
//! let instrs = decode_all(&body)?;
//!
//! assert_eq!(instrs[1].operand, Some(Operand::Int32(104)));
//! assert_eq!(instrs[2].method().and_then(|m| m.name), Some("METHOD_PY_PUSHFRAME"));
//! assert_eq!(instrs[3].to_string(), "IL_000b ret");
//! # Ok::<(), il_disasm::DecodeError>(())
//! ```
//!
//! Method bodies with a fat header are rejected with
//! [`DecodeError::UnsupportedFormat`].

pub mod config;
pub mod decoder;
pub mod error;
pub mod format;
pub mod instruction;
pub mod token;

pub use config::{Config, DecodeOptions, FormatOptions};
pub use decoder::{decode, decode_all, Decoder};
pub use error::{ConfigError, DecodeError};
pub use format::{disassemble, format_instruction, write_listing};
pub use instruction::{DecodedInstruction, MethodRef, Operand};
pub use token::TokenTable;

pub use il_opcodes::{OpcodeDefinition, OpcodeTable, OperandKind};
