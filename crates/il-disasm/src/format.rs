//! Listing formatter.
//!
//! Renders decoded instructions as text, one line each:
//!
//! ```text
//! IL_0000 ldarg.1
//! IL_0001 ldc.i4         (104)
//! IL_000a call           (65 : METHOD_PY_PUSHFRAME)
//! ```

use crate::config::{Config, FormatOptions};
use crate::decoder::Decoder;
use crate::error::DecodeError;
use crate::instruction::{DecodedInstruction, Operand};
use std::fmt;

/// Placeholder printed for call-target tokens missing from the enumeration.
pub const UNRESOLVED_NAME: &str = "<unresolved>";

/// Width of the raw-bytes column: the longest instruction is 9 bytes.
const BYTES_COLUMN_WIDTH: usize = 9 * 3 - 1;

/// Decode `bytes` and render the full listing, one line per instruction.
pub fn disassemble(bytes: &[u8], config: &Config) -> Result<String, DecodeError> {
    let mut out = String::new();
    for instr in Decoder::with_options(bytes, config.decode) {
        out.push_str(&format_instruction(&instr?, &config.format));
        out.push('\n');
    }
    Ok(out)
}

/// Render a single instruction without a trailing newline.
pub fn format_instruction(instr: &DecodedInstruction, options: &FormatOptions) -> String {
    Line { instr, options }.to_string()
}

/// Write each instruction as a line to `out`.
pub fn write_listing<'a, W, I>(out: &mut W, instrs: I, options: &FormatOptions) -> fmt::Result
where
    W: fmt::Write,
    I: IntoIterator<Item = &'a DecodedInstruction>,
{
    for instr in instrs {
        writeln!(out, "{}", Line { instr, options })?;
    }
    Ok(())
}

impl fmt::Display for DecodedInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_instruction(f, self, &FormatOptions::default())
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Int8(v) => write!(f, "{}", v),
            Operand::Int16(v) => write!(f, "{}", v),
            Operand::Int32(v) => write!(f, "{}", v),
            Operand::Int64(v) => write!(f, "{}", v),
            Operand::Method(m) => {
                write!(f, "{} : {}", m.token, m.name.unwrap_or(UNRESOLVED_NAME))
            }
        }
    }
}

struct Line<'a> {
    instr: &'a DecodedInstruction,
    options: &'a FormatOptions,
}

impl fmt::Display for Line<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_instruction(f, self.instr, self.options)
    }
}

fn write_instruction<W: fmt::Write>(
    out: &mut W,
    instr: &DecodedInstruction,
    options: &FormatOptions,
) -> fmt::Result {
    write_offset(out, instr.offset, options.uppercase_hex)?;
    out.write_char(' ')?;

    if options.show_bytes {
        let raw = hex_bytes(&encoded_bytes(instr), options.uppercase_hex);
        write!(out, "{:<width$} ", raw, width = BYTES_COLUMN_WIDTH)?;
    }

    let target = if options.show_branch_targets {
        instr.branch_target()
    } else {
        None
    };

    let Some(operand) = instr.operand else {
        return out.write_str(instr.mnemonic());
    };

    write!(
        out,
        "{:<width$}({})",
        instr.mnemonic(),
        operand,
        width = options.mnemonic_width
    )?;

    if let Some(target) = target {
        out.write_str(" -> ")?;
        write_offset(out, target, options.uppercase_hex)?;
    }
    Ok(())
}

fn write_offset<W: fmt::Write>(out: &mut W, offset: usize, uppercase: bool) -> fmt::Result {
    if uppercase {
        write!(out, "IL_{:04X}", offset)
    } else {
        write!(out, "IL_{:04x}", offset)
    }
}

fn hex_bytes(bytes: &[u8], uppercase: bool) -> String {
    bytes
        .iter()
        .map(|b| {
            if uppercase {
                format!("{:02X}", b)
            } else {
                format!("{:02x}", b)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Re-encode an instruction: opcode byte(s) then the little-endian operand.
fn encoded_bytes(instr: &DecodedInstruction) -> Vec<u8> {
    let mut bytes = instr.definition.bytes();
    match instr.operand {
        None => {}
        Some(Operand::Int8(v)) => bytes.extend_from_slice(&v.to_le_bytes()),
        Some(Operand::Int16(v)) => bytes.extend_from_slice(&v.to_le_bytes()),
        Some(Operand::Int32(v)) => bytes.extend_from_slice(&v.to_le_bytes()),
        Some(Operand::Int64(v)) => bytes.extend_from_slice(&v.to_le_bytes()),
        Some(Operand::Method(m)) => bytes.extend_from_slice(&m.token.to_le_bytes()),
    }
    bytes
}
