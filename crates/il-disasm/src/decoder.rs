//! Stream decoder.
//!
//! Turns a method body's raw instruction bytes into [`DecodedInstruction`]s,
//! one per call to [`Iterator::next`]. Decoding is lazy and never
//! backtracks: the program counter only moves forward, by exactly the
//! length of each instruction.

use crate::config::DecodeOptions;
use crate::error::DecodeError;
use crate::instruction::{DecodedInstruction, MethodRef, Operand};
use crate::token::TokenTable;
use il_opcodes::{OpcodeDefinition, OpcodeTable, OperandKind};
use std::iter::FusedIterator;

/// A method body starting with this byte carries a fat header.
const FAT_HEADER_SENTINEL: u8 = 0x00;

/// Decode `bytes` with the standard opcode and token tables.
pub fn decode(bytes: &[u8]) -> Decoder<'_> {
    Decoder::new(
        bytes,
        OpcodeTable::standard(),
        TokenTable::standard(),
        DecodeOptions::default(),
    )
}

/// Decode the whole stream, stopping at the first error.
pub fn decode_all(bytes: &[u8]) -> Result<Vec<DecodedInstruction>, DecodeError> {
    decode(bytes).collect()
}

/// Lazy decoder over one method body.
///
/// Yields `Ok` records in stream order. After an error, or once the stream is
/// exhausted, it yields `None` forever.
#[derive(Clone, Debug)]
pub struct Decoder<'a> {
    bytes: &'a [u8],
    pc: usize,
    table: &'static OpcodeTable,
    tokens: TokenTable,
    options: DecodeOptions,
    decoded: usize,
    finished: bool,
}

impl<'a> Decoder<'a> {
    pub fn new(
        bytes: &'a [u8],
        table: &'static OpcodeTable,
        tokens: TokenTable,
        options: DecodeOptions,
    ) -> Self {
        Self {
            bytes,
            pc: 0,
            table,
            tokens,
            options,
            decoded: 0,
            finished: false,
        }
    }

    /// Decode with the standard tables and the given options.
    pub fn with_options(bytes: &'a [u8], options: DecodeOptions) -> Self {
        Self::new(bytes, OpcodeTable::standard(), TokenTable::standard(), options)
    }

    /// Offset of the next instruction to decode.
    pub fn offset(&self) -> usize {
        self.pc
    }

    /// Number of instructions yielded so far.
    pub fn decoded(&self) -> usize {
        self.decoded
    }

    fn decode_next(&mut self) -> Result<Option<DecodedInstruction>, DecodeError> {
        let start = self.pc;
        let Some(&first) = self.bytes.get(start) else {
            return Ok(None);
        };

        if start == 0 && first == FAT_HEADER_SENTINEL {
            return Err(DecodeError::UnsupportedFormat { offset: start });
        }

        let definition = self
            .table
            .lookup(first, self.bytes.get(start + 1).copied())
            .ok_or(DecodeError::TruncatedStream {
                offset: start,
                needed: 1,
                available: 0,
            })?;

        let mut cursor = start + definition.opcode_len();
        let operand = self.read_operand(definition, start, &mut cursor)?;

        let instr = DecodedInstruction {
            offset: start,
            definition,
            operand,
        };
        debug_assert_eq!(instr.next_offset(), cursor);

        log::trace!("IL_{:04x} {}", start, definition.mnemonic);
        self.pc = cursor;
        Ok(Some(instr))
    }

    fn read_operand(
        &self,
        definition: &'static OpcodeDefinition,
        start: usize,
        cursor: &mut usize,
    ) -> Result<Option<Operand>, DecodeError> {
        let operand = match definition.operand {
            OperandKind::None => return Ok(None),

            OperandKind::ShortBranchTarget | OperandKind::ShortVar | OperandKind::ShortInt => {
                Operand::Int8(i8::from_le_bytes(self.take(start, cursor)?))
            }

            OperandKind::Var => Operand::Int16(i16::from_le_bytes(self.take(start, cursor)?)),

            OperandKind::BranchTarget
            | OperandKind::Int32
            | OperandKind::Field
            | OperandKind::Signature
            | OperandKind::String
            | OperandKind::Type
            | OperandKind::Token => Operand::Int32(i32::from_le_bytes(self.take(start, cursor)?)),

            OperandKind::Int64 => Operand::Int64(i64::from_le_bytes(self.take(start, cursor)?)),

            OperandKind::Method => {
                let token = i32::from_le_bytes(self.take(start, cursor)?);
                Operand::Method(self.resolve_method(token, start)?)
            }

            kind @ (OperandKind::ShortFloat | OperandKind::Float | OperandKind::Switch) => {
                return Err(DecodeError::UnsupportedOperandKind {
                    kind,
                    mnemonic: definition.mnemonic,
                    offset: start,
                });
            }
        };
        Ok(Some(operand))
    }

    fn resolve_method(&self, token: i32, start: usize) -> Result<MethodRef, DecodeError> {
        let name = self.tokens.resolve(token);
        if name.is_none() {
            if self.options.strict_tokens {
                return Err(DecodeError::UnresolvedToken {
                    offset: start,
                    token,
                });
            }
            log::warn!("IL_{:04x}: unresolved call target token {:#010x}", start, token);
        }
        Ok(MethodRef { token, name })
    }

    /// Read `N` operand bytes at `cursor`, advancing it.
    fn take<const N: usize>(&self, start: usize, cursor: &mut usize) -> Result<[u8; N], DecodeError> {
        let available = self.bytes.len().saturating_sub(*cursor);
        let chunk = self
            .bytes
            .get(*cursor..*cursor + N)
            .ok_or(DecodeError::TruncatedStream {
                offset: start,
                needed: N,
                available,
            })?;
        let mut buf = [0u8; N];
        buf.copy_from_slice(chunk);
        *cursor += N;
        Ok(buf)
    }
}

impl Iterator for Decoder<'_> {
    type Item = Result<DecodedInstruction, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.decode_next() {
            Ok(Some(instr)) => {
                self.decoded += 1;
                Some(Ok(instr))
            }
            Ok(None) => {
                self.finished = true;
                log::debug!(
                    "decoded {} instruction(s) from {} byte(s)",
                    self.decoded,
                    self.bytes.len()
                );
                None
            }
            Err(err) => {
                self.finished = true;
                log::debug!("decode aborted after {} instruction(s): {}", self.decoded, err);
                Some(Err(err))
            }
        }
    }
}

impl FusedIterator for Decoder<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn mnemonics(bytes: &[u8]) -> Vec<&'static str> {
        decode_all(bytes)
            .unwrap()
            .iter()
            .map(|i| i.mnemonic())
            .collect()
    }

    #[test]
    fn empty_stream_is_success() {
        assert!(decode_all(&[]).unwrap().is_empty());
    }

    #[test]
    fn zero_operand_sequence() {
        // ldarg.1 ldc.i4.0 add ret
        let instrs = decode_all(&[0x03, 0x16, 0x58, 0x2A]).unwrap();
        let offsets: Vec<usize> = instrs.iter().map(|i| i.offset).collect();
        assert_eq!(offsets, vec![0, 1, 2, 3]);
        assert_eq!(mnemonics(&[0x03, 0x16, 0x58, 0x2A]), ["ldarg.1", "ldc.i4.0", "add", "ret"]);
        assert!(instrs.iter().all(|i| i.operand.is_none()));
    }

    #[test]
    fn ldc_i4_operand() {
        let instrs = decode_all(&[0x20, 0x68, 0x00, 0x00, 0x00, 0x2A]).unwrap();
        assert_eq!(instrs[0].mnemonic(), "ldc.i4");
        assert_eq!(instrs[0].operand, Some(Operand::Int32(104)));
        assert_eq!(instrs[1].offset, 5);
    }

    #[test]
    fn negative_operands_are_sign_extended() {
        let instrs = decode_all(&[0x2B, 0xF0, 0x20, 0xFF, 0xFF, 0xFF, 0xFF]).unwrap();
        assert_eq!(instrs[0].operand, Some(Operand::Int8(-16)));
        assert_eq!(instrs[1].operand, Some(Operand::Int32(-1)));
    }

    #[test]
    fn ldc_i8_operand() {
        let mut bytes = vec![0x21];
        bytes.extend_from_slice(&(-2i64).to_le_bytes());
        let instrs = decode_all(&bytes).unwrap();
        assert_eq!(instrs[0].operand, Some(Operand::Int64(-2)));
        assert_eq!(instrs[0].len(), 9);
    }

    #[test]
    fn short_int_operand() {
        // ldc.i4.s -3
        let instrs = decode_all(&[0x1F, 0xFD]).unwrap();
        assert_eq!(instrs[0].mnemonic(), "ldc.i4.s");
        assert_eq!(instrs[0].operand, Some(Operand::Int8(-3)));
    }

    #[test]
    fn two_byte_opcodes() {
        // ldarg.1; ceq; ldloc 0x0102
        let instrs = decode_all(&[0x03, 0xFE, 0x01, 0xFE, 0x0C, 0x02, 0x01]).unwrap();
        assert_eq!(instrs[1].mnemonic(), "ceq");
        assert_eq!(instrs[1].offset, 1);
        assert_eq!(instrs[2].mnemonic(), "ldloc");
        assert_eq!(instrs[2].offset, 3);
        assert_eq!(instrs[2].operand, Some(Operand::Int16(0x0102)));
        assert_eq!(instrs[2].len(), 4);
    }

    #[test]
    fn fat_header_is_rejected() {
        let mut decoder = decode(&[0x00, 0x03, 0x2A]);
        assert_eq!(
            decoder.next(),
            Some(Err(DecodeError::UnsupportedFormat { offset: 0 }))
        );
        assert_eq!(decoder.next(), None);
        assert_eq!(decoder.decoded(), 0);
    }

    #[test]
    fn nop_after_offset_zero_is_fine() {
        assert_eq!(mnemonics(&[0x03, 0x00, 0x2A]), ["ldarg.1", "nop", "ret"]);
    }

    #[test]
    fn prefix_at_end_of_stream() {
        let results: Vec<_> = decode(&[0x03, 0xFE]).collect();
        assert_eq!(results.len(), 2);
        assert!(results[0].is_ok());
        assert_eq!(
            results[1],
            Err(DecodeError::TruncatedStream {
                offset: 1,
                needed: 1,
                available: 0,
            })
        );
    }

    #[test]
    fn truncated_operand_emits_no_record() {
        let results: Vec<_> = decode(&[0x03, 0x20, 0x68, 0x00]).collect();
        assert_eq!(results.len(), 2);
        assert_eq!(
            results[1],
            Err(DecodeError::TruncatedStream {
                offset: 1,
                needed: 4,
                available: 2,
            })
        );
    }

    #[test]
    fn truncated_two_byte_operand() {
        // starg with one of its two index bytes
        let err = decode_all(&[0x03, 0xFE, 0x0B, 0x01]).unwrap_err();
        assert_eq!(
            err,
            DecodeError::TruncatedStream {
                offset: 1,
                needed: 2,
                available: 1,
            }
        );
    }

    #[test]
    fn unsupported_operand_kinds() {
        let err = decode_all(&[0x03, 0x45, 0x01, 0x00, 0x00, 0x00]).unwrap_err();
        assert_eq!(
            err,
            DecodeError::UnsupportedOperandKind {
                kind: OperandKind::Switch,
                mnemonic: "switch",
                offset: 1,
            }
        );

        let err = decode_all(&[0x22, 0, 0, 0x80, 0x3F]).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::UnsupportedOperandKind {
                kind: OperandKind::ShortFloat,
                offset: 0,
                ..
            }
        ));

        let err = decode_all(&[0x23, 0, 0, 0, 0, 0, 0, 0xF0, 0x3F]).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::UnsupportedOperandKind {
                kind: OperandKind::Float,
                ..
            }
        ));
    }

    #[test]
    fn method_tokens_resolve() {
        let instrs = decode_all(&[0x28, 0x00, 0x00, 0x00, 0x00]).unwrap();
        let method = instrs[0].method().unwrap();
        assert_eq!(method.token, 0);
        assert_eq!(method.name, Some("METHOD_ADD_TOKEN"));
    }

    #[test]
    fn unresolved_token_is_flagged_not_fatal() {
        let instrs = decode_all(&[0x28, 0x44, 0x00, 0x00, 0x00, 0x2A]).unwrap();
        assert_eq!(instrs.len(), 2);
        let method = instrs[0].method().unwrap();
        assert_eq!(method.token, 0x44);
        assert!(!method.is_resolved());
    }

    #[test]
    fn strict_tokens_reject_unresolved() {
        let options = DecodeOptions {
            strict_tokens: true,
        };
        let results: Vec<_> =
            Decoder::with_options(&[0x03, 0x28, 0x44, 0x00, 0x00, 0x00, 0x2A], options).collect();
        assert_eq!(results.len(), 2);
        assert_eq!(
            results[1],
            Err(DecodeError::UnresolvedToken {
                offset: 1,
                token: 0x44,
            })
        );
    }

    #[test]
    fn custom_token_table() {
        static ENTRIES: &[(i32, &str)] = &[(0x44, "HELPER_X")];
        let decoder = Decoder::new(
            &[0x28, 0x44, 0x00, 0x00, 0x00],
            OpcodeTable::standard(),
            TokenTable::new(ENTRIES),
            DecodeOptions::default(),
        );
        let instrs: Vec<_> = decoder.collect::<Result<_, _>>().unwrap();
        assert_eq!(instrs[0].method().unwrap().name, Some("HELPER_X"));
    }

    #[test]
    fn reserved_opcodes_decode_as_no_operand() {
        let instrs = decode_all(&[0x03, 0x24, 0xA3, 0xFE, 0x30, 0x2A]).unwrap();
        assert_eq!(
            instrs.iter().map(|i| i.mnemonic()).collect::<Vec<_>>(),
            ["ldarg.1", "unused", "unused", "unused", "ret"]
        );
        assert_eq!(instrs[3].offset, 3);
        assert_eq!(instrs[4].offset, 5);
    }

    #[test]
    fn decoder_tracks_offset() {
        let mut decoder = decode(&[0x03, 0x20, 0x01, 0x00, 0x00, 0x00]);
        assert_eq!(decoder.offset(), 0);
        decoder.next();
        assert_eq!(decoder.offset(), 1);
        decoder.next();
        assert_eq!(decoder.offset(), 6);
        assert_eq!(decoder.next(), None);
        assert_eq!(decoder.decoded(), 2);
    }
}
