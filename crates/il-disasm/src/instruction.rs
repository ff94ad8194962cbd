//! Decoded instruction records.

use il_opcodes::{OpcodeDefinition, OperandKind};

/// A call-target token together with its resolved helper name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MethodRef {
    /// Raw little-endian token value.
    pub token: i32,
    /// Helper name, `None` if the token is not in the enumeration.
    pub name: Option<&'static str>,
}

impl MethodRef {
    pub fn is_resolved(&self) -> bool {
        self.name.is_some()
    }
}

/// A decoded operand value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand {
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Method(MethodRef),
}

impl Operand {
    /// Operand as a sign-extended integer; method tokens yield the raw token.
    pub fn as_i64(&self) -> i64 {
        match *self {
            Operand::Int8(v) => v as i64,
            Operand::Int16(v) => v as i64,
            Operand::Int32(v) => v as i64,
            Operand::Int64(v) => v,
            Operand::Method(m) => m.token as i64,
        }
    }

    /// Encoded size in bytes.
    pub fn width(&self) -> usize {
        match self {
            Operand::Int8(_) => 1,
            Operand::Int16(_) => 2,
            Operand::Int32(_) | Operand::Method(_) => 4,
            Operand::Int64(_) => 8,
        }
    }

    pub fn as_method(&self) -> Option<&MethodRef> {
        match self {
            Operand::Method(m) => Some(m),
            _ => None,
        }
    }
}

/// One instruction of a decoded method body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodedInstruction {
    /// Byte offset where the instruction begins.
    pub offset: usize,
    pub definition: &'static OpcodeDefinition,
    pub operand: Option<Operand>,
}

impl DecodedInstruction {
    pub fn mnemonic(&self) -> &'static str {
        self.definition.mnemonic
    }

    /// Total encoded length: opcode byte(s) plus operand bytes.
    pub fn len(&self) -> usize {
        self.definition.opcode_len() + self.operand.map_or(0, |op| op.width())
    }

    /// Always false: every instruction has at least one opcode byte.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Offset of the instruction that follows this one.
    pub fn next_offset(&self) -> usize {
        self.offset + self.len()
    }

    /// Absolute target of a branch, relative offsets being measured from the
    /// next instruction. `None` for non-branches and for targets before 0.
    pub fn branch_target(&self) -> Option<usize> {
        if !self.definition.operand.is_branch() {
            return None;
        }
        let relative = self.operand?.as_i64();
        let target = self.next_offset() as i64 + relative;
        usize::try_from(target).ok()
    }

    /// The call target, for `call`, `callvirt`, `newobj`, `ldftn` and friends.
    pub fn method(&self) -> Option<&MethodRef> {
        match self.definition.operand {
            OperandKind::Method => self.operand.as_ref().and_then(Operand::as_method),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use il_opcodes::OpcodeTable;

    fn instr(byte: u8, offset: usize, operand: Option<Operand>) -> DecodedInstruction {
        DecodedInstruction {
            offset,
            definition: OpcodeTable::standard().one_byte(byte),
            operand,
        }
    }

    #[test]
    fn length_includes_operand() {
        assert_eq!(instr(0x03, 0, None).len(), 1);
        assert_eq!(instr(0x20, 0, Some(Operand::Int32(104))).len(), 5);
        assert_eq!(instr(0x21, 0, Some(Operand::Int64(1))).len(), 9);
    }

    #[test]
    fn two_byte_length() {
        let ldarg = DecodedInstruction {
            offset: 4,
            definition: OpcodeTable::standard().two_byte(0x09),
            operand: Some(Operand::Int16(300)),
        };
        assert_eq!(ldarg.len(), 4);
        assert_eq!(ldarg.next_offset(), 8);
    }

    #[test]
    fn branch_targets() {
        // br.s -16 at IL_00c7 jumps back to IL_00b9.
        let br_s = instr(0x2B, 0xC7, Some(Operand::Int8(-16)));
        assert_eq!(br_s.branch_target(), Some(0xB9));

        // br 0 falls through.
        let br = instr(0x38, 0xC9, Some(Operand::Int32(0)));
        assert_eq!(br.branch_target(), Some(0xCE));

        let backwards_past_start = instr(0x2B, 0, Some(Operand::Int8(-10)));
        assert_eq!(backwards_past_start.branch_target(), None);

        let not_a_branch = instr(0x20, 0, Some(Operand::Int32(4)));
        assert_eq!(not_a_branch.branch_target(), None);
    }

    #[test]
    fn method_accessor() {
        let call = instr(
            0x28,
            0,
            Some(Operand::Method(MethodRef {
                token: 0x44,
                name: None,
            })),
        );
        let method = call.method().unwrap();
        assert_eq!(method.token, 0x44);
        assert!(!method.is_resolved());
        assert_eq!(instr(0x2A, 0, None).method(), None);
    }

    #[test]
    fn operand_sign_extension() {
        assert_eq!(Operand::Int8(-1).as_i64(), -1);
        assert_eq!(Operand::Int16(i16::MIN).as_i64(), -32768);
        assert_eq!(Operand::Int32(-16).as_i64(), -16);
    }
}
