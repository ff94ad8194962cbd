//! Opcode definitions.

use crate::operand::OperandKind;
use crate::stack::StackEffect;
use std::fmt;

/// Byte that introduces the two-byte opcode group.
pub const PREFIX_BYTE: u8 = 0xFE;

/// Mnemonic shared by every reserved slot.
pub const UNUSED_MNEMONIC: &str = "unused";

/// Which opcode group a definition lives in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// A single opcode byte.
    OneByte,
    /// `0xFE` followed by the opcode byte.
    TwoByte,
}

/// Broad category of an instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OpcodeClass {
    /// Basic instruction.
    Primitive,
    /// Short form of another instruction (`ldarg.1` for `ldarg 1`).
    Macro,
    /// Object-model instruction.
    ObjModel,
    /// Internal to the runtime; never valid in a method body.
    Internal,
    /// Prefix that modifies the next instruction.
    Prefix,
}

/// How control leaves an instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlowControl {
    Next,
    Break,
    Call,
    Return,
    Branch,
    CondBranch,
    Throw,
    Meta,
}

/// One entry of the opcode catalogue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OpcodeDefinition {
    /// Canonical identifier, e.g. `CEE_LDARG_1`.
    pub name: &'static str,
    /// Assembly mnemonic, e.g. `ldarg.1`.
    pub mnemonic: &'static str,
    pub pop: StackEffect,
    pub push: StackEffect,
    pub operand: OperandKind,
    pub class: OpcodeClass,
    pub flow: FlowControl,
    pub encoding: Encoding,
    /// Byte selecting this definition within its group.
    pub value: u8,
}

impl OpcodeDefinition {
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        encoding: Encoding,
        value: u8,
        name: &'static str,
        mnemonic: &'static str,
        pop: StackEffect,
        push: StackEffect,
        operand: OperandKind,
        class: OpcodeClass,
        flow: FlowControl,
    ) -> Self {
        Self {
            name,
            mnemonic,
            pop,
            push,
            operand,
            class,
            flow,
            encoding,
            value,
        }
    }

    /// Reserved slot used to fill the two-byte group past its last defined form.
    pub const fn unused(encoding: Encoding, value: u8) -> Self {
        Self::new(
            encoding,
            value,
            "CEE_UNUSED",
            UNUSED_MNEMONIC,
            crate::stack::POP0,
            crate::stack::PUSH0,
            OperandKind::None,
            OpcodeClass::Primitive,
            FlowControl::Next,
        )
    }

    /// Bytes taken by the opcode itself (1, or 2 with the prefix).
    pub const fn opcode_len(&self) -> usize {
        match self.encoding {
            Encoding::OneByte => 1,
            Encoding::TwoByte => 2,
        }
    }

    /// Fixed number of operand bytes, `None` for variable-length operands.
    pub const fn operand_width(&self) -> Option<usize> {
        self.operand.width()
    }

    pub fn is_unused(&self) -> bool {
        self.mnemonic == UNUSED_MNEMONIC
    }

    /// True for the one-byte entry whose byte introduces the two-byte group.
    pub const fn is_prefix_sentinel(&self) -> bool {
        matches!(self.encoding, Encoding::OneByte) && self.value == PREFIX_BYTE
    }

    /// The raw encoding: `[value]` or `[0xFE, value]`.
    pub fn bytes(&self) -> Vec<u8> {
        match self.encoding {
            Encoding::OneByte => vec![self.value],
            Encoding::TwoByte => vec![PREFIX_BYTE, self.value],
        }
    }
}

impl fmt::Display for OpcodeDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic)
    }
}
