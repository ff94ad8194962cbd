//! The opcode catalogue.
//!
//! Both groups are fixed 256-entry arrays built at compile time, so lookup is
//! a single index with no hashing. The literal catalogue below lists every
//! one-byte form and every defined two-byte form; [`build`] checks that each
//! byte value appears at most once and fills the remaining two-byte slots
//! with `unused` placeholders.

use crate::opcode::{Encoding, FlowControl, OpcodeClass, OpcodeDefinition, PREFIX_BYTE};
use crate::operand::OperandKind;
use crate::stack::*;

/// Read-only mapping from opcode bytes to definitions.
#[derive(Debug)]
pub struct OpcodeTable {
    one_byte: [OpcodeDefinition; 256],
    two_byte: [OpcodeDefinition; 256],
}

static STANDARD: OpcodeTable = OpcodeTable {
    one_byte: build(&ONE_BYTE_DEFS, Encoding::OneByte),
    two_byte: build(&TWO_BYTE_DEFS, Encoding::TwoByte),
};

impl OpcodeTable {
    /// The standard CIL instruction set.
    pub fn standard() -> &'static OpcodeTable {
        &STANDARD
    }

    /// Resolve an opcode from its first byte and, if present, the byte after it.
    ///
    /// When `byte` is the two-byte prefix the definition is selected by `next`
    /// within the prefixed group. Returns `None` only when the prefix is the
    /// last byte of the stream.
    pub fn lookup(&self, byte: u8, next: Option<u8>) -> Option<&OpcodeDefinition> {
        if byte == PREFIX_BYTE {
            next.map(|second| self.two_byte(second))
        } else {
            Some(self.one_byte(byte))
        }
    }

    /// Definition at `value` in the one-byte group.
    pub fn one_byte(&self, value: u8) -> &OpcodeDefinition {
        &self.one_byte[value as usize]
    }

    /// Definition at `value` in the `0xFE`-prefixed group.
    pub fn two_byte(&self, value: u8) -> &OpcodeDefinition {
        &self.two_byte[value as usize]
    }

    /// All 512 slots, one-byte group first.
    pub fn iter(&self) -> impl Iterator<Item = &OpcodeDefinition> {
        self.one_byte.iter().chain(self.two_byte.iter())
    }

    /// Find a non-reserved definition by mnemonic.
    pub fn find(&self, mnemonic: &str) -> Option<&OpcodeDefinition> {
        self.iter()
            .find(|def| !def.is_unused() && def.mnemonic == mnemonic)
    }
}

const fn build<const N: usize>(
    defs: &[OpcodeDefinition; N],
    encoding: Encoding,
) -> [OpcodeDefinition; 256] {
    let mut table = [OpcodeDefinition::unused(encoding, 0); 256];
    let mut slot = 0;
    while slot < 256 {
        table[slot].value = slot as u8;
        slot += 1;
    }

    let mut seen = [false; 256];
    let mut i = 0;
    while i < N {
        let def = defs[i];
        assert!(
            def.encoding as u8 == encoding as u8,
            "definition listed in the wrong group"
        );
        let slot = def.value as usize;
        assert!(!seen[slot], "opcode value defined twice");
        seen[slot] = true;
        table[slot] = def;
        i += 1;
    }
    table
}

use FlowControl as F;
use OpcodeClass as C;
use OperandKind as K;

#[allow(clippy::too_many_arguments)]
const fn one(
    value: u8,
    name: &'static str,
    mnemonic: &'static str,
    pop: StackEffect,
    push: StackEffect,
    operand: OperandKind,
    class: OpcodeClass,
    flow: FlowControl,
) -> OpcodeDefinition {
    OpcodeDefinition::new(
        Encoding::OneByte,
        value,
        name,
        mnemonic,
        pop,
        push,
        operand,
        class,
        flow,
    )
}

#[allow(clippy::too_many_arguments)]
const fn two(
    value: u8,
    name: &'static str,
    mnemonic: &'static str,
    pop: StackEffect,
    push: StackEffect,
    operand: OperandKind,
    class: OpcodeClass,
    flow: FlowControl,
) -> OpcodeDefinition {
    OpcodeDefinition::new(
        Encoding::TwoByte,
        value,
        name,
        mnemonic,
        pop,
        push,
        operand,
        class,
        flow,
    )
}

#[rustfmt::skip]
const ONE_BYTE_DEFS: [OpcodeDefinition; 256] = [
    one(0x00, "CEE_NOP", "nop", POP0, PUSH0, K::None, C::Primitive, F::Next),
    one(0x01, "CEE_BREAK", "break", POP0, PUSH0, K::None, C::Primitive, F::Break),
    one(0x02, "CEE_LDARG_0", "ldarg.0", POP0, PUSH1, K::None, C::Macro, F::Next),
    one(0x03, "CEE_LDARG_1", "ldarg.1", POP0, PUSH1, K::None, C::Macro, F::Next),
    one(0x04, "CEE_LDARG_2", "ldarg.2", POP0, PUSH1, K::None, C::Macro, F::Next),
    one(0x05, "CEE_LDARG_3", "ldarg.3", POP0, PUSH1, K::None, C::Macro, F::Next),
    one(0x06, "CEE_LDLOC_0", "ldloc.0", POP0, PUSH1, K::None, C::Macro, F::Next),
    one(0x07, "CEE_LDLOC_1", "ldloc.1", POP0, PUSH1, K::None, C::Macro, F::Next),
    one(0x08, "CEE_LDLOC_2", "ldloc.2", POP0, PUSH1, K::None, C::Macro, F::Next),
    one(0x09, "CEE_LDLOC_3", "ldloc.3", POP0, PUSH1, K::None, C::Macro, F::Next),
    one(0x0A, "CEE_STLOC_0", "stloc.0", POP1, PUSH0, K::None, C::Macro, F::Next),
    one(0x0B, "CEE_STLOC_1", "stloc.1", POP1, PUSH0, K::None, C::Macro, F::Next),
    one(0x0C, "CEE_STLOC_2", "stloc.2", POP1, PUSH0, K::None, C::Macro, F::Next),
    one(0x0D, "CEE_STLOC_3", "stloc.3", POP1, PUSH0, K::None, C::Macro, F::Next),
    one(0x0E, "CEE_LDARG_S", "ldarg.s", POP0, PUSH1, K::ShortVar, C::Macro, F::Next),
    one(0x0F, "CEE_LDARGA_S", "ldarga.s", POP0, PUSHI, K::ShortVar, C::Macro, F::Next),
    one(0x10, "CEE_STARG_S", "starg.s", POP1, PUSH0, K::ShortVar, C::Macro, F::Next),
    one(0x11, "CEE_LDLOC_S", "ldloc.s", POP0, PUSH1, K::ShortVar, C::Macro, F::Next),
    one(0x12, "CEE_LDLOCA_S", "ldloca.s", POP0, PUSHI, K::ShortVar, C::Macro, F::Next),
    one(0x13, "CEE_STLOC_S", "stloc.s", POP1, PUSH0, K::ShortVar, C::Macro, F::Next),
    one(0x14, "CEE_LDNULL", "ldnull", POP0, PUSHREF, K::None, C::Primitive, F::Next),
    one(0x15, "CEE_LDC_I4_M1", "ldc.i4.m1", POP0, PUSHI, K::None, C::Macro, F::Next),
    one(0x16, "CEE_LDC_I4_0", "ldc.i4.0", POP0, PUSHI, K::None, C::Macro, F::Next),
    one(0x17, "CEE_LDC_I4_1", "ldc.i4.1", POP0, PUSHI, K::None, C::Macro, F::Next),
    one(0x18, "CEE_LDC_I4_2", "ldc.i4.2", POP0, PUSHI, K::None, C::Macro, F::Next),
    one(0x19, "CEE_LDC_I4_3", "ldc.i4.3", POP0, PUSHI, K::None, C::Macro, F::Next),
    one(0x1A, "CEE_LDC_I4_4", "ldc.i4.4", POP0, PUSHI, K::None, C::Macro, F::Next),
    one(0x1B, "CEE_LDC_I4_5", "ldc.i4.5", POP0, PUSHI, K::None, C::Macro, F::Next),
    one(0x1C, "CEE_LDC_I4_6", "ldc.i4.6", POP0, PUSHI, K::None, C::Macro, F::Next),
    one(0x1D, "CEE_LDC_I4_7", "ldc.i4.7", POP0, PUSHI, K::None, C::Macro, F::Next),
    one(0x1E, "CEE_LDC_I4_8", "ldc.i4.8", POP0, PUSHI, K::None, C::Macro, F::Next),
    one(0x1F, "CEE_LDC_I4_S", "ldc.i4.s", POP0, PUSHI, K::ShortInt, C::Macro, F::Next),
    one(0x20, "CEE_LDC_I4", "ldc.i4", POP0, PUSHI, K::Int32, C::Primitive, F::Next),
    one(0x21, "CEE_LDC_I8", "ldc.i8", POP0, PUSHI8, K::Int64, C::Primitive, F::Next),
    one(0x22, "CEE_LDC_R4", "ldc.r4", POP0, PUSHR4, K::ShortFloat, C::Primitive, F::Next),
    one(0x23, "CEE_LDC_R8", "ldc.r8", POP0, PUSHR8, K::Float, C::Primitive, F::Next),
    one(0x24, "CEE_UNUSED49", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
    one(0x25, "CEE_DUP", "dup", POP1, PUSH1_PUSH1, K::None, C::Primitive, F::Next),
    one(0x26, "CEE_POP", "pop", POP1, PUSH0, K::None, C::Primitive, F::Next),
    one(0x27, "CEE_JMP", "jmp", POP0, PUSH0, K::Method, C::Primitive, F::Call),
    one(0x28, "CEE_CALL", "call", VARPOP, VARPUSH, K::Method, C::Primitive, F::Call),
    one(0x29, "CEE_CALLI", "calli", VARPOP, VARPUSH, K::Signature, C::Primitive, F::Call),
    one(0x2A, "CEE_RET", "ret", VARPOP, PUSH0, K::None, C::Primitive, F::Return),
    one(0x2B, "CEE_BR_S", "br.s", POP0, PUSH0, K::ShortBranchTarget, C::Macro, F::Branch),
    one(0x2C, "CEE_BRFALSE_S", "brfalse.s", POPI, PUSH0, K::ShortBranchTarget, C::Macro, F::CondBranch),
    one(0x2D, "CEE_BRTRUE_S", "brtrue.s", POPI, PUSH0, K::ShortBranchTarget, C::Macro, F::CondBranch),
    one(0x2E, "CEE_BEQ_S", "beq.s", POP1_POP1, PUSH0, K::ShortBranchTarget, C::Macro, F::CondBranch),
    one(0x2F, "CEE_BGE_S", "bge.s", POP1_POP1, PUSH0, K::ShortBranchTarget, C::Macro, F::CondBranch),
    one(0x30, "CEE_BGT_S", "bgt.s", POP1_POP1, PUSH0, K::ShortBranchTarget, C::Macro, F::CondBranch),
    one(0x31, "CEE_BLE_S", "ble.s", POP1_POP1, PUSH0, K::ShortBranchTarget, C::Macro, F::CondBranch),
    one(0x32, "CEE_BLT_S", "blt.s", POP1_POP1, PUSH0, K::ShortBranchTarget, C::Macro, F::CondBranch),
    one(0x33, "CEE_BNE_UN_S", "bne.un.s", POP1_POP1, PUSH0, K::ShortBranchTarget, C::Macro, F::CondBranch),
    one(0x34, "CEE_BGE_UN_S", "bge.un.s", POP1_POP1, PUSH0, K::ShortBranchTarget, C::Macro, F::CondBranch),
    one(0x35, "CEE_BGT_UN_S", "bgt.un.s", POP1_POP1, PUSH0, K::ShortBranchTarget, C::Macro, F::CondBranch),
    one(0x36, "CEE_BLE_UN_S", "ble.un.s", POP1_POP1, PUSH0, K::ShortBranchTarget, C::Macro, F::CondBranch),
    one(0x37, "CEE_BLT_UN_S", "blt.un.s", POP1_POP1, PUSH0, K::ShortBranchTarget, C::Macro, F::CondBranch),
    one(0x38, "CEE_BR", "br", POP0, PUSH0, K::BranchTarget, C::Primitive, F::Branch),
    one(0x39, "CEE_BRFALSE", "brfalse", POPI, PUSH0, K::BranchTarget, C::Primitive, F::CondBranch),
    one(0x3A, "CEE_BRTRUE", "brtrue", POPI, PUSH0, K::BranchTarget, C::Primitive, F::CondBranch),
    one(0x3B, "CEE_BEQ", "beq", POP1_POP1, PUSH0, K::BranchTarget, C::Macro, F::CondBranch),
    one(0x3C, "CEE_BGE", "bge", POP1_POP1, PUSH0, K::BranchTarget, C::Macro, F::CondBranch),
    one(0x3D, "CEE_BGT", "bgt", POP1_POP1, PUSH0, K::BranchTarget, C::Macro, F::CondBranch),
    one(0x3E, "CEE_BLE", "ble", POP1_POP1, PUSH0, K::BranchTarget, C::Macro, F::CondBranch),
    one(0x3F, "CEE_BLT", "blt", POP1_POP1, PUSH0, K::BranchTarget, C::Macro, F::CondBranch),
    one(0x40, "CEE_BNE_UN", "bne.un", POP1_POP1, PUSH0, K::BranchTarget, C::Macro, F::CondBranch),
    one(0x41, "CEE_BGE_UN", "bge.un", POP1_POP1, PUSH0, K::BranchTarget, C::Macro, F::CondBranch),
    one(0x42, "CEE_BGT_UN", "bgt.un", POP1_POP1, PUSH0, K::BranchTarget, C::Macro, F::CondBranch),
    one(0x43, "CEE_BLE_UN", "ble.un", POP1_POP1, PUSH0, K::BranchTarget, C::Macro, F::CondBranch),
    one(0x44, "CEE_BLT_UN", "blt.un", POP1_POP1, PUSH0, K::BranchTarget, C::Macro, F::CondBranch),
    one(0x45, "CEE_SWITCH", "switch", POPI, PUSH0, K::Switch, C::Primitive, F::CondBranch),
    one(0x46, "CEE_LDIND_I1", "ldind.i1", POPI, PUSHI, K::None, C::Primitive, F::Next),
    one(0x47, "CEE_LDIND_U1", "ldind.u1", POPI, PUSHI, K::None, C::Primitive, F::Next),
    one(0x48, "CEE_LDIND_I2", "ldind.i2", POPI, PUSHI, K::None, C::Primitive, F::Next),
    one(0x49, "CEE_LDIND_U2", "ldind.u2", POPI, PUSHI, K::None, C::Primitive, F::Next),
    one(0x4A, "CEE_LDIND_I4", "ldind.i4", POPI, PUSHI, K::None, C::Primitive, F::Next),
    one(0x4B, "CEE_LDIND_U4", "ldind.u4", POPI, PUSHI, K::None, C::Primitive, F::Next),
    one(0x4C, "CEE_LDIND_I8", "ldind.i8", POPI, PUSHI8, K::None, C::Primitive, F::Next),
    one(0x4D, "CEE_LDIND_I", "ldind.i", POPI, PUSHI, K::None, C::Primitive, F::Next),
    one(0x4E, "CEE_LDIND_R4", "ldind.r4", POPI, PUSHR4, K::None, C::Primitive, F::Next),
    one(0x4F, "CEE_LDIND_R8", "ldind.r8", POPI, PUSHR8, K::None, C::Primitive, F::Next),
    one(0x50, "CEE_LDIND_REF", "ldind.ref", POPI, PUSHREF, K::None, C::Primitive, F::Next),
    one(0x51, "CEE_STIND_REF", "stind.ref", POPI_POPI, PUSH0, K::None, C::Primitive, F::Next),
    one(0x52, "CEE_STIND_I1", "stind.i1", POPI_POPI, PUSH0, K::None, C::Primitive, F::Next),
    one(0x53, "CEE_STIND_I2", "stind.i2", POPI_POPI, PUSH0, K::None, C::Primitive, F::Next),
    one(0x54, "CEE_STIND_I4", "stind.i4", POPI_POPI, PUSH0, K::None, C::Primitive, F::Next),
    one(0x55, "CEE_STIND_I8", "stind.i8", POPI_POPI8, PUSH0, K::None, C::Primitive, F::Next),
    one(0x56, "CEE_STIND_R4", "stind.r4", POPI_POPR4, PUSH0, K::None, C::Primitive, F::Next),
    one(0x57, "CEE_STIND_R8", "stind.r8", POPI_POPR8, PUSH0, K::None, C::Primitive, F::Next),
    one(0x58, "CEE_ADD", "add", POP1_POP1, PUSH1, K::None, C::Primitive, F::Next),
    one(0x59, "CEE_SUB", "sub", POP1_POP1, PUSH1, K::None, C::Primitive, F::Next),
    one(0x5A, "CEE_MUL", "mul", POP1_POP1, PUSH1, K::None, C::Primitive, F::Next),
    one(0x5B, "CEE_DIV", "div", POP1_POP1, PUSH1, K::None, C::Primitive, F::Next),
    one(0x5C, "CEE_DIV_UN", "div.un", POP1_POP1, PUSH1, K::None, C::Primitive, F::Next),
    one(0x5D, "CEE_REM", "rem", POP1_POP1, PUSH1, K::None, C::Primitive, F::Next),
    one(0x5E, "CEE_REM_UN", "rem.un", POP1_POP1, PUSH1, K::None, C::Primitive, F::Next),
    one(0x5F, "CEE_AND", "and", POP1_POP1, PUSH1, K::None, C::Primitive, F::Next),
    one(0x60, "CEE_OR", "or", POP1_POP1, PUSH1, K::None, C::Primitive, F::Next),
    one(0x61, "CEE_XOR", "xor", POP1_POP1, PUSH1, K::None, C::Primitive, F::Next),
    one(0x62, "CEE_SHL", "shl", POP1_POP1, PUSH1, K::None, C::Primitive, F::Next),
    one(0x63, "CEE_SHR", "shr", POP1_POP1, PUSH1, K::None, C::Primitive, F::Next),
    one(0x64, "CEE_SHR_UN", "shr.un", POP1_POP1, PUSH1, K::None, C::Primitive, F::Next),
    one(0x65, "CEE_NEG", "neg", POP1, PUSH1, K::None, C::Primitive, F::Next),
    one(0x66, "CEE_NOT", "not", POP1, PUSH1, K::None, C::Primitive, F::Next),
    one(0x67, "CEE_CONV_I1", "conv.i1", POP1, PUSHI, K::None, C::Primitive, F::Next),
    one(0x68, "CEE_CONV_I2", "conv.i2", POP1, PUSHI, K::None, C::Primitive, F::Next),
    one(0x69, "CEE_CONV_I4", "conv.i4", POP1, PUSHI, K::None, C::Primitive, F::Next),
    one(0x6A, "CEE_CONV_I8", "conv.i8", POP1, PUSHI8, K::None, C::Primitive, F::Next),
    one(0x6B, "CEE_CONV_R4", "conv.r4", POP1, PUSHR4, K::None, C::Primitive, F::Next),
    one(0x6C, "CEE_CONV_R8", "conv.r8", POP1, PUSHR8, K::None, C::Primitive, F::Next),
    one(0x6D, "CEE_CONV_U4", "conv.u4", POP1, PUSHI, K::None, C::Primitive, F::Next),
    one(0x6E, "CEE_CONV_U8", "conv.u8", POP1, PUSHI8, K::None, C::Primitive, F::Next),
    one(0x6F, "CEE_CALLVIRT", "callvirt", VARPOP, VARPUSH, K::Method, C::ObjModel, F::Call),
    one(0x70, "CEE_CPOBJ", "cpobj", POPI_POPI, PUSH0, K::Type, C::ObjModel, F::Next),
    one(0x71, "CEE_LDOBJ", "ldobj", POPI, PUSH1, K::Type, C::ObjModel, F::Next),
    one(0x72, "CEE_LDSTR", "ldstr", POP0, PUSHREF, K::String, C::ObjModel, F::Next),
    one(0x73, "CEE_NEWOBJ", "newobj", VARPOP, PUSHREF, K::Method, C::ObjModel, F::Call),
    one(0x74, "CEE_CASTCLASS", "castclass", POPREF, PUSHREF, K::Type, C::ObjModel, F::Next),
    one(0x75, "CEE_ISINST", "isinst", POPREF, PUSHI, K::Type, C::ObjModel, F::Next),
    one(0x76, "CEE_CONV_R_UN", "conv.r.un", POP1, PUSHR8, K::None, C::Primitive, F::Next),
    one(0x77, "CEE_UNUSED58", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
    one(0x78, "CEE_UNUSED1", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
    one(0x79, "CEE_UNBOX", "unbox", POPREF, PUSHI, K::Type, C::Primitive, F::Next),
    one(0x7A, "CEE_THROW", "throw", POPREF, PUSH0, K::None, C::ObjModel, F::Throw),
    one(0x7B, "CEE_LDFLD", "ldfld", POPREF, PUSH1, K::Field, C::ObjModel, F::Next),
    one(0x7C, "CEE_LDFLDA", "ldflda", POPREF, PUSHI, K::Field, C::ObjModel, F::Next),
    one(0x7D, "CEE_STFLD", "stfld", POPREF_POP1, PUSH0, K::Field, C::ObjModel, F::Next),
    one(0x7E, "CEE_LDSFLD", "ldsfld", POP0, PUSH1, K::Field, C::ObjModel, F::Next),
    one(0x7F, "CEE_LDSFLDA", "ldsflda", POP0, PUSHI, K::Field, C::ObjModel, F::Next),
    one(0x80, "CEE_STSFLD", "stsfld", POP1, PUSH0, K::Field, C::ObjModel, F::Next),
    one(0x81, "CEE_STOBJ", "stobj", POPI_POP1, PUSH0, K::Type, C::Primitive, F::Next),
    one(0x82, "CEE_CONV_OVF_I1_UN", "conv.ovf.i1.un", POP1, PUSHI, K::None, C::Primitive, F::Next),
    one(0x83, "CEE_CONV_OVF_I2_UN", "conv.ovf.i2.un", POP1, PUSHI, K::None, C::Primitive, F::Next),
    one(0x84, "CEE_CONV_OVF_I4_UN", "conv.ovf.i4.un", POP1, PUSHI, K::None, C::Primitive, F::Next),
    one(0x85, "CEE_CONV_OVF_I8_UN", "conv.ovf.i8.un", POP1, PUSHI8, K::None, C::Primitive, F::Next),
    one(0x86, "CEE_CONV_OVF_U1_UN", "conv.ovf.u1.un", POP1, PUSHI, K::None, C::Primitive, F::Next),
    one(0x87, "CEE_CONV_OVF_U2_UN", "conv.ovf.u2.un", POP1, PUSHI, K::None, C::Primitive, F::Next),
    one(0x88, "CEE_CONV_OVF_U4_UN", "conv.ovf.u4.un", POP1, PUSHI, K::None, C::Primitive, F::Next),
    one(0x89, "CEE_CONV_OVF_U8_UN", "conv.ovf.u8.un", POP1, PUSHI8, K::None, C::Primitive, F::Next),
    one(0x8A, "CEE_CONV_OVF_I_UN", "conv.ovf.i.un", POP1, PUSHI, K::None, C::Primitive, F::Next),
    one(0x8B, "CEE_CONV_OVF_U_UN", "conv.ovf.u.un", POP1, PUSHI, K::None, C::Primitive, F::Next),
    one(0x8C, "CEE_BOX", "box", POP1, PUSHREF, K::Type, C::Primitive, F::Next),
    one(0x8D, "CEE_NEWARR", "newarr", POPI, PUSHREF, K::Type, C::ObjModel, F::Next),
    one(0x8E, "CEE_LDLEN", "ldlen", POPREF, PUSHI, K::None, C::ObjModel, F::Next),
    one(0x8F, "CEE_LDELEMA", "ldelema", POPREF_POPI, PUSHI, K::Type, C::ObjModel, F::Next),
    one(0x90, "CEE_LDELEM_I1", "ldelem.i1", POPREF_POPI, PUSHI, K::None, C::ObjModel, F::Next),
    one(0x91, "CEE_LDELEM_U1", "ldelem.u1", POPREF_POPI, PUSHI, K::None, C::ObjModel, F::Next),
    one(0x92, "CEE_LDELEM_I2", "ldelem.i2", POPREF_POPI, PUSHI, K::None, C::ObjModel, F::Next),
    one(0x93, "CEE_LDELEM_U2", "ldelem.u2", POPREF_POPI, PUSHI, K::None, C::ObjModel, F::Next),
    one(0x94, "CEE_LDELEM_I4", "ldelem.i4", POPREF_POPI, PUSHI, K::None, C::ObjModel, F::Next),
    one(0x95, "CEE_LDELEM_U4", "ldelem.u4", POPREF_POPI, PUSHI, K::None, C::ObjModel, F::Next),
    one(0x96, "CEE_LDELEM_I8", "ldelem.i8", POPREF_POPI, PUSHI8, K::None, C::ObjModel, F::Next),
    one(0x97, "CEE_LDELEM_I", "ldelem.i", POPREF_POPI, PUSHI, K::None, C::ObjModel, F::Next),
    one(0x98, "CEE_LDELEM_R4", "ldelem.r4", POPREF_POPI, PUSHR4, K::None, C::ObjModel, F::Next),
    one(0x99, "CEE_LDELEM_R8", "ldelem.r8", POPREF_POPI, PUSHR8, K::None, C::ObjModel, F::Next),
    one(0x9A, "CEE_LDELEM_REF", "ldelem.ref", POPREF_POPI, PUSHREF, K::None, C::ObjModel, F::Next),
    one(0x9B, "CEE_STELEM_I", "stelem.i", POPREF_POPI_POPI, PUSH0, K::None, C::ObjModel, F::Next),
    one(0x9C, "CEE_STELEM_I1", "stelem.i1", POPREF_POPI_POPI, PUSH0, K::None, C::ObjModel, F::Next),
    one(0x9D, "CEE_STELEM_I2", "stelem.i2", POPREF_POPI_POPI, PUSH0, K::None, C::ObjModel, F::Next),
    one(0x9E, "CEE_STELEM_I4", "stelem.i4", POPREF_POPI_POPI, PUSH0, K::None, C::ObjModel, F::Next),
    one(0x9F, "CEE_STELEM_I8", "stelem.i8", POPREF_POPI_POPI8, PUSH0, K::None, C::ObjModel, F::Next),
    one(0xA0, "CEE_STELEM_R4", "stelem.r4", POPREF_POPI_POPR4, PUSH0, K::None, C::ObjModel, F::Next),
    one(0xA1, "CEE_STELEM_R8", "stelem.r8", POPREF_POPI_POPR8, PUSH0, K::None, C::ObjModel, F::Next),
    one(0xA2, "CEE_STELEM_REF", "stelem.ref", POPREF_POPI_POPREF, PUSH0, K::None, C::ObjModel, F::Next),
    one(0xA3, "CEE_UNUSED2", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
    one(0xA4, "CEE_UNUSED3", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
    one(0xA5, "CEE_UNUSED4", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
    one(0xA6, "CEE_UNUSED5", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
    one(0xA7, "CEE_UNUSED6", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
    one(0xA8, "CEE_UNUSED7", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
    one(0xA9, "CEE_UNUSED8", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
    one(0xAA, "CEE_UNUSED9", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
    one(0xAB, "CEE_UNUSED10", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
    one(0xAC, "CEE_UNUSED11", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
    one(0xAD, "CEE_UNUSED12", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
    one(0xAE, "CEE_UNUSED13", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
    one(0xAF, "CEE_UNUSED14", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
    one(0xB0, "CEE_UNUSED15", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
    one(0xB1, "CEE_UNUSED16", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
    one(0xB2, "CEE_UNUSED17", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
    one(0xB3, "CEE_CONV_OVF_I1", "conv.ovf.i1", POP1, PUSHI, K::None, C::Primitive, F::Next),
    one(0xB4, "CEE_CONV_OVF_U1", "conv.ovf.u1", POP1, PUSHI, K::None, C::Primitive, F::Next),
    one(0xB5, "CEE_CONV_OVF_I2", "conv.ovf.i2", POP1, PUSHI, K::None, C::Primitive, F::Next),
    one(0xB6, "CEE_CONV_OVF_U2", "conv.ovf.u2", POP1, PUSHI, K::None, C::Primitive, F::Next),
    one(0xB7, "CEE_CONV_OVF_I4", "conv.ovf.i4", POP1, PUSHI, K::None, C::Primitive, F::Next),
    one(0xB8, "CEE_CONV_OVF_U4", "conv.ovf.u4", POP1, PUSHI, K::None, C::Primitive, F::Next),
    one(0xB9, "CEE_CONV_OVF_I8", "conv.ovf.i8", POP1, PUSHI8, K::None, C::Primitive, F::Next),
    one(0xBA, "CEE_CONV_OVF_U8", "conv.ovf.u8", POP1, PUSHI8, K::None, C::Primitive, F::Next),
    one(0xBB, "CEE_UNUSED50", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
    one(0xBC, "CEE_UNUSED18", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
    one(0xBD, "CEE_UNUSED19", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
    one(0xBE, "CEE_UNUSED20", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
    one(0xBF, "CEE_UNUSED21", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
    one(0xC0, "CEE_UNUSED22", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
    one(0xC1, "CEE_UNUSED23", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
    one(0xC2, "CEE_REFANYVAL", "refanyval", POP1, PUSHI, K::Type, C::Primitive, F::Next),
    one(0xC3, "CEE_CKFINITE", "ckfinite", POP1, PUSHR8, K::None, C::Primitive, F::Next),
    one(0xC4, "CEE_UNUSED24", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
    one(0xC5, "CEE_UNUSED25", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
    one(0xC6, "CEE_MKREFANY", "mkrefany", POPI, PUSH1, K::Type, C::Primitive, F::Next),
    one(0xC7, "CEE_UNUSED59", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
    one(0xC8, "CEE_UNUSED60", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
    one(0xC9, "CEE_UNUSED61", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
    one(0xCA, "CEE_UNUSED62", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
    one(0xCB, "CEE_UNUSED63", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
    one(0xCC, "CEE_UNUSED64", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
    one(0xCD, "CEE_UNUSED65", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
    one(0xCE, "CEE_UNUSED66", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
    one(0xCF, "CEE_UNUSED67", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
    one(0xD0, "CEE_LDTOKEN", "ldtoken", POP0, PUSHI, K::Token, C::Primitive, F::Next),
    one(0xD1, "CEE_CONV_U2", "conv.u2", POP1, PUSHI, K::None, C::Primitive, F::Next),
    one(0xD2, "CEE_CONV_U1", "conv.u1", POP1, PUSHI, K::None, C::Primitive, F::Next),
    one(0xD3, "CEE_CONV_I", "conv.i", POP1, PUSHI, K::None, C::Primitive, F::Next),
    one(0xD4, "CEE_CONV_OVF_I", "conv.ovf.i", POP1, PUSHI, K::None, C::Primitive, F::Next),
    one(0xD5, "CEE_CONV_OVF_U", "conv.ovf.u", POP1, PUSHI, K::None, C::Primitive, F::Next),
    one(0xD6, "CEE_ADD_OVF", "add.ovf", POP1_POP1, PUSH1, K::None, C::Primitive, F::Next),
    one(0xD7, "CEE_ADD_OVF_UN", "add.ovf.un", POP1_POP1, PUSH1, K::None, C::Primitive, F::Next),
    one(0xD8, "CEE_MUL_OVF", "mul.ovf", POP1_POP1, PUSH1, K::None, C::Primitive, F::Next),
    one(0xD9, "CEE_MUL_OVF_UN", "mul.ovf.un", POP1_POP1, PUSH1, K::None, C::Primitive, F::Next),
    one(0xDA, "CEE_SUB_OVF", "sub.ovf", POP1_POP1, PUSH1, K::None, C::Primitive, F::Next),
    one(0xDB, "CEE_SUB_OVF_UN", "sub.ovf.un", POP1_POP1, PUSH1, K::None, C::Primitive, F::Next),
    one(0xDC, "CEE_ENDFINALLY", "endfinally", POP0, PUSH0, K::None, C::Primitive, F::Return),
    one(0xDD, "CEE_LEAVE", "leave", POP0, PUSH0, K::BranchTarget, C::Primitive, F::Branch),
    one(0xDE, "CEE_LEAVE_S", "leave.s", POP0, PUSH0, K::ShortBranchTarget, C::Primitive, F::Branch),
    one(0xDF, "CEE_STIND_I", "stind.i", POPI_POPI, PUSH0, K::None, C::Primitive, F::Next),
    one(0xE0, "CEE_CONV_U", "conv.u", POP1, PUSHI, K::None, C::Primitive, F::Next),
    one(0xE1, "CEE_UNUSED26", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
    one(0xE2, "CEE_UNUSED27", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
    one(0xE3, "CEE_UNUSED28", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
    one(0xE4, "CEE_UNUSED29", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
    one(0xE5, "CEE_UNUSED30", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
    one(0xE6, "CEE_UNUSED31", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
    one(0xE7, "CEE_UNUSED32", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
    one(0xE8, "CEE_UNUSED33", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
    one(0xE9, "CEE_UNUSED34", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
    one(0xEA, "CEE_UNUSED35", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
    one(0xEB, "CEE_UNUSED36", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
    one(0xEC, "CEE_UNUSED37", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
    one(0xED, "CEE_UNUSED38", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
    one(0xEE, "CEE_UNUSED39", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
    one(0xEF, "CEE_UNUSED40", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
    one(0xF0, "CEE_UNUSED41", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
    one(0xF1, "CEE_UNUSED42", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
    one(0xF2, "CEE_UNUSED43", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
    one(0xF3, "CEE_UNUSED44", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
    one(0xF4, "CEE_UNUSED45", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
    one(0xF5, "CEE_UNUSED46", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
    one(0xF6, "CEE_UNUSED47", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
    one(0xF7, "CEE_UNUSED48", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
    one(0xF8, "CEE_PREFIX7", "prefix7", POP0, PUSH0, K::None, C::Internal, F::Meta),
    one(0xF9, "CEE_PREFIX6", "prefix6", POP0, PUSH0, K::None, C::Internal, F::Meta),
    one(0xFA, "CEE_PREFIX5", "prefix5", POP0, PUSH0, K::None, C::Internal, F::Meta),
    one(0xFB, "CEE_PREFIX4", "prefix4", POP0, PUSH0, K::None, C::Internal, F::Meta),
    one(0xFC, "CEE_PREFIX3", "prefix3", POP0, PUSH0, K::None, C::Internal, F::Meta),
    one(0xFD, "CEE_PREFIX2", "prefix2", POP0, PUSH0, K::None, C::Internal, F::Meta),
    one(0xFE, "CEE_PREFIX1", "prefix1", POP0, PUSH0, K::None, C::Internal, F::Meta),
    one(0xFF, "CEE_PREFIXREF", "prefixref", POP0, PUSH0, K::None, C::Internal, F::Meta),
];

#[rustfmt::skip]
const TWO_BYTE_DEFS: [OpcodeDefinition; 35] = [
    two(0x00, "CEE_ARGLIST", "arglist", POP0, PUSHI, K::None, C::Primitive, F::Next),
    two(0x01, "CEE_CEQ", "ceq", POP1_POP1, PUSHI, K::None, C::Primitive, F::Next),
    two(0x02, "CEE_CGT", "cgt", POP1_POP1, PUSHI, K::None, C::Primitive, F::Next),
    two(0x03, "CEE_CGT_UN", "cgt.un", POP1_POP1, PUSHI, K::None, C::Primitive, F::Next),
    two(0x04, "CEE_CLT", "clt", POP1_POP1, PUSHI, K::None, C::Primitive, F::Next),
    two(0x05, "CEE_CLT_UN", "clt.un", POP1_POP1, PUSHI, K::None, C::Primitive, F::Next),
    two(0x06, "CEE_LDFTN", "ldftn", POP0, PUSHI, K::Method, C::Primitive, F::Next),
    two(0x07, "CEE_LDVIRTFTN", "ldvirtftn", POPREF, PUSHI, K::Method, C::Primitive, F::Next),
    two(0x08, "CEE_UNUSED56", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
    two(0x09, "CEE_LDARG", "ldarg", POP0, PUSH1, K::Var, C::Primitive, F::Next),
    two(0x0A, "CEE_LDARGA", "ldarga", POP0, PUSHI, K::Var, C::Primitive, F::Next),
    two(0x0B, "CEE_STARG", "starg", POP1, PUSH0, K::Var, C::Primitive, F::Next),
    two(0x0C, "CEE_LDLOC", "ldloc", POP0, PUSH1, K::Var, C::Primitive, F::Next),
    two(0x0D, "CEE_LDLOCA", "ldloca", POP0, PUSHI, K::Var, C::Primitive, F::Next),
    two(0x0E, "CEE_STLOC", "stloc", POP1, PUSH0, K::Var, C::Primitive, F::Next),
    two(0x0F, "CEE_LOCALLOC", "localloc", POPI, PUSHI, K::None, C::Primitive, F::Next),
    two(0x10, "CEE_UNUSED57", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
    two(0x11, "CEE_ENDFILTER", "endfilter", POPI, PUSH0, K::None, C::Primitive, F::Return),
    two(0x12, "CEE_UNALIGNED", "unaligned.", POP0, PUSH0, K::ShortInt, C::Prefix, F::Meta),
    two(0x13, "CEE_VOLATILE", "volatile.", POP0, PUSH0, K::None, C::Prefix, F::Meta),
    two(0x14, "CEE_TAILCALL", "tail.", POP0, PUSH0, K::None, C::Prefix, F::Meta),
    two(0x15, "CEE_INITOBJ", "initobj", POPI, PUSH0, K::Type, C::ObjModel, F::Next),
    two(0x16, "CEE_UNUSED68", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
    two(0x17, "CEE_CPBLK", "cpblk", POPI_POPI_POPI, PUSH0, K::None, C::Primitive, F::Next),
    two(0x18, "CEE_INITBLK", "initblk", POPI_POPI_POPI, PUSH0, K::None, C::Primitive, F::Next),
    two(0x19, "CEE_UNUSED69", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
    two(0x1A, "CEE_RETHROW", "rethrow", POP0, PUSH0, K::None, C::ObjModel, F::Throw),
    two(0x1B, "CEE_UNUSED51", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
    two(0x1C, "CEE_SIZEOF", "sizeof", POP0, PUSHI, K::Type, C::Primitive, F::Next),
    two(0x1D, "CEE_REFANYTYPE", "refanytype", POP1, PUSHI, K::None, C::Primitive, F::Next),
    two(0x1E, "CEE_UNUSED52", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
    two(0x1F, "CEE_UNUSED53", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
    two(0x20, "CEE_UNUSED54", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
    two(0x21, "CEE_UNUSED55", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
    two(0x22, "CEE_UNUSED70", "unused", POP0, PUSH0, K::None, C::Primitive, F::Next),
];
