//! Declarative stack-effect descriptors.
//!
//! Every opcode records what it pops and what it pushes. The decoder never
//! consults these, but they are part of the catalogue and are kept slot by
//! slot so that composite effects such as `PopRef+PopI+PopI8` stay distinct.

use std::fmt;

/// A single evaluation-stack slot, typed as loosely as the opcode allows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackSlot {
    /// Any value (`Pop1` / `Push1`).
    Any,
    /// Native or 32-bit integer (`PopI` / `PushI`).
    Int,
    /// 64-bit integer.
    Int64,
    /// 32-bit float.
    Float32,
    /// 64-bit float.
    Float64,
    /// Object reference.
    Ref,
}

impl StackSlot {
    /// Suffix used in the canonical effect names (`Pop1`, `PopI8`, `PushRef`, ...).
    pub fn suffix(self) -> &'static str {
        match self {
            StackSlot::Any => "1",
            StackSlot::Int => "I",
            StackSlot::Int64 => "I8",
            StackSlot::Float32 => "R4",
            StackSlot::Float64 => "R8",
            StackSlot::Ref => "Ref",
        }
    }
}

/// What an instruction pops or pushes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackEffect {
    /// A fixed list of slots, in encoding order. Empty means `Pop0`/`Push0`.
    Fixed(&'static [StackSlot]),
    /// Depends on the call signature (`VarPop` / `VarPush`).
    Variable,
}

impl StackEffect {
    /// Number of slots affected, or `None` when it depends on a signature.
    pub fn count(self) -> Option<usize> {
        match self {
            StackEffect::Fixed(slots) => Some(slots.len()),
            StackEffect::Variable => None,
        }
    }

    pub fn is_variable(self) -> bool {
        matches!(self, StackEffect::Variable)
    }

    /// Render the effect with the given verb, e.g. `Pop1+PopI` or `VarPush`.
    pub fn describe(self, verb: &str) -> String {
        match self {
            StackEffect::Variable => format!("Var{}", verb),
            StackEffect::Fixed([]) => format!("{}0", verb),
            StackEffect::Fixed(slots) => slots
                .iter()
                .map(|slot| format!("{}{}", verb, slot.suffix()))
                .collect::<Vec<_>>()
                .join("+"),
        }
    }
}

impl fmt::Display for StackEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackEffect::Variable => write!(f, "var"),
            StackEffect::Fixed(slots) => write!(f, "{}", slots.len()),
        }
    }
}

use StackSlot::{Any, Float32, Float64, Int, Int64, Ref};

pub const POP0: StackEffect = StackEffect::Fixed(&[]);
pub const POP1: StackEffect = StackEffect::Fixed(&[Any]);
pub const POP1_POP1: StackEffect = StackEffect::Fixed(&[Any, Any]);
pub const POPI: StackEffect = StackEffect::Fixed(&[Int]);
pub const POPI_POP1: StackEffect = StackEffect::Fixed(&[Int, Any]);
pub const POPI_POPI: StackEffect = StackEffect::Fixed(&[Int, Int]);
pub const POPI_POPI_POPI: StackEffect = StackEffect::Fixed(&[Int, Int, Int]);
pub const POPI_POPI8: StackEffect = StackEffect::Fixed(&[Int, Int64]);
pub const POPI_POPR4: StackEffect = StackEffect::Fixed(&[Int, Float32]);
pub const POPI_POPR8: StackEffect = StackEffect::Fixed(&[Int, Float64]);
pub const POPREF: StackEffect = StackEffect::Fixed(&[Ref]);
pub const POPREF_POP1: StackEffect = StackEffect::Fixed(&[Ref, Any]);
pub const POPREF_POPI: StackEffect = StackEffect::Fixed(&[Ref, Int]);
pub const POPREF_POPI_POPI: StackEffect = StackEffect::Fixed(&[Ref, Int, Int]);
pub const POPREF_POPI_POPI8: StackEffect = StackEffect::Fixed(&[Ref, Int, Int64]);
pub const POPREF_POPI_POPR4: StackEffect = StackEffect::Fixed(&[Ref, Int, Float32]);
pub const POPREF_POPI_POPR8: StackEffect = StackEffect::Fixed(&[Ref, Int, Float64]);
pub const POPREF_POPI_POPREF: StackEffect = StackEffect::Fixed(&[Ref, Int, Ref]);
pub const VARPOP: StackEffect = StackEffect::Variable;

pub const PUSH0: StackEffect = StackEffect::Fixed(&[]);
pub const PUSH1: StackEffect = StackEffect::Fixed(&[Any]);
pub const PUSH1_PUSH1: StackEffect = StackEffect::Fixed(&[Any, Any]);
pub const PUSHI: StackEffect = StackEffect::Fixed(&[Int]);
pub const PUSHI8: StackEffect = StackEffect::Fixed(&[Int64]);
pub const PUSHR4: StackEffect = StackEffect::Fixed(&[Float32]);
pub const PUSHR8: StackEffect = StackEffect::Fixed(&[Float64]);
pub const PUSHREF: StackEffect = StackEffect::Fixed(&[Ref]);
pub const VARPUSH: StackEffect = StackEffect::Variable;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composite_effects_keep_every_slot() {
        assert_eq!(POP1_POP1.count(), Some(2));
        assert_eq!(POPI.count(), Some(1));
        assert_ne!(POP1_POP1, POPI);
        assert_eq!(POPREF_POPI_POPI8.count(), Some(3));
    }

    #[test]
    fn describe_matches_canonical_names() {
        assert_eq!(POP0.describe("Pop"), "Pop0");
        assert_eq!(PUSH0.describe("Push"), "Push0");
        assert_eq!(POPREF_POPI_POPR8.describe("Pop"), "PopRef+PopI+PopR8");
        assert_eq!(PUSH1_PUSH1.describe("Push"), "Push1+Push1");
        assert_eq!(VARPOP.describe("Pop"), "VarPop");
    }

    #[test]
    fn variable_effects_have_no_count() {
        assert!(VARPUSH.is_variable());
        assert_eq!(VARPUSH.count(), None);
        assert_eq!(format!("{}", VARPOP), "var");
        assert_eq!(format!("{}", POPI_POPI_POPI), "3");
    }
}
