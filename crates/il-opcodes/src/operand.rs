//! Operand encodings.

use std::fmt;

/// How the bytes trailing an opcode are laid out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperandKind {
    /// No operand.
    None,
    /// Signed 8-bit branch offset, relative to the next instruction.
    ShortBranchTarget,
    /// Signed 32-bit branch offset, relative to the next instruction.
    BranchTarget,
    /// 8-bit local or argument index.
    ShortVar,
    /// 16-bit local or argument index.
    Var,
    /// Signed 8-bit immediate.
    ShortInt,
    /// Signed 32-bit immediate.
    Int32,
    /// Signed 64-bit immediate.
    Int64,
    /// 32-bit IEEE float immediate.
    ShortFloat,
    /// 64-bit IEEE float immediate.
    Float,
    /// Method token (call target).
    Method,
    /// Field token.
    Field,
    /// Stand-alone signature token.
    Signature,
    /// User-string token.
    String,
    /// Type token.
    Type,
    /// Any metadata token (`ldtoken`).
    Token,
    /// Jump table: a 32-bit count followed by that many 32-bit offsets.
    Switch,
}

impl OperandKind {
    /// Number of trailing bytes, or `None` for the variable-length switch table.
    pub const fn width(self) -> Option<usize> {
        match self {
            OperandKind::None => Some(0),
            OperandKind::ShortBranchTarget | OperandKind::ShortVar | OperandKind::ShortInt => {
                Some(1)
            }
            OperandKind::Var => Some(2),
            OperandKind::BranchTarget
            | OperandKind::Int32
            | OperandKind::ShortFloat
            | OperandKind::Method
            | OperandKind::Field
            | OperandKind::Signature
            | OperandKind::String
            | OperandKind::Type
            | OperandKind::Token => Some(4),
            OperandKind::Int64 | OperandKind::Float => Some(8),
            OperandKind::Switch => None,
        }
    }

    pub const fn is_branch(self) -> bool {
        matches!(
            self,
            OperandKind::ShortBranchTarget | OperandKind::BranchTarget
        )
    }

    /// Name used by the CLI opcode definitions (`InlineNone`, `ShortInlineVar`, ...).
    pub const fn canonical_name(self) -> &'static str {
        match self {
            OperandKind::None => "InlineNone",
            OperandKind::ShortBranchTarget => "ShortInlineBrTarget",
            OperandKind::BranchTarget => "InlineBrTarget",
            OperandKind::ShortVar => "ShortInlineVar",
            OperandKind::Var => "InlineVar",
            OperandKind::ShortInt => "ShortInlineI",
            OperandKind::Int32 => "InlineI",
            OperandKind::Int64 => "InlineI8",
            OperandKind::ShortFloat => "ShortInlineR",
            OperandKind::Float => "InlineR",
            OperandKind::Method => "InlineMethod",
            OperandKind::Field => "InlineField",
            OperandKind::Signature => "InlineSig",
            OperandKind::String => "InlineString",
            OperandKind::Type => "InlineType",
            OperandKind::Token => "InlineTok",
            OperandKind::Switch => "InlineSwitch",
        }
    }
}

impl fmt::Display for OperandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths() {
        assert_eq!(OperandKind::None.width(), Some(0));
        assert_eq!(OperandKind::ShortBranchTarget.width(), Some(1));
        assert_eq!(OperandKind::Var.width(), Some(2));
        assert_eq!(OperandKind::Method.width(), Some(4));
        assert_eq!(OperandKind::Int64.width(), Some(8));
        assert_eq!(OperandKind::Switch.width(), None);
    }

    #[test]
    fn display_uses_canonical_name() {
        assert_eq!(OperandKind::Switch.to_string(), "InlineSwitch");
        assert_eq!(OperandKind::ShortFloat.to_string(), "ShortInlineR");
    }

    #[test]
    fn only_branch_kinds_are_branches() {
        assert!(OperandKind::ShortBranchTarget.is_branch());
        assert!(OperandKind::BranchTarget.is_branch());
        assert!(!OperandKind::Int32.is_branch());
        assert!(!OperandKind::Switch.is_branch());
    }
}
