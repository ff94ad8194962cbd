//! Call-target token enumeration.
//!
//! Method tokens emitted by the JIT are not metadata tokens: they index a
//! fixed set of runtime helpers. The set is sparse (some values are never
//! assigned), so it is kept as a sorted slice and searched rather than
//! indexed.

/// A closed mapping from method token to helper name.
#[derive(Clone, Copy, Debug)]
pub struct TokenTable {
    entries: &'static [(i32, &'static str)],
}

impl TokenTable {
    /// The helper tokens understood by the JIT.
    pub fn standard() -> TokenTable {
        TokenTable {
            entries: METHOD_TOKENS,
        }
    }

    /// Use a caller-supplied enumeration. `entries` must be sorted by token.
    pub fn new(entries: &'static [(i32, &'static str)]) -> TokenTable {
        debug_assert!(
            entries.windows(2).all(|w| w[0].0 < w[1].0),
            "token entries must be sorted and unique"
        );
        TokenTable { entries }
    }

    /// Name of `token`, or `None` if it is not part of the enumeration.
    pub fn resolve(&self, token: i32) -> Option<&'static str> {
        self.entries
            .binary_search_by_key(&token, |&(value, _)| value)
            .ok()
            .map(|idx| self.entries[idx].1)
    }

    /// Token value for a helper name.
    pub fn token_of(&self, name: &str) -> Option<i32> {
        self.entries
            .iter()
            .find(|(_, n)| *n == name)
            .map(|&(value, _)| value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (i32, &'static str)> + '_ {
        self.entries.iter().copied()
    }
}

impl Default for TokenTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[rustfmt::skip]
static METHOD_TOKENS: &[(i32, &str)] = &[
    (0x00000000, "METHOD_ADD_TOKEN"),
    (0x00000001, "METHOD_MULTIPLY_TOKEN"),
    (0x00000002, "METHOD_SUBTRACT_TOKEN"),
    (0x00000003, "METHOD_DIVIDE_TOKEN"),
    (0x00000004, "METHOD_FLOORDIVIDE_TOKEN"),
    (0x00000005, "METHOD_POWER_TOKEN"),
    (0x00000006, "METHOD_MODULO_TOKEN"),
    (0x00000007, "METHOD_SUBSCR_TOKEN"),
    (0x00000008, "METHOD_STOREMAP_TOKEN"),
    (0x00000009, "METHOD_RICHCMP_TOKEN"),
    (0x0000000A, "METHOD_CONTAINS_TOKEN"),
    (0x0000000B, "METHOD_NOTCONTAINS_TOKEN"),
    (0x0000000C, "METHOD_STORESUBSCR_TOKEN"),
    (0x0000000D, "METHOD_DELETESUBSCR_TOKEN"),
    (0x0000000E, "METHOD_NEWFUNCTION_TOKEN"),
    (0x0000000F, "METHOD_GETITER_TOKEN"),
    (0x00000010, "METHOD_DECREF_TOKEN"),
    (0x00000011, "METHOD_GETBUILDCLASS_TOKEN"),
    (0x00000012, "METHOD_LOADNAME_TOKEN"),
    (0x00000013, "METHOD_STORENAME_TOKEN"),
    (0x00000014, "METHOD_UNPACK_SEQUENCE_TOKEN"),
    (0x00000015, "METHOD_UNPACK_SEQUENCEEX_TOKEN"),
    (0x00000016, "METHOD_DELETENAME_TOKEN"),
    (0x00000017, "METHOD_PYCELL_SET_TOKEN"),
    (0x00000018, "METHOD_SET_CLOSURE"),
    (0x00000019, "METHOD_BUILD_SLICE"),
    (0x0000001A, "METHOD_UNARY_POSITIVE"),
    (0x0000001B, "METHOD_UNARY_NEGATIVE"),
    (0x0000001C, "METHOD_UNARY_NOT"),
    (0x0000001D, "METHOD_UNARY_INVERT"),
    (0x0000001E, "METHOD_MATRIX_MULTIPLY_TOKEN"),
    (0x0000001F, "METHOD_BINARY_LSHIFT_TOKEN"),
    (0x00000020, "METHOD_BINARY_RSHIFT_TOKEN"),
    (0x00000021, "METHOD_BINARY_AND_TOKEN"),
    (0x00000022, "METHOD_BINARY_XOR_TOKEN"),
    (0x00000023, "METHOD_BINARY_OR_TOKEN"),
    (0x00000024, "METHOD_LIST_APPEND_TOKEN"),
    (0x00000025, "METHOD_SET_ADD_TOKEN"),
    (0x00000026, "METHOD_INPLACE_POWER_TOKEN"),
    (0x00000027, "METHOD_INPLACE_MULTIPLY_TOKEN"),
    (0x00000028, "METHOD_INPLACE_MATRIX_MULTIPLY_TOKEN"),
    (0x00000029, "METHOD_INPLACE_TRUE_DIVIDE_TOKEN"),
    (0x0000002A, "METHOD_INPLACE_FLOOR_DIVIDE_TOKEN"),
    (0x0000002B, "METHOD_INPLACE_MODULO_TOKEN"),
    (0x0000002C, "METHOD_INPLACE_ADD_TOKEN"),
    (0x0000002D, "METHOD_INPLACE_SUBTRACT_TOKEN"),
    (0x0000002E, "METHOD_INPLACE_LSHIFT_TOKEN"),
    (0x0000002F, "METHOD_INPLACE_RSHIFT_TOKEN"),
    (0x00000030, "METHOD_INPLACE_AND_TOKEN"),
    (0x00000031, "METHOD_INPLACE_XOR_TOKEN"),
    (0x00000032, "METHOD_INPLACE_OR_TOKEN"),
    (0x00000033, "METHOD_MAP_ADD_TOKEN"),
    (0x00000034, "METHOD_PRINT_EXPR_TOKEN"),
    (0x00000035, "METHOD_LOAD_CLASSDEREF_TOKEN"),
    (0x00000036, "METHOD_PREPARE_EXCEPTION"),
    (0x00000037, "METHOD_DO_RAISE"),
    (0x00000038, "METHOD_EH_TRACE"),
    (0x00000039, "METHOD_COMPARE_EXCEPTIONS"),
    (0x0000003A, "METHOD_UNBOUND_LOCAL"),
    (0x0000003B, "METHOD_DEBUG_TRACE"),
    (0x0000003E, "METHOD_DEBUG_DUMP_FRAME"),
    (0x0000003F, "METHOD_UNWIND_EH"),
    (0x00000041, "METHOD_PY_PUSHFRAME"),
    (0x00000042, "METHOD_PY_POPFRAME"),
    (0x00000043, "METHOD_PY_IMPORTNAME"),
    (0x00000045, "METHOD_PY_IMPORTFROM"),
    (0x00000046, "METHOD_PY_IMPORTSTAR"),
    (0x00000049, "METHOD_IS"),
    (0x0000004A, "METHOD_ISNOT"),
    (0x0000004B, "METHOD_IS_BOOL"),
    (0x0000004C, "METHOD_ISNOT_BOOL"),
    (0x0000004D, "METHOD_GETITER_OPTIMIZED_TOKEN"),
    (0x0000004E, "METHOD_COMPARE_EXCEPTIONS_INT"),
    (0x00000051, "METHOD_UNARY_NOT_INT"),
    (0x00000053, "METHOD_FLOAT_FROM_DOUBLE"),
    (0x00000054, "METHOD_BOOL_FROM_LONG"),
    (0x00000055, "METHOD_PYERR_SETSTRING"),
    (0x00000056, "METHOD_BOX_TAGGED_PTR"),
    (0x00000065, "METHOD_EQUALS_INT_TOKEN"),
    (0x00000066, "METHOD_LESS_THAN_INT_TOKEN"),
    (0x00000067, "METHOD_LESS_THAN_EQUALS_INT_TOKEN"),
    (0x00000068, "METHOD_NOT_EQUALS_INT_TOKEN"),
    (0x00000069, "METHOD_GREATER_THAN_INT_TOKEN"),
    (0x0000006A, "METHOD_GREATER_THAN_EQUALS_INT_TOKEN"),
    (0x0000006B, "METHOD_PERIODIC_WORK"),
    (0x0000006C, "METHOD_EXTENDLIST_TOKEN"),
    (0x0000006D, "METHOD_LISTTOTUPLE_TOKEN"),
    (0x0000006E, "METHOD_SETUPDATE_TOKEN"),
    (0x0000006F, "METHOD_DICTUPDATE_TOKEN"),
    (0x00000070, "METHOD_UNBOX_LONG_TAGGED"),
    (0x00000072, "METHOD_INT_TO_FLOAT"),
    (0x00000073, "METHOD_STOREMAP_NO_DECREF_TOKEN"),
    (0x00000074, "METHOD_FORMAT_VALUE"),
    (0x00000075, "METHOD_FORMAT_OBJECT"),
    (0x00000076, "METHOD_BUILD_DICT_FROM_TUPLES"),
    (0x00000077, "METHOD_DICT_MERGE"),
    (0x00000078, "METHOD_SETUP_ANNOTATIONS"),
    (0x00010000, "METHOD_CALL_0_TOKEN"),
    (0x00010001, "METHOD_CALL_1_TOKEN"),
    (0x00010002, "METHOD_CALL_2_TOKEN"),
    (0x00010003, "METHOD_CALL_3_TOKEN"),
    (0x00010004, "METHOD_CALL_4_TOKEN"),
    (0x0001000A, "METHOD_CALL_ARGS"),
    (0x0001000B, "METHOD_CALL_KWARGS"),
    (0x000101FF, "METHOD_CALLN_TOKEN"),
    (0x000103FF, "METHOD_KWCALLN_TOKEN"),
    (0x00010400, "METHOD_LOAD_METHOD"),
    (0x00011000, "METHOD_METHCALL_0_TOKEN"),
    (0x00011001, "METHOD_METHCALL_1_TOKEN"),
    (0x00011002, "METHOD_METHCALL_2_TOKEN"),
    (0x00011003, "METHOD_METHCALL_3_TOKEN"),
    (0x00011004, "METHOD_METHCALL_4_TOKEN"),
    (0x00011005, "METHOD_METHCALLN_TOKEN"),
    (0x00020000, "METHOD_PYTUPLE_NEW"),
    (0x00020001, "METHOD_PYLIST_NEW"),
    (0x00020002, "METHOD_PYDICT_NEWPRESIZED"),
    (0x00020003, "METHOD_PYSET_NEW"),
    (0x00020004, "METHOD_PYSET_ADD"),
    (0x00020005, "METHOD_PYOBJECT_ISTRUE"),
    (0x00020006, "METHOD_PYITER_NEXT"),
    (0x00020007, "METHOD_PYCELL_GET"),
    (0x00020008, "METHOD_PYERR_RESTORE"),
    (0x00020009, "METHOD_PYOBJECT_STR"),
    (0x0002000A, "METHOD_PYOBJECT_REPR"),
    (0x0002000B, "METHOD_PYOBJECT_ASCII"),
    (0x0002000C, "METHOD_PYUNICODE_JOINARRAY"),
    (0x00030000, "METHOD_LOADGLOBAL_TOKEN"),
    (0x00030001, "METHOD_LOADATTR_TOKEN"),
    (0x00030002, "METHOD_STOREATTR_TOKEN"),
    (0x00030003, "METHOD_DELETEATTR_TOKEN"),
    (0x00030004, "METHOD_STOREGLOBAL_TOKEN"),
    (0x00030005, "METHOD_DELETEGLOBAL_TOKEN"),
    (0x00030006, "METHOD_LOAD_ASSERTION_ERROR"),
    (0x00040000, "SIG_ITERNEXT_TOKEN"),
    (0x00040001, "SIG_ITERNEXT_OPTIMIZED_TOKEN"),
    (0x00050000, "METHOD_FLOAT_POWER_TOKEN"),
    (0x00050001, "METHOD_FLOAT_FLOOR_TOKEN"),
    (0x00050002, "METHOD_FLOAT_MODULUS_TOKEN"),
];
