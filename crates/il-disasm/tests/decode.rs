//! End-to-end decoding of method bodies captured from the JIT.

use il_disasm::{
    decode, decode_all, disassemble, Config, DecodeError, FormatOptions, Operand,
};

/// A tiny-header body: push a frame, load a global, call it, pop the frame.
const THIN_BODY: &[u8] = &[
    0x03, 0x20, 0x68, 0x00, 0x00, 0x00, 0xd3, 0x58, 0x0a, 0x03, 0x28, 0x41, 0x00, 0x00, 0x00, 0x16,
    0x0d, 0x06, 0x20, 0x00, 0x00, 0x00, 0x00, 0xd3, 0x54, 0x03, 0x21, 0xb0, 0xc6, 0x56, 0x29, 0x91,
    0x7f, 0x00, 0x00, 0xd3, 0x28, 0x00, 0x00, 0x03, 0x00, 0x25, 0x0c, 0x16, 0xd3, 0x40, 0x0b, 0x00,
    0x00, 0x00, 0x03, 0x28, 0x38, 0x00, 0x00, 0x00, 0x38, 0x91, 0x00, 0x00, 0x00, 0x08, 0x06, 0x20,
    0x02, 0x00, 0x00, 0x00, 0xd3, 0x54, 0x21, 0xf0, 0xc3, 0x13, 0x2a, 0x91, 0x7f, 0x00, 0x00, 0xd3,
    0x25, 0x20, 0x00, 0x00, 0x00, 0x00, 0xd3, 0x58, 0x25, 0x4a, 0x17, 0x58, 0x54, 0x06, 0x20, 0x04,
    0x00, 0x00, 0x00, 0xd3, 0x54, 0x28, 0x01, 0x00, 0x01, 0x00, 0x25, 0x0c, 0x16, 0xd3, 0x40, 0x0b,
    0x00, 0x00, 0x00, 0x03, 0x28, 0x38, 0x00, 0x00, 0x00, 0x38, 0x50, 0x00, 0x00, 0x00, 0x08, 0x06,
    0x20, 0x06, 0x00, 0x00, 0x00, 0xd3, 0x54, 0x28, 0x10, 0x00, 0x00, 0x00, 0x06, 0x20, 0x08, 0x00,
    0x00, 0x00, 0xd3, 0x54, 0x21, 0xe0, 0x1e, 0xda, 0x02, 0x01, 0x00, 0x00, 0x00, 0xd3, 0x25, 0x20,
    0x00, 0x00, 0x00, 0x00, 0xd3, 0x58, 0x25, 0x4a, 0x17, 0x58, 0x54, 0x06, 0x20, 0x0a, 0x00, 0x00,
    0x00, 0xd3, 0x54, 0x0b, 0xdd, 0x1c, 0x00, 0x00, 0x00, 0x09, 0x16, 0x3e, 0x09, 0x00, 0x00, 0x00,
    0x26, 0x26, 0x26, 0x19, 0x09, 0x59, 0x0d, 0x2b, 0xf0, 0x38, 0x00, 0x00, 0x00, 0x00, 0x16, 0xd3,
    0x38, 0x01, 0x00, 0x00, 0x00, 0x07, 0x03, 0x28, 0x42, 0x00, 0x00, 0x00, 0x2a,
];

/// Leading bytes of a body with a fat header.
const FAT_BODY: &[u8] = &[
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xa6, 0x38, 0xd6, 0x11, 0xa5, 0x7f, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xa6, 0x38, 0xd6, 0x11, 0xa5, 0x7f, 0x00, 0x00,
];

#[test]
fn thin_body_decodes_completely() {
    let instrs = decode_all(THIN_BODY).unwrap();
    assert_eq!(instrs.len(), 100);

    let first = &instrs[0];
    assert_eq!(first.offset, 0);
    assert_eq!(first.mnemonic(), "ldarg.1");
    assert_eq!(first.operand, None);

    let last = instrs.last().unwrap();
    assert_eq!(last.offset, 0xdc);
    assert_eq!(last.mnemonic(), "ret");
    assert_eq!(last.next_offset(), THIN_BODY.len());
}

#[test]
fn thin_body_offsets_are_contiguous() {
    let instrs = decode_all(THIN_BODY).unwrap();
    for pair in instrs.windows(2) {
        assert_eq!(pair[1].offset, pair[0].offset + pair[0].len());
    }
}

#[test]
fn thin_body_operands() {
    let instrs = decode_all(THIN_BODY).unwrap();
    let at = |offset: usize| instrs.iter().find(|i| i.offset == offset).unwrap();

    assert_eq!(at(0x01).operand, Some(Operand::Int32(104)));
    assert_eq!(at(0x1a).mnemonic(), "ldc.i8");
    assert_eq!(at(0x1a).operand, Some(Operand::Int64(140261440538288)));
    assert_eq!(at(0xc7).operand, Some(Operand::Int8(-16)));

    let calls: Vec<(usize, i32, &str)> = instrs
        .iter()
        .filter_map(|i| i.method().map(|m| (i.offset, m.token, m.name.unwrap())))
        .collect();
    assert_eq!(
        calls,
        [
            (0x0a, 65, "METHOD_PY_PUSHFRAME"),
            (0x24, 196608, "METHOD_LOADGLOBAL_TOKEN"),
            (0x33, 56, "METHOD_EH_TRACE"),
            (0x65, 65537, "METHOD_CALL_1_TOKEN"),
            (0x74, 56, "METHOD_EH_TRACE"),
            (0x87, 16, "METHOD_DECREF_TOKEN"),
            (0xd7, 66, "METHOD_PY_POPFRAME"),
        ]
    );
}

#[test]
fn thin_body_branch_targets() {
    let instrs = decode_all(THIN_BODY).unwrap();
    let targets: Vec<(usize, usize)> = instrs
        .iter()
        .filter_map(|i| i.branch_target().map(|t| (i.offset, t)))
        .collect();
    assert_eq!(
        targets,
        [
            (0x2d, 0x3d),
            (0x38, 0xce),
            (0x6e, 0x7e),
            (0x79, 0xce),
            (0xb4, 0xd5),
            (0xbb, 0xc9),
            (0xc7, 0xb9),
            (0xc9, 0xce),
            (0xd0, 0xd6),
        ]
    );
}

#[test]
fn thin_body_listing() {
    let listing = disassemble(THIN_BODY, &Config::default()).unwrap();
    let lines: Vec<&str> = listing.lines().collect();
    assert_eq!(lines.len(), 100);
    assert_eq!(lines[0], "IL_0000 ldarg.1");
    assert_eq!(lines[1], "IL_0001 ldc.i4         (104)");
    assert_eq!(lines[6], "IL_000a call           (65 : METHOD_PY_PUSHFRAME)");
    assert_eq!(lines[14], "IL_001a ldc.i8         (140261440538288)");
    assert_eq!(lines[99], "IL_00dc ret");
}

#[test]
fn thin_body_listing_with_options() {
    let config = Config {
        format: FormatOptions {
            mnemonic_width: 8,
            uppercase_hex: true,
            show_branch_targets: true,
            ..FormatOptions::default()
        },
        ..Config::default()
    };
    let listing = disassemble(THIN_BODY, &config).unwrap();
    assert!(listing.contains("IL_002D bne.un  (11) -> IL_003D\n"));
    assert!(listing.contains("IL_00C7 br.s    (-16) -> IL_00B9\n"));
    assert!(listing.ends_with("IL_00DC ret\n"));
}

#[test]
fn fat_body_is_rejected() {
    let results: Vec<_> = decode(FAT_BODY).collect();
    assert_eq!(results, [Err(DecodeError::UnsupportedFormat { offset: 0 })]);
}

#[test]
fn truncated_body_keeps_prior_records() {
    // Cut the final call's token in half.
    let cut = &THIN_BODY[..THIN_BODY.len() - 3];
    let results: Vec<_> = decode(cut).collect();
    assert_eq!(results.len(), 99);
    assert!(results[..98].iter().all(Result::is_ok));
    assert_eq!(
        results[98],
        Err(DecodeError::TruncatedStream {
            offset: 0xd7,
            needed: 4,
            available: 2,
        })
    );
}

#[test]
fn method_token_resolution() {
    let instrs = decode_all(&[0x28, 0x00, 0x00, 0x00, 0x00, 0x28, 0x44, 0x00, 0x00, 0x00]).unwrap();

    let add = instrs[0].method().unwrap();
    assert_eq!(add.token, 0);
    assert_eq!(add.name, Some("METHOD_ADD_TOKEN"));

    let missing = instrs[1].method().unwrap();
    assert_eq!(missing.token, 0x44);
    assert!(!missing.is_resolved());
}

#[test]
fn strict_config_rejects_unknown_tokens() {
    let config = Config::from_str(
        "[decode]\nstrict_tokens = true\n",
        std::path::Path::new("strict.toml"),
    )
    .unwrap();
    let err = disassemble(&[0x03, 0x28, 0x44, 0x00, 0x00, 0x00], &config).unwrap_err();
    assert_eq!(
        err,
        DecodeError::UnresolvedToken {
            offset: 1,
            token: 0x44,
        }
    );
    assert_eq!(err.offset(), 1);
}

#[test]
fn concurrent_decodes_share_tables() {
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| decode_all(THIN_BODY).map(|instrs| instrs.len())))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), Ok(100));
        }
    });
}
