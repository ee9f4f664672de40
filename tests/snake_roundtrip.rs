use insta::assert_snapshot;
use proptest::prelude::*;
use tuplecell::cell::{bytes_to_cell, string_to_cell, Cell};

fn patterned(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 31 % 251) as u8).collect()
}

fn decode(cell: &Cell) -> Vec<u8> {
    cell.begin_parse().load_bytes_tail().unwrap()
}

#[test]
fn roundtrip_at_boundary_lengths() {
    for len in [0usize, 1, 127, 128, 1000, 100_000] {
        let payload = patterned(len);
        let cell = bytes_to_cell(&payload).unwrap();
        assert_eq!(decode(&cell), payload, "length {}", len);
    }
}

#[test]
fn one_byte_over_capacity_spills_into_a_second_cell() {
    let head = bytes_to_cell(&patterned(128)).unwrap();
    assert_eq!(head.data().len(), 127);
    assert_eq!(head.refs().len(), 1);
    let tail = &head.refs()[0];
    assert_eq!(tail.data().len(), 1);
    assert!(tail.refs().is_empty());

    let exact = bytes_to_cell(&patterned(127)).unwrap();
    assert_eq!(exact.data().len(), 127);
    assert!(exact.refs().is_empty());
}

#[test]
fn multibyte_text_survives_chunk_straddling() {
    // Cyrillic plus an emoji: 2- and 4-byte sequences at shifting offsets,
    // so some repetition boundary lands inside a 127-byte chunk border.
    let text = "привет мир 👀 ".repeat(64);
    let cell = string_to_cell(&text).unwrap();
    assert!(cell.refs().len() == 1, "payload spans several cells");
    assert_eq!(cell.begin_parse().load_string_tail().unwrap(), text);
}

#[test]
fn head_cell_layout_is_stable() {
    let cell = bytes_to_cell(b"snake").unwrap();
    let hex = cell
        .data()
        .iter()
        .map(|byte| format!("{:02x}", byte))
        .collect::<Vec<_>>()
        .join(" ");
    assert_snapshot!(hex, @"73 6e 61 6b 65");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn proptest_roundtrip_arbitrary_payloads(payload in proptest::collection::vec(any::<u8>(), 0..1500)) {
        let cell = bytes_to_cell(&payload).unwrap();
        prop_assert_eq!(decode(&cell), payload);
    }

    #[test]
    fn proptest_roundtrip_arbitrary_text(text in ".{0,400}") {
        let cell = string_to_cell(&text).unwrap();
        prop_assert_eq!(cell.begin_parse().load_string_tail().unwrap(), text);
    }
}
