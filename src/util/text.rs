// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Text utility functions.
//!
//! This module provides Hungarian alphabetical ordering for free-text tag
//! values. Letters are compared case-insensitively, long and short vowels
//! share a position (`a`/`á`, `o`/`ó`, `ö`/`ő`, ...), and `ö`/`ü` as well as
//! the digraphs (`cs`, `gy`, `sz`, ...) are letters of their own that sort
//! after their base letter.

use std::cmp::Ordering;

/// Hungarian alphabet. Spellings in one slot are equal at the primary level.
const ALPHABET: &[&[&str]] = &[
    &["a", "á"],
    &["b"],
    &["c"],
    &["cs"],
    &["d"],
    &["dz"],
    &["dzs"],
    &["e", "é"],
    &["f"],
    &["g"],
    &["gy"],
    &["h"],
    &["i", "í"],
    &["j"],
    &["k"],
    &["l"],
    &["ly"],
    &["m"],
    &["n"],
    &["ny"],
    &["o", "ó"],
    &["ö", "ő"],
    &["p"],
    &["q"],
    &["r"],
    &["s"],
    &["sz"],
    &["t"],
    &["ty"],
    &["u", "ú"],
    &["ü", "ű"],
    &["v"],
    &["w"],
    &["x"],
    &["y"],
    &["z"],
    &["zs"],
];

/// Letters start above every Unicode scalar, so digits and punctuation sort
/// before them.
const LETTER_BASE: u32 = 0x11_0000;

/// Foreign accented letters folded onto their Hungarian base letter.
fn fold_foreign(c: char) -> char {
    match c {
        'à' | 'â' | 'ä' | 'ã' => 'a',
        'è' | 'ê' | 'ë' => 'e',
        'ì' | 'î' | 'ï' => 'i',
        'ò' | 'ô' | 'õ' => 'o',
        'ù' | 'û' => 'u',
        other => other,
    }
}

fn slot_of(letter: &str) -> Option<u32> {
    ALPHABET
        .iter()
        .position(|slot| slot.contains(&letter))
        .map(|i| i as u32)
}

/// Primary collation weights of a string.
///
/// Digraphs are matched longest first (`dzs` before `dz` before `d`).
/// Characters outside the alphabet keep their code point; other letters
/// sort after `zs`.
pub fn collation_key(s: &str) -> Vec<u32> {
    let chars: Vec<char> = s
        .chars()
        .flat_map(char::to_lowercase)
        .map(fold_foreign)
        .collect();

    let mut key = Vec::with_capacity(chars.len());
    let mut i = 0;
    while i < chars.len() {
        let matched = (1..=3).rev().filter(|len| i + len <= chars.len()).find_map(|len| {
            let letter: String = chars[i..i + len].iter().collect();
            slot_of(&letter).map(|slot| (slot, len))
        });

        match matched {
            Some((slot, len)) => {
                key.push(LETTER_BASE + slot);
                i += len;
            }
            None => {
                let c = chars[i];
                key.push(if c.is_alphabetic() {
                    LETTER_BASE + ALPHABET.len() as u32 + c as u32
                } else {
                    c as u32
                });
                i += 1;
            }
        }
    }
    key
}

/// Compare two strings in Hungarian alphabetical order, case- and
/// vowel-length-insensitive first, then by the raw strings to keep the
/// order total.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(values: &[&'static str]) -> Vec<&'static str> {
        let mut values = values.to_vec();
        values.sort_by(|a, b| locale_compare(a, b));
        values
    }

    #[test]
    fn test_collation_key_folds_case_and_length() {
        assert_eq!(collation_key("LÉTSZÁM"), collation_key("letszam"));
        assert_eq!(collation_key("ŐSZ"), collation_key("ösz"));
        assert_ne!(collation_key("ösz"), collation_key("osz"));
    }

    #[test]
    fn test_locale_compare_ignores_case_and_accents() {
        assert_eq!(
            sorted(&["zóna", "Ágas", "beállás", "Alap"]),
            vec!["Ágas", "Alap", "beállás", "zóna"]
        );
    }

    #[test]
    fn test_umlauts_sort_after_base_vowel() {
        assert_eq!(sorted(&["öt", "ov"]), vec!["ov", "öt"]);
        assert_eq!(sorted(&["őz", "oz", "ötös"]), vec!["oz", "ötös", "őz"]);
        assert_eq!(sorted(&["üveg", "uz", "űr"]), vec!["uz", "űr", "üveg"]);
        assert_eq!(sorted(&["pálya", "öt"]), vec!["öt", "pálya"]);
    }

    #[test]
    fn test_digraphs_are_letters() {
        assert_eq!(sorted(&["csel", "cukor"]), vec!["cukor", "csel"]);
        assert_eq!(sorted(&["szélső", "sarok", "támadás"]), vec!["sarok", "szélső", "támadás"]);
        assert_eq!(sorted(&["zsugor", "zúzás"]), vec!["zúzás", "zsugor"]);
        assert_eq!(sorted(&["dzsungel", "dzéta", "dinamó"]), vec!["dinamó", "dzéta", "dzsungel"]);
    }

    #[test]
    fn test_digits_before_letters() {
        assert_eq!(sorted(&["alap", "7:6 játék"]), vec!["7:6 játék", "alap"]);
    }

    #[test]
    fn test_locale_compare_total_on_ties() {
        assert_eq!(locale_compare("a", "A"), "a".cmp("A"));
        assert_eq!(locale_compare("x", "x"), Ordering::Equal);
    }
}
