// cwgen -- turning plain text into morse code audio
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! The morse alphabet.
//!
//! Upper and lower case letters have their own entries, as do the accented
//! Latin-1 letters. Visually similar letters that share a pattern are kept
//! as separate flat entries rather than being folded together.

/// A single element of a morse pattern.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Symbol {
    Dit,
    Dah,
}

impl Symbol {
    /// Decode a pattern character, `.` for a dit and `-` for a dah.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Symbol::Dit),
            '-' => Some(Symbol::Dah),
            _ => None,
        }
    }
}

/// Look up the dot/dash pattern of a character.
///
/// ```
/// use cwgen::morse::pattern;
///
/// assert_eq!(pattern('S'), Some("..."));
/// assert_eq!(pattern('s'), Some("..."));
/// assert_eq!(pattern('Ü'), Some("..--"));
/// assert_eq!(pattern('#'), None);
/// ```
pub fn pattern(c: char) -> Option<&'static str> {
    SYMBOLS
        .binary_search_by_key(&c, |&(key, _)| key)
        .ok()
        .map(|index| SYMBOLS[index].1)
}

/// Iterate the symbols of a pattern.
pub fn decode(pattern: &str) -> impl Iterator<Item = Symbol> + '_ {
    pattern.chars().filter_map(Symbol::from_char)
}

/// Iterate the symbols of a character's pattern.
pub fn symbols(c: char) -> Option<impl Iterator<Item = Symbol>> {
    pattern(c).map(decode)
}

/// Every supported character with its pattern.
/// Sorted by character so that `pattern` can use a binary search.
pub const SYMBOLS: &[(char, &str)] = &[
    ('!', "..--."),
    ('"', ".-..-."),
    ('$', "...-..-"),
    ('&', ".-..."),
    ('\'', ".----."),
    ('(', "-.--."),
    (')', "-.--.-"),
    ('+', ".-.-."),
    (',', "--..--"),
    ('-', "-....-"),
    ('.', ".-.-.-"),
    ('/', "-..-."),
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    (':', "---..."),
    (';', "-.-.-."),
    ('=', "-...-"),
    ('?', "..--.."),
    ('@', ".--.-."),
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    ('\\', "-..-."),
    ('`', ".----."),
    ('a', ".-"),
    ('b', "-..."),
    ('c', "-.-."),
    ('d', "-.."),
    ('e', "."),
    ('f', "..-."),
    ('g', "--."),
    ('h', "...."),
    ('i', ".."),
    ('j', ".---"),
    ('k', "-.-"),
    ('l', ".-.."),
    ('m', "--"),
    ('n', "-."),
    ('o', "---"),
    ('p', ".--."),
    ('q', "--.-"),
    ('r', ".-."),
    ('s', "..."),
    ('t', "-"),
    ('u', "..-"),
    ('v', "...-"),
    ('w', ".--"),
    ('x', "-..-"),
    ('y', "-.--"),
    ('z', "--.."),
    ('À', ".--.-"),
    ('Á', ".--.-"),
    ('Â', ".-"),
    ('Ã', ".-"),
    ('Ä', ".-.-"),
    ('Å', ".--.-"),
    ('Æ', ".-.-"),
    ('Ç', "-.-.."),
    ('È', "..-.."),
    ('É', "..-.."),
    ('Ê', "."),
    ('Ë', "."),
    ('Ì', ".."),
    ('Í', ".."),
    ('Î', ".."),
    ('Ï', ".."),
    ('Ð', "..--."),
    ('Ñ', "--.--"),
    ('Ò', "---"),
    ('Ó', "---"),
    ('Ô', "---"),
    ('Õ', "---"),
    ('Ö', "---."),
    ('Ø', "---."),
    ('Ù', "..-"),
    ('Ú', "..-"),
    ('Û', "..-"),
    ('Ü', "..--"),
    ('Ý', "-.--"),
    ('Þ', ".--.."),
    ('ß', "...--.."),
    ('à', ".--.-"),
    ('á', ".--.-"),
    ('â', ".-"),
    ('ã', ".-"),
    ('ä', ".-.-"),
    ('å', ".--.-"),
    ('æ', ".-.-"),
    ('ç', "-.-.."),
    ('è', "..-.."),
    ('é', "..-.."),
    ('ê', "."),
    ('ë', "."),
    ('ì', ".."),
    ('í', ".."),
    ('î', ".."),
    ('ï', ".."),
    ('ð', "..--."),
    ('ñ', "--.--"),
    ('ò', "---"),
    ('ó', "---"),
    ('ô', "---"),
    ('õ', "---"),
    ('ö', "---."),
    ('ø', "---."),
    ('ù', "..-"),
    ('ú', "..-"),
    ('û', "..-"),
    ('ü', "..--"),
    ('ý', "-.--"),
    ('þ', ".--.."),
    ('ÿ', "-.--"),
];
