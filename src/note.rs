//! Note names and pitch classes.
//!
//! Notes are plain integers counting semitones above C0, so `"A0"` is 9,
//! `"C4"` is 48 and `"C8"` is 96. Parsing accepts exactly
//! `<Letter>[<Accidental>]<OctaveDigit>` and does not clamp its result:
//! `"Cb0"` parses to -1. Pitch class and octave use floor semantics so
//! negative notes still land in `0..12`.

use crate::error::{Error, Result};
use crate::model::Note;

/// Pitch classes of the white keys.
pub const WHITE_KEYS: [i32; 7] = [0, 2, 4, 5, 7, 9, 11];

/// Pitch classes of the black keys.
pub const BLACK_KEYS: [i32; 5] = [1, 3, 6, 8, 10];

/// Canonical display names, flats for the black keys.
const NOTE_NAMES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Parse a note name like `"A0"`, `"C#4"` or `"Bb3"` into a note number.
pub fn parse_note_name(name: &str) -> Result<Note> {
    let chars: Vec<char> = name.chars().collect();
    match chars.as_slice() {
        &[letter, octave] => Ok(parse_letter(letter, name)? + parse_octave(octave, name)?),
        &[letter, accidental, octave] => Ok(parse_letter(letter, name)?
            + parse_accidental(accidental, name)?
            + parse_octave(octave, name)?),
        _ => Err(Error::parse(name)),
    }
}

fn parse_letter(letter: char, name: &str) -> Result<i32> {
    // Only the seven naturals; pitch classes between E/F and B/C have no letter.
    match letter {
        'C' => Ok(0),
        'D' => Ok(2),
        'E' => Ok(4),
        'F' => Ok(5),
        'G' => Ok(7),
        'A' => Ok(9),
        'B' => Ok(11),
        _ => Err(Error::parse(name)),
    }
}

fn parse_accidental(accidental: char, name: &str) -> Result<i32> {
    match accidental {
        'b' => Ok(-1),
        '#' => Ok(1),
        _ => Err(Error::parse(name)),
    }
}

fn parse_octave(octave: char, name: &str) -> Result<i32> {
    match octave.to_digit(10) {
        Some(digit) => Ok(12 * digit as i32),
        None => Err(Error::parse(name)),
    }
}

/// Octave of a note (`note div 12`, rounded towards negative infinity).
pub fn octave(note: Note) -> i32 {
    note.div_euclid(12)
}

/// Pitch class of a note, always in `0..12`.
pub fn pitch_class(note: Note) -> i32 {
    note.rem_euclid(12)
}

pub fn is_white_key(note: Note) -> bool {
    WHITE_KEYS.contains(&pitch_class(note))
}

pub fn is_black_key(note: Note) -> bool {
    BLACK_KEYS.contains(&pitch_class(note))
}

/// Convert a note number to its canonical name, e.g. 49 → `"Db4"`.
pub fn midi_note_to_name(note: Note) -> String {
    format!("{}{}", NOTE_NAMES[pitch_class(note) as usize], octave(note))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_naturals_and_accidentals() {
        assert_eq!(parse_note_name("A0"), Ok(9));
        assert_eq!(parse_note_name("C4"), Ok(48));
        assert_eq!(parse_note_name("C8"), Ok(96));
        assert_eq!(parse_note_name("C#4"), Ok(49));
        assert_eq!(parse_note_name("Bb3"), Ok(46));
        assert_eq!(parse_note_name("B9"), Ok(119));
    }

    #[test]
    fn parse_does_not_clamp() {
        assert_eq!(parse_note_name("Cb0"), Ok(-1));
        assert_eq!(parse_note_name("B#9"), Ok(120));
    }

    #[test]
    fn rejects_bad_grammar() {
        for bad in ["", "C", "C10", "H4", "-4", "c4", "C##4", "Cx4", "C#", "Cb#4", "E-4", "C٣"] {
            assert_eq!(
                parse_note_name(bad),
                Err(Error::Parse { name: bad.to_string() }),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn negative_notes_use_floor_semantics() {
        assert_eq!(pitch_class(-1), 11);
        assert_eq!(octave(-1), -1);
        assert!(is_white_key(-1));
        assert_eq!(pitch_class(-11), 1);
        assert!(is_black_key(-11));
    }

    #[test]
    fn canonical_names_prefer_flats() {
        assert_eq!(midi_note_to_name(49), "Db4");
        assert_eq!(midi_note_to_name(9), "A0");
        assert_eq!(midi_note_to_name(70), "Bb5");
        assert_eq!(midi_note_to_name(131), "B10");
    }
}
