//! Octave tracking for letter-indexed builders
//!
//! Octave numbers change at C. Starting from a root letter, the scale
//! degree at which the letter sequence crosses B→C decides whether a note
//! lands in the root's octave or the next one.

use crate::models::Letter;

/// Last scale degree (1-based) still in the root's octave
fn last_degree_in_octave(root: Letter) -> usize {
    match root {
        Letter::C => 7,
        Letter::D => 6,
        Letter::E => 5,
        Letter::F => 4,
        Letter::G => 3,
        Letter::A => 2,
        Letter::B => 1,
    }
}

/// 1 when the degree lies past the B→C crossing, else 0
///
/// Only meaningful for degrees 1..=8.
pub fn octave_offset(root: Letter, scale_degree: usize) -> i32 {
    if scale_degree > last_degree_in_octave(root) {
        1
    } else {
        0
    }
}

/// Octave offset for any degree, counting whole octaves above the first
///
/// Agrees with [`octave_offset`] for degrees 1..=8. Degree 0 is treated as 1.
pub fn octave_offset_extended(root: Letter, scale_degree: usize) -> i32 {
    let degree = scale_degree.max(1);
    let whole_octaves = ((degree - 1) / 7) as i32;
    whole_octaves + octave_offset(root, (degree - 1) % 7 + 1)
}

/// A C-letter note past the first position moves into the next octave
pub fn bumps_octave(letter: Letter, position: usize) -> bool {
    letter == Letter::C && position > 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds() {
        assert_eq!(octave_offset(Letter::C, 7), 0);
        assert_eq!(octave_offset(Letter::C, 8), 1);
        assert_eq!(octave_offset(Letter::A, 2), 0);
        assert_eq!(octave_offset(Letter::A, 3), 1);
        assert_eq!(octave_offset(Letter::B, 1), 0);
        assert_eq!(octave_offset(Letter::B, 2), 1);
        assert_eq!(octave_offset(Letter::G, 4), 1);
    }

    #[test]
    fn test_extended_matches_within_octave() {
        for letter in Letter::ALL {
            for degree in 1..=8 {
                assert_eq!(
                    octave_offset_extended(letter, degree),
                    octave_offset(letter, degree),
                    "{} degree {}",
                    letter,
                    degree
                );
            }
        }
    }

    #[test]
    fn test_extended_past_the_octave() {
        // A: the 10th is C#, two letters past the octave A
        assert_eq!(octave_offset_extended(Letter::A, 9), 1);
        assert_eq!(octave_offset_extended(Letter::A, 10), 2);
        assert_eq!(octave_offset_extended(Letter::C, 15), 2);
        assert_eq!(octave_offset_extended(Letter::C, 14), 1);
    }

    #[test]
    fn test_bumps_octave() {
        assert!(bumps_octave(Letter::C, 3));
        assert!(!bumps_octave(Letter::C, 0));
        assert!(!bumps_octave(Letter::D, 3));
    }
}
