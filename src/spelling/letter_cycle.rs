use crate::models::{Letter, Spelling};

/// The seven letters in alphabet order, rotated to start at a root letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterCycle {
    letters: [Letter; 7],
}

impl LetterCycle {
    pub fn new(root: Letter) -> Self {
        let start = root.index();
        LetterCycle {
            letters: std::array::from_fn(|i| Letter::from_index(start + i)),
        }
    }

    /// Cycle for a root spelling; the accidental is ignored
    pub fn for_root(root: Spelling) -> Self {
        LetterCycle::new(root.letter)
    }

    pub fn root(&self) -> Letter {
        self.letters[0]
    }

    /// Letter at a signed cycle index, wrapping modulo 7
    pub fn at(&self, index: isize) -> Letter {
        self.letters[index.rem_euclid(7) as usize]
    }

    pub fn letters(&self) -> [Letter; 7] {
        self.letters
    }
}

/// Seven letters starting at `root`
pub fn letter_cycle(root: Letter) -> [Letter; 7] {
    LetterCycle::new(root).letters()
}
