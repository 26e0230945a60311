// File: crates/molecule-timeline/src/category.rs
// Summary: Atom-count categories of molecules.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Diatomic,
    Triatomic,
    Polyatomic,
}

impl Category {
    /// Stacking order, bottom to top.
    pub const ALL: [Category; 3] = [Category::Diatomic, Category::Triatomic, Category::Polyatomic];

    /// `None` for fewer than two atoms.
    pub const fn from_atom_count(atoms: u32) -> Option<Self> {
        match atoms {
            0 | 1 => None,
            2 => Some(Self::Diatomic),
            3 => Some(Self::Triatomic),
            _ => Some(Self::Polyatomic),
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Legend label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Diatomic => "diatomics",
            Self::Triatomic => "triatomics",
            Self::Polyatomic => ">3 atoms",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_by_atom_count() {
        assert_eq!(Category::from_atom_count(1), None);
        assert_eq!(Category::from_atom_count(2), Some(Category::Diatomic));
        assert_eq!(Category::from_atom_count(3), Some(Category::Triatomic));
        assert_eq!(Category::from_atom_count(4), Some(Category::Polyatomic));
        assert_eq!(Category::from_atom_count(6), Some(Category::Polyatomic));
    }

    #[test]
    fn index_follows_stacking_order() {
        for (i, c) in Category::ALL.iter().enumerate() {
            assert_eq!(c.index(), i);
        }
    }
}
