//! file: selection.rs
//! author: Jacob Xie
//! date: 2025/12/20 10:31:05 Saturday
//! brief: pending tile selection

/// Tiles picked by the player but not yet resolved.
///
/// `Comparing` holds a mismatched pair until the highlight delay clears it;
/// no other tile can be picked meanwhile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Idle,
    Pending(usize),
    Comparing {
        first: usize,
        second: usize,
    },
}

impl Selection {
    pub fn contains(self, id: usize) -> bool {
        match self {
            Selection::Idle => false,
            Selection::Pending(pending) => pending == id,
            Selection::Comparing { first, second } => first == id || second == id,
        }
    }

    pub fn is_comparing(self) -> bool {
        matches!(self, Selection::Comparing { .. })
    }
}
