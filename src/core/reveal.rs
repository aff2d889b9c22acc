use super::constants::{REVEAL_HIDDEN_CLASS, REVEAL_VISIBLE_CLASS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reveal {
    Visible,
    Hidden,
}

impl Reveal {
    #[inline]
    pub fn from_intersecting(is_intersecting: bool) -> Self {
        if is_intersecting {
            Reveal::Visible
        } else {
            Reveal::Hidden
        }
    }

    pub fn add_class(self) -> &'static str {
        match self {
            Reveal::Visible => REVEAL_VISIBLE_CLASS,
            Reveal::Hidden => REVEAL_HIDDEN_CLASS,
        }
    }

    pub fn remove_class(self) -> &'static str {
        match self {
            Reveal::Visible => REVEAL_HIDDEN_CLASS,
            Reveal::Hidden => REVEAL_VISIBLE_CLASS,
        }
    }
}
