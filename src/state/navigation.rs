//! Navigation-related state types.

/// Specifying the different foci.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Focus {
    Input,
    Results,
}

impl Focus {
    /// Return the other focus.
    ///
    pub fn toggled(self) -> Focus {
        match self {
            Focus::Input => Focus::Results,
            Focus::Results => Focus::Input,
        }
    }
}
