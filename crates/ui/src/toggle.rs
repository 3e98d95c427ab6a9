//! Mode selector for the evolution form
//!
//! The `num-iters` input only changes how many layers a 2D board grows, so it
//! is hidden together with its label and line break while 1D is selected.

use std::cell::Cell;

/// Dimensionality picked on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    OneDimensional,
    TwoDimensional,
}

impl Mode {
    /// Id of the control that selects this mode
    pub const fn selector_id(self) -> &'static str {
        match self {
            Self::OneDimensional => "1D",
            Self::TwoDimensional => "2D",
        }
    }

    pub const fn dependent_visibility(self) -> Visibility {
        match self {
            Self::OneDimensional => Visibility::Hidden,
            Self::TwoDimensional => Visibility::Visible,
        }
    }
}

impl From<Mode> for aca_core::Dimension {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::OneDimensional => Self::One,
            Mode::TwoDimensional => Self::Two,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
}

/// Layout role of a dependent control, which decides how it is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlRole {
    Input,
    Label,
    LineBreak,
}

impl ControlRole {
    pub const ALL: [Self; 3] = [Self::Input, Self::Label, Self::LineBreak];

    pub const fn element_id(self) -> &'static str {
        match self {
            Self::Input => "num-iters",
            Self::Label => "num-iters-label",
            Self::LineBreak => "num-iters-break",
        }
    }

    /// CSS `display` value for the given visibility
    pub const fn display(self, visibility: Visibility) -> &'static str {
        match (visibility, self) {
            (Visibility::Hidden, _) => "none",
            (Visibility::Visible, Self::Input) => "inline-block",
            (Visibility::Visible, Self::Label | Self::LineBreak) => "block",
        }
    }
}

/// Something whose CSS `display` can be set, usually a page element
pub trait DisplayTarget {
    fn set_display(&self, value: &str);
}

/// Shows or hides the `num-iters` controls as the mode changes
///
/// The controls are created by the page; the toggler only writes their
/// display property and never sets an initial state of its own.
pub struct VisibilityToggler<T> {
    input: T,
    label: T,
    line_break: T,
    last_mode: Cell<Option<Mode>>,
}

impl<T: DisplayTarget> VisibilityToggler<T> {
    pub const fn new(input: T, label: T, line_break: T) -> Self {
        Self {
            input,
            label,
            line_break,
            last_mode: Cell::new(None),
        }
    }

    /// Apply the visibility for `mode` to all three controls
    pub fn on_mode_selected(&self, mode: Mode) {
        let visibility = mode.dependent_visibility();
        for (role, target) in self.targets() {
            target.set_display(role.display(visibility));
        }
        self.last_mode.set(Some(mode));
    }

    /// Last mode clicked, if any
    pub fn mode(&self) -> Option<Mode> {
        self.last_mode.get()
    }

    fn targets(&self) -> [(ControlRole, &T); 3] {
        [
            (ControlRole::Input, &self.input),
            (ControlRole::Label, &self.label),
            (ControlRole::LineBreak, &self.line_break),
        ]
    }
}
