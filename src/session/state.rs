//! Menu state machine.

/// Navigation state of an interactive session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    /// Top-level menu: list containers or open one.
    #[default]
    MainMenu,
    /// Per-container menu: blob and metadata operations.
    ContainerMenu,
    /// Session is shutting down.
    Exiting,
}

impl MenuState {
    /// Check if transition to the target state is valid.
    ///
    /// Valid transitions:
    /// - MainMenu -> ContainerMenu
    /// - MainMenu -> Exiting
    /// - ContainerMenu -> MainMenu
    /// - ContainerMenu -> Exiting
    pub fn can_transition_to(&self, target: MenuState) -> bool {
        use MenuState::*;
        matches!(
            (*self, target),
            (MainMenu, ContainerMenu)
                | (MainMenu, Exiting)
                | (ContainerMenu, MainMenu)
                | (ContainerMenu, Exiting)
        )
    }

    /// Attempt to transition to a new state.
    ///
    /// Returns `Ok(())` if the transition is valid, or an error otherwise.
    pub fn transition_to(&mut self, target: MenuState) -> crate::Result<()> {
        if self.can_transition_to(target) {
            *self = target;
            Ok(())
        } else {
            Err(crate::error::BlobConsoleError::InvalidTransition {
                from: *self,
                to: target,
            })
        }
    }

    /// Check if this is a terminal state (no further transitions possible).
    pub fn is_terminal(&self) -> bool {
        matches!(self, MenuState::Exiting)
    }
}
