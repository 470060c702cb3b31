use std::sync::Arc;

use littlespoon_shared::Result;

use crate::{AppState, Command};

/// Owner of the current [`AppState`].
///
/// `dispatch` needs `&mut self`, so there is exactly one writer. Readers take
/// a [`snapshot`](Store::snapshot) and keep it as long as they like; later
/// commands swap in a new state and never touch one already handed out.
#[derive(Clone, Debug)]
pub struct Store {
    state: Arc<AppState>,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self {
            state: Arc::new(state),
        }
    }

    pub fn snapshot(&self) -> Arc<AppState> {
        self.state.clone()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Applies one command. On error the current state is kept.
    pub fn dispatch(&mut self, command: Command) -> Result<Arc<AppState>> {
        let name = command.as_ref().to_owned();

        match self.state.apply(command) {
            Ok(next) => {
                self.state = Arc::new(next);
                tracing::debug!(command = %name, "command applied");

                Ok(self.state.clone())
            }
            Err(err) => {
                tracing::warn!(command = %name, error = %err, "command rejected");

                Err(err)
            }
        }
    }

    pub fn dispatch_all(&mut self, commands: impl IntoIterator<Item = Command>) -> Result<Arc<AppState>> {
        for command in commands {
            self.dispatch(command)?;
        }

        Ok(self.snapshot())
    }
}
