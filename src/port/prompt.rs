//! Interactive confirmation port.

use crate::error::Result;

/// Modal confirmation surface for destructive actions.
pub trait ConfirmSurface {
    /// Present a yes/no prompt. `destructive` marks the affirmative action
    /// as dangerous so surfaces can default to "no".
    fn confirm(&self, title: &str, message: &str, destructive: bool) -> Result<bool>;
}
