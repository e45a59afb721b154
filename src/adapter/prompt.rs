//! Dialoguer-backed confirmation surface.

use dialoguer::{theme::ColorfulTheme, Confirm};

use crate::error::Result;
use crate::port::ConfirmSurface;

/// Terminal stand-in for the host's modal alert dialog.
pub struct DialoguerConfirm;

impl ConfirmSurface for DialoguerConfirm {
    fn confirm(&self, title: &str, message: &str, destructive: bool) -> Result<bool> {
        println!();
        println!("{title}");
        let answer = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(message)
            // Destructive actions default to "no" so a stray return is safe.
            .default(!destructive)
            .interact()?;
        Ok(answer)
    }
}
