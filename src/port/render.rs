//! Widget render target port.

use crate::error::Result;
use crate::widget::WidgetModel;

/// Surface the composed widget is handed to.
///
/// The host decides what rendering means: a terminal preview, a JSON
/// document for a widget runner, or a real home-screen surface.
pub trait RenderTarget {
    fn render(&self, model: &WidgetModel) -> Result<()>;
}
