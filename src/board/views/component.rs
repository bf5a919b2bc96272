//! Contract shared by every board view.

use super::RenderError;

/// A view that is configured once and can render its content.
pub trait Component {
    /// Wires the view to its collaborators.
    ///
    /// Called once by [`mount`]; calling it again has no further effect.
    fn configure(&mut self) {}

    /// Renders the view's current content as markup.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] when a template fails to render.
    fn render_content(&self) -> Result<String, RenderError>;
}

/// Configures `view` and renders its initial content.
///
/// # Errors
///
/// Returns [`RenderError`] when the initial render fails.
pub fn mount<V>(view: &mut V) -> Result<String, RenderError>
where
    V: Component + ?Sized,
{
    view.configure();
    view.render_content()
}
