//! Archive markup sanitizer.
//!
//! Pure text passes that strip what the replay service injected into a saved
//! page. Each pass is independent and a no-op when its target is absent.

mod head;
mod scripts;
mod toolbar;

pub use head::{
    strip_injected_assets, strip_loader_block, strip_provenance_comment, strip_toolbar_height,
};
pub use scripts::strip_runtime_scripts;
pub use toolbar::{strip_toolbar, strip_toolbar_container};

/// Runs every sanitizing pass in a fixed order.
///
/// Removes the provenance comment, so the provenance mapping has to be built
/// from the unsanitized pages first.
pub fn sanitize(html: &str) -> String {
    let html = strip_loader_block(html);
    let html = strip_injected_assets(&html);
    let html = strip_runtime_scripts(&html);
    let html = strip_provenance_comment(&html);
    let html = strip_toolbar_height(&html);
    strip_toolbar(&html)
}
