//! Boundary with the image-understanding service.
//!
//! The service itself (transport, auth, image encoding) lives outside this
//! crate. Callers send it [`instruction`] together with a screenshot and pass
//! the returned text to [`ContactStore::add_transcript`].
//!
//! [`ContactStore::add_transcript`]: crate::store::ContactStore::add_transcript

use contactkit_shared::AppConfig;

pub use contactkit_shared::DEFAULT_INSTRUCTION;

/// The instruction to send, honoring a configured override.
///
/// A blank configured instruction falls back to [`DEFAULT_INSTRUCTION`].
pub fn instruction(config: &AppConfig) -> &str {
    let configured = config.transcript.instruction.trim();
    if configured.is_empty() {
        DEFAULT_INSTRUCTION
    } else {
        configured
    }
}
