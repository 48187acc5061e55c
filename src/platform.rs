//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for the send-from-anywhere shortcut
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SUBMIT_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SUBMIT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Send shortcut display for the form help text
/// Ctrl+S works on all platforms (Cmd+Enter/Ctrl+Enter also works)
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";
