//! Package manager tips.

use crate::host::Platform;

const WINDOWS_TIP: &str = "To avoid setting up the necessary environment variables, you can use the chocolatey package manager to install the Android SDK and its dependencies.";
const DARWIN_TIP: &str = "To avoid setting up the necessary environment variables, you can use the Homebrew package manager to install the Android SDK and its dependencies.";

/// The package manager tip for a platform, if it has one.
///
/// Depends on the platform alone, never on detected capabilities.
pub fn package_manager_tip(platform: Platform) -> Option<&'static str> {
    match platform {
        Platform::Windows => Some(WINDOWS_TIP),
        Platform::Darwin => Some(DARWIN_TIP),
        Platform::Other => None,
    }
}
