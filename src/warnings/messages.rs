//! Headline and remediation text for each rule.

use crate::host::Persona;

use super::types::Capability;

const ANDROID_SDK_REQUIREMENTS_URL: &str =
    "http://developer.android.com/sdk/index.html#Requirements";
const ANT_MANUAL_URL: &str = "http://ant.apache.org/manual/index.html";
const JDK8_INSTALL_URL: &str =
    "http://docs.oracle.com/javase/8/docs/technotes/guides/install/install_overview.html";
const JDK7_INSTALL_URL: &str = "http://docs.oracle.com/javase/7/docs/webnotes/install/";
const APPLE_URL: &str = "http://www.apple.com";

/// One-line description of the missing capability.
pub fn headline(capability: Capability) -> &'static str {
    match capability {
        Capability::Adb => {
            "adb from the Android SDK is not installed or is not configured properly."
        }
        Capability::Ant => "Apache Ant is not installed or is not configured properly.",
        Capability::AndroidSdk => {
            "The Android SDK is not installed or is not configured properly."
        }
        Capability::Xcode => "Xcode is not installed or is not configured properly.",
        Capability::Itunes => "iTunes is not installed.",
        Capability::Java => {
            "The Java Development Kit (JDK) is not installed or is not configured properly."
        }
    }
}

/// Remediation guidance, worded for the running product.
pub fn detail(capability: Capability, persona: Persona) -> String {
    match capability {
        Capability::Adb => format!(
            "For Android-related operations, the {} will use a built-in version of adb.\n\
             To avoid possible issues with the native Android emulator, Genymotion or connected\n\
             Android devices, verify that you have installed the latest Android SDK and\n\
             its dependencies as described in {}",
            persona.product_name(),
            ANDROID_SDK_REQUIREMENTS_URL
        ),
        Capability::Ant => format!(
            "You will not be able to build your projects for Android.\n\
             To be able to build for Android, download and install Apache Ant and\n\
             its dependencies as described in {}",
            ANT_MANUAL_URL
        ),
        Capability::AndroidSdk => match persona {
            Persona::PrimaryProduct => format!(
                "You will not be able to build your projects for Android and run them in the native emulator.\n\
                 To be able to build for Android and run apps in the native emulator, verify that you have\n\
                 installed the latest Android SDK and its dependencies as described in {}",
                ANDROID_SDK_REQUIREMENTS_URL
            ),
            Persona::LegacyProduct => format!(
                "You will not be able to run your apps in the native emulator.\n\
                 To be able to run apps in the native Android emulator, verify that you have\n\
                 installed the latest Android SDK and its dependencies as described in {}",
                ANDROID_SDK_REQUIREMENTS_URL
            ),
        },
        Capability::Xcode => "You will not be able to build your projects for iOS or run them in the iOS Simulator.\n\
             To be able to build for iOS and run apps in the native emulator, verify that you have installed Xcode."
            .to_string(),
        Capability::Itunes => format!(
            "You will not be able to work with iOS devices via cable connection.\n\
             To be able to work with connected iOS devices,\n\
             download and install iTunes from {}",
            APPLE_URL
        ),
        Capability::Java => format!(
            "You will not be able to work with the Android SDK and you might not be able\n\
             to perform some Android-related operations. To be able to work with Android,\n\
             verify that you have installed the JDK as\n\
             described in {} (for JDK 8)\n\
             or {} (for JDK 7).",
            JDK8_INSTALL_URL, JDK7_INSTALL_URL
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Capability; 6] = [
        Capability::Adb,
        Capability::Ant,
        Capability::AndroidSdk,
        Capability::Xcode,
        Capability::Itunes,
        Capability::Java,
    ];

    #[test]
    fn headlines_are_single_line() {
        for capability in ALL {
            assert!(!headline(capability).contains('\n'), "{}", capability);
        }
    }

    #[test]
    fn details_are_multi_line() {
        for capability in ALL {
            for persona in Persona::ALL {
                assert!(detail(capability, persona).lines().count() > 1);
            }
        }
    }

    #[test]
    fn adb_detail_names_running_product() {
        let primary = detail(Capability::Adb, Persona::PrimaryProduct);
        let legacy = detail(Capability::Adb, Persona::LegacyProduct);
        assert!(primary.contains(Persona::PrimaryProduct.product_name()));
        assert!(legacy.contains(Persona::LegacyProduct.product_name()));
    }

    #[test]
    fn android_sdk_detail_differs_for_legacy() {
        let legacy = detail(Capability::AndroidSdk, Persona::LegacyProduct);
        assert!(!legacy.contains("build your projects"));
        assert!(legacy.contains(ANDROID_SDK_REQUIREMENTS_URL));
    }

    #[test]
    fn java_detail_links_both_jdks() {
        let text = detail(Capability::Java, Persona::PrimaryProduct);
        assert!(text.contains("JDK 8"));
        assert!(text.contains("JDK 7"));
    }
}
