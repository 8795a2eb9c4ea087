//! Request parameters shared by several sources
//!
//! Each parameter is a closed set of wire values. Sources narrow the set
//! further during validation (Yandex accepts only a handful of domains).

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ValidationError;

/// Declares a parameter enum with its wire names, `Display` and `FromStr`.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($param:literal) {
            $($(#[$vmeta:meta])* $variant:ident => $wire:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Every value of this parameter
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire value of this parameter
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    other => Err(ValidationError::invalid($param, other)),
                }
            }
        }
    };
}

wire_enum! {
    /// Top level domain of the scraped site
    #[derive(Default)]
    Domain ("domain") {
        #[default]
        Com => "com",
        Ru => "ru",
        Ua => "ua",
        By => "by",
        Kz => "kz",
        Tr => "tr",
        De => "de",
        Fr => "fr",
        Pl => "pl",
        CoUk => "co.uk",
    }
}

wire_enum! {
    /// Interface language requested from the scraped site
    Locale ("locale") {
        En => "en",
        Ru => "ru",
        By => "by",
        De => "de",
        Fr => "fr",
        Id => "id",
        Kk => "kk",
        Tt => "tt",
        Tr => "tr",
        Uk => "uk",
        Es => "es",
        It => "it",
        Pl => "pl",
        Ja => "ja",
    }
}

wire_enum! {
    /// Device type the remote service impersonates
    #[derive(Default)]
    UserAgent ("user agent") {
        #[default]
        Desktop => "desktop",
        DesktopChrome => "desktop_chrome",
        DesktopEdge => "desktop_edge",
        DesktopFirefox => "desktop_firefox",
        DesktopOpera => "desktop_opera",
        DesktopSafari => "desktop_safari",
        Mobile => "mobile",
        MobileAndroid => "mobile_android",
        MobileIos => "mobile_ios",
        Tablet => "tablet",
        TabletAndroid => "tablet_android",
        TabletIos => "tablet_ios",
    }
}

wire_enum! {
    /// JavaScript rendering mode
    Render ("render") {
        Html => "html",
        Png => "png",
    }
}
