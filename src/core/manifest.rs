use crate::domain::model::{Manifest, ManifestIcon};

const APP_NAME: &str = "शेतकरी कृषी सेवा केंद्र";
const APP_SHORT_NAME: &str = "शेतकरी ॲग्रो कृषी";
const APP_DESCRIPTION: &str =
    "कृषी उत्पादने, बियाणे, खते, संरक्षण साधने - भोसेपाटी ता. पंढरपूर जि. सोलापूर, महाराष्ट्र";
pub const THEME_COLOR: &str = "#177B3B";

const ICONS: [(&str, &str); 2] = [
    ("/android-chrome-192x192.png", "192x192"),
    ("/android-chrome-512x512.png", "512x512"),
];

/// The installable-app descriptor served at `/manifest.json`.
pub fn pwa_manifest() -> Manifest {
    Manifest {
        name: APP_NAME.to_string(),
        short_name: APP_SHORT_NAME.to_string(),
        description: APP_DESCRIPTION.to_string(),
        start_url: "/".to_string(),
        display: "standalone".to_string(),
        background_color: "#ffffff".to_string(),
        theme_color: THEME_COLOR.to_string(),
        icons: ICONS
            .iter()
            .map(|(src, sizes)| ManifestIcon {
                src: src.to_string(),
                sizes: sizes.to_string(),
                mime_type: "image/png".to_string(),
            })
            .collect(),
    }
}
