use std::path::PathBuf;
use std::sync::LazyLock;

/// Sign-in page patched by `fix_errors`, relative to the web client checkout
pub static PATH_AUTH_PAGE: LazyLock<PathBuf> =
    LazyLock::new(|| PathBuf::from("client/src/pages/AuthPage.tsx"));

pub static PATH_PROJECT_ROOT: LazyLock<PathBuf> =
    LazyLock::new(|| PathBuf::from("/Users/m1/Desktop/mining-club"));

pub static PATH_SPLASH_LOGO: LazyLock<PathBuf> =
    LazyLock::new(|| PATH_PROJECT_ROOT.join("client/public/attached_assets/App-Logo.png"));

pub static PATH_SPLASH_IMAGESET: LazyLock<PathBuf> = LazyLock::new(|| {
    PATH_PROJECT_ROOT.join("ios/App/App/Assets.xcassets/Splash.imageset")
});
