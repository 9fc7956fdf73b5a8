//! Embedded Font Awesome icon catalog.
//!
//! The icon web service serves the Font Awesome 4 set; this table mirrors the
//! glyph names it knows about so the `icons` command can filter and sample
//! without a network round-trip.

use rand::seq::SliceRandom;

/// The font identifier the icon service uses for this catalog.
pub const FONT_AWESOME: &str = "fontawesome";

/// Glyph names from the Font Awesome 4 set, in service spelling.
pub const ICONS: &[&str] = &[
    "adjust",
    "adn",
    "align-center",
    "align-justify",
    "align-left",
    "align-right",
    "ambulance",
    "anchor",
    "android",
    "angellist",
    "angle-double-down",
    "angle-double-left",
    "angle-double-right",
    "angle-double-up",
    "angle-down",
    "angle-left",
    "angle-right",
    "angle-up",
    "apple",
    "archive",
    "area-chart",
    "arrow-circle-down",
    "arrow-circle-left",
    "arrow-circle-right",
    "arrow-circle-up",
    "arrow-down",
    "arrow-left",
    "arrow-right",
    "arrow-up",
    "arrows",
    "arrows-alt",
    "arrows-h",
    "arrows-v",
    "asterisk",
    "at",
    "backward",
    "ban",
    "bar-chart",
    "barcode",
    "bars",
    "beer",
    "behance",
    "behance-square",
    "bell",
    "bell-o",
    "bell-slash",
    "bell-slash-o",
    "bicycle",
    "binoculars",
    "birthday-cake",
    "bitbucket",
    "bitbucket-square",
    "bold",
    "bolt",
    "bomb",
    "book",
    "bookmark",
    "bookmark-o",
    "briefcase",
    "btc",
    "bug",
    "building",
    "building-o",
    "bullhorn",
    "bullseye",
    "bus",
    "calculator",
    "calendar",
    "calendar-o",
    "camera",
    "camera-retro",
    "car",
    "caret-down",
    "caret-left",
    "caret-right",
    "caret-square-o-down",
    "caret-square-o-left",
    "caret-square-o-right",
    "caret-square-o-up",
    "caret-up",
    "cc",
    "cc-amex",
    "cc-discover",
    "cc-mastercard",
    "cc-paypal",
    "cc-stripe",
    "cc-visa",
    "certificate",
    "chain-broken",
    "check",
    "check-circle",
    "check-circle-o",
    "check-square",
    "check-square-o",
    "chevron-circle-down",
    "chevron-circle-left",
    "chevron-circle-right",
    "chevron-circle-up",
    "chevron-down",
    "chevron-left",
    "chevron-right",
    "chevron-up",
    "child",
    "circle",
    "circle-o",
    "circle-o-notch",
    "circle-thin",
    "clipboard",
    "clock-o",
    "cloud",
    "cloud-download",
    "cloud-upload",
    "code",
    "code-fork",
    "codepen",
    "coffee",
    "cog",
    "cogs",
    "columns",
    "comment",
    "comment-o",
    "comments",
    "comments-o",
    "compass",
    "compress",
    "copyright",
    "credit-card",
    "crop",
    "crosshairs",
    "css3",
    "cube",
    "cubes",
    "cutlery",
    "database",
    "delicious",
    "desktop",
    "deviantart",
    "diamond",
    "digg",
    "dot-circle-o",
    "download",
    "dribbble",
    "dropbox",
    "drupal",
    "eject",
    "ellipsis-h",
    "ellipsis-v",
    "empire",
    "envelope",
    "envelope-o",
    "envelope-square",
    "eraser",
    "eur",
    "exchange",
    "exclamation",
    "exclamation-circle",
    "exclamation-triangle",
    "expand",
    "external-link",
    "external-link-square",
    "eye",
    "eye-slash",
    "eyedropper",
    "facebook",
    "facebook-square",
    "fast-backward",
    "fast-forward",
    "fax",
    "female",
    "fighter-jet",
    "file",
    "file-archive-o",
    "file-audio-o",
    "file-code-o",
    "file-excel-o",
    "file-image-o",
    "file-o",
    "file-pdf-o",
    "file-powerpoint-o",
    "file-text",
    "file-text-o",
    "file-video-o",
    "file-word-o",
    "film",
    "filter",
    "fire",
    "fire-extinguisher",
    "flag",
    "flag-checkered",
    "flag-o",
    "flask",
    "flickr",
    "floppy-o",
    "folder",
    "folder-o",
    "folder-open",
    "folder-open-o",
    "font",
    "forward",
    "foursquare",
    "frown-o",
    "futbol-o",
    "gamepad",
    "gavel",
    "gbp",
    "gift",
    "git",
    "git-square",
    "github",
    "github-alt",
    "github-square",
    "glass",
    "globe",
    "google",
    "google-plus",
    "google-plus-square",
    "google-wallet",
    "graduation-cap",
    "h-square",
    "hacker-news",
    "hand-o-down",
    "hand-o-left",
    "hand-o-right",
    "hand-o-up",
    "hdd-o",
    "header",
    "headphones",
    "heart",
    "heart-o",
    "history",
    "home",
    "hospital-o",
    "html5",
    "ils",
    "inbox",
    "indent",
    "info",
    "info-circle",
    "inr",
    "instagram",
    "italic",
    "joomla",
    "jpy",
    "jsfiddle",
    "key",
    "keyboard-o",
    "krw",
    "language",
    "laptop",
    "lastfm",
    "leaf",
    "lemon-o",
    "level-down",
    "level-up",
    "life-ring",
    "lightbulb-o",
    "line-chart",
    "link",
    "linkedin",
    "linkedin-square",
    "linux",
    "list",
    "list-alt",
    "list-ol",
    "list-ul",
    "location-arrow",
    "lock",
    "long-arrow-down",
    "long-arrow-left",
    "long-arrow-right",
    "long-arrow-up",
    "magic",
    "magnet",
    "male",
    "map-marker",
    "meh-o",
    "microphone",
    "minus",
    "minus-circle",
    "minus-square",
    "mobile",
    "money",
    "moon-o",
    "music",
    "newspaper-o",
    "outdent",
    "paint-brush",
    "paper-plane",
    "paperclip",
    "paragraph",
    "paste",
    "pause",
    "paw",
    "pencil",
    "pencil-square",
    "phone",
    "picture-o",
    "pie-chart",
    "pinterest",
    "plane",
    "play",
    "plug",
    "plus",
    "plus-circle",
    "plus-square",
    "power-off",
    "print",
    "puzzle-piece",
    "qrcode",
    "question",
    "question-circle",
    "quote-left",
    "quote-right",
    "random",
    "recycle",
    "reddit",
    "refresh",
    "repeat",
    "reply",
    "retweet",
    "road",
    "rocket",
    "rss",
    "rub",
    "scissors",
    "search",
    "search-minus",
    "search-plus",
    "share",
    "shield",
    "shopping-cart",
    "sign-in",
    "sign-out",
    "signal",
    "sitemap",
    "skype",
    "sliders",
    "smile-o",
    "sort",
    "spinner",
    "spoon",
    "square",
    "star",
    "star-half",
    "star-o",
    "steam",
    "stop",
    "strikethrough",
    "subscript",
    "suitcase",
    "sun-o",
    "superscript",
    "table",
    "tablet",
    "tag",
    "tags",
    "tasks",
    "taxi",
    "terminal",
    "text-height",
    "text-width",
    "th",
    "th-large",
    "th-list",
    "thumb-tack",
    "thumbs-down",
    "thumbs-up",
    "ticket",
    "times",
    "times-circle",
    "tint",
    "train",
    "trash",
    "tree",
    "trello",
    "trophy",
    "truck",
    "tty",
    "twitter",
    "umbrella",
    "underline",
    "undo",
    "university",
    "unlock",
    "upload",
    "usd",
    "user",
    "user-md",
    "users",
    "video-camera",
    "vimeo-square",
    "vine",
    "volume-down",
    "volume-off",
    "volume-up",
    "wechat",
    "wheelchair",
    "wifi",
    "windows",
    "wrench",
    "youtube",
];

/// Sample `n` distinct icon names uniformly at random.
///
/// Returns fewer than `n` names only if the catalog itself is smaller.
pub fn random_sample(n: usize) -> Vec<&'static str> {
    let mut rng = rand::thread_rng();
    ICONS.choose_multiple(&mut rng, n).copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_is_large_and_unique() {
        assert!(ICONS.len() > 300, "catalog too small: {}", ICONS.len());
        let unique: HashSet<_> = ICONS.iter().collect();
        assert_eq!(unique.len(), ICONS.len(), "catalog contains duplicates");
    }

    #[test]
    fn catalog_names_are_service_safe() {
        // Names become URL path segments; keep them lowercase ASCII + hyphen + digits.
        for name in ICONS {
            assert!(
                name.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "unexpected character in icon name: {name}"
            );
        }
    }

    #[test]
    fn random_sample_is_distinct() {
        let sample = random_sample(5);
        assert_eq!(sample.len(), 5);
        let unique: HashSet<_> = sample.iter().collect();
        assert_eq!(unique.len(), 5);
        for name in sample {
            assert!(ICONS.contains(&name));
        }
    }

    #[test]
    fn random_sample_caps_at_catalog_size() {
        let sample = random_sample(ICONS.len() + 100);
        assert_eq!(sample.len(), ICONS.len());
    }
}
