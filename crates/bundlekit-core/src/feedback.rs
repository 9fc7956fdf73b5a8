//! Script-filter feedback sent back to the launcher.
//!
//! Filter-style commands print a single JSON document of the form
//! `{"items":[...]}` on stdout; the launcher renders one row per item.
//! Actionable items carry an `arg` the launcher passes to the follow-up
//! command when the user selects the row.

use serde::Serialize;
use std::path::PathBuf;

/// One result row.
#[derive(Debug, Clone, Serialize)]
pub struct Item {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arg: Option<String>,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
}

/// Icon image shown next to an item.
#[derive(Debug, Clone, Serialize)]
pub struct Icon {
    pub path: PathBuf,
}

impl Item {
    /// A display-only item: not actionable until configured otherwise.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            arg: None,
            valid: false,
            icon: None,
        }
    }

    /// A non-actionable warning row shown instead of an empty list.
    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(title)
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Sets the argument passed on selection and marks the item actionable.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.arg = Some(arg.into());
        self.valid = true;
        self
    }

    pub fn icon(mut self, path: impl Into<PathBuf>) -> Self {
        self.icon = Some(Icon { path: path.into() });
        self
    }
}

/// The full feedback document.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Feedback {
    pub items: Vec<Item>,
}

impl Feedback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Serialize to the JSON document the launcher expects.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_only_item_is_invalid() {
        let item = Item::new("14:02 Europe/Berlin");
        assert!(!item.valid);
        assert!(item.arg.is_none());
    }

    #[test]
    fn arg_marks_item_actionable() {
        let item = Item::new("adjust").arg("adjust|fontawesome|444444");
        assert!(item.valid);
        assert_eq!(item.arg.as_deref(), Some("adjust|fontawesome|444444"));
    }

    #[test]
    fn feedback_json_contract() {
        let mut fb = Feedback::new();
        fb.push(
            Item::new("adjust")
                .subtitle("Font Awesome // #444444")
                .arg("adjust|fontawesome|444444")
                .icon("/tmp/icons/adjust.png"),
        );
        fb.push(Item::warning("No matching icons"));
        insta::assert_snapshot!(
            fb.to_json().unwrap(),
            @r#"{"items":[{"title":"adjust","subtitle":"Font Awesome // #444444","arg":"adjust|fontawesome|444444","valid":true,"icon":{"path":"/tmp/icons/adjust.png"}},{"title":"No matching icons","valid":false}]}"#
        );
    }

    #[test]
    fn optional_fields_are_omitted() {
        let mut fb = Feedback::new();
        fb.push(Item::new("plain"));
        let json = fb.to_json().unwrap();
        assert!(!json.contains("subtitle"));
        assert!(!json.contains("icon"));
        assert!(!json.contains("arg"));
    }
}
