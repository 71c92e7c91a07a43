use serde::{Deserialize, Serialize};

use crate::entities::Coordinates;
use crate::entities::CoordinateError;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub id: String,
    // may carry inline markup from the search provider
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mapx: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mapy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub road_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blogger_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Place {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_coordinates(mut self, mapx: impl Into<String>, mapy: impl Into<String>) -> Self {
        self.mapx = Some(mapx.into());
        self.mapy = Some(mapy.into());
        self
    }

    /// True when both raw coordinate strings are present and non-blank.
    pub fn has_coordinates(&self) -> bool {
        raw_present(&self.mapx) && raw_present(&self.mapy)
    }

    /// Decodes `mapx`/`mapy`. `Ok(None)` when either is absent or blank.
    pub fn coordinates(&self) -> Result<Option<Coordinates>, CoordinateError> {
        match (&self.mapx, &self.mapy) {
            (Some(x), Some(y)) if !x.trim().is_empty() && !y.trim().is_empty() => {
                Coordinates::decode(x, y).map(Some)
            }
            _ => Ok(None),
        }
    }

    /// Title with `<...>` markup removed, as shown in lists and compared for similarity.
    pub fn plain_title(&self) -> String {
        strip_tags(&self.title)
    }
}

fn raw_present(raw: &Option<String>) -> bool {
    raw.as_deref().map_or(false, |s| !s.trim().is_empty())
}

/// Removes anything that looks like a markup tag. An unterminated `<` swallows the rest of the
/// input.
pub fn strip_tags(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '<' {
            let is_tag = matches!(chars.peek(), Some(&n) if n != '>');
            if is_tag {
                for n in chars.by_ref() {
                    if n == '>' {
                        break;
                    }
                }
                continue;
            }
        }
        out.push(c);
    }

    out.trim().to_string()
}
