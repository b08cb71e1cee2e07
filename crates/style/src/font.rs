use serde::{Deserialize, Deserializer, Serialize, de};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, Default)]
pub enum FontStyle {
    Regular,
    #[default]
    Bold,
    Italic,
    BoldItalic,
}

impl FontStyle {
    fn parse(s: &str) -> Result<Self, String> {
        match s.to_ascii_lowercase().as_str() {
            "regular" | "normal" => Ok(FontStyle::Regular),
            "bold" => Ok(FontStyle::Bold),
            "italic" => Ok(FontStyle::Italic),
            "bolditalic" | "bold-italic" => Ok(FontStyle::BoldItalic),
            _ => Err(format!("Invalid font style: '{}'", s)),
        }
    }
}

impl<'de> Deserialize<'de> for FontStyle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        FontStyle::parse(&s).map_err(de::Error::custom)
    }
}

/// Typeface configuration for text fragments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FontOptions {
    pub family: String,
    pub style: FontStyle,
    /// Explicit glyph height in mm. When unset, text scales to the line
    /// height and participates in downscaling like everything else. Setting
    /// it pins the size and can deliberately force overflow.
    pub height_mm: Option<f32>,
}

impl Default for FontOptions {
    fn default() -> Self {
        Self {
            family: "Futura".to_string(),
            style: FontStyle::Bold,
            height_mm: None,
        }
    }
}

impl FontOptions {
    /// The glyph height to request for a line of the given height.
    pub fn allowed_height(&self, line_height: f32) -> f32 {
        match self.height_mm {
            Some(fixed) => fixed,
            None => line_height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_height_overrides_line_height() {
        let free = FontOptions::default();
        assert_eq!(free.allowed_height(8.0), 8.0);

        let pinned = FontOptions {
            height_mm: Some(5.0),
            ..Default::default()
        };
        assert_eq!(pinned.allowed_height(8.0), 5.0);
    }
}
