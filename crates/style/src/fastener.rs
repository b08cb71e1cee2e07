//! Vocabulary for fastener fragments: screw head shapes, drive recesses and
//! the shared feature-list parsing used by bolt-style fragments.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FastenerParseError {
    #[error("More than one head shape specified: {0}")]
    MultipleHeadShapes(String),

    #[error("Unknown drive type: '{0}'")]
    UnknownDrive(String),
}

/// Outer profile of a screw or bolt head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HeadShape {
    Countersunk,
    #[default]
    Pan,
    Round,
    Socket,
}

impl HeadShape {
    /// Recognize a head shape token, resolving aliases. Returns `None` for
    /// tokens that are not head shapes (they may still be drives/modifiers).
    pub fn parse(token: &str) -> Option<HeadShape> {
        match token {
            "countersunk" | "countersink" => Some(HeadShape::Countersunk),
            "pan" => Some(HeadShape::Pan),
            "round" => Some(HeadShape::Round),
            "socket" | "square" => Some(HeadShape::Socket),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            HeadShape::Countersunk => "countersunk",
            HeadShape::Pan => "pan",
            HeadShape::Round => "round",
            HeadShape::Socket => "socket",
        }
    }
}

/// Drive recess cut out of a screw head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Drive {
    Phillips,
    Pozidrive,
    Slot,
    Hex,
    Cross,
    Square,
    Triangle,
    Torx,
    Security,
    PhillipsSlot,
}

impl Drive {
    pub fn parse(token: &str) -> Result<Drive, FastenerParseError> {
        match token {
            "phillips" | "+" => Ok(Drive::Phillips),
            "pozidrive" | "posidrive" | "posi" | "pozi" => Ok(Drive::Pozidrive),
            "slot" | "-" => Ok(Drive::Slot),
            "hex" => Ok(Drive::Hex),
            "cross" => Ok(Drive::Cross),
            "square" => Ok(Drive::Square),
            "triangle" | "tri" => Ok(Drive::Triangle),
            "torx" => Ok(Drive::Torx),
            "security" => Ok(Drive::Security),
            "phillipsslot" => Ok(Drive::PhillipsSlot),
            other => Err(FastenerParseError::UnknownDrive(other.to_string())),
        }
    }

    pub fn parse_all<'a>(
        tokens: impl IntoIterator<Item = &'a str>,
    ) -> Result<Vec<Drive>, FastenerParseError> {
        tokens.into_iter().map(Drive::parse).collect()
    }
}

/// Common bolt/screw configuration shared by the bolt-style fragments:
/// exactly one head shape (defaulting to pan), optional modifiers, and
/// everything left over interpreted as drive recesses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoltFeatures {
    pub head: HeadShape,
    pub drives: Vec<Drive>,
    pub tapping: bool,
    pub flip: bool,
    pub partial: bool,
}

impl BoltFeatures {
    pub fn parse<'a>(
        tokens: impl IntoIterator<Item = &'a str>,
    ) -> Result<BoltFeatures, FastenerParseError> {
        let mut heads: Vec<HeadShape> = Vec::new();
        let mut head_tokens: Vec<String> = Vec::new();
        let mut tapping = false;
        let mut flip = false;
        let mut partial = false;
        let mut drives = Vec::new();

        for raw in tokens {
            let token = raw.trim().to_ascii_lowercase();
            if token.is_empty() {
                continue;
            }
            if let Some(shape) = HeadShape::parse(&token) {
                if !heads.contains(&shape) {
                    heads.push(shape);
                    head_tokens.push(token);
                }
                continue;
            }
            match token.as_str() {
                "tapping" | "tap" | "tapped" => tapping = true,
                "flip" | "flipped" => flip = true,
                "partial" => partial = true,
                _ => drives.push(Drive::parse(&token)?),
            }
        }

        if heads.len() > 1 {
            return Err(FastenerParseError::MultipleHeadShapes(
                head_tokens.join(", "),
            ));
        }

        Ok(BoltFeatures {
            head: heads.first().copied().unwrap_or_default(),
            drives,
            tapping,
            flip,
            partial,
        })
    }
}
