//! Bolt-style fragments: variable-length bolts, fixed-aspect webb bolts and
//! bare screw heads. These validate their feature lists at construction time
//! and delegate geometry to the backend as structured requests.

use super::{Fragment, FragmentError, render_shape};
use crate::LabelError;
use crate::elements::RenderedFragment;
use crate::session::{RenderSession, StyleContext};
use labelforge_style::{BoltFeatures, Drive};
use labelforge_traits::ShapeRequest;

/// Variable length bolt, in the style of pred-box labels.
///
/// If the requested bolt is longer than the available space, the backend
/// draws it as large as possible with a broken thread.
#[derive(Debug, Clone)]
pub struct BoltFragment {
    length: f32,
    features: BoltFeatures,
    slotted: bool,
    flanged: bool,
}

impl BoltFragment {
    pub fn from_args(args: &[String]) -> Result<Self, FragmentError> {
        let Some((length_arg, feature_args)) = args.split_first() else {
            return Err(FragmentError::WrongArity {
                name: "bolt".to_string(),
                expected: "at least 1 (length)".to_string(),
                got: 0,
            });
        };
        let length: f32 =
            length_arg
                .parse()
                .map_err(|_| FragmentError::InvalidArgument {
                    name: "bolt".to_string(),
                    message: format!("length '{}' is not a number", length_arg),
                })?;

        let mut slotted = false;
        let mut flanged = false;
        let mut rest: Vec<&str> = Vec::new();
        for arg in feature_args {
            match arg.to_ascii_lowercase().as_str() {
                "slotted" | "slot" => slotted = true,
                "flanged" | "flange" => flanged = true,
                _ => rest.push(arg.as_str()),
            }
        }

        Ok(Self {
            length,
            features: BoltFeatures::parse(rest)?,
            slotted,
            flanged,
        })
    }
}

impl Fragment for BoltFragment {
    fn render(
        &self,
        session: &RenderSession,
        style: &StyleContext,
        height: f32,
        max_width: f32,
    ) -> Result<RenderedFragment, LabelError> {
        let request = ShapeRequest::Bolt {
            length: self.length,
            features: self.features.clone(),
            slotted: self.slotted,
            flanged: self.flanged,
        };
        render_shape(session, style, &request, height, max_width)
    }

    fn variable_width(&self) -> bool {
        true
    }

    fn min_width(&self, height: f32) -> f32 {
        height
    }
}

/// Alternate bolt representation incorporating its screw drive, with fixed
/// length. Renders taller than the line; the layout compensates.
#[derive(Debug, Clone)]
pub struct WebbBoltFragment {
    features: BoltFeatures,
}

impl WebbBoltFragment {
    pub const OVERHEIGHT: f32 = 1.6;

    pub fn from_args(args: &[String]) -> Result<Self, FragmentError> {
        let features = BoltFeatures::parse(args.iter().map(String::as_str))?;
        Ok(Self { features })
    }
}

impl Fragment for WebbBoltFragment {
    fn render(
        &self,
        session: &RenderSession,
        style: &StyleContext,
        height: f32,
        max_width: f32,
    ) -> Result<RenderedFragment, LabelError> {
        let request = ShapeRequest::Webbolt {
            features: self.features.clone(),
        };
        // Natural size exceeds the handed-down height by the overheight
        // factor; the line fitter has already shrunk the working height.
        render_shape(
            session,
            style,
            &request,
            height * Self::OVERHEIGHT,
            max_width,
        )
    }

    fn overheight(&self) -> Option<f32> {
        Some(Self::OVERHEIGHT)
    }
}

/// Screw head with a specifiable set of drive recesses: `{head(...)}` needs
/// at least one drive, `{hexhead(...)}` accepts none.
#[derive(Debug, Clone)]
pub struct HeadFragment {
    name: &'static str,
    drives: Vec<Drive>,
}

impl HeadFragment {
    pub fn head(args: &[String]) -> Result<Self, FragmentError> {
        if args.is_empty() {
            return Err(FragmentError::WrongArity {
                name: "head".to_string(),
                expected: "at least 1 drive".to_string(),
                got: 0,
            });
        }
        Ok(Self {
            name: "head",
            drives: parse_drives(args)?,
        })
    }

    pub fn hexhead(args: &[String]) -> Result<Self, FragmentError> {
        Ok(Self {
            name: "hexhead",
            drives: parse_drives(args)?,
        })
    }
}

fn parse_drives(args: &[String]) -> Result<Vec<Drive>, FragmentError> {
    Ok(Drive::parse_all(
        args.iter().map(|a| a.trim()).filter(|a| !a.is_empty()),
    )?)
}

impl Fragment for HeadFragment {
    fn render(
        &self,
        session: &RenderSession,
        style: &StyleContext,
        height: f32,
        max_width: f32,
    ) -> Result<RenderedFragment, LabelError> {
        let request = ShapeRequest::Named {
            name: self.name.to_string(),
            drives: self.drives.clone(),
        };
        render_shape(session, style, &request, height, max_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use labelforge_style::HeadShape;

    #[test]
    fn bolt_requires_a_numeric_length() {
        assert!(matches!(
            BoltFragment::from_args(&[]).unwrap_err(),
            FragmentError::WrongArity { .. }
        ));
        assert!(matches!(
            BoltFragment::from_args(&["long".to_string()]).unwrap_err(),
            FragmentError::InvalidArgument { .. }
        ));
    }

    #[test]
    fn bolt_consumes_slotted_and_flanged_flags() {
        let bolt = BoltFragment::from_args(&[
            "12".to_string(),
            "slotted".to_string(),
            "flange".to_string(),
            "countersunk".to_string(),
        ])
        .unwrap();
        assert!(bolt.slotted);
        assert!(bolt.flanged);
        assert_eq!(bolt.features.head, HeadShape::Countersunk);
    }

    #[test]
    fn conflicting_head_shapes_fail_construction() {
        let err = BoltFragment::from_args(&[
            "10".to_string(),
            "pan".to_string(),
            "socket".to_string(),
        ])
        .unwrap_err();
        assert!(matches!(err, FragmentError::Fastener(_)));
    }

    #[test]
    fn head_requires_a_drive_but_hexhead_does_not() {
        assert!(HeadFragment::head(&[]).is_err());
        assert!(HeadFragment::hexhead(&[]).is_ok());
        let head = HeadFragment::head(&["+".to_string()]).unwrap();
        assert_eq!(head.drives, vec![Drive::Phillips]);
    }

    #[test]
    fn webbolt_declares_overheight() {
        let webbolt = WebbBoltFragment::from_args(&[]).unwrap();
        assert_eq!(webbolt.overheight(), Some(1.6));
    }
}
