//! Maps directive names to fragment constructors.
//!
//! The registry is an explicit value passed through the render session, not
//! module-level state. Factories validate arity and argument shape at
//! construction time, so a bad directive fails before any geometry work.

use crate::LabelError;
use crate::fragments::{
    BoltFragment, BoxFragment, ColorFragment, ExpandingFragment, Fragment, FragmentError,
    HeadFragment, MeasureFragment, NamedFragment, ScaleFragment, SymbolFragment,
    WebbBoltFragment,
};
use crate::parser::SpecError;
use labelforge_traits::SymbolCatalog;
use std::collections::HashMap;
use std::sync::Arc;

type Factory =
    Box<dyn Fn(&[String], &dyn SymbolCatalog) -> Result<Box<dyn Fragment>, FragmentError> + Send + Sync>;

struct FragmentKind {
    names: Vec<&'static str>,
    description: &'static str,
    examples: Vec<&'static str>,
    factory: Factory,
}

/// One row of the fragment description table, for documentation tooling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentDescription {
    pub names: Vec<String>,
    pub description: String,
    pub examples: Vec<String>,
}

pub struct Registry {
    kinds: Vec<Arc<FragmentKind>>,
    by_name: HashMap<&'static str, Arc<FragmentKind>>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            kinds: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    /// Register a fragment kind under one or more names.
    pub fn register(
        &mut self,
        names: &[&'static str],
        description: &'static str,
        examples: &[&'static str],
        factory: Factory,
    ) {
        let kind = Arc::new(FragmentKind {
            names: names.to_vec(),
            description,
            examples: examples.to_vec(),
            factory,
        });
        for name in names {
            self.by_name.insert(name, kind.clone());
        }
        self.kinds.push(kind);
    }

    /// Construct a fragment by directive name. Unknown names are syntax
    /// errors; factories report their own argument problems.
    pub fn construct(
        &self,
        name: &str,
        args: &[String],
        catalog: &dyn SymbolCatalog,
    ) -> Result<Box<dyn Fragment>, LabelError> {
        let kind = self
            .by_name
            .get(name)
            .ok_or_else(|| SpecError::UnknownFragment(name.to_string()))?;
        Ok((kind.factory)(args, catalog)?)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Collection of information about registered fragments, usable for
    /// generating fragment help and automatic documentation.
    pub fn description_table(&self) -> Vec<FragmentDescription> {
        let mut rows: Vec<FragmentDescription> = self
            .kinds
            .iter()
            .map(|kind| {
                let mut names: Vec<String> = kind.names.iter().map(|n| n.to_string()).collect();
                names.sort();
                FragmentDescription {
                    names,
                    description: kind.description.to_string(),
                    examples: kind.examples.iter().map(|e| e.to_string()).collect(),
                }
            })
            .collect();
        rows.push(FragmentDescription {
            names: vec!["1".to_string(), "4.2".to_string(), "...".to_string()],
            description: "A gap of specific width, in mm.".to_string(),
            examples: vec!["]{12.5}[".to_string()],
        });
        rows.sort_by(|a, b| a.names[0].cmp(&b.names[0]));
        rows
    }

    /// The registry with every built-in fragment kind.
    pub fn builtin() -> Self {
        let mut registry = Self::new();

        registry.register(
            &["..."],
            "Blank area that always expands to fill available space. If specified multiple \
             times, the areas will be balanced between entries. This can be used to \
             justify/align text.",
            &["L{...}R"],
            Box::new(|args, _| {
                crate::fragments::expect_no_args("...", args)?;
                Ok(Box::new(ExpandingFragment))
            }),
        );

        registry.register(
            &["<", ">"],
            "Only used at the start of a single label or column. Specifies that all lines in \
             the area should be left or right aligned. Invalid when specified elsewhere.",
            &["{<}Left\nLines", "{>}Right"],
            Box::new(|_, _| Err(FragmentError::MisplacedAlignment)),
        );

        registry.register(
            &["|"],
            "Denotes a column edge, where the label should be split. You can specify relative \
             proportions for the columns, as well as specifying the column alignment.",
            &["Left{|}Right", "{2|1}"],
            Box::new(|_, _| Err(FragmentError::MisplacedDivider)),
        );

        registry.register(
            &["measure"],
            "Fills as much area as possible with a dimension line, and shows the length. \
             Useful for debugging.",
            &["{measure}A{measure}", "{bolt(10)}{measure}"],
            Box::new(|args, _| {
                crate::fragments::expect_no_args("measure", args)?;
                Ok(Box::new(MeasureFragment))
            }),
        );

        registry.register(
            &["box"],
            "Arbitrary width, height centered box. If height is not specified, will expand to \
             row height.",
            &["{box(35)}"],
            Box::new(|args, _| Ok(Box::new(BoxFragment::from_args(args)?))),
        );

        registry.register(
            &["bolt"],
            "Variable length bolt, in the style of Printables pred-box labels. If the \
             requested bolt is longer than the available space, then the bolt will be as \
             large as possible with a broken thread.",
            &["{bolt(10)}", "{bolt(16,countersunk,slotted)}"],
            Box::new(|args, _| Ok(Box::new(BoltFragment::from_args(args)?))),
        );

        registry.register(
            &["webbolt"],
            "Alternate bolt representation incorporating screw drive, with fixed length.",
            &["{webbolt(pozi)}"],
            Box::new(|args, _| Ok(Box::new(WebbBoltFragment::from_args(args)?))),
        );

        registry.register(
            &["head"],
            "Screw head with specifiable head-shape.",
            &["{head(hex)}", "{head(phillips,slot)}"],
            Box::new(|args, _| Ok(Box::new(HeadFragment::head(args)?))),
        );

        registry.register(
            &["hexhead"],
            "Hexagonal screw head. Will accept drives, but not compulsory.",
            &["{hexhead}"],
            Box::new(|args, _| Ok(Box::new(HeadFragment::hexhead(args)?))),
        );

        registry.register(
            &["symbol", "sym"],
            "Render an electronic symbol.",
            &["{symbol(res)}", "{sym(ieee,capacitor)}"],
            Box::new(|args, catalog| Ok(Box::new(SymbolFragment::from_args(args, catalog)?))),
        );

        registry.register(
            &["color"],
            "Sets the color for the rest of the line.",
            &["{color(red)}M3", "{color(#80ff80)}"],
            Box::new(|args, _| Ok(Box::new(ColorFragment::from_args(args)?))),
        );

        registry.register(
            &["scale"],
            "Scales the rest of the line relative to the line height.",
            &["{scale(0.5)}fine print"],
            Box::new(|args, _| Ok(Box::new(ScaleFragment::from_args(args)?))),
        );

        let named: &[(&[&'static str], &'static str, &[&'static str], Option<f32>)] = &[
            (
                &["hexnut", "nut"],
                "Hexagonal outer profile nut with circular cutout.",
                &["{nut}"],
                None,
            ),
            (
                &["washer"],
                "Circular washer with a circular hole.",
                &["{washer}"],
                None,
            ),
            (
                &["lockwasher"],
                "Circular washer with a locking cutout.",
                &["{lockwasher}"],
                None,
            ),
            (&["circle"], "A filled circle.", &["{circle}"], None),
            (
                &["threaded_insert"],
                "Representation of a threaded insert.",
                &["{threaded_insert}"],
                None,
            ),
            (
                &["magnet"],
                "Horseshoe shaped magnet symbol.",
                &["{magnet}"],
                None,
            ),
            (
                &["variable_resistor"],
                "Electrical symbol of a variable resistor.",
                &["{variable_resistor}"],
                Some(1.5),
            ),
        ];
        for (names, description, examples, overheight) in named {
            let canonical = names[0];
            let factor = *overheight;
            registry.register(
                names,
                description,
                examples,
                Box::new(move |args, _| Ok(Box::new(NamedFragment::new(canonical, factor, args)?))),
            );
        }

        registry
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}
