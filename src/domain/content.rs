use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// What a descriptor renders as. Drives the collision shape's corner radius.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BodyKind {
    Card,
    Pill,
    Icon,
    #[serde(rename = "text")]
    TextChip,
}

impl BodyKind {
    /// Corner radius of the chamfered rectangle collision shape.
    /// Pills are fully rounded; the rest use small fixed radii.
    pub fn corner_radius(self, height: f32) -> f32 {
        match self {
            BodyKind::Pill => height / 2.0,
            BodyKind::Card => 10.0,
            BodyKind::Icon => 14.0,
            BodyKind::TextChip => 12.0,
        }
    }
}

/// Static, authored definition of one draggable visual element.
///
/// Immutable after authoring. The visual payload fields are kind-specific
/// and passed through untouched to the presentation layer.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyDescriptor {
    pub id: String,
    pub kind: BodyKind,
    pub width: f32,
    pub height: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hex: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Ordered, validated set of body descriptors. Fixed at build time;
/// exactly one simulated body is created per entry.
#[derive(Clone)]
pub struct BodyCatalog {
    descriptors: Vec<BodyDescriptor>,
}

const SWATCH_WIDTH: f32 = 160.0;
const SWATCH_HEIGHT: f32 = 280.0;
const ICON_SIZE: f32 = 56.0;

impl BodyCatalog {
    /// The production catalog: 8 colour-swatch cards, 6 skill pills,
    /// 8 icon chips and 4 text chips.
    pub fn builtin() -> Self {
        let mut descriptors = Vec::with_capacity(26);

        let swatches: [(&str, &str, &str, &str); 8] = [
            ("swatch-nympheas", "Nymphéas Blue", "#5A87E8", "#618eb6"),
            ("swatch-gaudi", "Gaudí Cathedral Blue", "#060591", "#060591"),
            ("swatch-flamingo", "Sunlit Flamingo Pink", "#FC95B1", "#fc95b1"),
            ("swatch-orange", "Studio Orange", "#C25A35", "#c25a35"),
            ("swatch-turquoise", "Gilded Turquoise", "#5ED0BF", "#5ed0bf"),
            ("swatch-yellow", "Paradise Tipani Yellow", "#F6E067", "#f6e067"),
            ("swatch-red", "Royal Red", "#D7263D", "#d7263d"),
            ("swatch-teal", "Sunshade Teal", "#188974", "#188974"),
        ];
        for (id, name, hex, color) in swatches {
            descriptors.push(BodyDescriptor {
                id: id.to_string(),
                kind: BodyKind::Card,
                width: SWATCH_WIDTH,
                height: SWATCH_HEIGHT,
                color: Some(color.to_string()),
                hex: Some(hex.to_string()),
                name: Some(name.to_string()),
                label: None,
                icon: None,
            });
        }

        let pills: [(&str, &str, f32); 6] = [
            ("pill-ux", "UX Design", 130.0),
            ("pill-ui", "UI Design", 120.0),
            ("pill-figma", "Figma", 100.0),
            ("pill-creative", "Creative", 120.0),
            ("pill-branding", "Branding", 120.0),
            ("pill-indesign", "InDesign", 120.0),
        ];
        for (id, label, width) in pills {
            descriptors.push(BodyDescriptor {
                id: id.to_string(),
                kind: BodyKind::Pill,
                width,
                height: 48.0,
                color: None,
                hex: None,
                name: None,
                label: Some(label.to_string()),
                icon: None,
            });
        }

        let icons: [(&str, &str); 8] = [
            ("icon-heart", "heart"),
            ("icon-star", "star"),
            ("icon-sparkle", "sparkle"),
            ("icon-palette", "palette"),
            ("icon-brush", "brush"),
            ("icon-ruler", "ruler"),
            ("icon-compass", "compass"),
            ("icon-pencil", "pencil"),
        ];
        for (id, icon) in icons {
            descriptors.push(BodyDescriptor {
                id: id.to_string(),
                kind: BodyKind::Icon,
                width: ICON_SIZE,
                height: ICON_SIZE,
                color: None,
                hex: None,
                name: None,
                label: None,
                icon: Some(icon.to_string()),
            });
        }

        let texts: [(&str, &str, f32); 4] = [
            ("text-nz", "NZ Based", 110.0),
            ("text-pixels", "Pixels & Places", 150.0),
            ("text-bold", "Bold", 80.0),
            ("text-human", "Human-Centred", 160.0),
        ];
        for (id, label, width) in texts {
            descriptors.push(BodyDescriptor {
                id: id.to_string(),
                kind: BodyKind::TextChip,
                width,
                height: 50.0,
                color: None,
                hex: None,
                name: None,
                label: Some(label.to_string()),
                icon: None,
            });
        }

        // The builtin data is known-good; validation still runs in debug builds.
        debug_assert!(validate(&descriptors).is_ok());
        Self { descriptors }
    }

    /// Load a catalog from a JSON bundle (`{"bodies": [...]}`).
    pub fn from_bundle_json(json: &str) -> Result<Self, String> {
        let bundle: BundleRoot = serde_json::from_str(json).map_err(|e| e.to_string())?;
        Self::from_descriptors(bundle.bodies)
    }

    pub fn from_descriptors(descriptors: Vec<BodyDescriptor>) -> Result<Self, String> {
        validate(&descriptors)?;
        Ok(Self { descriptors })
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn descriptors(&self) -> &[BodyDescriptor] {
        &self.descriptors
    }

    pub fn get(&self, index: usize) -> Option<&BodyDescriptor> {
        self.descriptors.get(index)
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.descriptors.iter().position(|d| d.id == id)
    }

    /// JSON the presentation layer uses to build one visual element per body.
    pub fn manifest_json(&self) -> String {
        let out = CatalogManifest {
            format_version: 1,
            bodies: &self.descriptors,
        };
        serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
    }
}

fn validate(descriptors: &[BodyDescriptor]) -> Result<(), String> {
    if descriptors.is_empty() {
        return Err("body catalog is empty".to_string());
    }

    let mut seen = HashSet::new();
    for d in descriptors {
        if d.id.is_empty() {
            return Err("body descriptor has an empty id".to_string());
        }
        if !seen.insert(d.id.as_str()) {
            return Err(format!("duplicate body id: {}", d.id));
        }
        if !(d.width > 0.0) || !(d.height > 0.0) {
            return Err(format!(
                "body {} has non-positive dimensions: {}x{}",
                d.id, d.width, d.height
            ));
        }
    }
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CatalogManifest<'a> {
    format_version: u32,
    bodies: &'a [BodyDescriptor],
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BundleRoot {
    bodies: Vec<BodyDescriptor>,
}
