//! Avatar appearance data
//!
//! Pure data describing how the actor's figure is built from circles. The
//! renderer reads it; the simulation only carries it around.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::color::{Color, WHITE, rgb};

/// How an eye is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EyeType {
    Circle,
    #[default]
    Dot,
    Custom,
}

/// Default eye diameter when none is given
pub const DEFAULT_EYE_SIZE: f32 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyPart {
    pub color: Color,
    /// Circle diameter
    pub size: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeadPart {
    pub color: Color,
    pub size: f32,
    /// Offset from the body center; x is foreshortened by the facing angle
    pub offset: Vec2,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Eyes {
    #[serde(rename = "type", default)]
    pub kind: EyeType,
    pub color: Color,
    #[serde(default)]
    pub size: Option<f32>,
    /// Socket offsets from the head center; the sign of x picks the side
    pub positions: Vec<Vec2>,
}

impl Eyes {
    pub fn diameter(&self) -> f32 {
        self.size.unwrap_or(DEFAULT_EYE_SIZE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Beak {
    pub color: Color,
    pub size: f32,
    pub offset: Vec2,
}

/// Decoration slot; the payload is not interpreted by the core
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Accessory {
    #[serde(rename = "type")]
    pub kind: String,
    pub position: Vec2,
    #[serde(default)]
    pub data: serde_json::Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Animation {
    /// Bob the body up and down while walking
    pub walk_bounce: bool,
    pub bounce_amount: f32,
}

impl Default for Animation {
    fn default() -> Self {
        Self {
            walk_bounce: true,
            bounce_amount: 2.0,
        }
    }
}

/// Complete look of an avatar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appearance {
    pub id: String,
    pub name: String,
    pub body: BodyPart,
    pub head: HeadPart,
    #[serde(default)]
    pub eyes: Option<Eyes>,
    #[serde(default)]
    pub beak: Option<Beak>,
    #[serde(default)]
    pub accessories: Vec<Accessory>,
    #[serde(default)]
    pub animation: Option<Animation>,
}

impl Appearance {
    /// Peach-colored figure with dot eyes and a coral mouth
    pub fn preset_default() -> Self {
        let skin = rgb(0xFF, 0xE5, 0xB4);
        Self {
            id: "default".into(),
            name: "Default Character".into(),
            body: BodyPart {
                color: skin,
                size: 32.0,
            },
            head: HeadPart {
                color: skin,
                size: 24.0,
                offset: Vec2::new(6.0, -16.0),
            },
            eyes: Some(Eyes {
                kind: EyeType::Dot,
                color: rgb(0x2C, 0x3E, 0x50),
                size: Some(3.0),
                positions: vec![Vec2::new(8.0, -4.0), Vec2::new(-8.0, -4.0)],
            }),
            beak: Some(Beak {
                color: rgb(0xFF, 0x9A, 0x8B),
                size: 8.0,
                offset: Vec2::new(12.0, 0.0),
            }),
            accessories: Vec::new(),
            animation: Some(Animation {
                walk_bounce: true,
                bounce_amount: 2.0,
            }),
        }
    }

    /// Single-color figure with white circle eyes and no mouth
    pub fn preset_simple(color: Color) -> Self {
        Self {
            id: "simple".into(),
            name: "Simple Character".into(),
            body: BodyPart { color, size: 28.0 },
            head: HeadPart {
                color,
                size: 20.0,
                offset: Vec2::new(0.0, -14.0),
            },
            eyes: Some(Eyes {
                kind: EyeType::Circle,
                color: WHITE,
                size: Some(6.0),
                positions: vec![Vec2::new(5.0, -3.0), Vec2::new(-5.0, -3.0)],
            }),
            beak: None,
            accessories: Vec::new(),
            animation: Some(Animation {
                walk_bounce: true,
                bounce_amount: 1.5,
            }),
        }
    }

    /// Animation settings, falling back to the walking bounce
    pub fn animation(&self) -> Animation {
        self.animation.unwrap_or_default()
    }
}

impl Default for Appearance {
    fn default() -> Self {
        Self::preset_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::LIGHT_BLUE;

    #[test]
    fn test_presets() {
        let default = Appearance::default();
        assert_eq!(default.id, "default");
        assert!(default.beak.is_some());
        assert_eq!(default.eyes.as_ref().map(|e| e.positions.len()), Some(2));

        let simple = Appearance::preset_simple(LIGHT_BLUE);
        assert_eq!(simple.body.color, LIGHT_BLUE);
        assert!(simple.beak.is_none());
        assert_eq!(simple.animation().bounce_amount, 1.5);
    }

    #[test]
    fn test_missing_animation_falls_back_to_bounce() {
        let mut appearance = Appearance::default();
        appearance.animation = None;
        assert_eq!(appearance.animation(), Animation::default());
        assert!(appearance.animation().walk_bounce);
    }

    #[test]
    fn test_deserialize_with_opaque_accessory() {
        let json = r#"{
            "id": "hat",
            "name": "Hat Wearer",
            "body": { "color": [1.0, 0.0, 0.0, 1.0], "size": 30.0 },
            "head": { "color": [1.0, 0.0, 0.0, 1.0], "size": 20.0, "offset": [0.0, -12.0] },
            "eyes": { "type": "circle", "color": [0.0, 0.0, 0.0, 1.0], "positions": [[4.0, -2.0]] },
            "accessories": [ { "type": "hat", "position": [0.0, -20.0], "data": { "brim": 3 } } ]
        }"#;
        let appearance: Appearance = serde_json::from_str(json).unwrap();
        assert_eq!(appearance.eyes.as_ref().unwrap().kind, EyeType::Circle);
        assert_eq!(appearance.eyes.as_ref().unwrap().diameter(), DEFAULT_EYE_SIZE);
        assert_eq!(appearance.accessories[0].data["brim"], 3);
        assert!(appearance.beak.is_none());
        assert!(appearance.animation.is_none());
    }
}
