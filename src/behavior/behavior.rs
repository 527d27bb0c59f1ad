use glam::Vec2;

/// Collision behavior of a single tile, typed from its editor properties.
#[derive(Copy, Clone, PartialEq, Default, Debug)]
pub enum TileBehavior {
    /// Solid tile with no special effect.
    #[default]
    None,
    /// Ends the level.
    Exit,
    /// Replaces the velocity along the collision normal.
    Bounce { velocity: f32 },
    /// Sends the entity back to a respawn point.
    Kill { respawn: Vec2, facing: Facing, unit: Unit },
}

impl TileBehavior {

    /// Name of the `type` property suffix this behavior is declared with.
    pub fn type_name(&self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Exit => Some(BehaviorKind::Exit.type_name()),
            Self::Bounce { .. } => Some(BehaviorKind::Bounce.type_name()),
            Self::Kill { .. } => Some(BehaviorKind::Kill.type_name()),
        }
    }
}

/// Tag of the behaviors a `type` property can select.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum BehaviorKind {
    Exit,
    Bounce,
    Kill,
}

impl BehaviorKind {

    /// Matches the identifier after the last `.` of a type name, so "Example.BounceTile" selects [`BehaviorKind::Bounce`].
    pub fn from_type_name(type_name: &str) -> Option<Self> {
        let suffix = type_name.rsplit('.').next().unwrap_or(type_name);
        match suffix {
            "ExitTile" => Some(Self::Exit),
            "BounceTile" => Some(Self::Bounce),
            "KillTile" => Some(Self::Kill),
            _ => None,
        }
    }

    pub fn type_name(self) -> &'static str {
        match self {
            Self::Exit => "ExitTile",
            Self::Bounce => "BounceTile",
            Self::Kill => "KillTile",
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Default, Debug)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    pub fn parse(str: &str) -> Option<Self> {
        match str {
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            _ => None,
        }
    }
}

/// Unit a respawn point is authored in.
#[derive(Copy, Clone, Eq, PartialEq, Default, Debug)]
pub enum Unit {
    Tile,
    #[default]
    Pixel,
}

impl Unit {
    pub fn parse(str: &str) -> Option<Self> {
        match str {
            "tile" => Some(Self::Tile),
            "pixel" => Some(Self::Pixel),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::{BehaviorKind, TileBehavior};

    #[test]
    fn type_suffix() {
        assert_eq!(Some(BehaviorKind::Bounce), BehaviorKind::from_type_name("Example.BounceTile"));
        assert_eq!(Some(BehaviorKind::Exit), BehaviorKind::from_type_name("ExitTile"));
        assert_eq!(Some(BehaviorKind::Kill), BehaviorKind::from_type_name("Game.Tiles.KillTile"));
        assert_eq!(None, BehaviorKind::from_type_name("Example.Bounce"));
        assert_eq!(None, BehaviorKind::from_type_name("Example.BounceTile.Extra"));
        assert_eq!(None, BehaviorKind::from_type_name("Example."));
    }

    #[test]
    fn type_name_round_trips_suffix() {
        let behavior = TileBehavior::Bounce { velocity: 1.0 };
        let kind = behavior.type_name().and_then(BehaviorKind::from_type_name);
        assert_eq!(Some(BehaviorKind::Bounce), kind);
        assert_eq!(None, TileBehavior::None.type_name());
    }
}
