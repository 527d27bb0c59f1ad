use glam::Vec2;
use crate::behavior::Facing;

/// The parts of an entity a tile collision can read or change.
#[derive(Copy, Clone, PartialEq, Default, Debug)]
pub struct EntityState {
    pub position: Vec2,
    pub velocity: Vec2,
    pub facing: Facing,
    /// Set once a level transition was requested and not yet carried out.
    pub transition_pending: bool,
}

/// Outcome of a tile collision, to be applied by the caller.
#[derive(Copy, Clone, PartialEq, Default, Debug)]
pub enum EntityEffect {
    /// Only regular solid collision applies.
    #[default]
    NoEffect,
    /// The level is complete.
    TransitionLevel,
    /// Velocity along `normal` (unit length) becomes `value`.
    OverrideVelocity { normal: Vec2, value: f32 },
    /// Entity moves to `position` in pixels and turns to `facing`.
    Reposition { position: Vec2, facing: Facing },
}

impl EntityEffect {

    pub fn apply(&self, entity: &mut EntityState) {
        match *self {
            Self::NoEffect => {},
            Self::TransitionLevel => entity.transition_pending = true,
            Self::OverrideVelocity { normal, value } => {
                let along = entity.velocity.dot(normal);
                entity.velocity += normal * (value - along);
            },
            Self::Reposition { position, facing } => {
                entity.position = position;
                entity.facing = facing;
                entity.velocity = Vec2::ZERO;
            },
        }
    }
}

#[cfg(test)]
mod test {
    use glam::Vec2;
    use crate::behavior::Facing;
    use super::{EntityEffect, EntityState};

    #[test]
    fn override_vertical_velocity() {
        let mut entity = EntityState {
            velocity: Vec2::new(100.0, 300.0),
            ..Default::default()
        };
        let effect = EntityEffect::OverrideVelocity { normal: Vec2::Y, value: -850.0 };
        effect.apply(&mut entity);
        assert_eq!(Vec2::new(100.0, -850.0), entity.velocity);
    }

    #[test]
    fn override_horizontal_velocity() {
        let mut entity = EntityState {
            velocity: Vec2::new(200.0, 50.0),
            ..Default::default()
        };
        let effect = EntityEffect::OverrideVelocity { normal: Vec2::X, value: -300.0 };
        effect.apply(&mut entity);
        assert_eq!(Vec2::new(-300.0, 50.0), entity.velocity);
    }

    #[test]
    fn reposition() {
        let mut entity = EntityState {
            position: Vec2::new(10.0, 10.0),
            velocity: Vec2::new(5.0, 5.0),
            facing: Facing::Right,
            transition_pending: false,
        };
        let effect = EntityEffect::Reposition { position: Vec2::new(160.0, 320.0), facing: Facing::Left };
        effect.apply(&mut entity);
        assert_eq!(Vec2::new(160.0, 320.0), entity.position);
        assert_eq!(Vec2::ZERO, entity.velocity);
        assert_eq!(Facing::Left, entity.facing);
    }

    #[test]
    fn transition() {
        let mut entity = EntityState::default();
        EntityEffect::TransitionLevel.apply(&mut entity);
        assert!(entity.transition_pending);
        EntityEffect::NoEffect.apply(&mut entity);
        assert!(entity.transition_pending);
    }
}
