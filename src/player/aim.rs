//! Aim resolution for the three aim modes.

use bevy::prelude::*;

use super::components::AimMode;
use crate::input::{GameKey, InputSnapshot};

/// Arrow keys and the direction each contributes. Screen up is -y.
const AIM_KEYS: [(GameKey, Vec3); 4] = [
    (GameKey::AimLeft, Vec3::NEG_X),
    (GameKey::AimRight, Vec3::X),
    (GameKey::AimUp, Vec3::NEG_Y),
    (GameKey::AimDown, Vec3::Y),
];

/// Unit firing direction for `mode`, or zero when there is nothing to aim at.
///
/// `hostiles` lists enemy positions followed by the boss; with auto aim the
/// first one at the smallest distance wins.
pub fn resolve_aim(
    mode: AimMode,
    input: &InputSnapshot,
    origin: Vec3,
    hostiles: impl IntoIterator<Item = Vec3>,
) -> Vec3 {
    match mode {
        AimMode::Pointer => {
            let offset = input.pointer - input.screen_center();
            offset.extend(0.0).normalize_or_zero()
        }
        AimMode::Keys => AIM_KEYS
            .iter()
            .filter(|(key, _)| input.held(*key))
            .map(|(_, direction)| *direction)
            .sum::<Vec3>()
            .normalize_or_zero(),
        AimMode::Auto => {
            let mut nearest: Option<(f32, Vec3)> = None;
            for position in hostiles {
                let distance = origin.distance_squared(position);
                if nearest.map_or(true, |(best, _)| distance < best) {
                    nearest = Some((distance, position));
                }
            }
            nearest.map_or(Vec3::ZERO, |(_, position)| (position - origin).normalize_or_zero())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> InputSnapshot {
        InputSnapshot::centered(Vec2::new(1200.0, 800.0))
    }

    #[test]
    fn pointer_at_center_gives_no_aim() {
        assert_eq!(resolve_aim(AimMode::Pointer, &screen(), Vec3::ZERO, []), Vec3::ZERO);
    }

    #[test]
    fn pointer_offset_is_normalized_flat() {
        let input = screen().with_pointer(Vec2::new(700.0, 400.0));
        assert_eq!(resolve_aim(AimMode::Pointer, &input, Vec3::ZERO, []), Vec3::X);
    }

    #[test]
    fn arrow_keys_combine_and_cancel() {
        let up_right = screen().with_held(&[GameKey::AimUp, GameKey::AimRight]);
        let aim = resolve_aim(AimMode::Keys, &up_right, Vec3::ZERO, []);
        assert!((aim - Vec3::new(1.0, -1.0, 0.0).normalize()).length() < 1e-6);

        let cancelled = screen().with_held(&[GameKey::AimLeft, GameKey::AimRight]);
        assert_eq!(resolve_aim(AimMode::Keys, &cancelled, Vec3::ZERO, []), Vec3::ZERO);
    }

    #[test]
    fn auto_aim_picks_nearest_and_first_on_ties() {
        let hostiles = [Vec3::new(0.0, 10.0, 0.0), Vec3::new(-3.0, 0.0, 0.0), Vec3::new(3.0, 0.0, 0.0)];
        let aim = resolve_aim(AimMode::Auto, &screen(), Vec3::ZERO, hostiles);
        assert_eq!(aim, Vec3::NEG_X);
    }

    #[test]
    fn auto_aim_without_targets_is_zero() {
        assert_eq!(resolve_aim(AimMode::Auto, &screen(), Vec3::ZERO, []), Vec3::ZERO);
    }
}
