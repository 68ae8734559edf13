use common::games::snake::Direction;
use eframe::egui;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputAction {
    Turn(Direction),
    Restart,
}

pub fn action_for_key(key: egui::Key) -> Option<InputAction> {
    match key {
        egui::Key::W | egui::Key::ArrowUp => Some(InputAction::Turn(Direction::Up)),
        egui::Key::S | egui::Key::ArrowDown => Some(InputAction::Turn(Direction::Down)),
        egui::Key::A | egui::Key::ArrowLeft => Some(InputAction::Turn(Direction::Left)),
        egui::Key::D | egui::Key::ArrowRight => Some(InputAction::Turn(Direction::Right)),
        egui::Key::Space | egui::Key::Enter => Some(InputAction::Restart),
        _ => None,
    }
}

/// Key presses of this frame in the order they happened. Held keys don't repeat.
pub fn read_actions(ctx: &egui::Context) -> Vec<InputAction> {
    if ctx.wants_keyboard_input() {
        return Vec::new();
    }

    ctx.input(|i| {
        i.events
            .iter()
            .filter_map(|event| match event {
                egui::Event::Key {
                    key,
                    pressed: true,
                    repeat: false,
                    ..
                } => action_for_key(*key),
                _ => None,
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wasd_and_arrows_map_to_same_turns() {
        assert_eq!(action_for_key(egui::Key::W), action_for_key(egui::Key::ArrowUp));
        assert_eq!(action_for_key(egui::Key::S), action_for_key(egui::Key::ArrowDown));
        assert_eq!(action_for_key(egui::Key::A), action_for_key(egui::Key::ArrowLeft));
        assert_eq!(
            action_for_key(egui::Key::D),
            Some(InputAction::Turn(Direction::Right))
        );
    }

    #[test]
    fn test_space_and_enter_restart() {
        assert_eq!(action_for_key(egui::Key::Space), Some(InputAction::Restart));
        assert_eq!(action_for_key(egui::Key::Enter), Some(InputAction::Restart));
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(action_for_key(egui::Key::Q), None);
        assert_eq!(action_for_key(egui::Key::Escape), None);
    }
}
