//! winit → engine input translation.

use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, Ime, MouseButton as WinitButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, ModifiersState, PhysicalKey};

use crate::input::{InputEvent, Key, KeyState, Modifiers, MouseButton, MouseButtonState, MouseWheelDelta};

const LETTERS: [KeyCode; 26] = [
    KeyCode::KeyA, KeyCode::KeyB, KeyCode::KeyC, KeyCode::KeyD, KeyCode::KeyE,
    KeyCode::KeyF, KeyCode::KeyG, KeyCode::KeyH, KeyCode::KeyI, KeyCode::KeyJ,
    KeyCode::KeyK, KeyCode::KeyL, KeyCode::KeyM, KeyCode::KeyN, KeyCode::KeyO,
    KeyCode::KeyP, KeyCode::KeyQ, KeyCode::KeyR, KeyCode::KeyS, KeyCode::KeyT,
    KeyCode::KeyU, KeyCode::KeyV, KeyCode::KeyW, KeyCode::KeyX, KeyCode::KeyY,
    KeyCode::KeyZ,
];

const DIGITS: [KeyCode; 10] = [
    KeyCode::Digit0, KeyCode::Digit1, KeyCode::Digit2, KeyCode::Digit3, KeyCode::Digit4,
    KeyCode::Digit5, KeyCode::Digit6, KeyCode::Digit7, KeyCode::Digit8, KeyCode::Digit9,
];

const FUNCTION_KEYS: [KeyCode; 12] = [
    KeyCode::F1, KeyCode::F2, KeyCode::F3, KeyCode::F4, KeyCode::F5, KeyCode::F6,
    KeyCode::F7, KeyCode::F8, KeyCode::F9, KeyCode::F10, KeyCode::F11, KeyCode::F12,
];

/// Remembers the state winit reports separately from the events that need it.
#[derive(Debug, Default)]
pub(super) struct InputTracker {
    modifiers: Modifiers,
    pointer: (f32, f32),
}

impl InputTracker {
    /// Translates `event`, or returns `None` for events that carry no input.
    pub fn translate(&mut self, scale_factor: f64, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::ModifiersChanged(m) => {
                self.modifiers = map_modifiers(m.state());
                Some(InputEvent::ModifiersChanged(self.modifiers))
            }

            WindowEvent::KeyboardInput { event, .. } => Some(InputEvent::Key {
                key: map_key(event.physical_key),
                state: match event.state {
                    ElementState::Pressed => KeyState::Pressed,
                    ElementState::Released => KeyState::Released,
                },
                modifiers: self.modifiers,
                repeat: event.repeat,
            }),

            WindowEvent::CursorMoved { position, .. } => {
                let (x, y) = to_logical(scale_factor, *position);
                self.pointer = (x, y);
                Some(InputEvent::PointerMoved { x, y })
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let (x, y) = self.pointer;
                Some(InputEvent::PointerButton {
                    button: map_mouse_button(*button),
                    state: match state {
                        ElementState::Pressed => MouseButtonState::Pressed,
                        ElementState::Released => MouseButtonState::Released,
                    },
                    x,
                    y,
                })
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let delta = match delta {
                    MouseScrollDelta::LineDelta(x, y) => MouseWheelDelta::Line { x: *x, y: *y },
                    MouseScrollDelta::PixelDelta(p) => {
                        let (x, y) = to_logical(scale_factor, *p);
                        MouseWheelDelta::Pixel { x, y }
                    }
                };
                Some(InputEvent::MouseWheel {
                    delta,
                    modifiers: self.modifiers,
                })
            }

            WindowEvent::Ime(Ime::Commit(text)) if !text.is_empty() => {
                Some(InputEvent::Text(text.clone()))
            }

            _ => None,
        }
    }
}

fn to_logical(scale_factor: f64, pos: PhysicalPosition<f64>) -> (f32, f32) {
    let logical = pos.to_logical::<f64>(scale_factor);
    (logical.x as f32, logical.y as f32)
}

fn map_modifiers(m: ModifiersState) -> Modifiers {
    Modifiers {
        shift: m.shift_key(),
        ctrl: m.control_key(),
        alt: m.alt_key(),
        meta: m.super_key(),
    }
}

fn map_mouse_button(button: WinitButton) -> MouseButton {
    match button {
        WinitButton::Left => MouseButton::Left,
        WinitButton::Right => MouseButton::Right,
        WinitButton::Middle => MouseButton::Middle,
        WinitButton::Back => MouseButton::Other(3),
        WinitButton::Forward => MouseButton::Other(4),
        WinitButton::Other(v) => MouseButton::Other(v),
    }
}

fn map_key(key: PhysicalKey) -> Key {
    let PhysicalKey::Code(code) = key else {
        return Key::Unknown(0);
    };

    if let Some(i) = index_in(&LETTERS, code) {
        return Key::Char(char::from(b'A' + i as u8));
    }
    if let Some(i) = index_in(&DIGITS, code) {
        return Key::Digit(i as u8);
    }
    if let Some(i) = index_in(&FUNCTION_KEYS, code) {
        return Key::Function(i as u8 + 1);
    }

    match code {
        KeyCode::Escape => Key::Escape,
        KeyCode::Enter | KeyCode::NumpadEnter => Key::Enter,
        KeyCode::Tab => Key::Tab,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Space => Key::Space,
        KeyCode::Delete => Key::Delete,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::ArrowUp => Key::ArrowUp,
        KeyCode::ArrowDown => Key::ArrowDown,
        KeyCode::ArrowLeft => Key::ArrowLeft,
        KeyCode::ArrowRight => Key::ArrowRight,
        KeyCode::ShiftLeft | KeyCode::ShiftRight => Key::Shift,
        KeyCode::ControlLeft | KeyCode::ControlRight => Key::Control,
        KeyCode::AltLeft | KeyCode::AltRight => Key::Alt,
        KeyCode::SuperLeft | KeyCode::SuperRight => Key::Meta,
        other => Key::Unknown(other as u32),
    }
}

fn index_in(table: &[KeyCode], code: KeyCode) -> Option<usize> {
    table.iter().position(|&k| k == code)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(c: KeyCode) -> Key {
        map_key(PhysicalKey::Code(c))
    }

    #[test]
    fn letters_digits_and_function_keys() {
        assert_eq!(code(KeyCode::KeyA), Key::Char('A'));
        assert_eq!(code(KeyCode::KeyZ), Key::Char('Z'));
        assert_eq!(code(KeyCode::Digit0), Key::Digit(0));
        assert_eq!(code(KeyCode::Digit9), Key::Digit(9));
        assert_eq!(code(KeyCode::F1), Key::Function(1));
        assert_eq!(code(KeyCode::F12), Key::Function(12));
    }

    #[test]
    fn named_keys() {
        assert_eq!(code(KeyCode::Escape), Key::Escape);
        assert_eq!(code(KeyCode::NumpadEnter), Key::Enter);
        assert_eq!(code(KeyCode::ShiftRight), Key::Shift);
    }

    #[test]
    fn unmapped_keys_keep_their_code() {
        assert_eq!(code(KeyCode::CapsLock), Key::Unknown(KeyCode::CapsLock as u32));
    }

    #[test]
    fn modifier_flags() {
        let m = map_modifiers(ModifiersState::SHIFT | ModifiersState::SUPER);
        assert!(m.shift && m.meta);
        assert!(!m.ctrl && !m.alt);
    }

    #[test]
    fn positions_are_converted_to_logical_pixels() {
        assert_eq!(to_logical(2.0, PhysicalPosition::new(200.0, 50.0)), (100.0, 25.0));
    }
}
