use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    None,
    Quit,
    Dismiss,
    ToggleHelp,
    Click { column: u16, row: u16 },
}

pub fn map_event(event: &Event) -> InputAction {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => map_key(*key),
        Event::Mouse(mouse) => map_mouse(*mouse),
        _ => InputAction::None,
    }
}

pub fn map_key(key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputAction::Quit,
        KeyCode::Char('q') => InputAction::Quit,
        KeyCode::Esc => InputAction::Dismiss,
        KeyCode::Char('?') | KeyCode::Char('h') => InputAction::ToggleHelp,
        _ => InputAction::None,
    }
}

pub fn map_mouse(mouse: MouseEvent) -> InputAction {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => InputAction::Click {
            column: mouse.column,
            row: mouse.row,
        },
        _ => InputAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mouse(kind: MouseEventKind) -> MouseEvent {
        MouseEvent {
            kind,
            column: 12,
            row: 7,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn maps_quit_keys() {
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)),
            InputAction::Quit
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            InputAction::Quit
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE)),
            InputAction::None
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
            InputAction::Dismiss
        );
    }

    #[test]
    fn only_left_press_clicks() {
        assert_eq!(
            map_mouse(mouse(MouseEventKind::Down(MouseButton::Left))),
            InputAction::Click { column: 12, row: 7 }
        );
        assert_eq!(
            map_mouse(mouse(MouseEventKind::Up(MouseButton::Left))),
            InputAction::None
        );
        assert_eq!(
            map_mouse(mouse(MouseEventKind::Down(MouseButton::Right))),
            InputAction::None
        );
        assert_eq!(map_mouse(mouse(MouseEventKind::Moved)), InputAction::None);
    }

    #[test]
    fn key_release_is_ignored() {
        let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(map_event(&Event::Key(key)), InputAction::None);
        assert_eq!(map_event(&Event::Resize(80, 24)), InputAction::None);
    }
}
