use crate::app::App;
use crate::input::InputAction;
use cardtable_core::TableInput;

pub fn dispatch(app: &mut App, action: InputAction) {
    match action {
        InputAction::None => {}
        InputAction::Quit => app.apply(TableInput::Quit),
        InputAction::Dismiss => {
            if app.show_help {
                app.show_help = false;
            } else {
                app.apply(TableInput::Quit);
            }
        }
        InputAction::ToggleHelp => app.show_help = !app.show_help,
        InputAction::Click { column, row } => match app.viewport.to_table(column, row) {
            Some(point) => app.apply(TableInput::Click(point)),
            None => tracing::trace!(column, row, "click outside table"),
        },
    }
}
