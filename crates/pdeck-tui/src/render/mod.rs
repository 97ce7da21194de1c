//! Main render/view function (View in TEA pattern)


use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use pdeck_app::state::AppState;
use pdeck_app::view::render_all;
use pdeck_app::UiMode;

use crate::layout;
use crate::theme::palette;
use crate::widgets::{AlertModal, KeyHints, MainHeader, PanelCard, ProfilePrompt};

/// Newest log lines projected per panel; no card is taller than this
const MAX_VISIBLE_LOG_LINES: usize = 200;

/// Render the complete UI. Reads state only.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let vm = render_all(state, MAX_VISIBLE_LOG_LINES);
    let areas = layout::create(area);

    frame.render_widget(MainHeader::new(&vm), areas.header);

    let cells = layout::grid_cells(areas.grid, vm.panels.len());
    for (panel, cell) in vm.panels.iter().zip(cells) {
        frame.render_widget(PanelCard::new(panel), cell);
    }

    frame.render_widget(KeyHints::new(vm.ui_mode), areas.footer);

    match vm.ui_mode {
        UiMode::Normal => {}
        UiMode::ProfileInput => {
            if let Some(input) = &vm.input {
                let prompt = ProfilePrompt::new(input);
                frame.set_cursor_position(prompt.cursor_position(area));
                frame.render_widget(prompt, area);
            }
        }
        UiMode::Alert => {
            if let Some(alert) = &vm.alert {
                frame.render_widget(AlertModal::new(alert), area);
            }
        }
    }
}
