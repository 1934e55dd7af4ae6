//! Plain-text rendering of the grid.

use sg_core::AgentKind;
use sg_grid::Position;
use sg_sim::Model;

/// One line per row: `.` empty, `o` majority, `x` minority.
pub fn ascii(model: &Model) -> String {
    let grid = model.grid();
    let mut out = String::with_capacity((grid.width() as usize + 1) * grid.height() as usize);
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let c = match grid
                .occupant_at(Position::new(x, y))
                .and_then(|a| model.agents().kind(a))
            {
                None => '.',
                Some(AgentKind::Majority) => 'o',
                Some(AgentKind::Minority) => 'x',
            };
            out.push(c);
        }
        out.push('\n');
    }
    out
}
