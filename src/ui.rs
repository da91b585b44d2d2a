use crate::models::{BoardResponse, Frequency, HabitView};
use askama::Template;

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate<'a> {
    board: &'a BoardResponse,
    rows: Vec<HabitRow<'a>>,
    frequencies: Vec<Frequency>,
}

struct HabitRow<'a> {
    habit: &'a HabitView,
    /// Id as a single URL path segment.
    path_id: String,
}

/// Rebuilds the whole page from the board; nothing is patched in place.
pub fn render_index(board: &BoardResponse) -> Result<String, askama::Error> {
    let rows = board
        .habits
        .iter()
        .map(|habit| HabitRow {
            habit,
            path_id: urlencoding::encode(&habit.id).into_owned(),
        })
        .collect();

    IndexTemplate {
        board,
        rows,
        frequencies: Frequency::ALL.to_vec(),
    }
    .render()
}
