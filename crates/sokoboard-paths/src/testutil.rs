use sokoboard_core::{Board, Category, Position};

/// Build a board from text: `#` obstacle, `*` goal, anything else floor.
/// Rows may differ in length.
pub(crate) fn board(rows: &[&str]) -> Board {
    let mut b = Board::new();
    for (y, row) in rows.iter().enumerate() {
        b.add_row(row.chars().count());
        for (x, ch) in row.chars().enumerate() {
            let c = match ch {
                '#' => Category::Obstacle,
                '*' => Category::Goal,
                _ => Category::Floor,
            };
            b.set_category(Position::new(x, y), c).unwrap();
        }
    }
    b
}
