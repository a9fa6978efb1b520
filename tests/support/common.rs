#![allow(dead_code)]

// Shared fixtures for the integration suites.

use aacboard::Board;

/// The two-category fixture from the board-file documentation.
pub const SAMPLE_BOARD: &str = "\
img/food/plate.png food
>img/food/fries.png french fries
>img/food/watermelon.png watermelon
img/clothing/hanger.png clothing
>img/clothing/collaredshirt.png collared shirt
";

/// Build the sample board through the engine API alone, no parse step.
pub fn sample_board() -> aacboard::Result<Board> {
    let mut board = Board::new();
    board.add_item("img/food/plate.png", "food")?;
    board.select("img/food/plate.png")?;
    board.add_item("img/food/fries.png", "french fries")?;
    board.add_item("img/food/watermelon.png", "watermelon")?;
    board.reset();
    board.add_item("img/clothing/hanger.png", "clothing")?;
    board.select("img/clothing/hanger.png")?;
    board.add_item("img/clothing/collaredshirt.png", "collared shirt")?;
    board.reset();
    Ok(board)
}

/// Visible keys as owned strings, for order assertions.
pub fn keys(board: &Board) -> Vec<String> {
    board.image_keys().iter().map(|k| k.to_string()).collect()
}
