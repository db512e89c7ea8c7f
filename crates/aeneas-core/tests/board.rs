//! Tests for the tile board renderer.

use aeneas_core::{GridSize, Placement, render_board, render_tile_board};
use aeneas_model::{ContentCatalog, ProjectId, StudioCatalog};
use proptest::prelude::*;

#[test]
fn two_letters_on_studio_grid() {
    let board = render_board(
        GridSize::new(5, 10),
        &[Placement::new(1, 2, 'Z'), Placement::new(1, 3, 'I')],
    );

    assert_eq!(board.cells().len(), 50);
    assert_eq!(board.glyph_at(1, 2), Some('Z'));
    assert_eq!(board.glyph_at(1, 3), Some('I'));
    assert_eq!(board.glyph_count(), 2);
    assert_eq!(
        board.cells().iter().filter(|cell| cell.glyph.is_none()).count(),
        48
    );
}

#[test]
fn later_placement_wins() {
    let board = render_board(
        GridSize::new(2, 2),
        &[Placement::new(0, 0, 'A'), Placement::new(0, 0, 'B')],
    );
    assert_eq!(board.glyph_at(0, 0), Some('B'));
    assert_eq!(board.glyph_count(), 1);
}

#[test]
fn zigzag_board_snapshot() {
    let board = render_tile_board(StudioCatalog.board(ProjectId::Zigzag));
    insta::assert_snapshot!(board.to_string(), @r"
    ··········
    ··ZIGZAG··
    ··········
    ··········
    ··········
    ");
}

#[test]
fn gmarket_board_snapshot() {
    let board = render_tile_board(StudioCatalog.board(ProjectId::Gmarket));
    insta::assert_snapshot!(board.to_string(), @r"
    ··········
    ·GMARKET··
    ··RAKUTEN·
    ··········
    ··········
    ");
}

#[test]
fn travel_board_snapshot() {
    let board = render_tile_board(StudioCatalog.board(ProjectId::Travel));
    insta::assert_snapshot!(board.to_string(), @r"
    ··········
    ··TRAVEL··
    ··········
    ··········
    ··········
    ");
}

fn grid_and_placements() -> impl Strategy<Value = (GridSize, Vec<Placement>)> {
    (1usize..8, 1usize..12).prop_flat_map(|(rows, cols)| {
        let placement = (0..rows, 0..cols, proptest::char::range('A', 'Z'))
            .prop_map(|(row, col, glyph)| Placement::new(row, col, glyph));
        (
            Just(GridSize::new(rows, cols)),
            proptest::collection::vec(placement, 0..20),
        )
    })
}

proptest! {
    #[test]
    fn board_is_dense_and_row_major((size, placements) in grid_and_placements()) {
        let board = render_board(size, &placements);
        prop_assert_eq!(board.cells().len(), size.rows * size.cols);

        for (index, cell) in board.cells().iter().enumerate() {
            prop_assert_eq!(cell.row, index / size.cols);
            prop_assert_eq!(cell.col, index % size.cols);
        }
    }

    #[test]
    fn every_cell_shows_its_last_placement((size, placements) in grid_and_placements()) {
        let board = render_board(size, &placements);

        for cell in board.cells() {
            let expected = placements
                .iter()
                .rev()
                .find(|p| p.row == cell.row && p.col == cell.col)
                .map(|p| p.glyph);
            prop_assert_eq!(cell.glyph, expected);
        }
    }

    #[test]
    fn rendering_is_repeatable((size, placements) in grid_and_placements()) {
        prop_assert_eq!(render_board(size, &placements), render_board(size, &placements));
    }
}
