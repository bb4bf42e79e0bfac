//! Property tests for the pure grid rules, checked over every X/O/empty grid.

use noughts_board::{
    BoardStatus, Cell, Coord, CoordError, Grid, Marker, available_moves, is_game_complete,
    position_to_xy, simulate, xy_to_position,
};

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Every assignment of {empty, X, O} to the nine cells.
fn all_grids() -> impl Iterator<Item = Grid> {
    (0..3u32.pow(9)).map(|mut code| {
        let cells: [Cell; 9] = std::array::from_fn(|_| {
            let digit = code % 3;
            code /= 3;
            match digit {
                0 => Cell::Empty,
                1 => Cell::Occupied(Marker::x()),
                _ => Cell::Occupied(Marker::o()),
            }
        });
        Grid::from_cells(cells)
    })
}

fn owns_line(grid: &Grid, marker: &Marker) -> bool {
    LINES.iter().any(|line| {
        line.iter()
            .all(|&p| grid.cell_at(p).and_then(Cell::marker) == Some(marker))
    })
}

#[test]
fn test_status_agrees_with_line_scan() {
    for grid in all_grids() {
        let x = owns_line(&grid, &Marker::x());
        let o = owns_line(&grid, &Marker::o());
        let status = is_game_complete(&grid);

        match (x, o) {
            (false, false) if grid.is_full() => assert_eq!(status, BoardStatus::Draw),
            (false, false) => assert_eq!(status, BoardStatus::Incomplete),
            (true, false) => assert_eq!(status, BoardStatus::Won(Marker::x())),
            (false, true) => assert_eq!(status, BoardStatus::Won(Marker::o())),
            (true, true) => assert!(matches!(status, BoardStatus::Won(_))),
        }
    }
}

#[test]
fn test_available_moves_are_exactly_the_empty_cells() {
    for grid in all_grids() {
        let moves = available_moves(&grid);
        assert_eq!(moves.len() + grid.occupied_count(), 9);
        assert!(moves.iter().all(|c| grid.is_empty_at(*c)));
        assert!(moves.windows(2).all(|w| w[0].position() < w[1].position()));
    }
}

#[test]
fn test_simulate_changes_only_the_target() {
    for grid in all_grids().step_by(7) {
        for coord in available_moves(&grid) {
            let before = grid.clone();
            let next = simulate(&grid, coord, &Marker::o());
            assert_eq!(grid, before);

            let differing: Vec<Coord> = grid
                .iter()
                .zip(next.iter())
                .filter(|((_, a), (_, b))| a != b)
                .map(|((c, _), _)| c)
                .collect();
            assert_eq!(differing, vec![coord]);
        }
    }
}

#[test]
fn test_coordinate_round_trips() {
    for x in 0..3 {
        for y in 0..3 {
            assert_eq!(position_to_xy(xy_to_position(x, y)), (x, y));
        }
    }
    for p in 0..9 {
        let (x, y) = position_to_xy(p);
        assert_eq!(xy_to_position(x, y), p);
    }
}

#[test]
fn test_coords_only_exist_on_the_board() {
    let grid = Grid::new();
    for x in 0..5 {
        for y in 0..5 {
            let on_board = x < 3 && y < 3;
            assert_eq!(Coord::new(x, y).is_some(), on_board);
            match Coord::try_from((x, y)) {
                Ok(coord) => {
                    assert!(on_board);
                    assert_eq!((*coord.x(), *coord.y()), (x, y));
                    assert!(grid.get(coord).is_empty());
                    let next = simulate(&grid, coord, &Marker::x());
                    assert_eq!(next.occupied_count(), 1);
                    assert!(!next.get(coord).is_empty());
                }
                Err(err) => {
                    assert!(!on_board);
                    assert_eq!(err, CoordError::OffBoard { x, y });
                }
            }
        }
    }
}

#[test]
fn test_blank_grid_with_custom_markers() {
    let grid = Grid::from(["🦁", " ", " ", " ", " ", " ", " ", " ", " "]);
    assert_eq!(is_game_complete(&grid), BoardStatus::Incomplete);
    assert_eq!(is_game_complete(&Grid::new()).to_string(), "INCOMPLETE");
}
