//! Piece tests - layouts, mirroring, and axis rotation

use blockfall::core::{layout_width, pivot_index, rotated_cells, spawn_cells, Piece};
use blockfall::types::{PieceDescriptor, PieceKind, Point, SquareId};

fn desc(kind: PieceKind, mirrored: bool) -> PieceDescriptor {
    PieceDescriptor { kind, mirrored }
}

#[test]
fn test_layouts_have_four_distinct_cells() {
    for kind in PieceKind::ALL {
        for mirrored in [false, true] {
            let cells = spawn_cells(desc(kind, mirrored), 0);
            assert_eq!(cells.len(), 4, "{:?}", kind);
            for (i, a) in cells.iter().enumerate() {
                for b in cells.iter().skip(i + 1) {
                    assert_ne!(a, b, "{:?} has duplicate cells", kind);
                }
            }
            let width = layout_width(kind);
            assert!(cells.iter().all(|c| c.x >= 0 && c.x < width && c.y >= 0));
        }
    }
}

#[test]
fn test_pivot_indices_per_kind() {
    assert_eq!(pivot_index(PieceKind::Stick), Some(2));
    assert_eq!(pivot_index(PieceKind::Square), None);
    assert_eq!(pivot_index(PieceKind::TBone), Some(1));
    assert_eq!(pivot_index(PieceKind::Squiggle), Some(1));
    assert_eq!(pivot_index(PieceKind::BendyGuy), Some(0));

    // A live piece reports the same thing through its rotation flag.
    for kind in PieceKind::ALL {
        let mut ids = 0u32;
        let piece = Piece::new(desc(kind, false), 0, || {
            ids += 1;
            SquareId::from_raw(ids)
        });
        assert_eq!(piece.can_rotate(), pivot_index(kind).is_some());
        assert_eq!(piece.pivot(), pivot_index(kind));
    }
}

#[test]
fn test_mirror_reflects_within_layout_width() {
    for kind in [PieceKind::Squiggle, PieceKind::BendyGuy] {
        let width = layout_width(kind);
        let plain = spawn_cells(desc(kind, false), 0);
        let mirrored = spawn_cells(desc(kind, true), 0);
        for (a, b) in plain.iter().zip(&mirrored) {
            assert_eq!(b.x, width - 1 - a.x);
            assert_eq!(b.y, a.y);
        }
    }
}

#[test]
fn test_mirror_flag_ignored_for_symmetric_kinds() {
    for kind in [PieceKind::Stick, PieceKind::Square, PieceKind::TBone] {
        assert_eq!(
            spawn_cells(desc(kind, true), 2),
            spawn_cells(desc(kind, false), 2)
        );
    }
}

#[test]
fn test_spawn_offset_shifts_horizontally() {
    let at_zero = spawn_cells(desc(PieceKind::TBone, false), 0);
    let shifted = spawn_cells(desc(PieceKind::TBone, false), 4);
    for (a, b) in at_zero.iter().zip(&shifted) {
        assert_eq!(b.x, a.x + 4);
        assert_eq!(b.y, a.y);
    }
}

#[test]
fn test_four_rotations_return_to_start_in_free_space() {
    for kind in [PieceKind::Stick, PieceKind::TBone, PieceKind::Squiggle, PieceKind::BendyGuy] {
        for mirrored in [false, true] {
            let mut ids = 0u32;
            let mut piece = Piece::new(desc(kind, mirrored), 3, || {
                ids += 1;
                SquareId::from_raw(ids)
            });
            // Park mid-board so no boundary clamp interferes.
            piece.translate(0, 8);
            let pivot = piece.pivot().expect("rotatable kind");
            let original: Vec<Point> = piece.cells().to_vec();

            let mut cells = original.clone();
            for _ in 0..4 {
                cells = rotated_cells(&cells, pivot, 10, 20).to_vec();
                assert_eq!(cells[pivot], original[pivot], "pivot must not move");
            }
            assert_eq!(cells, original, "{:?} mirrored={}", kind, mirrored);
        }
    }
}

#[test]
fn test_rotation_clamps_away_from_the_wall() {
    // Vertical stick hugging the left wall; a clockwise turn would reach
    // x = -1, so the whole piece shifts right by one instead.
    let cells = [
        Point::new(0, 6),
        Point::new(0, 7),
        Point::new(0, 8),
        Point::new(0, 9),
    ];
    let rotated = rotated_cells(&cells, 2, 10, 20);

    assert!(rotated.iter().all(|c| c.x >= 0 && c.x < 10));
    assert!(rotated.iter().all(|c| c.y == 8));
    let mut xs: Vec<i8> = rotated.iter().map(|c| c.x).collect();
    xs.sort_unstable();
    assert_eq!(xs, vec![0, 1, 2, 3]);
    // The pivot itself was nudged by the uniform shift.
    assert_eq!(rotated[2], Point::new(1, 8));
}

#[test]
fn test_rotation_clamps_at_the_floor() {
    // Horizontal stick on the bottom row rotates up, not out.
    let cells = [
        Point::new(3, 19),
        Point::new(4, 19),
        Point::new(5, 19),
        Point::new(6, 19),
    ];
    let rotated = rotated_cells(&cells, 2, 10, 20);
    assert!(rotated.iter().all(|c| c.y >= 0 && c.y < 20));
    assert!(rotated.iter().all(|c| c.x == 5));
}

#[test]
fn test_translate_moves_cells_uniformly() {
    let mut ids = 0u32;
    let mut piece = Piece::new(desc(PieceKind::Square, false), 4, || {
        ids += 1;
        SquareId::from_raw(ids)
    });
    let before: Vec<Point> = piece.cells().to_vec();
    piece.translate(1, 2);
    for (a, b) in before.iter().zip(piece.cells()) {
        assert_eq!(b.x, a.x + 1);
        assert_eq!(b.y, a.y + 2);
    }
    assert_eq!(piece.cells().len(), piece.squares().len());
}
