use dactylkit_designer::{
    splice, CornerLocation, DesignerError, Direction, Seam, SequencerOptions, WallPointId,
    WallSequence, WallSequencer,
};

use crate::support::flat_grid;

/// Unrounded ring, one point per edge cell
fn ring(rows: usize, columns: usize) -> WallSequence {
    let options = SequencerOptions {
        round_corners: false,
        ..SequencerOptions::default()
    };
    WallSequencer::with_options(&flat_grid(rows, columns, &[]), options)
        .sequence()
        .expect("sequence")
}

fn id(key: &str, corner: CornerLocation, direction: Direction) -> WallPointId {
    WallPointId::corner(key, corner, direction)
}

fn renamed(sequence: &WallSequence, prefix: &str) -> WallSequence {
    sequence
        .iter()
        .cloned()
        .map(|mut p| {
            if let Some(id) = p.id.as_mut() {
                id.key = format!("{prefix}{}", id.key);
            }
            p
        })
        .collect()
}

#[test]
fn test_splice_wraps_branch() {
    // main: k_0_0 TL, k_0_1 TL, k_0_2 TR, k_1_2 TR, k_2_2 BR, k_2_1 BR, k_2_0 BL, k_1_0 BL
    let main = ring(3, 3);
    // branch: t_k_0_0 TL, t_k_0_1 TR, t_k_1_1 BR, t_k_1_0 BL
    let branch = renamed(&ring(2, 2), "t_");
    let seam = Seam {
        exit: id("k_0_2", CornerLocation::TopRight, Direction::Right),
        entry: id("t_k_1_1", CornerLocation::BottomRight, Direction::Down),
        branch_exit: id("t_k_0_1", CornerLocation::TopRight, Direction::Right),
        reentry: id("k_2_1", CornerLocation::BottomRight, Direction::Down),
    };
    let spliced = splice(&main, &branch, &seam).expect("splice");
    assert_eq!(
        spliced.ids(),
        vec![
            "k_0_0_top_left_up",
            "k_0_1_top_left_up",
            "k_0_2_top_right_right",
            "t_k_1_1_bottom_right_down",
            "t_k_1_0_bottom_left_left",
            "t_k_0_0_top_left_up",
            "t_k_0_1_top_right_right",
            "k_2_1_bottom_right_down",
            "k_2_0_bottom_left_left",
            "k_1_0_bottom_left_left",
        ]
    );
}

#[test]
fn test_splice_single_branch_point() {
    let main = ring(3, 3);
    let branch = renamed(&ring(2, 2), "t_");
    let only = id("t_k_0_0", CornerLocation::TopLeft, Direction::Up);
    let seam = Seam {
        exit: id("k_0_0", CornerLocation::TopLeft, Direction::Up),
        entry: only.clone(),
        branch_exit: only,
        reentry: id("k_0_1", CornerLocation::TopLeft, Direction::Up),
    };
    let spliced = splice(&main, &branch, &seam).expect("splice");
    assert_eq!(spliced.len(), main.len() + 1);
    assert_eq!(spliced.ids()[1], "t_k_0_0_top_left_up");
}

#[test]
fn test_unknown_seam_point() {
    let main = ring(3, 3);
    let branch = renamed(&ring(2, 2), "t_");
    let seam = Seam {
        exit: id("k_0_2", CornerLocation::TopRight, Direction::Right),
        entry: id("nowhere", CornerLocation::TopLeft, Direction::Up),
        branch_exit: id("t_k_0_1", CornerLocation::TopRight, Direction::Right),
        reentry: id("k_2_1", CornerLocation::BottomRight, Direction::Down),
    };
    match splice(&main, &branch, &seam) {
        Err(DesignerError::SeamPointNotFound { id, sequence }) => {
            assert_eq!(id, "nowhere_top_left_up");
            assert_eq!(sequence, "branch");
        }
        other => panic!("unexpected result {other:?}"),
    }
}

#[test]
fn test_reentry_before_exit_is_rejected() {
    let main = ring(3, 3);
    let branch = renamed(&ring(2, 2), "t_");
    let seam = Seam {
        exit: id("k_2_1", CornerLocation::BottomRight, Direction::Down),
        entry: id("t_k_0_0", CornerLocation::TopLeft, Direction::Up),
        branch_exit: id("t_k_0_1", CornerLocation::TopRight, Direction::Right),
        reentry: id("k_0_2", CornerLocation::TopRight, Direction::Right),
    };
    assert!(matches!(
        splice(&main, &branch, &seam),
        Err(DesignerError::InvalidSeam { .. })
    ));
}
