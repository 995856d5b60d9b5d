use fmc_core::{ConstructionError, Face, FaceletCube};
use itertools::Itertools;

fn color_counts(cube: &FaceletCube) -> [usize; 6] {
    let mut counts = [0; 6];

    for sticker in cube.state().iter().flatten() {
        counts[*sticker as usize] += 1;
    }

    counts
}

#[test_log::test]
fn test_quarter_turns_have_order_four() {
    for face in Face::ALL {
        let mut cube = FaceletCube::new();

        for i in 1..=4 {
            cube.apply(&face.to_string()).unwrap();
            assert_eq!(cube.is_solved(), i == 4, "{face} x{i}");
        }
    }

    assert!(FaceletCube::from_scramble("R R R R").unwrap().is_solved());
}

#[test_log::test]
fn test_sexy_move_has_order_six() {
    let mut cube = FaceletCube::new();

    for i in 1..=6 {
        cube.apply("R U R' U'").unwrap();
        assert_eq!(cube.is_solved(), i == 6);
    }
}

#[test_log::test]
fn test_colors_are_conserved() {
    let mut rng = fastrand::Rng::with_seed(1234);
    let mut cube = FaceletCube::new();

    for _ in 0..200 {
        let scramble = (0..rng.usize(1..30))
            .map(|_| {
                let face = Face::ALL[rng.usize(0..6)];
                let suffix = ["", "2", "'"][rng.usize(0..3)];
                format!("{face}{suffix}")
            })
            .join(" ");

        cube.apply(&scramble).unwrap();
        assert_eq!(color_counts(&cube), [9; 6], "{scramble}");

        // Centers never move under face turns
        for face in Face::ALL {
            assert_eq!(cube.face(face)[4], face);
        }
    }
}

#[test_log::test]
fn test_rejects_and_keeps_prior_turns() {
    let mut cube = FaceletCube::new();

    assert_eq!(
        cube.apply("R U Rw F"),
        Err(ConstructionError::UnsupportedToken("Rw".to_owned()))
    );
    assert_eq!(cube, FaceletCube::from_scramble("R U").unwrap());
    assert_eq!(color_counts(&cube), [9; 6]);
}

#[test_log::test]
fn test_scramble_net() {
    let cube = FaceletCube::from_scramble("R U R' U'").unwrap();

    assert_eq!(
        cube.to_string(),
        "   UUL\n   UUF\n   UUF\n\
         BLLFFDRRUBRR\nLLLFFUBRRBBB\nLLLFFFURRBBB\n\
         \x20  DDR\n   DDD\n   DDD\n"
    );
}
