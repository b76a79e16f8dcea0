use fleet_hunt::{run, BoardSize, CliPlayer, Fleet, WIN_BANNER};
use rand::{rngs::SmallRng, SeedableRng};

fn sweep(n: usize) -> String {
    let letters = ['A', 'B', 'C', 'D', 'E', 'F'];
    let mut lines = String::new();
    for &l in &letters[..n] {
        for c in 0..n {
            lines.push_str(&format!("{}{}\n", l, c));
        }
    }
    lines
}

#[test]
fn full_game_over_in_memory_terminal() {
    let input = format!("3\nzz\n{}", sweep(6));
    let mut player = CliPlayer::new(input.as_bytes(), Vec::new());
    let stats = run(&mut player, &mut SmallRng::seed_from_u64(2024)).unwrap();

    let fleet = Fleet::generate(&mut SmallRng::seed_from_u64(2024), BoardSize::new(6).unwrap());
    assert_eq!(stats.correct, fleet.total_cells());

    let out = String::from_utf8(player.into_output()).unwrap();
    assert!(out.contains("Welcome to Battleship"));
    assert!(out.contains("Choose a valid position (A1, B2, etc)"));
    assert!(out.contains(WIN_BANNER));
    assert!(out.trim_end().ends_with(&format!(
        "Correct: {} | Incorrect: {}",
        stats.correct, stats.incorrect
    )));
}

#[test]
fn closed_input_ends_with_error() {
    let mut player = CliPlayer::new("1\nA0\n".as_bytes(), Vec::new());
    let err = run(&mut player, &mut SmallRng::seed_from_u64(1)).unwrap_err();
    assert!(err.to_string().contains("input closed"));
}
