use fleet_hunt::{
    resolve_guess, run, AutoPlayer, Board, BoardSize, Fleet, GameStats, Guess, Marker,
    MAX_BOARD_SIZE, MIN_BOARD_SIZE,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn classification_is_stable(
        seed in any::<u64>(),
        n in MIN_BOARD_SIZE..=MAX_BOARD_SIZE,
        row in 0..MAX_BOARD_SIZE,
        col in 0..MAX_BOARD_SIZE,
    ) {
        let size = BoardSize::new(n).unwrap();
        prop_assume!(row < n && col < n);
        let fleet = Fleet::generate(&mut SmallRng::seed_from_u64(seed), size);
        let guess = Guess::from_cell((row, col), size).unwrap();

        let mut board = Board::new(size);
        let mut stats = GameStats::default();
        let first = resolve_guess(&mut board, &fleet, guess, &mut stats).unwrap();
        let marker = board.cell(guess.row_letter(), guess.col());
        let second = resolve_guess(&mut board, &fleet, guess, &mut stats).unwrap();

        prop_assert_eq!(first, second);
        prop_assert_eq!(marker, board.cell(guess.row_letter(), guess.col()));
        prop_assert_eq!(first.is_hit(), fleet.ship_at((row, col)).is_some());
        prop_assert_eq!(stats.total(), 2);
        prop_assert!(stats.correct == 0 || stats.incorrect == 0);
    }

    #[test]
    fn finished_game_counts_add_up(seed in any::<u64>(), n in MIN_BOARD_SIZE..=MAX_BOARD_SIZE) {
        let size = BoardSize::new(n).unwrap();
        let mut player = AutoPlayer::new(SmallRng::seed_from_u64(seed ^ 0x5eed), size);
        let mut rng = SmallRng::seed_from_u64(seed);
        let stats = run(&mut player, &mut rng).unwrap();

        let fleet = Fleet::generate(&mut SmallRng::seed_from_u64(seed), size);
        prop_assert_eq!(stats.correct, fleet.total_cells());
        prop_assert!(stats.total() <= n * n);
    }
}

#[test]
fn misses_match_board_markers() {
    let size = BoardSize::new(5).unwrap();
    let fleet = Fleet::generate(&mut SmallRng::seed_from_u64(11), size);
    let mut board = Board::new(size);
    let mut stats = GameStats::default();
    for r in 0..5 {
        for c in 0..5 {
            resolve_guess(&mut board, &fleet, Guess::from_cell((r, c), size).unwrap(), &mut stats);
        }
    }
    assert_eq!(stats.correct, fleet.total_cells());
    assert_eq!(stats.incorrect, 25 - fleet.total_cells());
    assert_eq!(board.count(Marker::Miss), stats.incorrect);
    assert_eq!(board.count(Marker::Unknown), 0);
}

#[test]
fn guess_parsed_on_larger_board_is_not_counted() {
    let small = BoardSize::new(4).unwrap();
    let fleet = Fleet::generate(&mut SmallRng::seed_from_u64(3), small);
    let mut board = Board::new(small);
    let mut stats = GameStats::default();
    let guess = Guess::parse("J9", BoardSize::new(MAX_BOARD_SIZE).unwrap()).unwrap();
    assert_eq!(resolve_guess(&mut board, &fleet, guess, &mut stats), None);
    assert_eq!(stats.total(), 0);
    assert_eq!(board.count(Marker::Miss), stats.incorrect);
    assert_eq!(board.count(Marker::Unknown), 16);
}
