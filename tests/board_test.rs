//! Tests for the board state reducer and board service

use rstest::{fixture, rstest};

use treeboard::application::services::BoardService;
use treeboard::application::{BoardIntent, Outcome};
use treeboard::domain::{Board, CardId, DomainError};
use treeboard::infrastructure::fixtures::{default_columns, seed_board};
use treeboard::util::testing;

#[fixture]
fn board() -> Board {
    testing::init_test_setup();
    seed_board(default_columns()).expect("default columns are valid")
}

fn counts(board: &Board) -> Vec<(String, usize)> {
    board
        .column_counts()
        .into_iter()
        .map(|(c, n)| (c.id.to_string(), n))
        .collect()
}

#[rstest]
fn given_seed_board_then_five_cards_across_three_columns(board: Board) {
    assert_eq!(
        counts(&board),
        vec![
            ("todo".to_string(), 2),
            ("in-progress".to_string(), 2),
            ("done".to_string(), 1),
        ]
    );
}

#[rstest]
fn given_seed_board_when_moving_card_one_to_done_then_counts_shift(mut board: Board) {
    board.move_card(&"1".into(), &"done".into(), None).unwrap();
    assert_eq!(
        counts(&board),
        vec![
            ("todo".to_string(), 1),
            ("in-progress".to_string(), 2),
            ("done".to_string(), 2),
        ]
    );
}

#[rstest]
#[case("1", "done")]
#[case("3", "todo")]
#[case("5", "in-progress")]
fn given_move_without_index_then_only_that_column_tag_changes(
    mut board: Board,
    #[case] card: &str,
    #[case] to: &str,
) {
    let before = board.cards().to_vec();
    board.move_card(&card.into(), &to.into(), None).unwrap();

    let after = board.cards();
    assert_eq!(after.len(), before.len());
    for (old, new) in before.iter().zip(after) {
        assert_eq!(old.id, new.id, "global order is unchanged");
        assert_eq!(old.title, new.title);
        if old.id.as_str() == card {
            assert_eq!(new.column_id.as_str(), to);
        } else {
            assert_eq!(old.column_id, new.column_id);
        }
    }
}

#[rstest]
#[case("todo")]
#[case("done")]
fn given_add_then_delete_with_returned_id_then_cards_restored(mut board: Board, #[case] column: &str) {
    let before = board.cards().to_vec();
    let id = board.add_card(&column.into(), "Temporary").unwrap();
    assert_eq!(board.cards().len(), before.len() + 1);
    assert_eq!(board.cards().last().unwrap().id, id);

    board.delete_card(&id).unwrap();
    assert_eq!(board.cards(), before.as_slice());
}

#[rstest]
fn given_new_card_then_it_lists_last_in_its_column(mut board: Board) {
    let id = board.add_card(&"todo".into(), "  Review PR  ").unwrap();
    let todo = board.cards_in(&"todo".into());
    assert_eq!(todo.len(), 3);
    assert_eq!(todo[2].id, id);
    assert_eq!(todo[2].title, "Review PR");
}

#[rstest]
fn given_rename_then_only_title_changes(mut board: Board) {
    board.rename_card(&"4".into(), "Create REST endpoints").unwrap();
    let card = board.card(&"4".into()).unwrap();
    assert_eq!(card.title, "Create REST endpoints");
    assert_eq!(card.column_id.as_str(), "in-progress");
}

#[rstest]
#[case("")]
#[case("   ")]
fn given_blank_title_when_renaming_then_rejected(mut board: Board, #[case] title: &str) {
    let before = board.clone();
    assert_eq!(board.rename_card(&"1".into(), title), Err(DomainError::EmptyName));
    assert_eq!(board, before);
}

#[rstest]
fn given_missing_card_then_every_operation_is_rejected(mut board: Board) {
    let before = board.clone();
    let ghost: CardId = "ghost".into();
    assert_eq!(board.delete_card(&ghost), Err(DomainError::CardNotFound(ghost.clone())));
    assert_eq!(board.rename_card(&ghost, "x"), Err(DomainError::CardNotFound(ghost.clone())));
    assert_eq!(
        board.move_card(&ghost, &"done".into(), None),
        Err(DomainError::CardNotFound(ghost.clone()))
    );
    assert_eq!(board, before);
}

#[rstest]
fn given_unknown_destination_when_moving_then_rejected(mut board: Board) {
    let before = board.clone();
    let err = board.move_card(&"1".into(), &"archive".into(), None).unwrap_err();
    assert_eq!(err, DomainError::ColumnNotFound("archive".into()));
    assert_eq!(board, before);
}

#[rstest]
fn given_index_when_moving_then_card_lands_at_position(mut board: Board) {
    board.move_card(&"5".into(), &"todo".into(), Some(1)).unwrap();
    let todo: Vec<_> = board
        .cards_in(&"todo".into())
        .iter()
        .map(|c| c.id.to_string())
        .collect();
    assert_eq!(todo, vec!["1", "5", "2"]);
}

// ============================================================
// BoardService
// ============================================================

#[rstest]
fn given_service_when_applying_intents_then_reports_outcomes(board: Board) {
    let mut svc = BoardService::new(board);

    let applied = svc.apply(BoardIntent::Move {
        id: "2".into(),
        to: "in-progress".into(),
        index: Some(0),
    });
    let ignored = svc.apply(BoardIntent::Add {
        column: "todo".into(),
        title: " ".into(),
    });

    assert_eq!(applied, Outcome::Applied(()));
    assert_eq!(ignored, Outcome::Ignored(DomainError::EmptyName));
    let ids: Vec<_> = svc
        .board()
        .cards_in(&"in-progress".into())
        .iter()
        .map(|c| c.id.to_string())
        .collect();
    assert_eq!(ids, vec!["2", "3", "4"]);
}
