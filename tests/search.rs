use lib::chess::{Board, Color, Move, Role, Square};
use lib::search::{Eval, Materialist, Minimax, Mvv, Options, Score};
use test_strategy::proptest;

fn sq(x: u8, y: u8) -> Square {
    Square::new(x, y)
}

fn minimax(depth: u8) -> Minimax<Materialist, Mvv> {
    let options = Options {
        depth,
        seed: Some(42),
    };

    Minimax::new(Materialist::new(), Mvv::new(), options)
}

#[test]
fn search_maximizes_material_for_white() {
    let mut b = Board::empty();
    b.spawn(Color::White, Role::Queen, sq(3, 7)).unwrap();
    b.spawn(Color::Black, Role::Fish, sq(3, 2)).unwrap();
    b.spawn(Color::Black, Role::Elephant, sq(6, 4)).unwrap();

    let report = minimax(1).search(&b).unwrap().unwrap();
    assert_eq!(report.best, Move(sq(3, 7), sq(6, 4)));
    assert_eq!(report.score, Score::new(9 - 2).unwrap());
}

#[test]
fn search_minimizes_material_for_black() {
    let mut b = Board::empty();
    b.spawn(Color::Black, Role::Queen, sq(3, 0)).unwrap();
    b.spawn(Color::White, Role::Fish, sq(3, 5)).unwrap();
    b.spawn(Color::White, Role::Crow, sq(7, 4)).unwrap();
    b.spawn(Color::White, Role::Fish, sq(0, 7)).unwrap();

    b.play(Move(sq(0, 7), sq(0, 6))).unwrap();

    let report = minimax(1).search(&b).unwrap().unwrap();
    assert_eq!(report.best, Move(sq(3, 0), sq(7, 4)));
    assert_eq!(report.score, Score::new(2 + 2 - 9).unwrap());
}

#[test]
fn mate_scores_outrank_material() {
    let mut b = Board::empty();
    b.spawn(Color::White, Role::Queen, sq(0, 7)).unwrap();
    b.spawn(Color::Black, Role::Queen, sq(0, 3)).unwrap();
    b.spawn(Color::Black, Role::King, sq(4, 3)).unwrap();
    b.spawn(Color::Black, Role::Crow, sq(7, 0)).unwrap();
    b.spawn(Color::Black, Role::Fish, sq(4, 0)).unwrap();

    b.play(Move(sq(0, 7), sq(0, 3))).unwrap();
    b.play(Move(sq(4, 0), sq(4, 1))).unwrap();

    let report = minimax(2).search(&b).unwrap().unwrap();
    assert_eq!(report.best, Move(sq(0, 3), sq(4, 3)));
    assert_eq!(report.score, Score::mate(1).unwrap());
    assert!(report.score > Score::new(Score::CEILING - 1).unwrap());
}

#[test]
fn deeper_search_visits_more_nodes() {
    let b = Board::default();
    let shallow = minimax(1).search(&b).unwrap().unwrap();
    let deep = minimax(3).search(&b).unwrap().unwrap();
    assert!(deep.nodes > shallow.nodes);
}

#[proptest(cases = 32)]
fn search_never_does_worse_than_a_static_evaluation_of_its_best_move(b: Board) {
    if let Some(r) = minimax(1).search(&b)? {
        let mut next = b.clone();
        next.play(r.best)?;

        match next.winner() {
            Some(w) => assert_eq!(r.score.mate_distance(), Some(if w == Color::White { 1 } else { -1 })),
            None => assert_eq!(r.score, Score::new(Materialist::new().eval(&next))?),
        }
    }
}
