use crate::chess::{Board, Color, Move};
use crate::search::{Eval, InvalidScore, Materialist, Mvv, Options, Order, Score};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use tracing::{debug, instrument};

/// The result of a search.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Report {
    /// The move chosen.
    pub best: Move,
    /// The score of the move chosen.
    pub score: Score,
    /// The number of nodes visited.
    pub nodes: u64,
    /// How many moves were as good as the one chosen.
    pub ties: usize,
}

/// An implementation of [minimax] with [alpha-beta pruning].
///
/// [minimax]: https://www.chessprogramming.org/Minimax
/// [alpha-beta pruning]: https://www.chessprogramming.org/Alpha-Beta
#[derive(Debug)]
pub struct Minimax<E, O> {
    eval: E,
    order: O,
    options: Options,
}

impl Default for Minimax<Materialist, Mvv> {
    fn default() -> Self {
        Self::new(Materialist::new(), Mvv::new(), Options::default())
    }
}

impl<E: Eval, O: Order> Minimax<E, O> {
    /// Constructs [`Minimax`] with the given [`Eval`], [`Order`] and [`Options`].
    pub fn new(eval: E, order: O, options: Options) -> Self {
        Minimax {
            eval,
            order,
            options,
        }
    }

    /// The search [`Options`].
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Searches for the best move for the side to move.
    ///
    /// Returns `None` if no move can be played, or an error if the [`Eval`]
    /// produces a score outside of the ordinary band.
    #[instrument(level = "debug", skip(self, board), err)]
    pub fn search(&self, board: &Board) -> Result<Option<Report>, InvalidScore> {
        let depth = self.options.depth.max(1);
        let maximizing = board.turn() == Color::White;

        let mut nodes = 1;
        let mut best: Option<Score> = None;
        let mut ties = Vec::new();

        for m in self.order.order(board) {
            let mut next = board.clone();
            if next.play(m).is_err() {
                continue;
            }

            // Searching one point past the best so far tells ties from worse moves exactly.
            let (alpha, beta) = match best {
                None => (Score::MIN, Score::MAX),
                Some(s) if maximizing => (s - 1, Score::MAX),
                Some(s) => (Score::MIN, s + 1),
            };

            let score = self.minimax(&next, 1, depth - 1, alpha, beta, &mut nodes)?;

            match best {
                Some(s) if s == score => ties.push(m),
                Some(s) if (score < s) == maximizing => {}
                _ => {
                    best = Some(score);
                    ties = vec![m];
                }
            }
        }

        let Some(score) = best else {
            return Ok(None);
        };

        let mut rng = match self.options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let report = ties.choose(&mut rng).map(|&best| Report {
            best,
            score,
            nodes,
            ties: ties.len(),
        });

        if let Some(r) = &report {
            debug!(depth, best = %r.best, score = %r.score, nodes, ties = r.ties);
        }

        Ok(report)
    }

    fn minimax(
        &self,
        board: &Board,
        ply: i32,
        depth: u8,
        mut alpha: Score,
        mut beta: Score,
        nodes: &mut u64,
    ) -> Result<Score, InvalidScore> {
        *nodes += 1;

        if board.is_over() {
            return match board.winner() {
                Some(Color::White) => Score::mate(ply),
                Some(Color::Black) => Score::mate(-ply),
                _ => Score::new(0),
            };
        } else if depth == 0 {
            return Score::new(self.eval.eval(board));
        }

        let maximizing = board.turn() == Color::White;
        let mut best: Option<Score> = None;

        for m in self.order.order(board) {
            let mut next = board.clone();
            if next.play(m).is_err() {
                continue;
            }

            let score = self.minimax(&next, ply + 1, depth - 1, alpha, beta, nodes)?;

            if maximizing {
                best = best.max(Some(score));
                alpha = alpha.max(score);
            } else {
                best = Some(best.map_or(score, |b| b.min(score)));
                beta = beta.min(score);
            }

            if alpha >= beta {
                break;
            }
        }

        match best {
            Some(s) => Ok(s),
            None => Score::new(self.eval.eval(board)),
        }
    }
}
