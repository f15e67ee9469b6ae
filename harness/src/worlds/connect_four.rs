//! Connect-four lookahead against a fixed opponent policy.
//!
//! The searching side (yellow) explores its own move choices; the red
//! reply comes from a caller-supplied opponent policy, so each node already
//! contains red's answer. A node pairs the game state with yellow's move
//! history; the decoder returns that history.

use std::marker::PhantomData;

use cairn_search::contract::SearchSpaceV1;
use cairn_search::engine::TreeSearchV1;
use cairn_search::frontier::ExploreOrder;

use crate::contract::{DecoderV1, EncodedSearchV1};

/// A player's disc colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscV1 {
    /// The searching side.
    Yellow,
    /// The opponent.
    Red,
}

impl DiscV1 {
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::Yellow => Self::Red,
            Self::Red => Self::Yellow,
        }
    }
}

/// The external game-state abstraction the encoder builds on.
///
/// Implementations must be value types: `apply` returns a fresh state and
/// leaves `self` untouched, so frontier nodes never alias board storage.
pub trait GameStateV1: Clone {
    /// A legal move (for connect four, a column index).
    type Move: Clone;

    /// Legal moves from this state, in a deterministic order.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// The state after the side to play makes `mv`.
    #[must_use]
    fn apply(&self, mv: &Self::Move) -> Self;

    /// Whether the game is over (won or drawn).
    fn is_terminal(&self) -> bool;

    /// The winning side, or `None` while undecided or drawn.
    fn winner(&self) -> Option<DiscV1>;
}

/// The opponent-move function: picks red's reply for a given state.
pub trait OpponentV1<G: GameStateV1> {
    fn choose(&self, state: &G) -> G::Move;
}

impl<G, F> OpponentV1<G> for F
where
    G: GameStateV1,
    F: Fn(&G) -> G::Move,
{
    fn choose(&self, state: &G) -> G::Move {
        self(state)
    }
}

/// One lookahead node: the game state plus yellow's move history.
#[derive(Clone)]
pub struct LookaheadNodeV1<G: GameStateV1> {
    /// Game state after yellow's move and (unless terminal) red's reply.
    pub state: G,
    /// Yellow's moves from the root, oldest first.
    pub yellow_moves: Vec<G::Move>,
}

/// Space exploring yellow's choices with red's replies baked in.
pub struct LookaheadSpaceV1<G, O> {
    opponent: O,
    _game: PhantomData<fn() -> G>,
}

impl<G: GameStateV1, O: OpponentV1<G>> LookaheadSpaceV1<G, O> {
    #[must_use]
    pub fn new(opponent: O) -> Self {
        Self {
            opponent,
            _game: PhantomData,
        }
    }
}

impl<G: GameStateV1, O: OpponentV1<G>> SearchSpaceV1 for LookaheadSpaceV1<G, O> {
    type Node = LookaheadNodeV1<G>;

    fn successors(&self, node: &Self::Node) -> Vec<Self::Node> {
        if node.state.is_terminal() {
            return Vec::new();
        }
        let mut children = Vec::new();
        for mv in node.state.legal_moves() {
            let after_yellow = node.state.apply(&mv);
            let mut yellow_moves = node.yellow_moves.clone();
            yellow_moves.push(mv);
            let state = if after_yellow.is_terminal() {
                after_yellow
            } else {
                let reply = self.opponent.choose(&after_yellow);
                after_yellow.apply(&reply)
            };
            children.push(LookaheadNodeV1 {
                state,
                yellow_moves,
            });
        }
        children
    }

    fn is_goal(&self, node: &Self::Node) -> bool {
        node.state.is_terminal() && node.state.winner() == Some(DiscV1::Yellow)
    }
}

/// Decoder to yellow's move list.
///
/// `None` decodes to an empty move list.
pub struct MoveListDecoderV1<G> {
    _game: PhantomData<fn() -> G>,
}

impl<G> MoveListDecoderV1<G> {
    #[must_use]
    pub fn new() -> Self {
        Self { _game: PhantomData }
    }
}

impl<G> Default for MoveListDecoderV1<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: GameStateV1> DecoderV1 for MoveListDecoderV1<G> {
    type Node = LookaheadNodeV1<G>;
    type Answer = Vec<G::Move>;

    fn decode(&self, node: Option<&Self::Node>) -> Vec<G::Move> {
        node.map(|n| n.yellow_moves.clone()).unwrap_or_default()
    }
}

/// Configure a depth-first search for a winning yellow move sequence.
///
/// Red moves first: the search root is `root` after the opponent's opening
/// reply, with an empty yellow history.
pub fn encode_connect_four<G, O>(
    root: &G,
    opponent: O,
) -> EncodedSearchV1<LookaheadSpaceV1<G, O>, MoveListDecoderV1<G>>
where
    G: GameStateV1,
    O: OpponentV1<G>,
{
    let opening = opponent.choose(root);
    let initial = LookaheadNodeV1 {
        state: root.apply(&opening),
        yellow_moves: Vec::new(),
    };
    let search = TreeSearchV1::new(
        initial,
        LookaheadSpaceV1::new(opponent),
        ExploreOrder::DepthFirst,
    );
    EncodedSearchV1 {
        world_id: "connect_four",
        search,
        decoder: MoveListDecoderV1::default(),
    }
}

/// A concrete connect-four board.
///
/// Columns hold gravity stacks; `run` discs in a line win. Red plays first
/// on an empty board, matching the encoder's red-opens convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardV1 {
    columns: usize,
    rows: usize,
    run: usize,
    stacks: Vec<Vec<DiscV1>>,
    to_play: DiscV1,
    winner: Option<DiscV1>,
}

impl BoardV1 {
    /// An empty board with the given dimensions and winning run length.
    #[must_use]
    pub fn new(columns: usize, rows: usize, run: usize) -> Self {
        Self {
            columns,
            rows,
            run,
            stacks: vec![Vec::new(); columns],
            to_play: DiscV1::Red,
            winner: None,
        }
    }

    /// The regulation 7×6 board, connect four.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(7, 6, 4)
    }

    /// The side whose turn it is.
    #[must_use]
    pub fn to_play(&self) -> DiscV1 {
        self.to_play
    }

    fn disc_at(&self, column: isize, row: isize) -> Option<DiscV1> {
        if column < 0 || row < 0 {
            return None;
        }
        let stack = self.stacks.get(usize::try_from(column).ok()?)?;
        stack.get(usize::try_from(row).ok()?).copied()
    }

    /// Whether the disc just placed at `(column, row)` completes a run.
    fn wins_at(&self, column: usize, row: usize, disc: DiscV1) -> bool {
        let column = isize::try_from(column).unwrap_or(isize::MAX);
        let row = isize::try_from(row).unwrap_or(isize::MAX);
        let directions = [(1, 0), (0, 1), (1, 1), (1, -1)];
        directions.iter().any(|&(dc, dr)| {
            let mut count = 1;
            for sign in [1, -1] {
                let (mut c, mut r) = (column + sign * dc, row + sign * dr);
                while self.disc_at(c, r) == Some(disc) {
                    count += 1;
                    c += sign * dc;
                    r += sign * dr;
                }
            }
            count >= self.run
        })
    }
}

impl GameStateV1 for BoardV1 {
    type Move = usize;

    fn legal_moves(&self) -> Vec<usize> {
        if self.winner.is_some() {
            return Vec::new();
        }
        (0..self.columns)
            .filter(|&column| self.stacks[column].len() < self.rows)
            .collect()
    }

    fn apply(&self, mv: &usize) -> Self {
        let mut next = self.clone();
        let disc = next.to_play;
        next.stacks[*mv].push(disc);
        let row = next.stacks[*mv].len() - 1;
        if next.wins_at(*mv, row, disc) {
            next.winner = Some(disc);
        }
        next.to_play = disc.other();
        next
    }

    fn is_terminal(&self) -> bool {
        self.winner.is_some() || self.stacks.iter().all(|stack| stack.len() >= self.rows)
    }

    fn winner(&self) -> Option<DiscV1> {
        self.winner
    }
}
