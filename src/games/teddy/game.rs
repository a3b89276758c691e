//! AI players and the match runner.

use tracing::{debug, info};

use crate::core::{Configuration, GameRng, PlayerId, PlayerMap};
use crate::error::Result;
use crate::minimax::{Difficulty, DifficultyDepths, MinimaxSearch};

use super::board::Board;
use super::config::TeddyConfig;
use super::difficulties::Difficulties;
use super::events::GameObserver;

/// A minimax-driven player.
#[derive(Clone, Debug)]
pub struct AiPlayer {
    id: PlayerId,
    difficulty: Difficulty,
    search_depth: u16,
    search: MinimaxSearch,
}

impl AiPlayer {
    /// Create a player at `Easy` difficulty.
    pub fn new(id: PlayerId, depths: DifficultyDepths) -> Self {
        let search = MinimaxSearch::new(depths);
        let search_depth = search.depths().depth(Difficulty::Easy);
        Self {
            id,
            difficulty: Difficulty::Easy,
            search_depth,
            search,
        }
    }

    /// Set the difficulty and cache its search depth.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.search_depth = self.search.depths().depth(difficulty);
    }

    /// This player's seat.
    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Current difficulty.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Depth bound used for this player's searches.
    #[must_use]
    pub fn search_depth(&self) -> u16 {
        self.search_depth
    }

    /// Pick the next configuration from `configuration`.
    pub fn take_turn(&mut self, configuration: &Configuration) -> Result<Configuration> {
        self.search.search(configuration, self.search_depth)
    }

    /// Get the search context (for statistics).
    #[must_use]
    pub fn search(&self) -> &MinimaxSearch {
        &self.search
    }
}

/// Result of one finished game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameOutcome {
    /// Board the game started from.
    pub initial: Configuration,

    /// Player who moved first.
    pub first_player: PlayerId,

    /// Difficulties in play.
    pub difficulties: Difficulties,

    /// Every configuration after each turn, in order.
    pub moves: Vec<(PlayerId, Configuration)>,

    /// The player who did not take the last bear.
    pub winner: PlayerId,
}

impl GameOutcome {
    /// The player who took the last bear.
    #[must_use]
    pub fn loser(&self) -> PlayerId {
        self.winner.other()
    }

    /// Number of turns played.
    #[must_use]
    pub fn turns(&self) -> usize {
        self.moves.len()
    }
}

/// Runs AI-vs-AI games and full matchup series.
pub struct TeddyGame {
    config: TeddyConfig,
    players: PlayerMap<AiPlayer>,
    rng: GameRng,
}

impl TeddyGame {
    /// Create a game runner.
    pub fn new(config: TeddyConfig) -> Result<Self> {
        config.validate()?;

        let players = PlayerMap::new(|id| AiPlayer::new(id, config.depths.clone()));
        let rng = GameRng::new(config.seed);

        Ok(Self {
            config,
            players,
            rng,
        })
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &TeddyConfig {
        &self.config
    }

    /// Get a player.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &AiPlayer {
        &self.players[id]
    }

    /// Play one game on a fresh random board.
    pub fn play_game(
        &mut self,
        first_player: PlayerId,
        difficulties: Difficulties,
        observers: &mut [&mut dyn GameObserver],
    ) -> Result<GameOutcome> {
        let mut board_rng = self.rng.fork();
        let board = Board::random(&self.config, &mut board_rng)?;
        self.play_from(board, first_player, difficulties, observers)
    }

    /// Play one game from a given board.
    ///
    /// The board must not be over already.
    pub fn play_from(
        &mut self,
        mut board: Board,
        first_player: PlayerId,
        difficulties: Difficulties,
        observers: &mut [&mut dyn GameObserver],
    ) -> Result<GameOutcome> {
        for id in PlayerId::all() {
            self.players[id].set_difficulty(difficulties.for_player(id));
        }

        let initial = board.configuration().clone();
        debug!(board = %initial, first = %first_player, %difficulties, "starting game");

        let mut moves = Vec::new();
        let mut current = first_player;
        loop {
            let next = self.players[current].take_turn(board.configuration())?;
            board.set_configuration(next.clone());

            for observer in observers.iter_mut() {
                observer.on_turn_taken(current, &next);
            }
            moves.push((current, next));

            if board.is_over() {
                break;
            }
            current = current.other();
        }

        let winner = current.other();
        for observer in observers.iter_mut() {
            observer.on_game_over(winner, difficulties);
        }

        Ok(GameOutcome {
            initial,
            first_player,
            difficulties,
            moves,
            winner,
        })
    }

    /// Play `games_per_matchup` games for every matchup in
    /// [`Difficulties::MATCHUPS`].
    ///
    /// Player 1 starts the first game and the starting seat alternates from
    /// game to game across the whole run.
    pub fn run_all(&mut self, observers: &mut [&mut dyn GameObserver]) -> Result<Vec<GameOutcome>> {
        let total = Difficulties::MATCHUPS.len() * self.config.games_per_matchup as usize;
        let mut outcomes = Vec::with_capacity(total);
        let mut first_player = PlayerId::PLAYER1;

        for difficulties in Difficulties::MATCHUPS {
            for _ in 0..self.config.games_per_matchup {
                if !outcomes.is_empty() {
                    for observer in observers.iter_mut() {
                        observer.on_game_starting();
                    }
                    first_player = first_player.other();
                }

                let outcome = self.play_game(first_player, difficulties, observers)?;
                outcomes.push(outcome);
            }

            info!(%difficulties, games = self.config.games_per_matchup, "matchup complete");
        }

        Ok(outcomes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EASY_EASY: Difficulties = Difficulties::new(Difficulty::Easy, Difficulty::Easy);

    #[test]
    fn test_ai_player_caches_depth() {
        let depths = DifficultyDepths::default();
        let mut player = AiPlayer::new(PlayerId::PLAYER1, depths.clone());

        assert_eq!(player.difficulty(), Difficulty::Easy);
        assert_eq!(player.search_depth(), depths.easy);

        player.set_difficulty(Difficulty::Hard);
        assert_eq!(player.search_depth(), depths.hard);
    }

    #[test]
    fn test_single_bear_game() {
        let mut game = TeddyGame::new(TeddyConfig::default()).unwrap();
        let board = Board::new(Configuration::new([1]));

        let outcome = game
            .play_from(board, PlayerId::PLAYER1, EASY_EASY, &mut [])
            .unwrap();

        // Player 1 is forced to take the last bear
        assert_eq!(outcome.turns(), 1);
        assert_eq!(outcome.loser(), PlayerId::PLAYER1);
        assert_eq!(outcome.winner, PlayerId::PLAYER2);
    }

    #[test]
    fn test_two_bear_game() {
        let mut game = TeddyGame::new(TeddyConfig::default()).unwrap();
        let board = Board::new(Configuration::new([2]));

        let outcome = game
            .play_from(board, PlayerId::PLAYER2, EASY_EASY, &mut [])
            .unwrap();

        assert_eq!(
            outcome.moves,
            vec![
                (PlayerId::PLAYER2, Configuration::new([1])),
                (PlayerId::PLAYER1, Configuration::new([0])),
            ]
        );
        assert_eq!(outcome.winner, PlayerId::PLAYER2);
    }

    #[test]
    fn test_play_from_finished_board_fails() {
        let mut game = TeddyGame::new(TeddyConfig::default()).unwrap();
        let board = Board::new(Configuration::new([0, 0]));

        let result = game.play_from(board, PlayerId::PLAYER1, EASY_EASY, &mut []);
        assert!(result.is_err());
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        assert!(TeddyGame::new(TeddyConfig::new().with_bins(0, 0)).is_err());
    }
}
