use super::{
    config::GameConfig,
    heading::Heading,
    state::{GameState, Position, Snake},
};

/// Result of advancing the game by one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepResult {
    /// Head position after the advance
    pub new_head: Position,
    /// Whether the head left the playfield this tick
    pub game_over: bool,
}

/// Drives the pure state transitions of a single game
pub struct GameEngine {
    config: GameConfig,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Build the initial state: a short horizontal snake at the cell-aligned
    /// playfield center, heading right
    pub fn reset(&self) -> GameState {
        let cell = self.config.cell_size as i32;
        let width = self.config.width as i32;
        let height = self.config.height as i32;

        let center_x = width / cell / 2 * cell;
        let center_y = height / cell / 2 * cell;

        let snake = Snake::new(
            Position::new(center_x, center_y),
            Heading::Right,
            self.config.initial_snake_length,
            cell,
        );

        GameState::new(snake, width, height, cell)
    }

    /// Advance the snake one cell and test the new head against the playfield
    /// bounds. Once the state is no longer alive this is a no-op; the caller
    /// is expected to stop stepping at that point.
    pub fn step(&self, state: &mut GameState) -> StepResult {
        if !state.alive {
            return StepResult {
                new_head: state.snake.head(),
                game_over: true,
            };
        }

        let new_head = state.snake.advance(state.cell);
        state.ticks += 1;

        if !state.in_bounds(new_head) {
            state.alive = false;
            return StepResult {
                new_head,
                game_over: true,
            };
        }

        StepResult {
            new_head,
            game_over: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset() {
        let engine = GameEngine::new(GameConfig::default());
        let state = engine.reset();

        assert!(state.alive);
        assert_eq!(state.ticks, 0);
        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.snake.head(), Position::new(200, 150));
        assert_eq!(state.snake.heading, Heading::Right);
    }

    #[test]
    fn test_reset_center_is_cell_aligned() {
        let engine = GameEngine::new(GameConfig::new(250, 170));
        let state = engine.reset();

        let head = state.snake.head();
        assert_eq!(head.x % state.cell, 0);
        assert_eq!(head.y % state.cell, 0);
    }

    #[test]
    fn test_step_moves_head_one_cell() {
        let engine = GameEngine::new(GameConfig::new(600, 600));
        let mut state = GameState::new(
            Snake::new(Position::new(100, 100), Heading::Right, 3, 10),
            600,
            600,
            10,
        );

        let result = engine.step(&mut state);

        assert!(!result.game_over);
        assert_eq!(result.new_head, Position::new(110, 100));
        assert_eq!(
            state.snake.body,
            vec![
                Position::new(110, 100),
                Position::new(100, 100),
                Position::new(90, 100),
            ]
        );
        assert_eq!(state.ticks, 1);
    }

    #[test]
    fn test_wall_collision_on_right_edge() {
        let engine = GameEngine::new(GameConfig::new(600, 600));
        let mut state = GameState::new(
            Snake::new(Position::new(590, 100), Heading::Right, 3, 10),
            600,
            600,
            10,
        );

        let result = engine.step(&mut state);

        assert!(result.game_over);
        assert!(!state.alive);
        // The out-of-bounds head is part of the final frozen body
        assert_eq!(result.new_head, Position::new(600, 100));
        assert_eq!(state.snake.head(), Position::new(600, 100));
    }

    #[test]
    fn test_wall_collision_every_edge() {
        let engine = GameEngine::new(GameConfig::small());
        let cases = [
            (Position::new(0, 50), Heading::Left),
            (Position::new(90, 50), Heading::Right),
            (Position::new(50, 0), Heading::Up),
            (Position::new(50, 90), Heading::Down),
        ];

        for (head, heading) in cases {
            let mut state = GameState::new(Snake::new(head, heading, 1, 10), 100, 100, 10);
            let result = engine.step(&mut state);
            assert!(result.game_over, "head {head:?} heading {heading:?}");
            assert!(!state.alive);
        }
    }

    #[test]
    fn test_edges_are_inside_until_crossed() {
        let engine = GameEngine::new(GameConfig::small());
        let mut state = GameState::new(
            Snake::new(Position::new(80, 50), Heading::Right, 1, 10),
            100,
            100,
            10,
        );

        // (90, 50) is the last in-bounds column
        let result = engine.step(&mut state);
        assert!(!result.game_over);
        assert_eq!(state.snake.head(), Position::new(90, 50));

        let result = engine.step(&mut state);
        assert!(result.game_over);
    }

    #[test]
    fn test_frozen_after_game_over() {
        let engine = GameEngine::new(GameConfig::small());
        let mut state = GameState::new(
            Snake::new(Position::new(90, 50), Heading::Right, 3, 10),
            100,
            100,
            10,
        );

        let result = engine.step(&mut state);
        assert!(result.game_over);

        let body_before = state.snake.body.clone();
        let ticks_before = state.ticks;

        let result = engine.step(&mut state);

        assert!(result.game_over);
        assert_eq!(state.snake.body, body_before);
        assert_eq!(state.ticks, ticks_before);
    }

    #[test]
    fn test_reversal_rejected_mid_game() {
        let engine = GameEngine::new(GameConfig::new(600, 600));
        let mut state = GameState::new(
            Snake::new(Position::new(100, 100), Heading::Right, 3, 10),
            600,
            600,
            10,
        );

        state.snake.set_heading(Heading::Left);
        let result = engine.step(&mut state);

        assert_eq!(state.snake.heading, Heading::Right);
        assert_eq!(result.new_head, Position::new(110, 100));
    }
}
