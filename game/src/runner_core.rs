use serde::{Deserialize, Serialize};

pub const SURFACE_WIDTH: f32 = 800.0;
pub const SURFACE_HEIGHT: f32 = 400.0;

/// Distance between the bottom of the surface and the walkable ground line.
pub const GROUND_MARGIN: f32 = 50.0;

pub const PLAYER_START_X: f32 = 100.0;
pub const PLAYER_SIZE: f32 = 30.0;
pub const PLAYER_GRAVITY: f32 = 0.8;
pub const PLAYER_JUMP_FORCE: f32 = -15.0;

pub const GAME_SPEED: f32 = 5.0;
pub const SCORE_PER_PIXEL: f32 = 0.1;

pub const OBSTACLE_WIDTH: f32 = 30.0;
pub const SPIKE_HEIGHT: f32 = 30.0;
pub const BLOCK_HEIGHT: f32 = 50.0;
pub const MAX_OBSTACLES: usize = 3;

/// Minimum free room to the right edge before another obstacle may spawn.
pub const SPAWN_CLEARANCE: f32 = 300.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ObstacleKind {
    Spike,
    Block,
}

impl ObstacleKind {
    pub fn height(self) -> f32 {
        match self {
            ObstacleKind::Spike => SPIKE_HEIGHT,
            ObstacleKind::Block => BLOCK_HEIGHT,
        }
    }
}

/// A ground hazard. `y` is the ground-aligned baseline: the hitbox (and the
/// rendered shape) extends *upward* from `y` by `height`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Obstacle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub kind: ObstacleKind,
}

impl Obstacle {
    pub fn new(kind: ObstacleKind, x: f32, ground_level: f32) -> Self {
        Self {
            x,
            y: ground_level,
            width: OBSTACLE_WIDTH,
            height: kind.height(),
            kind,
        }
    }

    pub fn top(&self) -> f32 {
        self.y - self.height
    }

    pub fn is_off_screen(&self) -> bool {
        self.x <= -self.width
    }
}

/// The avatar. `y` is the top of the hitbox (coordinates grow downward), so
/// the resting pose is `ground_level - height`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub velocity_y: f32,
    pub gravity: f32,
    pub jump_force: f32,
    pub jumping: bool,
}

impl Player {
    pub fn resting(ground_level: f32) -> Self {
        Self {
            x: PLAYER_START_X,
            y: ground_level - PLAYER_SIZE,
            width: PLAYER_SIZE,
            height: PLAYER_SIZE,
            velocity_y: 0.0,
            gravity: PLAYER_GRAVITY,
            jump_force: PLAYER_JUMP_FORCE,
            jumping: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunnerSnapshot {
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub score: f32,
    pub display_score: u32,
    pub game_over: bool,
}

/// One run of the side-scroller: the player, the obstacle belt, and the
/// score, advanced one tick per animation frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerCore {
    player: Player,
    obstacles: Vec<Obstacle>,
    score: f32,
    game_over: bool,
    surface_width: f32,
    surface_height: f32,
    ground_level: f32,
    game_speed: f32,
    rng: Rng,
}

impl RunnerCore {
    pub fn new(seed: u64) -> Self {
        let ground_level = SURFACE_HEIGHT - GROUND_MARGIN;
        Self {
            player: Player::resting(ground_level),
            obstacles: Vec::new(),
            score: 0.0,
            game_over: false,
            surface_width: SURFACE_WIDTH,
            surface_height: SURFACE_HEIGHT,
            ground_level,
            game_speed: GAME_SPEED,
            rng: Rng::new(seed),
        }
    }

    /// Resets the run to its starting shape: resting player, a single fresh
    /// obstacle at the right edge, zero score. The random stream continues
    /// from wherever it was.
    pub fn initialize_game(&mut self) {
        self.player = Player::resting(self.ground_level);
        self.obstacles.clear();
        self.score = 0.0;
        self.game_over = false;
        self.spawn_obstacle();
    }

    pub fn restart(&mut self) {
        self.initialize_game();
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn score(&self) -> f32 {
        self.score
    }

    /// The score as shown to the player: the floor of the fractional tally.
    pub fn display_score(&self) -> u32 {
        self.score.max(0.0) as u32
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn ground_level(&self) -> f32 {
        self.ground_level
    }

    pub fn surface_width(&self) -> f32 {
        self.surface_width
    }

    pub fn surface_height(&self) -> f32 {
        self.surface_height
    }

    pub fn game_speed(&self) -> f32 {
        self.game_speed
    }

    /// Starts a jump: one impulse, only from the ground, only while running.
    pub fn jump(&mut self) {
        if self.game_over || self.player.jumping {
            return;
        }
        self.player.velocity_y = self.player.jump_force;
        self.player.jumping = true;
    }

    /// One simulation step. A finished run ignores ticks entirely; the frame
    /// loop keeps rendering the frozen final state.
    pub fn tick(&mut self) {
        if self.game_over {
            return;
        }

        self.player.velocity_y += self.player.gravity;
        self.player.y += self.player.velocity_y;

        if self.player.y > self.ground_level - self.player.height {
            self.player.y = self.ground_level - self.player.height;
            self.player.velocity_y = 0.0;
            self.player.jumping = false;
        }

        for obstacle in &mut self.obstacles {
            obstacle.x -= self.game_speed;
        }
        self.obstacles.retain(|obstacle| !obstacle.is_off_screen());

        // The newest obstacle is always the rightmost one: everything moves
        // at the same speed.
        let has_room = self
            .obstacles
            .last()
            .map_or(true, |last| last.x < self.surface_width - SPAWN_CLEARANCE);
        if self.obstacles.len() < MAX_OBSTACLES && has_room {
            self.spawn_obstacle();
        }

        self.score += self.game_speed * SCORE_PER_PIXEL;

        self.check_collisions();
    }

    /// Tests the player against each obstacle in spawn order and ends the
    /// run at the first hit. Returns whether this call ended the run.
    pub fn check_collisions(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        for obstacle in &self.obstacles {
            if Self::overlaps(&self.player, obstacle) {
                self.game_over = true;
                return true;
            }
        }
        false
    }

    pub fn snapshot(&self) -> RunnerSnapshot {
        RunnerSnapshot {
            player: self.player,
            obstacles: self.obstacles.clone(),
            score: self.score,
            display_score: self.display_score(),
            game_over: self.game_over,
        }
    }

    pub fn set_player_for_test(&mut self, player: Player) {
        self.player = player;
    }

    pub fn set_obstacles_for_test(&mut self, obstacles: Vec<Obstacle>) {
        self.obstacles = obstacles;
    }

    fn spawn_obstacle(&mut self) {
        let kind = if self.rng.next_u32() % 2 == 0 {
            ObstacleKind::Spike
        } else {
            ObstacleKind::Block
        };
        self.obstacles
            .push(Obstacle::new(kind, self.surface_width, self.ground_level));
    }

    // AABB overlap with the obstacle box spanning [y - height, y]: the
    // obstacle sits on the ground and extends upward, exactly as rendered.
    fn overlaps(player: &Player, obstacle: &Obstacle) -> bool {
        player.x < obstacle.x + obstacle.width
            && player.x + player.width > obstacle.x
            && player.y < obstacle.y
            && player.y + player.height > obstacle.top()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Rng {
    state: u64,
}

impl Rng {
    fn new(seed: u64) -> Self {
        let state = if seed == 0 { 0x4D59_5DF4_D0F3_3173 } else { seed };
        Self { state }
    }

    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        (x >> 32) as u32 ^ x as u32
    }
}
