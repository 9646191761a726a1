//! A small pursuit game on a grid, for demos, tests and benchmarks.
//!
//! One collector (agent 0) eats pellets while any number of chasers hunt it.
//! Eating a capsule scares every chaser for a while; a scared chaser caught
//! by the collector is sent home. Clearing the board wins, being caught by
//! an active chaser loses.
//!
//! Layouts are plain text: `%` wall, `.` pellet, `o` capsule, `P` collector,
//! `G` chaser.

use minimax_agents::{
    AgentConfig, AgentIndex, AlphaBeta, Evaluation, Evaluator, Game, MoveEvaluator, Random,
    Registry, Strategy,
};
use std::fmt::{self, Display, Formatter};
use std::rc::Rc;
use thiserror::Error;

/// Moves a chaser stays scared after a capsule is eaten.
pub const SCARED_TIME: u8 = 40;

const PELLET_POINTS: i32 = 10;
const CLEAR_POINTS: i32 = 500;
const CAUGHT_POINTS: i32 = -500;
const CHASER_POINTS: i32 = 200;
const TIME_PENALTY: i32 = 1;

pub const DEMO_LAYOUT: &str = "\
%%%%%%%%%%%%%%%%%%%%
%o...%........%...o%
%.%%.%.%%%%%%.%.%%.%
%.%.......G........%
%.%.%%.%%  %%.%%.%.%
%......%    %......%
%.%.%%.%%%%%%.%%.%.%
%.%........P.......%
%.%%.%.%%%%%%.%.%%.%
%o...%........%...o%
%%%%%%%%%%%%%%%%%%%%";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub fn distance(self, other: Pos) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    fn step(self, dir: Dir) -> Pos {
        let (dx, dy) = dir.offset();
        Pos { x: self.x + dx, y: self.y + dy }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Dir {
    North,
    South,
    East,
    West,
    Stop,
}

impl Dir {
    const STEPS: [Dir; 4] = [Dir::North, Dir::South, Dir::East, Dir::West];

    fn offset(self) -> (i32, i32) {
        match self {
            Dir::North => (0, -1),
            Dir::South => (0, 1),
            Dir::East => (1, 0),
            Dir::West => (-1, 0),
            Dir::Stop => (0, 0),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("layout has {0} collectors, expected exactly one")]
    Collectors(usize),
    #[error("unknown layout character '{0}'")]
    Character(char),
    #[error("layout rows have different widths")]
    Ragged,
}

#[derive(Debug, PartialEq, Eq)]
struct Maze {
    width: i32,
    height: i32,
    walls: Vec<bool>,
}

impl Maze {
    fn index(&self, p: Pos) -> usize {
        (p.y * self.width + p.x) as usize
    }

    fn is_open(&self, p: Pos) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height && !self.walls[self.index(p)]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Status {
    Playing,
    Won,
    Lost,
}

#[derive(Clone, Debug)]
pub struct Board {
    maze: Rc<Maze>,
    pellets: Vec<bool>,
    pellets_left: usize,
    capsules: Vec<Pos>,
    agents: Vec<Pos>,
    starts: Vec<Pos>,
    scared: Vec<u8>,
    score: i32,
    status: Status,
}

impl Board {
    pub fn parse(layout: &str) -> Result<Board, LayoutError> {
        let rows: Vec<&str> = layout.lines().filter(|l| !l.is_empty()).collect();
        let width = rows.first().map_or(0, |r| r.chars().count());
        if rows.iter().any(|r| r.chars().count() != width) {
            return Err(LayoutError::Ragged);
        }
        let mut walls = Vec::with_capacity(width * rows.len());
        let mut pellets = Vec::with_capacity(width * rows.len());
        let mut capsules = Vec::new();
        let mut collectors = Vec::new();
        let mut chasers = Vec::new();
        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                let p = Pos { x: x as i32, y: y as i32 };
                walls.push(c == '%');
                pellets.push(c == '.');
                match c {
                    '%' | '.' | ' ' => {}
                    'o' => capsules.push(p),
                    'P' => collectors.push(p),
                    'G' => chasers.push(p),
                    _ => return Err(LayoutError::Character(c)),
                }
            }
        }
        if collectors.len() != 1 {
            return Err(LayoutError::Collectors(collectors.len()));
        }
        let mut agents = collectors;
        agents.extend(chasers);
        Ok(Board {
            maze: Rc::new(Maze { width: width as i32, height: rows.len() as i32, walls }),
            pellets_left: pellets.iter().filter(|&&f| f).count(),
            pellets,
            capsules,
            starts: agents.clone(),
            scared: vec![0; agents.len()],
            agents,
            score: 0,
            status: Status::Playing,
        })
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn pellets_left(&self) -> usize {
        self.pellets_left
    }

    pub fn position(&self, agent: AgentIndex) -> Pos {
        self.agents[agent]
    }

    pub fn is_scared(&self, agent: AgentIndex) -> bool {
        self.scared[agent] > 0
    }

    fn pellets(&self) -> impl Iterator<Item = Pos> + '_ {
        let width = self.maze.width;
        self.pellets
            .iter()
            .enumerate()
            .filter(|&(_, &f)| f)
            .map(move |(i, _)| Pos { x: i as i32 % width, y: i as i32 / width })
    }

    fn nearest_pellet(&self, from: Pos) -> Option<i32> {
        self.pellets().map(|p| p.distance(from)).min()
    }

    fn nearest_capsule(&self, from: Pos) -> Option<i32> {
        self.capsules.iter().map(|p| p.distance(from)).min()
    }

    fn chasers(&self) -> impl Iterator<Item = (Pos, bool)> + '_ {
        self.agents.iter().zip(self.scared.iter()).skip(1).map(|(&p, &t)| (p, t > 0))
    }

    // The collector and a chaser share a cell.
    fn collide(&mut self, chaser: AgentIndex) {
        if self.agents[chaser] != self.agents[0] {
            return;
        }
        if self.scared[chaser] > 0 {
            self.score += CHASER_POINTS;
            self.agents[chaser] = self.starts[chaser];
            self.scared[chaser] = 0;
        } else {
            self.score += CAUGHT_POINTS;
            self.status = Status::Lost;
        }
    }

    fn move_collector(&mut self, dir: Dir) {
        let to = self.agents[0].step(dir);
        self.agents[0] = to;
        self.score -= TIME_PENALTY;
        let i = self.maze.index(to);
        if self.pellets[i] {
            self.pellets[i] = false;
            self.pellets_left -= 1;
            self.score += PELLET_POINTS;
            if self.pellets_left == 0 {
                self.score += CLEAR_POINTS;
                self.status = Status::Won;
                return;
            }
        }
        if let Some(c) = self.capsules.iter().position(|&c| c == to) {
            self.capsules.swap_remove(c);
            for t in self.scared.iter_mut().skip(1) {
                *t = SCARED_TIME;
            }
        }
        for chaser in 1..self.agents.len() {
            if self.status == Status::Playing {
                self.collide(chaser);
            }
        }
    }

    fn move_chaser(&mut self, chaser: AgentIndex, dir: Dir) {
        self.scared[chaser] = self.scared[chaser].saturating_sub(1);
        self.agents[chaser] = self.agents[chaser].step(dir);
        self.collide(chaser);
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        for y in 0..self.maze.height {
            for x in 0..self.maze.width {
                let p = Pos { x, y };
                let c = match self.agents.iter().position(|&a| a == p) {
                    Some(0) => 'P',
                    Some(i) if self.scared[i] > 0 => 'g',
                    Some(_) => 'G',
                    None if !self.maze.is_open(p) => '%',
                    None if self.capsules.contains(&p) => 'o',
                    None if self.pellets[self.maze.index(p)] => '.',
                    None => ' ',
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        write!(f, "score {}", self.score)
    }
}

pub struct Chase;

impl Game for Chase {
    type S = Board;
    type M = Dir;

    fn num_agents(b: &Board) -> usize {
        b.agents.len()
    }

    fn generate_moves(b: &Board, agent: AgentIndex, moves: &mut Vec<Dir>) {
        if b.status != Status::Playing {
            return;
        }
        let from = b.agents[agent];
        moves.extend(Dir::STEPS.iter().copied().filter(|&d| b.maze.is_open(from.step(d))));
        // Chasers may only stand still when boxed in.
        if agent == 0 || moves.is_empty() {
            moves.push(Dir::Stop);
        }
    }

    fn apply(b: &Board, agent: AgentIndex, dir: &Dir) -> Board {
        let mut next = b.clone();
        if agent == 0 {
            next.move_collector(*dir);
        } else {
            next.move_chaser(agent, *dir);
        }
        next
    }

    fn is_win(b: &Board) -> bool {
        b.status == Status::Won
    }

    fn is_lose(b: &Board) -> bool {
        b.status == Status::Lost
    }

    fn notation(_b: &Board, agent: AgentIndex, dir: &Dir) -> Option<String> {
        Some(format!("{}:{:?}", agent, dir))
    }
}

/// The game score as it stands.
pub struct Score;

impl Evaluator for Score {
    type G = Chase;
    fn evaluate(&self, b: &Board) -> Evaluation {
        b.score as Evaluation
    }
}

/// Score plus rewards for nearby pellets, capsules and scared chasers,
/// and penalties for leftover pellets and nearby active chasers.
pub struct Better;

impl Evaluator for Better {
    type G = Chase;
    fn evaluate(&self, b: &Board) -> Evaluation {
        let at = b.agents[0];
        let mut value = b.score as Evaluation;
        if let Some(d) = b.nearest_pellet(at) {
            value += 5.0 / d.max(1) as Evaluation;
        }
        value -= 10.0 * b.pellets_left as Evaluation;
        for (p, scared) in b.chasers() {
            let d = p.distance(at).max(1) as Evaluation;
            if scared {
                value += 200.0 / d;
            } else if d < 2.0 {
                value -= 500.0;
            } else if d < 4.0 {
                value -= 100.0 / d;
            }
        }
        if let Some(d) = b.nearest_capsule(at) {
            value += 10.0 / d.max(1) as Evaluation;
        }
        value
    }
}

/// One-ply heuristic for a reflex collector.
pub struct ReflexHeuristic;

impl MoveEvaluator for ReflexHeuristic {
    type G = Chase;
    fn evaluate_move(&self, b: &Board, agent: AgentIndex, dir: &Dir) -> Evaluation {
        let next = Chase::apply(b, agent, dir);
        let at = next.agents[0];
        let mut value = next.score as Evaluation;
        for (p, scared) in next.chasers() {
            let d = p.distance(at).max(1) as Evaluation;
            if scared {
                value += 100.0 / d;
            } else if d < 2.0 {
                value -= 300.0;
            } else if d < 4.0 {
                value -= 100.0;
            }
        }
        if let Some(d) = next.nearest_pellet(at) {
            value += 5.0 / d.max(1) as Evaluation;
        }
        if next.pellets_left < b.pellets_left {
            value += 100.0;
        }
        value
    }
}

/// The evaluation functions agents can name in their configuration.
pub fn registry() -> Registry<Chase> {
    Registry::new().with("score", Score).with("better", Better)
}

#[allow(dead_code)]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config: AgentConfig = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => "depth=2,evalFn=better".parse()?,
    };
    let board = Board::parse(DEMO_LAYOUT)?;
    let mut collector = AlphaBeta::from_config(&registry(), &config)?;
    let mut chasers: Vec<Random> = (1..Chase::num_agents(&board)).map(Random::new).collect();
    let mut strategies: Vec<&mut dyn Strategy<Chase>> = Vec::new();
    strategies.push(&mut collector);
    strategies.extend(chasers.iter_mut().map(|c| c as &mut dyn Strategy<Chase>));

    let end = minimax_agents::play_game(board, &mut strategies, 2000)?;
    println!("{}", end.state);
    println!("{:?} after {} moves", end.outcome, end.turns);
    Ok(())
}
